use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// Trait defined over generic points P which themselves are generic over their `Scalar`.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing it requires mostly wrapping.
/// The trait is kept minimal to make integration with other libraries easy;
/// component access and norms live in `PointIndex` and `PointNorm`.
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
{
    type Scalar: Float + Default + From<f32> + Debug;
}

/// Component access on a `Point`.
pub trait PointIndex: Point {
    /// Returns the component of the Point on its axis corresponding to index e.g. [0, 1, 2] -> [x, y, z]
    fn axis(&self, index: usize) -> Self::Scalar;
}

/// Euclidean norm of a `Point` interpreted as a vector.
pub trait PointNorm: Point {
    fn squared_length(&self) -> Self::Scalar;

    fn length(&self) -> Self::Scalar {
        self.squared_length().sqrt()
    }
}
