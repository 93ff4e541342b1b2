//! Reparameterization of cubic Bezier control points under a change of parameter scale.
//!
//! Given the control points `p1..p4` of a cubic curve `B` and a nonzero scale `z`,
//! the rescaled control points describe the curve `B'` with
//! ```B'(t · z) = B(t)```, i.e. `B'(t) = B(t / z)`.
//! For `z > 1` the new curve covers the leading `1/z` fraction of the old one on `[0, 1]`,
//! for `0 < z < 1` it extrapolates beyond the end anchor, negative `z` runs backwards
//! from the start anchor. Per axis the new weights are
//! ```text
//! p1' = p1
//! p2' = ((z-1)/z)·p1 + (1/z)·p2
//! p3' = ((z²-2z+1)/z²)·p1 + (2(z-1)/z²)·p2 + (1/z²)·p3
//! p4' = ((z³-3z²+3z-1)/z³)·p1 + (3(z-1)²/z³)·p2 + (3(z-1)/z³)·p3 + (1/z³)·p4
//! ```
//! With `s = 1/z` and `r = 1 - s = (z-1)/z` these are the cubic Bernstein weights in `(r, s)`,
//! which is how they are evaluated here.

use core::ops::{Add, Mul};

use num_traits::Float;

use crate::point::Point;

/// Error returned when a reparameterization has no valid result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReparameterizeError {
    /// The scale factor was zero, every rescaled weight would divide by zero.
    #[error("scale factor must be nonzero, a zero scale has no reparameterized curve")]
    ZeroScale,
}

/// A nonzero scale factor `z` for the curve parameter.
///
/// Only exact zero (`0.0` or `-0.0`) is rejected. Negative, large, infinite or NaN
/// values are accepted and propagate through the arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor<S>(S);

impl<S: Float> ScaleFactor<S> {
    /// Wrap `z`. Fails with `ZeroScale` for `0.0` and `-0.0`.
    pub fn new(z: S) -> Result<Self, ReparameterizeError> {
        if z == S::zero() {
            return Err(ReparameterizeError::ZeroScale);
        }
        Ok(ScaleFactor(z))
    }

    /// The scale that leaves every curve unchanged.
    pub fn identity() -> Self {
        ScaleFactor(S::one())
    }

    /// The raw factor, never zero.
    pub fn get(self) -> S {
        self.0
    }

    /// The inverse scale `1/z`. Fails when `z` is infinite.
    pub fn recip(self) -> Result<Self, ReparameterizeError> {
        ScaleFactor::new(self.0.recip())
    }

    /// Scale equivalent to rescaling by `self` first and `next` afterwards (`z1 · z2`).
    /// Fails if the product underflows to zero.
    pub fn then(self, next: Self) -> Result<Self, ReparameterizeError> {
        ScaleFactor::new(self.0 * next.0)
    }
}

/// Rescale the four Bernstein weights of a cubic by `scale`.
///
/// `W` may be a single coordinate (one axis of the control points) or a whole point,
/// the formula is the same linear combination either way. The first weight is
/// returned untouched.
pub fn rescale_weights<W, S>(weights: [W; 4], scale: ScaleFactor<S>) -> [W; 4]
where
    W: Copy + Add<W, Output = W> + Mul<S, Output = W>,
    S: Float + From<f32>,
{
    let [w1, w2, w3, w4] = weights;
    let two: S = 2.0f32.into();
    let three: S = 3.0f32.into();

    // s = 1/z, r = (z-1)/z
    let s = scale.get().recip();
    let r = S::one() - s;
    let (r2, s2) = (r * r, s * s);

    [
        w1,
        w1 * r + w2 * s,
        w1 * r2 + w2 * (two * r * s) + w3 * s2,
        w1 * (r2 * r) + w2 * (three * r2 * s) + w3 * (three * r * s2) + w4 * (s2 * s),
    ]
}

/// Reparameterize the control points `[P1, P2, P3, P4]` of a cubic Bezier by `z`.
///
/// Returns `ReparameterizeError::ZeroScale` for `z == 0`. Non-finite coordinates are not
/// validated and propagate into the result.
pub fn reparameterize<P>(points: [P; 4], z: P::Scalar) -> Result<[P; 4], ReparameterizeError>
where
    P: Point,
{
    Ok(rescale_weights(points, ScaleFactor::new(z)?))
}
