use core::fmt::Debug;
use core::ops::{Add, Index, Mul, Sub};

use num_traits::Float;

use super::point::{Point, PointIndex, PointNorm};

/// Point with dimensions of constant generic size N and of generic type T
/// (Implemented as Newtype Pattern on an array
/// see book or https://www.worthe-it.co.za/blog/2020-10-31-newtype-pattern-in-rust.html)
/// This type only interacts with the library through
/// the point traits, so you are free to use your own
/// Point/Coord/Vec structures instead by implementing the (small) traits
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointN<T, const N: usize>([T; N]);

impl<T, const N: usize> PointN<T, N> {
    pub fn new(array: [T; N]) -> Self {
        PointN(array)
    }

    pub fn into_inner(self) -> [T; N] {
        self.0
    }
}

impl<T: Copy> PointN<T, 2> {
    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }
}

/// Initialize with the Default value for the underlying type
impl<T: Default + Copy, const N: usize> Default for PointN<T, N> {
    fn default() -> Self {
        PointN([T::default(); N])
    }
}

impl<T, const N: usize> From<[T; N]> for PointN<T, N> {
    fn from(array: [T; N]) -> Self {
        PointN(array)
    }
}

impl<T> From<(T, T)> for PointN<T, 2> {
    fn from((x, y): (T, T)) -> Self {
        PointN([x, y])
    }
}

impl<T, const N: usize> Index<usize> for PointN<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> Add for PointN<T, N>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, other: PointN<T, N>) -> PointN<T, N> {
        PointN(core::array::from_fn(|i| self.0[i] + other.0[i]))
    }
}

impl<T, const N: usize> Sub for PointN<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, other: PointN<T, N>) -> PointN<T, N> {
        PointN(core::array::from_fn(|i| self.0[i] - other.0[i]))
    }
}

impl<T, const N: usize> Mul<T> for PointN<T, N>
where
    // scaling multiplies every component T * T => T
    T: Mul<T, Output = T> + Copy,
{
    type Output = PointN<T, N>;

    fn mul(self, rhs: T) -> PointN<T, N> {
        PointN(self.0.map(|c| c * rhs))
    }
}

impl<T, const N: usize> IntoIterator for PointN<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<Self::Item, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.0)
    }
}

impl<T, const N: usize> Point for PointN<T, N>
where
    T: Float + Default + From<f32> + Debug,
{
    type Scalar = T;
}

impl<T, const N: usize> PointIndex for PointN<T, N>
where
    T: Float + Default + From<f32> + Debug,
{
    fn axis(&self, index: usize) -> T {
        self.0[index]
    }
}

impl<T, const N: usize> PointNorm for PointN<T, N>
where
    T: Float + Default + From<f32> + Debug,
{
    fn squared_length(&self) -> T {
        self.0.iter().fold(T::zero(), |acc, c| acc + *c * *c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = PointN::new([1f64, 2f64, 3f64]);
        let b = PointN::new([0.5f64, -2f64, 4f64]);

        assert_eq!(a + b, PointN::new([1.5, 0.0, 7.0]));
        assert_eq!(a - b, PointN::new([0.5, 4.0, -1.0]));
        assert_eq!(a * 2.0, PointN::new([2.0, 4.0, 6.0]));
    }

    #[test]
    fn norm_and_axes() {
        // 3-4-5 triangle
        let p: PointN<f64, 2> = (3f64, 4f64).into();
        assert_eq!(p.x(), 3.0);
        assert_eq!(p.y(), 4.0);
        assert_eq!(p.axis(1), p[1]);
        assert_eq!(p.squared_length(), 25.0);
        assert_eq!(p.length(), 5.0);
        assert_eq!(p.into_iter().sum::<f64>(), 7.0);
    }

    #[test]
    fn default_is_origin() {
        let p: PointN<f32, 3> = PointN::default();
        assert_eq!(p.into_inner(), [0.0; 3]);
    }
}
