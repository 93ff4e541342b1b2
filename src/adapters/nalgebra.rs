//! Nalgebra adapter implementations.
//!
//! Enable this adapter with the `nalgebra` feature to use `nalgebra::SVector<T, D>`
//! as a `Point`. Add `nalgebra` as a direct dependency to construct the vectors
//! in your own code.
//!
//! # Example
//! ```rust,no_run
//! use nalgebra::SVector;
//! use stroke_reparam::CubicBezier;
//!
//! let curve = CubicBezier::new(
//!     SVector::<f64, 2>::new(0.0, 0.0),
//!     SVector::<f64, 2>::new(1.0, 0.0),
//!     SVector::<f64, 2>::new(1.0, 1.0),
//!     SVector::<f64, 2>::new(2.0, 1.0),
//! );
//!
//! let stretched = curve.rescale(0.5).unwrap();
//! # let _ = stretched;
//! ```
//!
//! The scalar type must satisfy `nalgebra::RealField` and `num_traits::Float`
//! (e.g. `f32` or `f64`).

use core::fmt::Debug;

use nalgebra::{RealField, SVector};
use num_traits::Float;

use crate::point::{Point, PointIndex, PointNorm};

impl<T, const D: usize> Point for SVector<T, D>
where
    T: RealField + Float + Default + From<f32> + Debug,
    SVector<T, D>: Default,
{
    type Scalar = T;
}

impl<T, const D: usize> PointIndex for SVector<T, D>
where
    T: RealField + Float + Default + From<f32> + Debug,
    SVector<T, D>: Default,
{
    fn axis(&self, index: usize) -> T {
        self[index]
    }
}

impl<T, const D: usize> PointNorm for SVector<T, D>
where
    T: RealField + Float + Default + From<f32> + Debug,
    SVector<T, D>: Default,
{
    fn squared_length(&self) -> T {
        self.norm_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubicBezier;
    use nalgebra::Vector2;

    #[test]
    fn rescale_svector_curve() {
        let curve = CubicBezier::new(
            Vector2::new(0f64, 1.77f64),
            Vector2::new(2.9f64, 0f64),
            Vector2::new(4.3f64, 3f64),
            Vector2::new(3.2f64, -4f64),
        );
        let rescaled = curve.rescale(-1.5).unwrap();
        assert_eq!(rescaled.start(), curve.start());

        let nsteps: usize = 100;
        for t in 0..=nsteps {
            let t = t as f64 / nsteps as f64;
            let err = rescaled.eval(t * -1.5) - curve.eval(t);
            assert!(err.squared_length() < 1e-18);
        }
        let bounds: [(f64, f64); 2] = curve.bounding_box();
        assert!(bounds[1].0 < -3.9);
    }
}
