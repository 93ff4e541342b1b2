//! Reparameterization of cubic Bézier curves.
//!
//! A cubic Bézier `B` with control points `[p1, p2, p3, p4]` can be rewritten for a scaled
//! curve parameter: for any nonzero `z`, the curve returned by
//! [`CubicBezier::rescale`] (or the free function [`reparameterize()`]) satisfies
//! `B'(t · z) == B(t)`. The start anchor stays in place, the remaining control points follow
//! from a closed form in `z`.
//!
//! The crate is `#![no_std]` unless the `std` feature is enabled, does not allocate, and is
//! generic over point types through the small [`Point`] trait family. Drawing is kept behind
//! the [`DrawingSurface`] trait; the `plotters` feature provides an implementation.
//!
//! ```
//! use stroke_reparam::{CubicBezier, PointN, ReparameterizeError};
//!
//! let curve = CubicBezier::new(
//!     PointN::new([400f64, 400f64]),
//!     PointN::new([430f64, 430f64]),
//!     PointN::new([480f64, 480f64]),
//!     PointN::new([500f64, 400f64]),
//! );
//! let rescaled = curve.rescale(0.1)?;
//! assert_eq!(rescaled.start(), curve.start());
//!
//! assert_eq!(curve.rescale(0.0), Err(ReparameterizeError::ZeroScale));
//! # Ok::<(), ReparameterizeError>(())
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod adapters;
pub mod cubic_bezier;
pub mod draw;
pub mod point;
pub mod point_generic;
pub mod quadratic_bezier;
pub mod reparameterize;

pub use cubic_bezier::CubicBezier;
pub use draw::{draw_comparison, ComparisonStyle, DrawError, DrawingSurface, Rgb, StrokeStyle};
pub use point::{Point, PointIndex, PointNorm};
pub use point_generic::PointN;
pub use quadratic_bezier::QuadraticBezier;
pub use reparameterize::{reparameterize, rescale_weights, ReparameterizeError, ScaleFactor};

/// Tolerance for degeneracy checks (vanishing polynomial coefficients, squared distances).
pub const EPSILON: f32 = 1e-10;
