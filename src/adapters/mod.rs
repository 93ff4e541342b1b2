//! Optional adapters for external libraries.
//!
//! Enable feature flags to pull them in:
//! - `nalgebra`: `Point` impls for `nalgebra::SVector`
//! - `plotters`: a `DrawingSurface` rendering into a plotters chart

#[cfg(feature = "nalgebra")]
pub mod nalgebra;

#[cfg(feature = "plotters")]
pub mod plotters;
