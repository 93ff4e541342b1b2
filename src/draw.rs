//! Drawing seam for cubic curves.
//!
//! The curve types never talk to a graphics library directly. Anything that can stroke a
//! cubic Bezier and mark its control points implements `DrawingSurface`; see
//! `adapters::plotters` for a bitmap/SVG backend.

use crate::cubic_bezier::CubicBezier;
use crate::point::Point;
use crate::reparameterize::ReparameterizeError;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Stroke color and width (in backend units, pixels for raster surfaces).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub width: u32,
}

impl StrokeStyle {
    pub const fn new(color: Rgb, width: u32) -> Self {
        StrokeStyle { color, width }
    }
}

/// Styles for drawing a curve next to its reparameterized counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComparisonStyle {
    pub reference: StrokeStyle,
    pub reparameterized: StrokeStyle,
}

impl Default for ComparisonStyle {
    fn default() -> Self {
        ComparisonStyle {
            reference: StrokeStyle::new(Rgb::BLACK, 4),
            reparameterized: StrokeStyle::new(Rgb::RED, 4),
        }
    }
}

/// A vector drawing surface that can render cubic Bezier paths.
pub trait DrawingSurface<P: Point> {
    type Error;

    /// Stroke `curve` with `style` and mark its four control points as selected.
    fn draw_cubic_bezier(
        &mut self,
        curve: &CubicBezier<P>,
        style: &StrokeStyle,
    ) -> Result<(), Self::Error>;
}

/// Failure of [`draw_comparison`]: either the scale was invalid or the surface `E` failed.
#[derive(Debug, thiserror::Error)]
pub enum DrawError<E> {
    #[error(transparent)]
    Reparameterize(#[from] ReparameterizeError),
    #[error("drawing surface failed: {0}")]
    Surface(#[source] E),
}

/// Draw `curve` and the same curve reparameterized by `z` onto `surface`.
///
/// The scale is validated before anything is drawn. Returns the reparameterized curve.
pub fn draw_comparison<P, S>(
    surface: &mut S,
    curve: &CubicBezier<P>,
    z: P::Scalar,
    style: &ComparisonStyle,
) -> Result<CubicBezier<P>, DrawError<S::Error>>
where
    P: Point,
    S: DrawingSurface<P>,
{
    let rescaled = curve.rescale(z)?;
    log::trace!("reparameterized by z = {:?}", z);

    surface
        .draw_cubic_bezier(curve, &style.reference)
        .map_err(DrawError::Surface)?;
    surface
        .draw_cubic_bezier(&rescaled, &style.reparameterized)
        .map_err(DrawError::Surface)?;

    log::debug!("drew reference and reparameterized curve");
    Ok(rescaled)
}
