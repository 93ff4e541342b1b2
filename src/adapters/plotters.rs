//! Plotters drawing backend.
//!
//! `PlottersSurface` renders onto a 2D cartesian plotters chart over `f64` coordinates.
//! Curves are flattened into polylines; the control handles are drawn as thin lines and
//! the four control points as filled circles in the stroke color.
//!
//! # Example
//! ```rust,no_run
//! use plotters::prelude::*;
//! use stroke_reparam::adapters::plotters::PlottersSurface;
//! use stroke_reparam::{draw_comparison, ComparisonStyle, CubicBezier, PointN};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = BitMapBackend::new("curves.png", (640, 480)).into_drawing_area();
//! root.fill(&WHITE)?;
//! let mut chart = ChartBuilder::on(&root).build_cartesian_2d(0f64..10f64, 0f64..10f64)?;
//!
//! let curve = CubicBezier::new(
//!     PointN::new([1f64, 1f64]),
//!     PointN::new([2f64, 4f64]),
//!     PointN::new([6f64, 4f64]),
//!     PointN::new([8f64, 1f64]),
//! );
//! let mut surface = PlottersSurface::new(&mut chart);
//! draw_comparison(&mut surface, &curve, 2.0, &ComparisonStyle::default())?;
//! root.present()?;
//! # Ok(())
//! # }
//! ```

use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::cubic_bezier::CubicBezier;
use crate::draw::{DrawingSurface, Rgb, StrokeStyle};
use crate::point::PointIndex;

/// Number of line segments a curve is flattened into unless configured otherwise.
pub const DEFAULT_SAMPLES: usize = 256;

/// Radius in pixels of the control point markers.
const MARKER_RADIUS: i32 = 4;

/// A `DrawingSurface` drawing into a plotters chart.
pub struct PlottersSurface<'c, 'a, DB: DrawingBackend> {
    chart: &'c mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    samples: usize,
}

impl<'c, 'a, DB: DrawingBackend> PlottersSurface<'c, 'a, DB> {
    pub fn new(
        chart: &'c mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    ) -> Self {
        PlottersSurface {
            chart,
            samples: DEFAULT_SAMPLES,
        }
    }

    /// Flatten curves into `samples` line segments (at least one).
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples.max(1);
        self
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}

fn shape_style(color: Rgb, width: u32) -> ShapeStyle {
    ShapeStyle {
        color: RGBColor(color.r, color.g, color.b).to_rgba(),
        filled: false,
        stroke_width: width,
    }
}

/// Polyline through `samples + 1` evenly spaced parameter values of `curve`.
pub fn flatten<P>(curve: &CubicBezier<P>, samples: usize) -> Vec<(f64, f64)>
where
    P: PointIndex,
    P::Scalar: Into<f64>,
{
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| {
            let t: P::Scalar = (i as f32 / samples as f32).into();
            to_coord(curve.eval_casteljau(t))
        })
        .collect()
}

fn to_coord<P>(p: P) -> (f64, f64)
where
    P: PointIndex,
    P::Scalar: Into<f64>,
{
    (p.axis(0).into(), p.axis(1).into())
}

impl<'c, 'a, DB, P> DrawingSurface<P> for PlottersSurface<'c, 'a, DB>
where
    DB: DrawingBackend,
    P: PointIndex,
    P::Scalar: Into<f64>,
{
    type Error = DrawingAreaErrorKind<DB::ErrorType>;

    fn draw_cubic_bezier(
        &mut self,
        curve: &CubicBezier<P>,
        style: &StrokeStyle,
    ) -> Result<(), Self::Error> {
        let stroke = shape_style(style.color, style.width);
        let handle = shape_style(style.color, 1);
        let [start, ctrl1, ctrl2, end] = curve.control_points().map(to_coord);

        log::debug!(
            "drawing cubic bezier {:?} -> {:?} with {} samples",
            start,
            end,
            self.samples
        );

        self.chart
            .draw_series(std::iter::once(PathElement::new(
                flatten(curve, self.samples),
                stroke,
            )))?;

        // selection: handles from the anchors to their control points, then the points themselves
        self.chart.draw_series([
            PathElement::new(vec![start, ctrl1], handle),
            PathElement::new(vec![end, ctrl2], handle),
        ])?;
        self.chart.draw_series(
            [start, ctrl1, ctrl2, end]
                .into_iter()
                .map(|coord| Circle::new(coord, MARKER_RADIUS, stroke.filled())),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{draw_comparison, ComparisonStyle, PointN};

    #[test]
    fn flatten_hits_both_anchors() {
        let curve = CubicBezier::new(
            PointN::new([400f64, 400f64]),
            PointN::new([430f64, 430f64]),
            PointN::new([480f64, 480f64]),
            PointN::new([500f64, 400f64]),
        );
        let polyline = flatten(&curve, 16);
        assert_eq!(polyline.len(), 17);
        assert_eq!(polyline[0], (400.0, 400.0));
        assert!((polyline[16].0 - 500.0).abs() < 1e-9);
        assert!((polyline[16].1 - 400.0).abs() < 1e-9);
    }

    #[test]
    fn draws_into_svg() {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (200, 200)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(0f64..1000f64, 0f64..1000f64)
                .unwrap();
            let curve = CubicBezier::new(
                PointN::new([400f64, 400f64]),
                PointN::new([430f64, 430f64]),
                PointN::new([480f64, 480f64]),
                PointN::new([500f64, 400f64]),
            );
            let mut surface = PlottersSurface::new(&mut chart).with_samples(32);
            assert_eq!(surface.samples(), 32);
            draw_comparison(&mut surface, &curve, 2.0, &ComparisonStyle::default()).unwrap();
            root.present().unwrap();
        }
        // reference curve in black, reparameterized curve in red
        let svg = svg.to_uppercase();
        assert!(svg.contains("#000000"));
        assert!(svg.contains("#FF0000"));
        assert!(svg.contains("<CIRCLE"));
    }
}
