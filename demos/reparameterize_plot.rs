extern crate plotters;
use plotters::prelude::*;

extern crate stroke_reparam;
use stroke_reparam::adapters::plotters::PlottersSurface;
use stroke_reparam::{draw_comparison, ComparisonStyle, CubicBezier, PointN};

/// Scale factor applied to the reference curve.
const SCALE: f64 = 0.1;
const OUTPUT: &str = "reparameterized_cubic_bezier.png";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let curve = CubicBezier::new(
        PointN::new([400f64, 400f64]),
        PointN::new([430f64, 430f64]),
        PointN::new([480f64, 480f64]),
        PointN::new([500f64, 400f64]),
    );

    // frame the view around the reference curve; the reparameterized curve
    // extrapolates far beyond it and is clipped like on a canvas
    let bounds: [(f64, f64); 2] = curve.bounding_box();
    let margin = 400.0;
    let (xmin, xmax) = (bounds[0].0 - margin, bounds[0].1 + margin);
    let (ymin, ymax) = (bounds[1].0 - margin, bounds[1].1 + margin);

    let root = BitMapBackend::new(OUTPUT, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Cubic Bezier reparameterized by z = {}", SCALE),
            ("sans-serif", 21).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(xmin..xmax, ymin..ymax)?;

    chart.configure_mesh().draw()?;

    let rescaled = {
        let mut surface = PlottersSurface::new(&mut chart);
        draw_comparison(&mut surface, &curve, SCALE, &ComparisonStyle::default())?
    };

    root.present()?;

    for (i, (p, q)) in curve
        .control_points()
        .iter()
        .zip(rescaled.control_points())
        .enumerate()
    {
        println!(
            "P{}: ({:.4}, {:.4}) -> ({:.4}, {:.4})",
            i + 1,
            p.x(),
            p.y(),
            q.x(),
            q.y()
        );
    }
    log::info!("wrote {}", OUTPUT);

    Ok(())
}
