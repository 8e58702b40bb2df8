//! SVG overlay plot.
//!
//! Renders the observed scatter and the fitted curve into a single chart with
//! axis labels, legend, and grid. The SVG backend keeps the dependency
//! surface small (no native font/system libraries).

use std::path::Path;

use plotters::prelude::*;

use crate::domain::Observations;
use crate::error::AppError;
use crate::plot::{joint_bounds, pad_range};

const PLOT_SIZE: (u32, u32) = (800, 600);

/// Write the overlay plot to `path`.
pub fn render_svg_plot(
    path: &Path,
    observations: &Observations,
    curve: &[(f64, f64)],
) -> Result<(), AppError> {
    let Some(((x_min, x_max), (y_min, y_max))) = joint_bounds(observations, curve) else {
        return Err(AppError::data("Nothing to plot: no finite points."));
    };
    let (x_min, x_max) = pad_range(x_min, x_max, 0.05);
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_err(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Parametric Curve Fit: Observed vs Fitted",
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| plot_err(path, e))?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(|e| plot_err(path, e))?;

    chart
        .draw_series(
            observations
                .xs
                .iter()
                .zip(observations.ys.iter())
                .map(|(&x, &y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(|e| plot_err(path, e))?
        .label("Observed")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    chart
        .draw_series(LineSeries::new(curve.iter().copied(), RED.stroke_width(2)))
        .map_err(|e| plot_err(path, e))?
        .label("Fitted curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| plot_err(path, e))?;

    root.present().map_err(|e| plot_err(path, e))?;
    Ok(())
}

fn plot_err(path: &Path, e: impl std::fmt::Display) -> AppError {
    AppError::input(format!("Failed to render plot '{}': {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn writes_a_non_empty_svg() {
        let obs = Observations {
            xs: vec![10.0, 20.0, 30.0],
            ys: vec![40.0, 50.0, 45.0],
        };
        let curve = vec![(10.0, 41.0), (20.0, 49.0), (30.0, 44.0)];

        let path = std::env::temp_dir().join(format!("ripplefit-plot-{}.svg", std::process::id()));
        render_svg_plot(&path, &obs, &curve).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn empty_data_is_an_error() {
        let path = std::env::temp_dir().join("ripplefit-empty.svg");
        let err = render_svg_plot(&path, &Observations::default(), &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
    }
}
