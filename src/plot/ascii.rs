//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - a quick visual sanity check right in the terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed points: `o`
//! - fitted curve samples: `·`

use crate::domain::Observations;
use crate::plot::{joint_bounds, pad_range};

/// Render the observed scatter with the fitted curve overlaid.
pub fn render_preview(
    observations: &Observations,
    curve: &[(f64, f64)],
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let Some(((x_min, x_max), (y_min, y_max))) = joint_bounds(observations, curve) else {
        return String::from("(nothing to plot)\n");
    };
    let (x_min, x_max) = pad_range(x_min, x_max, 0.05);
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the curve first (so points can overlay).
    for &(x, y) in curve {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        let cx = map_x(x, x_min, x_max, width);
        let cy = map_y(y, y_min, y_max, height);
        grid[cy][cx] = '·';
    }

    for (&x, &y) in observations.xs.iter().zip(observations.ys.iter()) {
        let cx = map_x(x, x_min, x_max, width);
        let cy = map_y(y, y_min, y_max, height);
        grid[cy][cx] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.2}, {x_max:.2}] | y=[{y_min:.2}, {y_max:.2}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn map_x(v: f64, min: f64, max: f64, width: usize) -> usize {
    let u = (v - min) / (max - min);
    clamp_cell(u * (width - 1) as f64, width)
}

fn map_y(v: f64, min: f64, max: f64, height: usize) -> usize {
    // Row 0 is the top of the plot.
    let u = (v - min) / (max - min);
    clamp_cell((1.0 - u) * (height - 1) as f64, height)
}

fn clamp_cell(v: f64, len: usize) -> usize {
    if !v.is_finite() {
        return 0;
    }
    (v.round() as isize).clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> (Observations, Vec<(f64, f64)>) {
        let obs = Observations {
            xs: vec![10.0, 20.0, 30.0],
            ys: vec![40.0, 50.0, 45.0],
        };
        let curve = vec![(10.0, 41.0), (20.0, 49.0), (30.0, 44.0)];
        (obs, curve)
    }

    #[test]
    fn output_is_deterministic() {
        let (obs, curve) = sample_data();
        let a = render_preview(&obs, &curve, 40, 12);
        let b = render_preview(&obs, &curve, 40, 12);
        assert_eq!(a, b);
    }

    #[test]
    fn grid_has_requested_dimensions() {
        let (obs, curve) = sample_data();
        let text = render_preview(&obs, &curve, 40, 12);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13); // header + rows
        assert!(lines[1..].iter().all(|l| l.chars().count() == 40));
    }

    #[test]
    fn observed_points_are_drawn() {
        let (obs, curve) = sample_data();
        let text = render_preview(&obs, &curve, 40, 12);
        assert!(text.contains('o'));
        assert!(text.contains('·'));
    }

    #[test]
    fn empty_input_renders_a_placeholder() {
        let text = render_preview(&Observations::default(), &[], 40, 12);
        assert_eq!(text, "(nothing to plot)\n");
    }
}
