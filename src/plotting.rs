//! Plot rendering for beam trajectories.
//!
//! Presentation only: consumes labeled (x, y) series and draws them; no
//! computation happens here. NaN samples (x values past a particle's
//! reachable arc) are dropped at this boundary because the backend cannot
//! draw them; the computational series keep them.

use plotters::prelude::*;

use crate::beam::BeamTrajectory;

/// Render labeled beam trajectories as one line plot with a legend,
/// written to `file_path` as a PNG.
pub fn render_beam(
    trajectories: &[BeamTrajectory],
    file_path: &str,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(file_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    // Axis bounds over the finite samples of every series
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for trajectory in trajectories {
        for (&x, &y) in trajectory.series.xs.iter().zip(trajectory.series.ys.iter()) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if x_min > x_max || y_min > y_max {
        return Err("no finite samples to plot".into());
    }
    if x_min == x_max {
        x_max = x_min + 1.0;
    }
    if y_min == y_max {
        y_max = y_min + 1.0;
    }

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart.configure_mesh().x_desc("x (m)").y_desc("y (m)").draw()?;

    for (idx, trajectory) in trajectories.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let points = trajectory
            .series
            .xs
            .iter()
            .zip(trajectory.series.ys.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| (x, y));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(trajectory.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::beam_trajectories;

    #[test]
    fn test_render_beam_writes_png() {
        let beam = beam_trajectories(&[1.0, 2.0, 3.0], 1.0, 1.0, 0.0, 1.5, 200);
        let path = std::env::temp_dir().join("ion_beam_engine_render_test.png");
        let path_str = path.to_str().unwrap();

        render_beam(&beam, path_str).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_render_beam_with_nan_tail() {
        // x range runs past the reachable arc; the NaN tail must not break rendering
        let beam = beam_trajectories(&[1.0], 1.0, 1.0, 0.0, 3.0, 300);
        assert!(beam[0].series.ys.iter().any(|y| y.is_nan()));

        let path = std::env::temp_dir().join("ion_beam_engine_render_nan_test.png");
        render_beam(&beam, path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_render_beam_all_nan_is_error() {
        let beam = beam_trajectories(&[1.0], 1.0, 1.0, 5.0, 6.0, 10);
        let path = std::env::temp_dir().join("ion_beam_engine_render_empty_test.png");

        let result = render_beam(&beam, path.to_str().unwrap());
        assert!(result.is_err());
        let _ = std::fs::remove_file(&path);
    }
}
