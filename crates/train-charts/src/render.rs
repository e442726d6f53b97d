//! Chart rendering via the plotters SVG backend.
//!
//! Text stays native SVG, so no system font stack is involved.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use plotters::prelude::*;

use crate::curve::ReferenceCurve;
use crate::logs::{LossSample, TimingSample};

const CHART_SIZE: (u32, u32) = (900, 600);

/// Render the per-epoch training-loss line chart to `path`.
pub fn render_loss_chart(samples: &[LossSample], path: &Path) -> Result<()> {
    ensure!(!samples.is_empty(), "no samples to plot");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let x_min = samples.iter().map(|s| s.epoch).min().unwrap_or(0);
    let x_max = samples.iter().map(|s| s.epoch).max().unwrap_or(0);
    let y_min = samples.iter().map(|s| s.loss).fold(f64::INFINITY, f64::min);
    let y_max = samples
        .iter()
        .map(|s| s.loss)
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = ((y_max - y_min) * 0.05).max(1e-9);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Training Loss Over Epochs", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_min..x_max + 1, (y_min - pad)..(y_max + pad))?;
    chart.configure_mesh().x_desc("Epoch").y_desc("Loss").draw()?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.epoch, s.loss)),
            &BLUE,
        ))?
        .label("Train Loss")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &BLUE));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Render the log-log runtime chart to `path`: the measured series with point
/// markers plus the dashed reference curves, all scaled by `scale`.
pub fn render_scaling_chart(samples: &[TimingSample], scale: f64, path: &Path) -> Result<()> {
    ensure!(!samples.is_empty(), "no samples to plot");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let sizes: Vec<u64> = samples.iter().map(|s| s.size).collect();
    let curves: Vec<(ReferenceCurve, Vec<(u64, f64)>)> = ReferenceCurve::ALL
        .iter()
        .map(|&curve| (curve, curve.points(&sizes, scale)))
        .collect();

    // Axis bounds cover the measured points and every drawn curve point.
    let x_min = sizes.iter().copied().min().unwrap_or(1) as f64;
    let x_max = sizes.iter().copied().max().unwrap_or(1) as f64;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for sample in samples {
        y_min = y_min.min(sample.seconds);
        y_max = y_max.max(sample.seconds);
    }
    for (_, points) in &curves {
        for &(_, y) in points {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Time vs Size", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(
            (x_min / 2.0..x_max * 2.0).log_scale(),
            (y_min / 2.0..y_max * 2.0).log_scale(),
        )?;
    chart
        .configure_mesh()
        .x_desc("Size")
        .y_desc("Time (seconds)")
        .draw()?;

    let measured: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| (s.size as f64, s.seconds))
        .collect();
    chart
        .draw_series(LineSeries::new(measured.iter().copied(), &BLUE))?
        .label("Time vs Size")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &BLUE));
    chart.draw_series(PointSeries::of_element(
        measured.iter().copied(),
        3,
        &BLUE,
        &|coord, size, style| Circle::new(coord, size, style.filled()),
    ))?;

    let palette = [RED, GREEN, MAGENTA];
    for ((curve, points), color) in curves.iter().zip(palette) {
        if points.is_empty() {
            continue;
        }
        chart
            .draw_series(DashedLineSeries::new(
                points.iter().map(|&(n, y)| (n as f64, y)),
                6,
                4,
                color.stroke_width(1),
            ))?
            .label(curve.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(1))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn loss_samples() -> Vec<LossSample> {
        (0..10)
            .map(|epoch| LossSample {
                epoch,
                loss: 2.0 / (epoch + 1) as f64,
            })
            .collect()
    }

    fn timing_samples() -> Vec<TimingSample> {
        vec![
            TimingSample {
                size: 4,
                seconds: 0.000089597,
            },
            TimingSample {
                size: 64,
                seconds: 0.000335518,
            },
            TimingSample {
                size: 1024,
                seconds: 0.006403285,
            },
            TimingSample {
                size: 16384,
                seconds: 0.138928595,
            },
        ]
    }

    #[test]
    fn loss_chart_is_a_labeled_svg() {
        let td = tempdir().unwrap();
        let path = td.path().join("loss_plot.svg");

        render_loss_chart(&loss_samples(), &path).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Training Loss Over Epochs"));
        assert!(svg.contains("Train Loss"));
        assert!(svg.contains("Epoch"));
    }

    #[test]
    fn loss_chart_handles_a_single_flat_sample() {
        let td = tempdir().unwrap();
        let path = td.path().join("one.svg");

        render_loss_chart(
            &[LossSample {
                epoch: 0,
                loss: 1.0,
            }],
            &path,
        )
        .unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn scaling_chart_draws_every_reference_curve() {
        let td = tempdir().unwrap();
        let path = td.path().join("time_vs_size.svg");

        render_scaling_chart(&timing_samples(), 1e-6, &path).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Time vs Size"));
        assert!(svg.contains("n log n"));
        assert!(svg.contains("n²"));
        assert!(svg.contains("Time (seconds)"));
    }

    #[test]
    fn size_one_omits_the_linearithmic_curve() {
        let td = tempdir().unwrap();
        let path = td.path().join("tiny.svg");

        render_scaling_chart(
            &[TimingSample {
                size: 1,
                seconds: 0.5,
            }],
            1e-6,
            &path,
        )
        .unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(!svg.contains("n log n"));
        assert!(svg.contains("n²"));
    }

    #[test]
    fn empty_input_is_an_error() {
        let td = tempdir().unwrap();
        let path = td.path().join("never.svg");

        assert!(render_loss_chart(&[], &path).is_err());
        assert!(render_scaling_chart(&[], 1e-6, &path).is_err());
        assert!(!path.exists());
    }
}
