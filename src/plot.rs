use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::TRANSPARENT;
use tracing::info;

use crate::channel::{Channel, Sensor};
use crate::config::PlotConfig;
use crate::error::GaitError;
use crate::trial::metadata::TrialMetadata;
use crate::trial::signal::{Signal, SAMPLE_RATE_HZ};

/// Shared y-axis range per sensor group, so all accelerometer plots of one
/// run are directly comparable, and likewise all rotation plots. A group
/// with no selected channel has no range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupLimits {
    pub accelerometer: Option<(f64, f64)>,
    pub rotation: Option<(f64, f64)>,
}

impl GroupLimits {
    pub fn for_sensor(&self, sensor: Sensor) -> Option<(f64, f64)> {
        match sensor {
            Sensor::Accelerometer => self.accelerometer,
            Sensor::Rotation => self.rotation,
        }
    }
}

/// Min/max over all selected columns of each group, padded by the group's
/// margin.
pub fn group_limits(
    signal: &Signal,
    channels: &[Channel],
    acc_margin: f64,
    rot_margin: f64,
) -> GroupLimits {
    GroupLimits {
        accelerometer: padded_range(signal, channels, Sensor::Accelerometer, acc_margin),
        rotation: padded_range(signal, channels, Sensor::Rotation, rot_margin),
    }
}

fn padded_range(
    signal: &Signal,
    channels: &[Channel],
    sensor: Sensor,
    margin: f64,
) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for channel in channels.iter().filter(|c| c.sensor == sensor) {
        for v in signal.column(channel.column) {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min - margin, max + margin))
    } else {
        None
    }
}

/// Render one `<TOKEN>.svg` per channel into `out_dir`. Returns the paths
/// written, in channel order.
pub fn render_channel_plots(
    out_dir: &Path,
    signal: &Signal,
    metadata: &TrialMetadata,
    channels: &[Channel],
    cfg: &PlotConfig,
) -> Result<Vec<PathBuf>, GaitError> {
    let limits = group_limits(signal, channels, cfg.acc_margin, cfg.rot_margin);
    let mut written = Vec::with_capacity(channels.len());
    for &channel in channels {
        // The channel itself contributes to its group's range, so a selected
        // channel always finds one.
        let Some((y_min, y_max)) = limits.for_sensor(channel.sensor) else {
            continue;
        };
        let path = out_dir.join(format!("{}.svg", channel.token()));
        render_one(&path, signal, metadata, channel, y_min, y_max, cfg).map_err(|e| {
            GaitError::Plot {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        info!(channel = channel.token(), path = %path.display(), "wrote channel plot");
        written.push(path);
    }
    Ok(written)
}

fn render_one(
    path: &Path,
    signal: &Signal,
    metadata: &TrialMetadata,
    channel: Channel,
    y_min: f64,
    y_max: f64,
    cfg: &PlotConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let duration = signal.duration_secs();
    let x_max = if duration > 0.0 { duration } else { 1.0 };

    let root = SVGBackend::new(path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&TRANSPARENT)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("time (s)")
        .y_desc(channel.sensor.unit_label())
        .y_labels(6)
        .label_style(("sans-serif", 15))
        .axis_desc_style(("sans-serif", 20))
        .draw()?;

    // One shaded band plus dashed edges per footstep of the channel's foot.
    for interval in metadata.foot_activity(channel.side) {
        let x0 = interval.start as f64 / SAMPLE_RATE_HZ;
        let x1 = interval.end as f64 / SAMPLE_RATE_HZ;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, y_min), (x1, y_max)],
            GREEN.mix(0.3).filled(),
        )))?;
        for x in [x0, x1] {
            chart.draw_series(DashedLineSeries::new(
                [(x, y_min), (x, y_max)],
                4,
                4,
                ShapeStyle::from(&BLACK).stroke_width(1),
            ))?;
        }
    }

    chart.draw_series(LineSeries::new(signal.series(channel), &BLUE))?;

    root.present()?;
    Ok(())
}
