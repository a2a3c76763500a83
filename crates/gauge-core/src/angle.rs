// File: crates/gauge-core/src/angle.rs
// Summary: Start/end angle resolution and per-series angular slices.

use std::collections::HashSet;

use crate::config::{GaugeConfig, GaugeKind};
use crate::geometry::clamp;
use crate::series::GaugeSeries;
use crate::types::{RenderState, SeriesAngle, SeriesArc};

/// Signed start/end angles of the gauge arc. Never wrapped into `[0, 2π)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedAngles {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ResolvedAngles {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Full circles run `arc_length` from the start; partial gauges mirror the start angle.
pub fn resolve(config: &GaugeConfig, state: &RenderState) -> ResolvedAngles {
    let start_angle = state.start_angle;
    let end_angle = if config.full_circle {
        start_angle + state.arc_length
    } else {
        -start_angle
    };
    ResolvedAngles { start_angle, end_angle }
}

/// Fraction of the gauge range covered by `value`, clamped to `[0, 1]`.
fn value_ratio(config: &GaugeConfig, value: f64) -> f64 {
    let range = config.max - config.min;
    if !(range > 0.0) || !value.is_finite() {
        return 0.0;
    }
    clamp((value - config.min) / range, 0.0, 1.0)
}

/// Angular slice of every series, in input order.
///
/// Multi-arc series each sweep from the start angle to their own value.
/// Single-gauge series are stacked: each slice begins where the previous
/// visible one ended. Hidden series keep their slot as an empty slice.
pub fn series_angles(
    config: &GaugeConfig,
    state: &RenderState,
    series: &[GaugeSeries],
    hidden: &HashSet<String>,
) -> Vec<SeriesArc> {
    let angles = resolve(config, state);
    let span = angles.span();
    let mut index = 0usize;
    let mut cursor = angles.start_angle;
    let mut running_total = 0.0f64;

    series
        .iter()
        .map(|s| {
            let angle = if hidden.contains(&s.id) {
                let at = if config.kind == GaugeKind::Single { cursor } else { angles.start_angle };
                SeriesAngle { index, start_angle: at, end_angle: at }
            } else {
                let slice = match config.kind {
                    GaugeKind::Multi => SeriesAngle {
                        index,
                        start_angle: angles.start_angle,
                        end_angle: angles.start_angle + span * value_ratio(config, s.value),
                    },
                    GaugeKind::Single => {
                        running_total += s.value;
                        let end = angles.start_angle + span * value_ratio(config, running_total);
                        let slice = SeriesAngle { index, start_angle: cursor, end_angle: end };
                        cursor = end;
                        slice
                    }
                };
                index += 1;
                slice
            };
            SeriesArc { id: s.id.clone(), angle }
        })
        .collect()
}
