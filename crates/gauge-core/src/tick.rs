// File: crates/gauge-core/src/tick.rs
// Summary: Radial value ticks for multi-arc gauges, one per series, stacked outward in series order.

use std::collections::HashSet;
use std::f64::consts::PI;

use tracing::trace;

use crate::config::GaugeConfig;
use crate::types::{RenderState, SeriesArc, TickLineGeometry, TICK_THICKNESS};

/// One tick per entry of `series`, in the same order.
///
/// Hidden series get a collapsed tick so indices stay aligned with the
/// series list. Visible ticks share `arc_band_width` evenly, so the tick for
/// visible series `i` reaches `(i + 1)` band slices in from the outer radius.
pub fn compute_ticks(
    config: &GaugeConfig,
    state: &RenderState,
    series: &[SeriesArc],
    hidden_ids: &HashSet<String>,
) -> Vec<TickLineGeometry> {
    let shown = series.iter().filter(|s| !hidden_ids.contains(&s.id)).count();

    series
        .iter()
        .map(|s| {
            if shown == 0 || hidden_ids.contains(&s.id) {
                return TickLineGeometry::collapsed(config.labels_visible);
            }
            let tick = tick_for(state, s, shown, config.labels_visible);
            trace!(id = %s.id, x = tick.x, y = tick.y, len = tick.width, "gauge tick");
            tick
        })
        .collect()
}

fn tick_for(state: &RenderState, s: &SeriesArc, shown: usize, visible: bool) -> TickLineGeometry {
    let inner_line_length = state.arc_band_width / shown as f64 * (s.angle.index + 1) as f64;
    // perpendicular to the radius at the value angle
    let line_angle = s.angle.end_angle - PI / 2.0;
    let arc_inner_radius = state.radius - inner_line_length;
    let correction = if arc_inner_radius == 0.0 { 0.0 } else { 1.0 / arc_inner_radius };
    let positioning_angle = line_angle - correction;
    let line_length = state.expanded_radius - state.radius + inner_line_length;

    TickLineGeometry {
        x: positioning_angle.cos() * arc_inner_radius,
        y: positioning_angle.sin() * arc_inner_radius,
        width: line_length,
        height: TICK_THICKNESS,
        rotation_degrees: line_angle * 180.0 / PI,
        dash_pattern: format!("0, {}, 0", line_length + TICK_THICKNESS),
        visible,
    }
}
