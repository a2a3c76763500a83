// File: crates/gauge-core/src/label.rs
// Summary: Min/max extent label placement around the gauge arc, with overlap suppression of the max label.

use std::f64::consts::PI;

use tracing::debug;

use crate::angle::{resolve, ResolvedAngles};
use crate::config::GaugeConfig;
use crate::text::{checked, LabelMetrics, MeasureError, MeasureText};
use crate::types::{LabelPlacement, Offset, RenderState, LABEL_MARGIN};

/// Sine/cosine of the resolved angles, rounded to two decimals.
///
/// The rounding keeps placement stable across redraws whose angles differ by
/// float noise. Cosines are negated because y grows downward on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrigCache {
    pub sin_start: f64,
    pub cos_start: f64,
    pub sin_end: f64,
    pub cos_end: f64,
}

impl TrigCache {
    pub fn new(angles: &ResolvedAngles) -> Self {
        Self {
            sin_start: round2(angles.start_angle.sin()),
            cos_start: round2(angles.start_angle.cos()) * -1.0,
            sin_end: round2(angles.end_angle.sin()),
            cos_end: round2(angles.end_angle.cos()) * -1.0,
        }
    }
}

/// Two-decimal rounding of the exact binary value, ties away from zero.
fn round2(v: f64) -> f64 {
    // Only multiples of 1/8 land exactly on a tie; `v * 100` is exact for them.
    if (v * 8.0).fract() == 0.0 {
        return (v * 100.0).round() / 100.0;
    }
    format!("{v:.2}").parse().unwrap_or(v)
}

/// Horizontal offset: push the label half its width plus a margin clear of the arc.
fn horizontal_offset(sin_angle: f64, text_width: f64, inner_radius: f64, full_circle: bool) -> f64 {
    let half_width_with_margin = text_width / 2.0 + LABEL_MARGIN;
    let radius = if full_circle {
        inner_radius - half_width_with_margin
    } else if inner_radius < 0.0 {
        inner_radius + half_width_with_margin
    } else if inner_radius > 0.0 {
        inner_radius - half_width_with_margin
    } else {
        0.0
    };
    sin_angle * radius
}

/// Reflect the end angle into `[0, 2π)` before classifying it.
fn fold_end_angle(end_angle: f64) -> f64 {
    if end_angle < 0.0 {
        2.0 * PI + end_angle
    } else if end_angle > 0.0 {
        2.0 * PI - end_angle
    } else {
        end_angle
    }
}

/// Share of the text height to pull the label by: 1 over the x axis, 1/π under it, else 0.
fn position_factor(angle: f64) -> f64 {
    let under_x_axis = angle < -0.5 * PI || angle > 0.5 * PI;
    let over_x_axis = (-0.5 * PI < angle && angle <= 0.5 * PI) || (-1.5 * PI < angle && angle >= 1.5 * PI);
    if over_x_axis {
        1.0
    } else if under_x_axis {
        1.0 / PI
    } else {
        0.0
    }
}

fn vertical_offset(cos_angle: f64, text_height: f64, inner_radius: f64, angle: f64) -> f64 {
    cos_angle * (inner_radius - text_height * position_factor(angle))
}

/// True when the max label's box would sit on top of the min label's in both axes.
pub fn labels_overlap(min_offset: Offset, max_offset: Offset, min: LabelMetrics, max: LabelMetrics) -> bool {
    let diff_x = (max_offset.dx - min_offset.dx).abs().ceil();
    let overlaps_x = diff_x <= max.width - min.width;
    let diff_y = (max_offset.dy - min_offset.dy).abs().ceil();
    let overlaps_y = diff_y <= min.height;
    overlaps_x && overlaps_y
}

/// Offsets of both extent labels from the gauge center.
///
/// The min label sits at the start angle and the max label at the end
/// angle; the max label is hidden, not moved, when the two would overlap.
pub fn place(config: &GaugeConfig, state: &RenderState, min: LabelMetrics, max: LabelMetrics) -> LabelPlacement {
    let angles = resolve(config, state);
    let trig = TrigCache::new(&angles);
    let inner = state.inner_radius;

    let min_offset = Offset {
        dx: horizontal_offset(trig.sin_start, min.width, inner, config.full_circle),
        dy: vertical_offset(trig.cos_start, min.height, inner, angles.start_angle),
    };
    let max_offset = Offset {
        dx: horizontal_offset(trig.sin_end, max.width, inner, config.full_circle),
        dy: vertical_offset(trig.cos_end, max.height, inner, fold_end_angle(angles.end_angle)),
    };

    let overlap = labels_overlap(min_offset, max_offset, min, max);
    if overlap {
        debug!(?min_offset, ?max_offset, "gauge max label overlaps min label; hiding it");
    }
    LabelPlacement { min_offset, max_offset, max_visible: !overlap }
}

/// Text and font size of the two extent labels, fixed before measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtentLabels {
    pub min_text: String,
    pub max_text: String,
    /// Full-circle gauges size their labels from the ring; others use the host default.
    pub font_size: Option<f64>,
}

impl ExtentLabels {
    pub fn new(config: &GaugeConfig, radius: f64) -> Self {
        Self {
            min_text: config.extent_text(config.min, false),
            max_text: config.extent_text(config.max, true),
            font_size: config.full_circle.then(|| (radius / 10.0).round()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelLayout {
    pub labels: ExtentLabels,
    pub min_metrics: LabelMetrics,
    pub max_metrics: LabelMetrics,
    pub placement: LabelPlacement,
}

fn measure_both<M: MeasureText + ?Sized>(
    labels: &ExtentLabels,
    measurer: &M,
) -> Result<(LabelMetrics, LabelMetrics), MeasureError> {
    let min = checked(&labels.min_text, measurer.measure(&labels.min_text, labels.font_size)?)?;
    let max = checked(&labels.max_text, measurer.measure(&labels.max_text, labels.font_size)?)?;
    Ok((min, max))
}

/// Set the label text, measure it, and place it.
///
/// `None` when labels are disabled, or when the host cannot measure them yet;
/// in the latter case the caller simply tries again on the next redraw.
pub fn layout_labels<M: MeasureText + ?Sized>(
    config: &GaugeConfig,
    state: &RenderState,
    measurer: &M,
) -> Option<LabelLayout> {
    if !config.labels_visible {
        return None;
    }
    let labels = ExtentLabels::new(config, state.radius);
    let (min_metrics, max_metrics) = match measure_both(&labels, measurer) {
        Ok(m) => m,
        Err(err) => {
            debug!(error = %err, "skipping gauge label placement this redraw");
            return None;
        }
    };
    let placement = place(config, state, min_metrics, max_metrics);
    Some(LabelLayout { labels, min_metrics, max_metrics, placement })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_matches_two_decimal_fixed() {
        assert_eq!(round2(0.295_52), 0.3);
        assert_eq!(round2(-0.707_106), -0.71);
        assert_eq!(round2(6.1e-17), 0.0);
    }

    #[test]
    fn round2_uses_exact_binary_value() {
        // 0.015 is stored just below the midpoint
        assert_eq!(round2(0.015), 0.01);
        assert_eq!(round2(-0.015), -0.01);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.375), -0.38);
        assert_eq!(round2(0.5), 0.5);
    }

    #[test]
    fn fold_reflects_into_full_turn() {
        assert!((fold_end_angle(-1.0) - (2.0 * PI - 1.0)).abs() < 1e-12);
        assert!((fold_end_angle(1.0) - (2.0 * PI - 1.0)).abs() < 1e-12);
        assert_eq!(fold_end_angle(0.0), 0.0);
    }

    #[test]
    fn position_factor_table() {
        assert_eq!(position_factor(0.0), 1.0);
        assert_eq!(position_factor(0.5 * PI), 1.0);
        assert_eq!(position_factor(1.75 * PI), 1.0);
        assert_eq!(position_factor(PI), 1.0 / PI);
        assert_eq!(position_factor(-PI), 1.0 / PI);
        assert_eq!(position_factor(-0.5 * PI), 0.0);
    }

    #[test]
    fn horizontal_offset_radius_branches() {
        // sin = -1 at the usual -π/2 start
        assert_eq!(horizontal_offset(-1.0, 40.0, 50.0, false), -26.0);
        assert_eq!(horizontal_offset(-1.0, 40.0, -50.0, false), 26.0);
        assert_eq!(horizontal_offset(-1.0, 40.0, 0.0, false), 0.0);
        assert_eq!(horizontal_offset(-1.0, 40.0, 0.0, true), 24.0);
        assert_eq!(horizontal_offset(-1.0, 40.0, -50.0, true), 74.0);
    }
}
