// File: crates/gauge-core/src/series.rs
// Summary: Gauge series model (id + current value) and the data max feeding the monotonic update.

use std::collections::HashSet;

use crate::config::GaugeKind;

#[derive(Clone, Debug, PartialEq)]
pub struct GaugeSeries {
    pub id: String,
    pub value: f64,
}

impl GaugeSeries {
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self { id: id.into(), value }
    }
}

/// Iterate the series not listed in `hidden`, in order.
pub fn visible<'a>(
    series: &'a [GaugeSeries],
    hidden: &'a HashSet<String>,
) -> impl Iterator<Item = &'a GaugeSeries> + 'a {
    series.iter().filter(move |s| !hidden.contains(&s.id))
}

/// Largest value the gauge has to cover.
///
/// Multi-arc gauges draw every series on its own arc, so the largest single
/// value counts; single gauges stack their series, so the sum counts. With no
/// visible series a multi-arc gauge returns `-inf`, which never raises a max.
pub fn gauge_data_max(kind: GaugeKind, series: &[GaugeSeries], hidden: &HashSet<String>) -> f64 {
    match kind {
        GaugeKind::Multi => visible(series, hidden).map(|s| s.value).fold(f64::NEG_INFINITY, f64::max),
        GaugeKind::Single => visible(series, hidden).map(|s| s.value).sum(),
    }
}
