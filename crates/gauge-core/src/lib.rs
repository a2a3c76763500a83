// File: crates/gauge-core/src/lib.rs
// Summary: Core library entry point; exports gauge geometry (angles, extent labels, value ticks) and rendering.

pub mod angle;
pub mod config;
pub mod gauge;
pub mod geometry;
pub mod label;
pub mod series;
pub mod text;
pub mod theme;
pub mod tick;
pub mod types;

pub use angle::{resolve, series_angles, ResolvedAngles};
pub use config::{BackgroundElement, ConfigError, GaugeConfig, GaugeElements, GaugeKind, LabelFormatter};
pub use gauge::{Gauge, GaugeFrame, RenderOptions};
pub use label::{labels_overlap, layout_labels, place, ExtentLabels, LabelLayout, TrigCache};
pub use series::{gauge_data_max, GaugeSeries};
pub use text::{HeuristicTextMeasurer, LabelMetrics, MeasureError, MeasureText, SkiaTextMeasurer, TextShaper};
pub use theme::GaugeTheme;
pub use tick::compute_ticks;
pub use types::{LabelPlacement, Offset, RenderState, SeriesAngle, SeriesArc, TickLineGeometry};
