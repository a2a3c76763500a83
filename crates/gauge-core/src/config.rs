// File: crates/gauge-core/src/config.rs
// Summary: Gauge configuration, extent label formatting, element setup and the monotonic max update.

use std::fmt;
use std::sync::Arc;

use skia_safe as skia;
use thiserror::Error;

use crate::types::PARTIAL_LABEL_HEIGHT;

/// User hook turning an extent value into label text; receives `(value, is_max)`.
pub type LabelFormatter = Arc<dyn Fn(f64, bool) -> String + Send + Sync>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GaugeKind {
    /// One arc; visible series are stacked along it.
    #[default]
    Single,
    /// One concentric arc per series.
    Multi,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("gauge bounds must be finite (min={min}, max={max})")]
    NonFiniteBounds { min: f64, max: f64 },
    #[error("gauge min {min} must be below max {max}")]
    EmptyRange { min: f64, max: f64 },
}

#[derive(Clone)]
pub struct GaugeConfig {
    pub min: f64,
    pub max: f64,
    pub labels_visible: bool,
    pub full_circle: bool,
    pub kind: GaugeKind,
    pub units_label: Option<String>,
    pub label_formatter: Option<LabelFormatter>,
    /// Fill of the single-arc background; ignored by multi-arc gauges.
    pub background: Option<skia::Color>,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            labels_visible: true,
            full_circle: false,
            kind: GaugeKind::Single,
            units_label: None,
            label_formatter: None,
            background: None,
        }
    }
}

impl fmt::Debug for GaugeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaugeConfig")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("labels_visible", &self.labels_visible)
            .field("full_circle", &self.full_circle)
            .field("kind", &self.kind)
            .field("units_label", &self.units_label)
            .field("label_formatter", &self.label_formatter.as_ref().map(|_| "<fn>"))
            .field("background", &self.background)
            .finish()
    }
}

impl GaugeConfig {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, ..Self::default() }
    }

    pub fn with_full_circle(mut self, full_circle: bool) -> Self {
        self.full_circle = full_circle;
        self
    }

    pub fn with_kind(mut self, kind: GaugeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_labels_visible(mut self, visible: bool) -> Self {
        self.labels_visible = visible;
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units_label = Some(units.into());
        self
    }

    pub fn with_label_formatter<F>(mut self, format: F) -> Self
    where
        F: Fn(f64, bool) -> String + Send + Sync + 'static,
    {
        self.label_formatter = Some(Arc::new(format));
        self
    }

    pub fn with_background(mut self, color: skia::Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn has_multi_arc(&self) -> bool {
        self.kind == GaugeKind::Multi
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFiniteBounds { min: self.min, max: self.max });
        }
        if self.min >= self.max {
            return Err(ConfigError::EmptyRange { min: self.min, max: self.max });
        }
        Ok(())
    }

    /// Text shown for an extent value: the formatter's output, or the plain number.
    pub fn extent_text(&self, value: f64, is_max: bool) -> String {
        match &self.label_formatter {
            Some(format) => format(value, is_max),
            None => value.to_string(),
        }
    }

    /// Raise `max` to cover `current_data_max`; never lowers it. Returns the resulting max.
    pub fn update_max(&mut self, current_data_max: f64) -> f64 {
        if current_data_max > self.max {
            self.max = current_data_max;
        }
        self.max
    }

    /// Vertical room the extent labels need beneath the arc.
    pub fn label_height(&self) -> f64 {
        if self.labels_visible && !self.full_circle { PARTIAL_LABEL_HEIGHT } else { 0.0 }
    }
}

/// Background element the host creates once per gauge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackgroundElement {
    /// Single arc: one path, optionally filled.
    Path { fill: Option<skia::Color> },
    /// Multi-arc: a container holding one background per series.
    Group,
}

/// Elements created once at gauge initialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeElements {
    pub background: BackgroundElement,
    pub units_label: bool,
    pub extent_labels: bool,
}

impl GaugeElements {
    pub fn init(config: &GaugeConfig) -> Self {
        let background = if config.has_multi_arc() {
            BackgroundElement::Group
        } else {
            BackgroundElement::Path { fill: config.background }
        };
        Self {
            background,
            units_label: config.units_label.is_some(),
            extent_labels: config.labels_visible,
        }
    }
}
