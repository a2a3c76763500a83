// File: crates/gauge-core/src/text.rs
// Summary: Text measurement capability for extent labels, plus the Skia textlayout shaper that backs it.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use thiserror::Error;

/// Pixel size of a rendered label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelMetrics {
    pub width: f64,
    pub height: f64,
}

impl LabelMetrics {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasureError {
    #[error("label `{text}` is not attached to a render surface")]
    Detached { text: String },
    #[error("label `{text}` measured as {width}x{height}")]
    Degenerate { text: String, width: f64, height: f64 },
}

/// Host capability reporting the size `text` has once rendered.
///
/// `font_size` is `None` when the host's default label size applies.
pub trait MeasureText {
    fn measure(&self, text: &str, font_size: Option<f64>) -> Result<LabelMetrics, MeasureError>;
}

impl<F> MeasureText for F
where
    F: Fn(&str, Option<f64>) -> Result<LabelMetrics, MeasureError>,
{
    fn measure(&self, text: &str, font_size: Option<f64>) -> Result<LabelMetrics, MeasureError> {
        self(text, font_size)
    }
}

/// Reject measurements that would turn into garbage coordinates.
///
/// Non-empty text must have a positive width; a host without usable fonts
/// reports zero and the labels would be placed as if blank.
pub(crate) fn checked(text: &str, m: LabelMetrics) -> Result<LabelMetrics, MeasureError> {
    let blank_width = if text.is_empty() { m.width < 0.0 } else { m.width <= 0.0 };
    if !m.width.is_finite() || !m.height.is_finite() || blank_width || m.height <= 0.0 {
        return Err(MeasureError::Degenerate { text: text.to_string(), width: m.width, height: m.height });
    }
    Ok(m)
}

/// Font-free estimate: glyphs ~0.6em wide, one line 1em tall.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicTextMeasurer {
    pub default_font_size: f64,
}

impl HeuristicTextMeasurer {
    pub const fn new(default_font_size: f64) -> Self {
        Self { default_font_size }
    }
}

impl MeasureText for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: Option<f64>) -> Result<LabelMetrics, MeasureError> {
        let size = font_size.unwrap_or(self.default_font_size);
        let width = (0.6 * size * text.chars().count() as f64).ceil();
        Ok(LabelMetrics::new(width, size.trunc()))
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        p.longest_line()
    }

    /// Draw `text` horizontally centered on `x` with its baseline at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x - w * 0.5, y - size * 0.8));
    }
}

/// [`MeasureText`] backed by Skia paragraph layout.
///
/// Width is the longest line rounded up; height is the font size in whole
/// pixels, which is what the label occupies vertically once drawn.
pub struct SkiaTextMeasurer<'a> {
    shaper: &'a TextShaper,
    default_font_size: f64,
}

impl<'a> SkiaTextMeasurer<'a> {
    pub fn new(shaper: &'a TextShaper, default_font_size: f64) -> Self {
        Self { shaper, default_font_size }
    }
}

impl MeasureText for SkiaTextMeasurer<'_> {
    fn measure(&self, text: &str, font_size: Option<f64>) -> Result<LabelMetrics, MeasureError> {
        let size = font_size.unwrap_or(self.default_font_size);
        let width = self.shaper.measure_width(text, size as f32) as f64;
        Ok(LabelMetrics::new(width.ceil(), size.trunc()))
    }
}
