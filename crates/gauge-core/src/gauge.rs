// File: crates/gauge-core/src/gauge.rs
// Summary: Gauge struct, per-redraw frame assembly and headless PNG rendering using Skia CPU raster surfaces.

use std::collections::HashSet;
use std::f64::consts::PI;

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use crate::angle::{resolve, series_angles, ResolvedAngles};
use crate::config::{BackgroundElement, GaugeConfig, GaugeElements};
use crate::geometry::to_skia_degrees;
use crate::label::{layout_labels, LabelLayout};
use crate::series::{gauge_data_max, visible, GaugeSeries};
use crate::text::{MeasureText, SkiaTextMeasurer, TextShaper};
use crate::theme::GaugeTheme;
use crate::tick::compute_ticks;
use crate::types::{RenderState, SeriesArc, TickLineGeometry, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub padding: f64,
    /// Band thickness as a fraction of the outer radius.
    pub arc_width_ratio: f64,
    pub expand_ratio: f64,
    pub start_angle: f64,
    /// Host default for extent labels when the gauge does not size them itself.
    pub label_font_size: f64,
    pub draw_labels: bool,
    pub theme: GaugeTheme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: 16.0,
            arc_width_ratio: 0.25,
            expand_ratio: 1.04,
            start_angle: -PI / 2.0,
            label_font_size: 13.0,
            draw_labels: true,
            theme: GaugeTheme::dark(),
        }
    }
}

/// Everything one redraw needs, computed up front.
#[derive(Clone, Debug)]
pub struct GaugeFrame {
    pub center: (f64, f64),
    pub state: RenderState,
    pub angles: ResolvedAngles,
    pub arcs: Vec<SeriesArc>,
    pub labels: Option<LabelLayout>,
    /// Empty unless the gauge is multi-arc.
    pub ticks: Vec<TickLineGeometry>,
}

pub struct Gauge {
    pub config: GaugeConfig,
    pub series: Vec<GaugeSeries>,
    pub hidden: HashSet<String>,
}

impl Gauge {
    pub fn new(config: GaugeConfig) -> Self {
        Self { config, series: Vec::new(), hidden: HashSet::new() }
    }

    pub fn add_series(&mut self, series: GaugeSeries) {
        self.series.push(series);
    }

    pub fn hide(&mut self, id: impl Into<String>) {
        self.hidden.insert(id.into());
    }

    pub fn show(&mut self, id: &str) {
        self.hidden.remove(id);
    }

    /// Raise the configured max to cover the visible data. Returns the new max.
    pub fn update_max(&mut self) -> f64 {
        let data_max = gauge_data_max(self.config.kind, &self.series, &self.hidden);
        self.config.update_max(data_max)
    }

    /// Center and ring geometry for a surface of the given size.
    pub fn render_state(&self, opts: &RenderOptions) -> ((f64, f64), RenderState) {
        let w = opts.width as f64;
        let h = opts.height as f64;
        let pad = opts.padding;

        let (center, radius, arc_length) = if self.config.full_circle {
            let radius = (w.min(h) / 2.0 - pad).max(1.0);
            ((w / 2.0, h / 2.0), radius, 2.0 * PI)
        } else {
            let label_h = self.config.label_height();
            let radius = (w / 2.0 - pad).min(h - 2.0 * pad - label_h).max(1.0);
            ((w / 2.0, pad + radius), radius, -2.0 * opts.start_angle)
        };

        let state = RenderState::ring(opts.start_angle, radius, radius * opts.arc_width_ratio)
            .with_arc_length(arc_length)
            .with_expanded_radius(radius * opts.expand_ratio);
        (center, state)
    }

    pub fn frame<M: MeasureText + ?Sized>(&self, opts: &RenderOptions, measurer: &M) -> GaugeFrame {
        let (center, state) = self.render_state(opts);
        let angles = resolve(&self.config, &state);
        let arcs = series_angles(&self.config, &state, &self.series, &self.hidden);
        let labels = layout_labels(&self.config, &state, measurer);
        let ticks = if self.config.has_multi_arc() {
            compute_ticks(&self.config, &state, &arcs, &self.hidden)
        } else {
            Vec::new()
        };
        GaugeFrame { center, state, angles, arcs, labels, ticks }
    }

    /// Render the gauge to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;

        let shaper = TextShaper::new();
        let measurer = SkiaTextMeasurer::new(&shaper, opts.label_font_size);
        let frame = self.frame(opts, &measurer);
        let elements = GaugeElements::init(&self.config);
        let theme = &opts.theme;
        let arc_count = self.arc_count();

        {
            let canvas = surface.canvas();
            canvas.clear(theme.background);

            draw_background(canvas, &frame, &elements, arc_count, theme);
            draw_values(canvas, &frame, &self.config, arc_count, theme);
            draw_ticks(canvas, &frame, theme);

            if opts.draw_labels {
                if let Some(layout) = &frame.labels {
                    draw_extent_labels(canvas, &shaper, &frame, layout, opts);
                }
                if let (true, Some(units)) = (elements.units_label, &self.config.units_label) {
                    draw_units(canvas, &shaper, &frame, units, self.config.full_circle, opts);
                }
            }
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    fn arc_count(&self) -> usize {
        visible(&self.series, &self.hidden).count()
    }
}

// ---- helpers ----------------------------------------------------------------

/// Stroke the band between `inner` and `outer` from `start` to `end` (gauge angles).
fn draw_band(
    canvas: &skia::Canvas,
    center: (f64, f64),
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
    color: skia::Color,
) {
    let inner = inner.max(0.0);
    let thickness = outer - inner;
    let sweep = (end - start) * 180.0 / PI;
    if thickness <= 0.0 || sweep.abs() < 1e-6 {
        return;
    }
    let r = (outer + inner) * 0.5;
    let (cx, cy) = center;
    let oval = skia::Rect::from_ltrb((cx - r) as f32, (cy - r) as f32, (cx + r) as f32, (cy + r) as f32);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(thickness as f32);
    paint.set_color(color);

    canvas.draw_arc(oval, to_skia_degrees(start), sweep as f32, false, &paint);
}

/// Radial bounds of the ring for visible series `index` out of `count`.
fn ring_bounds(state: &RenderState, index: usize, count: usize) -> (f64, f64) {
    let slice = state.arc_band_width / count.max(1) as f64;
    (state.radius - slice * index as f64, state.radius - slice * (index + 1) as f64)
}

fn draw_background(
    canvas: &skia::Canvas,
    frame: &GaugeFrame,
    elements: &GaugeElements,
    arc_count: usize,
    theme: &GaugeTheme,
) {
    let s = &frame.state;
    let (start, end) = (frame.angles.start_angle, frame.angles.end_angle);
    match elements.background {
        BackgroundElement::Path { fill } => {
            let color = fill.unwrap_or(theme.arc_background);
            draw_band(canvas, frame.center, s.radius, s.inner_radius, start, end, color);
        }
        BackgroundElement::Group => {
            for i in 0..arc_count {
                let (outer, inner) = ring_bounds(s, i, arc_count);
                draw_band(canvas, frame.center, outer, inner, start, end, theme.arc_background);
            }
        }
    }
}

fn draw_values(canvas: &skia::Canvas, frame: &GaugeFrame, config: &GaugeConfig, arc_count: usize, theme: &GaugeTheme) {
    let s = &frame.state;
    for arc in &frame.arcs {
        let a = arc.angle;
        let color = theme.series_color(a.index);
        let (outer, inner) = if config.has_multi_arc() {
            ring_bounds(s, a.index, arc_count)
        } else {
            (s.radius, s.inner_radius)
        };
        draw_band(canvas, frame.center, outer, inner, a.start_angle, a.end_angle, color);
    }
}

fn draw_ticks(canvas: &skia::Canvas, frame: &GaugeFrame, theme: &GaugeTheme) {
    let (cx, cy) = frame.center;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);

    for (tick, arc) in frame.ticks.iter().zip(&frame.arcs) {
        if !tick.visible || tick.is_collapsed() {
            continue;
        }
        paint.set_color(theme.series_color(arc.angle.index));
        let (x, y) = (tick.x as f32, tick.y as f32);
        canvas.save();
        canvas.translate((cx as f32, cy as f32));
        canvas.rotate(tick.rotation_degrees as f32, Some(skia::Point::new(x, y)));
        canvas.draw_rect(skia::Rect::from_xywh(x, y, tick.width as f32, tick.height as f32), &paint);
        canvas.restore();
    }
}

fn draw_extent_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    frame: &GaugeFrame,
    layout: &LabelLayout,
    opts: &RenderOptions,
) {
    let (cx, cy) = frame.center;
    let size = layout.labels.font_size.unwrap_or(opts.label_font_size) as f32;
    let color = opts.theme.extent_label;
    let p = &layout.placement;

    shaper.draw_centered(
        canvas,
        &layout.labels.min_text,
        (cx + p.min_offset.dx) as f32,
        (cy + p.min_offset.dy) as f32,
        size,
        color,
    );
    if p.max_visible {
        shaper.draw_centered(
            canvas,
            &layout.labels.max_text,
            (cx + p.max_offset.dx) as f32,
            (cy + p.max_offset.dy) as f32,
            size,
            color,
        );
    } else {
        debug!(text = %layout.labels.max_text, "max label suppressed");
    }
}

fn draw_units(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    frame: &GaugeFrame,
    units: &str,
    full_circle: bool,
    opts: &RenderOptions,
) {
    let (cx, cy) = frame.center;
    let size = opts.label_font_size;
    let y = if full_circle { cy + size } else { cy - size * 0.5 };
    shaper.draw_centered(canvas, units, cx as f32, y as f32, size as f32, opts.theme.units_label);
}
