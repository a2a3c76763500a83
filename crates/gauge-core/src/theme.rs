// File: crates/gauge-core/src/theme.rs
// Summary: Light/Dark theming for gauge rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct GaugeTheme {
    pub name: &'static str,
    pub background: skia::Color,
    pub arc_background: skia::Color,
    pub extent_label: skia::Color,
    pub units_label: skia::Color,
    /// Cycled by series position; per-series color lookup belongs to the caller.
    pub series: [skia::Color; 4],
}

impl GaugeTheme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            arc_background: skia::Color::from_argb(255, 48, 48, 54),
            extent_label: skia::Color::from_argb(255, 180, 180, 190),
            units_label: skia::Color::from_argb(255, 235, 235, 245),
            series: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 220, 80, 80),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            arc_background: skia::Color::from_argb(255, 224, 224, 224),
            extent_label: skia::Color::from_argb(255, 60, 60, 70),
            units_label: skia::Color::from_argb(255, 20, 20, 30),
            series: [
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 0xcb, 0x4b, 0x16),
                skia::Color::from_argb(255, 200, 60, 60),
            ],
        }
    }

    pub fn series_color(&self, index: usize) -> skia::Color {
        self.series[index % self.series.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<GaugeTheme> {
    vec![GaugeTheme::dark(), GaugeTheme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> GaugeTheme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    GaugeTheme::dark()
}
