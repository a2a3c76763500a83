// File: crates/gauge-demo/src/main.rs
// Summary: Demo loads gauge values from CSV (id,value) and renders single, multi-arc and full-circle gauges to PNGs.

use anyhow::{Context, Result};
use gauge_core::{theme, Gauge, GaugeConfig, GaugeKind, GaugeSeries, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept a CSV path from CLI, or use built-in sample values
    let series = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            info!(path = %path.display(), "using input file");
            load_series_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sample_series(),
    };
    if series.is_empty() {
        anyhow::bail!("no series loaded; expected `id,value` rows");
    }
    info!(count = series.len(), "loaded series");

    let theme_name = std::env::var("GAUGE_THEME").unwrap_or_else(|_| "dark".to_string());
    let opts = RenderOptions { theme: theme::find(&theme_name), ..RenderOptions::default() };

    // 1) Single gauge: series stacked on one arc, max grows to fit the sum
    let mut single = Gauge::new(GaugeConfig::new(0.0, 100.0).with_units("%"));
    for s in &series {
        single.add_series(s.clone());
    }
    let max = single.update_max();
    info!(max, "single gauge max");
    write(&single, &opts, "gauge_single.png")?;

    // 2) Multi-arc: one ring per series with value ticks
    let mut multi = Gauge::new(
        GaugeConfig::new(0.0, 100.0)
            .with_kind(GaugeKind::Multi)
            .with_label_formatter(|v, is_max| if is_max { format!("{v} max") } else { format!("{v}") }),
    );
    for s in &series {
        multi.add_series(s.clone());
    }
    if let Some(first) = series.first() {
        multi.hide(first.id.clone());
    }
    multi.update_max();
    write(&multi, &opts, "gauge_multi.png")?;

    // 3) Full circle: labels sized from the ring; min and max meet, so max is hidden
    let mut full = Gauge::new(GaugeConfig::new(0.0, 100.0).with_full_circle(true));
    for s in &series {
        full.add_series(s.clone());
    }
    full.update_max();
    write(&full, &opts, "gauge_full_circle.png")?;

    Ok(())
}

fn write(gauge: &Gauge, opts: &RenderOptions, name: &str) -> Result<()> {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
    out.push(name);
    gauge.render_to_png(opts, &out)?;
    info!(path = %out.display(), "wrote gauge");
    Ok(())
}

fn sample_series() -> Vec<GaugeSeries> {
    vec![
        GaugeSeries::new("cpu", 42.0),
        GaugeSeries::new("memory", 27.5),
        GaugeSeries::new("disk", 12.0),
    ]
}

/// Load `id,value` rows; rows with an unparsable value are skipped.
fn load_series_csv(path: &Path) -> Result<Vec<GaugeSeries>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_id = idx(&["id", "name", "series"]).unwrap_or(0);
    let i_value = idx(&["value", "v"]).unwrap_or(1);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let id = rec.get(i_id).map(str::trim).unwrap_or_default();
        match rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(value) if !id.is_empty() => out.push(GaugeSeries::new(id, value)),
            _ => warn!(row, "skipping row without id/value"),
        }
    }
    Ok(out)
}
