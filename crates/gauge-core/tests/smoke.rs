// File: crates/gauge-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing gauge PNGs.

use gauge_core::{Gauge, GaugeConfig, GaugeKind, GaugeSeries, HeuristicTextMeasurer, RenderOptions};

fn sample(config: GaugeConfig) -> Gauge {
    let mut gauge = Gauge::new(config);
    gauge.add_series(GaugeSeries::new("cpu", 42.0));
    gauge.add_series(GaugeSeries::new("mem", 27.5));
    gauge
}

#[test]
fn render_smoke_png() {
    let gauge = sample(GaugeConfig::new(0.0, 100.0).with_units("%"));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/gauge_smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    gauge.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = gauge.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_multi_and_full_circle() {
    let mut multi = sample(GaugeConfig::new(0.0, 100.0).with_kind(GaugeKind::Multi));
    multi.hide("cpu");
    let bytes = multi.render_to_png_bytes(&RenderOptions::default()).expect("multi render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));

    let full = sample(GaugeConfig::new(0.0, 100.0).with_full_circle(true));
    let bytes = full.render_to_png_bytes(&RenderOptions::default()).expect("full circle render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn frame_wires_all_components() {
    let mut gauge = sample(GaugeConfig::new(0.0, 100.0).with_kind(GaugeKind::Multi));
    gauge.hide("mem");
    let frame = gauge.frame(&RenderOptions::default(), &HeuristicTextMeasurer::new(13.0));

    assert_eq!(frame.arcs.len(), 2);
    assert_eq!(frame.ticks.len(), 2);
    assert!(!frame.ticks[0].is_collapsed());
    assert!(frame.ticks[1].is_collapsed());
    assert_eq!(frame.angles.end_angle, -frame.angles.start_angle);
    let labels = frame.labels.expect("labels placed");
    assert!(labels.placement.max_visible);

    // single gauges draw no value ticks
    let single = sample(GaugeConfig::new(0.0, 100.0));
    let frame = single.frame(&RenderOptions::default(), &HeuristicTextMeasurer::new(13.0));
    assert!(frame.ticks.is_empty());
}

#[test]
fn render_state_reserves_label_room() {
    let opts = RenderOptions { height: 240, ..RenderOptions::default() };
    let with_labels = Gauge::new(GaugeConfig::new(0.0, 100.0));
    let without = Gauge::new(GaugeConfig::new(0.0, 100.0).with_labels_visible(false));
    let (center, a) = with_labels.render_state(&opts);
    let (_, b) = without.render_state(&opts);
    // 240px tall, 16px padding each side, 20px label room
    assert_eq!(a.radius, 188.0);
    assert_eq!(b.radius, 208.0);
    assert_eq!(center, (240.0, 204.0));
    assert_eq!(a.inner_radius, a.radius - a.arc_band_width);
    assert_eq!(a.arc_length, std::f64::consts::PI);
}
