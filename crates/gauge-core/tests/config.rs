// File: crates/gauge-core/tests/config.rs
// Purpose: Validate gauge configuration: monotonic max, data max, label height, element setup.

use std::collections::HashSet;

use gauge_core::{
    gauge_data_max, BackgroundElement, ConfigError, Gauge, GaugeConfig, GaugeElements, GaugeKind, GaugeSeries,
};
use skia_safe::Color;

#[test]
fn update_max_never_decreases() {
    let mut config = GaugeConfig::new(0.0, 100.0);
    let mut last = config.max;
    for &data_max in &[50.0, 150.0, 120.0, f64::NAN, f64::NEG_INFINITY, 200.0, 199.9] {
        let now = config.update_max(data_max);
        assert!(now >= last, "max went from {last} to {now}");
        assert_eq!(now, config.max);
        last = now;
    }
    assert_eq!(config.max, 200.0);
}

#[test]
fn data_max_per_gauge_kind() {
    let series = vec![GaugeSeries::new("a", 10.0), GaugeSeries::new("b", 70.0), GaugeSeries::new("c", 40.0)];
    let hidden: HashSet<String> = ["b".to_string()].into_iter().collect();

    assert_eq!(gauge_data_max(GaugeKind::Multi, &series, &HashSet::new()), 70.0);
    assert_eq!(gauge_data_max(GaugeKind::Multi, &series, &hidden), 40.0);
    assert_eq!(gauge_data_max(GaugeKind::Single, &series, &HashSet::new()), 120.0);
    assert_eq!(gauge_data_max(GaugeKind::Single, &series, &hidden), 50.0);
    assert_eq!(gauge_data_max(GaugeKind::Multi, &[], &HashSet::new()), f64::NEG_INFINITY);
}

#[test]
fn gauge_update_max_covers_visible_sum() {
    let mut gauge = Gauge::new(GaugeConfig::new(0.0, 100.0));
    gauge.add_series(GaugeSeries::new("a", 60.0));
    gauge.add_series(GaugeSeries::new("b", 70.0));
    assert_eq!(gauge.update_max(), 130.0);

    // hiding data never shrinks the range back
    gauge.hide("b");
    assert_eq!(gauge.update_max(), 130.0);
}

#[test]
fn label_height_only_for_partial_gauges() {
    assert_eq!(GaugeConfig::default().label_height(), 20.0);
    assert_eq!(GaugeConfig::default().with_full_circle(true).label_height(), 0.0);
    assert_eq!(GaugeConfig::default().with_labels_visible(false).label_height(), 0.0);
}

#[test]
fn elements_follow_config() {
    let single = GaugeConfig::default().with_background(Color::from_rgb(200, 200, 200));
    let e = GaugeElements::init(&single);
    assert_eq!(e.background, BackgroundElement::Path { fill: Some(Color::from_rgb(200, 200, 200)) });
    assert!(e.extent_labels);
    assert!(!e.units_label);

    let multi = GaugeConfig::default()
        .with_kind(GaugeKind::Multi)
        .with_background(Color::from_rgb(200, 200, 200))
        .with_units("rpm")
        .with_labels_visible(false);
    let e = GaugeElements::init(&multi);
    assert_eq!(e.background, BackgroundElement::Group);
    assert!(e.units_label);
    assert!(!e.extent_labels);
}

#[test]
fn validate_rejects_bad_bounds() {
    assert!(GaugeConfig::new(0.0, 100.0).validate().is_ok());
    assert_eq!(
        GaugeConfig::new(5.0, 5.0).validate(),
        Err(ConfigError::EmptyRange { min: 5.0, max: 5.0 })
    );
    assert!(matches!(
        GaugeConfig::new(f64::NAN, 5.0).validate(),
        Err(ConfigError::NonFiniteBounds { .. })
    ));
}

#[test]
fn extent_text_falls_back_to_number() {
    let config = GaugeConfig::new(-12.5, 40.0);
    assert_eq!(config.extent_text(config.min, false), "-12.5");
    assert_eq!(config.extent_text(config.max, true), "40");
}
