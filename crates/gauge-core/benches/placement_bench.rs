use std::f64::consts::PI;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gauge_core::{layout_labels, place, GaugeConfig, HeuristicTextMeasurer, LabelMetrics, RenderState};

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_placement");
    let metrics = LabelMetrics::new(24.0, 13.0);

    for &(name, full_circle) in &[("partial", false), ("full_circle", true)] {
        let config = GaugeConfig::new(0.0, 100.0).with_full_circle(full_circle);
        let state = RenderState::ring(-PI / 2.0, 160.0, 40.0).with_arc_length(2.0 * PI);
        group.bench_function(format!("place_{name}"), |b| {
            b.iter(|| black_box(place(&config, black_box(&state), metrics, metrics)));
        });
    }

    let config = GaugeConfig::new(0.0, 100.0).with_label_formatter(|v, is_max| {
        if is_max { format!("{v:.1} max") } else { format!("{v:.1}") }
    });
    let state = RenderState::ring(-PI / 2.0, 160.0, 40.0);
    let measurer = HeuristicTextMeasurer::new(13.0);
    group.bench_function("layout_with_formatter", |b| {
        b.iter(|| black_box(layout_labels(&config, black_box(&state), &measurer)));
    });
    group.finish();
}

criterion_group!(benches, bench_place);
criterion_main!(benches);
