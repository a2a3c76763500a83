use std::collections::HashSet;
use std::f64::consts::PI;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gauge_core::{compute_ticks, series_angles, GaugeConfig, GaugeKind, GaugeSeries, RenderState};

fn gen_series(n: usize) -> Vec<GaugeSeries> {
    (0..n).map(|i| GaugeSeries::new(format!("s{i}"), (i as f64 * 7.3) % 100.0)).collect()
}

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_arc_ticks");
    let config = GaugeConfig::new(0.0, 100.0).with_kind(GaugeKind::Multi);
    let state = RenderState::ring(-PI / 2.0, 200.0, 80.0).with_expanded_radius(208.0);

    for &n in &[4usize, 32usize, 256usize] {
        let series = gen_series(n);
        // hide every third series
        let hidden: HashSet<String> = series.iter().step_by(3).map(|s| s.id.clone()).collect();
        let arcs = series_angles(&config, &state, &series, &hidden);
        group.bench_with_input(BenchmarkId::from_parameter(n), &arcs, |b, arcs| {
            b.iter(|| black_box(compute_ticks(&config, &state, arcs, &hidden)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
