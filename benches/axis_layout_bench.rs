use std::hint::black_box;
use std::sync::Arc;

use axis_rs::api::{AxisConfig, AxisRenderer, GridStyle, LineStyle, TickLineStyle};
use axis_rs::core::{AxisId, LinearCoord, Point, TickInput, normalize_ticks};
use axis_rs::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_normalize_10k_raw_ticks(c: &mut Criterion) {
    let inputs: Vec<TickInput> = (0..10_000).map(|i| TickInput::from(i.to_string())).collect();

    c.bench_function("normalize_10k_raw_ticks", |b| {
        b.iter(|| {
            let ticks = normalize_ticks(black_box(&inputs));
            black_box(ticks);
        })
    });
}

fn bench_full_paint_1k_ticks(c: &mut Criterion) {
    let coord = Arc::new(
        LinearCoord::new(Point::new(0.0, 1_000.0), Point::new(1_920.0, 1_000.0))
            .expect("valid axis"),
    );
    let config = AxisConfig::default()
        .with_line(LineStyle::default())
        .with_tick_line(TickLineStyle::default().with_length(5.0))
        .with_sub_ticks(2)
        .with_grid(GridStyle::default().with_start(Point::new(0.0, 0.0)))
        .with_auto_paint(false);

    let mut axis = AxisRenderer::new(
        AxisId::new("bench-axis"),
        NullRenderer::default(),
        coord,
        config,
    )
    .expect("axis init");

    let ticks: Vec<TickInput> = (0..1_000).map(|i| TickInput::from(i.to_string())).collect();
    axis.set_ticks(ticks).expect("set ticks");

    c.bench_function("full_paint_1k_ticks", |b| {
        b.iter(|| {
            axis.paint().expect("paint should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_normalize_10k_raw_ticks,
    bench_full_paint_1k_ticks
);
criterion_main!(benches);
