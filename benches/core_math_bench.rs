use chart_viewport::core::{ChartComputator, Viewport};
use chart_viewport::interaction::{ChartScroller, FlingConfig};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn build_computator() -> ChartComputator {
    let mut computator = ChartComputator::new();
    computator.set_content_rect(1920, 1080, 0, 0, 0, 0);
    computator.set_maximum_viewport_edges(0.0, 100.0, 100.0, 0.0);
    computator.set_current_viewport(Viewport::new(0.0, 100.0, 100.0, 0.0));
    computator
}

fn bench_pixel_transform_round_trip(c: &mut Criterion) {
    let computator = build_computator();

    c.bench_function("pixel_transform_round_trip", |b| {
        b.iter(|| {
            let px = computator.compute_raw_x(black_box(43.21));
            let py = computator.compute_raw_y(black_box(67.89));
            let _ = computator.raw_pixels_to_data_point(px, py);
        })
    });
}

fn bench_constrain_viewport(c: &mut Criterion) {
    let mut computator = build_computator();

    c.bench_function("constrain_viewport", |b| {
        b.iter(|| {
            computator.set_current_viewport_edges(
                black_box(-5.0),
                black_box(120.0),
                black_box(3.0),
                black_box(-10.0),
            );
        })
    });
}

fn bench_fling_stepping_120_frames(c: &mut Criterion) {
    c.bench_function("fling_stepping_120_frames", |b| {
        b.iter(|| {
            let mut computator = build_computator();
            computator.set_current_viewport(Viewport::new(0.0, 100.0, 50.0, 50.0));
            let mut scroller = ChartScroller::new();
            scroller
                .set_fling_config(FlingConfig {
                    decay_per_second: 0.1,
                    stop_velocity_abs: 5.0,
                })
                .expect("valid fling config");
            scroller.fling(black_box(3_000.0), black_box(1_500.0), &computator);
            for _ in 0..120 {
                if !scroller.compute_scroll_offset(&mut computator, 1.0 / 60.0) {
                    break;
                }
            }
        })
    });
}

criterion_group!(
    benches,
    bench_pixel_transform_round_trip,
    bench_constrain_viewport,
    bench_fling_stepping_120_frames
);
criterion_main!(benches);
