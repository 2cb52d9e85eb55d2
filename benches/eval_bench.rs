//! Benchmarks for the color-synthesis pipeline.
//!
//! Measures:
//!   1. Per-point evaluator throughput (classify, noise, mix, radial,
//!      horizon) — the per-fragment hot path
//!   2. Full-frame rendering at various resolutions (rayon scaling)
//!   3. Request overhead: JSON parse → compile → render → serialize
//!
//! Run with:
//!   cargo bench --bench eval_bench
//!
//! Results are written to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use fragtint_lib::eval::bands::BandSet;
use fragtint_lib::eval::frame::render_frame;
use fragtint_lib::eval::horizon::{horizon_color, HorizonPalette, HORIZON_Y};
use fragtint_lib::eval::noise::hash_noise;
use fragtint_lib::eval::radial::radial_field;
use fragtint_lib::eval::temporal::mix_over_time;
use fragtint_lib::{ClampMode, Color, FrameParams, Scene};
use serde_json::json;

// ── Param factories ────────────────────────────────────────────────

fn params(width: u32, height: u32) -> FrameParams {
    FrameParams {
        width,
        height,
        time: 1.25,
        pointer: [width as f32 / 2.0, height as f32 / 2.0],
        clamp: ClampMode::Overshoot,
    }
}

// ── 1. Per-point evaluators ────────────────────────────────────────

fn bench_point_evaluators(c: &mut Criterion) {
    let mut group = c.benchmark_group("point");
    group.throughput(Throughput::Elements(1));

    let bands = BandSet::three_band();
    group.bench_function("classify", |b| {
        b.iter(|| bands.classify(black_box(7.3)))
    });
    group.bench_function("classify_perturbed", |b| {
        b.iter(|| bands.classify_perturbed(black_box(0.4), black_box([417.5, 93.5, 0.0])))
    });
    group.bench_function("hash_noise", |b| {
        b.iter(|| hash_noise(black_box([417.5, 93.5, 0.0])))
    });

    let blue = Color::rgb(0.298, 0.4392, 0.6745);
    let amber = Color::rgb(0.8784, 0.4902, 0.1686);
    group.bench_function("mix_over_time", |b| {
        b.iter(|| mix_over_time(black_box(1.25), black_box(blue), black_box(amber)))
    });

    group.bench_function("radial_field", |b| {
        b.iter(|| {
            radial_field(
                black_box([123.5, 456.5]),
                black_box([400.0, 300.0]),
                black_box([800.0, 600.0]),
                black_box(1.25),
            )
        })
    });

    let palette = HorizonPalette::default();
    group.bench_function("horizon_color", |b| {
        b.iter(|| {
            horizon_color(
                black_box(0.4),
                black_box(0.3),
                black_box(1.25),
                &palette,
                HORIZON_Y,
            )
        })
    });

    group.finish();
}

// ── 2. Frame scaling ───────────────────────────────────────────────

fn bench_frame_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    let scenes = [
        ("terrain", json!({"mode": "terrain"})),
        ("radial", json!({"mode": "radial"})),
        ("horizon", json!({"mode": "horizon"})),
    ];

    for (name, request) in scenes {
        let scene = Scene::from_json(&request).unwrap();
        for size in [64u32, 128, 256] {
            let p = params(size, size);
            group.throughput(Throughput::Elements(size as u64 * size as u64));
            group.bench_with_input(
                BenchmarkId::new(name, format!("{size}x{size}")),
                &p,
                |b, p| b.iter(|| render_frame(&scene, black_box(p))),
            );
        }
    }

    group.finish();
}

// ── 3. Request path ────────────────────────────────────────────────

fn bench_request_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("request");

    let request = json!({
        "mode": "temporal",
        "colorA": {"r": 0.298, "g": 0.4392, "b": 0.6745},
        "colorB": {"r": 0.8784, "g": 0.4902, "b": 0.1686},
        "gradient": true
    })
    .to_string();

    group.bench_function("parse_compile_render_serialize_64", |b| {
        b.iter(|| {
            let value: serde_json::Value = serde_json::from_str(black_box(&request)).unwrap();
            let scene = Scene::from_json(&value).unwrap();
            let frame = render_frame(&scene, &params(64, 64));
            serde_json::to_string(&frame).unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_point_evaluators,
    bench_frame_scaling,
    bench_request_path
);
criterion_main!(benches);
