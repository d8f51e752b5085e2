//! Per-color conversion benchmarks
//!
//! Run with: cargo bench --bench conversions

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chroma::*;

fn sample_colors() -> Vec<Rgb> {
    (0..=255u8)
        .step_by(17)
        .flat_map(|r| (0..=255u8).step_by(51).map(move |g| Rgb::new(r, g, 255 - r)))
        .collect()
}

fn bench_roundtrip<C: ColorSpace>(c: &mut Criterion, colors: &[Rgb]) {
    let mut group = c.benchmark_group(format!("{} conversion", C::MODEL));

    group.bench_function("forward", |b| {
        b.iter(|| {
            for &rgb in colors {
                black_box(C::from_rgb(black_box(rgb)));
            }
        });
    });

    let converted: Vec<C> = colors.iter().map(|&rgb| C::from_rgb(rgb)).collect();
    group.bench_function("inverse", |b| {
        b.iter(|| {
            for &color in &converted {
                black_box(black_box(color).to_rgb());
            }
        });
    });

    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    let colors = sample_colors();
    bench_roundtrip::<Hsv>(c, &colors);
    bench_roundtrip::<Cmyk>(c, &colors);
    bench_roundtrip::<Lab>(c, &colors);
    bench_roundtrip::<Yuv>(c, &colors);
}

fn bench_adjust(c: &mut Criterion) {
    let colors = sample_colors();
    let mut group = c.benchmark_group("Adjustment");

    let adjustments = [
        Adjustment::Rgb(RgbDelta { r: 20, g: -10, b: 5 }),
        Adjustment::Hsv(HsvDelta { h: 45, s: 10, v: -5 }),
        Adjustment::Cmyk(CmykDelta { k: 15, ..Default::default() }),
        Adjustment::Lab(LabDelta { l: 5, a: -10, b: 10 }),
        Adjustment::Yuv(YuvDelta { y: 10, u: 5, v: -5 }),
    ];

    for adjustment in &adjustments {
        group.bench_function(adjustment.model().name(), |b| {
            b.iter(|| {
                for &rgb in &colors {
                    black_box(apply_adjustment(black_box(rgb), adjustment));
                }
            });
        });
    }

    group.bench_function("format", |b| {
        b.iter(|| {
            for &rgb in &colors {
                for model in ColorModel::ALL {
                    black_box(format(black_box(rgb), model));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_conversions, bench_adjust);
criterion_main!(benches);
