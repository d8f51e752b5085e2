//! Whole-buffer transform benchmarks
//!
//! Run with: cargo bench --bench buffer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use chroma::*;

fn create_test_image(size: u32) -> PixelBuffer {
    PixelBuffer::from_fn(Dimensions::new(size, size), |x, y| {
        [
            ((x * 255) / size) as u8,
            ((y * 255) / size) as u8,
            128,
            255,
        ]
    })
    .unwrap()
}

fn bench_transform_by_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("Transform by Model");
    let image = create_test_image(256);
    let options = TransformOptions::default();

    group.throughput(Throughput::Elements(image.pixel_count() as u64));
    for model in ColorModel::ALL {
        let adjustment = Adjustment::zero(model);
        let mut deltas = adjustment.deltas();
        deltas[0] = 10;
        let adjustment = Adjustment::from_deltas(model, &deltas).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(model), &adjustment, |b, adj| {
            b.iter(|| transform(black_box(&image), model, Some(adj), &options));
        });
    }

    group.finish();
}

fn bench_parallel_vs_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parallel vs Sequential");
    let adjustment = Adjustment::Lab(LabDelta { l: 10, ..Default::default() });

    for &size in &[64u32, 256, 1024] {
        let image = create_test_image(size);
        group.throughput(Throughput::Elements(image.pixel_count() as u64));

        for (label, options) in [
            ("parallel", TransformOptions::new().parallel_threshold(1)),
            ("sequential", TransformOptions::sequential()),
        ] {
            group.bench_with_input(
                BenchmarkId::new(label, format!("{size}x{size}")),
                &image,
                |b, image| {
                    b.iter(|| {
                        transform(black_box(image), ColorModel::Lab, Some(&adjustment), &options)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_transform_by_model, bench_parallel_vs_sequential);
criterion_main!(benches);
