use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use eyedropper_rs::image_pipeline::{ImageBuffer, WhitePointCorrector};

fn generate_mock_image(width: usize, height: usize) -> ImageBuffer {
    let mut samples = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            samples.push(((x + y) % 256) as u8);
            samples.push(((x * 3) % 256) as u8);
            samples.push(((y * 7) % 256) as u8);
            samples.push(255);
        }
    }
    ImageBuffer::new(width, height, samples).expect("valid mock image")
}

fn benchmark_correction_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("correction_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (2000, 1500, "2000x1500"),
    ];

    for (width, height, label) in sizes {
        let image = generate_mock_image(width, height);
        let corrector = WhitePointCorrector::default();

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &image,
            |b, image| {
                b.iter(|| corrector.correct(black_box(image), 37, 41));
            },
        );
    }

    group.finish();
}

fn benchmark_parallel_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_threshold");
    let image = generate_mock_image(2000, 1500);

    group.bench_function("sequential", |b| {
        let corrector = WhitePointCorrector::new(usize::MAX);
        b.iter(|| corrector.correct(black_box(&image), 37, 41));
    });

    group.bench_function("parallel", |b| {
        let corrector = WhitePointCorrector::new(0);
        b.iter(|| corrector.correct(black_box(&image), 37, 41));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_correction_sizes,
    benchmark_parallel_threshold
);
criterion_main!(benches);
