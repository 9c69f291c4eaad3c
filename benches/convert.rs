use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use stack2jxl::image_pipeline::{
    EncodeConfig, ImageStack, JxlEffort, SampleBuffer, StackToJxlPipeline,
};

fn synthetic_stack(planes: usize, size: usize) -> ImageStack {
    let samples: Vec<u16> = (0..planes * size * size)
        .map(|i| ((i * 31) % 4096) as u16)
        .collect();
    ImageStack::new(planes, size, size, SampleBuffer::U16(samples)).unwrap()
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");
    group.sample_size(10);

    let sizes = vec![(1, 128, "1x128x128"), (4, 128, "4x128x128"), (1, 512, "1x512x512")];

    for (planes, size, label) in sizes {
        let stack = synthetic_stack(planes, size);

        group.bench_with_input(BenchmarkId::from_parameter(label), &stack, |b, stack| {
            let config = EncodeConfig::builder().effort(JxlEffort::Falcon).build();
            let pipeline = StackToJxlPipeline::new(config);

            b.iter(|| {
                let mut output = Vec::new();
                let _ = pipeline.convert(black_box(stack), &mut output);
            });
        });
    }

    group.finish();
}

fn benchmark_effort_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("effort_levels");
    group.sample_size(10);
    let stack = synthetic_stack(1, 256);

    let efforts = vec![
        (JxlEffort::Lightning, "lightning"),
        (JxlEffort::Falcon, "falcon"),
        (JxlEffort::Squirrel, "squirrel"),
    ];

    for (effort, label) in efforts {
        group.bench_with_input(BenchmarkId::from_parameter(label), &stack, |b, stack| {
            let config = EncodeConfig::builder().effort(effort).build();
            let pipeline = StackToJxlPipeline::new(config);

            b.iter(|| {
                let mut output = Vec::new();
                let _ = pipeline.convert(black_box(stack), &mut output);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_effort_levels
);
criterion_main!(benches);
