use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbImage;
use watermark_core::{embed, extract, BitDepth, Raster, WatermarkOptions};

pub fn image_extraction(c: &mut Criterion) {
    let plain_image = Raster::from(RgbImage::new(512, 512));
    let marked = embed(
        &plain_image,
        &"Hello World! ".repeat(40),
        &WatermarkOptions::default().with_compression(false),
    )
    .expect("Cannot embed watermark");

    c.bench_function("Image Extraction", |b| {
        b.iter(|| {
            assert!(!extract(&marked, BitDepth::Two).is_empty());
        })
    });

    c.bench_function("Image Extraction, unmarked", |b| {
        b.iter(|| extract(&plain_image, BitDepth::Two))
    });
}

criterion_group!(benches, image_extraction);
criterion_main!(benches);
