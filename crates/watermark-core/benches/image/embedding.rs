use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbImage;
use watermark_core::{embed, BitDepth, Raster, WatermarkOptions};

pub fn image_embedding(c: &mut Criterion) {
    let plain_image = Raster::from(RgbImage::from_fn(512, 512, |x, y| {
        image::Rgb([x as u8, y as u8, (x ^ y) as u8])
    }));
    let secret_text = "© 2024 Example Studio, generated image. ".repeat(20);

    for bit_depth in BitDepth::ALL {
        c.bench_function(&format!("Image Embedding, bit depth {bit_depth}"), |b| {
            let options = WatermarkOptions::default().with_bit_depth(bit_depth);
            b.iter(|| {
                embed(&plain_image, &secret_text, &options).expect("Cannot embed watermark");
            })
        });
    }
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);
