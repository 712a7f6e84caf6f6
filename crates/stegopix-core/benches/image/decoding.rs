use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use stegopix_core::strategy::{EquiDistribution, Inline, MidpointCircle, TransformDct};
use stegopix_core::{engine, Carrier, Payload, Strategy};

pub fn image_decoding(c: &mut Criterion) {
    let strategies: [(&str, Strategy); 4] = [
        ("Inline", Inline.into()),
        ("EquiDistribution", EquiDistribution.into()),
        ("MidpointCircle", MidpointCircle::default().into()),
        ("TransformDct", TransformDct::default().into()),
    ];

    for (name, strategy) in strategies {
        let img = RgbImage::from_fn(512, 512, |x, y| {
            Rgb([(x % 200 + 20) as u8, (y % 200 + 20) as u8, 128])
        });
        let mut carrier = Carrier::from_image(DynamicImage::ImageRgb8(img), true);
        engine::hide(&mut carrier, &strategy, &Payload::from("Hello World!"))
            .expect("Cannot hide secret message");

        c.bench_function(&format!("Image Decoding {name}"), |b| {
            b.iter(|| engine::unveil(&carrier, &strategy).expect("Failed to unveil the message"))
        });
    }
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
