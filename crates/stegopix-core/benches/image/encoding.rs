use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use stegopix_core::media::image::CircleDirection;
use stegopix_core::strategy::{EquiDistribution, Inline, MidpointCircle, TransformDct};
use stegopix_core::{engine, Carrier, Payload, Strategy};

fn cover() -> Carrier {
    let img = RgbImage::from_fn(512, 512, |x, y| {
        Rgb([(x % 200 + 20) as u8, (y % 200 + 20) as u8, ((x + y) % 200 + 20) as u8])
    });

    Carrier::from_image(DynamicImage::ImageRgb8(img), true)
}

pub fn image_encoding(c: &mut Criterion) {
    let strategies: [(&str, Strategy); 4] = [
        ("Inline", Inline.into()),
        ("EquiDistribution", EquiDistribution.into()),
        (
            "MidpointCircle",
            MidpointCircle::new(CircleDirection::Clockwise).into(),
        ),
        (
            "TransformDct",
            TransformDct::new(8).expect("Invalid block size").into(),
        ),
    ];
    let secret_message = Payload::from("Hello World!");
    let plain_image = cover();

    for (name, strategy) in strategies {
        c.bench_function(&format!("Image Encoding {name}"), |b| {
            b.iter(|| {
                let mut carrier = plain_image.clone();
                engine::hide(&mut carrier, &strategy, &secret_message)
                    .expect("Cannot hide secret message");
            })
        });
    }
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
