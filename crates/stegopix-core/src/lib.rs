//! # Stegopix Core API
//!
//! Hides a text message or the content of a file inside a lossless image and
//! reads it back. How the payload is spread over the image is decided by a
//! [`Strategy`]:
//! - [`Inline`][inline] writes a length header followed by the payload into the lowest bits
//! - [`EquiDistribution`][equi] spreads the payload evenly over the whole image
//! - [`MidpointCircle`][circle] writes onto the circle inscribed into the image
//! - [`TransformDct`][dct] carries one bit per pixel block in the frequency domain
//!
//! Hiding and unveiling must use the very same [`CodecOptions`], nothing inside
//! the image tells the strategies apart.
//!
//! # Usage Examples
//!
//! ## Hide data inside an image
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let cover = temp_dir.path().join("cover.png");
//! RgbImage::from_fn(64, 64, |x, y| Rgb([x as u8, y as u8, 128]))
//!     .save(&cover)
//!     .expect("Failed to write the cover image");
//!
//! stegopix_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&cover)
//!     .with_output(temp_dir.path().join("image-with-a-secret-inside.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil data from an image
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use stegopix_core::api::unveil::Unveiled;
//! use stegopix_core::strategy::EquiDistribution;
//! use stegopix_core::CodecOptions;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let cover = temp_dir.path().join("cover.png");
//! let secret = temp_dir.path().join("secret.png");
//! RgbImage::from_fn(64, 64, |x, y| Rgb([x as u8, y as u8, 128]))
//!     .save(&cover)
//!     .expect("Failed to write the cover image");
//! let options = CodecOptions::default().with_strategy(EquiDistribution);
//!
//! stegopix_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&cover)
//!     .with_output(&secret)
//!     .with_options(options.clone())
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let unveiled = stegopix_core::api::unveil::prepare()
//!     .from_secret_file(&secret)
//!     .with_options(options)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(unveiled, Unveiled::Text("Hello, World!".to_string()));
//! ```
//!
//! [inline]: ./strategy/struct.Inline.html
//! [equi]: ./strategy/struct.EquiDistribution.html
//! [circle]: ./strategy/struct.MidpointCircle.html
//! [dct]: ./strategy/struct.TransformDct.html

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod bits;
pub mod commands;
pub mod engine;
pub mod error;
pub mod media;
pub mod message;
pub mod result;
pub mod strategy;

pub use crate::bits::BitString;
pub use crate::error::SteganoError;
pub use crate::media::{Carrier, CodecOptions, Persist};
pub use crate::message::Payload;
pub use crate::result::Result;
pub use crate::strategy::{Concealer, Strategy};

#[cfg(test)]
mod test_utils {
    use std::path::{Path, PathBuf};

    use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};

    use crate::media::Carrier;

    /// 4x4 RGB, every channel value is even:
    /// (0,0) -> (0, 2, 4) | (1,0) -> (6, 8, 10) | ...
    pub fn prepare_4x4_rgb_image() -> Carrier {
        let img: RgbImage = ImageBuffer::from_fn(4, 4, |x, y| {
            let i = ((x + 4 * y) * 6) as u8;
            Rgb([i, i + 2, i + 4])
        });

        Carrier::from_image(DynamicImage::ImageRgb8(img), true)
    }

    /// slowly varying mid-range colors, far enough from 0 and 255 for the block transform
    pub fn prepare_smooth_rgb_image(width: u32, height: u32) -> Carrier {
        Carrier::from_image(DynamicImage::ImageRgb8(smooth_rgb(width, height)), true)
    }

    /// writes a smooth RGB cover image as PNG into `dir`
    pub fn write_cover_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        smooth_rgb(width, height)
            .save(&path)
            .expect("Failed to write the cover image");

        path
    }

    fn smooth_rgb(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([
                (90 + (x + y) % 40) as u8,
                (120 + x % 17) as u8,
                (60 + y % 23) as u8,
            ])
        })
    }
}
