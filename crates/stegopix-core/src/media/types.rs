use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat};
use log::{debug, error};

use crate::error::SteganoError;
use crate::media::{Geometry, Persist, Site};
use crate::result::Result;

/// the 8 bit color layouts a carrier keeps untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayout {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ColorLayout {
    /// channels stored per pixel
    pub fn stride(&self) -> usize {
        match self {
            ColorLayout::Luma => 1,
            ColorLayout::LumaAlpha => 2,
            ColorLayout::Rgb => 3,
            ColorLayout::Rgba => 4,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, ColorLayout::LumaAlpha | ColorLayout::Rgba)
    }
}

/// a raster image owned for the duration of one hide or unveil call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    width: usize,
    height: usize,
    layout: ColorLayout,
    skip_alpha_channel: bool,
    samples: Vec<u8>,
}

impl Carrier {
    /// loads a cover or stego image, the file extension is not consulted
    pub fn from_file(path: &Path, skip_alpha_channel: bool) -> Result<Self> {
        if !path.exists() {
            return Err(SteganoError::NotFound(path.to_path_buf()));
        }
        let image = image::open(path).map_err(|e| {
            error!("Error decoding image {path:?}: {e}");
            SteganoError::IncorrectFileType(path.to_path_buf())
        })?;

        Ok(Self::from_image(image, skip_alpha_channel))
    }

    pub fn from_image(image: DynamicImage, skip_alpha_channel: bool) -> Self {
        let (width, height) = image.dimensions();
        let (layout, samples) = match image {
            DynamicImage::ImageLuma8(i) => (ColorLayout::Luma, i.into_raw()),
            DynamicImage::ImageLumaA8(i) => (ColorLayout::LumaAlpha, i.into_raw()),
            DynamicImage::ImageRgb8(i) => (ColorLayout::Rgb, i.into_raw()),
            DynamicImage::ImageRgba8(i) => (ColorLayout::Rgba, i.into_raw()),
            other if other.color().has_alpha() => (ColorLayout::Rgba, other.to_rgba8().into_raw()),
            other => (ColorLayout::Rgb, other.to_rgb8().into_raw()),
        };
        debug!("Carrier {width}x{height} with layout {layout:?}");

        Self {
            width: width as usize,
            height: height as usize,
            layout,
            skip_alpha_channel,
            samples,
        }
    }

    pub fn layout(&self) -> ColorLayout {
        self.layout
    }

    /// the geometry the strategies work on, a skipped alpha channel does not count
    pub fn geometry(&self) -> Geometry {
        let stride = self.layout.stride();
        let channels = if self.skip_alpha_channel && self.layout.has_alpha() {
            stride - 1
        } else {
            stride
        };

        Geometry::new(self.width, self.height, channels)
    }

    fn offset(&self, site: &Site) -> usize {
        (site.y * self.width + site.x) * self.layout.stride() + site.channel
    }

    pub fn sample(&self, site: &Site) -> u8 {
        self.samples[self.offset(site)]
    }

    pub fn sample_mut(&mut self, site: &Site) -> &mut u8 {
        let offset = self.offset(site);
        &mut self.samples[offset]
    }

    /// all stored channel values, alpha included, in row-major order
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn into_image(self) -> Result<DynamicImage> {
        let (w, h) = (self.width as u32, self.height as u32);
        let image = match self.layout {
            ColorLayout::Luma => ImageBuffer::from_raw(w, h, self.samples).map(DynamicImage::ImageLuma8),
            ColorLayout::LumaAlpha => {
                ImageBuffer::from_raw(w, h, self.samples).map(DynamicImage::ImageLumaA8)
            }
            ColorLayout::Rgb => ImageBuffer::from_raw(w, h, self.samples).map(DynamicImage::ImageRgb8),
            ColorLayout::Rgba => {
                ImageBuffer::from_raw(w, h, self.samples).map(DynamicImage::ImageRgba8)
            }
        };

        image.ok_or(SteganoError::InvalidImageMedia)
    }
}

/// only PNG is accepted as output, everything else would destroy the hidden bits
pub fn is_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        if !is_png_extension(file) {
            return Err(SteganoError::IncorrectFileType(file.to_path_buf()));
        }
        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                error!("Error creating folder {parent:?}: {e}");
                SteganoError::WriteError { source: e }
            })?;
        }

        self.clone()
            .into_image()?
            .save_with_format(file, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image {file:?}: {e}");
                SteganoError::ImageEncodingError
            })
    }
}
