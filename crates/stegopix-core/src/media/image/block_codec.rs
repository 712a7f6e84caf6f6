//! One payload bit per pixel block, carried by the highest frequency DCT coefficient.
//!
//! The image is cropped to whole blocks and tiled per channel. Tiles are numbered
//! row-major and the channels are interleaved per tile, so block `i` is tile
//! `i / channels` of channel `i % channels`.
//!
//! This is a coarse binary quantization of a single coefficient. Any lossy
//! re-encoding of the stego image destroys the payload.
//!
//! Written blocks are rounded and clamped to 8 bit values. Where clamping eats
//! into the coefficient, the residual is pushed along the coefficient's basis
//! onto the pixels that still have room, until the bit reads back.

use log::{debug, error};

use crate::bits::BitString;
use crate::error::SteganoError;
use crate::media::image::dct::DctPlan;
use crate::media::payload::block_capacity;
use crate::media::{Carrier, Geometry, Site};
use crate::result::Result;

/// value written into the coefficient for a `1` bit, a `0` bit writes zero
pub const EMBED_MAGNITUDE: f64 = 15.0;

/// coefficients below this value read as `0`
pub const DECODE_THRESHOLD: f64 = 7.5;

/// correction rounds per block before giving up on a saturated block
const MAX_CORRECTIONS: usize = 16;

/// Writes a single bit into a block of pixel values and reads it back.
pub struct BlockCodec {
    plan: DctPlan,
    /// pixel pattern of a unit highest frequency coefficient
    corner_basis: Vec<f64>,
}

impl BlockCodec {
    /// `block_size` has to be positive, see [`crate::strategy::TransformDct::new`]
    pub fn new(block_size: usize) -> Self {
        let plan = DctPlan::new(block_size);
        let mut unit = vec![0.0f64; block_size * block_size];
        if let Some(corner) = unit.last_mut() {
            *corner = 1.0;
        }
        let corner_basis = plan.inverse(&unit);

        Self { plan, corner_basis }
    }

    pub fn block_size(&self) -> usize {
        self.plan.size()
    }

    pub fn block_count(&self, geometry: &Geometry) -> usize {
        block_capacity(geometry, self.block_size())
    }

    /// the top-left site of block `index`
    pub fn block_origin(&self, geometry: &Geometry, index: usize) -> Site {
        let size = self.block_size();
        let tile = index / geometry.channels;
        let tiles_per_row = geometry.width / size;

        Site {
            x: (tile % tiles_per_row) * size,
            y: (tile / tiles_per_row) * size,
            channel: index % geometry.channels,
        }
    }

    fn block_sites(&self, geometry: &Geometry, index: usize) -> impl Iterator<Item = Site> {
        let size = self.block_size();
        let origin = self.block_origin(geometry, index);

        (0..size * size).map(move |i| Site {
            x: origin.x + i % size,
            y: origin.y + i / size,
            channel: origin.channel,
        })
    }

    fn highest_frequency(&self) -> usize {
        self.block_size() * self.block_size() - 1
    }

    /// replaces the highest frequency coefficient of `block` with the encoded bit
    pub fn embed_bit(&self, block: &[f64], bit: bool) -> Vec<f64> {
        let mut coeffs = self.plan.forward(block);
        coeffs[self.highest_frequency()] = if bit { EMBED_MAGNITUDE } else { 0.0 };
        self.plan.inverse(&coeffs)
    }

    pub fn extract_bit(&self, block: &[f64]) -> bool {
        self.plan.forward(block)[self.highest_frequency()] >= DECODE_THRESHOLD
    }

    /// Embeds `bit` and quantizes the block to 8 bit pixel values, so that the
    /// bit still reads back. `None` if the block can not be brought there.
    pub fn embed_quantized(&self, block: &[f64], bit: bool) -> Option<Vec<u8>> {
        let target = if bit { EMBED_MAGNITUDE } else { 0.0 };
        let corner = self.highest_frequency();
        let mut pixels: Vec<f64> = self.embed_bit(block, bit).into_iter().map(quantize).collect();

        for _ in 0..MAX_CORRECTIONS {
            if self.extract_bit(&pixels) == bit {
                return Some(pixels.into_iter().map(|p| p as u8).collect());
            }

            let residual = target - self.plan.forward(&pixels)[corner];
            let has_room = |p: f64, b: f64| {
                let step = residual * b;
                (step > 0.0 && p < 255.0) || (step < 0.0 && p > 0.0)
            };
            let energy: f64 = pixels
                .iter()
                .zip(&self.corner_basis)
                .filter(|(p, b)| has_room(**p, **b))
                .map(|(_, b)| b * b)
                .sum();
            if energy == 0.0 {
                return None;
            }

            for (p, b) in pixels.iter_mut().zip(&self.corner_basis) {
                if has_room(*p, *b) {
                    *p = quantize(*p + residual * b / energy);
                }
            }
        }

        None
    }

    fn read_block(&self, carrier: &Carrier, geometry: &Geometry, index: usize) -> Vec<f64> {
        self.block_sites(geometry, index)
            .map(|site| carrier.sample(&site) as f64)
            .collect()
    }

    /// Writes `bits[i]` into block `i`, blocks behind the last bit stay untouched.
    /// The carrier is only changed once every block reads back its bit.
    pub fn hide(&self, carrier: &mut Carrier, bits: &BitString) -> Result<()> {
        let geometry = carrier.geometry();
        debug!(
            "Hiding {} bits in {} blocks of {}x{}",
            bits.len(),
            self.block_count(&geometry),
            self.block_size(),
            self.block_size()
        );

        let mut stego_blocks = Vec::with_capacity(bits.len());
        for (index, bit) in bits.iter().enumerate().take(self.block_count(&geometry)) {
            let block = self.read_block(carrier, &geometry, index);
            let Some(stego) = self.embed_quantized(&block, bit) else {
                error!("Block {index} does not hold the bit {bit} after quantization");
                return Err(SteganoError::BlockSaturated { block: index });
            };
            stego_blocks.push(stego);
        }

        for (index, stego) in stego_blocks.into_iter().enumerate() {
            for (site, value) in self.block_sites(&geometry, index).zip(stego) {
                *carrier.sample_mut(&site) = value;
            }
        }

        Ok(())
    }

    /// reads the first `count` blocks
    pub fn unveil(&self, carrier: &Carrier, count: usize) -> BitString {
        let geometry = carrier.geometry();

        (0..count.min(self.block_count(&geometry)))
            .map(|index| self.extract_bit(&self.read_block(carrier, &geometry, index)))
            .collect()
    }
}

fn quantize(value: f64) -> f64 {
    value.round().clamp(0.0, 255.0)
}
