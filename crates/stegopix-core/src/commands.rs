use std::path::{Path, PathBuf};

use crate::api::unveil::Unveiled;
use crate::media::payload::{header_length, lsb_capacity};
use crate::media::Carrier;
use crate::strategy::{Concealer, Strategy};
use crate::{CodecOptions, SteganoError};

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    data_file: Option<PathBuf>,
    message: Option<String>,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .use_file(data_file)
        .use_message(message)
        .execute()
}

pub fn unveil(
    secret_media: &Path,
    result_file: Option<&Path>,
    options: CodecOptions,
) -> Result<Unveiled, SteganoError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .use_output_file(result_file)
        .execute()
}

/// unveil all raw data, no content format interpretation is happening.
/// Just a raw binary dump of the bits gathered by the strategy.
pub fn unveil_raw(
    secret_media: &Path,
    destination_file: &Path,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::unveil_raw::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}

/// how many bits a cover image offers to one strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    /// raw bits the strategy can address
    pub capacity_bits: usize,
    /// width of the length header, zero for header-less strategies
    pub header_bits: usize,
    /// largest payload in bits, type bit included
    pub max_payload_bits: usize,
}

impl CapacityReport {
    pub fn of(carrier: &Carrier, strategy: &Strategy) -> Self {
        let geometry = carrier.geometry();
        let header_bits = match strategy {
            Strategy::Inline(_) | Strategy::EquiDistribution(_) => {
                header_length(lsb_capacity(&geometry))
            }
            Strategy::MidpointCircle(_) | Strategy::TransformDct(_) => 0,
        };

        Self {
            width: geometry.width,
            height: geometry.height,
            channels: geometry.channels,
            capacity_bits: strategy.capacity(&geometry),
            header_bits,
            max_payload_bits: strategy.max_payload_bits(&geometry),
        }
    }

    /// bytes of text or file content that still fit, the type bit subtracted
    pub fn max_payload_bytes(&self) -> usize {
        self.max_payload_bits.saturating_sub(1) / 8
    }
}

pub fn capacity(media: &Path, options: CodecOptions) -> Result<CapacityReport, SteganoError> {
    let carrier = Carrier::from_file(media, options.skip_alpha_channel)?;

    Ok(CapacityReport::of(&carrier, &options.strategy))
}
