use std::path::PathBuf;

use clap::Args;
use stegopix_core::CodecOptions;

use crate::CliResult;

/// Shows how much data fits into a cover image
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Cover image, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let report = stegopix_core::commands::capacity(&self.media, options)?;

        println!(
            "{}x{} pixels with {} usable channels",
            report.width, report.height, report.channels
        );
        println!("capacity:    {} bits", report.capacity_bits);
        println!("header:      {} bits", report.header_bits);
        println!(
            "max payload: {} bits ({} bytes of text or file)",
            report.max_payload_bits,
            report.max_payload_bytes()
        );

        Ok(())
    }
}
