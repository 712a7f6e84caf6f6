use std::path::PathBuf;

use clap::Args;
use stegopix_core::CodecOptions;

/// Unveils the raw secret bits without interpreting them
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self, options: CodecOptions) -> crate::CliResult<()> {
        stegopix_core::commands::unveil_raw(&self.media, &self.output_file, options)
    }
}
