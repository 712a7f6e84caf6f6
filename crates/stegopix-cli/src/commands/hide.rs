use std::path::PathBuf;

use clap::Args;
use stegopix_core::CodecOptions;

use crate::CliResult;

/// Hides a text message or a file in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Cover image, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        stegopix_core::commands::hide(
            &self.media,
            &self.write_to_file,
            self.data_file,
            self.message,
            options,
        )
    }
}
