use std::path::PathBuf;

use clap::Args;
use stegopix_core::api::unveil::Unveiled;
use stegopix_core::CodecOptions;

use crate::CliResult;

/// Unveils a text message or a file from a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// A hidden file will be stored as this file, required for file secrets
    #[arg(short = 'o', long = "out", value_name = "result file")]
    pub result_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        match stegopix_core::commands::unveil(&self.media, self.result_file.as_deref(), options)? {
            Unveiled::Text(text) => println!("{text}"),
            Unveiled::File(path) => println!("Secret file written to {}", path.display()),
        }

        Ok(())
    }
}
