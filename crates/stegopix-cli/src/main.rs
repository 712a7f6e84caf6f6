use clap::Parser;
use log::debug;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = stegopix_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options()?;
    debug!("Running with {options:?}");

    match args.command {
        Commands::Hide(cmd) => cmd.run(options),
        Commands::Unveil(cmd) => cmd.run(options),
        Commands::UnveilRaw(cmd) => cmd.run(options),
        Commands::Capacity(cmd) => cmd.run(options),
    }
}
