use clap::{Parser, Subcommand, ValueEnum};
use stegopix_core::media::image::CircleDirection;
use stegopix_core::strategy::{
    EquiDistribution, Inline, MidpointCircle, TransformDct, DEFAULT_BLOCK_SIZE,
};
use stegopix_core::{CodecOptions, Strategy};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// How the secret is spread over the image, hide and unveil must agree on it
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyArg::Inline)]
    pub strategy: StrategyArg,

    /// Edge length of the pixel blocks of the dct strategy
    #[arg(long, global = true, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    /// Walking direction of the circle strategy
    #[arg(long, global = true, value_enum, default_value_t = DirectionArg::Clockwise)]
    pub direction: DirectionArg,

    /// Experimental: use the alpha channel of the image as carrier too
    #[arg(long = "x-use-alpha-channel", global = true)]
    pub use_alpha_channel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    /// length header and payload in scan order
    Inline,
    /// length header, payload spread evenly over the image
    EquiDistribution,
    /// payload on the circle inscribed into the image
    MidpointCircle,
    /// one bit per pixel block in the frequency domain
    TransformDct,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionArg {
    Clockwise,
    CounterClockwise,
}

impl From<DirectionArg> for CircleDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Clockwise => CircleDirection::Clockwise,
            DirectionArg::CounterClockwise => CircleDirection::CounterClockwise,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
}

impl CliArgs {
    pub fn codec_options(&self) -> CliResult<CodecOptions> {
        let strategy: Strategy = match self.strategy {
            StrategyArg::Inline => Inline.into(),
            StrategyArg::EquiDistribution => EquiDistribution.into(),
            StrategyArg::MidpointCircle => MidpointCircle::new(self.direction.into()).into(),
            StrategyArg::TransformDct => TransformDct::new(self.block_size)?.into(),
        };

        Ok(CodecOptions::default()
            .with_strategy(strategy)
            .with_skip_alpha_channel(!self.use_alpha_channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use stegopix_core::SteganoError;

    #[test]
    fn should_have_a_valid_command_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_default_to_inline_without_alpha() {
        let args = CliArgs::parse_from(["stegopix", "capacity", "-i", "cover.png"]);
        let options = args.codec_options().unwrap();

        assert_eq!(options.strategy, Strategy::from(Inline));
        assert!(options.skip_alpha_channel);
    }

    #[test]
    fn should_map_the_strategy_flags() {
        let args = CliArgs::parse_from([
            "stegopix",
            "unveil",
            "-i",
            "secret.png",
            "--strategy",
            "midpoint-circle",
            "--direction",
            "counter-clockwise",
            "--x-use-alpha-channel",
        ]);
        let options = args.codec_options().unwrap();

        assert_eq!(
            options.strategy,
            Strategy::from(MidpointCircle::new(CircleDirection::CounterClockwise))
        );
        assert!(!options.skip_alpha_channel);
    }

    #[test]
    fn should_refuse_a_zero_block_size() {
        let args = CliArgs::parse_from([
            "stegopix",
            "capacity",
            "-i",
            "cover.png",
            "-s",
            "transform-dct",
            "--block-size",
            "0",
        ]);

        match args.codec_options() {
            Err(SteganoError::MissingParameter(_)) => (),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn should_require_a_message_or_a_data_file() {
        assert!(CliArgs::try_parse_from(["stegopix", "hide", "-i", "a.png", "-o", "b.png"]).is_err());
        assert!(CliArgs::try_parse_from([
            "stegopix", "hide", "-i", "a.png", "-o", "b.png", "-m", "text", "-d", "file.bin"
        ])
        .is_err());
    }
}
