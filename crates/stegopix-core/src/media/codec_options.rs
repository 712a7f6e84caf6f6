use crate::strategy::{Inline, Strategy};

/// Codec configuration for hiding and unveiling
///
/// Both sides of a secret have to agree on the very same options,
/// there is nothing stored inside the image that would tell them apart.
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// Decides which sites carry the payload and how the payload length is framed.
    pub strategy: Strategy,

    /// If true no alpha channel would be used for encoding,
    /// this reduces then the capacity by one bit per pixel
    pub skip_alpha_channel: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            strategy: Inline.into(),
            skip_alpha_channel: true,
        }
    }
}

impl CodecOptions {
    pub fn with_strategy(mut self, strategy: impl Into<Strategy>) -> Self {
        self.strategy = strategy.into();
        self
    }

    pub fn with_skip_alpha_channel(mut self, skip_alpha_channel: bool) -> Self {
        self.skip_alpha_channel = skip_alpha_channel;
        self
    }
}
