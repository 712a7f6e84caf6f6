use std::path::{Path, PathBuf};

use log::info;

use crate::{engine, CodecOptions, SteganoError};

use super::shared::{load_carrier, write_output};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Dumps the recovered bits without interpreting them, type bit included,
/// packed most significant bit first and zero padded to whole bytes.
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilRawApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(SteganoError::TargetNotSet);
        };

        let carrier = load_carrier(&secret_media, &self.options)?;
        let bits = engine::unveil_bits(&carrier, &self.options.strategy)?;
        let content = bits.to_bytes()?;
        write_output(&destination_file, &content)?;
        info!("Dumped {} raw bits into {destination_file:?}", bits.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_cover_png;
    use tempfile::tempdir;

    #[test]
    fn should_dump_type_bit_and_data() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let cover = write_cover_png(temp_dir.path(), "cover.png", 16, 16);
        let secret = temp_dir.path().join("secret.png");
        crate::api::hide::prepare()
            .with_message("A")
            .with_image(cover)
            .with_output(&secret)
            .execute()
            .unwrap();

        let raw_file = temp_dir.path().join("raw.bin");
        crate::api::unveil_raw::prepare()
            .from_secret_file(&secret)
            .into_raw_file(&raw_file)
            .execute()
            .expect("Failed to unveil raw data");

        // 0 01000001 packed into two bytes
        assert_eq!(std::fs::read(raw_file).unwrap(), vec![0b0010_0000, 0b1000_0000]);
    }

    #[test]
    fn should_require_a_destination() {
        match prepare().from_secret_file("secret.png").execute() {
            Err(SteganoError::TargetNotSet) => (),
            other => panic!("expected TargetNotSet, got {other:?}"),
        }
    }
}
