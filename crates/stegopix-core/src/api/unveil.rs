use std::path::{Path, PathBuf};

use log::info;

use crate::{engine, CodecOptions, Payload, SteganoError};

use super::shared::{load_carrier, write_output};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

/// what an unveil brought to light
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unveiled {
    /// a hidden text message
    Text(String),
    /// a hidden file, already written to this path
    File(PathBuf),
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file a hidden file payload will be saved to
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn use_output_file<A: AsRef<Path>>(mut self, output_file: Option<A>) -> Self {
        self.output_file = output_file.map(|f| f.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<Unveiled, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        let carrier = load_carrier(&secret_media, &self.options)?;
        match engine::unveil(&carrier, &self.options.strategy)? {
            Payload::Text(text) => Ok(Unveiled::Text(text)),
            Payload::File(data) => {
                let Some(output_file) = self.output_file else {
                    return Err(SteganoError::MissingParameter("result file"));
                };
                write_output(&output_file, &data)?;
                info!("Unveiled {} bytes into {output_file:?}", data.len());

                Ok(Unveiled::File(output_file))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_cover_png;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let cover = write_cover_png(temp_dir.path(), "cover.png", 32, 32);
        let secret = temp_dir.path().join("secret.png");
        crate::api::hide::prepare()
            .with_message("Hello World")
            .with_image(cover)
            .with_output(&secret)
            .execute()
            .expect("Failed to hide message in image");

        let unveiled = crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(unveiled, Unveiled::Text("Hello World".to_string()));
    }

    #[test]
    fn should_write_a_file_payload_to_the_result_file() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let cover = write_cover_png(temp_dir.path(), "cover.png", 64, 64);
        let secret = temp_dir.path().join("secret.png");
        let data_file = temp_dir.path().join("data.bin");
        std::fs::write(&data_file, [0x01, 0x02, 0x03, 0xfe]).unwrap();
        crate::api::hide::prepare()
            .with_file(&data_file)
            .with_image(cover)
            .with_output(&secret)
            .execute()
            .unwrap();

        let result_file = temp_dir.path().join("out").join("recovered.bin");
        let unveiled = prepare()
            .from_secret_file(&secret)
            .into_output_file(&result_file)
            .execute()
            .unwrap();

        assert_eq!(unveiled, Unveiled::File(result_file.clone()));
        assert_eq!(std::fs::read(result_file).unwrap(), vec![0x01, 0x02, 0x03, 0xfe]);
    }

    #[test]
    fn should_require_a_result_file_for_file_payloads() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let cover = write_cover_png(temp_dir.path(), "cover.png", 128, 128);
        let secret = temp_dir.path().join("secret.png");
        crate::api::hide::prepare()
            .with_file("Cargo.toml")
            .with_image(cover)
            .with_output(&secret)
            .execute()
            .unwrap();

        match prepare().from_secret_file(&secret).execute() {
            Err(SteganoError::MissingParameter(_)) => (),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn should_require_a_secret_image() {
        match prepare().execute() {
            Err(SteganoError::CarrierNotSet) => (),
            other => panic!("expected CarrierNotSet, got {other:?}"),
        }
        match prepare().from_secret_file("no-such-image.png").execute() {
            Err(SteganoError::NotFound(_)) => (),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
