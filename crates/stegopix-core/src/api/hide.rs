use std::path::{Path, PathBuf};

use log::info;

use crate::media::{is_png_extension, Persist};
use crate::{engine, CodecOptions, Payload, SteganoError};

use super::shared::load_carrier;

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// Hides either a text message or the content of one file, the last one set wins.
#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(self, message: &str) -> Self {
        self.use_message(Some(message))
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        if self.message.is_some() {
            self.file = None;
        }
        self
    }

    pub fn with_file<A: AsRef<Path>>(self, data_file: A) -> Self {
        self.use_file(Some(data_file))
    }

    pub fn use_file<A: AsRef<Path>>(mut self, data_file: Option<A>) -> Self {
        self.file = data_file.map(|f| f.as_ref().to_path_buf());
        if self.file.is_some() {
            self.message = None;
        }
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), SteganoError> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let payload = match (self.message, self.file) {
            (_, Some(file)) => Payload::from_file(&file)?,
            (Some(message), None) => Payload::Text(message),
            (None, None) => return Err(SteganoError::MissingMessage),
        };

        let mut carrier = load_carrier(&image, &self.options)?;
        engine::hide(&mut carrier, &self.options.strategy, &payload)?;
        carrier.save_as(&output)?;
        info!("Secret hidden in {output:?}");

        Ok(())
    }

    /// everything that can be checked without touching a single pixel
    fn validate(&self) -> Result<(), SteganoError> {
        if self.message.is_none() && self.file.is_none() {
            return Err(SteganoError::MissingMessage);
        }
        if self.image.is_none() {
            return Err(SteganoError::CarrierNotSet);
        }
        match &self.output {
            None => return Err(SteganoError::TargetNotSet),
            Some(output) if !is_png_extension(output) => {
                return Err(SteganoError::IncorrectFileType(output.clone()))
            }
            _ => {}
        }
        if let Some(file) = self.file.as_ref().filter(|f| !f.is_file()) {
            return Err(SteganoError::NotFound(file.clone()));
        }

        Ok(())
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

        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(cover)
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");

        assert!(temp_dir.path().join("image-with-secret.png").is_file());
    }

    #[test]
    fn should_require_a_message_or_file() {
        match prepare().with_image("a.png").with_output("b.png").execute() {
            Err(SteganoError::MissingMessage) => (),
            other => panic!("expected MissingMessage, got {other:?}"),
        }
    }

    #[test]
    fn should_require_carrier_and_target() {
        match prepare().with_message("x").with_output("b.png").execute() {
            Err(SteganoError::CarrierNotSet) => (),
            other => panic!("expected CarrierNotSet, got {other:?}"),
        }
        match prepare().with_message("x").with_image("a.png").execute() {
            Err(SteganoError::TargetNotSet) => (),
            other => panic!("expected TargetNotSet, got {other:?}"),
        }
    }

    #[test]
    fn should_refuse_a_lossy_target_before_loading_the_cover() {
        match prepare()
            .with_message("x")
            .with_image("missing-cover.png")
            .with_output("out.jpg")
            .execute()
        {
            Err(SteganoError::IncorrectFileType(path)) => assert_eq!(path, PathBuf::from("out.jpg")),
            other => panic!("expected IncorrectFileType, got {other:?}"),
        }
    }

    #[test]
    fn should_report_a_missing_payload_file() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let output = temp_dir.path().join("out.png");

        match prepare()
            .with_file("no-such-secret.bin")
            .with_image("missing-cover.png")
            .with_output(&output)
            .execute()
        {
            Err(SteganoError::NotFound(path)) => {
                assert_eq!(path, PathBuf::from("no-such-secret.bin"))
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(!output.exists());
    }

    #[test]
    fn should_let_the_last_payload_kind_win() {
        let api = prepare().with_file("Cargo.toml").with_message("text");
        assert_eq!(api.message.as_deref(), Some("text"));
        assert!(api.file.is_none());

        let api = api.with_file("Cargo.toml");
        assert!(api.message.is_none());
    }

    #[test]
    fn should_create_missing_output_folders() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let cover = write_cover_png(temp_dir.path(), "cover.png", 16, 16);
        let output = temp_dir.path().join("nested").join("deeper").join("secret.png");

        prepare()
            .with_message("hi")
            .with_image(cover)
            .with_output(&output)
            .execute()
            .expect("Failed to hide message in image");

        assert!(output.is_file());
    }
}
