use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::error;

use crate::media::Carrier;
use crate::{CodecOptions, SteganoError};

pub(crate) fn load_carrier(path: &Path, options: &CodecOptions) -> Result<Carrier, SteganoError> {
    Carrier::from_file(path, options.skip_alpha_channel)
}

/// writes `buf` to `target`, missing parent folders are created
pub(crate) fn write_output(target: &Path, buf: &[u8]) -> Result<(), SteganoError> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| {
            error!("Error creating folder {parent:?}: {source}");
            SteganoError::WriteError { source }
        })?;
    }

    let mut target_file =
        File::create(target).map_err(|source| SteganoError::WriteError { source })?;
    target_file
        .write_all(buf)
        .map_err(|source| SteganoError::WriteError { source })
}
