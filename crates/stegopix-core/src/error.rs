use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a payload that does not fit into the carrier with the chosen strategy
    #[error("Capacity Error: {required} bits are required, but the carrier offers only {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a payload length that can not be expressed in the fixed header width
    #[error("Header Error: the value {value} does not fit into a header of {width} bits")]
    HeaderOverflow { value: usize, width: usize },

    /// Represents a decoded length header that points beyond the carrier capacity,
    /// for example when a carrier never contained a secret or the strategy is the wrong one
    #[error("Header Error: a payload of {length} bits was announced, but only {available} bits are available")]
    HeaderOutOfRange { length: usize, available: usize },

    /// Represents a pixel block that can not hold its bit within the 8 bit value range
    #[error("Capacity Error: block {block} can not hold its bit without leaving the pixel value range")]
    BlockSaturated { block: usize },

    /// Represents a structurally required value that was not supplied, e.g. a result file or a block size
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// Represents a cover or output path that is not a supported lossless image format
    #[error("Incorrect file type: {0:?} is not a supported lossless image")]
    IncorrectFileType(PathBuf),

    /// Represents a referenced file that does not exist
    #[error("File not found: {0:?}")]
    NotFound(PathBuf),

    /// Represents an image that can not be turned back into an image buffer
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents the error of invalid UTF-8 text data found inside of a text only message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents an unveil of no secret data. For example when a media did not contain any secrets
    #[error("No secret data found")]
    NoSecretData,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message or file")]
    MissingMessage,
}
