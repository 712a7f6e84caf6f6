use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::bits::BitString;
use crate::result::Result;
use crate::SteganoError;

/// type bit of a text payload
pub const TEXT_TYPE_BIT: bool = false;
/// type bit of a file payload
pub const FILE_TYPE_BIT: bool = true;

/// The secret that travels through a carrier, a single leading bit tells both kinds apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    File(Vec<u8>),
}

impl Payload {
    /// Creates a file payload with the full content of the given file.
    pub fn from_file<P: AsRef<Path> + ?Sized>(file: &P) -> Result<Self> {
        let path = file.as_ref();
        if !path.is_file() {
            return Err(SteganoError::NotFound(path.to_path_buf()));
        }
        let mut fd = File::open(path).map_err(|source| SteganoError::ReadError { source })?;
        let mut buf = Vec::new();
        fd.read_to_end(&mut buf)
            .map_err(|source| SteganoError::ReadError { source })?;

        Ok(Payload::File(buf))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Payload::Text(_))
    }

    fn type_bit(&self) -> bool {
        match self {
            Payload::Text(_) => TEXT_TYPE_BIT,
            Payload::File(_) => FILE_TYPE_BIT,
        }
    }

    fn data(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::File(data) => data,
        }
    }

    /// type bit followed by every data byte, most significant bit first
    pub fn to_bits(&self) -> Result<BitString> {
        let mut bits = BitString::with_capacity(1 + self.data().len() * 8);
        bits.push(self.type_bit());
        bits.append(&BitString::from_bytes(self.data())?);

        Ok(bits)
    }

    /// Re-assembles a payload from recovered bits.
    ///
    /// Data bits that are not a multiple of 8 are zero padded on the left first,
    /// which restores leading zeros dropped by the header-less strategies.
    pub fn from_bits(bits: &BitString) -> Result<Self> {
        let Some(type_bit) = bits.get(0) else {
            return Err(SteganoError::NoSecretData);
        };

        let data = bits.slice(1..bits.len());
        let mut padded = BitString::zeros((8 - data.len() % 8) % 8);
        padded.append(&data);
        let bytes = padded.to_bytes()?;

        if type_bit == FILE_TYPE_BIT {
            Ok(Payload::File(bytes))
        } else {
            Ok(Payload::Text(String::from_utf8(bytes)?))
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_owned())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(data: Vec<u8>) -> Self {
        Payload::File(data)
    }
}
