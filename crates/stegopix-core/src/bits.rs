//! Bit strings as they travel between payload framing and the embedding engines.
//!
//! Bytes are expanded most significant bit first, so `b"A"` becomes `01000001`.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use thiserror::Error;

use crate::result::Result;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid bit character {0:?}, only '0' and '1' are allowed")]
pub struct InvalidBitChar(pub char);

/// an ordered, owned sequence of bits
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString(Vec<bool>);

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// a string of `len` zero bits
    pub fn zeros(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// expands every byte into 8 bits, most significant bit first
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = BitReader::endian(bytes, BigEndian);
        let mut bits = Self::with_capacity(bytes.len() * 8);
        for _ in 0..bytes.len() * 8 {
            bits.push(reader.read_bit()?);
        }

        Ok(bits)
    }

    /// packs the bits into bytes, most significant bit first.
    /// A trailing partial byte is filled up with zero bits.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = BitWriter::endian(Vec::with_capacity(self.len().div_ceil(8)), BigEndian);
        for bit in self.iter() {
            writer.write_bit(bit)?;
        }
        writer.byte_align()?;

        Ok(writer.into_writer())
    }

    /// fixed width binary representation of `value`, zero padded on the left
    pub fn from_uint(value: usize, width: usize) -> Option<Self> {
        if bit_length(value) > width {
            return None;
        }

        Some(
            (0..width)
                .rev()
                .map(|shift| shift < usize::BITS as usize && (value >> shift) & 1 == 1)
                .collect(),
        )
    }

    /// plain base-2 parse, an empty string is `0`
    pub fn to_uint(&self) -> usize {
        self.iter()
            .fold(0usize, |acc, bit| (acc << 1) | usize::from(bit))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).copied()
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn append(&mut self, other: &BitString) {
        self.0.extend_from_slice(&other.0);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// copies out the bits in `range`
    pub fn slice(&self, range: Range<usize>) -> Self {
        Self(self.0[range].to_vec())
    }
}

/// number of bits needed to represent `value` as an unsigned integer, `bit_length(0) == 0`
pub fn bit_length(value: usize) -> usize {
    (usize::BITS - value.leading_zeros()) as usize
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString({self})")
    }
}

impl FromStr for BitString {
    type Err = InvalidBitChar;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(InvalidBitChar(other)),
            })
            .collect()
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<bool> for BitString {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}
