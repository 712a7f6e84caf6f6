//! Whole-capacity framing for the strategies that carry no length header.
//!
//! The leading type bit stays in front, the remaining payload is right aligned and
//! the gap in between is filled with zeros, so that every carrier slot is written.
//! Reading it back trims the zeros after the type bit. Payload data that itself
//! starts with zero bits is indistinguishable from the fill and loses those bits.

use crate::bits::BitString;
use crate::result::Result;

use super::ensure_capacity;

/// spreads `payload` over exactly `capacity` bits
pub fn fill_capacity(payload: &BitString, capacity: usize) -> Result<BitString> {
    ensure_capacity(payload.len(), capacity)?;

    let mut filled = BitString::with_capacity(capacity);
    let mut bits = payload.iter();
    if let Some(type_bit) = bits.next() {
        filled.push(type_bit);
    }
    filled.extend(std::iter::repeat(false).take(capacity - payload.len()));
    filled.extend(bits);

    Ok(filled)
}

/// inverse of [`fill_capacity`], up to leading zeros of the data behind the type bit
pub fn strip_fill(filled: &BitString) -> BitString {
    let mut bits = filled.iter();
    let mut payload = BitString::new();
    if let Some(type_bit) = bits.next() {
        payload.push(type_bit);
    }
    payload.extend(bits.skip_while(|bit| !bit));

    payload
}
