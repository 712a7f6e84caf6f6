//! Capacity bounds and the self-describing length header.
//!
//! The header is a fixed width unsigned integer holding the payload length in bits.
//! Its width is derived from the carrier capacity alone, so a decoder can read it
//! back before it knows anything about the payload.

use crate::bits::{bit_length, BitString};
use crate::error::SteganoError;
use crate::media::Geometry;
use crate::result::Result;

/// one bit per carrier channel value
pub fn lsb_capacity(geometry: &Geometry) -> usize {
    geometry.samples()
}

/// one bit per `block_size`×`block_size` tile per channel, partial tiles at the
/// right and bottom border are cropped away
pub fn block_capacity(geometry: &Geometry, block_size: usize) -> usize {
    if block_size == 0 {
        return 0;
    }
    (geometry.width / block_size) * (geometry.height / block_size) * geometry.channels
}

/// width of the length header for a carrier of `capacity` bits
pub fn header_length(capacity: usize) -> usize {
    bit_length(capacity)
}

/// zero padded, fixed width binary representation of `payload_bits`
pub fn encode_header(payload_bits: usize, header_length: usize) -> Result<BitString> {
    BitString::from_uint(payload_bits, header_length).ok_or(SteganoError::HeaderOverflow {
        value: payload_bits,
        width: header_length,
    })
}

/// plain base-2 parse, a corrupted header yields a plausible but wrong length
pub fn decode_header(header: &BitString) -> usize {
    header.to_uint()
}

/// fails with [`SteganoError::CapacityExceeded`] if `required` bits do not fit into `available`
pub fn ensure_capacity(required: usize, available: usize) -> Result<()> {
    if required > available {
        return Err(SteganoError::CapacityExceeded {
            required,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_count_one_bit_per_channel_value() {
        assert_eq!(lsb_capacity(&Geometry::new(4, 4, 3)), 48);
        assert_eq!(lsb_capacity(&Geometry::new(0, 4, 3)), 0);
    }

    #[test]
    fn should_count_one_bit_per_full_block_and_channel() {
        let g = Geometry::new(20, 17, 3);
        assert_eq!(block_capacity(&g, 8), 2 * 2 * 3);
        assert_eq!(block_capacity(&g, 1), 20 * 17 * 3);
        assert_eq!(block_capacity(&g, 21), 0);
        assert_eq!(block_capacity(&g, 0), 0);
    }

    #[test]
    fn should_derive_header_length_from_capacity() {
        assert_eq!(header_length(48), 6);
        assert_eq!(header_length(0), 0);
        assert_eq!(header_length(1), 1);
    }

    #[test]
    fn should_encode_the_4x4_rgb_example_header() {
        let header = encode_header(8, header_length(48)).unwrap();
        assert_eq!(header.to_string(), "001000");
        assert_eq!(decode_header(&header), 8);
    }

    #[test]
    fn should_refuse_values_wider_than_the_header() {
        match encode_header(64, 6) {
            Err(SteganoError::HeaderOverflow { value: 64, width: 6 }) => (),
            other => panic!("expected HeaderOverflow, got {other:?}"),
        }
    }

    #[test]
    fn should_accept_the_capacity_boundary() {
        assert!(ensure_capacity(42, 42).is_ok());
        match ensure_capacity(43, 42) {
            Err(SteganoError::CapacityExceeded {
                required: 43,
                available: 42,
            }) => (),
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    proptest! {
        /// every payload length up to the capacity fits into the header
        #[test]
        fn prop_header_holds_any_length_up_to_capacity(capacity in 0usize..1_000_000, ratio in 0.0f64..=1.0) {
            let len = (capacity as f64 * ratio) as usize;
            let header = encode_header(len, header_length(capacity)).unwrap();

            prop_assert_eq!(header.len(), header_length(capacity));
            prop_assert_eq!(decode_header(&header), len);
        }
    }
}
