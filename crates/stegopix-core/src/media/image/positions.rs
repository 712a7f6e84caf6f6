//! Linear site orderings over the full image.
//!
//! Both orderings put the length header into the first scan positions, they only
//! differ in how the payload bits are placed behind it.

use crate::media::{Geometry, Site};

/// Stride rounding for the equi-distribution, added to the payload length before
/// dividing the free space. Encoder and decoder share this single value.
pub const EQUI_STRIDE_MARGIN: usize = 0;

/// header and payload back to back in scan order
pub fn inline_sites(geometry: &Geometry, header_length: usize, payload_len: usize) -> Vec<Site> {
    (0..header_length + payload_len)
        .map(|i| geometry.site_at(i))
        .collect()
}

/// distance between two payload sites when `payload_len` bits are spread over
/// the `available` scan positions behind the header
pub fn equidistant_stride(available: usize, payload_len: usize) -> usize {
    match payload_len + EQUI_STRIDE_MARGIN {
        0 => 1,
        divisor => (available / divisor).max(1),
    }
}

/// header in scan order, payload spread with a constant stride over the rest
pub fn equidistant_sites(geometry: &Geometry, header_length: usize, payload_len: usize) -> Vec<Site> {
    let available = geometry.samples().saturating_sub(header_length);
    let stride = equidistant_stride(available, payload_len);

    (0..header_length)
        .chain((0..payload_len).map(|k| header_length + k * stride))
        .map(|i| geometry.site_at(i))
        .collect()
}
