//! The embedding strategies and their common capability set.
//!
//! `Inline` and `EquiDistribution` prefix the payload with a length header,
//! `MidpointCircle` and `TransformDct` spread it over the whole capacity instead.

use enum_dispatch::enum_dispatch;
use log::debug;

use crate::bits::BitString;
use crate::error::SteganoError;
use crate::media::image::circle::{circle_sites, CircleDirection};
use crate::media::image::positions::{equidistant_sites, inline_sites};
use crate::media::image::{BlockCodec, LsbCodec};
use crate::media::payload::{
    decode_header, encode_header, ensure_capacity, fill_capacity, header_length, lsb_capacity,
    strip_fill,
};
use crate::media::{Carrier, Geometry, Site};
use crate::result::Result;

/// default edge length of the square blocks used by [`TransformDct`]
pub const DEFAULT_BLOCK_SIZE: usize = 8;

#[enum_dispatch]
pub trait Concealer {
    /// raw number of bits the carrier geometry offers
    fn capacity(&self, geometry: &Geometry) -> usize;

    /// largest payload in bits, after any framing overhead
    fn max_payload_bits(&self, geometry: &Geometry) -> usize;

    /// the sites in embedding order, header included
    fn sites(&self, geometry: &Geometry, payload_len: usize) -> Vec<Site>;

    /// writes the payload, nothing is mutated if it does not fit
    fn hide(&self, carrier: &mut Carrier, payload: &BitString) -> Result<()>;

    /// reads back what [`Concealer::hide`] has written
    fn unveil(&self, carrier: &Carrier) -> Result<BitString>;
}

#[enum_dispatch(Concealer)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Inline,
    EquiDistribution,
    MidpointCircle,
    TransformDct,
}

impl Default for Strategy {
    fn default() -> Self {
        Inline.into()
    }
}

/// header and payload back to back in scan order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inline;

/// header in scan order, payload spread evenly over the remaining channel values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquiDistribution;

/// payload on the circle inscribed into the image, without a header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidpointCircle {
    pub direction: CircleDirection,
}

/// one payload bit per block in the frequency domain, without a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformDct {
    block_size: usize,
}

impl MidpointCircle {
    pub fn new(direction: CircleDirection) -> Self {
        Self { direction }
    }
}

impl TransformDct {
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(SteganoError::MissingParameter("a block size bigger than 0"));
        }
        Ok(Self { block_size })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    fn codec(&self) -> BlockCodec {
        BlockCodec::new(self.block_size)
    }
}

impl Default for TransformDct {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

type SiteSelector = fn(&Geometry, usize, usize) -> Vec<Site>;

fn header_overhead(geometry: &Geometry) -> usize {
    header_length(lsb_capacity(geometry))
}

fn hide_with_header(
    carrier: &mut Carrier,
    payload: &BitString,
    select: SiteSelector,
) -> Result<()> {
    let geometry = carrier.geometry();
    let capacity = lsb_capacity(&geometry);
    let header_len = header_length(capacity);
    ensure_capacity(payload.len(), capacity - header_len)?;

    let mut bits = encode_header(payload.len(), header_len)?;
    bits.append(payload);
    let sites = select(&geometry, header_len, payload.len());
    debug!(
        "Capacity {capacity} bits, header {header_len} bits, payload {} bits",
        payload.len()
    );

    LsbCodec::hide(carrier, &sites, &bits);
    Ok(())
}

fn unveil_with_header(carrier: &Carrier, select: SiteSelector) -> Result<BitString> {
    let geometry = carrier.geometry();
    let capacity = lsb_capacity(&geometry);
    let header_len = header_length(capacity);

    // the header always occupies the first scan positions
    let header = LsbCodec::unveil(carrier, &inline_sites(&geometry, header_len, 0));
    let length = decode_header(&header);
    let available = capacity - header_len;
    if length > available {
        return Err(SteganoError::HeaderOutOfRange { length, available });
    }
    debug!("Header announces {length} payload bits");

    let sites = select(&geometry, header_len, length);
    Ok(LsbCodec::unveil(carrier, &sites[header_len..]))
}

impl Concealer for Inline {
    fn capacity(&self, geometry: &Geometry) -> usize {
        lsb_capacity(geometry)
    }

    fn max_payload_bits(&self, geometry: &Geometry) -> usize {
        lsb_capacity(geometry) - header_overhead(geometry)
    }

    fn sites(&self, geometry: &Geometry, payload_len: usize) -> Vec<Site> {
        inline_sites(geometry, header_overhead(geometry), payload_len)
    }

    fn hide(&self, carrier: &mut Carrier, payload: &BitString) -> Result<()> {
        hide_with_header(carrier, payload, inline_sites)
    }

    fn unveil(&self, carrier: &Carrier) -> Result<BitString> {
        unveil_with_header(carrier, inline_sites)
    }
}

impl Concealer for EquiDistribution {
    fn capacity(&self, geometry: &Geometry) -> usize {
        lsb_capacity(geometry)
    }

    fn max_payload_bits(&self, geometry: &Geometry) -> usize {
        lsb_capacity(geometry) - header_overhead(geometry)
    }

    fn sites(&self, geometry: &Geometry, payload_len: usize) -> Vec<Site> {
        equidistant_sites(geometry, header_overhead(geometry), payload_len)
    }

    fn hide(&self, carrier: &mut Carrier, payload: &BitString) -> Result<()> {
        hide_with_header(carrier, payload, equidistant_sites)
    }

    fn unveil(&self, carrier: &Carrier) -> Result<BitString> {
        unveil_with_header(carrier, equidistant_sites)
    }
}

impl Concealer for MidpointCircle {
    fn capacity(&self, geometry: &Geometry) -> usize {
        circle_sites(geometry, self.direction).len()
    }

    fn max_payload_bits(&self, geometry: &Geometry) -> usize {
        self.capacity(geometry)
    }

    fn sites(&self, geometry: &Geometry, _payload_len: usize) -> Vec<Site> {
        circle_sites(geometry, self.direction)
    }

    fn hide(&self, carrier: &mut Carrier, payload: &BitString) -> Result<()> {
        let sites = circle_sites(&carrier.geometry(), self.direction);
        let bits = fill_capacity(payload, sites.len())?;
        debug!("Circle offers {} bits for {} payload bits", sites.len(), payload.len());

        LsbCodec::hide(carrier, &sites, &bits);
        Ok(())
    }

    fn unveil(&self, carrier: &Carrier) -> Result<BitString> {
        let sites = circle_sites(&carrier.geometry(), self.direction);
        Ok(strip_fill(&LsbCodec::unveil(carrier, &sites)))
    }
}

impl Concealer for TransformDct {
    fn capacity(&self, geometry: &Geometry) -> usize {
        self.codec().block_count(geometry)
    }

    fn max_payload_bits(&self, geometry: &Geometry) -> usize {
        self.capacity(geometry)
    }

    /// the top-left site of every block
    fn sites(&self, geometry: &Geometry, _payload_len: usize) -> Vec<Site> {
        let codec = self.codec();
        (0..codec.block_count(geometry))
            .map(|index| codec.block_origin(geometry, index))
            .collect()
    }

    fn hide(&self, carrier: &mut Carrier, payload: &BitString) -> Result<()> {
        let codec = self.codec();
        let bits = fill_capacity(payload, codec.block_count(&carrier.geometry()))?;

        codec.hide(carrier, &bits)
    }

    fn unveil(&self, carrier: &Carrier) -> Result<BitString> {
        let codec = self.codec();
        let count = codec.block_count(&carrier.geometry());

        Ok(strip_fill(&codec.unveil(carrier, count)))
    }
}
