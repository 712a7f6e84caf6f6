use log::debug;

use crate::bits::BitString;
use crate::media::{Carrier, Site};

/// replaces the least significant bit of a color channel value
#[inline(always)]
pub fn write_bit(value: u8, bit: bool) -> u8 {
    (value & (u8::MAX - 1)) | u8::from(bit)
}

/// the least significant bit of a color channel value
#[inline(always)]
pub fn read_bit(value: u8) -> bool {
    value & 1 == 1
}

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    fn hide_bit(self, bit: bool) {
        *self = write_bit(*self, bit);
    }
}

/// Reads and writes payload bits in the least significant bit plane,
/// exactly at the given sites and in the given order.
pub struct LsbCodec;

impl LsbCodec {
    /// writes `bits[i]` into `sites[i]`, every other channel value stays untouched
    pub fn hide(carrier: &mut Carrier, sites: &[Site], bits: &BitString) {
        debug!("Hiding {} bits in the bit plane", bits.len());
        for (site, bit) in sites.iter().zip(bits.iter()) {
            carrier.sample_mut(site).hide_bit(bit);
        }
    }

    /// reads one bit from every site
    pub fn unveil(carrier: &Carrier, sites: &[Site]) -> BitString {
        sites.iter().map(|site| read_bit(carrier.sample(site))).collect()
    }
}
