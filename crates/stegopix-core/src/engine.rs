//! Binds payload framing to an embedding strategy, in memory and without any file access.

use log::info;

use crate::bits::BitString;
use crate::media::Carrier;
use crate::message::Payload;
use crate::result::Result;
use crate::strategy::{Concealer, Strategy};

/// hides `payload` inside `carrier`, the carrier is left untouched on error
pub fn hide(carrier: &mut Carrier, strategy: &Strategy, payload: &Payload) -> Result<()> {
    let bits = payload.to_bits()?;
    info!(
        "Hiding {} payload bits with {strategy:?}, {} bits available",
        bits.len(),
        strategy.max_payload_bits(&carrier.geometry())
    );

    strategy.hide(carrier, &bits)
}

/// the framed payload bits as the strategy reads them, type bit included
pub fn unveil_bits(carrier: &Carrier, strategy: &Strategy) -> Result<BitString> {
    let bits = strategy.unveil(carrier)?;
    info!("Unveiled {} payload bits with {strategy:?}", bits.len());

    Ok(bits)
}

/// the payload as it was hidden, given the same strategy was used
pub fn unveil(carrier: &Carrier, strategy: &Strategy) -> Result<Payload> {
    Payload::from_bits(&unveil_bits(carrier, strategy)?)
}
