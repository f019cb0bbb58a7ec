use log::debug;

use super::capacity::{compute_capacity, header_units};
use super::header::encode_length;
use super::{UnitCursor, WatermarkOptions, MAX_PLAUSIBLE_PAYLOAD_BITS, MAX_TEXT_CHARS};
use crate::error::WatermarkError;
use crate::media::ChannelUnits;
use crate::payload::pack;
use crate::result::Result;

/// Hides `text` in a copy of `carrier`, the carrier itself stays untouched.
///
/// All limits are checked before the copy is made, so an error never leaves a half written raster behind.
pub fn embed<C>(carrier: &C, text: &str, options: &WatermarkOptions) -> Result<C>
where
    C: ChannelUnits + Clone,
{
    let length = text.chars().count();
    if length > MAX_TEXT_CHARS {
        return Err(WatermarkError::TextTooLong {
            length,
            max: MAX_TEXT_CHARS,
        });
    }

    let payload = pack(text, options.use_compression);
    let required = payload.len();
    let shape = carrier.shape();
    let depth = options.bit_depth;

    let available = compute_capacity(shape, depth);
    if required > available {
        return Err(WatermarkError::CapacityExceeded {
            available,
            required,
        });
    }
    if required > MAX_PLAUSIBLE_PAYLOAD_BITS {
        return Err(WatermarkError::PayloadTooLarge {
            required,
            max: MAX_PLAUSIBLE_PAYLOAD_BITS,
        });
    }

    // the reserve may be smaller than the header on tiny rasters
    let occupied = header_units(depth) + depth.units_for(required);
    if occupied > shape.units() {
        return Err(WatermarkError::CapacityExceeded {
            available: shape.units().saturating_sub(header_units(depth)) * depth.bits(),
            required,
        });
    }

    debug!(
        "embedding {required} payload bits into a {shape} raster at bit depth {depth}, {occupied} units used"
    );

    let mut marked = carrier.clone();
    let mut cursor = UnitCursor::new(depth);
    cursor.write_bits(&mut marked, encode_length(required as u32).iter());
    let mut cursor = UnitCursor::at(header_units(depth), depth);
    cursor.write_bits(&mut marked, payload.iter());

    Ok(marked)
}
