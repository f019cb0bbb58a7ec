use log::debug;

use super::capacity::header_units;
use super::header::decode_length;
use super::{UnitCursor, HEADER_BITS, MAX_PLAUSIBLE_PAYLOAD_BITS};
use crate::error::WatermarkError;
use crate::media::ChannelUnits;
use crate::payload::try_unpack;
use crate::BitDepth;

/// Outcome of looking for a watermark in a raster
#[derive(Debug)]
pub enum Extraction {
    /// a watermark was decoded, the text may still be empty
    Found(String),
    /// the header announces no payload, or an implausible one
    NotFound,
    /// the header looked fine but the payload did not decode
    Corrupt(WatermarkError),
}

impl Extraction {
    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Extraction::Found(text) => Some(text),
            _ => None,
        }
    }

    /// the recovered text, empty when nothing was found
    pub fn into_text(self) -> String {
        match self {
            Extraction::Found(text) => text,
            _ => String::new(),
        }
    }
}

/// Reads the watermark of a raster, never fails.
///
/// A raster that carries no watermark, a damaged one or one written at another bit depth
/// all give an empty string.
pub fn extract<C>(carrier: &C, bit_depth: BitDepth) -> String
where
    C: ChannelUnits + ?Sized,
{
    extract_detailed(carrier, bit_depth).into_text()
}

/// Like [`extract`], but tells apart why there is no text.
pub fn extract_detailed<C>(carrier: &C, bit_depth: BitDepth) -> Extraction
where
    C: ChannelUnits + ?Sized,
{
    let header = UnitCursor::new(bit_depth).read_bits(carrier, HEADER_BITS);
    let Some(length) = decode_length(&header) else {
        debug!("raster too small for a watermark header");
        return Extraction::NotFound;
    };

    let length = length as usize;
    if length == 0 || length > MAX_PLAUSIBLE_PAYLOAD_BITS {
        debug!("no plausible watermark, header announces {length} bits");
        return Extraction::NotFound;
    }

    let payload = UnitCursor::at(header_units(bit_depth), bit_depth).read_bits(carrier, length);
    if payload.len() < length {
        debug!(
            "raster ends early, only {} of {length} payload bits recovered",
            payload.len()
        );
    }

    match try_unpack(&payload) {
        Ok(text) => Extraction::Found(text),
        Err(e) => {
            debug!("watermark payload does not decode: {e}");
            Extraction::Corrupt(e)
        }
    }
}
