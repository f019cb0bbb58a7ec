use log::{debug, warn};

use super::compression;
use crate::bits::BitSequence;
use crate::error::WatermarkError;
use crate::result::Result;

pub(super) const RAW: u8 = 0x00;
pub(super) const DEFLATE: u8 = 0x01;

/// Leading byte of every encoded payload, tells if the remaining bytes are zlib compressed
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum PayloadFlag {
    Raw,
    Deflate,
}

impl From<PayloadFlag> for u8 {
    fn from(value: PayloadFlag) -> Self {
        match value {
            PayloadFlag::Raw => RAW,
            PayloadFlag::Deflate => DEFLATE,
        }
    }
}

/// Decoding trusts the flag, everything that is not `0x01` is read as raw text
impl From<u8> for PayloadFlag {
    fn from(value: u8) -> Self {
        match value {
            DEFLATE => PayloadFlag::Deflate,
            _ => PayloadFlag::Raw,
        }
    }
}

/// Builds `[flag] + [bytes]`, compressed only when that is strictly smaller than the raw text.
/// An empty text encodes to an empty buffer, without a flag.
pub fn encode_payload(text: &str, use_compression: bool) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }
    let raw = text.as_bytes();

    if use_compression {
        match compression::compress(raw) {
            Ok(compressed) if compressed.len() < raw.len() => {
                return with_flag(PayloadFlag::Deflate, &compressed);
            }
            Ok(compressed) => {
                debug!(
                    "compression skipped, {} compressed bytes vs. {} raw bytes",
                    compressed.len(),
                    raw.len()
                );
            }
            Err(e) => warn!("compression failed, falling back to raw text: {e}"),
        }
    }

    with_flag(PayloadFlag::Raw, raw)
}

/// Reverses [`encode_payload`], the buffer must at least contain the flag byte.
pub fn decode_payload(buffer: &[u8]) -> Result<String> {
    let Some((flag, content)) = buffer.split_first() else {
        return Err(WatermarkError::TruncatedPayload(0));
    };

    let bytes = match PayloadFlag::from(*flag) {
        PayloadFlag::Deflate => {
            compression::decompress(content).map_err(WatermarkError::Decompression)?
        }
        PayloadFlag::Raw => content.to_vec(),
    };

    Ok(String::from_utf8(bytes)?)
}

/// Packs a text into the bit sequence that is hidden in a raster.
pub fn pack(text: &str, use_compression: bool) -> BitSequence {
    BitSequence::from_bytes(&encode_payload(text, use_compression))
}

/// Unpacks a bit sequence into the text, any failure ends up as an empty text.
pub fn unpack(bits: &BitSequence) -> String {
    try_unpack(bits).unwrap_or_default()
}

/// Like [`unpack`] but tells why a bit sequence did not carry a text.
pub fn try_unpack(bits: &BitSequence) -> Result<String> {
    if bits.len() < 8 {
        return Err(WatermarkError::TruncatedPayload(bits.len()));
    }

    decode_payload(&bits.to_bytes()?)
}

fn with_flag(flag: PayloadFlag, content: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(content.len() + 1);
    buffer.push(flag.into());
    buffer.extend_from_slice(content);

    buffer
}
