use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};

use super::HEADER_BITS;
use crate::bits::BitSequence;

/// the payload length as 32 bits, most significant bit first
pub fn encode_length(payload_bits: u32) -> BitSequence {
    BitSequence::from_bytes(&payload_bits.to_be_bytes())
}

/// `None` if there are less than 32 bits to read from
pub fn decode_length(bits: &BitSequence) -> Option<u32> {
    if bits.len() < HEADER_BITS {
        return None;
    }
    let bytes = bits.to_bytes().ok()?;

    Cursor::new(bytes).read_u32::<BigEndian>().ok()
}
