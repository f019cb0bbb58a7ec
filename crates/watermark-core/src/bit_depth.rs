use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::WatermarkError;

/// Number of low-order bits of every 8-bit channel unit that carry watermark data.
///
/// Hosts hand the depth over as one of the strings `"1"`, `"2"` or `"3"`, it is parsed
/// once at the boundary and stays a closed enum from there on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum BitDepth {
    One,
    #[default]
    Two,
    Three,
}

impl BitDepth {
    pub const ALL: [BitDepth; 3] = [BitDepth::One, BitDepth::Two, BitDepth::Three];

    /// bits carried per channel unit
    pub fn bits(self) -> usize {
        match self {
            BitDepth::One => 1,
            BitDepth::Two => 2,
            BitDepth::Three => 3,
        }
    }

    /// channel units needed to carry `bits` bits, the last one might be partially used
    pub fn units_for(self, bits: usize) -> usize {
        bits.div_ceil(self.bits())
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = WatermarkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BitDepth::One),
            2 => Ok(BitDepth::Two),
            3 => Ok(BitDepth::Three),
            other => Err(WatermarkError::InvalidBitDepth(other.to_string())),
        }
    }
}

impl FromStr for BitDepth {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(BitDepth::One),
            "2" => Ok(BitDepth::Two),
            "3" => Ok(BitDepth::Three),
            other => Err(WatermarkError::InvalidBitDepth(other.to_string())),
        }
    }
}

impl From<BitDepth> for u8 {
    fn from(value: BitDepth) -> Self {
        value.bits() as u8
    }
}

impl Display for BitDepth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
