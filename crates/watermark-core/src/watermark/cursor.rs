use crate::bits::BitSequence;
use crate::media::ChannelUnits;
use crate::BitDepth;

/// Position in the flattened channel-unit sequence of a raster.
///
/// Each visited unit carries up to `bit_depth` bits, the first one in bit position 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCursor {
    index: usize,
    bit_depth: BitDepth,
}

impl UnitCursor {
    pub fn new(bit_depth: BitDepth) -> Self {
        Self::at(0, bit_depth)
    }

    pub fn at(index: usize, bit_depth: BitDepth) -> Self {
        Self { index, bit_depth }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Writes `bits` into the units starting at the cursor and moves past the last unit touched.
    /// Returns the number of bits written, which is less than given when the raster ends.
    pub fn write_bits<C, I>(&mut self, carrier: &mut C, bits: I) -> usize
    where
        C: ChannelUnits + ?Sized,
        I: IntoIterator<Item = bool>,
    {
        let mut bits = bits.into_iter().peekable();
        let mut written = 0;

        while bits.peek().is_some() {
            let Some(mut unit) = carrier.unit(self.index) else {
                break;
            };
            for position in 0..self.bit_depth.bits() {
                let Some(bit) = bits.next() else {
                    break;
                };
                unit = (unit & !(1 << position)) | (u8::from(bit) << position);
                written += 1;
            }
            carrier.set_unit(self.index, unit);
            self.index += 1;
        }

        written
    }

    /// Reads up to `count` bits starting at the cursor, fewer if the raster ends first.
    pub fn read_bits<C>(&mut self, carrier: &C, count: usize) -> BitSequence
    where
        C: ChannelUnits + ?Sized,
    {
        let mut bits = BitSequence::with_capacity(count);

        while bits.len() < count {
            let Some(unit) = carrier.unit(self.index) else {
                break;
            };
            for position in 0..self.bit_depth.bits() {
                if bits.len() == count {
                    break;
                }
                bits.push((unit >> position) & 1 == 1);
            }
            self.index += 1;
        }

        bits
    }
}
