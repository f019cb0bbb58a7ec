use super::{HEADER_BITS, MAX_RESERVED_UNITS, RESERVED_UNITS_DIVISOR};
use crate::media::RasterShape;
use crate::BitDepth;

/// Number of payload bits a raster of `shape` accepts at `bit_depth`.
///
/// The reserve is independent of the header size.
pub fn compute_capacity(shape: RasterShape, bit_depth: BitDepth) -> usize {
    let total = shape.units();

    (total - reserved_units(total)) * bit_depth.bits()
}

pub fn reserved_units(total_units: usize) -> usize {
    MAX_RESERVED_UNITS.min(total_units / RESERVED_UNITS_DIVISOR)
}

/// Channel units occupied by the length header, the payload starts right after them.
pub fn header_units(bit_depth: BitDepth) -> usize {
    bit_depth.units_for(HEADER_BITS)
}
