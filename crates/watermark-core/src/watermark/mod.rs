//! The pixel-plane codec.
//!
//! A watermark occupies the low-order bits of the channel units of a raster,
//! traversed row-major and channel-minor:
//!
//! ```text
//! | header units: ceil(32 / depth)        | payload units ...                 | untouched ...
//! | u32 big-endian payload length in bits | flag byte + text bytes, MSB first |
//! ```
//!
//! Within one unit, the first bit goes to bit position 0, the next to position 1 and so on.
//! Images watermarked earlier depend on this exact order.

mod batch;
mod capacity;
mod cursor;
mod embed;
mod extract;
mod header;
mod options;

pub use batch::{embed_batch, extract_batch};
pub use capacity::{compute_capacity, header_units, reserved_units};
pub use cursor::UnitCursor;
pub use embed::embed;
pub use extract::{extract, extract_detailed, Extraction};
pub use options::WatermarkOptions;

/// Maximum number of characters a watermark text may have.
pub const MAX_TEXT_CHARS: usize = 1024;

/// Size of the length header in bits.
pub const HEADER_BITS: usize = 32;

/// Upper bound of channel units kept free of payload.
pub const MAX_RESERVED_UNITS: usize = 100;

/// At most every n-th channel unit is kept free of payload.
pub const RESERVED_UNITS_DIVISOR: usize = 10;

/// Headers announcing more payload bits than this are not taken for a watermark.
pub const MAX_PLAUSIBLE_PAYLOAD_BITS: usize = MAX_TEXT_CHARS * 8 * 4;
