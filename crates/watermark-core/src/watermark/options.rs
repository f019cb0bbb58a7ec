use crate::BitDepth;

/// Codec configuration for embedding a watermark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatermarkOptions {
    /// How many low-order bits of each channel unit carry data.
    /// Extraction must use the very same depth, a mismatch is not detected.
    pub bit_depth: BitDepth,

    /// If true the text is zlib compressed, as long as that makes it smaller
    pub use_compression: bool,
}

impl Default for WatermarkOptions {
    fn default() -> Self {
        Self {
            bit_depth: BitDepth::Two,
            use_compression: true,
        }
    }
}

impl WatermarkOptions {
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    pub fn with_compression(mut self, use_compression: bool) -> Self {
        self.use_compression = use_compression;
        self
    }
}
