use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatermarkError {
    /// Represents a text that is longer than the codec accepts, counted in characters
    #[error("Text too long! Maximum {max} characters supported, got {length}.")]
    TextTooLong { length: usize, max: usize },

    /// Represents a packed text that does not fit into the carrier raster
    #[error("Text too long for this image! Available capacity: {available} bits, required: {required} bits.")]
    CapacityExceeded { available: usize, required: usize },

    /// Represents a packed text that could be embedded but would be rejected by any extraction
    #[error("Payload of {required} bits exceeds the extractable maximum of {max} bits")]
    PayloadTooLarge { required: usize, max: usize },

    /// Represents a bit depth value outside of `1`, `2` or `3`
    #[error("Invalid bit depth `{0}`, supported are 1, 2 or 3")]
    InvalidBitDepth(String),

    /// Represents a sample buffer that does not match the declared raster shape
    #[error("Raster shape expects {expected} samples, but {actual} were provided")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Represents a raster layout that cannot be converted into an image buffer
    #[error("Unsupported number of color channels: {0}")]
    UnsupportedChannelCount(usize),

    /// Represents a compressed payload that could not be inflated
    #[error("Compressed watermark payload is corrupt")]
    Decompression(#[source] std::io::Error),

    /// Represents the error of invalid UTF-8 text data found inside of a watermark
    #[error("Invalid text data found inside a watermark")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a payload too short to carry even the flag byte
    #[error("Watermark payload is truncated, only {0} bits recovered")]
    TruncatedPayload(usize),

    /// Represents an unsupported carrier media. Only lossless PNG images are able to keep a watermark
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing watermark text")]
    MissingText,

    /// Represents an extraction that found no watermark, only raised where the caller asked for it
    #[error("No watermark found")]
    NoWatermarkFound,
}
