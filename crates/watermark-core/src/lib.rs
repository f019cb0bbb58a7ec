//! # Watermark Core API
//!
//! Hides a short text invisibly in the low-order bits of the color channels of an image,
//! and reads it back. The text is optionally zlib compressed and prefixed by a 32 bit length header.
//!
//! There are 2 entry points
//! - [`embed`] and [`extract`] working on any raster that implements [`ChannelUnits`]
//! - the builders in [`api::mark`] and [`api::extract`] working on PNG files
//!
//! # Usage Examples
//!
//! ## Mark an image
//!
//! ```rust
//! use tempfile::tempdir;
//! use watermark_core::media::Persist;
//! use watermark_core::{BitDepth, Raster};
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! Raster::from(image::RgbImage::new(64, 64))
//!     .save_as(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! watermark_core::api::mark::prepare()
//!     .with_text("© 2024 Example Studio")  // will hide this text inside the image
//!     .with_bit_depth(BitDepth::Two)       // 2 low-order bits per color channel
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-watermark.png"))
//!     .execute()
//!     .expect("Failed to mark image");
//! ```
//!
//! ## Read a watermark from a raster in memory
//!
//! ```rust
//! use watermark_core::{embed, extract, BitDepth, NormalizedRaster, RasterShape, WatermarkOptions};
//!
//! let raster = NormalizedRaster::from_fn(RasterShape::new(64, 64, 3), |_, _, _| 0.5);
//! let marked = embed(&raster, "hello", &WatermarkOptions::default())
//!     .expect("Failed to mark raster");
//!
//! assert_eq!(extract(&marked, BitDepth::Two), "hello");
//! assert_eq!(extract(&raster, BitDepth::Two), "");
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod bit_depth;
pub mod bits;
pub mod commands;
pub mod error;
pub mod media;
pub mod payload;
pub mod result;
pub mod watermark;

pub use crate::bit_depth::BitDepth;
pub use crate::error::WatermarkError;
pub use crate::media::{ChannelUnits, NormalizedRaster, Persist, Raster, RasterShape};
pub use crate::payload::{pack, unpack};
pub use crate::result::Result;
pub use crate::watermark::{
    compute_capacity, embed, embed_batch, extract, extract_batch, extract_detailed, Extraction,
    WatermarkOptions,
};
