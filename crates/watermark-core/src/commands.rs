use std::path::Path;

use log::debug;

use crate::media::{ChannelUnits, Raster};
use crate::watermark::compute_capacity;
use crate::{BitDepth, WatermarkError, WatermarkOptions};

pub fn mark(
    media: &Path,
    write_to_file: &Path,
    text: &str,
    options: WatermarkOptions,
) -> Result<(), WatermarkError> {
    crate::api::mark::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .with_text(text)
        .execute()
}

pub fn extract(secret_media: &Path, bit_depth: BitDepth) -> Result<String, WatermarkError> {
    crate::api::extract::prepare()
        .from_secret_file(secret_media)
        .with_bit_depth(bit_depth)
        .execute()
}

/// payload bits the image accepts at `bit_depth`, the flag byte included
pub fn capacity(media: &Path, bit_depth: BitDepth) -> Result<usize, WatermarkError> {
    let raster = Raster::from_file(media)?;
    let shape = raster.shape();
    let capacity = compute_capacity(shape, bit_depth);
    debug!("{media:?} is a {shape} raster, {capacity} bits at bit depth {bit_depth}");

    Ok(capacity)
}
