use log::debug;

use super::{embed, extract, WatermarkOptions};
use crate::media::ChannelUnits;
use crate::result::Result;
use crate::BitDepth;

/// Embeds the same text into every raster of a batch.
///
/// The first raster that fails aborts the batch, its error is returned and no output is produced.
pub fn embed_batch<C>(carriers: &[C], text: &str, options: &WatermarkOptions) -> Result<Vec<C>>
where
    C: ChannelUnits + Clone,
{
    debug!("embedding into a batch of {} rasters", carriers.len());

    carriers
        .iter()
        .map(|carrier| embed(carrier, text, options))
        .collect()
}

/// Extracts from every raster of a batch, one text per raster in the same order.
pub fn extract_batch<C>(carriers: &[C], bit_depth: BitDepth) -> Vec<String>
where
    C: ChannelUnits,
{
    carriers
        .iter()
        .map(|carrier| extract(carrier, bit_depth))
        .collect()
}
