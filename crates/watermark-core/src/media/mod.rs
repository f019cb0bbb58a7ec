mod normalized;
mod raster;
mod types;

use std::path::Path;

pub use normalized::{dequantize, quantize, NormalizedRaster};
pub use raster::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
