use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use image::{DynamicImage, ImageBuffer, RgbImage, RgbaImage};
use log::error;

use super::{ChannelUnits, Persist, Raster};
use crate::error::WatermarkError;
use crate::result::Result;

impl Raster {
    /// loads a carrier image, only PNG keeps the low-order bits intact
    pub fn from_file(f: &Path) -> Result<Self> {
        if !is_png_extension(f) {
            return Err(WatermarkError::UnsupportedMedia);
        }

        let img = image::open(f).map_err(|e| {
            error!("Error opening image {f:?}: {e}");
            WatermarkError::InvalidImageMedia
        })?;

        Ok(Self::from_dynamic(img))
    }

    /// keeps an alpha channel if there is one, anything else ends up as 8-bit RGB
    pub fn from_dynamic(img: DynamicImage) -> Self {
        if img.color().has_alpha() {
            Self::Rgba8(img.to_rgba8())
        } else {
            Self::Rgb8(img.to_rgb8())
        }
    }

    pub fn to_dynamic(&self) -> Result<DynamicImage> {
        match self {
            Raster::Rgb8(i) => Ok(DynamicImage::ImageRgb8(i.clone())),
            Raster::Rgba8(i) => Ok(DynamicImage::ImageRgba8(i.clone())),
            Raster::Normalized(n) => {
                let shape = n.shape();
                let units: Vec<u8> = (0..shape.units()).filter_map(|i| n.unit(i)).collect();
                let (width, height) = (shape.width as u32, shape.height as u32);

                let img = match shape.channels {
                    3 => ImageBuffer::from_raw(width, height, units)
                        .map(|i: RgbImage| DynamicImage::ImageRgb8(i)),
                    4 => ImageBuffer::from_raw(width, height, units)
                        .map(|i: RgbaImage| DynamicImage::ImageRgba8(i)),
                    other => return Err(WatermarkError::UnsupportedChannelCount(other)),
                };

                img.ok_or(WatermarkError::ShapeMismatch {
                    expected: shape.units(),
                    actual: n.samples().len(),
                })
            }
        }
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.to_dynamic()?
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                WatermarkError::ImageEncodingError
            })
    }
}

impl Persist for Raster {
    fn save_as(&self, file: &Path) -> Result<()> {
        if !is_png_extension(file) {
            return Err(WatermarkError::UnsupportedMedia);
        }
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            WatermarkError::WriteError { source: e }
        })?;

        self.save_to_writer(f)
    }
}

pub(crate) fn is_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}
