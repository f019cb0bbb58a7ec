use std::path::{Path, PathBuf};

use crate::media::{ChannelUnits, Raster};
use crate::watermark::Extraction;
use crate::{BitDepth, WatermarkError};

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    secret_media: Option<PathBuf>,
    bit_depth: BitDepth,
}

impl ExtractApi {
    /// This is the marked image that carries the watermark
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Has to be the bit depth the image was marked with, a different one reads garbage
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// The watermark text, empty if the image carries none.
    /// Errors are only raised for the image file itself.
    pub fn execute(self) -> Result<String, WatermarkError> {
        Ok(self.execute_detailed()?.into_text())
    }

    pub fn execute_detailed(self) -> Result<Extraction, WatermarkError> {
        let Some(secret_media) = self.secret_media.as_ref() else {
            return Err(WatermarkError::CarrierNotSet);
        };
        let raster = Raster::from_file(secret_media)?;

        Ok(crate::watermark::extract_detailed(&raster, self.bit_depth))
    }

    pub fn execute_on<C>(&self, carrier: &C) -> String
    where
        C: ChannelUnits + ?Sized,
    {
        crate::watermark::extract(carrier, self.bit_depth)
    }
}

#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use tempfile::tempdir;

    use super::*;
    use crate::media::Persist;
    use crate::WatermarkOptions;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let secret_image = temp_dir.path().join("hello_world.png");
        let marked = crate::watermark::embed(
            &Raster::from(RgbaImage::new(32, 32)),
            "Hello World",
            &WatermarkOptions::default().with_bit_depth(BitDepth::One),
        )
        .expect("Failed to mark raster");
        marked.save_as(&secret_image).expect("Failed to save image");

        let text = crate::api::extract::prepare()
            .from_secret_file(&secret_image)
            .with_bit_depth(BitDepth::One)
            .execute()
            .expect("Failed to extract watermark from image");

        assert_eq!(text, "Hello World");
    }

    #[test]
    fn should_give_an_empty_text_for_unmarked_images() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let plain_image = temp_dir.path().join("plain.png");
        Raster::from(RgbaImage::new(8, 8))
            .save_as(&plain_image)
            .expect("Failed to save image");

        let extraction = prepare()
            .from_secret_file(&plain_image)
            .execute_detailed()
            .expect("Failed to read image");

        assert!(matches!(extraction, Extraction::NotFound));
    }

    #[test]
    fn should_require_a_secret_file() {
        assert!(matches!(
            prepare().execute(),
            Err(WatermarkError::CarrierNotSet)
        ));
    }

    #[test]
    fn should_fail_for_missing_images() {
        assert!(matches!(
            prepare().from_secret_file("does/not/exist.png").execute(),
            Err(WatermarkError::InvalidImageMedia)
        ));
    }
}
