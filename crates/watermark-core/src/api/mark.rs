use std::path::{Path, PathBuf};

use crate::media::{ChannelUnits, Persist, Raster};
use crate::{BitDepth, WatermarkError, WatermarkOptions};

pub fn prepare() -> MarkApi {
    MarkApi::default()
}

#[derive(Default, Debug)]
pub struct MarkApi {
    text: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: WatermarkOptions,
}

impl MarkApi {
    pub fn with_options(mut self, options: WatermarkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn use_text<S: AsRef<str>>(mut self, text: Option<S>) -> Self {
        self.text = text.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.options.bit_depth = bit_depth;
        self
    }

    /// Compression is on by default, it is only applied when it makes the payload smaller
    pub fn use_compression(mut self, use_compression: bool) -> Self {
        self.options.use_compression = use_compression;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Loads the image, marks it and stores the result as PNG in the output file
    pub fn execute(self) -> Result<(), WatermarkError> {
        let Some(image) = self.image.as_ref() else {
            return Err(WatermarkError::CarrierNotSet);
        };
        let Some(output) = self.output.as_ref() else {
            return Err(WatermarkError::TargetNotSet);
        };

        let carrier = Raster::from_file(image)?;
        let marked = self.execute_on(&carrier)?;

        marked.save_as(output)
    }

    /// Marks an in-memory raster, the input and output files are not used
    pub fn execute_on<C>(&self, carrier: &C) -> Result<C, WatermarkError>
    where
        C: ChannelUnits + Clone,
    {
        let Some(text) = self.text.as_deref() else {
            return Err(WatermarkError::MissingText);
        };

        crate::watermark::embed(carrier, text, &self.options)
    }
}
