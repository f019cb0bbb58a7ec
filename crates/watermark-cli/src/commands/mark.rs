use std::path::PathBuf;

use clap::Args;
use watermark_core::{BitDepth, WatermarkOptions};

use crate::CliResult;

/// Hides a text watermark in a PNG image
#[derive(Args, Debug)]
pub struct MarkArgs {
    /// PNG image to mark, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Marked image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Watermark text, at most 1024 characters
    #[arg(short, long, value_name = "text", required = true)]
    pub text: String,

    /// Low-order bits per color channel that carry the watermark (1, 2 or 3)
    #[arg(short, long, value_name = "bits", default_value = "2")]
    pub bit_depth: BitDepth,

    /// Store the text uncompressed
    #[arg(long)]
    pub no_compression: bool,
}

impl MarkArgs {
    pub fn run(self) -> CliResult<()> {
        let options = WatermarkOptions::default()
            .with_bit_depth(self.bit_depth)
            .with_compression(!self.no_compression);

        watermark_core::commands::mark(&self.media, &self.write_to_file, &self.text, options)
    }
}
