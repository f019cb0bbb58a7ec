use std::path::PathBuf;

use clap::Args;
use log::warn;
use watermark_core::{BitDepth, Extraction, WatermarkError};

use crate::CliResult;

/// Reads the watermark text of PNG images, one line per image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Marked image(s)
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image files",
        required = true,
        num_args = 1..
    )]
    pub media: Vec<PathBuf>,

    /// Has to match the bit depth used for marking (1, 2 or 3)
    #[arg(short, long, value_name = "bits", default_value = "2")]
    pub bit_depth: BitDepth,

    /// Fail if an image carries no watermark, instead of printing an empty line
    #[arg(long)]
    pub strict: bool,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        for media in &self.media {
            let extraction = watermark_core::api::extract::prepare()
                .from_secret_file(media)
                .with_bit_depth(self.bit_depth)
                .execute_detailed()?;

            if let Extraction::Corrupt(e) = &extraction {
                warn!("{media:?} carries a damaged watermark: {e}");
            }
            if self.strict && !extraction.is_found() {
                return Err(WatermarkError::NoWatermarkFound);
            }

            println!("{}", extraction.into_text());
        }

        Ok(())
    }
}
