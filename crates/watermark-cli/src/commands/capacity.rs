use std::path::PathBuf;

use clap::Args;
use watermark_core::BitDepth;

use crate::CliResult;

/// Shows how much text fits into a PNG image
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// PNG image to inspect
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Low-order bits per color channel (1, 2 or 3)
    #[arg(short, long, value_name = "bits", default_value = "2")]
    pub bit_depth: BitDepth,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let bits = watermark_core::commands::capacity(&self.media, self.bit_depth)?;
        // one byte goes to the compression flag, compressible text fits more
        let characters = (bits / 8).saturating_sub(1);

        println!("{bits} bits, about {characters} ASCII characters uncompressed");

        Ok(())
    }
}
