use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Mark(mark::MarkArgs),
    Extract(extract::ExtractArgs),
    Capacity(capacity::CapacityArgs),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;
    use watermark_core::BitDepth;

    use super::*;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_default_to_bit_depth_2_with_compression() {
        let args = CliArgs::parse_from([
            "watermark", "mark", "-i", "in.png", "-o", "out.png", "-t", "hi",
        ]);

        let Commands::Mark(m) = args.command else {
            panic!("expected the mark command");
        };
        assert_eq!(m.bit_depth, BitDepth::Two);
        assert!(!m.no_compression);
        assert_eq!(m.media, PathBuf::from("in.png"));
    }

    #[test]
    fn should_extract_from_many_files() {
        let args = CliArgs::parse_from([
            "watermark", "extract", "-b", "3", "-i", "a.png", "b.png", "--strict",
        ]);

        let Commands::Extract(e) = args.command else {
            panic!("expected the extract command");
        };
        assert_eq!(e.bit_depth, BitDepth::Three);
        assert_eq!(e.media.len(), 2);
        assert!(e.strict);
    }

    #[test]
    fn should_reject_unknown_bit_depths() {
        let args = CliArgs::try_parse_from(["watermark", "capacity", "-i", "a.png", "-b", "4"]);

        assert!(args.is_err());
    }
}
