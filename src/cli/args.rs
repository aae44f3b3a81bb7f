//! Command line argument parsing.
//!
//! The tool is designed to "just work": run it next to an `icon.png` or
//! `icon.svg` and it produces a `.icns` bundle with no arguments at all.

use clap::Parser;
use std::path::PathBuf;

/// Build a macOS .icns icon bundle from a PNG or SVG source image.
#[derive(Parser, Debug)]
#[command(
    name = "iconset",
    version,
    about = "Build a macOS .icns icon bundle from a PNG or SVG source image",
    long_about = "Generate the ten fixed-size PNG renditions a macOS iconset \
requires and compile them into a single .icns file with iconutil.

Usage:
  iconset                          # picks up ./icon.png or ./icon.svg
  iconset art/logo.svg
  iconset art/logo.png out/MyApp.icns"
)]
pub struct Args {
    /// Path to the source icon (PNG or SVG); defaults to ./icon.png or ./icon.svg
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Path for the output .icns file (default: ./Miso.icns)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Remove the iconset directory after a successful build
    #[arg(long)]
    pub clean: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Show per-step detail
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_one_and_two_positionals_parse() {
        let none = Args::parse_from(["iconset"]);
        assert!(none.input.is_none() && none.output.is_none());

        let one = Args::parse_from(["iconset", "logo.svg"]);
        assert_eq!(one.input.as_deref(), Some(std::path::Path::new("logo.svg")));
        assert!(one.output.is_none());

        let two = Args::parse_from(["iconset", "logo.png", "out/App.icns"]);
        assert_eq!(two.input.as_deref(), Some(std::path::Path::new("logo.png")));
        assert_eq!(
            two.output.as_deref(),
            Some(std::path::Path::new("out/App.icns"))
        );
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Args::try_parse_from(["iconset", "--quiet", "--verbose"]).is_err());
    }
}
