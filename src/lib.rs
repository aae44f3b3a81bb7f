//! # iconset
//!
//! Build macOS `.icns` icon bundles from a single PNG or SVG source image.
//!
//! The pipeline follows Apple's iconset convention: ten fixed-size PNG
//! renditions are generated into a `<name>.iconset` directory and compiled
//! into one `.icns` file by the platform `iconutil` tool. Bitmap resizing
//! goes through `sips`; SVG sources render in-process via `resvg` (the
//! `vector-render` feature, on by default) or fall back to a single large
//! `qlmanage` thumbnail that is then resized like a PNG.
//!
//! Every rendition is verified after it is produced (file present, exact
//! square dimensions) and the run fails with an aggregate report if any
//! rendition is bad, rather than compiling a silently broken bundle.
//!
//! ## Usage
//!
//! ```bash
//! iconset                          # picks up ./icon.png or ./icon.svg
//! iconset art/logo.svg
//! iconset art/logo.png out/MyApp.icns
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod builder;
pub mod cli;
pub mod error;
pub mod tools;

// Re-export main types for public API
pub use builder::{
    BuildRequest, BuiltBundle, DEFAULT_OUTPUT, ICONSET_RENDITIONS, IconsetBuilder, RenditionSpec,
    SourceFormat, SourceImage,
};
pub use error::{Context, Error, ErrorExt, Result};
pub use tools::{SystemTools, ToolOutput, ToolRunner};
