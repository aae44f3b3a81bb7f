//! Input image resolution and format detection.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Probed in order when no input path is supplied.
const DISCOVERY_CANDIDATES: &[&str] = &["icon.png", "icon.svg"];

/// Accepted source image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Bitmap source, resized per rendition by the platform resizer.
    Png,
    /// Vector source, rasterized in-process or via the thumbnail fallback.
    Svg,
}

/// A resolved, read-only source image.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    format: SourceFormat,
}

impl SourceImage {
    /// Classify `path` by extension, case-insensitively.
    ///
    /// Anything other than `.png` or `.svg` is rejected; the file's contents
    /// are never inspected here.
    pub fn from_path(path: PathBuf) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let format = match ext.as_deref() {
            Some("png") => SourceFormat::Png,
            Some("svg") => SourceFormat::Svg,
            _ => return Err(Error::UnsupportedFormat { path }),
        };

        Ok(Self { path, format })
    }

    /// Path of the source image.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detected format of the source image.
    pub fn format(&self) -> SourceFormat {
        self.format
    }
}

/// Resolve the source image path for a build: the supplied path, or the
/// first of `icon.png`, `icon.svg` found in `dir`.
///
/// Only discovery happens here. Format validation runs after the iconset
/// directory exists, so an unsupported input leaves an empty iconset
/// directory behind.
pub fn resolve_input(input: Option<PathBuf>, dir: &Path) -> Result<PathBuf> {
    if let Some(path) = input {
        return Ok(path);
    }

    for candidate in DISCOVERY_CANDIDATES {
        let path = dir.join(candidate);
        if path.is_file() {
            return Ok(path);
        }
    }

    Err(Error::NoInputFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_detection_is_case_insensitive() {
        let png = SourceImage::from_path(PathBuf::from("Icon.PNG")).unwrap();
        assert_eq!(png.format(), SourceFormat::Png);

        let svg = SourceImage::from_path(PathBuf::from("logo.Svg")).unwrap();
        assert_eq!(svg.format(), SourceFormat::Svg);
    }

    #[test]
    fn other_extensions_are_rejected() {
        for name in ["logo.gif", "logo.jpeg", "logo", "logo.png.bak"] {
            let err = SourceImage::from_path(PathBuf::from(name)).unwrap_err();
            assert!(matches!(err, Error::UnsupportedFormat { .. }), "{name}");
        }
    }

    #[test]
    fn explicit_input_wins_over_discovery() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("icon.png"), b"x").unwrap();

        let picked = resolve_input(Some(PathBuf::from("other.svg")), dir.path()).unwrap();
        assert_eq!(picked, PathBuf::from("other.svg"));
    }

    #[test]
    fn discovery_prefers_png_over_svg() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("icon.png"), b"x").unwrap();
        std::fs::write(dir.path().join("icon.svg"), b"<svg/>").unwrap();

        let picked = resolve_input(None, dir.path()).unwrap();
        assert_eq!(picked, dir.path().join("icon.png"));
    }

    #[test]
    fn discovery_falls_back_to_svg() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("icon.svg"), b"<svg/>").unwrap();

        let picked = resolve_input(None, dir.path()).unwrap();
        assert_eq!(picked, dir.path().join("icon.svg"));
    }

    #[test]
    fn empty_directory_means_no_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_input(None, dir.path()).unwrap_err();
        assert!(matches!(err, Error::NoInputFound));
    }
}
