//! Rendition rendering strategies.
//!
//! PNG sources go straight through the bitmap resizer. SVG sources render
//! in-process when the rasterizer is compiled in, and otherwise fall back
//! to a single large thumbnail that is then resized like a PNG.
//!
//! Every rendition is verified after it is produced: the file must exist
//! and decode to the exact square dimension its name promises. Failures
//! are collected across the whole table and reported together.

use super::sizes::{RenditionSpec, max_dimension};
use super::source::{SourceFormat, SourceImage};
use crate::error::{Error, ErrorExt, Result};
use crate::tools::{ToolOutput, ToolRunner};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Fixed name of the intermediate PNG used by the thumbnail fallback.
pub const TEMP_THUMBNAIL: &str = "temp_icon.png";

#[derive(Debug, Clone, Copy)]
enum RenderOp {
    Resize,
    Rasterize,
}

/// Produce every rendition in `renditions` inside `iconset_dir`.
///
/// Strategy is decided by the source format and rasterizer availability;
/// the three strategies are mutually exclusive.
pub async fn render_all<T: ToolRunner>(
    tools: &T,
    source: &SourceImage,
    renditions: &[RenditionSpec],
    iconset_dir: &Path,
    output: &Path,
) -> Result<()> {
    match source.format() {
        SourceFormat::Png => {
            log::info!("processing PNG source {}", source.path().display());
            render_each(tools, RenderOp::Resize, source.path(), renditions, iconset_dir).await
        }
        SourceFormat::Svg if tools.has_rasterizer() => {
            log::info!("rasterizing SVG source {} in-process", source.path().display());
            render_each(
                tools,
                RenderOp::Rasterize,
                source.path(),
                renditions,
                iconset_dir,
            )
            .await
        }
        SourceFormat::Svg => {
            log::info!("no SVG rasterizer available, using thumbnail fallback");
            thumbnail_then_resize(tools, source.path(), renditions, iconset_dir, output).await
        }
    }
}

/// Run one render operation per table entry, verifying each output and
/// aggregating failures across the whole table.
async fn render_each<T: ToolRunner>(
    tools: &T,
    op: RenderOp,
    source: &Path,
    renditions: &[RenditionSpec],
    iconset_dir: &Path,
) -> Result<()> {
    let mut failures = Vec::new();

    for spec in renditions {
        let dest = iconset_dir.join(spec.name);
        log::debug!("creating {} ({}x{})", spec.name, spec.size, spec.size);

        let outcome = match op {
            RenderOp::Resize => tools.resize(source, &dest, spec.size, spec.size).await?,
            RenderOp::Rasterize => tools.rasterize(source, &dest, spec.size, spec.size).await?,
        };

        if let Some(reason) = rendition_problem(&outcome, &dest, spec) {
            log::warn!("{}: {reason}", spec.name);
            failures.push(format!("{}: {reason}", spec.name));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::RenditionFailed { failures })
    }
}

/// Why a produced rendition is unusable, or `None` if it checks out.
fn rendition_problem(outcome: &ToolOutput, dest: &Path, spec: &RenditionSpec) -> Option<String> {
    if !outcome.success {
        let diag = outcome.diagnostic().trim();
        return Some(if diag.is_empty() {
            "tool reported failure".to_string()
        } else {
            diag.to_string()
        });
    }

    if !dest.is_file() {
        return Some("no file produced".to_string());
    }

    // Header-only read; the pixel data is not decoded.
    match image::image_dimensions(dest) {
        Err(e) => Some(format!("unreadable output: {e}")),
        Ok((w, h)) if (w, h) != (spec.size, spec.size) => {
            Some(format!("expected {0}x{0}, got {w}x{h}", spec.size))
        }
        Ok(_) => None,
    }
}

/// SVG fallback: one large thumbnail, then the PNG resize loop against it.
///
/// The intermediate PNG is removed after the resize loop whether or not
/// individual resizes succeeded.
async fn thumbnail_then_resize<T: ToolRunner>(
    tools: &T,
    source: &Path,
    renditions: &[RenditionSpec],
    iconset_dir: &Path,
    output: &Path,
) -> Result<()> {
    let source_dir = parent_or_cwd(source);
    let size = max_dimension(renditions);

    let outcome = tools.thumbnail(source, &source_dir, size).await?;
    if !outcome.success {
        log::warn!("thumbnail tool reported: {}", outcome.diagnostic().trim());
    }

    // The thumbnail tool names its output after the full source file name.
    let mut generated_name = source.file_name().map(OsString::from).unwrap_or_default();
    generated_name.push(".png");
    let generated = source_dir.join(generated_name);

    if !generated.is_file() {
        return Err(Error::SvgRasterizationFailed {
            path: source.to_path_buf(),
        });
    }

    let temp = parent_or_cwd(output).join(TEMP_THUMBNAIL);
    tokio::fs::rename(&generated, &temp)
        .await
        .fs_context("moving intermediate PNG", &generated)?;

    let result = render_each(tools, RenderOp::Resize, &temp, renditions, iconset_dir).await;

    if let Err(e) = tokio::fs::remove_file(&temp).await {
        log::warn!("could not remove {}: {e}", temp.display());
    }

    result
}

/// Parent directory of `path`, or `.` when it has none.
fn parent_or_cwd(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_reports_tool_diagnostic() {
        let spec = RenditionSpec {
            size: 16,
            name: "icon_16x16.png",
        };
        let outcome = ToolOutput::failed("sips: cannot open file");
        let reason = rendition_problem(&outcome, Path::new("missing.png"), &spec).unwrap();
        assert_eq!(reason, "sips: cannot open file");
    }

    #[test]
    fn problem_reports_missing_file() {
        let spec = RenditionSpec {
            size: 16,
            name: "icon_16x16.png",
        };
        let reason = rendition_problem(&ToolOutput::ok(), Path::new("missing.png"), &spec).unwrap();
        assert_eq!(reason, "no file produced");
    }

    #[test]
    fn problem_reports_wrong_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("icon_16x16.png");
        image::RgbaImage::from_pixel(8, 8, image::Rgba([0, 0, 0, 255]))
            .save(&dest)
            .unwrap();

        let spec = RenditionSpec {
            size: 16,
            name: "icon_16x16.png",
        };
        let reason = rendition_problem(&ToolOutput::ok(), &dest, &spec).unwrap();
        assert_eq!(reason, "expected 16x16, got 8x8");
    }

    #[test]
    fn problem_accepts_exact_match() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("icon_16x16.png");
        image::RgbaImage::from_pixel(16, 16, image::Rgba([0, 0, 0, 255]))
            .save(&dest)
            .unwrap();

        let spec = RenditionSpec {
            size: 16,
            name: "icon_16x16.png",
        };
        assert!(rendition_problem(&ToolOutput::ok(), &dest, &spec).is_none());
    }

    #[test]
    fn parent_of_bare_file_name_is_cwd() {
        assert_eq!(parent_or_cwd(Path::new("Miso.icns")), PathBuf::from("."));
        assert_eq!(
            parent_or_cwd(Path::new("out/Miso.icns")),
            PathBuf::from("out")
        );
    }
}
