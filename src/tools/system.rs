//! Platform tool implementations.
//!
//! `sips` handles bitmap resizing, `qlmanage` the SVG thumbnail fallback,
//! and `iconutil` the final `.icns` compilation. SVG rasterization happens
//! in-process through `resvg` when the `vector-render` feature is enabled.

use super::{ToolOutput, ToolRunner};
use crate::builder::SourceFormat;
use crate::error::{Context, Error, Result};
use std::path::Path;
use tokio::process::Command;

#[cfg(feature = "vector-render")]
use crate::error::ErrorExt;

/// Runs the real platform tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTools;

impl SystemTools {
    /// Create a system tool runner.
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemTools {
    fn preflight(&self, format: SourceFormat) -> Result<()> {
        let mut required: Vec<&'static str> = vec!["iconutil"];
        match format {
            SourceFormat::Png => required.push("sips"),
            SourceFormat::Svg if self.has_rasterizer() => {}
            SourceFormat::Svg => required.extend(["qlmanage", "sips"]),
        }

        for tool in required {
            which::which(tool).map_err(|_| Error::ToolNotFound { tool })?;
        }
        Ok(())
    }

    async fn resize(
        &self,
        source: &Path,
        dest: &Path,
        width: u32,
        height: u32,
    ) -> Result<ToolOutput> {
        // sips takes height before width.
        let args = vec![
            "-z".to_string(),
            height.to_string(),
            width.to_string(),
            path_arg(source)?,
            "--out".to_string(),
            path_arg(dest)?,
        ];
        run_tool("sips", args).await
    }

    fn has_rasterizer(&self) -> bool {
        cfg!(feature = "vector-render")
    }

    #[cfg(feature = "vector-render")]
    async fn rasterize(
        &self,
        source: &Path,
        dest: &Path,
        width: u32,
        height: u32,
    ) -> Result<ToolOutput> {
        use resvg::{tiny_skia, usvg};

        let data = tokio::fs::read(source)
            .await
            .fs_context("reading SVG source", source)?;
        let dest = dest.to_path_buf();

        // Rendering is CPU-bound; keep it off the async executor.
        let rendered = tokio::task::spawn_blocking(move || {
            let mut options = usvg::Options::default();
            // Text elements need system fonts to resolve.
            std::sync::Arc::make_mut(&mut options.fontdb).load_system_fonts();

            let tree = match usvg::Tree::from_data(&data, &options) {
                Ok(tree) => tree,
                Err(e) => return ToolOutput::failed(format!("parsing SVG: {e}")),
            };

            let Some(mut pixmap) = tiny_skia::Pixmap::new(width, height) else {
                return ToolOutput::failed(format!("allocating {width}x{height} pixmap"));
            };

            let transform = tiny_skia::Transform::from_scale(
                width as f32 / tree.size().width(),
                height as f32 / tree.size().height(),
            );
            resvg::render(&tree, transform, &mut pixmap.as_mut());

            match pixmap.save_png(&dest) {
                Ok(()) => ToolOutput::ok(),
                Err(e) => ToolOutput::failed(format!("writing {}: {e}", dest.display())),
            }
        })
        .await
        .map_err(|e| Error::GenericError(format!("rasterization task failed: {e}")))?;

        Ok(rendered)
    }

    #[cfg(not(feature = "vector-render"))]
    async fn rasterize(
        &self,
        source: &Path,
        _dest: &Path,
        _width: u32,
        _height: u32,
    ) -> Result<ToolOutput> {
        // Unreachable through the builder, which checks has_rasterizer() first.
        crate::bail!(
            "SVG rasterizer not compiled in, cannot render {}",
            source.display()
        )
    }

    async fn thumbnail(&self, source: &Path, out_dir: &Path, size: u32) -> Result<ToolOutput> {
        let args = vec![
            "-t".to_string(),
            "-s".to_string(),
            size.to_string(),
            "-o".to_string(),
            path_arg(out_dir)?,
            path_arg(source)?,
        ];
        run_tool("qlmanage", args).await
    }

    async fn compile_bundle(&self, iconset_dir: &Path, output: &Path) -> Result<ToolOutput> {
        let args = vec![
            "-c".to_string(),
            "icns".to_string(),
            path_arg(iconset_dir)?,
            "-o".to_string(),
            path_arg(output)?,
        ];
        run_tool("iconutil", args).await
    }
}

/// Command-line argument from a path, rejecting non-UTF8.
fn path_arg(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_owned)
        .with_context(|| format!("path contains non-UTF8 characters: {}", path.display()))
}

/// Spawn a tool, wait for it, and capture its output.
async fn run_tool(program: &'static str, args: Vec<String>) -> Result<ToolOutput> {
    log::debug!("running {program} {}", args.join(" "));

    let output = Command::new(program)
        .args(&args)
        .output()
        .await
        .map_err(|error| Error::CommandFailed {
            command: format!("{program} {}", args.join(" ")),
            error,
        })?;

    Ok(ToolOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
