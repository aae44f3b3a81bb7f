//! End-to-end iconset builds.
//!
//! The pipeline is strictly linear: resolve paths, create the iconset
//! directory, render the ten renditions with whichever strategy fits the
//! source format, compile the bundle, optionally clean up. Every external
//! step goes through the injected [`ToolRunner`](crate::tools::ToolRunner)
//! so the whole pipeline runs against fakes in tests.

mod compile;
mod render;
mod sizes;
mod source;

pub use render::TEMP_THUMBNAIL;
pub use sizes::{ICONSET_RENDITIONS, RenditionSpec, max_dimension};
pub use source::{SourceFormat, SourceImage, resolve_input};

use crate::error::{ErrorExt, Result};
use crate::tools::ToolRunner;
use std::path::{Path, PathBuf};

/// Default output file name when none is supplied.
pub const DEFAULT_OUTPUT: &str = "Miso.icns";

/// What to build: resolved by the CLI, consumed by [`IconsetBuilder`].
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Source image path; `None` triggers discovery in `working_dir`.
    pub input: Option<PathBuf>,
    /// Output `.icns` path; `None` defaults to [`DEFAULT_OUTPUT`] inside
    /// `working_dir`.
    pub output: Option<PathBuf>,
    /// Directory used for input discovery and the default output.
    pub working_dir: PathBuf,
    /// Remove the iconset directory after a successful compile.
    pub clean: bool,
}

/// A successfully compiled bundle.
#[derive(Debug, Clone)]
pub struct BuiltBundle {
    /// Path of the `.icns` file.
    pub path: PathBuf,
    /// The iconset directory the bundle was compiled from, `None` when it
    /// was cleaned up.
    pub iconset_dir: Option<PathBuf>,
}

/// Builds a `.icns` bundle from a PNG or SVG source.
#[derive(Debug)]
pub struct IconsetBuilder<T> {
    tools: T,
    renditions: &'static [RenditionSpec],
}

impl<T: ToolRunner> IconsetBuilder<T> {
    /// Builder over the standard ten-rendition table.
    pub fn new(tools: T) -> Self {
        Self {
            tools,
            renditions: ICONSET_RENDITIONS,
        }
    }

    /// Builder over an alternate size table.
    pub fn with_renditions(tools: T, renditions: &'static [RenditionSpec]) -> Self {
        Self { tools, renditions }
    }

    /// Run the full pipeline and report the compiled bundle.
    ///
    /// Each failure kind is terminal; nothing is retried. The iconset
    /// directory is created before the source format is validated, so an
    /// unsupported input leaves the empty directory behind.
    pub async fn build(&self, request: &BuildRequest) -> Result<BuiltBundle> {
        let input = resolve_input(request.input.clone(), &request.working_dir)?;
        let output = resolve_output(request.output.clone(), &request.working_dir);

        let iconset_dir = iconset_dir_for(&output);
        tokio::fs::create_dir_all(&iconset_dir)
            .await
            .fs_context("creating iconset directory", &iconset_dir)?;

        let source = SourceImage::from_path(input)?;
        self.tools.preflight(source.format())?;

        log::info!(
            "building {} from {}",
            output.display(),
            source.path().display()
        );

        render::render_all(&self.tools, &source, self.renditions, &iconset_dir, &output).await?;
        compile::compile_bundle(&self.tools, &iconset_dir, &output).await?;

        let iconset_dir = if request.clean {
            tokio::fs::remove_dir_all(&iconset_dir)
                .await
                .fs_context("removing iconset directory", &iconset_dir)?;
            None
        } else {
            Some(iconset_dir)
        };

        Ok(BuiltBundle {
            path: output,
            iconset_dir,
        })
    }
}

/// The output path for a build: the supplied path, or [`DEFAULT_OUTPUT`]
/// inside `working_dir`.
pub fn resolve_output(output: Option<PathBuf>, working_dir: &Path) -> PathBuf {
    output.unwrap_or_else(|| working_dir.join(DEFAULT_OUTPUT))
}

/// `<dir>/<stem>.iconset` next to the output bundle.
fn iconset_dir_for(output: &Path) -> PathBuf {
    output.with_extension("iconset")
}
