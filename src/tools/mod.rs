//! External tool orchestration.
//!
//! Everything the builder cannot do itself goes through the [`ToolRunner`]
//! capability trait: bitmap resizing, SVG rasterization, thumbnail
//! generation, and icon-bundle compilation. The production implementation
//! ([`SystemTools`]) shells out to the platform tools; tests substitute
//! fakes without invoking any real OS tool.

mod system;

pub use system::SystemTools;

use crate::builder::SourceFormat;
use crate::error::Result;
use std::path::Path;

/// Captured result of one tool invocation.
///
/// External tools report their exit status plus captured output; in-process
/// operations synthesize the same shape so the builder can treat every
/// rendering step uniformly.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Whether the tool exited with status zero (or the operation succeeded).
    pub success: bool,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ToolOutput {
    /// Output representing a successful in-process operation.
    pub fn ok() -> Self {
        Self {
            success: true,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Failed in-process operation with a diagnostic.
    pub fn failed(diagnostic: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: diagnostic.into(),
        }
    }

    /// Diagnostic text for a failed invocation: stderr when non-empty,
    /// stdout otherwise (some tools report errors on stdout).
    pub fn diagnostic(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Capability interface over the tools a build invokes.
///
/// Each method returns a structured [`ToolOutput`]; `Err` is reserved for
/// failures to invoke the tool at all (spawn errors, unreadable sources),
/// while a tool that ran and reported failure comes back as
/// `Ok(ToolOutput { success: false, .. })`.
#[allow(async_fn_in_trait)]
pub trait ToolRunner {
    /// Verify the external tools a build with this source format will
    /// invoke are present, before any of them runs.
    fn preflight(&self, format: SourceFormat) -> Result<()> {
        let _ = format;
        Ok(())
    }

    /// Resize `source` into an exact `width`x`height` PNG at `dest`.
    async fn resize(&self, source: &Path, dest: &Path, width: u32, height: u32)
    -> Result<ToolOutput>;

    /// Whether in-process SVG rasterization is available.
    fn has_rasterizer(&self) -> bool;

    /// Rasterize the SVG at `source` into a `width`x`height` PNG at `dest`.
    async fn rasterize(
        &self,
        source: &Path,
        dest: &Path,
        width: u32,
        height: u32,
    ) -> Result<ToolOutput>;

    /// Produce a `size`-px thumbnail PNG for `source` inside `out_dir`.
    ///
    /// The tool names its output `<source file name>.png`; the caller is
    /// responsible for checking that the file actually appeared.
    async fn thumbnail(&self, source: &Path, out_dir: &Path, size: u32) -> Result<ToolOutput>;

    /// Compile an iconset directory into an `.icns` bundle at `output`.
    async fn compile_bundle(&self, iconset_dir: &Path, output: &Path) -> Result<ToolOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_prefers_stderr() {
        let out = ToolOutput {
            success: false,
            stdout: "progress line".into(),
            stderr: "real error".into(),
        };
        assert_eq!(out.diagnostic(), "real error");
    }

    #[test]
    fn diagnostic_falls_back_to_stdout() {
        let out = ToolOutput {
            success: false,
            stdout: "error on stdout".into(),
            stderr: "  \n".into(),
        };
        assert_eq!(out.diagnostic(), "error on stdout");
    }
}
