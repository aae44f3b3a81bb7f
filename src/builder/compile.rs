//! Final `.icns` compilation.

use crate::error::{Context, Error, Result};
use crate::tools::ToolRunner;
use std::path::Path;

/// Compile the populated iconset directory into the output bundle.
///
/// The compiler's exit status is the only signal trusted here: zero means
/// the bundle exists at `output`, anything else surfaces the tool's own
/// diagnostic text unchanged.
pub async fn compile_bundle<T: ToolRunner>(
    tools: &T,
    iconset_dir: &Path,
    output: &Path,
) -> Result<()> {
    log::info!("generating .icns file at {}", output.display());

    let outcome = tools
        .compile_bundle(iconset_dir, output)
        .await
        .context("invoking icon-bundle compiler")?;

    if !outcome.success {
        return Err(Error::BundleCompilationFailed {
            diagnostic: outcome.diagnostic().to_string(),
        });
    }

    log::info!("created {}", output.display());
    Ok(())
}
