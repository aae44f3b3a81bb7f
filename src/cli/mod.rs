//! Command line interface.
//!
//! Thin orchestration over the builder: resolve what to build, narrate the
//! phases, hand the resolved request to [`IconsetBuilder`], and report the
//! outcome. All error display and exit-code mapping lives in `main`.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::builder::{self, BuildRequest, ICONSET_RENDITIONS, IconsetBuilder};
use crate::error::{ErrorExt, Result};
use crate::tools::SystemTools;

/// Main CLI entry point. Returns the process exit code.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(args).await
}

/// Execute a build for already-parsed arguments.
pub async fn execute(args: Args) -> Result<i32> {
    let out = OutputManager::new(args.verbose, args.quiet);

    let working_dir = std::env::current_dir().fs_context("resolving working directory", ".")?;

    // Resolve up front so the progress lines name real paths; the builder
    // re-resolves the same way for library callers.
    let input = builder::resolve_input(args.input, &working_dir)?;
    let output_path = builder::resolve_output(args.output, &working_dir);

    out.info(&format!("Using input file: {}", input.display()));
    out.info(&format!("Output will be: {}", output_path.display()));

    let request = BuildRequest {
        input: Some(input),
        output: Some(output_path),
        working_dir,
        clean: args.clean,
    };

    out.progress(&format!(
        "Creating {} icon renditions...",
        ICONSET_RENDITIONS.len()
    ));

    let built = IconsetBuilder::new(SystemTools::new())
        .build(&request)
        .await?;

    out.success(&format!("{} created successfully!", built.path.display()));
    match &built.iconset_dir {
        Some(dir) => out.verbose(&format!("Iconset directory left at {}", dir.display())),
        None => out.verbose("Iconset directory removed"),
    }

    Ok(0)
}
