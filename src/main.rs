//! iconset - build macOS `.icns` bundles from a PNG or SVG source image.

use iconset::cli::{self, OutputManager};
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(code) => process::exit(code),
        Err(e) => {
            // Never quiet for fatal errors.
            let output = OutputManager::new(false, false);
            output.error(&e.to_string());

            if let Some(hint) = e.usage_hint() {
                for line in hint.lines() {
                    output.indent(line);
                }
            }

            process::exit(e.exit_code());
        }
    }
}
