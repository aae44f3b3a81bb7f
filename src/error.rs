//! Error types for iconset builds.
//!
//! Provides contextual error chaining, filesystem errors with path context,
//! and a terminal error kind for each way a build can fail.
//!
//! # Features
//!
//! - **Context trait**: Add context to errors, for both `Result` and `Option`
//! - **ErrorExt trait**: Filesystem operations with automatic path context
//! - **bail! macro**: Early return with formatted error messages

use std::{fmt::Display, io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Errors returned by the iconset builder.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// Context describing the operation (e.g., "creating iconset directory")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Child process execution error.
    ///
    /// Used when an external tool cannot be spawned at all, as opposed to
    /// running and exiting non-zero.
    #[error("failed to run command {command}: {error}")]
    CommandFailed {
        /// Command that failed to execute
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// Generic I/O error.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Image decoding error (rendition verification).
    #[error("{0}")]
    ImageError(#[from] image::ImageError),

    /// No input argument was given and neither `icon.png` nor `icon.svg`
    /// exists in the working directory.
    #[error("no icon.png or icon.svg found, and no input file specified")]
    NoInputFound,

    /// Input extension is neither `.png` nor `.svg`.
    #[error("unsupported file format {}: use a .png or .svg file", path.display())]
    UnsupportedFormat {
        /// The rejected input path
        path: PathBuf,
    },

    /// The thumbnail fallback did not produce a PNG from the SVG source.
    #[error("could not generate a PNG from {}", path.display())]
    SvgRasterizationFailed {
        /// The SVG source that failed to rasterize
        path: PathBuf,
    },

    /// One or more renditions were missing or had the wrong dimensions.
    #[error("{} rendition(s) failed: {}", failures.len(), failures.join("; "))]
    RenditionFailed {
        /// One entry per bad rendition, `"<file name>: <reason>"`
        failures: Vec<String>,
    },

    /// The icon-bundle compiler exited non-zero.
    #[error("error creating .icns file: {diagnostic}")]
    BundleCompilationFailed {
        /// The compiler's diagnostic output, verbatim
        diagnostic: String,
    },

    /// A required external tool is not on PATH.
    #[error("required tool `{tool}` not found on PATH")]
    ToolNotFound {
        /// Name of the missing tool
        tool: &'static str,
    },

    /// Generic error with custom message.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Usage errors (no input, unsupported format) exit with 2 so scripts can
    /// tell them apart; every other failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoInputFound | Self::UnsupportedFormat { .. } => 2,
            _ => 1,
        }
    }

    /// Usage hint shown alongside usage errors.
    pub fn usage_hint(&self) -> Option<&'static str> {
        match self {
            Self::NoInputFound | Self::UnsupportedFormat { .. } => Some(
                "Usage: iconset [INPUT] [OUTPUT]\n\
                 INPUT: path to source icon (PNG or SVG)\n\
                 OUTPUT: path for output .icns file (optional, default: ./Miso.icns)",
            ),
            _ => None,
        }
    }
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for adding context to errors.
///
/// Works with both `Result<T>` and `Option<T>`.
pub trait Context<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Add context to an error using a closure (lazy evaluation).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Extension trait for filesystem operations with automatic path context.
///
/// The `context` should be a present-tense verb phrase describing the
/// operation, e.g., "reading SVG source", "creating iconset directory".
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Macro for early return with error.
///
/// Converts the message into a [`Error::GenericError`] and returns
/// immediately.
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::Error::GenericError($msg.into()))
    };
    ($err:expr $(,)?) => {
        return Err($crate::error::Error::GenericError($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::GenericError(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_2() {
        assert_eq!(Error::NoInputFound.exit_code(), 2);
        assert_eq!(
            Error::UnsupportedFormat {
                path: PathBuf::from("logo.gif"),
            }
            .exit_code(),
            2
        );
        assert!(Error::NoInputFound.usage_hint().is_some());
    }

    #[test]
    fn runtime_errors_exit_with_1() {
        let compile = Error::BundleCompilationFailed {
            diagnostic: "Invalid Iconset.".into(),
        };
        assert_eq!(compile.exit_code(), 1);
        assert!(compile.usage_hint().is_none());

        let rasterize = Error::SvgRasterizationFailed {
            path: PathBuf::from("icon.svg"),
        };
        assert_eq!(rasterize.exit_code(), 1);
    }

    #[test]
    fn compile_diagnostic_is_preserved_verbatim() {
        let e = Error::BundleCompilationFailed {
            diagnostic: "icon.iconset: Failed to generate ICNS.".into(),
        };
        assert!(e.to_string().contains("icon.iconset: Failed to generate ICNS."));
    }

    #[test]
    fn context_wraps_message() {
        let base: Result<()> = Err(Error::NoInputFound);
        let wrapped = base.context("resolving input");
        assert!(
            wrapped
                .unwrap_err()
                .to_string()
                .starts_with("resolving input: ")
        );
    }
}
