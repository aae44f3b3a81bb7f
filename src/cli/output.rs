//! Colored terminal output.
//!
//! Progress goes to stdout and errors to stderr, with quiet and verbose
//! modes controlled by the CLI flags. Terminal write failures are swallowed;
//! a broken pipe must not fail a build.

use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Buffered, colored writer for user-facing output.
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Create an output manager with the given verbosity flags.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    fn emit(&self, glyph: &str, spec: &ColorSpec, message: &str) {
        if self.quiet {
            return;
        }
        let mut buffer = self.stdout.buffer();
        let _ = buffer.set_color(spec);
        let _ = write!(buffer, "{glyph}");
        let _ = buffer.reset();
        let _ = writeln!(buffer, " {message}");
        let _ = self.stdout.print(&buffer);
    }

    /// Informational line.
    pub fn info(&self, message: &str) {
        self.emit("ℹ", ColorSpec::new().set_fg(Some(Color::Cyan)), message);
    }

    /// In-flight step line.
    pub fn progress(&self, message: &str) {
        self.emit("⋯", ColorSpec::new().set_fg(Some(Color::Magenta)), message);
    }

    /// Completed step line.
    pub fn success(&self, message: &str) {
        self.emit(
            "✓",
            ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true),
            message,
        );
    }

    /// Warning line.
    pub fn warn(&self, message: &str) {
        self.emit(
            "⚠",
            ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true),
            message,
        );
    }

    /// Detail line, shown only with `--verbose`.
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            self.emit("→", ColorSpec::new().set_fg(Some(Color::Blue)), message);
        }
    }

    /// Indented plain line (usage hints, sub-items).
    pub fn indent(&self, message: &str) {
        if self.quiet {
            return;
        }
        let mut buffer = self.stdout.buffer();
        let _ = writeln!(buffer, "    {message}");
        let _ = self.stdout.print(&buffer);
    }

    /// Error line, always written to stderr regardless of quiet mode.
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = stderr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "✗");
        let _ = buffer.reset();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
        let _ = writeln!(buffer, " {message}");
        let _ = buffer.reset();
        let _ = stderr.print(&buffer);
    }

    /// Check if quiet mode is enabled.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
