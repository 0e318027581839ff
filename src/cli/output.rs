//! Colored terminal output for operator-facing messages.
//!
//! Everything goes to stderr so stdout carries only the artifact report.

use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes section headers, progress, warnings and results.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    color: ColorChoice,
}

impl OutputManager {
    /// Creates an output manager.
    ///
    /// Colors are used only when stderr is a terminal.
    pub fn new(verbose: bool) -> Self {
        let color = if io::stderr().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self { verbose, color }
    }

    fn write_line(&self, color: Option<Color>, bold: bool, prefix: &str, message: &str) -> io::Result<()> {
        let mut stream = StandardStream::stderr(self.color);
        stream.set_color(ColorSpec::new().set_fg(color).set_bold(bold))?;
        write!(stream, "{prefix}")?;
        stream.reset()?;
        writeln!(stream, "{message}")?;
        stream.flush()
    }

    /// Print message only in verbose mode
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose {
            self.write_line(Some(Color::Cyan), false, "  · ", message)
        } else {
            Ok(())
        }
    }

    /// Print warning message
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.write_line(Some(Color::Yellow), true, "⚠ ", message)
    }

    /// Print success message
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.write_line(Some(Color::Green), true, "✓ ", message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.write_line(Some(Color::Blue), true, "→ ", message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> io::Result<()> {
        self.write_line(Some(Color::Magenta), true, &format!("\n== {title} =="), "")
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.write_line(None, false, "    ", message)
    }

    /// Print error message
    pub fn error(&self, message: &str) -> io::Result<()> {
        self.write_line(Some(Color::Red), true, "Error: ", message)
    }
}
