//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for styled markdown with a plain-text fallback. Status
//! icons produced by the core display layer are colored by meaning.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin.quote_mark.set_fg(Color::Red);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "\x1b[34m{line}\x1b[0m")?;
            } else if let Some(color) = status_color(line) {
                writeln!(out, "{color}{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }

    /// Render a failure line to stderr
    pub fn render_error(&self, message: &str) -> Result<()> {
        let mut err = io::stderr().lock();
        if self.rich_enabled {
            write!(err, "\x1b[31m{message}\x1b[0m")?;
        } else {
            write!(err, "{message}")?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI color for lines that carry a unit or group status.
fn status_color(line: &str) -> Option<&'static str> {
    if line.contains("(✓ ") {
        Some("\x1b[32m")
    } else if line.contains("(➤ ") {
        Some("\x1b[33m")
    } else if line.contains("(◎ ") {
        Some("\x1b[36m")
    } else if line.contains("(✗ ") {
        Some("\x1b[90m")
    } else {
        None
    }
}
