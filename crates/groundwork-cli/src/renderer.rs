//! Terminal output for the markdown produced by the core display types.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Writes markdown to stdout, styled with termimad or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if !self.rich_enabled {
            out.write_all(markdown.as_bytes())?;
            out.flush()?;
            return Ok(());
        }

        for line in markdown.lines() {
            match header_color(line) {
                // Header markers stay visible so job IDs line up with plain output.
                Some(color) => writeln!(out, "\x1b[{color}m{line}\x1b[0m")?,
                None => writeln!(out, "{}", self.skin.inline(line))?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI foreground code for a markdown header line, by level.
fn header_color(line: &str) -> Option<u8> {
    let level = line.chars().take_while(|c| *c == '#').count();
    match level {
        0 => None,
        1 => Some(32),
        2 => Some(36),
        _ => Some(34),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_header_color_by_level() {
        assert_eq!(header_color("# Services"), Some(32));
        assert_eq!(header_color("## Open Jobs"), Some(36));
        assert_eq!(header_color("### abc (snow)"), Some(34));
        assert_eq!(header_color("- Price: $35.00"), None);
    }
}
