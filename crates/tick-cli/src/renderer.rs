//! Terminal output for the markdown produced by the core display types.
//!
//! Rich mode styles each line with a termimad skin. Plain mode prints the
//! markdown unchanged, which is also what the tests match against.

use termimad::{MadSkin, crossterm::style::Color};

/// Prints markdown either styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::Reset);

        Self { rich_enabled, skin }
    }

    /// Print `markdown` to stdout.
    ///
    /// Heading lines keep their `#` markers in rich mode so the document
    /// structure stays visible.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36;1m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
