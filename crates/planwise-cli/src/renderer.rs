//! Terminal output for check reports and suggestions.
//!
//! The rule results arrive here as markdown from the display wrappers in
//! `planwise-core`. With color enabled a termimad skin highlights the
//! report structure; with `--no-color` the markdown markers are stripped
//! so pipes and scripts see plain text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders report markdown to stdout, in color or as plain text.
pub struct Renderer {
    color_enabled: bool,
    skin: MadSkin,
}

impl Renderer {
    /// Create a renderer; pass `false` to get plain-text output.
    pub fn new(color_enabled: bool) -> Self {
        Self {
            color_enabled,
            skin: report_skin(),
        }
    }

    /// Print a block of report markdown.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.color_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{}", strip_markup(markdown));
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Skin tuned for check reports: failing field names are bold in the
/// markdown, so bold renders red to make them stand out in an issue list;
/// headings are cyan and quoted values (inline code) yellow.
fn report_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Cyan);
    skin.bold.set_fg(Color::Red);
    skin.inline_code.set_fg(Color::Yellow);
    skin
}

/// Flatten report markdown to plain text.
///
/// Heading hashes, bold markers, and inline-code backticks are dropped;
/// the wrapped text itself passes through untouched.
fn strip_markup(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    for line in markdown.lines() {
        let line = line.strip_prefix("# ").unwrap_or(line);
        out.push_str(&line.replace("**", "").replace('`', ""));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup_flattens_issue_lines() {
        let markdown = "# Plan check: Demo\n\n- **price**: The price must be greater than zero\n";
        assert_eq!(
            strip_markup(markdown),
            "Plan check: Demo\n\n- price: The price must be greater than zero\n"
        );
    }

    #[test]
    fn test_strip_markup_keeps_quoted_values() {
        let plain = strip_markup("The current name `Custom` looks hand-edited");
        assert!(plain.contains("Custom"));
        assert!(!plain.contains('`'));
    }

    #[test]
    fn test_no_color_disables_skin_output() {
        let renderer = Renderer::new(false);
        assert!(!renderer.color_enabled);
    }
}
