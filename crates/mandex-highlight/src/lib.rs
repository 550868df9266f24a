//! Terminal styling for mandex.
//!
//! Configuration files are shown as highlighted TOML; everything else mandex prints goes
//! through the small ANSI helpers below. Page bodies are never styled.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Highlights configuration TOML for the terminal.
pub struct Highlighter {
    /// Language definitions; TOML comes from the extra set.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// The active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content, ending with a style reset.
    ///
    /// Lines that fail to highlight are passed through unstyled.
    pub fn highlight_toml(&self, content: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension("toml")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let mut lines = HighlightLines::new(syntax, self.theme_set.get(self.theme));

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI escape sequences.
pub mod colors {
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan foreground.
    pub const CYAN: &str = "\x1b[36m";
    /// Green foreground.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow foreground.
    pub const YELLOW: &str = "\x1b[33m";
    /// Faint.
    pub const DIM: &str = "\x1b[2m";
    /// Clears every attribute.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps `text` in `codes` followed by a reset.
fn paint(codes: &[&str], text: &str) -> String {
    let mut out = codes.concat();
    out.push_str(text);
    out.push_str(colors::RESET);
    out
}

/// Styles a command title: bold cyan.
pub fn header(text: &str) -> String {
    paint(&[colors::BOLD, colors::CYAN], text)
}

/// Styles a group heading inside a command's output: bold.
pub fn subheader(text: &str) -> String {
    paint(&[colors::BOLD], text)
}

/// Styles secondary detail such as locators and source paths.
pub fn dim(text: &str) -> String {
    paint(&[colors::DIM], text)
}

/// Styles a passing check.
pub fn success(text: &str) -> String {
    paint(&[colors::GREEN], text)
}

/// Styles a check that found something to fix.
pub fn warning(text: &str) -> String {
    paint(&[colors::YELLOW], text)
}

/// Indents every non-empty line of `content` by two spaces.
pub fn indent_content(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + content.lines().count() * 2);
    for line in content.lines() {
        if !line.is_empty() {
            out.push_str("  ");
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Prefixes `text` with `depth` levels of two-space indentation.
pub fn tree_line(depth: usize, text: &str) -> String {
    format!("{}{text}", "  ".repeat(depth))
}
