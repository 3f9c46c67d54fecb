//! Rendering diff bodies to HTML markup.

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::error::{Error, Result};

/// Theme used when none is requested or the requested one is unknown.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Formats diff text as markup for the presentation layer.
pub trait Highlighter {
    /// Render one file's diff body.
    ///
    /// # Errors
    /// Returns `Highlight` if the text cannot be rendered.
    fn render(&self, diff_text: &str) -> Result<String>;
}

/// Highlights with syntect's bundled `Diff` syntax, emitting inline styles.
pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl SyntectHighlighter {
    /// Load the bundled syntaxes and the named theme.
    #[must_use]
    pub fn new(theme: &str) -> Self {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .remove(theme)
            .or_else(|| themes.themes.remove(DEFAULT_THEME))
            .unwrap_or_default();

        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}

impl Highlighter for SyntectHighlighter {
    fn render(&self, diff_text: &str) -> Result<String> {
        let syntax = self
            .syntaxes
            .find_syntax_by_extension("diff")
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        highlighted_html_for_string(diff_text, &self.syntaxes, syntax, &self.theme)
            .map_err(|e| Error::Highlight(e.to_string()))
    }
}

impl std::fmt::Debug for SyntectHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntectHighlighter")
            .field("theme", &self.theme.name)
            .finish_non_exhaustive()
    }
}

/// Escapes the text into a bare `<pre>` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn render(&self, diff_text: &str) -> Result<String> {
        Ok(format!("<pre class=\"diff\">{}</pre>\n", escape_html(diff_text)))
    }
}

/// Escape text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
