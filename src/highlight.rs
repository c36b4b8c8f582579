//! Syntax highlighting with syntect.

use anyhow::{Context, Result, anyhow};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Color theme applied to highlighted code blocks.
const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Highlights source code as inline-styled HTML.
///
/// Holds the syntax definitions and the color theme used for all code
/// blocks. Language lookup goes through syntect's token and extension
/// tables; unrecognized languages degrade to escaped plain text, and
/// empty input produces empty output. Immutable after construction, so
/// one instance can serve any number of independent render calls.
#[derive(Debug)]
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    /// Creates a highlighter with the default dark theme.
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME)
            .expect("syntect's default theme set includes the built-in dark theme")
    }

    /// Creates a highlighter with a named theme from syntect's defaults.
    ///
    /// # Arguments
    ///
    /// * `name`: Theme name, e.g. `base16-ocean.dark`
    ///
    /// # Errors
    ///
    /// Returns error if the theme name is not in the default theme set
    pub fn with_theme(name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults().themes;
        let theme = themes
            .remove(name)
            .ok_or_else(|| anyhow!("Unknown syntax highlighting theme: {}", name))?;

        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Highlights code as HTML spans with inline color styles.
    ///
    /// Looks up the language by token first (`rust`, `python`), then by
    /// file extension (`rs`, `py`). Unknown languages fall back to
    /// HTML-escaped plain text, so the result is always monospace-safe
    /// output for the caller to wrap in a code element.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code to highlight
    /// * `language`: Language tag from the fenced block
    ///
    /// # Returns
    ///
    /// HTML string with `<span style="color:...">` tokens
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line
    pub fn highlight(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let Some(syntax) = syntax else {
            return Ok(escape_html(code));
        };

        let mut lines = HighlightLines::new(syntax, &self.theme);
        let mut result = String::with_capacity(code.len() * 2);

        for line in LinesWithEndings::from(code) {
            let regions = lines
                .highlight_line(line, &self.syntax_set)
                .context("Failed to parse line for syntax highlighting")?;
            let html = styled_line_to_highlighted_html(&regions, IncludeBackground::No)
                .context("Failed to render highlighted line")?;
            result.push_str(&html);
        }

        Ok(result)
    }

    /// Returns the theme background as a CSS declaration.
    ///
    /// Applied to the `<pre>` element enclosing highlighted content, the
    /// same placement syntect uses for full-page output. None when the
    /// theme defines no background color.
    pub fn background_style(&self) -> Option<String> {
        self.theme.settings.background.map(|color| {
            format!(
                "background-color:#{:02x}{:02x}{:02x};",
                color.r, color.g, color.b
            )
        })
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes HTML special characters.
///
/// Used for the plain text fallback when a language is unknown.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
