//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;

use super::code::{CodeNode, RenderPath, strip_trailing_newline};
use crate::highlight::Highlighter;

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Provides the GFM extensions (tables, strikethrough, autolinks, task
/// lists) plus soft-break conversion, so a single newline inside a
/// paragraph renders as a visual line break. Fenced code blocks that
/// declare a language are re-rendered through syntect with a dark color
/// theme; inline spans and untagged blocks keep comrak's plain code
/// markup.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: Highlighter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures the fixed extension set:
    /// - Tables, strikethrough, autolinks, task lists
    /// - Soft breaks rendered as hard breaks
    /// - Raw embedded HTML omitted from output (comrak default)
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        // Render options (single newline becomes <br />)
        options.render.hardbreaks = true;

        Self {
            options,
            highlighter: Highlighter::new(),
        }
    }

    /// Renders markdown content to an HTML string.
    ///
    /// Parses markdown and renders to HTML with GFM extensions, then
    /// re-renders tagged fenced code blocks with syntax highlighting.
    /// The result is a pure function of the input string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML with syntax highlighted code blocks
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        self.highlight_code_elements(&html)
    }

    /// Post-processes HTML to apply syntax highlighting to code blocks.
    ///
    /// Walks every `<code>` element in comrak's output and classifies it:
    /// fenced blocks whose class string carries a `language-<tag>` marker
    /// are replaced with syntect highlighted content, everything else is
    /// left exactly as comrak produced it (class string and attributes
    /// untouched). The opening `<code>` tag of highlighted blocks is also
    /// re-emitted verbatim; only the enclosing `<pre>` gains the theme
    /// background color.
    ///
    /// # Arguments
    ///
    /// * `html`: Raw HTML from comrak
    ///
    /// # Returns
    ///
    /// HTML with highlighted code blocks
    ///
    /// # Errors
    ///
    /// Returns error if highlighting fails
    fn highlight_code_elements(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(offset) = html[search_pos..].find("<code") {
            let tag_start = search_pos + offset;

            // Require a real tag boundary: `<code>` or `<code ...>`
            let rest = &html[tag_start + "<code".len()..];
            if !rest.starts_with('>') && !rest.starts_with(' ') {
                search_pos = tag_start + "<code".len();
                continue;
            }

            let tag_end = match html[tag_start..].find('>') {
                Some(pos) => tag_start + pos,
                None => break,
            };

            let content_start = tag_end + 1;
            let content_end = match html[content_start..].find("</code>") {
                Some(pos) => content_start + pos,
                None => {
                    search_pos = content_start;
                    continue;
                }
            };

            // Fenced blocks render as `<pre><code ...>`; anything not in
            // that position is an inline span.
            let node = CodeNode {
                inline: !html[..tag_start].ends_with("<pre>"),
                class: attribute_value(&html[tag_start..tag_end], "class"),
                literal: html_decode(&html[content_start..content_end]),
            };

            let RenderPath::Highlighted { language } = node.classify() else {
                // Plain path: the element comrak produced is already the
                // output, so leave it in place untouched.
                search_pos = content_end + "</code>".len();
                continue;
            };

            let code = strip_trailing_newline(&node.literal);
            let highlighted = self
                .highlighter
                .highlight(code, language)
                .with_context(|| format!("Failed to highlight code block: {}", language))?;

            // Copy everything before the enclosing <pre>, then re-emit it
            // with the theme background and the original code tag verbatim
            result.push_str(&html[last_end..tag_start - "<pre>".len()]);
            result.push_str("<pre");
            if let Some(style) = self.highlighter.background_style() {
                result.push_str(" style=\"");
                result.push_str(&style);
                result.push('"');
            }
            result.push('>');
            result.push_str(&html[tag_start..=tag_end]);
            result.push_str(&highlighted);
            result.push_str("</code>");

            last_end = content_end + "</code>".len();
            search_pos = last_end;
        }

        // Copy remaining HTML after the last highlighted block
        result.push_str(&html[last_end..]);

        Ok(result)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts a double-quoted attribute value from an opening tag.
fn attribute_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let end = tag[start..].find('"')? + start;
    Some(&tag[start..end])
}

/// Decodes HTML entities in code block content.
///
/// Comrak escapes special characters in code blocks; this reverses those
/// escapes before the content reaches syntect. `&amp;` is replaced last
/// so double-escaped sequences decode by one level only.
fn html_decode(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
