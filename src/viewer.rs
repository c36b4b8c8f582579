//! Markdown viewer component.

use anyhow::Result;
use maud::{Markup, PreEscaped, html};

use crate::markdown::MarkdownRenderer;

/// Renders a Markdown string as a styled HTML fragment.
///
/// The single entry point of the crate: parses the source with the fixed
/// GFM extension set and soft-break conversion, highlights tagged fenced
/// code blocks, and wraps the result in a `markdown-body` container with
/// fixed padding. The container class matches the bundled stylesheet
/// (see [`crate::markdown_css`]), which gives the fragment GitHub-like
/// typography once the stylesheet is served alongside it.
///
/// Rendering is a pure function of the source string; calling it twice
/// with the same input produces identical markup.
///
/// # Arguments
///
/// * `source`: Markdown content to render
///
/// # Returns
///
/// HTML fragment ready for embedding in a host page
///
/// # Errors
///
/// Returns error if syntax highlighting fails
pub fn render(source: &str) -> Result<Markup> {
    let renderer = MarkdownRenderer::new();
    let body = renderer.render(source)?;

    Ok(html! {
        div class="markdown-body" style="padding: 24px;" {
            (PreEscaped(body))
        }
    })
}
