//! Render Markdown to styled HTML with highlighted code blocks.

mod assets;
mod highlight;
mod markdown;
mod viewer;

pub use assets::{markdown_css, write_css_assets};
pub use highlight::Highlighter;
pub use markdown::MarkdownRenderer;
pub use viewer::render;
