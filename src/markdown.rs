//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists), soft-break conversion,
//! and syntect syntax highlighting for fenced code blocks that declare a
//! language.

mod code;
mod renderer;

pub use renderer::MarkdownRenderer;
