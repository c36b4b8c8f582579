//! Code element classification for rendering dispatch.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a language tag embedded in a class string (e.g. `language-rust`).
static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"language-(\w+)").unwrap());

/// Code element encountered while rendering a document.
///
/// Captures the rendering-relevant facts about a code element: whether it
/// is an inline span or the content of a fenced block, the class string
/// the parser attached to it (if any), and the literal text content with
/// HTML entities decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeNode<'a> {
    /// True for inline code spans, false for fenced block contents.
    pub inline: bool,
    /// Class attribute value, e.g. `language-rust` for tagged fences.
    pub class: Option<&'a str>,
    /// Literal text content.
    pub literal: String,
}

/// Rendering strategy selected for a code element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath<'a> {
    /// Fenced block carrying a language tag: syntax highlight the content.
    Highlighted {
        /// Language tag extracted from the class string.
        language: &'a str,
    },
    /// Everything else: plain code markup with the original class kept.
    Plain,
}

impl<'a> CodeNode<'a> {
    /// Selects the rendering path for this element.
    ///
    /// Extracts a language tag by matching `language-(\w+)` against the
    /// class string, leftmost match first. A fenced element with an
    /// extracted tag takes the highlighted path; inline spans and elements
    /// with a missing or non-matching class take the plain path. Every
    /// input maps to exactly one path; classification cannot fail.
    ///
    /// `\w` here is the regex crate's default Unicode word class, so tags
    /// with boundary characters extract their leading word run
    /// (`language-c++` yields `c`).
    pub fn classify(&self) -> RenderPath<'a> {
        if self.inline {
            return RenderPath::Plain;
        }

        match self
            .class
            .and_then(|class| LANGUAGE_TAG.captures(class))
            .and_then(|caps| caps.get(1))
        {
            Some(tag) => RenderPath::Highlighted {
                language: tag.as_str(),
            },
            None => RenderPath::Plain,
        }
    }
}

/// Strips exactly one trailing newline from fenced block content.
///
/// Fenced literals keep the newline terminating their last line; the
/// highlighter receives the content without it. No-op when the text does
/// not end with a newline.
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(class: Option<&str>) -> CodeNode<'_> {
        CodeNode {
            inline: false,
            class,
            literal: String::new(),
        }
    }

    #[test]
    fn test_classify_tagged_block_highlighted() {
        // Arrange
        let node = block(Some("language-go"));

        // Act
        let path = node.classify();

        // Assert
        assert_eq!(path, RenderPath::Highlighted { language: "go" });
    }

    #[test]
    fn test_classify_inline_span_plain() {
        // Arrange: inline spans are plain even with a matching class
        let node = CodeNode {
            inline: true,
            class: Some("language-rust"),
            literal: "x".to_string(),
        };

        // Act
        let path = node.classify();

        // Assert
        assert_eq!(path, RenderPath::Plain);
    }

    #[test]
    fn test_classify_missing_class_plain() {
        // Arrange
        let node = block(None);

        // Act & Assert
        assert_eq!(node.classify(), RenderPath::Plain);
    }

    #[test]
    fn test_classify_non_matching_class_plain() {
        // Arrange
        let node = block(Some("highlight-source"));

        // Act & Assert
        assert_eq!(node.classify(), RenderPath::Plain);
    }

    #[test]
    fn test_classify_empty_tag_plain() {
        // Arrange: `language-` with no tag characters fails the match
        let node = block(Some("language-"));

        // Act & Assert
        assert_eq!(node.classify(), RenderPath::Plain);
    }

    #[test]
    fn test_classify_first_match_wins() {
        // Arrange
        let node = block(Some("language-python language-ruby"));

        // Act
        let path = node.classify();

        // Assert
        assert_eq!(path, RenderPath::Highlighted { language: "python" });
    }

    #[test]
    fn test_classify_boundary_characters() {
        // Arrange: `+` is not a word character, so only `c` extracts
        let node = block(Some("language-c++"));

        // Act
        let path = node.classify();

        // Assert
        assert_eq!(path, RenderPath::Highlighted { language: "c" });
    }

    #[test]
    fn test_classify_tag_in_middle_of_class() {
        // Arrange
        let node = block(Some("some-prefix language-toml"));

        // Act & Assert
        assert_eq!(
            node.classify(),
            RenderPath::Highlighted { language: "toml" }
        );
    }

    #[test]
    fn test_strip_trailing_newline() {
        // Arrange & Act & Assert
        assert_eq!(strip_trailing_newline("print(1)\n"), "print(1)");
        assert_eq!(strip_trailing_newline("print(1)"), "print(1)");
    }

    #[test]
    fn test_strip_trailing_newline_single() {
        // Arrange: exactly one newline comes off
        let text = "line\n\n";

        // Act & Assert
        assert_eq!(strip_trailing_newline(text), "line\n");
    }

    #[test]
    fn test_strip_trailing_newline_empty() {
        // Arrange & Act & Assert
        assert_eq!(strip_trailing_newline(""), "");
        assert_eq!(strip_trailing_newline("\n"), "");
    }
}
