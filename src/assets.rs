//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Returns the bundled markdown stylesheet.
///
/// Styles the `markdown-body` container produced by [`crate::render`]
/// with GitHub-like typography.
pub fn markdown_css() -> &'static str {
    MARKDOWN
}

/// Writes bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_markdown_css_bundled() {
        // Arrange & Act
        let css = markdown_css();

        // Assert
        assert!(!css.is_empty(), "Stylesheet should be bundled");
        assert!(
            css.contains(".markdown-body"),
            "Stylesheet should scope to the container class"
        );
    }

    #[test]
    fn test_write_css_assets() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");

        // Act
        write_css_assets(dir.path()).expect("Should write assets");

        // Assert
        let written = fs::read_to_string(dir.path().join("markdown.css"))
            .expect("markdown.css should exist");
        assert_eq!(written, MARKDOWN, "Written asset should match bundle");
    }

    #[test]
    fn test_write_css_assets_missing_dir_fails() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let missing = dir.path().join("does-not-exist");

        // Act
        let result = write_css_assets(&missing);

        // Assert
        assert!(result.is_err(), "Should fail for missing directory");
        let err_msg = format!("{:?}", result.unwrap_err());
        assert!(
            err_msg.contains("markdown.css"),
            "Error should name the asset"
        );
    }
}
