//! Loading section descriptors from content files (TOML or JSON)

use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

use crate::constants;
use crate::descriptor::SectionDescriptor;

/// Errors from parsing descriptor content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported content format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Content file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Json,
}

impl ContentFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        ext.parse()
    }
}

impl std::str::FromStr for ContentFormat {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toml" => Ok(ContentFormat::Toml),
            "json" => Ok(ContentFormat::Json),
            other => Err(ContentError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse a descriptor from in-memory content
pub fn parse_descriptor(source: &str, format: ContentFormat) -> Result<SectionDescriptor, ContentError> {
    let descriptor: SectionDescriptor = match format {
        ContentFormat::Toml => toml::from_str(source)?,
        ContentFormat::Json => serde_json::from_str(source)?,
    };

    let button_count = descriptor.buttons.as_ref().map(Vec::len);
    if let Some(count) = button_count.filter(|&n| n > 0 && n < constants::MIN_SUPPLIED_BUTTONS) {
        tracing::warn!(count, "Supplied hero buttons will be replaced by the default pair");
    }
    tracing::debug!(
        ?format,
        name = descriptor.name.as_deref().unwrap_or("-"),
        disabled = descriptor.is_disabled(),
        buttons = button_count.unwrap_or(0),
        "Parsed hero descriptor"
    );

    Ok(descriptor)
}

/// Load a descriptor file, picking the format from its extension unless given
pub fn load_descriptor(path: &Path, format: Option<ContentFormat>) -> Result<SectionDescriptor> {
    let format = match format {
        Some(format) => format,
        None => ContentFormat::from_path(path).with_context(|| format!("Cannot tell format of {}", path.display()))?,
    };

    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read content file: {}", path.display()))?;

    parse_descriptor(&content, format).with_context(|| {
        format!(
            "Failed to parse {}. Check for:\n\
             - Invalid syntax (missing quotes, brackets, etc.)\n\
             - Button `type` values other than \"style\" or \"submit\"\n\
             - Buttons missing `title` or `icon`",
            path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ButtonKind;

    const TOML_SECTION: &str = r#"
name = "hero"
title = "Create anything"
background_ref = "/img/hero.webp"

[form]
placeholder = "A fox in the snow"
trust_text = "Used by 1M creators"

[[buttons]]
title = "Anime"
type = "style"
icon = "Palette"

[[buttons]]
title = "Create"
type = "submit"
icon = "Send"
"#;

    #[test]
    fn test_parse_toml() {
        let section = parse_descriptor(TOML_SECTION, ContentFormat::Toml).unwrap();
        assert_eq!(section.name.as_deref(), Some("hero"));
        assert_eq!(section.background_ref.as_deref(), Some("/img/hero.webp"));

        let buttons = section.buttons.unwrap();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].kind, ButtonKind::Style);
        assert_eq!(buttons[1].title, "Create");

        let form = section.form.unwrap();
        assert_eq!(form.trust_text.as_deref(), Some("Used by 1M creators"));
    }

    #[test]
    fn test_parse_json_with_background_alias() {
        let json = r#"{"disabled": false, "background": "/bg.png", "show_announcement": true,
                       "announcement": {"label": "New", "title": "Flux is here", "url": "/flux"}}"#;
        let section = parse_descriptor(json, ContentFormat::Json).unwrap();
        assert_eq!(section.background_ref.as_deref(), Some("/bg.png"));
        assert_eq!(section.show_announcement, Some(true));
        assert_eq!(section.announcement.unwrap().label.as_deref(), Some("New"));
    }

    #[test]
    fn test_empty_content_is_empty_descriptor() {
        let section = parse_descriptor("", ContentFormat::Toml).unwrap();
        assert_eq!(section, SectionDescriptor::default());
    }

    #[test]
    fn test_ill_typed_content_is_error() {
        let result = parse_descriptor(r#"{"title": 42}"#, ContentFormat::Json);
        assert!(matches!(result, Err(ContentError::Json(_))));

        let result = parse_descriptor("disabled = \"yes\"", ContentFormat::Toml);
        assert!(matches!(result, Err(ContentError::Toml(_))));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ContentFormat::from_path(Path::new("hero.toml")).unwrap(), ContentFormat::Toml);
        assert_eq!(ContentFormat::from_path(Path::new("content/HERO.JSON")).unwrap(), ContentFormat::Json);
        assert!(matches!(
            ContentFormat::from_path(Path::new("hero.yaml")),
            Err(ContentError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let err = load_descriptor(Path::new("does/not/exist.toml"), None).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
