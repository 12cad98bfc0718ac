use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// The site-wide configuration shared by all widgets.
///
/// The paths are site-relative segments, not URLs. `blog_path` is part of
/// the shared shape even though only the tag widgets consume `tags_path`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: Option<String>,
    pub base_path: String,
    pub blog_path: String,
    pub tags_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: None,
            base_path: "/".to_string(),
            blog_path: "blog".to_string(),
            tags_path: "tags".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config in {filepath:?}: {source}")]
    Toml {
        filepath: PathBuf,
        source: toml::de::Error,
    },
}

impl SiteConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        Self::from_toml(&contents).map_err(|source| LoadConfigError::Toml {
            filepath: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml("").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.base_path, "/");
        assert_eq!(config.blog_path, "blog");
        assert_eq!(config.tags_path, "tags");
    }

    #[test]
    fn test_partial_config_keeps_remaining_defaults() {
        let text = indoc! {r#"
            title = "A Cool Blog"
            tags_path = "topics"
        "#};

        let config = SiteConfig::from_toml(text).unwrap();

        assert_eq!(config.title.as_deref(), Some("A Cool Blog"));
        assert_eq!(config.tags_path, "topics");
        assert_eq!(config.base_path, "/");
        assert_eq!(config.blog_path, "blog");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(SiteConfig::from_toml("tags_path = 7").is_err());
    }
}
