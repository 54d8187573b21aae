use serde::{Deserialize, Serialize};
use std::fmt;

/// A labeled link shown in the site navigation. Entries without an `href` are kept in the
/// config but never rendered as links.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NavItem {
    pub title: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteLinks {
    pub qq_group: String,
    pub bilibili: String,
}

/// Site metadata and navigation, read from `assets/site.json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub main_nav: Vec<NavItem>,
    pub links: SiteLinks,
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    MissingName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid site config: {}", e),
            ConfigError::MissingName => write!(f, "site config has an empty name"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::MissingName => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl SiteConfig {
    /// Load the config bundled into the binary.
    pub fn load() -> Result<Self, ConfigError> {
        let site_json = include_str!("../assets/site.json");
        Self::from_json(site_json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        if config.name.trim().is_empty() {
            return Err(ConfigError::MissingName);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_loads() {
        let config = SiteConfig::load().unwrap();
        assert!(!config.name.is_empty());
        assert!(config.links.bilibili.starts_with("https://"));
        assert!(config
            .main_nav
            .iter()
            .any(|item| item.href.as_deref() == Some("/download")));
    }

    #[test]
    fn missing_href_defaults_to_none() {
        let config = SiteConfig::from_json(
            r#"{
                "name": "Site",
                "main_nav": [{ "title": "Soon" }],
                "links": { "qq_group": "https://qq.example", "bilibili": "https://b.example" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.main_nav[0].href, None);
        assert_eq!(config.description, "");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = SiteConfig::from_json(
            r#"{ "name": "  ", "links": { "qq_group": "a", "bilibili": "b" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingName));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid site config"));
    }
}
