use crate::case::renderer::CaseStyle;
use crate::case::tokenizer::DelimiterPolicy;
use crate::case::validator::ValidationPolicy;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub style: CaseStyle,
    pub policy: ValidationPolicy,
    pub delimiters: DelimiterPolicy,
}

/// A config file as written on disk; absent keys leave earlier layers alone
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    style: Option<CaseStyle>,
    policy: Option<ValidationPolicy>,
    delimiters: Option<DelimiterPolicy>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub style: Option<CaseStyle>,
    pub lenient: bool,
    pub delimiters: Option<DelimiterPolicy>,
}

impl Config {
    /// Load configuration with priority: CLI args > explicit or local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        // An explicit --config replaces the local file
        let local_path = overrides
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));
        if overrides.config_file.is_some() || local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        if let Some(style) = overrides.style {
            config.style = style;
        }
        if overrides.lenient {
            config.policy = ValidationPolicy::Lenient;
        }
        if let Some(delimiters) = overrides.delimiters {
            config.delimiters = delimiters;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(style) = other.style {
            self.style = style;
        }
        if let Some(policy) = other.policy {
            self.policy = policy;
        }
        if let Some(delimiters) = other.delimiters {
            self.delimiters = delimiters;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.style, CaseStyle::Camel);
        assert_eq!(config.policy, ValidationPolicy::Strict);
        assert_eq!(config.delimiters, DelimiterPolicy::Standard);
    }

    #[test]
    fn test_merge_keeps_unset_keys() {
        let base = Config {
            policy: ValidationPolicy::Lenient,
            ..Default::default()
        };
        let file: ConfigFile = toml::from_str(r#"style = "kebab""#).unwrap();

        let merged = base.merge(file);
        assert_eq!(merged.style, CaseStyle::Kebab);
        assert_eq!(merged.policy, ValidationPolicy::Lenient);
    }

    #[test]
    fn test_parse_all_keys() {
        let file: ConfigFile = toml::from_str(
            r#"
            style = "screaming-snake"
            policy = "lenient"
            delimiters = "non-alphanumeric"
            "#,
        )
        .unwrap();

        let config = Config::default().merge(file);
        assert_eq!(config.style, CaseStyle::ScreamingSnake);
        assert_eq!(config.policy, ValidationPolicy::Lenient);
        assert_eq!(config.delimiters, DelimiterPolicy::NonAlphanumeric);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(toml::from_str::<ConfigFile>(r#"colour = "red""#).is_err());
    }

    #[test]
    fn test_explicit_file_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recase.toml");
        fs::write(&path, "style = \"snake\"\npolicy = \"lenient\"\n").unwrap();

        let config = Config::load(Overrides {
            config_file: Some(path),
            delimiters: Some(DelimiterPolicy::NonAlphanumeric),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.style, CaseStyle::Snake);
        assert_eq!(config.policy, ValidationPolicy::Lenient);
        assert_eq!(config.delimiters, DelimiterPolicy::NonAlphanumeric);

        let config = Config::load(Overrides {
            config_file: Some(dir.path().join("recase.toml")),
            style: Some(CaseStyle::Pascal),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.style, CaseStyle::Pascal);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Overrides {
            config_file: Some(dir.path().join("absent.toml")),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
