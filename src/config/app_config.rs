use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SiteAliasError};
use crate::core::services::registry::DuplicatePolicy;

/// Current format version supported by this build of sitealias.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Directory under the home directory holding user-wide alias files.
pub const USER_ALIAS_DIR: &str = ".sitealias/aliases";

/// Top-level configuration read from `.sitealias/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sitealias: SiteAliasSection,
}

impl AppConfig {
    /// Load the configuration from `<config_dir>/config.toml`.
    ///
    /// A missing file is not an error: defaults apply, so aliases can be
    /// used in a directory that was never initialized.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| SiteAliasError::InvalidConfig {
            detail: format!("Failed to parse config.toml: {e}"),
        })?;

        // Check format version compatibility
        if config.sitealias.format_version > CURRENT_FORMAT_VERSION {
            return Err(SiteAliasError::FormatVersionTooNew {
                project_version: config.sitealias.format_version,
                supported_version: CURRENT_FORMAT_VERSION,
            });
        }

        for path in &config.sitealias.search_paths {
            if path.trim().is_empty() {
                return Err(SiteAliasError::InvalidConfig {
                    detail: "search_paths contains an empty entry".into(),
                });
            }
        }

        Ok(config)
    }

    /// Directories to scan for alias files, in load order.
    ///
    /// Relative search paths are resolved against `config_dir`. The user
    /// directory comes last when enabled and a home directory is known.
    pub fn search_dirs(&self, config_dir: &Path) -> Vec<PathBuf> {
        let mut search: Vec<PathBuf> = self
            .sitealias
            .search_paths
            .iter()
            .map(|p| {
                let path = Path::new(p);
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    config_dir.join(path)
                }
            })
            .collect();

        if self.sitealias.include_user_dir {
            if let Some(home) = dirs::home_dir() {
                search.push(home.join(USER_ALIAS_DIR));
            }
        }

        search
    }
}

/// The `[sitealias]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteAliasSection {
    #[serde(default = "default_version")]
    pub version: String,
    /// Format version for backward compatibility. Defaults to 1 if missing.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<String>,
    #[serde(default = "default_include_user_dir")]
    pub include_user_dir: bool,
}

impl Default for SiteAliasSection {
    fn default() -> Self {
        Self {
            version: default_version(),
            format_version: default_format_version(),
            duplicates: DuplicatePolicy::default(),
            search_paths: default_search_paths(),
            include_user_dir: default_include_user_dir(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_format_version() -> u32 {
    1
}

fn default_search_paths() -> Vec<String> {
    vec!["aliases".to_string()]
}

fn default_include_user_dir() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), content).unwrap();
        dir
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();

        assert_eq!(config.sitealias.duplicates, DuplicatePolicy::Reject);
        assert_eq!(config.sitealias.search_paths, vec!["aliases"]);
        assert!(config.sitealias.include_user_dir);
    }

    #[test]
    fn parses_policy_and_paths() {
        let dir = write_config(
            "[sitealias]\nversion = \"0.1.0\"\nduplicates = \"last-wins\"\n\
             search_paths = [\"aliases\", \"/etc/sitealias\"]\ninclude_user_dir = false\n",
        );
        let config = AppConfig::load(dir.path()).unwrap();

        assert_eq!(config.sitealias.duplicates, DuplicatePolicy::LastWins);
        assert_eq!(
            config.search_dirs(dir.path()),
            vec![dir.path().join("aliases"), PathBuf::from("/etc/sitealias")]
        );
    }

    #[test]
    fn user_dir_is_appended_last() {
        let dir = write_config("[sitealias]\nsearch_paths = [\"local\"]\n");
        let config = AppConfig::load(dir.path()).unwrap();
        let search = config.search_dirs(dir.path());

        assert_eq!(search[0], dir.path().join("local"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(search.last(), Some(&home.join(USER_ALIAS_DIR)));
        }
    }

    #[test]
    fn unknown_policy_is_invalid() {
        let dir = write_config("[sitealias]\nduplicates = \"merge\"\n");

        assert!(matches!(
            AppConfig::load(dir.path()),
            Err(SiteAliasError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn newer_format_version_is_rejected() {
        let dir = write_config("[sitealias]\nformat_version = 99\n");

        assert!(matches!(
            AppConfig::load(dir.path()),
            Err(SiteAliasError::FormatVersionTooNew {
                project_version: 99,
                ..
            })
        ));
    }

    #[test]
    fn empty_search_path_is_invalid() {
        let dir = write_config("[sitealias]\nsearch_paths = [\"\"]\n");

        assert!(AppConfig::load(dir.path()).is_err());
    }
}
