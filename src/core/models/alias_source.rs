use std::path::Path;

use crate::core::errors::{Result, SiteAliasError};

/// File name suffix that marks an alias source.
pub const ALIAS_FILE_SUFFIX: &str = ".aliases.toml";

/// File name of a pure group file, which has no implied alias name.
pub const GROUP_FILE_NAME: &str = "aliases.toml";

/// One declarative unit contributing zero or more aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasSource {
    /// File name (e.g. `mysite.aliases.toml`), used to derive the alias
    /// name for single-alias files.
    pub identifier: Option<String>,
    /// Human-readable label used in messages, usually the full path.
    pub origin: String,
    pub content: String,
}

impl AliasSource {
    /// Read a source from disk.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if `path` is not a regular file.
    /// - `MalformedSource` naming the path if the file cannot be read or
    ///   is not valid UTF-8.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(SiteAliasError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| SiteAliasError::MalformedSource {
                source_name: path.display().to_string(),
                detail: format!("cannot read file: {e}"),
            })?;
        Ok(Self {
            identifier: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
            origin: path.display().to_string(),
            content,
        })
    }

    /// Build a source from in-memory text.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn from_text(identifier: Option<&str>, content: impl Into<String>) -> Self {
        let identifier = identifier.map(str::to_string);
        let origin = identifier.clone().unwrap_or_else(|| "<inline>".to_string());
        Self {
            identifier,
            origin,
            content: content.into(),
        }
    }

    /// The alias name implied by the identifier: `mysite.aliases.toml` -> `mysite`.
    pub fn implied_name(&self) -> Option<&str> {
        self.identifier
            .as_deref()
            .and_then(|id| id.strip_suffix(ALIAS_FILE_SUFFIX))
            .filter(|stem| !stem.is_empty())
    }
}

/// A discovered alias file that could not be turned into a source.
#[derive(Debug)]
pub struct UnreadableSource {
    pub origin: String,
    pub error: SiteAliasError,
}

/// One discovery result: a readable source, or the file that failed.
pub type DiscoveredSource = std::result::Result<AliasSource, UnreadableSource>;

/// Returns true if the file name looks like an alias source.
pub fn is_alias_file_name(name: &str) -> bool {
    name == GROUP_FILE_NAME
        || name
            .strip_suffix(ALIAS_FILE_SUFFIX)
            .is_some_and(|stem| !stem.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implied_name_strips_suffix() {
        let source = AliasSource::from_text(Some("mysite.aliases.toml"), "");
        assert_eq!(source.implied_name(), Some("mysite"));
    }

    #[test]
    fn implied_name_keeps_inner_dots() {
        let source = AliasSource::from_text(Some("client.prod.aliases.toml"), "");
        assert_eq!(source.implied_name(), Some("client.prod"));
    }

    #[test]
    fn group_file_has_no_implied_name() {
        let source = AliasSource::from_text(Some("aliases.toml"), "");
        assert_eq!(source.implied_name(), None);
    }

    #[test]
    fn inline_source_has_no_implied_name() {
        let source = AliasSource::from_text(None, "");
        assert_eq!(source.implied_name(), None);
        assert_eq!(source.origin, "<inline>");
    }

    #[test]
    fn alias_file_name_matching() {
        assert!(is_alias_file_name("mysite.aliases.toml"));
        assert!(is_alias_file_name("aliases.toml"));
        assert!(!is_alias_file_name(".aliases.toml"));
        assert!(!is_alias_file_name("mysite.toml"));
        assert!(!is_alias_file_name("config.toml"));
    }

    #[test]
    fn from_path_invalid_utf8_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.aliases.toml");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x72]).unwrap();

        match AliasSource::from_path(&path) {
            Err(SiteAliasError::MalformedSource {
                source_name,
                detail,
            }) => {
                assert!(source_name.ends_with("bad.aliases.toml"));
                assert!(detail.contains("cannot read file"));
            }
            other => panic!("expected MalformedSource, got {other:?}"),
        }
    }

    #[test]
    fn from_path_missing_file_fails() {
        let result = AliasSource::from_path(Path::new("/nonexistent/x.aliases.toml"));
        assert!(matches!(result, Err(SiteAliasError::FileNotFound { .. })));
    }
}
