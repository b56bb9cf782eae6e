use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::errors::Result;
use crate::core::models::alias_source::{
    AliasSource, DiscoveredSource, UnreadableSource, is_alias_file_name,
};
use crate::core::traits::source_provider::SourceProvider;

/// Discovers alias files in an ordered list of search directories.
///
/// Each existing directory contributes its `*.aliases.toml` files (and a
/// bare `aliases.toml`), sorted by file name. Directories that do not
/// exist are skipped, and a directory listed twice (after resolving
/// symlinks and `..`) is only read once. Discovery is not recursive.
#[derive(Debug, Clone)]
pub struct DirSourceProvider {
    dirs: Vec<PathBuf>,
}

impl DirSourceProvider {
    /// Create a provider that searches the given directories in order.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// List alias files directly inside `dir`, sorted by file name.
    fn alias_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_alias_file_name);
            if matches {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

impl SourceProvider for DirSourceProvider {
    fn sources(&self) -> Result<Vec<DiscoveredSource>> {
        let mut sources = Vec::new();
        let mut seen = HashSet::new();
        for dir in &self.dirs {
            if !dir.is_dir() {
                continue;
            }
            if !seen.insert(std::fs::canonicalize(dir)?) {
                continue;
            }
            for path in Self::alias_files(dir)? {
                let discovered = AliasSource::from_path(&path).map_err(|error| UnreadableSource {
                    origin: path.display().to_string(),
                    error,
                });
                sources.push(discovered);
            }
        }
        Ok(sources)
    }
}
