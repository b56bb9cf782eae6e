use std::path::PathBuf;

/// All domain errors for sitealias.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum SiteAliasError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Malformed alias source {source_name}: {detail}\n\n  \
         Expected format:\n    \
         [aliases.mysite]\n    \
         root = \"/var/www/drupal_root\"\n    \
         uri = \"http://mysite.dev\""
    )]
    MalformedSource { source_name: String, detail: String },

    #[error(
        "Alias '@{name}' is declared twice\n\n  \
         First:  {first}\n  \
         Second: {second}\n\n  \
         Solutions:\n    \
         → Rename or remove one of the declarations\n    \
         → Or choose a policy in .sitealias/config.toml:\n      \
           [sitealias]\n      \
           duplicates = \"first-wins\"  # or \"last-wins\""
    )]
    DuplicateAlias {
        name: String,
        first: String,
        second: String,
    },

    #[error(
        "Alias '@{name}' not found\n\n  \
         Available aliases: {available}\n  \
         Run 'sitealias list' to see where aliases are loaded from."
    )]
    AliasNotFound { name: String, available: String },

    #[error("Invalid alias reference '{input}': expected @name")]
    InvalidAliasRef { input: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "This project uses format version {project_version}, but your sitealias \
         only supports up to version {supported_version}.\n\n  \
         Solutions:\n    \
         → Install latest: cargo install sitealias --force"
    )]
    FormatVersionTooNew {
        project_version: u32,
        supported_version: u32,
    },

    #[error(
        "{failures} alias source(s) failed to load\n\n  \
         Fix the files listed above, then run 'sitealias check' again."
    )]
    CheckFailed { failures: usize },

    #[error("Could not serialize aliases: {detail}")]
    Serialize { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SiteAliasError>;
