use crate::cli::output;
use crate::config::app_config::CURRENT_FORMAT_VERSION;
use crate::core::errors::{Result, SiteAliasError};

/// Execute the `sitealias init` command.
///
/// Creates the config directory with a default `config.toml` and an
/// example alias file.
pub fn execute() -> Result<()> {
    let config_dir = crate::cli::context::config_dir();

    if config_dir.exists() {
        return Err(SiteAliasError::InvalidConfig {
            detail: format!(
                "sitealias is already initialized in this project ({} exists)",
                config_dir.display()
            ),
        });
    }

    output::header("sitealias — Initializing project");

    let aliases_dir = config_dir.join("aliases");
    std::fs::create_dir_all(&aliases_dir)?;
    output::success(&format!("Created {}", aliases_dir.display()));

    let config_content = format!(
        r#"[sitealias]
version = "{}"
format_version = {CURRENT_FORMAT_VERSION}
# What to do when two files declare the same alias: reject | first-wins | last-wins
duplicates = "reject"
# Directories scanned for *.aliases.toml, relative to this directory
search_paths = ["aliases"]
# Also scan ~/.sitealias/aliases
include_user_dir = true
"#,
        env!("CARGO_PKG_VERSION")
    );
    std::fs::write(config_dir.join("config.toml"), config_content)?;
    output::success("Generated config.toml with defaults");

    let example = r#"# Alias files named after the alias they declare may set root and uri
# at the top level: this file defines @mysite.
#
# Files holding several aliases use one table per alias instead:
#
#   [aliases.staging]
#   root = "/var/www/staging"
#   uri = "https://staging.example.com"
root = "/var/www/drupal_root"
uri = "http://mysite.dev"
"#;
    std::fs::write(aliases_dir.join("mysite.aliases.toml"), example)?;
    output::success("Created example alias @mysite");

    if !output::is_quiet() {
        println!("\n  Run 'sitealias list' to see your aliases.");
    }

    Ok(())
}
