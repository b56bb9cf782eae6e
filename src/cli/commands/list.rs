use colored::Colorize;
use serde::Serialize;

use crate::cli::output;
use crate::core::errors::{Result, SiteAliasError};

use super::registry_helpers;

/// One alias as printed by `sitealias list --json`.
#[derive(Debug, Serialize)]
struct ListItem<'a> {
    name: &'a str,
    root: &'a str,
    uri: &'a str,
    source: &'a str,
}

/// Execute the `sitealias list` command.
///
/// Prints every alias in load order, or a JSON array with `--json`.
pub fn execute(json: bool) -> Result<()> {
    let registry = registry_helpers::load_registry()?;

    if json {
        let items: Vec<ListItem> = registry
            .entries()
            .map(|e| ListItem {
                name: e.record.name(),
                root: e.record.root(),
                uri: e.record.uri(),
                source: &e.origin,
            })
            .collect();
        let text = serde_json::to_string_pretty(&items).map_err(|e| SiteAliasError::Serialize {
            detail: e.to_string(),
        })?;
        println!("{text}");
        return Ok(());
    }

    output::header(&format!("Aliases ({})", registry.len()));

    if registry.is_empty() {
        output::warning("No aliases found");
        if !output::is_quiet() {
            println!("  Run 'sitealias init' or add a *.aliases.toml file.");
        }
        return Ok(());
    }

    let width = registry
        .list()
        .map(|(name, _)| name.chars().count() + 1)
        .max()
        .unwrap_or(0);

    for entry in registry.entries() {
        let label = format!("@{:<w$}", entry.record.name(), w = width - 1);
        println!(
            "  {}  {}  {}",
            label.cyan(),
            entry.record.root(),
            entry.record.uri()
        );
        output::detail(&format!("from {}", entry.origin));
    }

    Ok(())
}
