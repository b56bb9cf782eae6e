use crate::adapters::parsers::toml_parser::TomlAliasParser;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::alias_record::AliasRecord;
use crate::core::models::alias_ref::AliasRef;
use crate::core::traits::parser::AliasParser;

use super::registry_helpers;

/// Execute the `sitealias export [aliases...]` command.
///
/// Serializes the selected aliases (all by default) as one group-form
/// alias file, to stdout or to `--output`.
pub fn execute(aliases: &[String], output_path: Option<&str>) -> Result<()> {
    let registry = registry_helpers::load_registry()?;

    let records: Vec<AliasRecord> = if aliases.is_empty() {
        registry.list().map(|(_, r)| r.clone()).collect()
    } else {
        aliases
            .iter()
            .map(|a| {
                let alias_ref = AliasRef::parse(a)?;
                registry.lookup(alias_ref.name()).cloned()
            })
            .collect::<Result<_>>()?
    };

    let parser = TomlAliasParser;
    let content = parser.serialize(&records)?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &content)?;
            output::success(&format!("Exported {} alias(es) to {path}", records.len()));
        }
        None => print!("{content}"),
    }

    Ok(())
}
