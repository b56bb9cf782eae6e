use colored::Colorize;

use crate::cli::{Field, output};
use crate::core::errors::Result;
use crate::core::models::alias_ref::AliasRef;

use super::registry_helpers;

/// Execute the `sitealias show <@alias>` command.
///
/// With `--field`, prints the bare value so it can be used as
/// `cd "$(sitealias show @mysite --field root)"`.
pub fn execute(alias: &str, field: Option<Field>) -> Result<()> {
    let alias_ref = AliasRef::parse(alias)?;
    let registry = registry_helpers::load_registry()?;
    let record = registry.lookup(alias_ref.name())?;

    match field {
        Some(Field::Root) => println!("{}", record.root()),
        Some(Field::Uri) => println!("{}", record.uri()),
        None => {
            output::header(&alias_ref.to_string());
            println!("  {}  {}", "root".bold(), record.root());
            println!("  {}   {}", "uri".bold(), record.uri());
            if let Some(entry) = registry
                .entries()
                .find(|e| e.record.name() == alias_ref.name())
            {
                output::detail(&format!("from {}", entry.origin));
            }
        }
    }

    Ok(())
}
