use crate::adapters::parsers::toml_parser::TomlAliasParser;
use crate::adapters::sources::dir_provider::DirSourceProvider;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::alias_source::DiscoveredSource;
use crate::core::services::registry::{AliasRegistry, RegistryBuilder};
use crate::core::traits::source_provider::SourceProvider;

/// Load the config and discover every alias source it points at.
///
/// Files that cannot be read are kept in the list as unreadable entries.
pub fn discover_sources() -> Result<(AppConfig, Vec<DiscoveredSource>)> {
    let config_dir = crate::cli::context::config_dir();
    let config = AppConfig::load(config_dir)?;

    let search_dirs = config.search_dirs(config_dir);
    for dir in &search_dirs {
        let state = if dir.is_dir() { "" } else { " (missing)" };
        output::detail(&format!("Search path: {}{state}", dir.display()));
    }

    let provider = DirSourceProvider::new(search_dirs);
    let sources = provider.sources()?;

    Ok((config, sources))
}

/// Build the alias registry from all discovered sources.
///
/// Stops at the first source that fails to load; `sitealias check`
/// reports every problem instead.
pub fn load_registry() -> Result<AliasRegistry> {
    let (config, sources) = discover_sources()?;
    let mut builder = RegistryBuilder::new(TomlAliasParser, config.sitealias.duplicates);

    for discovered in sources {
        let source = discovered.map_err(|unreadable| unreadable.error)?;
        let outcome = builder.load(&source)?;
        output::detail(&format!(
            "Loaded {} ({} alias(es))",
            source.origin, outcome.declared
        ));
        for shadowed in &outcome.shadowed {
            output::detail(&format!(
                "@{} from {} overrides {}",
                shadowed.name, shadowed.kept, shadowed.dropped
            ));
        }
    }

    Ok(builder.build())
}
