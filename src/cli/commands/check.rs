use crate::adapters::parsers::toml_parser::TomlAliasParser;
use crate::cli::output;
use crate::core::errors::{Result, SiteAliasError};
use crate::core::services::check_service::{CheckService, SourceStatus};
use crate::core::services::registry::DuplicatePolicy;

use super::registry_helpers;

/// Execute the `sitealias check` command.
///
/// Loads every alias file and reports all malformed files and
/// duplicate aliases, instead of stopping at the first one.
pub fn execute() -> Result<()> {
    let (config, sources) = registry_helpers::discover_sources()?;

    output::header("🔍 sitealias check");

    if sources.is_empty() {
        output::warning("No alias files found");
        return Ok(());
    }

    let svc = CheckService;
    let report = svc.check(TomlAliasParser, config.sitealias.duplicates, sources);

    for source in &report.sources {
        match &source.status {
            SourceStatus::Loaded { declared, shadowed } => {
                output::success(&format!("{}: {declared} alias(es)", source.origin));
                for s in shadowed {
                    let verb = match report.policy {
                        DuplicatePolicy::FirstWins => "ignored",
                        _ => "replaced",
                    };
                    output::warning(&format!(
                        "@{} declared again in {} ({verb}, using {})",
                        s.name,
                        source.origin,
                        s.kept
                    ));
                }
            }
            SourceStatus::Failed(e) => {
                output::error(&format!("{}: {e}", source.origin));
            }
        }
    }

    output::detail(&format!(
        "Config version {}, duplicate policy: {}",
        config.sitealias.version, report.policy
    ));

    if !report.is_ok() {
        return Err(SiteAliasError::CheckFailed {
            failures: report.failure_count(),
        });
    }

    if !output::is_quiet() {
        println!();
    }
    let shadowed = report.shadowed_count();
    if shadowed > 0 {
        output::success(&format!(
            "{} file(s), {} alias(es), {shadowed} shadowed — all good",
            report.sources.len(),
            report.total_aliases
        ));
    } else {
        output::success(&format!(
            "{} file(s), {} alias(es) — all good",
            report.sources.len(),
            report.total_aliases
        ));
    }

    Ok(())
}
