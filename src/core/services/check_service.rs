use crate::core::errors::SiteAliasError;
use crate::core::models::alias_source::{AliasSource, DiscoveredSource};
use crate::core::services::registry::{DuplicatePolicy, RegistryBuilder, Shadowed};
use crate::core::traits::parser::AliasParser;

/// Outcome of loading one source during a check.
#[derive(Debug)]
pub enum SourceStatus {
    Loaded {
        declared: usize,
        shadowed: Vec<Shadowed>,
    },
    Failed(SiteAliasError),
}

/// Check result for one source.
#[derive(Debug)]
pub struct SourceReport {
    pub origin: String,
    pub status: SourceStatus,
}

/// Result of checking every discovered alias source.
#[derive(Debug)]
pub struct CheckReport {
    pub sources: Vec<SourceReport>,
    /// Aliases that would end up in the registry.
    pub total_aliases: usize,
    pub policy: DuplicatePolicy,
}

impl CheckReport {
    /// Returns true if every source loaded.
    pub fn is_ok(&self) -> bool {
        self.failure_count() == 0
    }

    /// Number of sources that failed to load.
    pub fn failure_count(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.status, SourceStatus::Failed(_)))
            .count()
    }

    /// Number of declarations a non-rejecting policy dropped or replaced.
    pub fn shadowed_count(&self) -> usize {
        self.sources
            .iter()
            .map(|s| match &s.status {
                SourceStatus::Loaded { shadowed, .. } => shadowed.len(),
                SourceStatus::Failed(_) => 0,
            })
            .sum()
    }
}

/// Validates alias sources without stopping at the first problem.
pub struct CheckService;

impl CheckService {
    /// Load every source in order into one builder and record what happened.
    ///
    /// A failing source is skipped, exactly as the atomic load leaves it,
    /// so later sources are checked against the aliases that would really
    /// be loaded. Files that could not be read are reported as failures
    /// in their place.
    pub fn check<P: AliasParser>(
        &self,
        parser: P,
        policy: DuplicatePolicy,
        sources: Vec<DiscoveredSource>,
    ) -> CheckReport {
        let mut builder = RegistryBuilder::new(parser, policy);

        let reports = sources
            .into_iter()
            .map(|discovered| match discovered {
                Ok(source) => Self::load_one(&mut builder, &source),
                Err(unreadable) => SourceReport {
                    origin: unreadable.origin,
                    status: SourceStatus::Failed(unreadable.error),
                },
            })
            .collect();

        CheckReport {
            sources: reports,
            total_aliases: builder.len(),
            policy: builder.policy(),
        }
    }

    fn load_one<P: AliasParser>(
        builder: &mut RegistryBuilder<P>,
        source: &AliasSource,
    ) -> SourceReport {
        let status = match builder.load(source) {
            Ok(outcome) => SourceStatus::Loaded {
                declared: outcome.declared,
                shadowed: outcome.shadowed,
            },
            Err(e) => SourceStatus::Failed(e),
        };
        SourceReport {
            origin: source.origin.clone(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::parsers::toml_parser::TomlAliasParser;
    use crate::core::models::alias_source::UnreadableSource;

    fn source(name: &str, content: &str) -> DiscoveredSource {
        Ok(AliasSource::from_text(Some(name), content))
    }

    fn valid_sources() -> Vec<DiscoveredSource> {
        vec![
            source(
                "mysite.aliases.toml",
                "root = \"/var/www/drupal_root\"\nuri = \"http://mysite.dev\"\n",
            ),
            source(
                "clients.aliases.toml",
                "[aliases.acme]\nroot = \"/srv/acme\"\nuri = \"https://acme.test\"\n",
            ),
        ]
    }

    #[test]
    fn all_valid_sources_pass() {
        let report = CheckService.check(TomlAliasParser, DuplicatePolicy::Reject, valid_sources());

        assert!(report.is_ok());
        assert_eq!(report.total_aliases, 2);
        assert_eq!(report.sources.len(), 2);
        assert_eq!(report.shadowed_count(), 0);
    }

    #[test]
    fn reports_every_failure() {
        let mut sources = valid_sources();
        sources.insert(0, source("broken.aliases.toml", "root = \"/only-root\"\n"));
        sources.push(source("typo.aliases.toml", "[aliases.x]\nroot = \"/x\"\nurl = \"http://x\"\n"));

        let report = CheckService.check(TomlAliasParser, DuplicatePolicy::Reject, sources);

        assert!(!report.is_ok());
        assert_eq!(report.failure_count(), 2);
        assert_eq!(report.total_aliases, 2);
        assert!(matches!(
            report.sources[0].status,
            SourceStatus::Failed(SiteAliasError::MalformedSource { .. })
        ));
    }

    #[test]
    fn duplicate_is_failure_under_reject() {
        let mut sources = valid_sources();
        sources.push(source(
            "more.aliases.toml",
            "[aliases.mysite]\nroot = \"/elsewhere\"\nuri = \"http://other\"\n",
        ));

        let report = CheckService.check(TomlAliasParser, DuplicatePolicy::Reject, sources);

        assert_eq!(report.failure_count(), 1);
        assert!(matches!(
            report.sources[2].status,
            SourceStatus::Failed(SiteAliasError::DuplicateAlias { .. })
        ));
    }

    #[test]
    fn duplicate_is_shadowed_under_first_wins() {
        let mut sources = valid_sources();
        sources.push(source(
            "more.aliases.toml",
            "[aliases.mysite]\nroot = \"/elsewhere\"\nuri = \"http://other\"\n",
        ));

        let report = CheckService.check(TomlAliasParser, DuplicatePolicy::FirstWins, sources);

        assert!(report.is_ok());
        assert_eq!(report.shadowed_count(), 1);
        assert_eq!(report.total_aliases, 2);
        assert_eq!(report.policy, DuplicatePolicy::FirstWins);
    }

    #[test]
    fn no_sources_is_ok() {
        let report = CheckService.check(TomlAliasParser, DuplicatePolicy::Reject, Vec::new());

        assert!(report.is_ok());
        assert_eq!(report.total_aliases, 0);
    }

    #[test]
    fn unreadable_file_is_reported_and_check_continues() {
        let mut sources = valid_sources();
        sources.insert(
            1,
            Err(UnreadableSource {
                origin: "/aliases/bad.aliases.toml".into(),
                error: SiteAliasError::MalformedSource {
                    source_name: "/aliases/bad.aliases.toml".into(),
                    detail: "cannot read file: stream did not contain valid UTF-8".into(),
                },
            }),
        );
        sources.push(source("also.aliases.toml", "root = \"/a\"\n"));

        let report = CheckService.check(TomlAliasParser, DuplicatePolicy::Reject, sources);

        assert_eq!(report.sources.len(), 4);
        assert_eq!(report.failure_count(), 2);
        assert_eq!(report.total_aliases, 2);
        assert_eq!(report.sources[1].origin, "/aliases/bad.aliases.toml");
        assert!(matches!(report.sources[1].status, SourceStatus::Failed(_)));
        assert!(matches!(report.sources[3].status, SourceStatus::Failed(_)));
    }
}
