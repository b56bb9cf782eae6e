use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::errors::{Result, SiteAliasError};
use crate::core::models::alias_record::{AliasEntry, AliasRecord};
use crate::core::models::alias_source::AliasSource;
use crate::core::traits::parser::AliasParser;

/// What to do when two declarations share an alias name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail the load of the source that introduces the second declaration.
    #[default]
    Reject,
    /// Keep the earlier declaration, ignore later ones.
    FirstWins,
    /// Replace the earlier value; the alias keeps its original position.
    LastWins,
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Reject => "reject",
            Self::FirstWins => "first-wins",
            Self::LastWins => "last-wins",
        };
        f.write_str(label)
    }
}

/// A name collision that a non-rejecting policy resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    pub name: String,
    /// Origin of the declaration that is now in the registry.
    pub kept: String,
    /// Origin of the declaration that lost.
    pub dropped: String,
}

/// Summary of one successful `RegistryBuilder::load`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Aliases the source declared.
    pub declared: usize,
    pub shadowed: Vec<Shadowed>,
}

/// Immutable table of site aliases, keyed by name, in insertion order.
///
/// Built once through `RegistryBuilder` (or `AliasRegistry::load` for a
/// single source) and only read afterwards, so it can be shared across
/// threads without locking.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    entries: IndexMap<String, AliasEntry>,
}

impl AliasRegistry {
    /// Build a registry from a single source, rejecting duplicate names.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn load<P: AliasParser>(parser: P, source: &AliasSource) -> Result<Self> {
        let mut builder = RegistryBuilder::new(parser, DuplicatePolicy::Reject);
        builder.load(source)?;
        Ok(builder.build())
    }

    /// Look up an alias by name.
    ///
    /// # Errors
    ///
    /// `AliasNotFound` if no alias with that name was loaded.
    pub fn lookup(&self, name: &str) -> Result<&AliasRecord> {
        self.get(name).ok_or_else(|| SiteAliasError::AliasNotFound {
            name: name.to_string(),
            available: self.available_names(),
        })
    }

    /// Look up an alias by name, without an error on a miss.
    pub fn get(&self, name: &str) -> Option<&AliasRecord> {
        self.entries.get(name).map(|e| &e.record)
    }

    /// Iterate `(name, record)` pairs in insertion order.
    ///
    /// Each call starts a fresh iteration.
    pub fn list(&self) -> impl Iterator<Item = (&str, &AliasRecord)> + '_ {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), &entry.record))
    }

    /// Iterate records together with the origin that declared them.
    pub fn entries(&self) -> impl Iterator<Item = &AliasEntry> + '_ {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn available_names(&self) -> String {
        if self.entries.is_empty() {
            return "(none)".to_string();
        }
        self.entries
            .keys()
            .map(|n| format!("@{n}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Accumulates sources into a registry under a duplicate policy.
///
/// Each `load` is atomic: when it fails, the builder is left exactly as
/// it was before the call.
pub struct RegistryBuilder<P: AliasParser> {
    parser: P,
    policy: DuplicatePolicy,
    entries: IndexMap<String, AliasEntry>,
}

impl<P: AliasParser> RegistryBuilder<P> {
    pub fn new(parser: P, policy: DuplicatePolicy) -> Self {
        Self {
            parser,
            policy,
            entries: IndexMap::new(),
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Parse one source and add its aliases.
    ///
    /// # Errors
    ///
    /// - `MalformedSource` if the source cannot be parsed or an alias is
    ///   missing a required field.
    /// - `DuplicateAlias` under `DuplicatePolicy::Reject` if any declared
    ///   name is already loaded or declared twice in this source.
    pub fn load(&mut self, source: &AliasSource) -> Result<LoadOutcome> {
        let records = self.parser.parse(source)?;

        // Validate everything before touching `entries`.
        if self.policy == DuplicatePolicy::Reject {
            let mut seen: HashSet<&str> = HashSet::new();
            for record in &records {
                let name = record.name();
                if let Some(existing) = self.entries.get(name) {
                    return Err(SiteAliasError::DuplicateAlias {
                        name: name.to_string(),
                        first: existing.origin.clone(),
                        second: source.origin.clone(),
                    });
                }
                if !seen.insert(name) {
                    return Err(SiteAliasError::DuplicateAlias {
                        name: name.to_string(),
                        first: source.origin.clone(),
                        second: source.origin.clone(),
                    });
                }
            }
        }

        let mut outcome = LoadOutcome {
            declared: records.len(),
            shadowed: Vec::new(),
        };

        for record in records {
            let name = record.name().to_string();
            let entry = AliasEntry {
                record,
                origin: source.origin.clone(),
            };

            let existing = self.entries.get(&name).map(|e| e.origin.clone());
            match (existing, self.policy) {
                (None, _) => {
                    self.entries.insert(name, entry);
                }
                (Some(kept), DuplicatePolicy::FirstWins) => outcome.shadowed.push(Shadowed {
                    name,
                    kept,
                    dropped: entry.origin,
                }),
                // Reject never reaches here with a collision.
                (Some(dropped), DuplicatePolicy::LastWins | DuplicatePolicy::Reject) => {
                    outcome.shadowed.push(Shadowed {
                        name: name.clone(),
                        kept: entry.origin.clone(),
                        dropped,
                    });
                    // IndexMap::insert keeps the existing slot.
                    self.entries.insert(name, entry);
                }
            }
        }

        Ok(outcome)
    }

    /// Number of aliases loaded so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Freeze the loaded aliases into an immutable registry.
    pub fn build(self) -> AliasRegistry {
        AliasRegistry {
            entries: self.entries,
        }
    }
}
