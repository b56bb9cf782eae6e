use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SiteAliasError};
use crate::core::models::alias_record::{AliasRecord, name_problem};
use crate::core::models::alias_source::{ALIAS_FILE_SUFFIX, AliasSource, GROUP_FILE_NAME};
use crate::core::traits::parser::AliasParser;

/// Parses and serializes `*.aliases.toml` files.
///
/// Two forms are accepted:
/// - Group form: any number of `[aliases.<name>]` tables with `root` and `uri`
/// - Single form: top-level `root` and `uri`, with the alias name taken
///   from the file name (`mysite.aliases.toml` -> `@mysite`)
///
/// Serialization always emits the group form.
pub struct TomlAliasParser;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFile {
    root: Option<String>,
    uri: Option<String>,
    aliases: Option<IndexMap<String, RawAlias>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAlias {
    root: Option<String>,
    uri: Option<String>,
}

#[derive(Serialize)]
struct OutFile<'a> {
    aliases: IndexMap<&'a str, OutAlias<'a>>,
}

#[derive(Serialize)]
struct OutAlias<'a> {
    root: &'a str,
    uri: &'a str,
}

impl TomlAliasParser {
    /// Turn one raw declaration into a record, checking required fields.
    fn build_record(
        source: &AliasSource,
        name: &str,
        root: Option<String>,
        uri: Option<String>,
    ) -> Result<AliasRecord> {
        if let Some(problem) = name_problem(name) {
            return Err(malformed(source, format!("{problem}: '{name}'")));
        }

        let root = required(source, name, "root", root)?;
        let uri = required(source, name, "uri", uri)?;

        Ok(AliasRecord::new(name, root, uri))
    }
}

/// Require a non-blank string field.
fn required(
    source: &AliasSource,
    name: &str,
    field: &str,
    value: Option<String>,
) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(malformed(source, format!("alias '{name}': '{field}' is empty"))),
        None => Err(malformed(source, format!("alias '{name}': missing '{field}'"))),
    }
}

fn malformed(source: &AliasSource, detail: String) -> SiteAliasError {
    SiteAliasError::MalformedSource {
        source_name: source.origin.clone(),
        detail,
    }
}

impl AliasParser for TomlAliasParser {
    fn parse(&self, source: &AliasSource) -> Result<Vec<AliasRecord>> {
        let raw: RawFile = toml::from_str(&source.content)
            .map_err(|e| malformed(source, e.to_string().trim_end().to_string()))?;

        let has_single = raw.root.is_some() || raw.uri.is_some();

        match (has_single, raw.aliases) {
            (true, Some(_)) => Err(malformed(
                source,
                "top-level root/uri cannot be mixed with an [aliases] table".into(),
            )),
            (true, None) => {
                let Some(name) = source.implied_name() else {
                    return Err(malformed(
                        source,
                        format!(
                            "top-level root/uri needs a file named <name>{ALIAS_FILE_SUFFIX} \
                             (not {GROUP_FILE_NAME}); use [aliases.<name>] instead"
                        ),
                    ));
                };
                let record = Self::build_record(source, name, raw.root, raw.uri)?;
                Ok(vec![record])
            }
            (false, Some(aliases)) => aliases
                .into_iter()
                .map(|(name, alias)| Self::build_record(source, &name, alias.root, alias.uri))
                .collect(),
            (false, None) => Ok(Vec::new()),
        }
    }

    fn serialize(&self, records: &[AliasRecord]) -> Result<String> {
        let out = OutFile {
            aliases: records
                .iter()
                .map(|r| {
                    (
                        r.name(),
                        OutAlias {
                            root: r.root(),
                            uri: r.uri(),
                        },
                    )
                })
                .collect(),
        };

        toml::to_string(&out).map_err(|e| SiteAliasError::Serialize {
            detail: e.to_string(),
        })
    }
}
