use crate::core::errors::Result;
use crate::core::models::alias_record::AliasRecord;
use crate::core::models::alias_source::AliasSource;

/// Port for parsing and serializing alias sources.
///
/// Only `TomlAliasParser` ships today; the trait keeps the registry
/// independent of the file format.
pub trait AliasParser: Send + Sync {
    /// Parse one source into the aliases it declares, in declaration order.
    ///
    /// Either every declared alias is well-formed and returned, or the
    /// whole source is rejected.
    fn parse(&self, source: &AliasSource) -> Result<Vec<AliasRecord>>;

    /// Serialize records back to the declarative format.
    fn serialize(&self, records: &[AliasRecord]) -> Result<String>;
}
