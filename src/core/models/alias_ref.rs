use crate::core::errors::{Result, SiteAliasError};
use crate::core::models::alias_record::name_problem;

/// A reference to an alias as typed on the command line (`@mysite`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRef {
    name: String,
}

impl AliasRef {
    /// Parse `@name` or a bare `name`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let name = trimmed.strip_prefix('@').unwrap_or(trimmed);

        if name_problem(name).is_some() {
            return Err(SiteAliasError::InvalidAliasRef {
                input: input.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for AliasRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.name)
    }
}
