/// A single site alias: where a deployment lives on disk and where it is served.
///
/// Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    name: String,
    root: String,
    uri: String,
}

impl AliasRecord {
    pub fn new(name: impl Into<String>, root: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            uri: uri.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filesystem root of the site.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Base URI (scheme + host [+ port]).
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// A record together with the origin of the source that declared it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub record: AliasRecord,
    pub origin: String,
}

/// Describe what is structurally wrong with an alias name, if anything.
pub fn name_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("alias name is empty")
    } else if name.starts_with('@') {
        Some("alias name must not start with '@'")
    } else if name.chars().any(char::is_whitespace) {
        Some("alias name must not contain whitespace")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_declared_values() {
        let record = AliasRecord::new("mysite", "/var/www/drupal_root", "http://mysite.dev");
        assert_eq!(record.name(), "mysite");
        assert_eq!(record.root(), "/var/www/drupal_root");
        assert_eq!(record.uri(), "http://mysite.dev");
    }

    #[test]
    fn name_rules() {
        assert_eq!(name_problem("mysite"), None);
        assert_eq!(name_problem("client.prod"), None);
        assert!(name_problem("").is_some());
        assert!(name_problem("@mysite").is_some());
        assert!(name_problem("my site").is_some());
    }
}
