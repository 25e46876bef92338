//! Mapping entity: one alias pointing at one original URL.

use chrono::{DateTime, Utc};

/// URL schemes accepted for `original_url`.
pub const ALLOWED_SCHEMES: &[&str] = &["http://", "https://"];

/// A stored alias-to-URL mapping.
///
/// Mappings are immutable once created; there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub alias: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    pub fn new(alias: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            alias,
            original_url,
            created_at,
        }
    }
}

/// Returns true if `url` starts with one of [`ALLOWED_SCHEMES`].
///
/// The check is a plain, case-sensitive prefix match.
pub fn has_allowed_scheme(url: &str) -> bool {
    ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = Mapping::new(
            "cs391".to_string(),
            "https://example.com/a/b".to_string(),
            now,
        );

        assert_eq!(mapping.alias, "cs391");
        assert_eq!(mapping.original_url, "https://example.com/a/b");
        assert_eq!(mapping.created_at, now);
    }

    #[test]
    fn test_allowed_schemes() {
        assert!(has_allowed_scheme("http://example.com"));
        assert!(has_allowed_scheme("https://example.com/a?b=c"));

        assert!(!has_allowed_scheme("ftp://x.com"));
        assert!(!has_allowed_scheme("example.com"));
        assert!(!has_allowed_scheme("HTTPS://example.com"));
        assert!(!has_allowed_scheme(" https://example.com"));
    }
}
