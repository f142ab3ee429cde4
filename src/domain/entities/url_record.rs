//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short id and its original URL.
///
/// `original_url` is the canonical form of the submitted URL and is unique
/// across all records; `short_id` is a base62 string derived from a sequence
/// value and is immutable once assigned.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    /// Visit counter, reserved for future use. Defaults to 0 and is never
    /// incremented by any current code path.
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new URL record.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_id: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord {
            id: 1,
            short_id: "b".to_string(),
            original_url: "https://example.com".to_string(),
            clicks: 0,
            created_at: now,
        };

        assert_eq!(record.id, 1);
        assert_eq!(record.short_id, "b");
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.clicks, 0);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_new_url_record_creation() {
        let new_record = NewUrlRecord {
            short_id: "1c".to_string(),
            original_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_record.short_id, "1c");
        assert_eq!(new_record.original_url, "https://rust-lang.org");
    }
}
