use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque post identifier.
///
/// Fresh ids are UUID v4 strings, but any string read back from storage is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a new random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Post entity - a short title/content note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredPost")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post as read from storage. Older records may lack `updatedAt`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPost {
    id: PostId,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<StoredPost> for Post {
    fn from(stored: StoredPost) -> Self {
        // updated_at never precedes created_at.
        let updated_at = stored
            .updated_at
            .map_or(stored.created_at, |at| at.max(stored.created_at));

        Self {
            id: stored.id,
            title: stored.title,
            content: stored.content,
            created_at: stored.created_at,
            updated_at,
        }
    }
}

impl Post {
    /// Create a new post stamped at `now`.
    pub fn new(id: PostId, title: String, content: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the post was modified after it was created.
    pub fn is_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_post_has_equal_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let post = Post::new(PostId::generate(), "Hello".into(), "World".into(), now);

        assert_eq!(post.created_at, post.updated_at);
        assert!(!post.is_edited());
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(PostId::generate(), PostId::generate());
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let post = Post::new(PostId::new("abc-123"), "t".into(), "c".into(), now);

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["id"], "abc-123");
        assert_eq!(value["createdAt"], "2024-05-01T12:00:00Z");
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_missing_or_early_updated_at_falls_back_to_created_at() {
        let missing: Post = serde_json::from_str(
            r#"{"id": "a", "title": "t", "content": "c", "createdAt": "2024-03-10T08:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(missing.updated_at, missing.created_at);

        let early: Post = serde_json::from_str(
            r#"{"id": "b", "title": "t", "content": "c",
                "createdAt": "2024-03-10T08:00:00Z", "updatedAt": "2024-03-09T08:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(early.updated_at, early.created_at);
    }

    #[test]
    fn test_reads_records_written_by_other_clients() {
        let raw = r#"{
            "id": "lx3k2a-9f8e7d",
            "title": "Old",
            "content": "From the browser",
            "createdAt": "2024-03-10T08:15:30.123Z",
            "updatedAt": "2024-03-11T09:00:00.000Z"
        }"#;

        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.id.as_str(), "lx3k2a-9f8e7d");
        assert!(post.is_edited());
    }
}
