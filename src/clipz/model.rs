use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker appended to previews of content longer than the preview limit.
pub const ELLIPSIS: &str = "...";

/// A saved text entry.
///
/// Serialized with the field names used by the stored layout: `id`, `content`
/// and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub id: String,
    pub content: String,
    #[serde(rename = "createdAt", with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Clip {
    pub fn new(id: impl Into<String>, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            created_at,
        }
    }

    /// Number of characters in the content, as shown on cards.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn preview(&self, limit: usize) -> String {
        preview(&self.content, limit)
    }
}

/// First `limit` characters of `content`, followed by [`ELLIPSIS`] when the
/// content is longer than that.
pub fn preview(content: &str, limit: usize) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() {
        format!("{}{}", head, ELLIPSIS)
    } else {
        head
    }
}

/// Timestamps are stored as RFC 3339 in UTC with millisecond precision and a
/// `Z` suffix. Any RFC 3339 offset is accepted on read.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }
}
