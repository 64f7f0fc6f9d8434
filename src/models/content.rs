use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag driving which viewer the client selects for a content item. Unknown
/// tags fall back to `Other` and are rendered as plain downloads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Video,
    Document,
    Quiz,
    Assignment,
    #[serde(other)]
    Other,
}

impl ContentType {
    /// Marker shown next to a content item in list renderings.
    pub fn marker(self) -> &'static str {
        match self {
            ContentType::Video => "[video]",
            ContentType::Document => "[document]",
            ContentType::Quiz => "[quiz]",
            ContentType::Assignment => "[assignment]",
            ContentType::Other => "[file]",
        }
    }
}

/// A unit of course material, read-only from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    pub id: i64,
    pub course: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub content_file: Option<String>,
}

/// Per-content completion record scoped to one enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    pub id: i64,
    pub enrollment: i64,
    pub content: i64,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Body for `POST /progress/`.
#[derive(Debug, Serialize)]
pub struct NewProgress {
    pub enrollment: i64,
    pub content: i64,
    pub is_completed: bool,
    pub completed_at: DateTime<Utc>,
}
