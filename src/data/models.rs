// Data models — the record types that flow through the application.
//
// These are separate from the export deserialization so analytics and
// scoring can use them without depending on the loader.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A Reddit submission from the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditPost {
    pub subreddit: String,
    pub title: String,
    pub score: i64,
    pub upvote_ratio: f64,
    pub num_comments: u64,
    /// Creation time, when the export carried a parseable timestamp.
    pub created: Option<NaiveDateTime>,
}

/// An Instagram post from the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramPost {
    pub caption: Option<String>,
    /// Comma-separated hashtag list as exported (e.g. "sunset, beachlife").
    pub hashtags: Option<String>,
    pub likes: u64,
    pub comments: u64,
    pub timestamp: Option<NaiveDateTime>,
}

impl InstagramPost {
    /// The caption text with a missing caption normalized to empty string.
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }

    /// Total engagement: likes plus comments.
    pub fn total_engagement(&self) -> u64 {
        self.likes + self.comments
    }
}
