// JSON export loading and normalization.
//
// Export files are JSON arrays of objects keyed by the upstream column
// names ("Subreddit", "Upvote Ratio", "Post Hashtags", ...). Raw records
// arrive with gaps: Reddit exports are forward-filled from the previous
// record, scores are truncated to integers, and timestamps are parsed
// best-effort. Records that are still unusable after forward-fill are
// skipped with a warning rather than failing the whole load.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::{info, warn};

use super::models::{InstagramPost, RedditPost};
use super::traits::TrendDataProvider;

/// A Reddit export record as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRedditRecord {
    #[serde(rename = "Subreddit")]
    pub subreddit: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Score")]
    pub score: Option<f64>,
    #[serde(rename = "Upvote Ratio")]
    pub upvote_ratio: Option<f64>,
    #[serde(rename = "Number of Comments")]
    pub num_comments: Option<f64>,
    #[serde(rename = "Created")]
    pub created: Option<String>,
}

/// An Instagram export record as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInstagramRecord {
    #[serde(rename = "Caption")]
    pub caption: Option<String>,
    #[serde(rename = "Post Hashtags")]
    pub hashtags: Option<String>,
    #[serde(rename = "Likes")]
    pub likes: Option<f64>,
    #[serde(rename = "Comments")]
    pub comments: Option<f64>,
    #[serde(rename = "Timestamp")]
    pub timestamp: Option<String>,
}

/// Parse an export timestamp in the formats the upstream tools emit.
pub fn parse_export_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// Forward-fill and coerce raw Reddit records into clean posts.
///
/// Gaps inherit the previous record's value. A record still missing its
/// subreddit or numeric fields after forward-fill is skipped.
pub fn normalize_reddit(records: Vec<RawRedditRecord>) -> Vec<RedditPost> {
    let mut posts = Vec::with_capacity(records.len());
    let mut last = RawRedditRecord {
        subreddit: None,
        title: None,
        score: None,
        upvote_ratio: None,
        num_comments: None,
        created: None,
    };

    for (index, record) in records.into_iter().enumerate() {
        let filled = RawRedditRecord {
            subreddit: record.subreddit.or(last.subreddit.clone()),
            title: record.title.or(last.title.clone()),
            score: record.score.or(last.score),
            upvote_ratio: record.upvote_ratio.or(last.upvote_ratio),
            num_comments: record.num_comments.or(last.num_comments),
            created: record.created.or(last.created.clone()),
        };

        match (
            filled.subreddit.clone(),
            filled.score,
            filled.upvote_ratio,
            filled.num_comments,
        ) {
            (Some(subreddit), Some(score), Some(upvote_ratio), Some(num_comments)) => {
                let created = filled.created.as_deref().and_then(parse_export_timestamp);
                if filled.created.is_some() && created.is_none() {
                    warn!(index, "Unparseable Created timestamp in Reddit export");
                }
                posts.push(RedditPost {
                    subreddit,
                    title: filled.title.clone().unwrap_or_default(),
                    score: score as i64,
                    upvote_ratio,
                    num_comments: num_comments.max(0.0) as u64,
                    created,
                });
            }
            _ => {
                warn!(index, "Skipping incomplete Reddit export record");
            }
        }

        last = filled;
    }

    posts
}

/// Coerce raw Instagram records into clean posts.
///
/// Missing likes/comments count as zero; timestamps are parsed best-effort.
pub fn normalize_instagram(records: Vec<RawInstagramRecord>) -> Vec<InstagramPost> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let timestamp = record.timestamp.as_deref().and_then(parse_export_timestamp);
            if record.timestamp.is_some() && timestamp.is_none() {
                warn!(index, "Unparseable Timestamp in Instagram export");
            }
            InstagramPost {
                caption: record.caption,
                hashtags: record.hashtags,
                likes: record.likes.map(|v| v.max(0.0) as u64).unwrap_or(0),
                comments: record.comments.map(|v| v.max(0.0) as u64).unwrap_or(0),
                timestamp,
            }
        })
        .collect()
}

/// Provider backed by a pair of JSON export files on disk.
pub struct JsonExportProvider {
    reddit_path: PathBuf,
    instagram_path: PathBuf,
}

impl JsonExportProvider {
    pub fn new(reddit_path: impl Into<PathBuf>, instagram_path: impl Into<PathBuf>) -> Self {
        Self {
            reddit_path: reddit_path.into(),
            instagram_path: instagram_path.into(),
        }
    }
}

fn read_export<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read export file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Export file is not a JSON array: {}", path.display()))
}

impl TrendDataProvider for JsonExportProvider {
    fn reddit_posts(&self) -> Result<Vec<RedditPost>> {
        let records: Vec<RawRedditRecord> = read_export(&self.reddit_path)?;
        let total = records.len();
        let posts = normalize_reddit(records);
        info!(
            loaded = posts.len(),
            total,
            path = %self.reddit_path.display(),
            "Loaded Reddit export"
        );
        Ok(posts)
    }

    fn instagram_posts(&self) -> Result<Vec<InstagramPost>> {
        let records: Vec<RawInstagramRecord> = read_export(&self.instagram_path)?;
        let total = records.len();
        let posts = normalize_instagram(records);
        info!(
            loaded = posts.len(),
            total,
            path = %self.instagram_path.display(),
            "Loaded Instagram export"
        );
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_timestamp_formats() {
        assert!(parse_export_timestamp("2024-06-01T12:30:00+00:00").is_some());
        assert!(parse_export_timestamp("2024-06-01 12:30:00").is_some());
        assert!(parse_export_timestamp("2024-06-01T12:30:00").is_some());
        assert!(parse_export_timestamp("2024-06-01").is_some());
        assert!(parse_export_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_normalize_reddit_forward_fills() {
        let records = vec![
            RawRedditRecord {
                subreddit: Some("rust".to_string()),
                title: Some("first".to_string()),
                score: Some(10.0),
                upvote_ratio: Some(0.9),
                num_comments: Some(5.0),
                created: Some("2024-06-01 12:30:00".to_string()),
            },
            RawRedditRecord {
                subreddit: None,
                title: Some("second".to_string()),
                score: None,
                upvote_ratio: None,
                num_comments: Some(2.0),
                created: None,
            },
        ];

        let posts = normalize_reddit(records);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].subreddit, "rust");
        assert_eq!(posts[1].score, 10);
        assert!((posts[1].upvote_ratio - 0.9).abs() < 1e-9);
        assert_eq!(posts[1].num_comments, 2);
    }

    #[test]
    fn test_normalize_reddit_skips_leading_gap() {
        // Nothing to fill from — the record is dropped, not defaulted
        let records = vec![RawRedditRecord {
            subreddit: None,
            title: None,
            score: Some(3.0),
            upvote_ratio: Some(1.0),
            num_comments: Some(0.0),
            created: None,
        }];
        assert!(normalize_reddit(records).is_empty());
    }

    #[test]
    fn test_normalize_reddit_truncates_scores() {
        let records = vec![RawRedditRecord {
            subreddit: Some("rust".to_string()),
            title: None,
            score: Some(41.9),
            upvote_ratio: Some(0.8),
            num_comments: Some(7.0),
            created: None,
        }];
        let posts = normalize_reddit(records);
        assert_eq!(posts[0].score, 41);
        assert_eq!(posts[0].title, "");
    }

    #[test]
    fn test_normalize_instagram_defaults() {
        let records = vec![RawInstagramRecord {
            caption: None,
            hashtags: Some("sunset, beach".to_string()),
            likes: None,
            comments: Some(12.0),
            timestamp: Some("not a date".to_string()),
        }];
        let posts = normalize_instagram(records);
        assert_eq!(posts[0].likes, 0);
        assert_eq!(posts[0].comments, 12);
        assert!(posts[0].timestamp.is_none());
        assert_eq!(posts[0].caption_text(), "");
    }
}
