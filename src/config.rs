use std::env;
use std::path::Path;

use anyhow::Result;

/// Default ignore list: generic engagement-bait tags that would otherwise
/// dominate every ranking.
pub const DEFAULT_IGNORE_HASHTAGS: &[&str] =
    &["instagram", "reelsinstagram", "trending", "viral", "trend", "new"];

/// Central configuration loaded from environment variables.
///
/// Paths come from env vars with defaults next to the working directory.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Path to the Reddit JSON export
    pub reddit_path: String,
    /// Path to the Instagram JSON export
    pub instagram_path: String,
    /// Hashtags excluded from trending rankings
    pub ignore_hashtags: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let ignore_hashtags = match env::var("TRENDLENS_IGNORE_HASHTAGS") {
            Ok(raw) => raw
                .split(',')
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
            Err(_) => DEFAULT_IGNORE_HASHTAGS
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
        };

        Ok(Self {
            reddit_path: env::var("TRENDLENS_REDDIT_PATH")
                .unwrap_or_else(|_| "./trendy_reddit_topics.json".to_string()),
            instagram_path: env::var("TRENDLENS_INSTAGRAM_PATH")
                .unwrap_or_else(|_| "./instagram_posts.json".to_string()),
            ignore_hashtags,
        })
    }

    /// Check that the Reddit export exists.
    /// Call this before any operation that reads Reddit data.
    pub fn require_reddit(&self) -> Result<()> {
        if !Path::new(&self.reddit_path).exists() {
            anyhow::bail!(
                "Reddit export not found at {}.\n\
                 Set TRENDLENS_REDDIT_PATH in your .env file or environment.",
                self.reddit_path
            );
        }
        Ok(())
    }

    /// Check that the Instagram export exists.
    /// Call this before any operation that reads Instagram data.
    pub fn require_instagram(&self) -> Result<()> {
        if !Path::new(&self.instagram_path).exists() {
            anyhow::bail!(
                "Instagram export not found at {}.\n\
                 Set TRENDLENS_INSTAGRAM_PATH in your .env file or environment.",
                self.instagram_path
            );
        }
        Ok(())
    }
}
