// JSON report sink — accumulates KPI tables and writes a single file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analytics::engagement::{
    EngagementAverages, PostEngagement, SubredditAverage, SubredditEngagement,
};
use crate::analytics::hashtags::{HashtagFrequency, HashtagReach};
use crate::output::traits::ReportSink;

/// A caption's trending score, as stored in the report.
#[derive(Debug, Clone, Serialize)]
pub struct TrendingScore {
    pub caption: String,
    pub score: f64,
}

/// The accumulated report. Sections that were never emitted are omitted
/// from the serialized output.
#[derive(Debug, Default, Serialize)]
pub struct FullReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtag_frequency: Option<Vec<HashtagFrequency>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtag_reach: Option<Vec<HashtagReach>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subreddit_engagement: Option<Vec<SubredditEngagement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subreddit_averages: Option<Vec<SubredditAverage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_averages: Option<EngagementAverages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_posts: Option<Vec<PostEngagement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending: Option<TrendingScore>,
}

/// Sink that collects every table into a `FullReport` and writes it as
/// pretty-printed JSON when `write` is called.
pub struct JsonSink {
    path: PathBuf,
    report: FullReport,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            report: FullReport::default(),
        }
    }

    /// Write the accumulated report to disk and return its path.
    pub fn write(self) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(&self.report)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write report to {}", self.path.display()))?;
        Ok(self.path)
    }
}

impl ReportSink for JsonSink {
    fn emit_hashtag_frequency(&mut self, rows: &[HashtagFrequency]) -> Result<()> {
        self.report.hashtag_frequency = Some(rows.to_vec());
        Ok(())
    }

    fn emit_hashtag_reach(&mut self, rows: &[HashtagReach]) -> Result<()> {
        self.report.hashtag_reach = Some(rows.to_vec());
        Ok(())
    }

    fn emit_subreddit_engagement(&mut self, rows: &[SubredditEngagement]) -> Result<()> {
        self.report.subreddit_engagement = Some(rows.to_vec());
        Ok(())
    }

    fn emit_subreddit_averages(&mut self, rows: &[SubredditAverage]) -> Result<()> {
        self.report.subreddit_averages = Some(rows.to_vec());
        Ok(())
    }

    fn emit_instagram_summary(
        &mut self,
        averages: &EngagementAverages,
        top_posts: &[PostEngagement],
    ) -> Result<()> {
        self.report.instagram_averages = Some(averages.clone());
        self.report.top_posts = Some(top_posts.to_vec());
        Ok(())
    }

    fn emit_trending_score(&mut self, caption: &str, score: f64) -> Result<()> {
        self.report.trending = Some(TrendingScore {
            caption: caption.to_string(),
            score,
        });
        Ok(())
    }
}
