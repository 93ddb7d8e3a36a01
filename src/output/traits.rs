// Report sink trait — swap-ready abstraction.
//
// Analytics produce plain KPI tables; where they end up (colored terminal
// output, a JSON file, something else later) is this seam's concern.

use anyhow::Result;

use crate::analytics::engagement::{
    EngagementAverages, PostEngagement, SubredditAverage, SubredditEngagement,
};
use crate::analytics::hashtags::{HashtagFrequency, HashtagReach};

/// Trait for consuming KPI tables and scores.
pub trait ReportSink {
    fn emit_hashtag_frequency(&mut self, rows: &[HashtagFrequency]) -> Result<()>;
    fn emit_hashtag_reach(&mut self, rows: &[HashtagReach]) -> Result<()>;
    fn emit_subreddit_engagement(&mut self, rows: &[SubredditEngagement]) -> Result<()>;
    fn emit_subreddit_averages(&mut self, rows: &[SubredditAverage]) -> Result<()>;
    fn emit_instagram_summary(
        &mut self,
        averages: &EngagementAverages,
        top_posts: &[PostEngagement],
    ) -> Result<()>;
    fn emit_trending_score(&mut self, caption: &str, score: f64) -> Result<()>;
}
