// Data provider trait — swap-ready abstraction.
//
// Analytics and scoring only ever see decoded records; where they came from
// (JSON exports today, a live API or database tomorrow) is this seam's
// concern.

use anyhow::Result;

use super::models::{InstagramPost, RedditPost};

/// Trait for supplying decoded Reddit and Instagram export records.
pub trait TrendDataProvider {
    fn reddit_posts(&self) -> Result<Vec<RedditPost>>;
    fn instagram_posts(&self) -> Result<Vec<InstagramPost>>;
}
