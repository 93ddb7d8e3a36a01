// Colored terminal output for KPI tables and trending scores.
//
// This module handles all terminal-specific formatting: colors, tables,
// summaries. The main.rs display paths delegate here via TerminalSink.

use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::analytics::engagement::{
    EngagementAverages, PostEngagement, SubredditAverage, SubredditEngagement,
};
use crate::analytics::hashtags::{HashtagFrequency, HashtagReach};
use crate::output::truncate_chars;
use crate::output::traits::ReportSink;

/// Color a [0,1] similarity score by how strong the resemblance is.
fn colorize_score(score: f64) -> ColoredString {
    let formatted = format!("{score:.2}");
    if score >= 0.5 {
        formatted.bright_green().bold()
    } else if score >= 0.2 {
        formatted.bright_yellow()
    } else {
        formatted.dimmed()
    }
}

/// Display the hashtag frequency ranking.
pub fn display_hashtag_frequency(rows: &[HashtagFrequency], limit: usize) {
    if rows.is_empty() {
        println!("No hashtags found in the Instagram export.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} Trending Hashtags by Frequency ===", limit.min(rows.len())).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<28} {:>9}",
        "Rank".dimmed(),
        "Hashtag".dimmed(),
        "Frequency".dimmed()
    );
    println!("  {}", "-".repeat(45).dimmed());

    for (i, row) in rows.iter().take(limit).enumerate() {
        println!("  {:>4}. #{:<27} {:>9}", i + 1, row.hashtag, row.frequency);
    }
}

/// Display the hashtag reach ranking.
pub fn display_hashtag_reach(rows: &[HashtagReach], limit: usize) {
    if rows.is_empty() {
        println!("No hashtags found in the Instagram export.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} Trending Hashtags by Reach ===", limit.min(rows.len())).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<24} {:>8} {:>9} {:>6} {:>10}",
        "Rank".dimmed(),
        "Hashtag".dimmed(),
        "Likes".dimmed(),
        "Comments".dimmed(),
        "Posts".dimmed(),
        "Reach".dimmed()
    );
    println!("  {}", "-".repeat(68).dimmed());

    for (i, row) in rows.iter().take(limit).enumerate() {
        println!(
            "  {:>4}. #{:<23} {:>8} {:>9} {:>6} {:>10.1}",
            i + 1,
            row.hashtag,
            row.likes,
            row.comments,
            row.occurrences,
            row.reach
        );
    }
}

/// Display the subreddit engagement table.
pub fn display_subreddit_engagement(rows: &[SubredditEngagement]) {
    if rows.is_empty() {
        println!("No subreddits found in the Reddit export.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top Subreddits by Engagement ({}) ===", rows.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<24} {:>8} {:>9} {:>7} {:>12}",
        "Rank".dimmed(),
        "Subreddit".dimmed(),
        "Score".dimmed(),
        "Comments".dimmed(),
        "Ratio".dimmed(),
        "Engagement".dimmed()
    );
    println!("  {}", "-".repeat(70).dimmed());

    for (i, row) in rows.iter().enumerate() {
        println!(
            "  {:>4}. r/{:<22} {:>8} {:>9} {:>7.2} {:>12.2}",
            i + 1,
            row.subreddit,
            row.score,
            row.comments,
            row.upvote_ratio,
            row.engagement
        );
    }
}

/// Display mean score per subreddit.
pub fn display_subreddit_averages(rows: &[SubredditAverage], limit: usize) {
    if rows.is_empty() {
        return;
    }

    println!("\n{}", "=== Average Score per Subreddit ===".bold());
    println!();
    for row in rows.iter().take(limit) {
        println!("  r/{:<24} {:>10.2}", row.subreddit, row.average_score);
    }
}

/// Display the Instagram engagement summary.
pub fn display_instagram_summary(
    averages: &EngagementAverages,
    top_posts: &[PostEngagement],
    limit: usize,
) {
    println!("\n{}", "=== Instagram Engagement ===".bold());
    println!();
    println!(
        "  Average per post: {} likes, {} comments",
        format!("{:.2}", averages.likes).bold(),
        format!("{:.2}", averages.comments).bold()
    );

    if top_posts.is_empty() {
        return;
    }

    println!("\n  Top posts by total engagement:");
    for (i, post) in top_posts.iter().take(limit).enumerate() {
        let caption = if post.caption.is_empty() {
            "(no caption)".dimmed().to_string()
        } else {
            truncate_chars(&post.caption, 60)
        };
        println!(
            "  {:>4}. {:<64} {:>6} likes {:>6} comments",
            i + 1,
            caption,
            post.likes,
            post.comments
        );
    }
}

/// Display a caption's trending score.
pub fn display_trending_score(caption: &str, score: f64) {
    println!("\n{}", "=== Trending Probability ===".bold());
    println!();
    println!("  Caption: {}", truncate_chars(caption, 100));
    println!("  Score:   {}", colorize_score(score));

    if score >= 0.5 {
        println!(
            "  {}",
            "Strong resemblance to currently trending captions.".bright_green()
        );
    } else if score >= 0.2 {
        println!(
            "  {}",
            "Some resemblance to currently trending captions.".yellow()
        );
    } else {
        println!(
            "  {}",
            "Little resemblance to currently trending captions.".dimmed()
        );
    }
}

/// Sink that renders every table to the terminal.
pub struct TerminalSink {
    /// Max rows per ranked table
    pub limit: usize,
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

impl ReportSink for TerminalSink {
    fn emit_hashtag_frequency(&mut self, rows: &[HashtagFrequency]) -> Result<()> {
        display_hashtag_frequency(rows, self.limit);
        Ok(())
    }

    fn emit_hashtag_reach(&mut self, rows: &[HashtagReach]) -> Result<()> {
        display_hashtag_reach(rows, self.limit);
        Ok(())
    }

    fn emit_subreddit_engagement(&mut self, rows: &[SubredditEngagement]) -> Result<()> {
        display_subreddit_engagement(rows);
        Ok(())
    }

    fn emit_subreddit_averages(&mut self, rows: &[SubredditAverage]) -> Result<()> {
        display_subreddit_averages(rows, self.limit);
        Ok(())
    }

    fn emit_instagram_summary(
        &mut self,
        averages: &EngagementAverages,
        top_posts: &[PostEngagement],
    ) -> Result<()> {
        display_instagram_summary(averages, top_posts, self.limit);
        Ok(())
    }

    fn emit_trending_score(&mut self, caption: &str, score: f64) -> Result<()> {
        display_trending_score(caption, score);
        Ok(())
    }
}
