use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

mod config;

use trendlens::analytics::engagement::{
    average_likes_comments, average_score_per_subreddit, top_posts_by_engagement,
    top_subreddits_by_engagement,
};
use trendlens::analytics::hashtags::{trending_by_frequency, trending_by_reach};
use trendlens::analytics::trending::{trending_probability, DEFAULT_TOP_POSTS};
use trendlens::data::loader::JsonExportProvider;
use trendlens::data::models::{InstagramPost, RedditPost};
use trendlens::data::traits::TrendDataProvider;
use trendlens::output::json::JsonSink;
use trendlens::output::terminal::TerminalSink;
use trendlens::output::traits::ReportSink;

/// Trendlens: engagement analytics for social media exports.
///
/// Computes trending-hashtag and engagement KPIs from Reddit/Instagram
/// export files, and scores how closely a new caption resembles content
/// that is already trending.
#[derive(Parser)]
#[command(name = "trendlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum HashtagRanking {
    /// How many posts each hashtag appears in
    Frequency,
    /// Mean engagement per appearance
    Reach,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank trending hashtags from the Instagram export
    Hashtags {
        /// Which ranking to use
        #[arg(long, value_enum, default_value = "frequency")]
        by: HashtagRanking,

        /// Max rows to display
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Comma-separated hashtags to exclude (overrides the configured list)
        #[arg(long)]
        ignore: Option<String>,
    },

    /// Show engagement KPIs for both exports
    Engagement,

    /// Score how likely a caption is to trend
    Score {
        /// The caption to score
        caption: String,

        /// How many top-liked posts form the reference corpus (default: 10)
        #[arg(long, default_value = "10")]
        top_posts: usize,
    },

    /// Generate a full report with every table
    Report {
        /// Max rows per ranked table
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Also write the report as JSON to this path
        #[arg(long)]
        json: Option<String>,

        /// Include a trending check for this caption in the report
        #[arg(long)]
        caption: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trendlens=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hashtags { by, limit, ignore } => {
            let config = config::Config::load()?;
            config.require_instagram()?;

            let provider = JsonExportProvider::new(&config.reddit_path, &config.instagram_path);
            let posts = provider.instagram_posts()?;

            let ignore_list = match ignore {
                Some(raw) => raw
                    .split(',')
                    .map(|tag| tag.trim().to_lowercase())
                    .filter(|tag| !tag.is_empty())
                    .collect(),
                None => config.ignore_hashtags.clone(),
            };

            match by {
                HashtagRanking::Frequency => {
                    let rows = trending_by_frequency(&posts, &ignore_list);
                    trendlens::output::terminal::display_hashtag_frequency(&rows, limit);
                }
                HashtagRanking::Reach => {
                    let rows = trending_by_reach(&posts, &ignore_list);
                    trendlens::output::terminal::display_hashtag_reach(&rows, limit);
                }
            }
        }

        Commands::Engagement => {
            let config = config::Config::load()?;
            config.require_reddit()?;
            config.require_instagram()?;

            let provider = JsonExportProvider::new(&config.reddit_path, &config.instagram_path);
            let reddit = provider.reddit_posts()?;
            let instagram = provider.instagram_posts()?;

            trendlens::output::terminal::display_subreddit_engagement(
                &top_subreddits_by_engagement(&reddit),
            );
            trendlens::output::terminal::display_subreddit_averages(
                &average_score_per_subreddit(&reddit),
                5,
            );
            trendlens::output::terminal::display_instagram_summary(
                &average_likes_comments(&instagram),
                &top_posts_by_engagement(&instagram),
                5,
            );
        }

        Commands::Score { caption, top_posts } => {
            let config = config::Config::load()?;
            config.require_instagram()?;

            let provider = JsonExportProvider::new(&config.reddit_path, &config.instagram_path);
            let posts = provider.instagram_posts()?;

            info!(posts = posts.len(), top_posts, "Scoring caption");

            let score = trending_probability(&caption, &posts, top_posts)?;
            trendlens::output::terminal::display_trending_score(&caption, score);
        }

        Commands::Report {
            limit,
            json,
            caption,
        } => {
            let config = config::Config::load()?;
            config.require_reddit()?;
            config.require_instagram()?;

            let provider = JsonExportProvider::new(&config.reddit_path, &config.instagram_path);
            let reddit = provider.reddit_posts()?;
            let instagram = provider.instagram_posts()?;

            let mut terminal = TerminalSink { limit };
            emit_full_report(
                &mut terminal,
                &reddit,
                &instagram,
                &config.ignore_hashtags,
                caption.as_deref(),
            )?;

            if let Some(path) = json {
                let mut sink = JsonSink::new(&path);
                emit_full_report(
                    &mut sink,
                    &reddit,
                    &instagram,
                    &config.ignore_hashtags,
                    caption.as_deref(),
                )?;
                let written = sink.write()?;
                println!(
                    "\n{}",
                    format!("JSON report saved to: {}", written.display()).bold()
                );
            }
        }
    }

    Ok(())
}

/// Run every KPI table through a report sink.
fn emit_full_report(
    sink: &mut dyn ReportSink,
    reddit: &[RedditPost],
    instagram: &[InstagramPost],
    ignore_hashtags: &[String],
    caption: Option<&str>,
) -> Result<()> {
    sink.emit_subreddit_engagement(&top_subreddits_by_engagement(reddit))?;
    sink.emit_subreddit_averages(&average_score_per_subreddit(reddit))?;
    sink.emit_hashtag_frequency(&trending_by_frequency(instagram, ignore_hashtags))?;
    sink.emit_hashtag_reach(&trending_by_reach(instagram, ignore_hashtags))?;
    sink.emit_instagram_summary(
        &average_likes_comments(instagram),
        &top_posts_by_engagement(instagram),
    )?;

    if let Some(caption) = caption {
        let score = trending_probability(caption, instagram, DEFAULT_TOP_POSTS)?;
        sink.emit_trending_score(caption, score)?;
    }

    Ok(())
}
