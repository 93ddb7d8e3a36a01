// Engagement KPIs for Reddit and Instagram exports.
//
// Subreddit engagement: (score_sum + comment_sum) / mean_upvote_ratio.
// Dividing by the upvote ratio rewards communities that rack up raw
// numbers on contested posts. A zero mean ratio yields 0.0 rather than a
// division error.

use std::collections::HashMap;

use serde::Serialize;

use crate::data::models::{InstagramPost, RedditPost};

/// How many subreddits the engagement table keeps.
pub const TOP_SUBREDDITS: usize = 10;

/// One row of the subreddit engagement table.
#[derive(Debug, Clone, Serialize)]
pub struct SubredditEngagement {
    pub subreddit: String,
    pub score: i64,
    pub comments: u64,
    pub upvote_ratio: f64,
    pub engagement: f64,
}

/// Mean post score per subreddit.
#[derive(Debug, Clone, Serialize)]
pub struct SubredditAverage {
    pub subreddit: String,
    pub average_score: f64,
}

/// Mean likes and comments across all Instagram posts.
#[derive(Debug, Clone, Serialize)]
pub struct EngagementAverages {
    pub likes: f64,
    pub comments: f64,
}

/// One Instagram post ranked by total engagement.
#[derive(Debug, Clone, Serialize)]
pub struct PostEngagement {
    pub caption: String,
    pub likes: u64,
    pub comments: u64,
    pub total: u64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The top subreddits ranked by engagement, descending.
pub fn top_subreddits_by_engagement(posts: &[RedditPost]) -> Vec<SubredditEngagement> {
    // subreddit -> (score_sum, ratio_sum, comment_sum, post_count)
    let mut groups: HashMap<&str, (i64, f64, u64, u64)> = HashMap::new();
    for post in posts {
        let entry = groups.entry(&post.subreddit).or_insert((0, 0.0, 0, 0));
        entry.0 += post.score;
        entry.1 += post.upvote_ratio;
        entry.2 += post.num_comments;
        entry.3 += 1;
    }

    let mut rows: Vec<SubredditEngagement> = groups
        .into_iter()
        .map(|(subreddit, (score, ratio_sum, comments, count))| {
            let upvote_ratio = ratio_sum / count as f64;
            let engagement = if upvote_ratio > 0.0 {
                round2((score as f64 + comments as f64) / upvote_ratio)
            } else {
                0.0
            };
            SubredditEngagement {
                subreddit: subreddit.to_string(),
                score,
                comments,
                upvote_ratio,
                engagement,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.engagement
            .partial_cmp(&a.engagement)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.subreddit.cmp(&b.subreddit))
    });
    rows.truncate(TOP_SUBREDDITS);
    rows
}

/// Mean score per subreddit, descending.
pub fn average_score_per_subreddit(posts: &[RedditPost]) -> Vec<SubredditAverage> {
    let mut groups: HashMap<&str, (i64, u64)> = HashMap::new();
    for post in posts {
        let entry = groups.entry(&post.subreddit).or_insert((0, 0));
        entry.0 += post.score;
        entry.1 += 1;
    }

    let mut rows: Vec<SubredditAverage> = groups
        .into_iter()
        .map(|(subreddit, (score_sum, count))| SubredditAverage {
            subreddit: subreddit.to_string(),
            average_score: score_sum as f64 / count as f64,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.subreddit.cmp(&b.subreddit))
    });
    rows
}

/// Mean likes and comments per Instagram post, rounded to two decimals.
pub fn average_likes_comments(posts: &[InstagramPost]) -> EngagementAverages {
    if posts.is_empty() {
        return EngagementAverages {
            likes: 0.0,
            comments: 0.0,
        };
    }
    let n = posts.len() as f64;
    let likes: u64 = posts.iter().map(|p| p.likes).sum();
    let comments: u64 = posts.iter().map(|p| p.comments).sum();
    EngagementAverages {
        likes: round2(likes as f64 / n),
        comments: round2(comments as f64 / n),
    }
}

/// Instagram posts ranked by total engagement, descending.
pub fn top_posts_by_engagement(posts: &[InstagramPost]) -> Vec<PostEngagement> {
    let mut rows: Vec<PostEngagement> = posts
        .iter()
        .map(|post| PostEngagement {
            caption: post.caption_text().to_string(),
            likes: post.likes,
            comments: post.comments,
            total: post.total_engagement(),
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.caption.cmp(&b.caption)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reddit(subreddit: &str, score: i64, ratio: f64, comments: u64) -> RedditPost {
        RedditPost {
            subreddit: subreddit.to_string(),
            title: String::new(),
            score,
            upvote_ratio: ratio,
            num_comments: comments,
            created: None,
        }
    }

    fn instagram(caption: &str, likes: u64, comments: u64) -> InstagramPost {
        InstagramPost {
            caption: Some(caption.to_string()),
            hashtags: None,
            likes,
            comments,
            timestamp: None,
        }
    }

    #[test]
    fn test_subreddit_engagement_formula() {
        let posts = vec![
            reddit("rust", 10, 0.9, 5),
            reddit("rust", 20, 0.7, 5),
            reddit("python", 5, 1.0, 0),
        ];
        let rows = top_subreddits_by_engagement(&posts);
        // rust: (30 + 10) / mean(0.9, 0.7) = 40 / 0.8 = 50.0
        assert_eq!(rows[0].subreddit, "rust");
        assert!((rows[0].engagement - 50.0).abs() < 1e-9);
        assert_eq!(rows[0].score, 30);
        assert_eq!(rows[0].comments, 10);
        // python: 5 / 1.0 = 5.0
        assert_eq!(rows[1].subreddit, "python");
        assert!((rows[1].engagement - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_subreddit_engagement_zero_ratio_guard() {
        let posts = vec![reddit("void", 100, 0.0, 50)];
        let rows = top_subreddits_by_engagement(&posts);
        assert_eq!(rows[0].engagement, 0.0);
    }

    #[test]
    fn test_subreddit_table_caps_at_top_ten() {
        let posts: Vec<RedditPost> = (0..15)
            .map(|i| reddit(&format!("sub{i}"), i as i64, 1.0, 0))
            .collect();
        assert_eq!(top_subreddits_by_engagement(&posts).len(), TOP_SUBREDDITS);
    }

    #[test]
    fn test_average_score_per_subreddit() {
        let posts = vec![
            reddit("rust", 10, 1.0, 0),
            reddit("rust", 20, 1.0, 0),
            reddit("python", 30, 1.0, 0),
        ];
        let rows = average_score_per_subreddit(&posts);
        assert_eq!(rows[0].subreddit, "python");
        assert!((rows[0].average_score - 30.0).abs() < 1e-9);
        assert!((rows[1].average_score - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_likes_comments() {
        let posts = vec![instagram("a", 100, 10), instagram("b", 50, 40)];
        let averages = average_likes_comments(&posts);
        assert!((averages.likes - 75.0).abs() < 1e-9);
        assert!((averages.comments - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_likes_comments_empty() {
        let averages = average_likes_comments(&[]);
        assert_eq!(averages.likes, 0.0);
        assert_eq!(averages.comments, 0.0);
    }

    #[test]
    fn test_top_posts_by_engagement_sorted() {
        let posts = vec![
            instagram("low", 5, 1),
            instagram("high", 100, 50),
            instagram("mid", 30, 10),
        ];
        let rows = top_posts_by_engagement(&posts);
        assert_eq!(rows[0].caption, "high");
        assert_eq!(rows[0].total, 150);
        assert_eq!(rows[2].caption, "low");
    }
}
