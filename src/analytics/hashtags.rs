// Trending-hashtag rankings.
//
// The export stores hashtags as one comma-separated string per post
// ("sunset, beachlife, nature"). Tags are compared lowercased, and an
// ignore list filters out generic engagement-bait tags before ranking.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::data::models::InstagramPost;

/// One row of the frequency ranking.
#[derive(Debug, Clone, Serialize)]
pub struct HashtagFrequency {
    pub hashtag: String,
    pub frequency: u64,
}

/// One row of the reach ranking.
///
/// Reach is the mean engagement a tag earns per appearance:
/// (likes + comments summed over posts carrying the tag) / occurrences.
#[derive(Debug, Clone, Serialize)]
pub struct HashtagReach {
    pub hashtag: String,
    pub likes: u64,
    pub comments: u64,
    pub occurrences: u64,
    pub reach: f64,
}

/// Split a raw hashtag field into trimmed, lowercased tags.
pub fn split_hashtags(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn ignore_set(ignore: &[String]) -> HashSet<String> {
    ignore.iter().map(|tag| tag.to_lowercase()).collect()
}

/// Rank hashtags by how many posts they appear in, descending.
pub fn trending_by_frequency(posts: &[InstagramPost], ignore: &[String]) -> Vec<HashtagFrequency> {
    let ignored = ignore_set(ignore);
    let mut counts: HashMap<String, u64> = HashMap::new();

    for post in posts {
        if let Some(field) = &post.hashtags {
            for tag in split_hashtags(field) {
                if !ignored.contains(&tag) {
                    *counts.entry(tag).or_insert(0) += 1;
                }
            }
        }
    }

    let mut rows: Vec<HashtagFrequency> = counts
        .into_iter()
        .map(|(hashtag, frequency)| HashtagFrequency { hashtag, frequency })
        .collect();
    rows.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.hashtag.cmp(&b.hashtag))
    });
    rows
}

/// Rank hashtags by reach, descending.
pub fn trending_by_reach(posts: &[InstagramPost], ignore: &[String]) -> Vec<HashtagReach> {
    let ignored = ignore_set(ignore);
    // tag -> (likes, comments, occurrences)
    let mut totals: HashMap<String, (u64, u64, u64)> = HashMap::new();

    for post in posts {
        if let Some(field) = &post.hashtags {
            for tag in split_hashtags(field) {
                if !ignored.contains(&tag) {
                    let entry = totals.entry(tag).or_insert((0, 0, 0));
                    entry.0 += post.likes;
                    entry.1 += post.comments;
                    entry.2 += 1;
                }
            }
        }
    }

    let mut rows: Vec<HashtagReach> = totals
        .into_iter()
        .map(|(hashtag, (likes, comments, occurrences))| HashtagReach {
            hashtag,
            likes,
            comments,
            occurrences,
            reach: (likes + comments) as f64 / occurrences as f64,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.reach
            .partial_cmp(&a.reach)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.hashtag.cmp(&b.hashtag))
    });
    rows
}
