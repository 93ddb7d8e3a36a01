// Trending probability for a candidate caption.
//
// The reference corpus is the captions of the currently most-liked posts:
// if a new caption reads like what is already earning likes, it is more
// likely to trend. The score is the max TF-IDF cosine similarity against
// that corpus, in [0, 1].

use anyhow::Result;
use tracing::debug;

use crate::data::models::InstagramPost;
use crate::similarity::scorer::SimilarityScorer;

/// How many top-liked posts form the reference corpus by default.
pub const DEFAULT_TOP_POSTS: usize = 10;

/// Score how likely a caption is to trend, given the current posts.
///
/// Takes the `top_posts` posts with the most likes, uses their captions
/// (missing captions count as empty) as the reference corpus, and runs the
/// similarity scorer on the caption. Errors when `posts` is empty.
pub fn trending_probability(
    caption: &str,
    posts: &[InstagramPost],
    top_posts: usize,
) -> Result<f64> {
    if posts.is_empty() {
        anyhow::bail!("No posts available to build a reference corpus");
    }

    let mut ranked: Vec<&InstagramPost> = posts.iter().collect();
    ranked.sort_by(|a, b| b.likes.cmp(&a.likes));

    let corpus: Vec<String> = ranked
        .iter()
        .take(top_posts)
        .map(|post| post.caption_text().to_string())
        .collect();

    debug!(
        corpus_size = corpus.len(),
        total_posts = posts.len(),
        "Built trending reference corpus"
    );

    SimilarityScorer::new().score(caption, &corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(caption: Option<&str>, likes: u64) -> InstagramPost {
        InstagramPost {
            caption: caption.map(|c| c.to_string()),
            hashtags: None,
            likes,
            comments: 0,
            timestamp: None,
        }
    }

    #[test]
    fn test_no_posts_errors() {
        let result = trending_probability("anything", &[], DEFAULT_TOP_POSTS);
        assert!(result.is_err());
    }

    #[test]
    fn test_matching_caption_scores_high() {
        let posts = vec![
            post(Some("Sunset at the beach is beautiful"), 500),
            post(Some("Pizza night"), 300),
            post(Some("Marathon day"), 100),
        ];
        let score = trending_probability(
            "Enjoying a beautiful sunset at the beach #nature #sunset #beachlife",
            &posts,
            DEFAULT_TOP_POSTS,
        )
        .unwrap();
        assert!(score > 0.0);
        assert!(score <= 1.0);
    }

    #[test]
    fn test_only_top_liked_posts_form_the_corpus() {
        // The exact-match caption sits outside the top-1 cutoff, so it must
        // not influence the score until the cutoff admits it.
        let posts = vec![
            post(Some("completely unrelated words"), 1000),
            post(Some("sunset at the beach"), 1),
        ];
        let narrow = trending_probability("sunset at the beach", &posts, 1).unwrap();
        assert_eq!(narrow, 0.0);

        let wide = trending_probability("sunset at the beach", &posts, 2).unwrap();
        assert!((wide - 1.0).abs() < 1e-9, "Expected ~1.0, got {wide}");
    }

    #[test]
    fn test_missing_captions_count_as_empty() {
        let posts = vec![post(None, 100), post(Some("sunset"), 50)];
        let score = trending_probability("sunset", &posts, DEFAULT_TOP_POSTS).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }
}
