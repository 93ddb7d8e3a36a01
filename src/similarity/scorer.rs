// Max-similarity scoring of a query text against a reference corpus.
//
// The vector space is re-fit on every call from {cleaned query} ∪ corpus,
// so scores are only comparable within a single call's corpus — never
// across calls with different corpora.

use std::sync::OnceLock;

use anyhow::Result;
use regex_lite::Regex;
use tracing::debug;

use super::vectorizer::{cosine_similarity, TfIdfVectorizer};

fn hashtag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#\w+").expect("valid hashtag pattern"))
}

/// Remove hashtag tokens (`#` plus word characters) and trim whitespace.
///
/// Hashtags are categorical markers, not prose, and would bias textual
/// similarity toward tag spam.
pub fn strip_hashtags(text: &str) -> String {
    hashtag_pattern().replace_all(text, "").trim().to_string()
}

/// Scores how closely a query text resembles its nearest neighbor in a
/// reference corpus, as TF-IDF cosine similarity in [0, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a query against a corpus of prior texts.
    ///
    /// Returns the maximum cosine similarity between the hashtag-stripped
    /// query and any corpus entry. A query that cleans to the empty string
    /// scores 0.0 against every entry, including empty entries. An empty
    /// corpus is an error: the maximum over an empty set is undefined.
    pub fn score(&self, query: &str, corpus: &[String]) -> Result<f64> {
        if corpus.is_empty() {
            anyhow::bail!("Cannot score similarity against an empty corpus");
        }

        let cleaned = strip_hashtags(query);

        // Joint fit: the query is document 0, corpus entries follow.
        let mut documents = Vec::with_capacity(corpus.len() + 1);
        documents.push(cleaned);
        documents.extend(corpus.iter().cloned());

        let vectorizer = TfIdfVectorizer::fit(&documents);
        let query_vector = vectorizer.transform(&documents[0]);

        let best = documents[1..]
            .iter()
            .map(|entry| cosine_similarity(&query_vector, &vectorizer.transform(entry)))
            .fold(0.0_f64, f64::max);

        debug!(
            corpus_size = corpus.len(),
            vocabulary = vectorizer.vocabulary_size(),
            score = best,
            "Scored query against corpus"
        );

        Ok(best)
    }
}
