// TF-IDF vectorization over a fixed document set.
//
// The vectorizer is fit over one batch of documents and produces a sparse
// weight vector per document. IDF uses the smoothed form
//
//   idf(t) = ln((1 + n) / (1 + df(t))) + 1
//
// so every term keeps a strictly positive weight and a term appearing in
// every document is not zeroed out entirely. TF is the raw term count
// within the document.

use std::collections::HashMap;

use super::tokenizer::tokenize;

/// Sparse TF-IDF vector: vocabulary index -> weight.
pub type SparseVector = HashMap<usize, f64>;

/// A TF-IDF vector space fit over a fixed set of documents.
///
/// The vocabulary and document frequencies are derived from the documents
/// passed to `fit` and never updated afterwards. Transforming a document
/// that contains out-of-vocabulary terms simply ignores those terms.
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Build the vocabulary and IDF table from a batch of documents.
    pub fn fit(documents: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for tokens in &tokenized {
            let mut seen: Vec<usize> = Vec::new();
            for token in tokens {
                let index = match vocabulary.get(token) {
                    Some(&i) => i,
                    None => {
                        let i = vocabulary.len();
                        vocabulary.insert(token.clone(), i);
                        document_frequency.push(0);
                        i
                    }
                };
                if !seen.contains(&index) {
                    seen.push(index);
                    document_frequency[index] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Produce the sparse TF-IDF vector for a document.
    ///
    /// A document with no in-vocabulary tokens yields the empty (zero) vector.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(document) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        for (index, weight) in counts.iter_mut() {
            *weight *= self.idf[*index];
        }
        counts
    }
}

/// Cosine similarity between two sparse vectors, clamped to [0, 1].
///
/// Defined as 0.0 when either vector is the zero vector.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a < f64::EPSILON || norm_b < f64::EPSILON {
        return 0.0;
    }

    // Iterate the smaller map against the larger one
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(index, wa)| large.get(index).map(|wb| wa * wb))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_have_similarity_one() {
        let docs = vec![
            "sunset at the beach".to_string(),
            "sunset at the beach".to_string(),
        ];
        let vectorizer = TfIdfVectorizer::fit(&docs);
        let a = vectorizer.transform(&docs[0]);
        let b = vectorizer.transform(&docs[1]);
        let sim = cosine_similarity(&a, &b);
        assert!((sim - 1.0).abs() < 1e-9, "Expected ~1.0, got {sim}");
    }

    #[test]
    fn test_disjoint_documents_have_similarity_zero() {
        let docs = vec!["sunset beach".to_string(), "pizza night".to_string()];
        let vectorizer = TfIdfVectorizer::fit(&docs);
        let a = vectorizer.transform(&docs[0]);
        let b = vectorizer.transform(&docs[1]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_document_is_zero_vector() {
        let docs = vec!["sunset beach".to_string(), "".to_string()];
        let vectorizer = TfIdfVectorizer::fit(&docs);
        let empty = vectorizer.transform("");
        assert!(empty.is_empty());
        let other = vectorizer.transform(&docs[0]);
        assert_eq!(cosine_similarity(&empty, &other), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn test_rare_terms_outweigh_common_terms() {
        // "beach" appears in every document, "marathon" in one. With equal
        // term counts, the shared-rare-term pair must score higher than the
        // shared-common-term pair.
        let docs = vec![
            "beach marathon".to_string(),
            "beach marathon".to_string(),
            "beach pizza".to_string(),
            "beach night".to_string(),
        ];
        let vectorizer = TfIdfVectorizer::fit(&docs);
        let a = vectorizer.transform("marathon");
        let b = vectorizer.transform("beach");
        let rare = cosine_similarity(&a, &vectorizer.transform(&docs[0]));
        let common = cosine_similarity(&b, &vectorizer.transform(&docs[0]));
        assert!(
            rare > common,
            "Rare-term match ({rare}) should beat common-term match ({common})"
        );
    }

    #[test]
    fn test_out_of_vocabulary_terms_ignored() {
        let docs = vec!["sunset beach".to_string()];
        let vectorizer = TfIdfVectorizer::fit(&docs);
        let vec = vectorizer.transform("sunset spaceship");
        assert_eq!(vec.len(), 1, "Only 'sunset' is in the vocabulary");
    }

    #[test]
    fn test_vocabulary_size() {
        let docs = vec!["sunset beach sunset".to_string(), "beach pizza".to_string()];
        let vectorizer = TfIdfVectorizer::fit(&docs);
        assert_eq!(vectorizer.vocabulary_size(), 3);
    }
}
