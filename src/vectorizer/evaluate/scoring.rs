use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{QueryError, Result};
use crate::vectorizer::compute::compare::SimilarityAlgorithm;
use crate::vectorizer::tfidf::inverse_document_frequency;
use crate::vectorizer::token::{has_terms, split_terms, TermFrequency};
use crate::vectorizer::TfIdfVectorizer;

/// One ranked document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitEntry {
    /// document insertion index
    pub index: usize,
    pub score: f64,
}

/// Structure to store search results
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Build hits from scores in document order
    pub fn from_scores(scores: Vec<f64>) -> Self {
        Hits {
            list: scores
                .into_iter()
                .enumerate()
                .map(|(index, score)| HitEntry { index, score })
                .collect(),
        }
    }

    /// Sort results by descending score
    /// Ties keep document order
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.list.retain(|hit| !hit.score.is_nan());
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Sort results by ascending score
    pub fn sort_by_score_rev(&mut self) -> &mut Self {
        self.list.retain(|hit| !hit.score.is_nan());
        self.list.sort_by(|a, b| a.score.total_cmp(&b.score));
        self
    }

    /// First `n` entries in the current order
    pub fn top(&self, n: usize) -> &[HitEntry] {
        &self.list[..n.min(self.list.len())]
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    #{}: {:.6}", hit.index, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hit in &self.list {
            writeln!(f, "#{}\t{:.6}", hit.index, hit.score)?;
        }
        Ok(())
    }
}

/// split a query and reject it when it has no term
fn query_terms(query: &str, separator: &str) -> std::result::Result<Vec<String>, QueryError> {
    let terms = split_terms(query, separator);
    if !has_terms(&terms) {
        return Err(QueryError::EmptyQuery);
    }
    Ok(terms)
}

/// TF-IDF vector of a query taken as the only document of its own corpus
///
/// Every term is present in that one-document corpus, so its IDF is always
/// 1.0 and the result is the query's normalized term frequency, one entry per
/// query term in query order.
/// This differs from `score_query_against_documents`, where a term unknown to
/// the corpus weighs 0.0.
pub fn score_query_standalone(query: &str, separator: &str) -> std::result::Result<Vec<f64>, QueryError> {
    let terms = query_terms(query, separator)?;
    let query_tf = TermFrequency::from_terms(&terms);
    let corpus = std::slice::from_ref(&query_tf);

    Ok(terms
        .iter()
        .map(|term| query_tf.tf(term) * inverse_document_frequency(term, corpus))
        .collect())
}

impl TfIdfVectorizer {
    /// TF-IDF of each query term for each document
    ///
    /// Returns one vector per document in insertion order, each holding one
    /// score per query term in query order (repeated terms repeat).
    /// A term missing from a document scores tf 0.0; a term missing from the
    /// whole corpus has idf 0.0.
    pub fn score_query_against_documents(&self, query: &str) -> std::result::Result<Vec<Vec<f64>>, QueryError> {
        let terms = query_terms(query, self.separator())?;
        trace!(terms = terms.len(), doc_num = self.doc_num(), "scoring query");

        Ok(self
            .documents_tf
            .iter()
            .map(|doc_tf| {
                terms
                    .iter()
                    .map(|term| {
                        let tf = doc_tf.tf(term);
                        let idf = self.idf_cache.get(term.as_str()).copied().unwrap_or(0.0);
                        tf * idf
                    })
                    .collect()
            })
            .collect())
    }

    /// Rank every document against `query`
    ///
    /// Compares the standalone query vector with each per-document vector
    /// and returns the hits sorted by descending score.
    pub fn search(&self, query: &str, algorithm: &SimilarityAlgorithm) -> Result<Hits> {
        let query_vec = score_query_standalone(query, self.separator())?;
        let doc_vecs = self.score_query_against_documents(query)?;
        let scores = algorithm.similarities(&query_vec, &doc_vecs)?;

        let mut hits = Hits::from_scores(scores);
        hits.sort_by_score();
        Ok(hits)
    }
}
