//! This crate weighs reference documents and queries with TF-IDF
//! and ranks the documents against a query by cosine similarity.
//!
//! ```
//! use tfidf_rank::{score_query_standalone, calculate_similarities, TfIdfVectorizer};
//!
//! let docs = [
//!     "The game of life is a game of everlasting learning",
//!     "The unexamined life is not worth living",
//!     "Never stop learning",
//! ];
//! let vectorizer = TfIdfVectorizer::with_documents(&docs, " ").unwrap();
//!
//! let doc_vecs = vectorizer.score_query_against_documents("life learning").unwrap();
//! let query_vec = score_query_standalone("life learning", vectorizer.separator()).unwrap();
//! let similarities = calculate_similarities(&query_vec, &doc_vecs, "cosine").unwrap();
//! assert_eq!(similarities.len(), 3);
//! ```
pub mod config;
pub mod error;
pub mod vectorizer;

/// TF-IDF Vectorizer
/// The corpus model of this crate.
///
/// Internally, it holds:
/// - The reference documents, in insertion order
/// - A normalized term frequency map for each document
/// - The vocabulary (distinct terms in first-seen order)
/// - The IDF table over the vocabulary
///
/// Documents are added in batches with `add_documents`. Each batch is
/// validated as a whole; an invalid document clears the whole store.
/// The IDF table is recomputed from every stored document after each batch.
pub use vectorizer::TfIdfVectorizer;

/// Term Frequency structure
/// Normalized term frequency of one document or query.
pub use vectorizer::token::{split_terms, TermFrequency};

/// Inverse document frequency of a term over a set of term frequency maps.
/// Terms absent from every map weigh 1.0.
pub use vectorizer::tfidf::inverse_document_frequency;

/// Query scoring
/// - `score_query_standalone`: the query weighed against itself, used as the query-side vector
/// - `Hits` / `HitEntry`: ranked search results
pub use vectorizer::evaluate::scoring::{score_query_standalone, HitEntry, Hits};

/// Similarity Algorithm
/// Only cosine similarity is implemented. Unknown metric names fall back to it.
pub use vectorizer::compute::compare::{calculate_similarities, cosine, product_dot, vector_magnitude, SimilarityAlgorithm};

pub use config::VectorizerConfig;
pub use error::{DocumentError, Error, QueryError, Result, SimilarityError};
