pub mod compute;
pub mod evaluate;
pub mod tfidf;
pub mod token;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::config::VectorizerConfig;
use crate::error::DocumentError;
use crate::vectorizer::token::{has_terms, split_terms, TermFrequency};

/// Corpus model of reference documents
///
/// Owns the documents, their normalized term frequencies, the vocabulary
/// and the IDF table. Every successful `add_documents` recomputes the IDF
/// table over the whole document set.
///
/// Not synchronized. Callers sharing it across threads must serialize
/// mutation and scoring themselves.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
    /// raw documents in insertion order
    documents: Vec<String>,
    /// one normalized TF map per document, same order as `documents`
    documents_tf: Vec<TermFrequency>,
    /// distinct terms, first-seen order
    vocabulary: IndexSet<String>,
    /// IDF per vocabulary term
    idf_cache: IndexMap<String, f64>,
}

impl TfIdfVectorizer {
    /// Create an empty vectorizer splitting on a single space
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VectorizerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a vectorizer and add a first batch of documents
    pub fn with_documents<T: AsRef<str>>(documents: &[T], separator: &str) -> Result<Self, DocumentError> {
        let mut instance = Self::with_config(VectorizerConfig::new(separator));
        instance.add_documents(documents)?;
        Ok(instance)
    }

    /// Add a batch of documents
    ///
    /// The batch is validated before anything is stored. An empty batch fails
    /// with `EmptyInput` and leaves the store untouched. A document without terms
    /// fails with `InvalidDocument` and clears the whole store, including the
    /// documents added by earlier calls.
    ///
    /// # Arguments
    /// * `documents` - documents to append
    pub fn add_documents<T: AsRef<str>>(&mut self, documents: &[T]) -> Result<(), DocumentError> {
        if documents.is_empty() {
            return Err(DocumentError::EmptyInput);
        }

        let mut staged = Vec::with_capacity(documents.len());
        for (index, doc) in documents.iter().enumerate() {
            let doc = doc.as_ref();
            let terms = split_terms(doc, &self.config.separator);
            if !has_terms(&terms) {
                warn!(index, stored = self.documents.len(), "invalid document, clearing document store");
                self.clear();
                return Err(DocumentError::InvalidDocument {
                    index,
                    document: doc.to_string(),
                });
            }
            staged.push((doc.to_string(), TermFrequency::from_terms(&terms)));
        }

        for (doc, tf) in staged {
            for term in tf.terms() {
                if !self.vocabulary.contains(term) {
                    self.vocabulary.insert(term.to_string());
                }
            }
            self.documents.push(doc);
            self.documents_tf.push(tf);
        }
        self.re_calc_idf();

        debug!(
            added = documents.len(),
            doc_num = self.documents.len(),
            vocab_size = self.vocabulary.len(),
            "documents added"
        );
        Ok(())
    }

    /// Remove every document, TF map, vocabulary term and IDF entry
    pub fn clear(&mut self) {
        self.documents.clear();
        self.documents_tf.clear();
        self.vocabulary.clear();
        self.idf_cache.clear();
    }

    fn re_calc_idf(&mut self) {
        self.idf_cache = tfidf::idf_table(&self.vocabulary, &self.documents_tf);
    }
}

/// accessors
impl TfIdfVectorizer {
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    pub fn separator(&self) -> &str {
        &self.config.separator
    }

    /// Change the separator
    /// Documents already stored keep the terms they were split into.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.config.separator = separator.into();
        if !self.documents.is_empty() {
            debug!(
                separator = %self.config.separator,
                doc_num = self.documents.len(),
                "separator changed, stored documents are not re-tokenized"
            );
        }
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn documents_norm_term_frequency(&self) -> &[TermFrequency] {
        &self.documents_tf
    }

    /// Vocabulary in first-seen order
    pub fn documents_terms(&self) -> &IndexSet<String> {
        &self.vocabulary
    }

    pub fn documents_inverse_frequency(&self) -> &IndexMap<String, f64> {
        &self.idf_cache
    }

    /// IDF of a vocabulary term
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf_cache.get(term).copied()
    }

    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
