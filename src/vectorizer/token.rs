use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Split a text into lowercase terms
///
/// The text is lowercased first and then split on `separator`.
/// Empty fragments between consecutive separators are kept as terms.
/// An empty separator splits into single characters.
///
/// # Arguments
/// * `text` - document or query text
/// * `separator` - term separator
///
/// # Returns
/// * `Vec<String>` - terms in text order, duplicates kept
pub fn split_terms(text: &str, separator: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    if separator.is_empty() {
        lowered.chars().map(String::from).collect()
    } else {
        lowered.split(separator).map(str::to_string).collect()
    }
}

/// true if at least one term is non-empty
#[inline]
pub fn has_terms<T: AsRef<str>>(terms: &[T]) -> bool {
    terms.iter().any(|term| !term.as_ref().is_empty())
}

/// Normalized term frequency of one document
///
/// Holds `term -> occurrences / total terms` in first-occurrence order.
/// For a non-empty document the values sum to 1.0.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_tf: IndexMap<String, f64>,
    term_sum: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        Self {
            term_tf: IndexMap::new(),
            term_sum: 0,
        }
    }

    /// Build the frequency map of a term sequence
    ///
    /// Every occurrence adds `1 / n` to its term, so repeated terms accumulate
    /// through float addition rather than a single `count / n` division.
    pub fn from_terms<T: AsRef<str>>(terms: &[T]) -> Self {
        let mut term_tf: IndexMap<String, f64> = IndexMap::with_capacity(terms.len());
        let step = 1.0 / terms.len() as f64;
        for term in terms {
            *term_tf.entry(term.as_ref().to_string()).or_insert(0.0) += step;
        }
        Self {
            term_tf,
            term_sum: terms.len() as u64,
        }
    }

    /// Normalized frequency of `term`, 0.0 if absent
    #[inline]
    pub fn tf(&self, term: &str) -> f64 {
        self.term_tf.get(term).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.term_tf.contains_key(term)
    }

    /// Total number of terms the map was built from
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.term_sum
    }

    /// Number of distinct terms
    #[inline]
    pub fn len(&self) -> usize {
        self.term_tf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_tf.is_empty()
    }

    /// Distinct terms in first-occurrence order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_tf.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.term_tf.iter().map(|(term, &tf)| (term.as_str(), tf))
    }

    pub fn as_map(&self) -> &IndexMap<String, f64> {
        &self.term_tf
    }
}
