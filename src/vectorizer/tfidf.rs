use indexmap::{IndexMap, IndexSet};

use crate::vectorizer::token::TermFrequency;

/// Inverse document frequency of `term` over `documents`
///
/// idf(t) = 1 + ln(N / n(t)), where n(t) counts the documents whose term map holds `t`.
/// A term found in no document gets 1.0.
///
/// # Arguments
/// * `term` - term to weigh, compared lowercased
/// * `documents` - term maps of the document set
pub fn inverse_document_frequency<'a, I>(term: &str, documents: I) -> f64
where
    I: IntoIterator<Item = &'a TermFrequency>,
{
    let term = term.to_lowercase();
    let mut doc_num = 0_u64;
    let mut doc_freq = 0_u64;
    for doc in documents {
        doc_num += 1;
        if doc.contains(&term) {
            doc_freq += 1;
        }
    }

    if doc_freq > 0 {
        1.0 + (doc_num as f64 / doc_freq as f64).ln()
    } else {
        1.0
    }
}

/// IDF of every vocabulary term, in vocabulary order
pub fn idf_table(vocabulary: &IndexSet<String>, documents: &[TermFrequency]) -> IndexMap<String, f64> {
    vocabulary
        .iter()
        .map(|term| (term.clone(), inverse_document_frequency(term, documents)))
        .collect()
}
