use num::{Float, Num};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SimilarityError;

/// dot積
/// d(a, b) = Σ(a_i * b_i)
///
/// Fails with `DimensionMismatch` when the lengths differ.
pub fn product_dot<N>(a: &[N], b: &[N]) -> Result<N, SimilarityError>
where
    N: Num + Copy,
{
    check_dim(a, b)?;
    Ok(a.iter()
        .zip(b)
        .fold(N::zero(), |acc, (&va, &vb)| acc + va * vb))
}

/// Euclidean norm
/// ||v|| = sqrt(Σ(v_i^2))
pub fn vector_magnitude<N>(vec: &[N]) -> N
where
    N: Float,
{
    vec.iter()
        .fold(N::zero(), |acc, &v| acc + v * v)
        .sqrt()
}

/// コサイン類似度
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// Returns 0.0 when either vector has zero magnitude.
/// Fails with `DimensionMismatch` when the lengths differ.
pub fn cosine<N>(a: &[N], b: &[N]) -> Result<N, SimilarityError>
where
    N: Float,
{
    check_dim(a, b)?;
    let magnitudes = vector_magnitude(a) * vector_magnitude(b);
    if magnitudes > N::zero() {
        Ok(product_dot(a, b)? / magnitudes)
    } else {
        Ok(N::zero())
    }
}

#[inline]
fn check_dim<N>(a: &[N], b: &[N]) -> Result<(), SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            index: 0,
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(())
}

/// Similarity metrics for comparing a query vector with document vectors
///
/// Only cosine is implemented. Names that match no variant resolve to
/// `Cosine` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimilarityAlgorithm {
    /// Cosine similarity
    /// Considers only direction
    #[default]
    Cosine,
}

impl SimilarityAlgorithm {
    /// Resolve a metric by name, case-insensitively
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "cosine" => SimilarityAlgorithm::Cosine,
            other => {
                debug!(metric = other, "unknown similarity metric, using cosine");
                SimilarityAlgorithm::Cosine
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SimilarityAlgorithm::Cosine => "cosine",
        }
    }

    /// Compare two vectors of equal length
    pub fn compare<N>(&self, a: &[N], b: &[N]) -> Result<N, SimilarityError>
    where
        N: Float,
    {
        match self {
            SimilarityAlgorithm::Cosine => cosine(a, b),
        }
    }

    /// Compare `query` with every vector of `documents`, in order
    ///
    /// All or nothing: the first vector whose length differs from `query`
    /// fails the whole call and no partial result is returned.
    pub fn similarities<N, V>(&self, query: &[N], documents: &[V]) -> Result<Vec<N>, SimilarityError>
    where
        N: Float,
        V: AsRef<[N]>,
    {
        documents
            .iter()
            .enumerate()
            .map(|(index, doc)| {
                self.compare(query, doc.as_ref()).map_err(|err| match err {
                    SimilarityError::DimensionMismatch { expected, found, .. } => {
                        SimilarityError::DimensionMismatch { index, expected, found }
                    }
                })
            })
            .collect()
    }
}

impl From<&str> for SimilarityAlgorithm {
    fn from(name: &str) -> Self {
        SimilarityAlgorithm::from_name(name)
    }
}

/// Similarity of `query_vector` against each per-document vector, using the metric named `metric_name`
pub fn calculate_similarities<N, V>(
    query_vector: &[N],
    per_document_vectors: &[V],
    metric_name: &str,
) -> Result<Vec<N>, SimilarityError>
where
    N: Float,
    V: AsRef<[N]>,
{
    SimilarityAlgorithm::from_name(metric_name).similarities(query_vector, per_document_vectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude() {
        assert_eq!(vector_magnitude(&[1.0, 2.0, 3.0, 1.0, 1.0]), 4.0);
        assert_eq!(vector_magnitude::<f64>(&[]), 0.0);
        assert_eq!(vector_magnitude(&[3.0_f32, 4.0]), 5.0);
    }

    #[test]
    fn dot() {
        let a = [1.0, 2.0, 3.0, 1.0, 1.0];
        assert_eq!(product_dot(&a, &a), Ok(16.0));
        assert_eq!(product_dot(&[1_u32, 2], &[3, 4]), Ok(11));
        assert_eq!(
            product_dot(&a, &a[..4]),
            Err(SimilarityError::DimensionMismatch { index: 0, expected: 5, found: 4 })
        );
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let a = [1.0, 2.0, 3.0, 1.0, 1.0];
        assert_eq!(cosine(&a, &a), Ok(1.0));
        let b = [0.5, 0.5];
        assert!((cosine(&b, &b).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_is_symmetric() {
        let a = [0.2, 0.0, 1.5, 3.0];
        let b = [1.0, 0.7, 0.0, 2.5];
        assert_eq!(cosine(&a, &b), cosine(&b, &a));
        assert!((cosine(&[1.0, 0.0], &[1.0, 1.0]).unwrap() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn cosine_with_zero_vector_is_zero() {
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 2.0]), Ok(0.0));
        assert_eq!(cosine(&[1.0, 2.0], &[0.0, 0.0]), Ok(0.0));
        assert_eq!(cosine::<f64>(&[], &[]), Ok(0.0));
    }

    #[test]
    fn cosine_rejects_mismatched_lengths() {
        let long = [1.0; 6];
        for a_len in 0..=6 {
            for b_len in 0..=6 {
                let result = cosine(&long[..a_len], &long[..b_len]);
                if a_len == b_len {
                    assert!(result.is_ok());
                } else {
                    assert_eq!(
                        result,
                        Err(SimilarityError::DimensionMismatch { index: 0, expected: a_len, found: b_len })
                    );
                }
            }
        }
    }

    #[test]
    fn metric_names_fall_back_to_cosine() {
        assert_eq!(SimilarityAlgorithm::from_name("Cosine"), SimilarityAlgorithm::Cosine);
        assert_eq!(SimilarityAlgorithm::from_name("COSINE"), SimilarityAlgorithm::Cosine);
        assert_eq!(SimilarityAlgorithm::from("jaccard"), SimilarityAlgorithm::Cosine);
        assert_eq!(SimilarityAlgorithm::default().name(), "cosine");
    }

    #[test]
    fn similarities_in_document_order() {
        let query = vec![1.0, 0.0];
        let docs = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]];
        assert_eq!(calculate_similarities(&query, &docs, "cosine"), Ok(vec![1.0, 0.0, 0.0]));
        assert_eq!(calculate_similarities::<f64, Vec<f64>>(&query, &[], "cosine"), Ok(vec![]));
    }

    #[test]
    fn similarities_fail_as_a_batch() {
        let query = vec![1.0, 2.0];
        let docs = vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0], vec![1.0, 2.0]];
        assert_eq!(
            calculate_similarities(&query, &docs, "cosine"),
            Err(SimilarityError::DimensionMismatch { index: 1, expected: 2, found: 3 })
        );
    }
}
