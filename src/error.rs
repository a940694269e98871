use thiserror::Error;

/// Errors raised while adding reference documents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The batch contained no documents
    #[error("at least one document must be passed")]
    EmptyInput,
    /// A document produced no terms under the current separator.
    /// The whole document store has been cleared when this is returned.
    #[error("document error. document #{index} {document:?} is invalid")]
    InvalidDocument { index: usize, document: String },
}

/// Errors raised while scoring a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query must have at least one term")]
    EmptyQuery,
}

/// Errors raised while comparing vectors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    /// `index` is the position of the offending vector in a batch (0 for a single pair)
    #[error("vectors have different lengths: expected {expected}, found {found} (vector #{index})")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// Umbrella error for pipelines that chain several operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Similarity(#[from] SimilarityError),
}

pub type Result<T> = std::result::Result<T, Error>;
