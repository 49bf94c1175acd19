//! Error types for the checked accumulator operations.

use thiserror::Error;

/// Numeric degeneracies surfaced by the `try_*` operations.
///
/// The unchecked operations never produce these; they pass non-finite
/// values through instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// IDF requested before any document was added.
    #[error("empty corpus: no documents have been added")]
    EmptyCorpus,

    /// Scoring a document with no tokens.
    #[error("empty document: cannot normalize term frequency by length 0")]
    EmptyDocument,

    /// The IDF table was derived from a different document count.
    #[error("stale idf: computed for {idf_doc_count} documents, corpus now holds {doc_count}")]
    StaleIdf { doc_count: u64, idf_doc_count: u64 },
}

/// Result type for accumulator operations.
pub type Result<T> = std::result::Result<T, StatsError>;
