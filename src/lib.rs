/// This crate keeps TF-IDF statistics over a stream of tokenized documents.
pub mod accumulator;
pub mod config;
pub mod error;

/// Statistics Accumulator
/// The top-level struct of this crate.
/// It ingests documents given as token-id sequences, derives IDF values from
/// the observed document frequencies, and scores documents against them.
///
/// Internally, it holds:
/// - The document-frequency table (token id -> number of documents)
/// - The IDF table derived from it
/// - The number of documents added
///
/// `StatisticsAccumulator<I, W>` has the following generic parameters:
/// - `I`: Token id type (e.g., u32, u64, usize)
/// - `W`: TF / IDF formula (e.g., ClassicTfIdf)
///
/// # Thread Safety
/// All operations take `&self` and can be called concurrently.
/// The whole state is guarded by one `RwLock`.
///
/// # Degenerate input
/// `recompute_idf` and `score` pass non-finite values through instead of
/// failing; `try_recompute_idf` and `try_score` report them as `StatsError`.
pub use accumulator::StatisticsAccumulator;

/// Document Trait
/// An ordered sequence of token ids produced by an external vocabulary.
/// Implemented for slices, arrays and `Vec`.
pub use accumulator::document::{Document, TokenId};

/// Term Tally structure
/// Counts token occurrences within a single document.
/// Used for the TF part of scoring.
pub use accumulator::tally::TermTally;

/// TF IDF Formula Trait
/// Defines how TF and IDF values are computed.
/// `ClassicTfIdf` is the default: `tf = count / len`, `idf = ln(n / df)`.
pub use accumulator::weighting::{ClassicTfIdf, Weighting};

/// Accumulator Configuration
pub use config::AccumulatorConfig;

/// Errors of the checked operations
pub use error::{Result, StatsError};
