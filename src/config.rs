use serde::{Deserialize, Serialize};

/// Accumulator configuration
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulatorConfig {
    /// pre-sized capacity of the frequency and IDF tables
    pub initial_capacity: usize,
    /// minimum number of documents per rayon split in batch operations
    pub par_min_len: usize,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            par_min_len: 64,
        }
    }
}

impl AccumulatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// clamped to at least 1
    pub fn par_min_len(mut self, len: usize) -> Self {
        self.par_min_len = len.max(1);
        self
    }
}
