use rayon::prelude::*;

use crate::accumulator::{
    document::{Document, TokenId},
    weighting::Weighting,
    StatisticsAccumulator,
};

/// 並列処理
/// every element goes through `add` / `score`, so the locking is unchanged
impl<I, W> StatisticsAccumulator<I, W>
where
    I: TokenId,
    W: Weighting + Send + Sync,
{
    /// Add many documents in parallel
    /// Equivalent to calling `add` on each; the IDF table is not refreshed.
    pub fn add_all<D>(&self, docs: &[D])
    where
        D: Document<I> + Sync,
    {
        docs.par_iter()
            .with_min_len(self.config().par_min_len.max(1))
            .for_each(|doc| self.add(doc));
    }

    /// Score many documents in parallel
    ///
    /// # Returns
    /// * `Vec<Vec<f64>>` - scores per document, in the order of `docs`
    pub fn score_all<D>(&self, docs: &[D]) -> Vec<Vec<f64>>
    where
        D: Document<I> + Sync,
    {
        docs.par_iter()
            .with_min_len(self.config().par_min_len.max(1))
            .map(|doc| self.score(doc))
            .collect()
    }
}
