pub mod batch;
pub mod document;
pub mod tally;
pub mod weighting;

use indexmap::{IndexMap, IndexSet};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::{
    accumulator::{
        document::{Document, TokenId},
        tally::TermTally,
        weighting::{ClassicTfIdf, Weighting},
    },
    config::AccumulatorConfig,
    error::{Result, StatsError},
};

/// Corpus statistics guarded as one unit
#[derive(Debug)]
struct Stats<I>
where
    I: TokenId,
{
    /// token id -> number of documents containing it
    doc_freq: IndexMap<I, u64>,
    /// token id -> idf, derived from `doc_freq`
    idf: IndexMap<I, f64>,
    /// documents added
    doc_count: u64,
    /// `doc_count` at the last idf recompute
    idf_doc_count: Option<u64>,
}

impl<I> Stats<I>
where
    I: TokenId,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            doc_freq: IndexMap::with_capacity(capacity),
            idf: IndexMap::with_capacity(capacity),
            doc_count: 0,
            idf_doc_count: None,
        }
    }

    fn recompute_idf<W: Weighting>(&mut self) {
        let Stats {
            doc_freq,
            idf,
            doc_count,
            idf_doc_count,
        } = self;
        // doc_freq entries only come from `add`, so every df here is > 0
        for (&id, &df) in doc_freq.iter() {
            idf.insert(id, W::idf(*doc_count, df));
        }
        *idf_doc_count = Some(*doc_count);
        debug!(
            doc_count = *doc_count,
            vocab = doc_freq.len(),
            "idf recomputed"
        );
    }

    /// missing idf is treated as 0.0
    #[inline]
    fn idf_or_zero(&self, id: I) -> f64 {
        self.idf.get(&id).copied().unwrap_or(0.0)
    }
}

/// TF-IDF statistics accumulator
///
/// Holds the document-frequency table, the IDF table derived from it and the
/// number of documents seen. Share it between threads with `Arc`; every
/// operation takes `&self`.
///
/// All three pieces of state sit behind a single `RwLock`: `add` and
/// `recompute_idf` hold the write guard for their whole update, `score` and
/// the accessors hold the read guard. `score` counts the queried document in a
/// call-local `TermTally` and never writes shared state.
///
/// `StatisticsAccumulator<I, W>` generic parameters:
/// - `I`: token id type (e.g. u32, u64, usize)
/// - `W`: TF / IDF formula (default `ClassicTfIdf`)
///
/// # Examples
/// ```
/// use tf_idf_accumulator::StatisticsAccumulator;
/// let acc: StatisticsAccumulator<u32> = StatisticsAccumulator::new();
/// acc.add(&[0u32, 1, 1]);
/// acc.add(&[0u32, 2]);
/// acc.recompute_idf();
/// assert_eq!(acc.doc_freq(1), 1);
/// let scores = acc.score(&[1u32, 2]);
/// assert_eq!(scores.len(), 2);
/// ```
#[derive(Debug)]
pub struct StatisticsAccumulator<I = usize, W = ClassicTfIdf>
where
    I: TokenId,
    W: Weighting,
{
    stats: RwLock<Stats<I>>,
    config: AccumulatorConfig,
    _marker: std::marker::PhantomData<W>,
}

impl<I, W> Default for StatisticsAccumulator<I, W>
where
    I: TokenId,
    W: Weighting,
{
    fn default() -> Self {
        Self::with_config(AccumulatorConfig::default())
    }
}

impl<I, W> StatisticsAccumulator<I, W>
where
    I: TokenId,
    W: Weighting,
{
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AccumulatorConfig) -> Self {
        Self {
            stats: RwLock::new(Stats::with_capacity(config.initial_capacity)),
            config,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn config(&self) -> &AccumulatorConfig {
        &self.config
    }

    /// Add a document
    /// each distinct id is counted once, however often it repeats
    ///
    /// # Arguments
    /// * `doc` - token ids of the document
    pub fn add<D>(&self, doc: &D)
    where
        D: Document<I> + ?Sized,
    {
        let distinct: IndexSet<I> = doc.ids().iter().copied().collect();
        let mut stats = self.stats.write();
        for &id in distinct.iter() {
            *stats.doc_freq.entry(id).or_insert(0) += 1;
        }
        stats.doc_count += 1;
        trace!(
            distinct = distinct.len(),
            doc_count = stats.doc_count,
            "document added"
        );
    }

    /// Recompute the whole IDF table from the current frequencies
    /// Not incremental: call it after a batch of `add` to refresh scores.
    ///
    /// Never fails. With no documents added the frequency table is empty, so
    /// nothing is written.
    pub fn recompute_idf(&self) {
        self.stats.write().recompute_idf::<W>();
    }

    /// `recompute_idf`, refusing an empty corpus
    pub fn try_recompute_idf(&self) -> Result<()> {
        let mut stats = self.stats.write();
        if stats.doc_count == 0 {
            return Err(StatsError::EmptyCorpus);
        }
        // checked and recomputed under the same guard
        stats.recompute_idf::<W>();
        Ok(())
    }

    /// Score a document against the current IDF table
    /// `score[i] = tf(doc[i]) * idf(doc[i])`, in input order
    ///
    /// The document is not added to the corpus. Ids without an IDF entry
    /// score 0.0. An empty document yields an empty vector.
    ///
    /// # Arguments
    /// * `doc` - token ids of the document
    ///
    /// # Returns
    /// * `Vec<f64>` - one score per token of `doc`
    pub fn score<D>(&self, doc: &D) -> Vec<f64>
    where
        D: Document<I> + ?Sized,
    {
        let ids = doc.ids();
        let tally = TermTally::from_document(ids);
        let stats = self.stats.read();
        trace!(
            len = ids.len(),
            distinct = tally.distinct_len(),
            "scoring document"
        );
        Self::score_with(&stats, &tally, ids)
    }

    /// `score`, refusing an empty document, an empty corpus or a stale IDF table
    pub fn try_score<D>(&self, doc: &D) -> Result<Vec<f64>>
    where
        D: Document<I> + ?Sized,
    {
        let ids = doc.ids();
        if ids.is_empty() {
            return Err(StatsError::EmptyDocument);
        }
        let tally = TermTally::from_document(ids);
        let stats = self.stats.read();
        if stats.doc_count == 0 {
            return Err(StatsError::EmptyCorpus);
        }
        if stats.idf_doc_count != Some(stats.doc_count) {
            return Err(StatsError::StaleIdf {
                doc_count: stats.doc_count,
                idf_doc_count: stats.idf_doc_count.unwrap_or(0),
            });
        }
        Ok(Self::score_with(&stats, &tally, ids))
    }

    #[inline]
    fn score_with(stats: &Stats<I>, tally: &TermTally<I>, ids: &[I]) -> Vec<f64> {
        let len = tally.len();
        ids.iter()
            .map(|&id| W::tf(tally.count(id), len) * stats.idf_or_zero(id))
            .collect()
    }
}

/// 参照用
impl<I, W> StatisticsAccumulator<I, W>
where
    I: TokenId,
    W: Weighting,
{
    /// Number of documents added
    pub fn doc_count(&self) -> u64 {
        self.stats.read().doc_count
    }

    /// Number of documents containing `id`, 0 when never seen
    pub fn doc_freq(&self, id: I) -> u64 {
        self.stats.read().doc_freq.get(&id).copied().unwrap_or(0)
    }

    /// IDF of `id` as of the last recompute
    pub fn idf(&self, id: I) -> Option<f64> {
        self.stats.read().idf.get(&id).copied()
    }

    /// Number of distinct ids seen across the corpus
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.stats.read().doc_freq.len()
    }

    /// true when no `add` happened since the last recompute
    pub fn is_idf_current(&self) -> bool {
        let stats = self.stats.read();
        stats.idf_doc_count == Some(stats.doc_count)
    }

    /// Copy of the document-frequency table, in first-seen order
    pub fn doc_freq_table(&self) -> IndexMap<I, u64> {
        self.stats.read().doc_freq.clone()
    }

    /// Copy of the IDF table, in first-seen order
    pub fn idf_table(&self) -> IndexMap<I, f64> {
        self.stats.read().idf.clone()
    }
}
