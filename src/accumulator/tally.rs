use indexmap::IndexMap;

use crate::accumulator::document::{Document, TokenId};

/// TermTally 構造体
/// per-document occurrence counter for token ids
///
/// Lives only for the duration of one call; it is never shared with the
/// accumulator, so counting here cannot leak into the document-frequency table.
///
/// # Examples
/// ```
/// use tf_idf_accumulator::TermTally;
/// let tally = TermTally::from_document(&[7u32, 3, 7]);
/// assert_eq!(tally.count(7), 2);
/// assert_eq!(tally.len(), 3);
/// assert_eq!(tally.distinct_len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TermTally<I>
where
    I: TokenId,
{
    counts: IndexMap<I, u64>,
    total: u64,
}

/// id の追加
impl<I> TermTally<I>
where
    I: TokenId,
{
    pub fn new() -> Self {
        TermTally {
            counts: IndexMap::new(),
            total: 0,
        }
    }

    /// Tally every id of a document
    ///
    /// # Arguments
    /// * `doc` - the document to count
    pub fn from_document<D>(doc: &D) -> Self
    where
        D: Document<I> + ?Sized,
    {
        let ids = doc.ids();
        let mut tally = TermTally {
            counts: IndexMap::with_capacity(ids.len()),
            total: 0,
        };
        tally.add_ids(ids);
        tally
    }

    #[inline]
    pub fn add_id(&mut self, id: I) -> &mut Self {
        *self.counts.entry(id).or_insert(0) += 1;
        self.total += 1;
        self
    }

    #[inline]
    pub fn add_ids(&mut self, ids: &[I]) -> &mut Self {
        for &id in ids {
            self.add_id(id);
        }
        self
    }
}

/// 情報取得
impl<I> TermTally<I>
where
    I: TokenId,
{
    /// occurrences of `id`, 0 when absent
    #[inline]
    pub fn count(&self, id: I) -> u64 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// number of ids counted, repeats included
    #[inline]
    pub fn len(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// number of distinct ids
    #[inline]
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Distinct ids in first-occurrence order
    ///
    /// # Returns
    /// * `impl Iterator<Item = I>` - each id exactly once
    #[inline]
    pub fn distinct(&self) -> impl Iterator<Item = I> + '_ {
        self.counts.keys().copied()
    }

    #[inline]
    pub fn contains(&self, id: I) -> bool {
        self.counts.contains_key(&id)
    }

    /// Count of the most frequent id, 0 for an empty tally
    #[inline]
    pub fn most_frequent_count(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// `count / len`
    /// an empty tally yields NaN (0 / 0), matching pass-through scoring
    #[inline]
    pub fn term_frequency(&self, id: I) -> f64 {
        self.count(id) as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeats_and_keeps_first_occurrence_order() {
        let tally = TermTally::from_document(&[4u32, 9, 4, 1, 9, 4]);
        assert_eq!(tally.count(4), 3);
        assert_eq!(tally.count(9), 2);
        assert_eq!(tally.count(1), 1);
        assert_eq!(tally.count(42), 0);
        assert_eq!(tally.len(), 6);
        assert_eq!(tally.distinct().collect::<Vec<_>>(), vec![4, 9, 1]);
        assert_eq!(tally.most_frequent_count(), 3);
    }

    #[test]
    fn term_frequency_is_count_over_length() {
        let tally = TermTally::from_document(&vec![1usize, 2, 1, 3]);
        assert!((tally.term_frequency(1) - 0.5).abs() < 1e-12);
        assert!((tally.term_frequency(3) - 0.25).abs() < 1e-12);
        assert_eq!(tally.term_frequency(99), 0.0);
    }

    #[test]
    fn empty_tally() {
        let tally: TermTally<u32> = TermTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.distinct_len(), 0);
        assert_eq!(tally.most_frequent_count(), 0);
        assert!(tally.term_frequency(0).is_nan());
    }

    #[test]
    fn incremental_adds_match_from_document() {
        let mut tally = TermTally::<u16>::new();
        tally.add_id(2).add_ids(&[2, 5]);
        assert!(tally.contains(5));
        assert_eq!(tally.count(2), 2);
        assert_eq!(tally.len(), 3);
    }
}
