use std::{fmt::Debug, hash::Hash};

use num::{PrimInt, Unsigned};

/// Token identifier bound
/// ids are assigned by an external vocabulary and only used as map keys
pub trait TokenId: PrimInt + Unsigned + Hash + Debug + Send + Sync {}

impl<T> TokenId for T where T: PrimInt + Unsigned + Hash + Debug + Send + Sync {}

/// A tokenized document
/// an ordered sequence of token ids, repeats allowed
///
/// # Examples
/// ```
/// use tf_idf_accumulator::Document;
/// let doc: Vec<u32> = vec![3, 1, 3];
/// assert_eq!(doc.ids(), &[3, 1, 3]);
/// ```
pub trait Document<I>
where
    I: TokenId,
{
    /// token ids in document order
    fn ids(&self) -> &[I];

    #[inline]
    fn len(&self) -> usize {
        self.ids().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }
}

impl<I> Document<I> for [I]
where
    I: TokenId,
{
    #[inline]
    fn ids(&self) -> &[I] {
        self
    }
}

impl<I, const LEN: usize> Document<I> for [I; LEN]
where
    I: TokenId,
{
    #[inline]
    fn ids(&self) -> &[I] {
        self
    }
}

impl<I> Document<I> for Vec<I>
where
    I: TokenId,
{
    #[inline]
    fn ids(&self) -> &[I] {
        self.as_slice()
    }
}

impl<I, D> Document<I> for &D
where
    I: TokenId,
    D: Document<I> + ?Sized,
{
    #[inline]
    fn ids(&self) -> &[I] {
        (**self).ids()
    }
}
