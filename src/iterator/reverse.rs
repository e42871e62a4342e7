//! A direction-swapping iterator adapter.

use std::any::Any;

use crate::error::{Error, Result};
use crate::iterator::{BidirectionalIterator, ForwardIterator, RandomAccessIterator};

/// An adapter that traverses the underlying sequence in the opposite
/// direction, at the same capability level as the iterator it wraps.
///
/// Reading and writing go straight through to the wrapped iterator; only
/// movement is mirrored, so `advance` retreats, `has_next` asks for a
/// predecessor, and a random-access offset is negated. Wrapping a reverse
/// iterator again restores the original direction.
///
/// # Examples
///
/// ```
/// use splice_list::{ForwardIterator, List, Reverse};
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([10, 20, 30]);
/// let mut rev = Reverse::new(list.end());
/// assert_eq!(rev.get(), Ok(30));
/// rev.advance().unwrap();
/// assert_eq!(rev.get(), Ok(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reverse<It> {
    it: It,
}

impl<It> Reverse<It> {
    /// Wraps an iterator, swapping its traversal direction.
    pub fn new(it: It) -> Self {
        Self { it }
    }

    /// Returns the wrapped iterator, giving up the adapter.
    pub fn into_inner(self) -> It {
        self.it
    }

    /// A reference to the wrapped iterator.
    pub fn inner(&self) -> &It {
        &self.it
    }
}

fn negated(offset: isize) -> Result<isize> {
    offset.checked_neg().ok_or(Error::OutOfBounds)
}

impl<It> ForwardIterator for Reverse<It>
where
    It: BidirectionalIterator,
{
    type Item = It::Item;

    fn get(&self) -> Result<Self::Item>
    where
        Self::Item: Clone,
    {
        self.it.get()
    }

    fn set(&mut self, value: Self::Item) -> Result<()> {
        self.it.set(value)
    }

    fn advance(&mut self) -> Result<()> {
        self.it.retreat()
    }

    fn has_next(&self) -> bool {
        self.it.has_previous()
    }

    fn duplicate(&self) -> Self {
        Self {
            it: self.it.duplicate(),
        }
    }

    fn try_equals(&self, other: &dyn Any) -> Result<bool>
    where
        Self: Sized + 'static,
    {
        match other.downcast_ref::<Self>() {
            Some(other) => Ok(self.it == other.it),
            None => Err(Error::TypeMismatch),
        }
    }
}

impl<It> BidirectionalIterator for Reverse<It>
where
    It: BidirectionalIterator,
{
    fn retreat(&mut self) -> Result<()> {
        self.it.advance()
    }

    fn has_previous(&self) -> bool {
        self.it.has_next()
    }
}

impl<It> RandomAccessIterator for Reverse<It>
where
    It: RandomAccessIterator,
{
    fn advance_by(&mut self, offset: isize) -> Result<()> {
        self.it.advance_by(negated(offset)?)
    }

    fn plus(&self, offset: isize) -> Result<Self> {
        Ok(Self {
            it: self.it.plus(negated(offset)?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Reverse;
    use crate::error::Error;
    use crate::iterator::testing::VecCursor;
    use crate::iterator::{BidirectionalIterator, ForwardIterator, RandomAccessIterator};

    #[test]
    fn movement_is_mirrored() {
        let base = VecCursor::new(vec![1, 2, 3]);
        let mut rev = Reverse::new(base.plus(2).unwrap());
        assert_eq!(rev.get(), Ok(3));
        assert!(rev.has_next());
        assert!(!rev.has_previous());

        rev.advance().unwrap();
        assert_eq!(rev.get(), Ok(2));
        rev.retreat().unwrap();
        assert_eq!(rev.get(), Ok(3));
        assert_eq!(rev.retreat(), Err(Error::OutOfBounds));
    }

    #[test]
    fn get_and_set_delegate_directly() {
        let mut rev = Reverse::new(VecCursor::new(vec![1, 2]));
        assert_eq!(rev.get(), Ok(1));
        rev.set(9).unwrap();
        assert_eq!(rev.into_inner().get(), Ok(9));
    }

    #[test]
    fn offsets_are_negated() {
        let base = VecCursor::new(vec![0, 1, 2, 3, 4]);
        let mut rev = Reverse::new(base.plus(4).unwrap());
        rev.advance_by(2).unwrap();
        assert_eq!(rev.get(), Ok(2));

        let ahead = rev.plus(1).unwrap();
        assert_eq!(ahead.get(), Ok(1));
        assert_eq!(rev.get(), Ok(2));

        rev.advance_by(-2).unwrap();
        assert_eq!(rev.get(), Ok(4));
        assert_eq!(rev.advance_by(-1), Err(Error::OutOfBounds));
        assert_eq!(rev.advance_by(isize::MIN), Err(Error::OutOfBounds));
    }

    #[test]
    fn double_reversal_restores_direction() {
        let base = VecCursor::new(vec![1, 2, 3]);
        let mut fwd = Reverse::new(Reverse::new(base));
        fwd.advance().unwrap();
        assert_eq!(fwd.get(), Ok(2));
    }

    #[test]
    fn try_equals_requires_matching_kinds() {
        let base = VecCursor::new(vec![1, 2]);
        let rev = Reverse::new(base.duplicate());
        assert_eq!(rev.try_equals(&Reverse::new(base.duplicate())), Ok(true));
        assert_eq!(rev.try_equals(&base), Err(Error::TypeMismatch));
        assert_eq!(base.try_equals(&rev), Err(Error::TypeMismatch));
    }
}
