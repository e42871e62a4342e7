//! Capability-typed iterator traits.
//!
//! Iterators are classified into three nested capability levels, each a
//! strict extension of the one before it:
//!
//! - [`ForwardIterator`]: read, write and move towards the back;
//! - [`BidirectionalIterator`]: additionally move towards the front;
//! - [`RandomAccessIterator`]: additionally jump by arbitrary offsets in
//!   constant time.
//!
//! A container exposes the deepest level its representation supports, and
//! generic code demands the shallowest level it needs, so an algorithm
//! written against [`ForwardIterator`] works unchanged over any source.
//! The [`Reverse`](reverse::Reverse) adapter turns any bidirectional
//! iterator into one that traverses the opposite direction at the same
//! capability level.
//!
//! # Equality
//!
//! Iterator equality is *identity*, not value equality: two iterators of
//! the same concrete kind compare equal through [`PartialEq`] iff they
//! reference the same position. Comparing across concrete kinds goes
//! through [`ForwardIterator::try_equals`], which reports
//! [`Error::TypeMismatch`] instead of silently answering `false`.
//!
//! [`Error::TypeMismatch`]: crate::Error::TypeMismatch

use std::any::Any;

use crate::error::Result;

pub mod reverse;

/// An iterator that can read, write and move towards the back of its
/// sequence.
///
/// Movement is bounded: the iterator always references a live position,
/// and [`advance`](ForwardIterator::advance) fails at the last one rather
/// than stepping past it. A failed movement leaves the iterator where it
/// was.
pub trait ForwardIterator: PartialEq {
    /// The element type of the underlying sequence.
    type Item;

    /// Returns a copy of the value at the current position.
    fn get(&self) -> Result<Self::Item>
    where
        Self::Item: Clone;

    /// Replaces the value at the current position.
    fn set(&mut self, value: Self::Item) -> Result<()>;

    /// Moves to the next position.
    ///
    /// Fails with [`Error::OutOfBounds`] at the last valid position.
    ///
    /// [`Error::OutOfBounds`]: crate::Error::OutOfBounds
    fn advance(&mut self) -> Result<()>;

    /// Whether [`advance`](ForwardIterator::advance) would succeed.
    fn has_next(&self) -> bool;

    /// Returns an independent iterator at the same position.
    ///
    /// Only the position is duplicated, never the underlying data; the
    /// copy moves without affecting `self`.
    fn duplicate(&self) -> Self
    where
        Self: Sized;

    /// Compares positions with an iterator of any concrete kind.
    ///
    /// Fails with [`Error::TypeMismatch`] when `other` is not of the same
    /// concrete kind as `self`.
    ///
    /// [`Error::TypeMismatch`]: crate::Error::TypeMismatch
    fn try_equals(&self, other: &dyn Any) -> Result<bool>
    where
        Self: Sized + 'static;
}

/// A [`ForwardIterator`] that can also move towards the front of its
/// sequence.
pub trait BidirectionalIterator: ForwardIterator {
    /// Moves to the previous position.
    ///
    /// Fails with [`Error::OutOfBounds`] at the first valid position.
    ///
    /// [`Error::OutOfBounds`]: crate::Error::OutOfBounds
    fn retreat(&mut self) -> Result<()>;

    /// Whether [`retreat`](BidirectionalIterator::retreat) would succeed.
    fn has_previous(&self) -> bool;
}

/// A [`BidirectionalIterator`] that can also jump by arbitrary offsets in
/// constant time.
pub trait RandomAccessIterator: BidirectionalIterator {
    /// Moves by `offset` positions, towards the back when positive and
    /// towards the front when negative.
    ///
    /// Fails with [`Error::OutOfBounds`] when the target position does
    /// not exist, leaving the iterator where it was.
    ///
    /// [`Error::OutOfBounds`]: crate::Error::OutOfBounds
    fn advance_by(&mut self, offset: isize) -> Result<()>;

    /// Returns an independent iterator `offset` positions away, leaving
    /// `self` untouched.
    fn plus(&self, offset: isize) -> Result<Self>
    where
        Self: Sized;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::any::Any;
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{BidirectionalIterator, ForwardIterator, RandomAccessIterator};
    use crate::error::{Error, Result};

    /// A random-access cursor over a shared vector, exercising the deepest
    /// capability level without a full dynamic-array container.
    pub(crate) struct VecCursor<T> {
        data: Rc<RefCell<Vec<T>>>,
        index: usize,
    }

    impl<T> VecCursor<T> {
        pub(crate) fn new(data: Vec<T>) -> Self {
            Self {
                data: Rc::new(RefCell::new(data)),
                index: 0,
            }
        }
    }

    impl<T> PartialEq for VecCursor<T> {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.data, &other.data) && self.index == other.index
        }
    }

    impl<T> ForwardIterator for VecCursor<T> {
        type Item = T;

        fn get(&self) -> Result<T>
        where
            T: Clone,
        {
            self.data
                .borrow()
                .get(self.index)
                .cloned()
                .ok_or(Error::Invalidated)
        }

        fn set(&mut self, value: T) -> Result<()> {
            match self.data.borrow_mut().get_mut(self.index) {
                Some(slot) => {
                    *slot = value;
                    Ok(())
                }
                None => Err(Error::Invalidated),
            }
        }

        fn advance(&mut self) -> Result<()> {
            self.advance_by(1)
        }

        fn has_next(&self) -> bool {
            self.index + 1 < self.data.borrow().len()
        }

        fn duplicate(&self) -> Self {
            Self {
                data: Rc::clone(&self.data),
                index: self.index,
            }
        }

        fn try_equals(&self, other: &dyn Any) -> Result<bool>
        where
            Self: Sized + 'static,
        {
            match other.downcast_ref::<Self>() {
                Some(other) => Ok(self == other),
                None => Err(Error::TypeMismatch),
            }
        }
    }

    impl<T> BidirectionalIterator for VecCursor<T> {
        fn retreat(&mut self) -> Result<()> {
            self.advance_by(-1)
        }

        fn has_previous(&self) -> bool {
            self.index > 0
        }
    }

    impl<T> RandomAccessIterator for VecCursor<T> {
        fn advance_by(&mut self, offset: isize) -> Result<()> {
            let target = (self.index as isize)
                .checked_add(offset)
                .ok_or(Error::OutOfBounds)?;
            if target < 0 || target as usize >= self.data.borrow().len() {
                return Err(Error::OutOfBounds);
            }
            self.index = target as usize;
            Ok(())
        }

        fn plus(&self, offset: isize) -> Result<Self> {
            let mut copy = self.duplicate();
            copy.advance_by(offset)?;
            Ok(copy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::VecCursor;
    use super::{BidirectionalIterator, ForwardIterator, RandomAccessIterator};
    use crate::error::Error;

    #[test]
    fn forward_movement_is_bounded() {
        let mut it = VecCursor::new(vec![10, 20]);
        assert!(it.has_next());
        it.advance().unwrap();
        assert!(!it.has_next());
        assert_eq!(it.advance(), Err(Error::OutOfBounds));
        assert_eq!(it.get(), Ok(20));
    }

    #[test]
    fn backward_movement_is_bounded() {
        let mut it = VecCursor::new(vec![10, 20]);
        assert!(!it.has_previous());
        assert_eq!(it.retreat(), Err(Error::OutOfBounds));
        it.advance().unwrap();
        it.retreat().unwrap();
        assert_eq!(it.get(), Ok(10));
    }

    #[test]
    fn set_writes_through() {
        let mut it = VecCursor::new(vec![1, 2]);
        it.set(9).unwrap();
        assert_eq!(it.get(), Ok(9));
        let mut copy = it.duplicate();
        copy.advance().unwrap();
        assert_eq!(copy.get(), Ok(2));
        assert_eq!(it.get(), Ok(9));
    }

    #[test]
    fn random_access_offsets() {
        let mut it = VecCursor::new(vec![10, 20, 30, 40]);
        it.advance_by(3).unwrap();
        assert_eq!(it.get(), Ok(40));
        it.advance_by(-2).unwrap();
        assert_eq!(it.get(), Ok(20));
        assert_eq!(it.advance_by(5), Err(Error::OutOfBounds));
        assert_eq!(it.get(), Ok(20));

        let ahead = it.plus(2).unwrap();
        assert_eq!(ahead.get(), Ok(40));
        assert_eq!(it.get(), Ok(20));
        assert_eq!(it.plus(-2).err(), Some(Error::OutOfBounds));
    }

    #[test]
    fn equality_is_positional() {
        let it = VecCursor::new(vec![1, 2, 3]);
        let same = it.duplicate();
        assert!(it == same);
        let moved = it.plus(1).unwrap();
        assert!(it != moved);
        assert_eq!(it.try_equals(&same), Ok(true));
        assert_eq!(it.try_equals(&moved), Ok(false));
    }
}
