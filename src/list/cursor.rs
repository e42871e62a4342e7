//! The list's position handles.

use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{Error, Result};
use crate::iterator::reverse::Reverse;
use crate::iterator::{BidirectionalIterator, ForwardIterator};
use crate::list::{StrongLink, WeakLink};

/// A handle denoting one node of a [`List`].
///
/// A `Cursor` references its node without owning it and without borrowing
/// the list, so it can be held across structural mutations and passed back
/// into the list's operations ([`List::insert_after`], [`List::erase`],
/// the splice family) to name a position. It is created by the list's
/// factory methods ([`List::begin`], [`List::end`]) and by the operations
/// that return positions.
///
/// # Validity
///
/// A cursor is either valid at a live node or invalid, and once invalid it
/// never becomes valid again. It becomes invalid exactly when its node is
/// unlinked ([`List::pop_front`], [`List::pop_back`], [`List::erase`],
/// [`List::erase_range`], [`List::clear`], drop). Every operation on an
/// invalid cursor reports [`Error::Invalidated`] instead of touching
/// reclaimed memory.
///
/// Cursors whose nodes moved to another list wholesale, through
/// [`List::swap`] or the splice family, remain valid and afterwards belong
/// to the destination list.
///
/// # Examples
///
/// ```
/// use splice_list::{BidirectionalIterator, ForwardIterator, List};
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let mut it = list.begin();
/// it.advance().unwrap();
/// assert_eq!(it.get(), Ok(2));
/// it.retreat().unwrap();
/// assert_eq!(it.get(), Ok(1));
/// ```
///
/// [`List`]: crate::List
/// [`List::begin`]: crate::List::begin
/// [`List::end`]: crate::List::end
/// [`List::insert_after`]: crate::List::insert_after
/// [`List::erase`]: crate::List::erase
/// [`List::erase_range`]: crate::List::erase_range
/// [`List::pop_front`]: crate::List::pop_front
/// [`List::pop_back`]: crate::List::pop_back
/// [`List::clear`]: crate::List::clear
/// [`List::swap`]: crate::List::swap
/// [`Error::Invalidated`]: crate::Error::Invalidated
pub struct Cursor<T> {
    node: WeakLink<T>,
}

impl<T> Cursor<T> {
    /// A cursor referencing no node, as returned by [`List::begin`] and
    /// [`List::end`] on an empty list, and by [`List::erase`] at the tail.
    ///
    /// [`List::begin`]: crate::List::begin
    /// [`List::end`]: crate::List::end
    /// [`List::erase`]: crate::List::erase
    pub(crate) fn detached() -> Self {
        Self { node: Weak::new() }
    }

    pub(crate) fn at(node: &StrongLink<T>) -> Self {
        Self {
            node: Rc::downgrade(node),
        }
    }

    /// Whether the cursor currently references a live node.
    pub fn is_valid(&self) -> bool {
        self.node.strong_count() > 0
    }

    pub(crate) fn node(&self) -> Result<StrongLink<T>> {
        self.node.upgrade().ok_or(Error::Invalidated)
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node.ptr_eq(&other.node)
    }
}

impl<T> Eq for Cursor<T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.upgrade() {
            Some(node) => f.debug_tuple("Cursor").field(&node.borrow().value).finish(),
            None => f.write_str("Cursor(<invalid>)"),
        }
    }
}

impl<T> ForwardIterator for Cursor<T> {
    type Item = T;

    fn get(&self) -> Result<T>
    where
        T: Clone,
    {
        Ok(self.node()?.borrow().value.clone())
    }

    fn set(&mut self, value: T) -> Result<()> {
        self.node()?.borrow_mut().value = value;
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        let node = self.node()?;
        let next = node.borrow().next.clone().ok_or(Error::OutOfBounds)?;
        self.node = Rc::downgrade(&next);
        Ok(())
    }

    fn has_next(&self) -> bool {
        self.node()
            .map_or(false, |node| node.borrow().next.is_some())
    }

    fn duplicate(&self) -> Self {
        self.clone()
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

impl<T> BidirectionalIterator for Cursor<T> {
    fn retreat(&mut self) -> Result<()> {
        let node = self.node()?;
        let prev = node.borrow().prev.upgrade().ok_or(Error::OutOfBounds)?;
        self.node = Rc::downgrade(&prev);
        Ok(())
    }

    fn has_previous(&self) -> bool {
        self.node()
            .map_or(false, |node| node.borrow().prev.strong_count() > 0)
    }
}

/// The positions a [`List`] accepts as anchor arguments: a plain
/// [`Cursor`] or a [`Reverse`] adapter over one. Mutating operations
/// unwrap a reverse position down to the node it denotes.
///
/// [`List`]: crate::List
pub trait ListPosition<T> {
    /// The underlying forward cursor.
    fn as_cursor(&self) -> &Cursor<T>;
}

impl<T> ListPosition<T> for Cursor<T> {
    fn as_cursor(&self) -> &Cursor<T> {
        self
    }
}

impl<T> ListPosition<T> for Reverse<Cursor<T>> {
    fn as_cursor(&self) -> &Cursor<T> {
        self.inner()
    }
}
