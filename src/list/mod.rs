use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::rc::{Rc, Weak};

use crate::error::{Error, Result};
use crate::iterator::reverse::Reverse;
use crate::iterator::ForwardIterator;
use crate::list::cursor::{Cursor, ListPosition};
use crate::list::iterator::Iter;

pub mod cursor;
pub mod iterator;

pub(crate) type StrongLink<T> = Rc<RefCell<Node<T>>>;
pub(crate) type WeakLink<T> = Weak<RefCell<Node<T>>>;

/// A single storage cell of the chain.
///
/// The chain is owned through the strong `next` links plus the list's
/// `head` and `tail` anchors; `prev` is a non-owning back-reference, so
/// the bidirectional links never form an ownership cycle.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: WeakLink<T>,
    pub(crate) next: Option<StrongLink<T>>,
}

impl<T> Node<T> {
    fn new(value: T, prev: WeakLink<T>, next: Option<StrongLink<T>>) -> StrongLink<T> {
        Rc::new(RefCell::new(Node { value, prev, next }))
    }
}

/// The `List` is a doubly linked list that supports inserting, removing
/// and splicing elements at any given position in constant time. In
/// compromise, accessing elements at an arbitrary position takes
/// *O*(*n*) time.
///
/// Positions are named by [`Cursor`]s, which are created by [`begin`],
/// [`end`] and the mutating operations, and stay usable across structural
/// changes to the list (see [`Cursor`] for the validity rules). Reverse
/// traversal wraps a cursor in [`Reverse`]; the mutating operations
/// accept both through the [`ListPosition`] bound.
///
/// A position passed to a mutating operation must belong to this list.
/// This is checked by a full walk in debug builds only; release builds
/// trust the caller, and a foreign position corrupts the bookkeeping of
/// the two lists involved (their memory stays intact).
///
/// # Naming Conventions
///
/// - `first..=last`: a closed range of list nodes, both inclusive. All
///   range operations ([`insert_after_range`], [`erase_range`],
///   [`splice_range`]) take closed ranges.
///
/// # Examples
///
/// ```
/// use splice_list::{ForwardIterator, List};
/// use std::iter::FromIterator;
///
/// let mut list = List::new();
/// list.push_back(10);
/// list.push_back(30);
///
/// let it = list.insert_after(&list.begin(), 20).unwrap();
/// assert_eq!(it.get(), Ok(20));
/// assert_eq!(Vec::from_iter(list), vec![10, 20, 30]);
/// ```
///
/// [`begin`]: List::begin
/// [`end`]: List::end
/// [`insert_after_range`]: List::insert_after_range
/// [`erase_range`]: List::erase_range
/// [`splice_range`]: List::splice_range
pub struct List<T> {
    head: Option<StrongLink<T>>,
    tail: Option<StrongLink<T>>,
    len: usize,
}

// The two linking primitives every structural mutation is built on.
impl<T> List<T> {
    /// Attaches `node` between the neighbours its `prev`/`next` links
    /// already name, updating `head`/`tail` where a link names none.
    fn link(&mut self, node: StrongLink<T>) {
        let prev = node.borrow().prev.upgrade();
        let next = node.borrow().next.clone();
        match prev {
            Some(prev) => prev.borrow_mut().next = Some(Rc::clone(&node)),
            None => self.head = Some(Rc::clone(&node)),
        }
        match next {
            Some(next) => next.borrow_mut().prev = Rc::downgrade(&node),
            None => self.tail = Some(node),
        }
        self.len += 1;
    }

    /// Detaches `node` from the chain, resetting its links and updating
    /// `head`/`tail` when it was a boundary node.
    fn unlink(&mut self, node: &StrongLink<T>) {
        let prev = node.borrow().prev.upgrade();
        let next = node.borrow().next.clone();
        match &prev {
            Some(prev) => prev.borrow_mut().next = next.clone(),
            None => self.head = next.clone(),
        }
        match next {
            Some(next) => {
                next.borrow_mut().prev = match &prev {
                    Some(prev) => Rc::downgrade(prev),
                    None => Weak::new(),
                }
            }
            None => self.tail = prev,
        }
        let mut node = node.borrow_mut();
        node.prev = Weak::new();
        node.next = None;
        self.len -= 1;
    }

    /// Translates a position into the node it denotes. Membership of
    /// `self` is a documented precondition, verified by a full walk in
    /// debug builds.
    fn resolve(&self, pos: &Cursor<T>) -> Result<StrongLink<T>> {
        let node = pos.node()?;
        debug_assert!(self.owns(&node), "position belongs to a different list");
        Ok(node)
    }

    fn owns(&self, node: &StrongLink<T>) -> bool {
        let mut current = self.head.clone();
        while let Some(candidate) = current {
            if Rc::ptr_eq(&candidate, node) {
                return true;
            }
            current = candidate.borrow().next.clone();
        }
        false
    }

    fn insert_after_node(&mut self, anchor: &StrongLink<T>, value: T) -> StrongLink<T> {
        let node = Node::new(value, Rc::downgrade(anchor), anchor.borrow().next.clone());
        self.link(Rc::clone(&node));
        node
    }

    fn insert_before_node(&mut self, anchor: &StrongLink<T>, value: T) -> StrongLink<T> {
        let node = Node::new(value, anchor.borrow().prev.clone(), Some(Rc::clone(anchor)));
        self.link(Rc::clone(&node));
        node
    }

    /// Unwraps an unlinked node into its value. After `unlink` the
    /// chain's strong links are gone and cursors only hold weak ones, so
    /// the caller's `Rc` is the last.
    fn take_value(node: StrongLink<T>) -> T {
        match Rc::try_unwrap(node) {
            Ok(cell) => cell.into_inner().value,
            Err(_) => unreachable!("unlinked node is still shared"),
        }
    }
}

impl<T> List<T> {
    /// Creates an empty `List`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a cursor at the first node, detached if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{ForwardIterator, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// assert_eq!(list.begin().get(), Ok(1));
    /// assert!(!List::<i32>::new().begin().is_valid());
    /// ```
    pub fn begin(&self) -> Cursor<T> {
        self.head.as_ref().map_or_else(Cursor::detached, Cursor::at)
    }

    /// Returns a cursor at the last node, detached if the list is empty.
    ///
    /// Unlike a past-the-end position, the cursor references a live
    /// node, so it can be read from and moved immediately.
    pub fn end(&self) -> Cursor<T> {
        self.tail.as_ref().map_or_else(Cursor::detached, Cursor::at)
    }

    /// Returns a reverse iterator at the last node, the starting point
    /// of a back-to-front traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{ForwardIterator, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([10, 20, 30]);
    /// let mut rev = list.reverse_begin();
    /// assert_eq!(rev.get(), Ok(30));
    /// rev.advance().unwrap();
    /// assert_eq!(rev.get(), Ok(20));
    /// ```
    pub fn reverse_begin(&self) -> Reverse<Cursor<T>> {
        Reverse::new(self.end())
    }

    /// Returns a reverse iterator at the first node, where a
    /// back-to-front traversal stops.
    pub fn reverse_end(&self) -> Reverse<Cursor<T>> {
        Reverse::new(self.begin())
    }

    /// Returns a copy of the first element, or `None` if the list is
    /// empty.
    pub fn peek_front(&self) -> Option<T>
    where
        T: Clone,
    {
        self.head.as_ref().map(|node| node.borrow().value.clone())
    }

    /// Returns a copy of the last element, or `None` if the list is
    /// empty.
    pub fn peek_back(&self) -> Option<T>
    where
        T: Clone,
    {
        self.tail.as_ref().map(|node| node.borrow().value.clone())
    }

    /// Returns a copy of the first element, failing with
    /// [`Error::EmptyContainer`] if there is none.
    ///
    /// [`Error::EmptyContainer`]: crate::Error::EmptyContainer
    pub fn front(&self) -> Result<T>
    where
        T: Clone,
    {
        self.peek_front().ok_or(Error::EmptyContainer)
    }

    /// Returns a copy of the last element, failing with
    /// [`Error::EmptyContainer`] if there is none.
    ///
    /// [`Error::EmptyContainer`]: crate::Error::EmptyContainer
    pub fn back(&self) -> Result<T>
    where
        T: Clone,
    {
        self.peek_back().ok_or(Error::EmptyContainer)
    }

    /// Replaces the first element, failing with
    /// [`Error::EmptyContainer`] if there is none.
    ///
    /// [`Error::EmptyContainer`]: crate::Error::EmptyContainer
    pub fn set_front(&mut self, value: T) -> Result<()> {
        match &self.head {
            Some(head) => {
                head.borrow_mut().value = value;
                Ok(())
            }
            None => Err(Error::EmptyContainer),
        }
    }

    /// Adds an element at the front of the list.
    ///
    /// Every pre-existing cursor stays valid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.peek_front(), Some(1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = Node::new(value, Weak::new(), self.head.clone());
        self.link(node);
    }

    /// Adds an element at the back of the list.
    ///
    /// Every pre-existing cursor stays valid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.peek_back(), Some(3));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let prev = self.tail.as_ref().map_or_else(Weak::new, Rc::downgrade);
        let node = Node::new(value, prev, None);
        self.link(node);
    }

    /// Removes the first element and returns it, failing with
    /// [`Error::EmptyContainer`] if the list is empty.
    ///
    /// Cursors at the removed node become invalid; all others stay
    /// valid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// [`Error::EmptyContainer`]: crate::Error::EmptyContainer
    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.clone().ok_or(Error::EmptyContainer)?;
        self.unlink(&head);
        Ok(Self::take_value(head))
    }

    /// Removes the last element and returns it, failing with
    /// [`Error::EmptyContainer`] if the list is empty.
    ///
    /// Cursors at the removed node become invalid; all others stay
    /// valid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// [`Error::EmptyContainer`]: crate::Error::EmptyContainer
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.clone().ok_or(Error::EmptyContainer)?;
        self.unlink(&tail);
        Ok(Self::take_value(tail))
    }

    /// Inserts `value` immediately after `pos` and returns a cursor at
    /// the new node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{ForwardIterator, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let it = list.insert_after(&list.begin(), 2).unwrap();
    /// assert_eq!(it.get(), Ok(2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert_after<P>(&mut self, pos: &P, value: T) -> Result<Cursor<T>>
    where
        P: ListPosition<T>,
    {
        let anchor = self.resolve(pos.as_cursor())?;
        let node = self.insert_after_node(&anchor, value);
        Ok(Cursor::at(&node))
    }

    /// Inserts `value` immediately before `pos` and returns a cursor at
    /// the new node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn insert_before<P>(&mut self, pos: &P, value: T) -> Result<Cursor<T>>
    where
        P: ListPosition<T>,
    {
        let anchor = self.resolve(pos.as_cursor())?;
        let node = self.insert_before_node(&anchor, value);
        Ok(Cursor::at(&node))
    }

    /// Copies every value in the closed range `first..=last` and inserts
    /// the copies immediately after `pos`, preserving their relative
    /// order.
    ///
    /// The source may be any [`ForwardIterator`] over the same element
    /// type, including a cursor of another list. A `last` that is not
    /// reachable from `first` fails with [`Error::OutOfBounds`] once the
    /// walk runs off the source, leaving the copies made so far in
    /// place.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*k*) time, where *k* is the
    /// length of the range.
    ///
    /// [`Error::OutOfBounds`]: crate::Error::OutOfBounds
    pub fn insert_after_range<P, I>(&mut self, pos: &P, first: &I, last: &I) -> Result<()>
    where
        P: ListPosition<T>,
        I: ForwardIterator<Item = T>,
        T: Clone,
    {
        let mut anchor = self.resolve(pos.as_cursor())?;
        let mut it = first.duplicate();
        while it != *last {
            anchor = self.insert_after_node(&anchor, it.get()?);
            it.advance()?;
        }
        self.insert_after_node(&anchor, last.get()?);
        Ok(())
    }

    /// Copies every value in the closed range `first..=last` and inserts
    /// the copies immediately before `pos`, preserving their relative
    /// order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*k*) time, where *k* is the
    /// length of the range.
    pub fn insert_before_range<P, I>(&mut self, pos: &P, first: &I, last: &I) -> Result<()>
    where
        P: ListPosition<T>,
        I: ForwardIterator<Item = T>,
        T: Clone,
    {
        // The anchor stays fixed, so each copy lands right before it,
        // after all the copies made earlier.
        let anchor = self.resolve(pos.as_cursor())?;
        let mut it = first.duplicate();
        while it != *last {
            self.insert_before_node(&anchor, it.get()?);
            it.advance()?;
        }
        self.insert_before_node(&anchor, last.get()?);
        Ok(())
    }

    /// Removes the node at `pos` and returns a cursor at the following
    /// node, detached if `pos` was the tail.
    ///
    /// Only cursors at the removed node become invalid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{ForwardIterator, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let after = list.erase(&list.begin()).unwrap();
    /// assert_eq!(after.get(), Ok(2));
    /// assert_eq!(Vec::from_iter(list), vec![2, 3]);
    /// ```
    pub fn erase<P>(&mut self, pos: &P) -> Result<Cursor<T>>
    where
        P: ListPosition<T>,
    {
        let node = self.resolve(pos.as_cursor())?;
        let next = node.borrow().next.clone();
        self.unlink(&node);
        Ok(next.as_ref().map_or_else(Cursor::detached, Cursor::at))
    }

    /// Removes every node in the closed range `first..=last`, front to
    /// back, and returns the cursor past `last`.
    ///
    /// Every cursor in the range becomes invalid. A `last` that does
    /// not follow `first` fails with [`Error::Invalidated`] once the
    /// walk runs off the tail, having removed `first..` entirely.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*k*) time, where *k* is the
    /// length of the range.
    ///
    /// [`Error::Invalidated`]: crate::Error::Invalidated
    pub fn erase_range(&mut self, first: &Cursor<T>, last: &Cursor<T>) -> Result<Cursor<T>> {
        let last_node = self.resolve(last)?;
        let mut current = first.clone();
        loop {
            let reached_last = Rc::ptr_eq(&self.resolve(&current)?, &last_node);
            current = self.erase(&current)?;
            if reached_last {
                return Ok(current);
            }
        }
    }

    /// Removes all elements.
    ///
    /// Every outstanding cursor becomes invalid. Nodes are reclaimed
    /// one at a time, so an arbitrarily long chain cannot overflow the
    /// stack. Idempotent.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Exchanges the contents of two lists.
    ///
    /// Cursors stay valid and afterwards belong to the other list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{ForwardIterator, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut a = List::from_iter([1]);
    /// let mut b = List::from_iter([2, 3]);
    /// let it = a.begin();
    /// a.swap(&mut b);
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(it.get(), Ok(1)); // now reachable through `b`
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves all elements of `other` to immediately after `pos`, leaving
    /// `other` empty.
    ///
    /// No nodes are created or destroyed, so every cursor into `other`
    /// stays valid and afterwards belongs to this list. Splicing an
    /// empty `other` changes nothing.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(['x', 'y']);
    /// let mut other = List::from_iter(['a', 'b']);
    /// list.splice(&list.begin(), &mut other).unwrap();
    /// assert_eq!(Vec::from_iter(list), vec!['x', 'a', 'b', 'y']);
    /// assert!(other.is_empty());
    /// ```
    pub fn splice<P>(&mut self, pos: &P, other: &mut Self) -> Result<()>
    where
        P: ListPosition<T>,
    {
        let anchor = self.resolve(pos.as_cursor())?;
        let (head, tail) = match (other.head.take(), other.tail.take()) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return Ok(()),
        };
        let after = anchor.borrow_mut().next.take();
        head.borrow_mut().prev = Rc::downgrade(&anchor);
        anchor.borrow_mut().next = Some(head);
        match after {
            Some(after) => {
                after.borrow_mut().prev = Rc::downgrade(&tail);
                tail.borrow_mut().next = Some(after);
            }
            None => self.tail = Some(tail),
        }
        self.len += mem::replace(&mut other.len, 0);
        Ok(())
    }

    /// Moves the single node at `it` out of `other` to immediately after
    /// `pos`.
    ///
    /// The node is relinked, not reallocated, so `it` stays valid and
    /// afterwards belongs to this list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn splice_one<P>(&mut self, pos: &P, other: &mut Self, it: &Cursor<T>) -> Result<()>
    where
        P: ListPosition<T>,
    {
        let anchor = self.resolve(pos.as_cursor())?;
        let node = other.resolve(it)?;
        other.unlink(&node);
        {
            let mut links = node.borrow_mut();
            links.prev = Rc::downgrade(&anchor);
            links.next = anchor.borrow().next.clone();
        }
        self.link(node);
        Ok(())
    }

    /// Moves the closed range `first..=last` out of `other` to
    /// immediately after `pos`, by relinking the four boundary nodes.
    ///
    /// The range length is not walked; the caller supplies it as
    /// `count`, which adjusts both length fields. Supplying a wrong
    /// `count` permanently corrupts the length bookkeeping of both
    /// lists (their chains stay intact); it is asserted against the
    /// source length in debug builds. Cursors into the range stay valid
    /// and afterwards belong to this list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::{ForwardIterator, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(['x', 'y']);
    /// let mut other = List::from_iter(['a', 'b', 'c']);
    /// let first = other.begin();
    /// let mut last = other.begin();
    /// last.advance().unwrap();
    ///
    /// list.splice_range(&list.begin(), &mut other, &first, &last, 2).unwrap();
    /// assert_eq!(Vec::from_iter(list), vec!['x', 'a', 'b', 'y']);
    /// assert_eq!(Vec::from_iter(other), vec!['c']);
    /// ```
    pub fn splice_range<P>(
        &mut self,
        pos: &P,
        other: &mut Self,
        first: &Cursor<T>,
        last: &Cursor<T>,
        count: usize,
    ) -> Result<()>
    where
        P: ListPosition<T>,
    {
        let anchor = self.resolve(pos.as_cursor())?;
        let front = other.resolve(first)?;
        let back = other.resolve(last)?;
        debug_assert!(count <= other.len, "count exceeds the source length");

        // Detach first..=last from `other`.
        let before = front.borrow().prev.upgrade();
        let after = back.borrow_mut().next.take();
        match &before {
            Some(before) => before.borrow_mut().next = after.clone(),
            None => other.head = after.clone(),
        }
        match after {
            Some(after) => {
                after.borrow_mut().prev = match &before {
                    Some(before) => Rc::downgrade(before),
                    None => Weak::new(),
                }
            }
            None => other.tail = before,
        }
        other.len = other.len.saturating_sub(count);

        // Attach it after `pos`.
        let anchor_next = anchor.borrow_mut().next.take();
        front.borrow_mut().prev = Rc::downgrade(&anchor);
        anchor.borrow_mut().next = Some(front);
        match anchor_next {
            Some(next) => {
                next.borrow_mut().prev = Rc::downgrade(&back);
                back.borrow_mut().next = Some(next);
            }
            None => self.tail = Some(back),
        }
        self.len += count;
        Ok(())
    }

    /// Moves all elements of `other` to the back of this list, leaving
    /// `other` empty.
    ///
    /// Unlike [`splice`](List::splice) this needs no anchor node, so it
    /// also works when this list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn append(&mut self, other: &mut Self) {
        let (head, tail) = match (other.head.take(), other.tail.take()) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return,
        };
        match self.tail.take() {
            Some(old_tail) => {
                head.borrow_mut().prev = Rc::downgrade(&old_tail);
                old_tail.borrow_mut().next = Some(head);
            }
            None => self.head = Some(head),
        }
        self.tail = Some(tail);
        self.len += mem::replace(&mut other.len, 0);
    }

    /// Moves all elements of `other` to the front of this list, leaving
    /// `other` empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn prepend(&mut self, other: &mut Self) {
        other.append(self);
        self.swap(other);
    }

    /// Visits every element front to back, by reference.
    ///
    /// The only borrowing traversal over elements that need not be
    /// `Clone`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(["a", "b"]);
    /// let mut joined = String::new();
    /// list.for_each(|s| joined.push_str(s));
    /// assert_eq!(joined, "ab");
    /// ```
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let mut current = self.head.clone();
        while let Some(node) = current {
            f(&node.borrow().value);
            current = node.borrow().next.clone();
        }
    }

    /// Returns an iterator over clones of the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut a = self.head.clone();
        let mut b = other.head.clone();
        loop {
            match (a, b) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    if x.borrow().value != y.borrow().value {
                        return false;
                    }
                    a = x.borrow().next.clone();
                    b = y.borrow().next.clone();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.for_each(|value| {
            list.entry(value);
        });
        list.finish()
    }
}
