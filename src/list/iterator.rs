use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;

use crate::list::{List, StrongLink};

/// An iterator over clones of the elements of a `List`.
///
/// The nodes are shared with any outstanding cursors, so the iterator
/// cannot hand out plain references into them; it yields clones instead.
///
/// Though the `Iter` does not hold a reference into the chain, it
/// *borrows* (immutably) from the list, so a phantom marker of
/// `&'a List<T>` is added to protect the list from being mutated while
/// the iterator is alive.
///
/// # Examples
///
/// ```compile_fail
/// use splice_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
/// list.push_back(4); // compile error: `list` is still borrowed
/// assert_eq!(iter.next(), Some(1));
/// ```
pub struct Iter<'a, T> {
    front: Option<StrongLink<T>>,
    back: Option<StrongLink<T>>,
    remaining: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            front: list.head.clone(),
            back: list.tail.clone(),
            remaining: list.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: Clone> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.take()?;
        self.remaining -= 1;
        self.front = node.borrow().next.clone();
        let value = node.borrow().value.clone();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Clone> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.take()?;
        self.remaining -= 1;
        self.back = node.borrow().prev.upgrade();
        let value = node.borrow().value.clone();
        Some(value)
    }
}

impl<'a, T: Clone> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T: Clone> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: struct.List.html#method.into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T: Clone> IntoIterator for &'a List<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |elem| self.push_back(elem));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use std::iter::FromIterator;

    use crate::list::List;

    #[test]
    fn iter_walks_both_directions() {
        let list = List::from_iter(0..5);
        assert_eq!(Vec::from_iter(list.iter()), vec![0, 1, 2, 3, 4]);
        assert_eq!(Vec::from_iter(list.iter().rev()), vec![4, 3, 2, 1, 0]);

        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.len(), 3);

        // the list is untouched
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn iter_ends_cross_without_overlap() {
        let list = List::from_iter([1, 2]);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn into_iter_drains_both_ends() {
        let mut iter = List::from_iter(0..4).into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.size_hint(), (2, Some(2)));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn extend_and_from_iter() {
        let mut list = List::from_iter([1]);
        list.extend([2, 3]);
        list.extend([&4, &5]);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn equality_is_by_value_and_length() {
        let list = List::from_iter([1, 2, 3]);
        assert_eq!(list, List::from_iter([1, 2, 3]));
        assert_ne!(list, List::from_iter([1, 2]));
        assert_ne!(list, List::from_iter([1, 2, 4]));
    }

    #[test]
    fn clone_builds_fresh_nodes() {
        let list = List::from_iter([1, 2, 3]);
        let clone = list.clone();
        assert_eq!(list, clone);
        assert_ne!(list.begin(), clone.begin());
    }

    #[test]
    fn debug_formats_like_a_sequence() {
        let list = List::from_iter([1, 2]);
        assert_eq!(format!("{:?}", list), "[1, 2]");
        assert_eq!(format!("{:?}", List::<i32>::new()), "[]");
    }
}
