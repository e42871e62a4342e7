//! This crate provides an STL-style doubly linked list together with a
//! hierarchy of iterator capability traits.
//!
//! The [`List`] allows inserting, removing and splicing elements at any
//! given position in constant time. In compromise, accessing elements at
//! an arbitrary position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use splice_list::{BidirectionalIterator, ForwardIterator, List};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([10, 20, 30]);
//!
//! let mut it = list.begin();
//! it.advance().unwrap();
//! assert_eq!(it.get(), Ok(20));
//! it.retreat().unwrap();
//! assert_eq!(it.get(), Ok(10));
//! it.advance().unwrap();
//!
//! let it = list.insert_after(&it, 25).unwrap();
//! assert_eq!(it.get(), Ok(25));
//!
//! let mut rev = list.reverse_begin();
//! assert_eq!(rev.get(), Ok(30));
//! rev.advance().unwrap();
//! assert_eq!(rev.get(), Ok(25));
//!
//! assert_eq!(Vec::from_iter(list), vec![10, 20, 25, 30]);
//! ```
//!
//! # Iterator capabilities
//!
//! Traversal is expressed through three nested traits, each a strict
//! extension of the previous one: [`ForwardIterator`],
//! [`BidirectionalIterator`] and [`RandomAccessIterator`]. Generic code
//! names the weakest capability it needs and then works over any
//! conforming source; [`Reverse`] flips the direction of any
//! bidirectional iterator without changing its capability level. The
//! list's [`Cursor`] is bidirectional; random access is the vocabulary
//! reserved for contiguous containers.
//!
//! Cursors do not borrow the list. They name positions, survive
//! structural mutations around them, and are handed back into the list's
//! operations ([`List::insert_after`], [`List::erase`], the splice
//! family) to say where to act. When the node a cursor names is removed,
//! the cursor becomes invalid and every operation on it reports
//! [`Error::Invalidated`]; see [`Cursor`] for the exact rules.
//!
//! # Memory layout
//!
//! The chain is owned through the strong forward links (and the list's
//! `head`/`tail` anchors); back-references and cursors are weak, so the
//! bidirectional links form no ownership cycle and a removed node is
//! reclaimed as soon as the chain lets go of it:
//!
//! ```text
//!          head                                      tail
//!           │ strong                                  │ strong
//!           ▼            next (strong)                ▼
//!        ┌─────┐ ──────────► ┌─────┐ ──────────► ┌─────┐
//!        │  A  │             │  B  │             │  C  │
//!        └─────┘ ◄────────── └─────┘ ◄────────── └─────┘
//!           ▲            prev (weak)
//!           │ weak
//!         Cursor
//! ```
//!
//! Splicing between lists relinks nodes instead of moving values, so it
//! is *O*(1) and keeps cursors into the moved range valid.
//!
//! Nodes are shared between the chain and the cursors, which is also why
//! the reading operations ([`ForwardIterator::get`], [`List::iter`],
//! [`List::peek_front`]) yield clones rather than references; use
//! [`List::for_each`] to visit elements of a non-`Clone` type by
//! reference.
//!
//! The list is a single-threaded container: it is neither `Send` nor
//! `Sync`.
//!
//! # Errors
//!
//! Fallible operations return [`Result`](crate::error::Result) with the
//! crate-wide [`Error`];
//! every failure is immediate and leaves the container unchanged.

pub mod error;
pub mod iterator;
pub mod list;

#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::iterator::reverse::Reverse;
#[doc(inline)]
pub use crate::iterator::{BidirectionalIterator, ForwardIterator, RandomAccessIterator};
#[doc(inline)]
pub use crate::list::cursor::{Cursor, ListPosition};
#[doc(inline)]
pub use crate::list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use crate::list::List;
