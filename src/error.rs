//! The failure conditions shared by the containers and their iterators.
//!
//! Every failure is immediate and local: no operation retries, and a
//! mutating operation that reports an error has left the container
//! unchanged.

/// The error type of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A boundary element of an empty container was queried or removed.
    #[error("container is empty")]
    EmptyContainer,
    /// An iterator was asked to move past the boundary of its sequence,
    /// or an offset could not be applied.
    #[error("iterator cannot move past the boundary of its sequence")]
    OutOfBounds,
    /// The node an iterator referenced has been unlinked and reclaimed.
    #[error("iterator no longer references a live node")]
    Invalidated,
    /// Two iterators of different concrete kinds were compared.
    #[error("iterators of different concrete kinds cannot be compared")]
    TypeMismatch,
}

/// A specialized `Result` whose error defaults to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
