//! Errors raised by the collection types.

use thiserror::Error;

/// Failure of a [`Sequence`](super::Sequence) operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The operation needs at least one element but the sequence is empty.
    #[error("operation requires a non-empty sequence")]
    EmptyCollection,
}
