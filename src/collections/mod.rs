//! Ordered containers.
//!
//! ## Key Types
//!
//! - `Sequence`: singly-linked list with O(1) head access and an in-place shuffle
//! - `Iter`, `IterMut`, `IntoIter`: head-to-tail traversal
//! - `SequenceError`: returned when an operation needs a non-empty sequence

pub mod error;
pub mod sequence;

pub use error::SequenceError;
pub use sequence::{IntoIter, Iter, IterMut, Sequence};
