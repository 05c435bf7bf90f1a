//! Singly-linked ordered sequence.
//!
//! A `Sequence` owns a forward chain of nodes reachable from its head. Each
//! node exclusively owns its successor, so the chain is acyclic and is freed
//! deterministically when a node is unlinked or the sequence is cleared.
//!
//! ## Complexity
//!
//! - Head access, `add_first`, `remove_first`, `len`: O(1)
//! - Tail access, `add_last`, `remove_last`: O(n), no tail pointer is kept
//! - `randomize`: O(n) plus one random draw per position past the first
//!
//! ## Empty sequences
//!
//! `get_first`, `get_last`, `remove_first` and `remove_last` return
//! [`SequenceError::EmptyCollection`] when there is nothing to act on.
//! They never hand back a placeholder value. `clear` and `randomize` are
//! no-ops on an empty sequence.

use std::fmt;
use std::iter::FusedIterator;

use rand::Rng;
use tracing::{debug, trace};

use super::error::SequenceError;

type Link<T> = Option<Box<Node<T>>>;

/// One link of the chain: a value and the owning pointer to its successor.
struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

/// Renders `[(value)->next value]`, or `[(value)->null]` for the last node.
impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[({})->", self.value)?;
        match self.next.as_deref() {
            Some(next) => write!(f, "{}", next.value)?,
            None => f.write_str("null")?,
        }
        f.write_str("]")
    }
}

/// Walk to the empty link past the last node.
fn tail_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Singly-linked ordered container.
///
/// Length is tracked alongside the chain and updated by every structural
/// mutation, so `len` never traverses.
///
/// Not synchronized: a sequence has a single owner, and mutation requires
/// `&mut self`.
///
/// ## Usage
///
/// ```
/// use solitaire_deck::collections::{Sequence, SequenceError};
/// use solitaire_deck::core::ShuffleRng;
///
/// let mut seq = Sequence::new();
/// seq.add_last(2);
/// seq.add_last(3);
/// seq.add_first(1);
///
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.get_first(), Ok(&1));
/// assert_eq!(seq.get_last(), Ok(&3));
/// assert_eq!(&*seq.to_array(), &[1, 2, 3]);
///
/// let mut rng = ShuffleRng::new(42);
/// seq.randomize(&mut rng);
/// assert_eq!(seq.len(), 3);
///
/// seq.clear();
/// assert_eq!(seq.remove_last(), Err(SequenceError::EmptyCollection));
/// ```
pub struct Sequence<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Sequence<T> {
    /// Create an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of elements in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert `value` as the new head.
    pub fn add_first(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Insert `value` as the new tail.
    ///
    /// Walks the whole chain to find the last node.
    pub fn add_last(&mut self, value: T) {
        *tail_link(&mut self.head) = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Value at the head.
    pub fn get_first(&self) -> Result<&T, SequenceError> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or(SequenceError::EmptyCollection)
    }

    /// Value at the tail. Walks the whole chain.
    pub fn get_last(&self) -> Result<&T, SequenceError> {
        self.iter().last().ok_or(SequenceError::EmptyCollection)
    }

    /// Unlink the head and return its value.
    pub fn remove_first(&mut self) -> Result<T, SequenceError> {
        let node = self.head.take().ok_or(SequenceError::EmptyCollection)?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    /// Unlink the tail and return its value.
    ///
    /// Walks to the second-to-last node and detaches its successor.
    pub fn remove_last(&mut self) -> Result<T, SequenceError> {
        let Self { head, len } = self;

        // Advance to the link that owns the last node.
        let mut link = head;
        for _ in 1..*len {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }

        let node = link.take().ok_or(SequenceError::EmptyCollection)?;
        *len -= 1;
        Ok(node.value)
    }

    /// Drop every element and reset the length to zero.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        trace!(len = self.len, "clearing sequence");
        self.unlink_all();
    }

    /// Reorder the elements in place with a backward Fisher–Yates pass.
    ///
    /// For each position `n` from `len - 1` down to `1`, a uniform index `k`
    /// in `0..=n` is drawn from `rng` and the values at `n` and `k` are
    /// swapped. Nodes keep their place in the chain; only the values they
    /// hold move. The resulting permutation is the one the same pass would
    /// produce over `to_array()` with the same random stream.
    ///
    /// Sequences with fewer than two elements are left untouched and draw
    /// nothing from `rng`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.len < 2 {
            return;
        }
        debug!(len = self.len, "randomizing sequence");

        let mut slots: Vec<&mut T> = self.iter_mut().collect();
        for n in (1..slots.len()).rev() {
            let k = rng.gen_range(0..=n);
            if k != n {
                let (front, back) = slots.split_at_mut(n);
                std::mem::swap(&mut *front[k], &mut *back[0]);
            }
        }
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Iterate mutably from head to tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    // Iterative so that long chains don't recurse through `Box` drops.
    fn unlink_all(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl<T: Clone> Sequence<T> {
    /// Copy the elements, head first, into a fixed-size slice.
    #[must_use]
    pub fn to_array(&self) -> Box<[T]> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Node-by-node dump: `{[(a)->b][(b)->c][(c)->null]}`, or `{}` when empty.
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut link = self.head.as_deref();
        while let Some(node) = link {
            write!(f, "{node}")?;
            link = node.next.as_deref();
        }
        f.write_str("}")
    }
}

impl<T> Extend<T> for Sequence<T> {
    /// Append every item in order, walking to the tail once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let Self { head, len } = self;
        let mut link = tail_link(head);
        for value in iter {
            link = &mut link.insert(Box::new(Node::new(value))).next;
            *len += 1;
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Borrowing iterator over a [`Sequence`], head first.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining = self.remaining.saturating_sub(1);
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Mutable iterator over a [`Sequence`], head first.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining = self.remaining.saturating_sub(1);
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`Sequence`], head first.
pub struct IntoIter<T>(Sequence<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Count nodes by walking the chain directly.
    fn reachable<T>(seq: &Sequence<T>) -> usize {
        let mut count = 0;
        let mut link = seq.head.as_deref();
        while let Some(node) = link {
            count += 1;
            link = node.next.as_deref();
        }
        count
    }

    fn seq_of(values: &[i32]) -> Sequence<i32> {
        let mut seq = Sequence::new();
        for &v in values {
            seq.add_last(v);
        }
        seq
    }

    #[test]
    fn test_new_is_empty() {
        let seq: Sequence<i32> = Sequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.head.is_none());
        assert_eq!(seq.to_array().len(), 0);
    }

    #[test]
    fn test_add_first() {
        let mut seq = Sequence::new();
        seq.add_first(1);
        assert_eq!(seq.get_first(), Ok(&1));
        seq.add_first(2);
        assert_eq!(seq.get_first(), Ok(&2));
        assert_eq!(seq.get_last(), Ok(&1));
        assert_eq!(seq.len(), 2);
        assert_eq!(reachable(&seq), 2);
    }

    #[test]
    fn test_add_last_preserves_order() {
        let seq = seq_of(&[1, 2, 3, 4]);
        assert_eq!(&*seq.to_array(), &[1, 2, 3, 4]);
        assert_eq!(seq.get_first(), Ok(&1));
        assert_eq!(seq.get_last(), Ok(&4));
    }

    #[test]
    fn test_add_last_on_empty_matches_add_first() {
        let mut a = Sequence::new();
        a.add_last(7);
        let mut b = Sequence::new();
        b.add_first(7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_get_on_empty() {
        let seq: Sequence<i32> = Sequence::new();
        assert_eq!(seq.get_first(), Err(SequenceError::EmptyCollection));
        assert_eq!(seq.get_last(), Err(SequenceError::EmptyCollection));
    }

    #[test]
    fn test_remove_first() {
        let mut seq = seq_of(&[1, 2, 3]);
        assert_eq!(seq.remove_first(), Ok(1));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get_first(), Ok(&2));
        assert_eq!(seq.remove_first(), Ok(2));
        assert_eq!(seq.remove_first(), Ok(3));
        assert!(seq.is_empty());
        assert_eq!(seq.remove_first(), Err(SequenceError::EmptyCollection));
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn test_remove_last() {
        let mut seq = seq_of(&[1, 2, 3]);
        assert_eq!(seq.remove_last(), Ok(3));
        assert_eq!(seq.len(), 2);
        assert_eq!(reachable(&seq), 2);
        assert_eq!(seq.get_last(), Ok(&2));
    }

    #[test]
    fn test_remove_last_twice_empties_pair() {
        let mut seq = seq_of(&[1, 2]);
        assert_eq!(seq.remove_last(), Ok(2));
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.remove_last(), Ok(1));
        assert_eq!(seq.len(), 0);
        assert!(seq.head.is_none());
        assert_eq!(seq.remove_last(), Err(SequenceError::EmptyCollection));
    }

    #[test]
    fn test_clear() {
        let mut seq = seq_of(&[1, 2, 3]);
        seq.clear();
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq.get_first(), Err(SequenceError::EmptyCollection));
        assert_eq!(seq.get_last(), Err(SequenceError::EmptyCollection));

        // Usable again afterwards
        seq.add_last(9);
        assert_eq!(&*seq.to_array(), &[9]);
    }

    #[test]
    fn test_randomize_empty_and_single() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let mut empty: Sequence<i32> = Sequence::new();
        empty.randomize(&mut rng);
        assert!(empty.is_empty());

        let mut single = seq_of(&[5]);
        single.randomize(&mut rng);
        assert_eq!(&*single.to_array(), &[5]);
    }

    #[test]
    fn test_randomize_matches_reference_pass() {
        let values: Vec<i32> = (0..20).collect();

        let mut expected = values.clone();
        let mut reference_rng = ChaCha8Rng::seed_from_u64(99);
        for n in (1..expected.len()).rev() {
            let k = reference_rng.gen_range(0..=n);
            expected.swap(n, k);
        }

        let mut seq: Sequence<i32> = values.into_iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        seq.randomize(&mut rng);

        assert_eq!(&*seq.to_array(), expected.as_slice());
    }

    #[test]
    fn test_randomize_keeps_nodes_in_place() {
        let mut seq = seq_of(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let before: Vec<*const Node<i32>> = {
            let mut ptrs = Vec::new();
            let mut link = seq.head.as_deref();
            while let Some(node) = link {
                ptrs.push(node as *const _);
                link = node.next.as_deref();
            }
            ptrs
        };

        seq.randomize(&mut ChaCha8Rng::seed_from_u64(3));

        let mut link = seq.head.as_deref();
        for ptr in before {
            let node = link.expect("chain shortened");
            assert!(std::ptr::eq(node, ptr));
            link = node.next.as_deref();
        }
        assert!(link.is_none());
    }

    #[test]
    fn test_display() {
        let empty: Sequence<i32> = Sequence::new();
        assert_eq!(empty.to_string(), "{}");

        let one = seq_of(&[1]);
        assert_eq!(one.to_string(), "{[(1)->null]}");

        let three = seq_of(&[1, 2, 3]);
        assert_eq!(three.to_string(), "{[(1)->2][(2)->3][(3)->null]}");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", seq_of(&[1, 2])), "[1, 2]");
    }

    #[test]
    fn test_iterators() {
        let mut seq = seq_of(&[1, 2, 3]);
        assert_eq!(seq.iter().len(), 3);
        assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        for v in &mut seq {
            *v *= 10;
        }
        assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);

        let owned: Vec<i32> = seq.into_iter().collect();
        assert_eq!(owned, vec![10, 20, 30]);
    }

    #[test]
    fn test_extend_appends() {
        let mut seq = seq_of(&[1, 2]);
        seq.extend([3, 4]);
        assert_eq!(seq.len(), 4);
        assert_eq!(reachable(&seq), 4);
        assert_eq!(&*seq.to_array(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = seq_of(&[1, 2, 3]);
        let mut copy = original.clone();
        copy.remove_first().unwrap();
        assert_eq!(original.len(), 3);
        assert_eq!(copy.len(), 2);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_long_chain_drops() {
        let seq: Sequence<u32> = (0..200_000).collect();
        assert_eq!(seq.len(), 200_000);
        drop(seq);
    }
}
