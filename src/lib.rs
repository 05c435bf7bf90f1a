//! # solitaire-deck
//!
//! A singly-linked sequence and the deck of playing cards it backs.
//!
//! ## Design Principles
//!
//! 1. **Owned Chain**: Every node owns its successor. No aliasing pointers,
//!    no cycles, deterministic destruction.
//!
//! 2. **Explicit Emptiness**: Reading or removing from an empty sequence is
//!    an error (`SequenceError::EmptyCollection`), never a placeholder value.
//!
//! 3. **Injected Randomness**: Shuffles take the RNG as an argument. A seeded
//!    `ShuffleRng` reproduces a shuffle exactly.
//!
//! ## Modules
//!
//! - `collections`: `Sequence` and its iterators
//! - `core`: Seeded RNG and configuration
//! - `cards`: Suits, cards, and the deck

pub mod cards;
pub mod collections;
pub mod core;

// Re-export commonly used types
pub use crate::cards::{Card, CardDeck, CardError, Suit};
pub use crate::collections::{Sequence, SequenceError};
pub use crate::core::{ConfigError, DeckConfig, ShuffleRng, ShuffleRngState};
