//! Playing cards and the deck built on [`Sequence`](crate::collections::Sequence).
//!
//! ## Key Types
//!
//! - `Suit`: the four suits, in deck build order
//! - `Card`: value 1..=13 plus suit, displayed as `"Ace of Clubs"`
//! - `CardDeck`: ordered, shuffleable pile of cards

pub mod card;
pub mod deck;

pub use card::{Card, CardError, Suit};
pub use deck::CardDeck;
