//! A deck of playing cards backed by a [`Sequence`].

use std::fmt;

use rand::Rng;
use tracing::debug;

use super::card::{Card, Suit};
use crate::collections::{Iter, Sequence};

/// Ordered pile of cards. Index 0 is the top of the deck.
///
/// ## Usage
///
/// ```
/// use solitaire_deck::cards::CardDeck;
/// use solitaire_deck::core::ShuffleRng;
///
/// let mut deck = CardDeck::full();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.cards().get_first().unwrap().to_string(), "Ace of Clubs");
///
/// deck.shuffle(&mut ShuffleRng::new(7));
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardDeck {
    cards: Sequence<Card>,
}

impl CardDeck {
    /// Number of cards in a full deck.
    pub const FULL_SIZE: usize = 52;

    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a full, unshuffled deck.
    #[must_use]
    pub fn full() -> Self {
        let mut deck = Self::new();
        deck.create_full_deck();
        deck
    }

    /// Replace the contents with the 52 standard cards.
    ///
    /// Suits follow [`Suit::ALL`], each running Ace to King.
    pub fn create_full_deck(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for value in Card::ACE..=Card::KING {
                if let Ok(card) = Card::new(value, suit) {
                    self.cards.add_last(card);
                }
            }
        }
        debug!(len = self.cards.len(), "built full deck");
    }

    /// Shuffle the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.randomize(rng);
        debug!(len = self.cards.len(), "shuffled deck");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from the top card down.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// The underlying sequence.
    #[must_use]
    pub fn cards(&self) -> &Sequence<Card> {
        &self.cards
    }

    /// Mutable access to the underlying sequence.
    pub fn cards_mut(&mut self) -> &mut Sequence<Card> {
        &mut self.cards
    }
}

impl From<Sequence<Card>> for CardDeck {
    fn from(cards: Sequence<Card>) -> Self {
        Self { cards }
    }
}

impl fmt::Display for CardDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cards, f)
    }
}

impl<'a> IntoIterator for &'a CardDeck {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Iter<'a, Card> {
        self.iter()
    }
}
