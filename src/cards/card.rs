//! Playing card values.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card suits, in deck build order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Spades,
    Hearts,
}

impl Suit {
    /// Every suit, in the order a full deck is built.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
        };
        f.write_str(name)
    }
}

/// Failure to construct a [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card value {0} is outside {min}..={max}", min = Card::ACE, max = Card::KING)]
    InvalidValue(u8),
}

/// A single playing card.
///
/// Values run from 1 (Ace) to 13 (King). Deserialization applies the same
/// range check as [`Card::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRepr", into = "CardRepr")]
pub struct Card {
    value: u8,
    suit: Suit,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct CardRepr {
    value: u8,
    suit: Suit,
}

impl TryFrom<CardRepr> for Card {
    type Error = CardError;

    fn try_from(repr: CardRepr) -> Result<Self, CardError> {
        Card::new(repr.value, repr.suit)
    }
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        Self {
            value: card.value,
            suit: card.suit,
        }
    }
}

impl Card {
    pub const ACE: u8 = 1;
    pub const JACK: u8 = 11;
    pub const QUEEN: u8 = 12;
    pub const KING: u8 = 13;

    /// Create a card, rejecting values outside `ACE..=KING`.
    pub fn new(value: u8, suit: Suit) -> Result<Self, CardError> {
        if !(Self::ACE..=Self::KING).contains(&value) {
            return Err(CardError::InvalidValue(value));
        }
        Ok(Self { value, suit })
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

/// `"Ace of Hearts"`, `"2 of Diamonds"`, `"King of Spades"`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Self::ACE => write!(f, "Ace of {}", self.suit),
            Self::JACK => write!(f, "Jack of {}", self.suit),
            Self::QUEEN => write!(f, "Queen of {}", self.suit),
            Self::KING => write!(f, "King of {}", self.suit),
            n => write!(f, "{} of {}", n, self.suit),
        }
    }
}
