//! Core support types: seeded RNG and configuration.

pub mod config;
pub mod rng;

pub use config::{ConfigError, DeckConfig};
pub use rng::{ShuffleRng, ShuffleRngState};
