//! Runtime configuration for the deck demo.
//!
//! Settings come from defaults, builder methods, or the environment:
//! - `SOLITAIRE_SEED`: decimal `u64` seed for a reproducible shuffle
//! - `SOLITAIRE_LOG`: tracing filter used when `RUST_LOG` is unset

use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::ShuffleRng;

/// Environment variable holding the shuffle seed.
pub const SEED_VAR: &str = "SOLITAIRE_SEED";

/// Environment variable holding the fallback log filter.
pub const LOG_VAR: &str = "SOLITAIRE_LOG";

const DEFAULT_LOG_FILTER: &str = "solitaire_deck=info,solitaire=info";

/// Failure to build a [`DeckConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid shuffle seed {value:?}: {source}")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Deck configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Shuffle seed. `None` draws a fresh one per run.
    pub seed: Option<u64>,

    /// Tracing filter directives, used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DeckConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidSeed {
                    value: raw.clone(),
                    source,
                })?;
            config.seed = Some(seed);
        }

        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with custom log filter directives.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// RNG for this configuration: seeded when a seed is set, fresh otherwise.
    #[must_use]
    pub fn rng(&self) -> ShuffleRng {
        self.seed.map_or_else(ShuffleRng::from_entropy, ShuffleRng::new)
    }
}
