//! Session configuration.

use serde::{Deserialize, Serialize};

/// Which back row a new configuration deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupMode {
    /// One king, one queen, two each of rook, bishop and knight, shuffled.
    #[default]
    Standard,
    /// Eight independent random draws over all five kinds.
    Unlimited,
}

/// Settings a front-end may persist between runs. Game state is not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub setup: SetupMode,
    /// Fixed RNG seed for reproducible setups; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn standard() -> Self {
        SessionConfig {
            setup: SetupMode::Standard,
            seed: None,
        }
    }

    pub fn unlimited() -> Self {
        SessionConfig {
            setup: SetupMode::Unlimited,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
