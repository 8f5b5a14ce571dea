//! Simulation settings read from the environment.

use skystones_core::{PlayerId, CELL_COUNT};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: invalid value '{value}'")]
    Invalid { var: &'static str, value: String },

    #[error("SKYSTONES_HAND_SIZE must be between 1 and {max}, got {got}")]
    HandSize { got: usize, max: usize },
}

/// How the two hands are built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deal {
    /// The fixed sixteen-card demo hands
    Demo,
    /// Cards drawn at random from the library
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub deal: Deal,
    pub seed: Option<u64>,
    pub first_player: PlayerId,
    pub hand_size: usize,
    pub library_path: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            deal: Deal::Demo,
            seed: None,
            first_player: PlayerId::Host,
            hand_size: CELL_COUNT / 2,
            library_path: None,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("SKYSTONES_DEAL") {
            let deal = value.trim().to_ascii_lowercase();
            config.deal = match deal.as_str() {
                "demo" => Deal::Demo,
                "random" => Deal::Random,
                _ => return Err(ConfigError::Invalid { var: "SKYSTONES_DEAL", value }),
            };
        }

        if let Some(value) = lookup("SKYSTONES_SEED") {
            let seed = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "SKYSTONES_SEED",
                value: value.clone(),
            })?;
            config.seed = Some(seed);
        }

        if let Some(value) = lookup("SKYSTONES_FIRST_PLAYER") {
            config.first_player = value.parse().map_err(|_| ConfigError::Invalid {
                var: "SKYSTONES_FIRST_PLAYER",
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup("SKYSTONES_HAND_SIZE") {
            let size: usize = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "SKYSTONES_HAND_SIZE",
                value: value.clone(),
            })?;
            if size == 0 || size > CELL_COUNT {
                return Err(ConfigError::HandSize {
                    got: size,
                    max: CELL_COUNT,
                });
            }
            config.hand_size = size;
        }

        config.library_path = lookup("SKYSTONES_LIBRARY").map(PathBuf::from);

        Ok(config)
    }
}
