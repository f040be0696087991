use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::error::{GameError, Result};

pub const DEFAULT_RANDOM_MOVE_PROBABILITY: f64 = 0.2;

/// How often the computer ignores its best move and plays a random free cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    #[serde(default = "default_random_move_probability")]
    pub random_move_probability: f64,
}

fn default_random_move_probability() -> f64 {
    DEFAULT_RANDOM_MOVE_PROBABILITY
}

impl DifficultyConfig {
    pub fn new(random_move_probability: f64) -> Result<Self> {
        let config = Self {
            random_move_probability,
        };
        config.validate().map_err(GameError::InvalidDifficulty)?;
        Ok(config)
    }

    /// Always plays the minimax-best move.
    pub fn perfect() -> Self {
        Self {
            random_move_probability: 0.0,
        }
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            random_move_probability: DEFAULT_RANDOM_MOVE_PROBABILITY,
        }
    }
}

impl Validate for DifficultyConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let p = self.random_move_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(format!(
                "random_move_probability must be between 0 and 1, got {}",
                p
            ));
        }
        Ok(())
    }
}
