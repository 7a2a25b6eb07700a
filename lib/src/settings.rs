use crate::results::*;

/// The number of attempts a game allows when none is configured.
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// Configuration for a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    secret: Option<String>,
    attempts: u32,
}

impl GameSettings {
    /// Creates settings with the given secret and attempt budget.
    ///
    /// The secret is kept as given and only validated when a [`crate::Game`] is created from
    /// these settings. If no secret is given, or it is empty, the game picks one at random.
    ///
    /// Returns [`MastermindError::NonPositiveAttempts`] if `attempts` is zero.
    pub fn new(secret: Option<String>, attempts: u32) -> Result<GameSettings, MastermindError> {
        if attempts == 0 {
            return Err(MastermindError::NonPositiveAttempts);
        }
        Ok(GameSettings {
            secret: secret.filter(|secret| !secret.is_empty()),
            attempts,
        })
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            secret: None,
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}
