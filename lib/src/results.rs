use crate::code::{Code, CODE_LENGTH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indicates that an error occurred while building a code or playing a game.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum MastermindError {
    /// Indicates that a candidate code had the wrong number of symbols. Contains the
    /// length that was given.
    #[error("Code must be {expected} characters long, but was {0}.", expected = CODE_LENGTH)]
    WrongLength(usize),
    /// Indicates that a candidate code repeated the given symbol.
    #[error("Code must contain unique characters, but '{0}' is repeated.")]
    DuplicateSymbol(char),
    /// Indicates that a candidate code contained a symbol outside the valid alphabet.
    #[error("Code contains invalid character '{0}'. Only digits from '0' to '8' are allowed.")]
    InvalidSymbol(char),
    /// Indicates that a game was configured with no attempts.
    #[error("The number of attempts must be a positive integer.")]
    NonPositiveAttempts,
    /// Indicates that a guess was submitted to a game that has already finished.
    #[error("The game is already over.")]
    GameOver,
}

impl MastermindError {
    /// Returns `true` iff this error came from validating a candidate code.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            MastermindError::WrongLength(_)
                | MastermindError::DuplicateSymbol(_)
                | MastermindError::InvalidSymbol(_)
        )
    }
}

/// The result of comparing a guess against the secret code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessOutcome {
    /// The number of positions where the guess has the same symbol as the secret.
    pub exact_matches: usize,
    /// The number of guess symbols that are in the secret, but at a different position.
    pub partial_matches: usize,
}

impl GuessOutcome {
    pub fn new(exact_matches: usize, partial_matches: usize) -> GuessOutcome {
        GuessOutcome {
            exact_matches,
            partial_matches,
        }
    }

    /// Returns `true` iff every symbol of the guess was in the right place.
    pub fn is_win(&self) -> bool {
        self.exact_matches == CODE_LENGTH
    }
}

/// Where a game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The secret has not been found and attempts remain.
    InProgress,
    /// The secret was guessed.
    Won,
    /// All attempts were used without finding the secret.
    Lost,
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Code>),
    /// Indicates that the guesser failed to find the code, and provides the guesses that were
    /// given.
    Failure(Vec<Code>),
}
