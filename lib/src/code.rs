use crate::results::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of symbols in every code.
pub const CODE_LENGTH: usize = 4;

/// The symbols that codes are built from.
pub const VALID_SYMBOLS: &str = "012345678";

const _: () = assert!(
    count_distinct_symbols(VALID_SYMBOLS.as_bytes()) >= CODE_LENGTH,
    "VALID_SYMBOLS must contain at least CODE_LENGTH distinct symbols"
);

/// A secret or guessed code: exactly [`CODE_LENGTH`] distinct symbols from [`VALID_SYMBOLS`].
///
/// A `Code` can only be obtained through validation ([`Code::create`]) or random generation,
/// so every instance upholds those rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Code {
    symbols: [char; CODE_LENGTH],
}

impl Code {
    /// Validates the given candidate and builds a code from it.
    ///
    /// The candidate is used as-is: it is not trimmed or case-folded. Checks are applied in
    /// order, and the first failure is returned:
    ///
    /// 1. [`MastermindError::WrongLength`] if it does not have exactly [`CODE_LENGTH`] characters.
    /// 2. [`MastermindError::DuplicateSymbol`] if any character appears more than once.
    /// 3. [`MastermindError::InvalidSymbol`] if any character is not in [`VALID_SYMBOLS`].
    ///
    /// ```
    /// use mastermind::*;
    ///
    /// let code = Code::create("0123")?;
    /// assert_eq!(code.to_string(), "0123");
    ///
    /// assert_eq!(Code::create("1123"), Err(MastermindError::DuplicateSymbol('1')));
    /// # Ok::<(), MastermindError>(())
    /// ```
    pub fn create(candidate: &str) -> Result<Code, MastermindError> {
        let length = candidate.chars().count();
        if length != CODE_LENGTH {
            return Err(MastermindError::WrongLength(length));
        }
        if let Some(repeated) = first_repeated_symbol(candidate) {
            return Err(MastermindError::DuplicateSymbol(repeated));
        }
        if let Some(invalid) = candidate
            .chars()
            .find(|symbol| !VALID_SYMBOLS.contains(*symbol))
        {
            return Err(MastermindError::InvalidSymbol(invalid));
        }

        let mut symbols = ['\0'; CODE_LENGTH];
        for (slot, symbol) in symbols.iter_mut().zip(candidate.chars()) {
            *slot = symbol;
        }
        Ok(Code { symbols })
    }

    /// Generates a uniformly random code using the thread-local random number generator.
    pub fn generate_random() -> Code {
        Code::generate_random_with(&mut rand::thread_rng())
    }

    /// Generates a uniformly random code, drawing symbols without replacement from
    /// [`VALID_SYMBOLS`] with the given random number generator.
    pub fn generate_random_with<R: Rng + ?Sized>(rng: &mut R) -> Code {
        let mut pool: Vec<char> = VALID_SYMBOLS.chars().collect();
        let (chosen, _) = pool.partial_shuffle(rng, CODE_LENGTH);
        let mut symbols = ['\0'; CODE_LENGTH];
        symbols.copy_from_slice(chosen);
        let code = Code { symbols };
        debug_assert!(Code::create(&code.to_string()).is_ok());
        code
    }

    /// Scores the given guess against this code, treating `self` as the secret.
    ///
    /// A guess symbol is an exact match if it sits at the same position in both codes, and a
    /// partial match if it is in this code at a different position. Because neither code
    /// repeats a symbol, each guess symbol can match at most one secret symbol.
    ///
    /// ```
    /// use mastermind::*;
    ///
    /// let secret = Code::create("0123")?;
    /// let outcome = secret.check_guess(&Code::create("0321")?);
    /// assert_eq!(outcome, GuessOutcome::new(1, 3));
    /// assert!(!outcome.is_win());
    /// # Ok::<(), MastermindError>(())
    /// ```
    pub fn check_guess(&self, guess: &Code) -> GuessOutcome {
        let exact_matches = self
            .symbols
            .iter()
            .zip(guess.symbols.iter())
            .filter(|(secret_symbol, guess_symbol)| secret_symbol == guess_symbol)
            .count();
        let shared_symbols = guess
            .symbols
            .iter()
            .filter(|symbol| self.symbols.contains(*symbol))
            .count();
        GuessOutcome::new(exact_matches, shared_symbols - exact_matches)
    }

    /// The symbols of this code, in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols.iter() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = MastermindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::create(s)
    }
}

impl TryFrom<&str> for Code {
    type Error = MastermindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Code::create(value)
    }
}

impl TryFrom<String> for Code {
    type Error = MastermindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Code::create(&value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

fn first_repeated_symbol(candidate: &str) -> Option<char> {
    candidate
        .chars()
        .enumerate()
        .find(|(index, symbol)| candidate.chars().take(*index).any(|other| other == *symbol))
        .map(|(_, symbol)| symbol)
}

const fn count_distinct_symbols(symbols: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < symbols.len() {
        let mut j = 0;
        let mut seen = false;
        while j < i {
            if symbols[j] == symbols[i] {
                seen = true;
            }
            j += 1;
        }
        if !seen {
            count += 1;
        }
        i += 1;
    }
    count
}
