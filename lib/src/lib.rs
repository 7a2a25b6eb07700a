#![cfg_attr(feature = "unstable", feature(test))]

//! Building blocks for Mastermind-style code-breaking games.
//!
//! A [`Code`] is a sequence of [`CODE_LENGTH`] distinct symbols drawn from [`VALID_SYMBOLS`].
//! Scoring a guess against a secret with [`Code::check_guess`] yields a [`GuessOutcome`], and a
//! [`Game`] tracks the attempts and rounds of a single session.

mod code;
mod game;
mod results;
mod settings;

pub use code::*;
pub use game::*;
pub use results::*;
pub use settings::*;
