use crate::code::*;
use crate::results::*;
use crate::settings::*;
use rand::Rng;
use tracing::debug;

/// Plays a game against the given secret, submitting each of `guesses` in turn until the game
/// ends or the guesses run out.
///
/// Guesses that are not valid codes are skipped without using up an attempt.
pub fn play_game<'a, I>(
    secret: Code,
    guesses: I,
    max_attempts: u32,
) -> Result<GameResult, MastermindError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut game = Game::new(secret, max_attempts)?;
    for guess in guesses {
        match game.submit_guess(guess) {
            Ok(_) => {}
            Err(error) if error.is_validation_error() => continue,
            Err(error) => return Err(error),
        }
        if game.status() != GameStatus::InProgress {
            break;
        }
    }
    if game.status == GameStatus::Won {
        return Ok(GameResult::Success(game.guesses));
    }
    Ok(GameResult::Failure(game.guesses))
}

/// A single game session: a secret code, plus the attempts and rounds used so far.
#[derive(Debug, Clone)]
pub struct Game {
    secret: Code,
    attempts_remaining: u32,
    round: u32,
    status: GameStatus,
    guesses: Vec<Code>,
}

impl Game {
    /// Creates a game with the given secret and attempt budget.
    ///
    /// Returns [`MastermindError::NonPositiveAttempts`] if `max_attempts` is zero.
    pub fn new(secret: Code, max_attempts: u32) -> Result<Game, MastermindError> {
        if max_attempts == 0 {
            return Err(MastermindError::NonPositiveAttempts);
        }
        Ok(Game {
            secret,
            attempts_remaining: max_attempts,
            round: 0,
            status: GameStatus::InProgress,
            guesses: Vec::new(),
        })
    }

    /// Creates a game from the given settings, generating a random secret with the thread-local
    /// random number generator if the settings don't provide one.
    ///
    /// Returns a validation error if the configured secret is not a valid code.
    pub fn from_settings(settings: &GameSettings) -> Result<Game, MastermindError> {
        Game::from_settings_with_rng(settings, &mut rand::thread_rng())
    }

    /// Same as [`Game::from_settings`], but draws any random secret from `rng`.
    pub fn from_settings_with_rng<R: Rng + ?Sized>(
        settings: &GameSettings,
        rng: &mut R,
    ) -> Result<Game, MastermindError> {
        let secret = match settings.secret() {
            Some(secret) => Code::create(secret)?,
            None => {
                debug!("No secret configured, generating one");
                Code::generate_random_with(rng)
            }
        };
        Game::new(secret, settings.attempts())
    }

    /// Validates the given input as a guess and scores it against the secret.
    ///
    /// An invalid guess returns the validation error and leaves the game untouched. A winning
    /// guess ends the game without using up an attempt. Any other guess uses one attempt and
    /// advances the round; the game is lost once no attempts remain.
    ///
    /// Returns [`MastermindError::GameOver`] if the game has already ended.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, MastermindError> {
        if self.status != GameStatus::InProgress {
            return Err(MastermindError::GameOver);
        }
        let guess = Code::create(input).map_err(|error| {
            debug!(round = self.round, %error, "Rejected guess");
            error
        })?;
        let outcome = self.secret.check_guess(&guess);
        self.guesses.push(guess);
        debug!(
            round = self.round,
            exact = outcome.exact_matches,
            partial = outcome.partial_matches,
            "Scored guess"
        );

        if outcome.is_win() {
            self.status = GameStatus::Won;
            return Ok(outcome);
        }

        self.attempts_remaining -= 1;
        self.round += 1;
        if self.attempts_remaining == 0 {
            self.status = GameStatus::Lost;
        }
        Ok(outcome)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The zero-based round that the next guess will be played in.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// The valid guesses submitted so far, in order.
    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    /// The secret code. Callers are expected to reveal this only once the game has ended.
    pub fn secret(&self) -> &Code {
        &self.secret
    }
}
