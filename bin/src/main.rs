use anyhow::Result;
use clap::Parser;
use mastermind::*;
use std::io;
use std::io::{BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Mastermind: find the secret code of 4 distinct digits from '0' to '8'.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// The secret code to play against. If absent, a random code is chosen.
    #[clap(short = 'c', long = "code")]
    code: Option<String>,

    /// The number of attempts before the game is lost. Must be positive.
    #[clap(
        short = 't',
        long,
        default_value_t = i64::from(DEFAULT_ATTEMPTS),
        allow_hyphen_values = true
    )]
    attempts: i64,
}

/// Converts the attempts flag into a budget, rejecting zero and negative values. Budgets too
/// large for a `u32` are capped.
fn attempts_from_arg(attempts: i64) -> Result<u32, MastermindError> {
    if attempts <= 0 {
        return Err(MastermindError::NonPositiveAttempts);
    }
    Ok(u32::try_from(attempts).unwrap_or(u32::MAX))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = GameSettings::new(args.code, attempts_from_arg(args.attempts)?)?;
    let game = Game::from_settings(&settings)?;
    info!(
        attempts = settings.attempts(),
        random_secret = settings.secret().is_none(),
        "Starting game"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_game(game, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Runs the interactive game loop, reading one guess per line from `input` until the game ends
/// or `input` is exhausted.
fn run_game<R: BufRead, W: Write>(
    mut game: Game,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "Will you find the secret code?")?;
    writeln!(output, "Please enter a valid guess")?;

    while game.status() == GameStatus::InProgress {
        writeln!(output, "---")?;
        writeln!(output, "Round {}", game.round())?;
        write!(output, ">")?;
        output.flush()?;

        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            writeln!(output, "\nExecution stopped.")?;
            return Ok(());
        }
        let guess = buffer.trim_end_matches(|c| c == '\n' || c == '\r');

        let outcome = match game.submit_guess(guess) {
            Ok(outcome) => outcome,
            Err(error) if error.is_validation_error() => {
                writeln!(output, "Wrong input!")?;
                continue;
            }
            Err(error) => unreachable!("guess submitted after the game ended: {}", error),
        };

        if outcome.is_win() {
            writeln!(output, "Congratz! You did it!")?;
            return Ok(());
        }

        writeln!(output, "Well placed pieces: {}", outcome.exact_matches)?;
        writeln!(output, "Misplaced pieces: {}", outcome.partial_matches)?;
    }

    writeln!(output, "---")?;
    writeln!(output, "You ran out of attempts. Game over.")?;
    writeln!(output, "The secret code was: {}", game.secret())?;
    Ok(())
}
