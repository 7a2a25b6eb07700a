#[macro_use]
extern crate assert_matches;

use mastermind::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::result::Result;

#[test]
fn create_wrong_length_fails() {
    assert_matches!(Code::create(""), Err(MastermindError::WrongLength(0)));
    assert_matches!(Code::create("0"), Err(MastermindError::WrongLength(1)));
    assert_matches!(Code::create("012"), Err(MastermindError::WrongLength(3)));
    assert_matches!(Code::create("01234"), Err(MastermindError::WrongLength(5)));
}

#[test]
fn create_does_not_trim() {
    assert_matches!(Code::create("0123 "), Err(MastermindError::WrongLength(5)));
    assert_matches!(Code::create(" 123"), Err(MastermindError::InvalidSymbol(' ')));
}

#[test]
fn create_duplicate_symbol_fails() {
    assert_matches!(
        Code::create("1123"),
        Err(MastermindError::DuplicateSymbol('1'))
    );
}

#[test]
fn create_checks_duplicates_before_alphabet() {
    assert_matches!(
        Code::create("9919"),
        Err(MastermindError::DuplicateSymbol('9'))
    );
}

#[test]
fn create_invalid_symbol_fails() {
    assert_matches!(
        Code::create("129A"),
        Err(MastermindError::InvalidSymbol('9'))
    );
    assert_matches!(
        Code::create("12a3"),
        Err(MastermindError::InvalidSymbol('a'))
    );
}

#[test]
fn create_succeeds() -> Result<(), MastermindError> {
    let code = Code::create("0123")?;

    assert_eq!(code.to_string(), "0123");
    assert_eq!(code.symbols(), &['0', '1', '2', '3']);
    assert_eq!(String::from(code), "0123");
    Ok(())
}

#[test]
fn parse_and_try_from_validate() -> Result<(), MastermindError> {
    assert_eq!("8765".parse::<Code>()?, Code::create("8765")?);
    assert_eq!(Code::try_from("8765")?, Code::create("8765")?);
    assert_eq!(Code::try_from("8765".to_string())?, Code::create("8765")?);
    assert_matches!(
        "8769".parse::<Code>(),
        Err(MastermindError::InvalidSymbol('9'))
    );
    Ok(())
}

#[test]
fn errors_describe_the_problem() {
    assert_eq!(
        MastermindError::WrongLength(3).to_string(),
        "Code must be 4 characters long, but was 3."
    );
    assert_eq!(
        MastermindError::InvalidSymbol('a').to_string(),
        "Code contains invalid character 'a'. Only digits from '0' to '8' are allowed."
    );
    assert!(MastermindError::DuplicateSymbol('1').is_validation_error());
    assert!(!MastermindError::GameOver.is_validation_error());
    assert!(!MastermindError::NonPositiveAttempts.is_validation_error());
}

#[test]
fn check_guess_exact_win() -> Result<(), MastermindError> {
    let outcome = Code::create("0123")?.check_guess(&Code::create("0123")?);

    assert_eq!(outcome, GuessOutcome::new(4, 0));
    assert!(outcome.is_win());
    Ok(())
}

#[test]
fn check_guess_full_permutation() -> Result<(), MastermindError> {
    let outcome = Code::create("0123")?.check_guess(&Code::create("3210")?);

    assert_eq!(outcome.exact_matches, 0);
    assert_eq!(outcome.partial_matches, 4);
    assert!(!outcome.is_win());
    Ok(())
}

#[test]
fn check_guess_mixed() -> Result<(), MastermindError> {
    let outcome = Code::create("0123")?.check_guess(&Code::create("0321")?);

    assert_eq!(outcome, GuessOutcome::new(1, 3));
    Ok(())
}

#[test]
fn check_guess_disjoint() -> Result<(), MastermindError> {
    let outcome = Code::create("0123")?.check_guess(&Code::create("4567")?);

    assert_eq!(outcome, GuessOutcome::new(0, 0));
    Ok(())
}

#[test]
fn check_guess_partial_overlap() -> Result<(), MastermindError> {
    let secret = Code::create("0123")?;

    assert_eq!(
        secret.check_guess(&Code::create("0845")?),
        GuessOutcome::new(1, 0)
    );
    assert_eq!(
        secret.check_guess(&Code::create("8301")?),
        GuessOutcome::new(0, 3)
    );
    assert_eq!(
        secret.check_guess(&Code::create("0132")?),
        GuessOutcome::new(2, 2)
    );
    Ok(())
}

#[test]
fn check_guess_identical_codes_in_either_order() -> Result<(), MastermindError> {
    let first = Code::create("5738")?;
    let second = Code::create("5738")?;

    assert_eq!(first.check_guess(&second), GuessOutcome::new(4, 0));
    assert_eq!(second.check_guess(&first), GuessOutcome::new(4, 0));
    Ok(())
}

#[test]
fn check_guess_counts_never_exceed_code_length() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let secret = Code::generate_random_with(&mut rng);
        let guess = Code::generate_random_with(&mut rng);

        let outcome = secret.check_guess(&guess);

        assert!(outcome.exact_matches + outcome.partial_matches <= CODE_LENGTH);
        assert_eq!(outcome, guess.check_guess(&secret));
    }
}

#[test]
fn generate_random_always_valid() {
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let code = Code::generate_random();

        assert_matches!(Code::create(&code.to_string()), Ok(revalidated) if revalidated == code);
        seen.insert(code);
    }

    assert!(seen.len() > 1);
}

#[test]
fn generate_random_with_seed_is_reproducible() {
    let first = Code::generate_random_with(&mut StdRng::seed_from_u64(42));
    let second = Code::generate_random_with(&mut StdRng::seed_from_u64(42));

    assert_eq!(first, second);
}

#[test]
fn generate_random_with_draws_without_replacement() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut seen = HashSet::new();
    for _ in 0..2000 {
        let code = Code::generate_random_with(&mut rng);
        let unique: HashSet<&char> = code.symbols().iter().collect();

        assert_eq!(unique.len(), CODE_LENGTH);
        assert!(code.symbols().iter().all(|symbol| VALID_SYMBOLS.contains(*symbol)));
        seen.insert(code);
    }

    // 3024 possible codes, so 2000 draws should cover a good share of them.
    assert!(seen.len() > 1000);
}
