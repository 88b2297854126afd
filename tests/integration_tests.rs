// Integration tests for the hangman application
// These tests drive whole sessions through the terminal interface

use hangman::cli::CliInterface;
use hangman::*;
use std::collections::HashSet;
use std::io::Cursor;

/// Always takes the first eligible word, so sessions are predictable.
struct FirstSelector;

impl WordSelector for FirstSelector {
    fn select(&mut self, _len: usize) -> usize {
        0
    }
}

fn pool_from(data: &str) -> WordPool<FirstSelector> {
    WordPool::new(
        load_wordbank_from_str(data),
        LengthBounds::default(),
        FirstSelector,
    )
}

fn play(
    pool: &mut WordPool<FirstSelector>,
    input: &str,
) -> (Result<SessionSummary, HangmanError>, String) {
    let mut controller = GameController::new(pool).with_gallows(false);
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    let result = run_session(&mut controller, &mut interface);
    let output = String::from_utf8(interface.into_writer()).unwrap();
    (result, output)
}

#[test]
fn test_regen_round_won_by_word() {
    let mut pool = pool_from("Regen\n");
    let (result, output) = play(&mut pool, "r\ne\ng\nregen\nn\n");

    let summary = result.unwrap();
    assert_eq!(summary.won, 1);
    assert!(output.contains("The secret word has 5 letters."));
    assert!(output.contains("Current progress: r e g e _"));
    assert!(output.contains("Attempts used: 0 / 8"));
    assert!(output.contains("You won! The word was 'regen'."));
    assert!(output.contains("Thanks for playing!"));
}

#[test]
fn test_fenster_round_lost() {
    let mut pool = pool_from("Fenster\n");
    let (result, output) = play(&mut pool, "a\nb\nc\nd\nh\nj\nk\nq\nn\n");

    let summary = result.unwrap();
    assert_eq!(summary.lost, 1);
    assert_eq!(output.matches("Wrong.").count(), 8);
    assert!(output.contains("Attempts used: 8 / 8"));
    assert!(output.contains("Game over. The word was 'fenster'."));
    assert!(!output.contains("You won!"));
}

#[test]
fn test_duplicate_and_invalid_guesses_are_reported() {
    let mut pool = pool_from("regen\n");
    let (result, output) = play(&mut pool, "a\na\nab3\nregen\nn\n");

    assert_eq!(result.unwrap().won, 1);
    assert!(output.contains("You already tried the letter 'a'."));
    assert!(output.contains("The word must contain only letters."));
    // Only the first "a" counted
    assert!(output.contains("Attempts used: 1 / 8"));
    assert!(!output.contains("Attempts used: 2 / 8"));
}

#[test]
fn test_gallows_drawn_when_enabled() {
    let mut pool = pool_from("regen\n");
    let mut controller = GameController::new(&mut pool);
    let mut interface = CliInterface::new(Cursor::new("x\nregen\n"), Vec::new());

    run_session(&mut controller, &mut interface).unwrap();
    let output = String::from_utf8(interface.into_writer()).unwrap();
    assert!(output.contains(hangman::gallows::gallows_stage(1)));
}

#[test]
fn test_multiple_rounds_use_distinct_words() {
    let mut pool = pool_from("regen\nwolken\nserver\n");
    let (result, output) = play(&mut pool, "regen\ny\nwolken\nyes\nserver\nn\n");

    let summary = result.unwrap();
    assert_eq!(summary.won, 3);
    assert_eq!(summary.rounds_played(), 3);
    assert!(output.contains("Rounds played: 3 (won 3, lost 0)"));
    assert_eq!(pool.used_words(), vec!["regen", "server", "wolken"]);
}

#[test]
fn test_session_fails_when_pool_runs_dry() {
    let mut pool = pool_from("regen\n");
    let (result, _) = play(&mut pool, "regen\ny\n");

    assert!(matches!(result, Err(HangmanError::Pool(PoolError::Exhausted))));
}

#[test]
fn test_end_of_input_ends_session() {
    let mut pool = pool_from("regen\nwolken\n");
    let (result, output) = play(&mut pool, "r\n");

    let summary = result.unwrap();
    assert_eq!(summary.abandoned, 1);
    assert!(output.contains("Thanks for playing!"));
}

#[test]
fn test_fifteen_word_catalog_exhausts_on_sixteenth_draw() {
    let data = "Tabelle\nFenster\nRegen\nWolken\nServer\nAdresse\nMuster\nSystem\n\
                Konsole\nProzess\nLaptop\nNetzwerk\nKamera\nOrdner\nSchalter\n";
    let mut pool = WordPool::new(
        load_wordbank_from_str(data),
        LengthBounds::default(),
        RandomSelector::seeded(2024),
    );

    let mut seen = HashSet::new();
    for _ in 0..15 {
        let word = pool.next_word().unwrap();
        assert!(word.chars().all(char::is_alphabetic));
        assert!((3..=10).contains(&word.chars().count()));
        assert!(seen.insert(word));
    }
    assert_eq!(pool.next_word(), Err(PoolError::Exhausted));
    assert_eq!(pool.used_words().len(), 15);
}

#[test]
fn test_wordbank_file_to_session_pipeline() {
    let path = std::env::temp_dir().join("hangman_integration_words.txt");
    std::fs::write(&path, "Kamera\n\nab\n").unwrap();

    let catalog = load_wordbank_from_file(&path).unwrap();
    let mut pool = WordPool::new(catalog, LengthBounds::default(), FirstSelector);
    let (result, output) = play(&mut pool, "kamera\nn\n");

    assert_eq!(result.unwrap().won, 1);
    assert!(output.contains("The secret word has 6 letters."));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_wrong_attempts_match_false_results() {
    let mut round = RoundState::new("laptop");
    let mut misses = 0;
    for guess in ["a", "z", "kamera", "p", "q", "o"] {
        let hit = if guess.len() == 1 {
            round.try_letter(guess).unwrap()
        } else {
            round.guess_word(guess).unwrap()
        };
        if !hit {
            misses += 1;
        }
    }
    assert_eq!(misses, 3);
    assert_eq!(round.wrong_attempts(), misses);
    assert_eq!(round.status(), RoundStatus::InProgress);
    assert_eq!(round.masked_display(), "_ a p _ o p");
}
