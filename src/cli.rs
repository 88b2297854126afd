use crate::error::GuessError;
use crate::game_state::{GameInterface, GuessFeedback, SessionSummary};
use crate::word_pool::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Hangman in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Shortest word that may be drawn
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    pub min_len: usize,

    /// Longest word that may be drawn
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Seed for reproducible word draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't draw the gallows
    #[arg(long)]
    pub no_art: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Reads one trimmed line, `None` at end of input.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Line-based terminal implementation of the GameInterface trait.
/// Wraps any reader/writer pair so sessions can be scripted in tests.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.writer, "\n{text} ")?;
        self.writer.flush()?;
        read_trimmed_line(&mut self.reader)
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_guess(&mut self) -> io::Result<Option<String>> {
        self.prompt("Enter a letter or try the whole word:")
    }

    fn read_play_again(&mut self) -> io::Result<bool> {
        Ok(self
            .prompt("Play another round? (y/n):")?
            .is_some_and(|answer| is_affirmative(&answer)))
    }

    fn display_round_start(&mut self, secret_len: usize, mask: &str) -> io::Result<()> {
        writeln!(self.writer, "\nThe secret word has {secret_len} letters.")?;
        writeln!(self.writer, "{mask}")
    }

    fn display_guess_rejected(&mut self, error: &GuessError) -> io::Result<()> {
        writeln!(self.writer, "{error}")
    }

    fn display_feedback(&mut self, feedback: GuessFeedback) -> io::Result<()> {
        let message = match feedback {
            GuessFeedback::LetterHit => "Correct.",
            GuessFeedback::LetterMiss => "Wrong.",
            GuessFeedback::WordMiss => "Wrong word.",
        };
        writeln!(self.writer, "{message}")
    }

    fn display_progress(
        &mut self,
        mask: &str,
        wrong_attempts: usize,
        max_attempts: usize,
    ) -> io::Result<()> {
        writeln!(self.writer, "Current progress: {mask}")?;
        writeln!(self.writer, "Attempts used: {wrong_attempts} / {max_attempts}")
    }

    fn display_gallows(&mut self, art: &str) -> io::Result<()> {
        writeln!(self.writer, "{art}")
    }

    fn display_win(&mut self, secret: &str) -> io::Result<()> {
        writeln!(self.writer, "\nYou won! The word was '{secret}'.")
    }

    fn display_loss(&mut self, secret: &str) -> io::Result<()> {
        writeln!(self.writer, "\nGame over. The word was '{secret}'.")
    }

    fn display_farewell(&mut self, summary: &SessionSummary) -> io::Result<()> {
        writeln!(
            self.writer,
            "\nRounds played: {} (won {}, lost {})",
            summary.rounds_played(),
            summary.won,
            summary.lost
        )?;
        writeln!(self.writer, "Thanks for playing!")
    }
}
