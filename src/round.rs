//! State and rules for a single round against one secret word.
//!
//! A round starts [`RoundStatus::InProgress`] and ends either
//! [`RoundStatus::Won`] (every letter revealed, or the whole word guessed)
//! or [`RoundStatus::Lost`] (`MAX_ATTEMPTS` wrong guesses). Once a round is
//! over, further guesses are rejected with [`GuessError::RoundOver`].

use crate::error::GuessError;
use std::collections::HashSet;

pub const MAX_ATTEMPTS: usize = 8;
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct RoundState {
    secret: String,
    tried_letters: HashSet<char>,
    wrong_attempts: usize,
    word_guessed: bool,
}

impl RoundState {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_lowercase(),
            tried_letters: HashSet::new(),
            wrong_attempts: 0,
            word_guessed: false,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn secret_len(&self) -> usize {
        self.secret.chars().count()
    }

    pub fn wrong_attempts(&self) -> usize {
        self.wrong_attempts
    }

    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.wrong_attempts)
    }

    /// Letters tried so far, sorted.
    pub fn tried_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.tried_letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    pub fn all_revealed(&self) -> bool {
        self.secret.chars().all(|c| self.tried_letters.contains(&c))
    }

    pub fn status(&self) -> RoundStatus {
        if self.wrong_attempts >= MAX_ATTEMPTS {
            RoundStatus::Lost
        } else if self.word_guessed || self.all_revealed() {
            RoundStatus::Won
        } else {
            RoundStatus::InProgress
        }
    }

    pub fn is_won(&self) -> bool {
        self.status() == RoundStatus::Won
    }

    pub fn is_lost(&self) -> bool {
        self.status() == RoundStatus::Lost
    }

    pub fn is_over(&self) -> bool {
        self.status() != RoundStatus::InProgress
    }

    fn ensure_in_progress(&self) -> Result<(), GuessError> {
        if self.is_over() {
            Err(GuessError::RoundOver)
        } else {
            Ok(())
        }
    }

    /// Guesses a single letter. Returns whether it occurs in the secret.
    ///
    /// # Errors
    ///
    /// [`GuessError::InvalidInput`] unless the input is exactly one
    /// alphabetic character, [`GuessError::DuplicateGuess`] if the letter was
    /// tried before, [`GuessError::RoundOver`] after the round ended. State
    /// is unchanged on error.
    pub fn try_letter(&mut self, input: &str) -> Result<bool, GuessError> {
        self.ensure_in_progress()?;

        let normalized = input.to_lowercase();
        let mut chars = normalized.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => c,
            _ => {
                return Err(GuessError::InvalidInput(
                    "Please enter exactly one letter (a-z).".to_string(),
                ));
            }
        };

        if !self.tried_letters.insert(letter) {
            return Err(GuessError::DuplicateGuess(letter));
        }

        if self.secret.contains(letter) {
            Ok(true)
        } else {
            self.wrong_attempts += 1;
            Ok(false)
        }
    }

    /// Guesses the whole word. A miss costs one attempt, the same as a wrong
    /// letter, whatever the length of the guess. Repeated misses with the
    /// same word are each counted.
    ///
    /// # Errors
    ///
    /// [`GuessError::InvalidInput`] if the attempt is empty or contains
    /// anything but letters, [`GuessError::RoundOver`] after the round ended.
    pub fn guess_word(&mut self, attempt: &str) -> Result<bool, GuessError> {
        self.ensure_in_progress()?;

        let attempt = attempt.to_lowercase();
        if attempt.is_empty() || !attempt.chars().all(char::is_alphabetic) {
            return Err(GuessError::InvalidInput(
                "The word must contain only letters.".to_string(),
            ));
        }

        if attempt == self.secret {
            self.word_guessed = true;
            Ok(true)
        } else {
            self.wrong_attempts += 1;
            Ok(false)
        }
    }

    /// One token per character of the secret: the character if it has been
    /// tried, otherwise [`PLACEHOLDER`].
    pub fn progress_mask(&self) -> Vec<char> {
        self.secret
            .chars()
            .map(|c| {
                if self.tried_letters.contains(&c) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// The mask as shown to the player, e.g. `r e g e _`.
    pub fn masked_display(&self) -> String {
        self.progress_mask()
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
