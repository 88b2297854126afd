use crate::error::{GuessError, HangmanError};
use crate::gallows::gallows_stage;
use crate::round::{MAX_ATTEMPTS, RoundState};
use crate::word_pool::{WordPool, WordSelector};
use crate::{debug_log, info_log};
use std::io;

/// How a finished round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { secret: String, wrong_attempts: usize },
    Lost { secret: String },
    /// Input ran out before the round was decided.
    Abandoned { secret: String },
}

impl RoundOutcome {
    pub fn secret(&self) -> &str {
        match self {
            RoundOutcome::Won { secret, .. }
            | RoundOutcome::Lost { secret }
            | RoundOutcome::Abandoned { secret } => secret,
        }
    }
}

/// Result of a single guess, as reported to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    LetterHit,
    LetterMiss,
    WordMiss,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub won: usize,
    pub lost: usize,
    pub abandoned: usize,
}

impl SessionSummary {
    pub fn rounds_played(&self) -> usize {
        self.won + self.lost + self.abandoned
    }

    fn record(&mut self, outcome: &RoundOutcome) {
        match outcome {
            RoundOutcome::Won { .. } => self.won += 1,
            RoundOutcome::Lost { .. } => self.lost += 1,
            RoundOutcome::Abandoned { .. } => self.abandoned += 1,
        }
    }
}

/// Trait for the player-facing side of the game.
/// Lets the controller run against the terminal or a scripted test double.
pub trait GameInterface {
    /// Next trimmed guess, or `None` at end of input.
    fn read_guess(&mut self) -> io::Result<Option<String>>;

    /// Whether the player wants another round. End of input counts as no.
    fn read_play_again(&mut self) -> io::Result<bool>;

    fn display_round_start(&mut self, secret_len: usize, mask: &str) -> io::Result<()>;

    fn display_guess_rejected(&mut self, error: &GuessError) -> io::Result<()>;

    fn display_feedback(&mut self, feedback: GuessFeedback) -> io::Result<()>;

    fn display_progress(
        &mut self,
        mask: &str,
        wrong_attempts: usize,
        max_attempts: usize,
    ) -> io::Result<()>;

    fn display_gallows(&mut self, art: &str) -> io::Result<()>;

    fn display_win(&mut self, secret: &str) -> io::Result<()>;

    fn display_loss(&mut self, secret: &str) -> io::Result<()>;

    fn display_farewell(&mut self, summary: &SessionSummary) -> io::Result<()>;
}

/// Sequences rounds against one shared word pool.
pub struct GameController<'a, S: WordSelector> {
    pool: &'a mut WordPool<S>,
    show_gallows: bool,
}

impl<'a, S: WordSelector> GameController<'a, S> {
    pub fn new(pool: &'a mut WordPool<S>) -> Self {
        Self {
            pool,
            show_gallows: true,
        }
    }

    #[must_use]
    pub fn with_gallows(mut self, show_gallows: bool) -> Self {
        self.show_gallows = show_gallows;
        self
    }

    pub fn pool(&self) -> &WordPool<S> {
        &*self.pool
    }

    /// Plays one round to completion.
    ///
    /// # Errors
    ///
    /// Fails when the pool has no word left or the interface can't be read.
    /// Rejected guesses are reported through the interface and never end
    /// the round.
    pub fn play_one_round<I: GameInterface>(
        &mut self,
        interface: &mut I,
    ) -> Result<RoundOutcome, HangmanError> {
        let secret = self.pool.next_word()?;
        let mut round = RoundState::new(&secret);
        info_log!(
            "Round started: {} letters, {} words left in pool",
            round.secret_len(),
            self.pool.remaining()
        );

        interface.display_round_start(round.secret_len(), &round.masked_display())?;

        loop {
            let Some(input) = interface.read_guess()? else {
                info_log!("Input closed mid-round");
                return Ok(RoundOutcome::Abandoned { secret });
            };

            let result = if input.chars().count() == 1 {
                round.try_letter(&input).map(|hit| {
                    if hit {
                        GuessFeedback::LetterHit
                    } else {
                        GuessFeedback::LetterMiss
                    }
                })
            } else {
                match round.guess_word(&input) {
                    Ok(true) => {
                        interface.display_win(round.secret())?;
                        return Ok(RoundOutcome::Won {
                            secret,
                            wrong_attempts: round.wrong_attempts(),
                        });
                    }
                    Ok(false) => Ok(GuessFeedback::WordMiss),
                    Err(e) => Err(e),
                }
            };

            let feedback = match result {
                Ok(feedback) => feedback,
                Err(e) => {
                    debug_log!("Guess rejected: {}", e);
                    interface.display_guess_rejected(&e)?;
                    continue;
                }
            };
            debug_log!(
                "Guess {:?}, wrong attempts {}/{}",
                feedback,
                round.wrong_attempts(),
                MAX_ATTEMPTS
            );

            interface.display_feedback(feedback)?;
            interface.display_progress(
                &round.masked_display(),
                round.wrong_attempts(),
                MAX_ATTEMPTS,
            )?;
            if self.show_gallows {
                interface.display_gallows(gallows_stage(round.wrong_attempts()))?;
            }

            if round.is_lost() {
                interface.display_loss(round.secret())?;
                return Ok(RoundOutcome::Lost { secret });
            }
            if round.is_won() {
                interface.display_win(round.secret())?;
                return Ok(RoundOutcome::Won {
                    secret,
                    wrong_attempts: round.wrong_attempts(),
                });
            }
        }
    }
}

/// Plays rounds until the player declines another one or input ends.
///
/// # Errors
///
/// Pool exhaustion and I/O failures end the session with an error.
pub fn run_session<S: WordSelector, I: GameInterface>(
    controller: &mut GameController<'_, S>,
    interface: &mut I,
) -> Result<SessionSummary, HangmanError> {
    let mut summary = SessionSummary::default();

    loop {
        let outcome = controller.play_one_round(interface)?;
        info_log!("Round finished: {:?}", outcome);
        summary.record(&outcome);

        if matches!(outcome, RoundOutcome::Abandoned { .. }) || !interface.read_play_again()? {
            break;
        }
    }

    interface.display_farewell(&summary)?;
    Ok(summary)
}
