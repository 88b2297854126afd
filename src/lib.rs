// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod gallows;
pub mod game_state;
pub mod logging;
pub mod round;
pub mod word_pool;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{CatalogError, ConfigError, GuessError, HangmanError, PoolError};
pub use game_state::{GameController, GameInterface, RoundOutcome, SessionSummary, run_session};
pub use round::{MAX_ATTEMPTS, RoundState, RoundStatus};
pub use word_pool::{LengthBounds, RandomSelector, WordPool, WordSelector};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
