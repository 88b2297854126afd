use std::path::PathBuf;
use thiserror::Error;

/// The errors that a Hangman session can produce.
#[derive(Debug, Error)]
pub enum HangmanError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}

/// Rejected guesses. These never end a round; the caller reports the
/// message and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("You already tried the letter '{0}'.")]
    DuplicateGuess(char),

    /// The round already ended in a win or a loss.
    #[error("This round is already over.")]
    RoundOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("no suitable unused words are left in the pool")]
    Exhausted,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read word list from '{}'", path.display())]
    SourceMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid word length bounds {min}..={max}: need 1 <= min <= max")]
    InvalidLengthBounds { min: usize, max: usize },
}
