//! Word pool: the catalog of candidate secrets and the draw policy.
//!
//! A word is eligible when it is purely alphabetic, its length lies within
//! the configured [`LengthBounds`] and it has not been drawn before by the
//! same pool. Draws go through a [`WordSelector`] so tests can make them
//! deterministic.

use crate::debug_log;
use crate::error::{ConfigError, PoolError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

pub const DEFAULT_MIN_LEN: usize = 3;
pub const DEFAULT_MAX_LEN: usize = 10;

/// Inclusive word length bounds, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidLengthBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LEN,
            max: DEFAULT_MAX_LEN,
        }
    }
}

/// Picks one of `len` candidates. Implementations must return an index in
/// `0..len`; `len` is never zero.
pub trait WordSelector {
    fn select(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by a standard RNG.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible draws, e.g. for `--seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSelector for RandomSelector {
    fn select(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

pub struct WordPool<S: WordSelector = RandomSelector> {
    catalog: Vec<String>,
    used: HashSet<String>,
    bounds: LengthBounds,
    selector: S,
}

impl WordPool<RandomSelector> {
    pub fn with_random_selector(catalog: Vec<String>, bounds: LengthBounds) -> Self {
        Self::new(catalog, bounds, RandomSelector::new())
    }
}

impl<S: WordSelector> WordPool<S> {
    pub fn new(catalog: Vec<String>, bounds: LengthBounds, selector: S) -> Self {
        let catalog = catalog
            .into_iter()
            .map(|word| word.trim().to_lowercase())
            .collect();
        Self {
            catalog,
            used: HashSet::new(),
            bounds,
            selector,
        }
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    fn is_eligible(&self, word: &str) -> bool {
        !word.is_empty()
            && word.chars().all(char::is_alphabetic)
            && self.bounds.contains(word.chars().count())
            && !self.used.contains(word)
    }

    fn candidate_indices(&self) -> Vec<usize> {
        (0..self.catalog.len())
            .filter(|&i| self.is_eligible(&self.catalog[i]))
            .collect()
    }

    /// Number of eligible words that have not been drawn yet. Duplicate
    /// catalog entries are counted once.
    pub fn remaining(&self) -> usize {
        self.candidate_indices()
            .into_iter()
            .map(|i| self.catalog[i].as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Draws a random eligible word and marks it used.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Exhausted`] when no eligible word is left. The
    /// pool will not recover from this; a new pool with more words is needed.
    pub fn next_word(&mut self) -> Result<String, PoolError> {
        let candidates = self.candidate_indices();
        if candidates.is_empty() {
            debug_log!("Word pool exhausted after {} draws", self.used.len());
            return Err(PoolError::Exhausted);
        }

        let index = self.selector.select(candidates.len());
        let choice = self.catalog[candidates[index.min(candidates.len() - 1)]].clone();
        self.used.insert(choice.clone());
        debug_log!(
            "Drew word #{} ({} letters) from {} candidates",
            self.used.len(),
            choice.chars().count(),
            candidates.len()
        );
        Ok(choice)
    }

    /// Sorted copy of every word drawn so far.
    pub fn used_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.used.iter().cloned().collect();
        words.sort();
        words
    }
}
