//! Gallows drawings, one per number of wrong attempts.

use crate::round::MAX_ATTEMPTS;

const STAGES: [&str; MAX_ATTEMPTS + 1] = [
    r"
      
      
      
      
      
=========",
    r"
      
      |
      |
      |
      |
=========",
    r"
  +---+
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
=========",
];

/// The drawing for `wrong_attempts`. Values past [`MAX_ATTEMPTS`] show the
/// final stage.
pub fn gallows_stage(wrong_attempts: usize) -> &'static str {
    STAGES[wrong_attempts.min(MAX_ATTEMPTS)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_is_distinct() {
        for i in 0..MAX_ATTEMPTS {
            assert_ne!(gallows_stage(i), gallows_stage(i + 1), "stage {i}");
        }
    }

    #[test]
    fn test_final_stage_shows_full_figure() {
        let last = gallows_stage(MAX_ATTEMPTS);
        assert!(last.contains('O'));
        assert!(last.contains("/ \\"));
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(gallows_stage(MAX_ATTEMPTS + 3), gallows_stage(MAX_ATTEMPTS));
    }
}
