use crate::error::CatalogError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

const CONFIG_DIR_NAME: &str = "hangman";
const WORDBANK_FILE_NAME: &str = "words.txt";

fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

/// Parses a newline-delimited word list. Blank lines are skipped; no
/// eligibility filtering happens here, the pool does that on every draw.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CatalogError> {
    let path = path.as_ref();
    let missing = |source| CatalogError::SourceMissing {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(missing)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line.map_err(missing)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Location of the user's own word list, `<config dir>/hangman/words.txt`.
pub fn default_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(WORDBANK_FILE_NAME))
}
