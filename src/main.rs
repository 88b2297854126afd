use anyhow::{Context, Result};
use hangman::cli::{Cli, CliInterface, parse_cli};
use hangman::logging::init_logger;
use hangman::wordbank::{
    EMBEDDED_WORDBANK, default_wordbank_path, load_wordbank_from_file, load_wordbank_from_str,
};
use hangman::{GameController, LengthBounds, RandomSelector, WordPool, run_session};
use std::io;
use std::process::ExitCode;

fn load_catalog(cli: &Cli) -> Result<Vec<String>> {
    if let Some(path) = &cli.wordbank_path {
        return Ok(load_wordbank_from_file(path)?);
    }

    if let Some(path) = default_wordbank_path().filter(|p| p.is_file()) {
        log::info!("Using word list from {}", path.display());
        return Ok(load_wordbank_from_file(&path)?);
    }

    Ok(load_wordbank_from_str(EMBEDDED_WORDBANK))
}

fn run(cli: &Cli) -> Result<()> {
    let bounds = LengthBounds::new(cli.min_len, cli.max_len)?;
    let catalog = load_catalog(cli).context("cannot start without a word list")?;
    log::info!("Loaded {} words", catalog.len());

    let selector = match cli.seed {
        Some(seed) => RandomSelector::seeded(seed),
        None => RandomSelector::new(),
    };
    let mut pool = WordPool::new(catalog, bounds, selector);
    let mut controller = GameController::new(&mut pool).with_gallows(!cli.no_art);

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock(), io::stdout());
    let summary = run_session(&mut controller, &mut interface)?;
    log::info!("Session over after {} rounds", summary.rounds_played());
    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
