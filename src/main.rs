//! Word Guess - CLI
//!
//! Wordle-style game with a TUI board, a line-based mode and a feedback checker.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use wordle_game::{
    commands::{CheckConfig, run_check, run_simple},
    core::Word,
    game::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig, GameSession, Scoreboard,
        WordValidator,
    },
    logging,
    output::print_check_result,
    wordlists::{
        ALLOWED, ANSWERS, TargetPicker,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word with per-letter color feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Permitted guesses: 'all' (default), 'answers', or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Target words file (default: embedded answers, or the custom wordlist)
    #[arg(short = 't', long, global = true)]
    targets: Option<PathBuf>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Attempts per round
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI board (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Score a list of guesses against a known target
    Check {
        /// The target word
        target: String,

        /// Guesses to play, in order
        guesses: Vec<String>,

        /// Show colored tiles and G/Y/- codes
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Load word lists based on the -w and -t flags
///
/// Returns (`allowed`, `targets`)
/// - "all": every embedded word is allowed, embedded answers are targets
/// - "answers": only embedded answers, for both
/// - "<path>": custom list for both unless -t is given
fn load_wordlists(wordlist_mode: &str, targets: Option<&PathBuf>) -> Result<(Vec<Word>, Vec<Word>)> {
    let (allowed, default_targets) = match wordlist_mode {
        "all" => (words_from_slice(ALLOWED), words_from_slice(ANSWERS)),
        "answers" => {
            let answers = words_from_slice(ANSWERS);
            (answers.clone(), answers)
        }
        path => {
            let custom = load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            (custom.clone(), custom)
        }
    };

    let targets = match targets {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read target list '{}'", path.display()))?,
        None => default_targets,
    };

    Ok((allowed, targets))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = GameConfig::new(cli.length, cli.max_attempts)?;
    let (allowed, mut targets) = load_wordlists(&cli.wordlist, cli.targets.as_ref())?;

    let validator = Arc::new(WordValidator::new(config.word_length(), allowed));
    if validator.is_empty() {
        bail!("No {}-letter words in the word list", config.word_length());
    }

    // A target nobody may type could never be solved
    let before = targets.len();
    targets.retain(|w| validator.is_valid(w));
    if targets.len() < before {
        tracing::warn!(
            dropped = before - targets.len(),
            "targets missing from the word list were dropped"
        );
    }

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, validator, targets),
        Commands::Simple => run_simple_command(config, validator, targets),
        Commands::Check {
            target,
            guesses,
            verbose,
        } => run_check_command(config, validator, target, guesses, verbose),
    }
}

fn start_round(
    config: GameConfig,
    validator: Arc<WordValidator>,
    targets: Vec<Word>,
) -> Result<(GameSession, TargetPicker, StdRng)> {
    let picker = TargetPicker::new(config.word_length(), targets)?;
    let mut rng = StdRng::from_os_rng();
    let session = GameSession::new(
        config,
        validator,
        Arc::new(Scoreboard::new()),
        picker.pick(&mut rng),
    )?;
    tracing::info!(targets = picker.len(), "game ready");
    Ok((session, picker, rng))
}

fn run_play_command(
    config: GameConfig,
    validator: Arc<WordValidator>,
    targets: Vec<Word>,
) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let (session, picker, rng) = start_round(config, validator, targets)?;
    run_tui(App::new(session, picker, rng))
}

fn run_simple_command(
    config: GameConfig,
    validator: Arc<WordValidator>,
    targets: Vec<Word>,
) -> Result<()> {
    let (mut session, picker, mut rng) = start_round(config, validator, targets)?;
    run_simple(
        &mut session,
        &picker,
        &mut rng,
        io::stdin().lock(),
        io::stdout().lock(),
    )
}

fn run_check_command(
    config: GameConfig,
    validator: Arc<WordValidator>,
    target: String,
    guesses: Vec<String>,
    verbose: bool,
) -> Result<()> {
    let check = CheckConfig {
        target,
        guesses,
        game: config,
    };
    let result = run_check(check, validator)?;
    print_check_result(&result, verbose);
    Ok(())
}
