//! Progle - CLI
//!
//! Daily word-guessing game with TUI and line modes, statistics and share text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use progle::{
    commands::{history_stats, run_simple, todays_share},
    config::{DEFAULT_STORE_PATH, DEFAULT_TRIES, GameConfig, ShareLabels, WordSource},
    game::{DailyGame, SessionContext},
    history::JsonFileStore,
    logging,
    output::{print_share, print_stats},
    wordlists::WordList,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "progle",
    about = "Daily word-guessing game: one word per day, six tries, streaks and share text",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// History file holding every day's game
    #[arg(long, global = true, env = "PROGLE_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Word list file (one word per line, '#' comments); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Number of tries per day
    #[arg(short, long, global = true, default_value_t = DEFAULT_TRIES)]
    tries: usize,

    /// Title used in the share text
    #[arg(long, global = true)]
    title: Option<String>,

    /// Last line of the share text
    #[arg(long, global = true)]
    tagline: Option<String>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show statistics over the whole history
    Stats,

    /// Print today's share text
    Share,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let defaults = ShareLabels::default();
        GameConfig {
            tries: self.tries,
            store_path: self.store.clone(),
            words: self
                .words
                .clone()
                .map_or(WordSource::Embedded, WordSource::File),
            share: ShareLabels {
                title: self.title.clone().unwrap_or(defaults.title),
                tagline: self.tagline.clone().unwrap_or(defaults.tagline),
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it stays quiet unless asked
    let base = if command == Commands::Play {
        "off"
    } else {
        "progle=warn"
    };
    logging::init(base, cli.verbose);

    let config = cli.config();
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Stats => run_stats_command(&config),
        Commands::Share => run_share_command(&config),
    }
}

fn load_words(source: &WordSource) -> Result<WordList> {
    match source {
        WordSource::Embedded => Ok(WordList::embedded()),
        WordSource::File(path) => WordList::from_file(path)
            .with_context(|| format!("loading word list {}", path.display())),
    }
}

fn open_game(config: &GameConfig) -> Result<DailyGame<JsonFileStore>> {
    let words = load_words(&config.words)?;
    let context = SessionContext::today(config, &words).map_err(|e| anyhow::anyhow!(e))?;
    info!(
        day = %context.day(),
        store = %config.store_path.display(),
        "opening today's game"
    );
    Ok(DailyGame::resume(
        context,
        JsonFileStore::new(&config.store_path),
    ))
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use progle::interactive::{App, run_tui};

    let app = App::new(open_game(config)?, config.share.clone());
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut game = open_game(config)?;
    run_simple(&mut game, &config.share).map_err(|e| anyhow::anyhow!(e))
}

fn run_stats_command(config: &GameConfig) -> Result<()> {
    let store = JsonFileStore::new(&config.store_path);
    let stats = history_stats(&store, config.tries)
        .with_context(|| format!("reading {}", config.store_path.display()))?;
    print_stats(&stats);
    Ok(())
}

fn run_share_command(config: &GameConfig) -> Result<()> {
    let game = open_game(config)?;
    match todays_share(&game, &config.share) {
        Some(text) => print_share(&text),
        None => println!("Today's game is not finished yet. Run `progle play` to finish it."),
    }
    Ok(())
}
