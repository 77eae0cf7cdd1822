use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snakes_ladders::config::GameConfig;
use snakes_ladders::game::Die;
use snakes_ladders::ui::App;

/// Play Snakes and Ladders in the terminal.
#[derive(Parser)]
#[command(name = "snakes_ladders", about = "Snakes and Ladders with animated pieces")]
struct Cli {
    /// Path to the JSON (or .toml) game configuration
    #[arg(long, default_value = "players.json")]
    config: PathBuf,

    /// Seed the die for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the board)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as JSON and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        println!("{}", GameConfig::default_json());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    info!(path = %cli.config.display(), players = config.players.len(), "Loaded config");

    let die = match cli.seed {
        Some(seed) => Die::seeded(seed),
        None => Die::new(),
    };
    let mut app = App::new(cli.config, config, die);

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal, always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res.context("running game loop")
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
