use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;
use grid_snake::persistence::FileScoreStore;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a square grid, in your terminal")]
struct Cli {
    /// TOML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width and height in cells (overrides the config file)
    #[arg(long)]
    board_size: Option<i32>,

    /// Where the high score is kept
    #[arg(long)]
    high_score_file: Option<PathBuf>,

    /// Log file; the terminal itself is taken by the game
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.unwrap_or_else(default_log_path);
    init_logging(&log_path)?;

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(board_size) = cli.board_size {
        config.board_size = board_size;
    }
    config.validate()?;

    let store = FileScoreStore::new(
        cli.high_score_file
            .unwrap_or_else(FileScoreStore::default_path),
    );
    tracing::info!(?config, score_file = ?store.path(), "starting");

    let mut human_mode = HumanMode::new(config, store);
    human_mode.run().await?;

    Ok(())
}

fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("grid_snake"))
        .unwrap_or_default()
        .join("grid_snake.log")
}

/// Send logs to `path`, filtered by `RUST_LOG` (default `info`)
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
