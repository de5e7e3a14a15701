use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::Conf;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{Level, info};

use snake_canvas::game::GameConfig;
use snake_canvas::session::Session;
use snake_canvas::storage::{DEFAULT_SAVE_FILE, JsonFileStore};
use snake_canvas::ui::layout::{HUD_HEIGHT, Layout};

#[derive(Parser)]
#[command(name = "snake_canvas")]
#[command(version, about = "Grid snake with a persistent high score")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the board
    #[arg(long)]
    grid_size: Option<u32>,

    /// Pixel size of one cell
    #[arg(long)]
    cell_size: Option<u32>,

    /// Where the high score is kept
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Fixed RNG seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    fullscreen: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(cell_size) = cli.cell_size {
        config.cell_size = cell_size;
    }
    config.validate().context("invalid game settings")?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let store = JsonFileStore::new(&cli.save_file);
    info!(save_file = %cli.save_file.display(), ?config, "starting");

    let canvas = config.canvas_size() as i32;
    let conf = Conf {
        window_title: "Snake".to_owned(),
        window_width: canvas,
        window_height: canvas + (HUD_HEIGHT + Layout::pad_band_height()) as i32,
        fullscreen: cli.fullscreen,
        high_dpi: true,
        ..Default::default()
    };

    let session = Session::new(config, store, rng);
    macroquad::Window::from_config(conf, snake_canvas::app::run(session));
    Ok(())
}
