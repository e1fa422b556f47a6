//! Flip Runner entry point
//!
//! Runs the game headless: there is no window or audio, every notification the
//! simulation emits goes to the log. Jumps come from a script of times or from
//! the idle autopilot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use flip_runner::consts::SIM_DT;
use flip_runner::platform::{Driver, LogHost};
use flip_runner::sim::{GamePhase, GameState, LevelCatalog};
use flip_runner::Settings;

#[derive(Parser, Debug)]
#[command(name = "flip-runner", version)]
#[command(about = "Play Flip Runner headless, logging every notification")]
struct Options {
    /// Seconds of simulated time to run
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,

    /// Jump request times in seconds, comma separated
    #[arg(long, value_delimiter = ',')]
    jump_at: Vec<f32>,

    /// Let the autopilot play
    #[arg(long)]
    idle: bool,

    /// Seed for burst particles
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Level catalog JSON file (defaults to the built-in levels)
    #[arg(long)]
    levels: Option<PathBuf>,
}

fn load_catalog(path: Option<&PathBuf>) -> Result<LevelCatalog> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            LevelCatalog::from_json(&json).with_context(|| format!("loading {}", path.display()))
        }
        None => LevelCatalog::builtin().context("loading built-in levels"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut options = Options::parse();
    options.jump_at.sort_by(|a, b| a.total_cmp(b));
    let settings = options
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    let catalog = load_catalog(options.levels.as_ref())?;

    log::info!(
        "Flip Runner: {} levels, seed {}, {} s{}",
        catalog.len(),
        options.seed,
        options.seconds,
        if options.idle { ", idle mode" } else { "" }
    );

    let state = GameState::new(catalog, options.seed);
    let mut driver = Driver::new(state, LogHost::default(), settings);
    driver.set_idle_mode(options.idle);

    let frames = (options.seconds / SIM_DT).ceil() as u64;
    let mut script = options.jump_at.iter().peekable();

    for frame in 0..frames {
        let now = frame as f32 * SIM_DT;
        while script.next_if(|&&t| t <= now).is_some() {
            driver.on_jump_requested();
        }

        driver.update(SIM_DT);

        if driver.state().phase == GamePhase::Won {
            log::info!("Won after {:.2} s", driver.state().clock_ms / 1000.0);
            break;
        }
    }

    let host = driver.host();
    log::info!(
        "Finished at level {}/{} with {} deaths",
        host.level.0,
        host.level.1,
        host.deaths
    );

    Ok(())
}
