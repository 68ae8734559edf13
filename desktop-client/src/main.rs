mod colors;
mod config;
mod input;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::games::SessionRng;
use common::score::{BEST_SCORE_FILE, BestScoreStore};
use common::{log, logger};
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;

use config::{CONFIG_FILE, Config, get_config_manager};
use offline::local_game_task;
use state::{CommandSender, SharedState};
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_desktop", about = "Classic snake on a square grid")]
struct Args {
    /// Settings file, created on first change.
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[arg(long, default_value = BEST_SCORE_FILE)]
    best_score_file: PathBuf,

    /// Fixed seed for apple placement.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Using default settings: {}", e);
        Config::default()
    });

    let best_scores = BestScoreStore::from_file(&args.best_score_file);
    let best_score = best_scores.best_score().unwrap_or_else(|e| {
        log!("Ignoring stored best score: {}", e);
        0
    });

    let shared_state = SharedState::new(best_score);
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    let settings = config.game.to_session_settings();

    let shared_state_clone = shared_state.clone();
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                return;
            }
        };
        rt.block_on(local_game_task(
            settings,
            rng,
            best_scores,
            shared_state_clone,
            command_rx,
        ));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 760.0])
            .with_title("Snake"),
        ..Default::default()
    };

    let command_sender = CommandSender::new(command_tx);
    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                command_sender,
                config_manager,
                config,
            )))
        }),
    )?;

    Ok(())
}
