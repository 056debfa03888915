mod backend;
mod config;
mod game_task;
mod state;
mod ui;

use clap::Parser;
use common::logger::init_logger;
use common::{log, warn};
use eframe::egui;
use tokio::sync::mpsc;

use backend::{StubAudioBackend, StubHapticBackend};
use config::Config;
use game_task::game_task;
use state::SharedState;
use ui::GameApp;

#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe_client")]
#[command(about = "Tic-tac-toe for two players sharing one screen")]
struct Args {
    /// Settings file path; defaults to a file next to the executable
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger();

    let config_manager = config::get_config_manager(args.config.as_deref());
    let initial_config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load settings, falling back to defaults: {}", e);
            Config::default()
        }
    };
    log!("Settings loaded: {:?}", initial_config);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let task_config = initial_config.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(game_task(
            shared_state_clone,
            command_rx,
            config_manager,
            task_config,
            StubAudioBackend,
            StubHapticBackend,
        ));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 520.0])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| Ok(Box::new(GameApp::new(shared_state, command_tx, initial_config)))),
    )?;

    Ok(())
}
