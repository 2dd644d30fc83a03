mod cli;
mod colors;
mod config;
mod game_loop;
mod input;
mod ui;

use clap::Parser;
use common::config::ConfigSource;
use common::games::SessionRng;
use common::log;
use common::logger::init_logger;
use eframe::egui;

use cli::Cli;
use config::get_config_manager;
use game_loop::GameLoop;
use ui::{SnakeApp, FOOTER_HEIGHT, HEADER_HEIGHT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_manager = get_config_manager(cli.config.clone());
    let config_exists = config_manager.source().read()?.is_some();
    let file_config = config_manager.get_config()?;
    let config = cli.apply(file_config.clone())?;

    init_logger(Some("snake".to_string()), config.verbose_logging);

    if !config_exists {
        match config_manager.set_config(&file_config) {
            Ok(()) => log!("wrote default config to {}", config_manager.source().path().display()),
            Err(e) => log!("could not write default config: {}", e),
        }
    }

    let settings = config.game.to_settings();
    let rng = match config.game.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "starting {0}x{0} game, tick {1}ms, seed {2}",
        settings.grid_size,
        settings.tick_interval.as_millis(),
        rng.seed()
    );

    let game_loop = GameLoop::new(&settings, rng);
    let cell_size = config.window.cell_size as f32;
    let side = settings.grid_size as f32 * cell_size;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 16.0, side + HEADER_HEIGHT + FOOTER_HEIGHT])
            .with_resizable(false)
            .with_title("Snake Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Game",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(game_loop, cell_size)))),
    )?;

    Ok(())
}
