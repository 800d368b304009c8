use ggez::{event, GameResult};
use log::{error, info};
use neon_snake::app::App;
use neon_snake::config::{GameConfig, CONFIG_FILE};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;

const LOG_FILE: &str = "neon_snake.log";

fn init_logging() {
    match File::create(LOG_FILE) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Info, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled, cannot create {}: {}", LOG_FILE, e),
    }
}

fn main() -> GameResult {
    init_logging();
    info!("Starting Neon Snake");

    let config = GameConfig::load(CONFIG_FILE).unwrap_or_else(|e| {
        error!("Using default configuration: {}", e);
        GameConfig::default()
    });

    let window_setup = ggez::conf::WindowSetup::default()
        .title(&config.title)
        .vsync(false);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(config.window_width(), config.window_height())
        .resizable(false);

    let (mut ctx, event_loop) = ggez::ContextBuilder::new("neon_snake", "neon_snake")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = App::new(&mut ctx, config)?;
    event::run(ctx, event_loop, app)
}
