use ggez::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "neon_snake.json";

/// Height of the band above the playfield holding the title and scores.
pub const HEADER_HEIGHT: u32 = 60;
/// Extra window height reserved for the header plate.
const HEADER_SPACE: u32 = 80;
/// The bezel plates sit 8px outside the playfield.
const MIN_BORDER: u32 = 8;
const MAX_WINDOW_SIDE: u32 = 8192;

/// Everything the game needs to know before it starts. Built once in `main`
/// and handed to the loop and to every `GameState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub grid_width: i32,
    pub grid_height: i32,
    /// Cell edge in pixels
    pub cell_size: u32,
    /// Pixels around the playfield
    pub border: u32,
    pub fps: u32,
    pub start_length: usize,
    /// Initial milliseconds between ticks; smaller is faster
    pub move_delay_ms: u32,
    pub min_delay_ms: u32,
    /// Speed up every N fruit
    pub speedup_every: u32,
    pub speedup_step_ms: u32,
    pub glow_layers: u32,
    pub high_score_path: PathBuf,
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "NEON SNAKE - ARCADE".to_string(),
            grid_width: 24,
            grid_height: 20,
            cell_size: 24,
            border: 32,
            fps: 60,
            start_length: 4,
            move_delay_ms: 140,
            min_delay_ms: 70,
            speedup_every: 4,
            speedup_step_ms: 6,
            glow_layers: 6,
            high_score_path: PathBuf::from("snake_highscore.txt"),
            sound: true,
        }
    }
}

impl GameConfig {
    /// Read overrides from a JSON file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(GameError::ConfigError(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        let config: GameConfig = serde_json::from_str(&contents).map_err(|e| {
            GameError::ConfigError(format!("cannot parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GameResult {
        let fail = |msg: &str| Err(GameError::ConfigError(msg.to_string()));

        if self.grid_width < 2 || self.grid_height < 2 {
            return fail("grid must be at least 2x2");
        }
        if self.start_length == 0 || self.start_length > (self.grid_width / 3) as usize {
            return fail("start_length must be between 1 and grid_width / 3");
        }
        if self.min_delay_ms == 0 || self.move_delay_ms < self.min_delay_ms {
            return fail("move_delay_ms must be at least min_delay_ms, which must be positive");
        }
        if self.speedup_every == 0 {
            return fail("speedup_every must be positive");
        }
        if self.fps == 0 || self.cell_size == 0 {
            return fail("fps and cell_size must be positive");
        }
        if self.border < MIN_BORDER {
            return fail("border must be at least 8 pixels");
        }
        let side = |cells: i32, extra: u32| {
            (cells as u32)
                .checked_mul(self.cell_size)
                .and_then(|px| px.checked_add(self.border.checked_mul(2)?))
                .and_then(|px| px.checked_add(extra))
                .filter(|&px| px <= MAX_WINDOW_SIDE)
        };
        if side(self.grid_width, 0).is_none() || side(self.grid_height, HEADER_SPACE).is_none() {
            return fail("window would be larger than 8192 pixels on a side");
        }
        Ok(())
    }

    pub fn window_width(&self) -> f32 {
        (self.grid_width as u32 * self.cell_size + self.border * 2) as f32
    }

    pub fn window_height(&self) -> f32 {
        (self.grid_height as u32 * self.cell_size + self.border * 2 + HEADER_SPACE) as f32
    }
}
