use crate::config::GameConfig;
use crate::grid::{Cell, Grid, Heading};
use crate::high_score::{HighScoreStore, SaveOutcome};
use crate::snake::Snake;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    Wall,
    SelfBite,
    /// The snake filled every cell, nothing is left to eat.
    BoardCleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    Over(EndCause),
}

/// What a single tick did to the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Grew,
    Died(EndCause),
}

/// One run of the game, from reset to game over.
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    heading: Heading,
    pending_heading: Heading,
    phase: Phase,
    score: u32,
    high_score: u32,
    move_delay_ms: u32,
    min_delay_ms: u32,
    speedup_every: u32,
    speedup_step_ms: u32,
    eaten_since_speedup: u32,
    store: HighScoreStore,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Fresh run: new snake, new food, high score reloaded from the store.
    pub fn with_rng(config: &GameConfig, mut rng: StdRng) -> Self {
        let grid = Grid::new(config.grid_width, config.grid_height);
        let heading = Heading::Right;
        let snake = Snake::new(
            Cell::new(config.grid_width / 3, config.grid_height / 2),
            heading,
            config.start_length,
        );
        let food = grid.spawn_food(&mut rng, |c| snake.contains(c));
        let store = HighScoreStore::new(&config.high_score_path);
        let high_score = store.load();

        Self {
            grid,
            snake,
            food,
            heading,
            pending_heading: heading,
            phase: Phase::Running,
            score: 0,
            high_score,
            move_delay_ms: config.move_delay_ms,
            min_delay_ms: config.min_delay_ms,
            speedup_every: config.speedup_every,
            speedup_step_ms: config.speedup_step_ms,
            eaten_since_speedup: 0,
            store,
            rng,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn pending_heading(&self) -> Heading {
        self.pending_heading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_alive(&self) -> bool {
        !matches!(self.phase, Phase::Over(_))
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn move_delay_ms(&self) -> u32 {
        self.move_delay_ms
    }

    /// Buffer a turn for the next tick. Reversing onto the neck is ignored.
    pub fn request_turn(&mut self, heading: Heading) {
        if !self.is_alive() {
            return;
        }
        if heading != self.heading.opposite() {
            self.pending_heading = heading;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            over @ Phase::Over(_) => over,
        };
    }

    /// Advance the snake by one cell. Does nothing unless running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.is_running() {
            return None;
        }

        self.heading = self.pending_heading;
        let new_head = self.snake.head().step(self.heading);

        if !self.grid.contains(new_head) {
            return Some(self.end(EndCause::Wall));
        }
        // Checked before the tail moves, so the vacating tail cell still counts.
        if self.snake.contains(new_head) {
            return Some(self.end(EndCause::SelfBite));
        }

        self.snake.push_head(new_head);

        if Some(new_head) != self.food {
            self.snake.pop_tail();
            return Some(TickOutcome::Moved);
        }

        self.score += 1;
        self.eaten_since_speedup += 1;
        let snake = &self.snake;
        self.food = self.grid.spawn_food(&mut self.rng, |c| snake.contains(c));

        if self.eaten_since_speedup >= self.speedup_every {
            self.eaten_since_speedup = 0;
            self.move_delay_ms = self
                .move_delay_ms
                .saturating_sub(self.speedup_step_ms)
                .max(self.min_delay_ms);
            debug!("Speed up: move delay now {} ms", self.move_delay_ms);
        }

        if self.food.is_none() {
            self.end(EndCause::BoardCleared);
        }
        Some(TickOutcome::Grew)
    }

    fn end(&mut self, cause: EndCause) -> TickOutcome {
        self.phase = Phase::Over(cause);
        info!(
            "Game over ({:?}): score {}, length {}",
            cause,
            self.score,
            self.snake.len()
        );

        if self.score > self.high_score {
            self.high_score = self.score;
            match self.store.save(self.high_score) {
                SaveOutcome::Saved => info!("New high score saved: {}", self.high_score),
                SaveOutcome::Skipped => info!("New high score {} not persisted", self.high_score),
            }
        }
        TickOutcome::Died(cause)
    }
}
