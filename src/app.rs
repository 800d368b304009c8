use crate::audio::Sfx;
use crate::config::GameConfig;
use crate::game::{GameState, TickOutcome};
use crate::input::{self, Control};
use crate::render::{Renderer, FLASH_MS};
use crate::timing::{FramePacer, TickAccumulator};
use ggez::event::EventHandler;
use ggez::graphics;
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameResult};
use log::info;

/// Owns the game for the lifetime of the window and drives it frame by frame.
pub struct App {
    config: GameConfig,
    game: GameState,
    ticks: TickAccumulator,
    pacer: FramePacer,
    renderer: Renderer,
    pop: Sfx,
    flash_ms: f32,
}

impl App {
    pub fn new(ctx: &mut Context, config: GameConfig) -> GameResult<Self> {
        let renderer = Renderer::new(ctx, &config)?;
        let pop = Sfx::pop(config.sound);
        info!("Sound {}", if pop.is_enabled() { "enabled" } else { "disabled" });

        let game = GameState::new(&config);
        info!("New game, high score {}", game.high_score());

        Ok(App {
            pacer: FramePacer::new(config.fps),
            ticks: TickAccumulator::new(),
            game,
            renderer,
            pop,
            flash_ms: 0.0,
            config,
        })
    }

    fn restart(&mut self) {
        self.game = GameState::new(&self.config);
        self.ticks.clear();
        self.flash_ms = 0.0;
        info!("Restarted, high score {}", self.game.high_score());
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = ctx.time.delta();
        self.flash_ms = (self.flash_ms - dt.as_secs_f32() * 1000.0).max(0.0);

        if !self.game.is_running() {
            return Ok(());
        }

        self.ticks.add(dt);
        while self.ticks.take_tick(self.game.move_delay_ms()) {
            if let Some(TickOutcome::Grew) = self.game.tick() {
                self.pop.play();
                self.flash_ms = FLASH_MS;
            }
            // A finished run banks nothing for the next one.
            if !self.game.is_running() {
                self.ticks.clear();
                break;
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Renderer::background());
        self.renderer
            .draw(ctx, &mut canvas, &self.game, self.flash_ms)?;
        canvas.finish(ctx)?;
        self.pacer.wait();
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        if let Some(keycode) = input.keycode {
            match input::dispatch(&mut self.game, input::map_key(keycode)) {
                Control::Continue => {}
                Control::Restart => self.restart(),
                Control::Quit => ctx.request_quit(),
            }
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        info!(
            "Quitting: score {}, high score {}",
            self.game.score(),
            self.game.high_score()
        );
        Ok(false)
    }
}
