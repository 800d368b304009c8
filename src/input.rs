use crate::game::GameState;
use crate::grid::Heading;
use ggez::input::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Heading),
    TogglePause,
    Restart,
    Quit,
    None,
}

/// Translate a key press. Arrow keys and WASD are interchangeable.
pub fn map_key(keycode: KeyCode) -> KeyAction {
    match keycode {
        KeyCode::Up | KeyCode::W => KeyAction::Turn(Heading::Up),
        KeyCode::Down | KeyCode::S => KeyAction::Turn(Heading::Down),
        KeyCode::Left | KeyCode::A => KeyAction::Turn(Heading::Left),
        KeyCode::Right | KeyCode::D => KeyAction::Turn(Heading::Right),
        KeyCode::P => KeyAction::TogglePause,
        KeyCode::R | KeyCode::Space => KeyAction::Restart,
        KeyCode::Escape | KeyCode::Q => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

/// What the loop must do after an action has been applied to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Restart,
    Quit,
}

/// Apply an action to the running game. Actions that make no sense in the
/// current phase are dropped.
pub fn dispatch(game: &mut GameState, action: KeyAction) -> Control {
    match action {
        KeyAction::Turn(heading) => game.request_turn(heading),
        KeyAction::TogglePause => {
            if game.is_alive() {
                game.toggle_pause();
            }
        }
        KeyAction::Restart if !game.is_alive() => return Control::Restart,
        KeyAction::Quit => return Control::Quit,
        KeyAction::Restart | KeyAction::None => {}
    }
    Control::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Phase;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn game_in(dir: &TempDir) -> GameState {
        let config = GameConfig {
            high_score_path: dir.path().join("hs.txt"),
            ..GameConfig::default()
        };
        GameState::with_rng(&config, StdRng::seed_from_u64(2))
    }

    #[test]
    fn test_arrow_keys_and_wasd_agree() {
        assert_eq!(map_key(KeyCode::Up), KeyAction::Turn(Heading::Up));
        assert_eq!(map_key(KeyCode::W), KeyAction::Turn(Heading::Up));
        assert_eq!(map_key(KeyCode::Down), KeyAction::Turn(Heading::Down));
        assert_eq!(map_key(KeyCode::S), KeyAction::Turn(Heading::Down));
        assert_eq!(map_key(KeyCode::Left), KeyAction::Turn(Heading::Left));
        assert_eq!(map_key(KeyCode::A), KeyAction::Turn(Heading::Left));
        assert_eq!(map_key(KeyCode::Right), KeyAction::Turn(Heading::Right));
        assert_eq!(map_key(KeyCode::D), KeyAction::Turn(Heading::Right));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(KeyCode::P), KeyAction::TogglePause);
        assert_eq!(map_key(KeyCode::R), KeyAction::Restart);
        assert_eq!(map_key(KeyCode::Space), KeyAction::Restart);
        assert_eq!(map_key(KeyCode::Escape), KeyAction::Quit);
        assert_eq!(map_key(KeyCode::Q), KeyAction::Quit);
        assert_eq!(map_key(KeyCode::X), KeyAction::None);
    }

    #[test]
    fn test_restart_only_when_over() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        assert_eq!(dispatch(&mut game, KeyAction::Restart), Control::Continue);

        while game.is_alive() {
            game.tick();
        }
        assert_eq!(dispatch(&mut game, KeyAction::Restart), Control::Restart);
    }

    #[test]
    fn test_turn_dropped_after_game_over() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        while game.is_alive() {
            game.tick();
        }
        let before = game.pending_heading();
        assert_eq!(dispatch(&mut game, KeyAction::Turn(Heading::Up)), Control::Continue);
        assert_eq!(game.pending_heading(), before);
    }

    #[test]
    fn test_pause_toggle() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        dispatch(&mut game, KeyAction::TogglePause);
        assert_eq!(game.phase(), Phase::Paused);
        dispatch(&mut game, KeyAction::TogglePause);
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn test_quit_always_honoured() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        assert_eq!(dispatch(&mut game, KeyAction::Quit), Control::Quit);
        game.toggle_pause();
        assert_eq!(dispatch(&mut game, KeyAction::Quit), Control::Quit);
    }

    #[test]
    fn test_reverse_turn_dropped() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        dispatch(&mut game, KeyAction::Turn(Heading::Left));
        assert_eq!(game.pending_heading(), Heading::Right);
        dispatch(&mut game, KeyAction::Turn(Heading::Down));
        assert_eq!(game.pending_heading(), Heading::Down);
    }
}
