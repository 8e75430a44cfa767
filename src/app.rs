use crate::board::{play_area, SceneView, ViewMode};
use crate::command::Command;
use crate::consts;
use crate::game::{Game, GameEvent};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Flex, Layout, Size},
    text::Line,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The host around a [`Game`]: lays it out from the terminal size, feeds it
/// key presses and frame times, and draws its scenes
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    /// The terminal size the game was last laid out against, whether or not
    /// the layout was accepted
    layout_size: Option<Size>,
    mode: ViewMode,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App {
            game,
            layout_size: None,
            mode: ViewMode::default(),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let mut last_frame = Instant::now();
        while !self.quitting {
            self.layout(terminal.size()?);
            terminal.draw(|frame| self.draw(frame))?;
            let next_frame = last_frame + consts::FRAME_PERIOD;
            while !self.quitting {
                let wait = next_frame.saturating_duration_since(Instant::now());
                if wait.is_zero() || !poll(wait)? {
                    break;
                }
                self.handle_event(&read()?);
            }
            let now = Instant::now();
            self.frame(now.saturating_duration_since(last_frame));
            last_frame = now;
        }
        log::info!("Quitting with score {}", self.game.score());
        Ok(())
    }

    /// Lay the game out over the play area, the first time the terminal is
    /// big enough
    fn layout(&mut self, size: Size) {
        if self.game.playing() || self.game.game_over() || self.layout_size == Some(size) {
            return;
        }
        self.layout_size = Some(size);
        let area = play_area(size);
        let px = f64::from(consts::PIXELS_PER_TERMINAL_CELL);
        if let Err(e) = self
            .game
            .on_layout(f64::from(area.width) * px, f64::from(area.height) * px)
        {
            log::warn!("Terminal size {}×{} unusable: {e}", size.width, size.height);
        }
    }

    fn frame(&mut self, dt: Duration) {
        match self.game.tick(dt) {
            Some(GameEvent::Ate { score, speed }) => {
                log::trace!("Score is now {score}; step interval {speed:?}");
            }
            Some(GameEvent::GameOver(over)) => {
                log::info!("Final score: {}", over.score);
            }
            None => (),
        }
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(ev) = event.as_key_press_event() else {
            return;
        };
        let Some(cmd) = Command::from_key_event(ev) else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Turn(direction) => self.game.set_direction(direction),
            Command::ToggleView => {
                self.mode = self.mode.toggle();
                log::debug!("Switched to {:?} view", self.mode);
            }
            Command::Restart => {
                if self.game.game_over() {
                    self.game.reset();
                }
            }
        }
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        if let Some(scene) = self.game.scene() {
            frame.render_widget(SceneView::new(&scene, self.mode), frame.area());
        } else {
            let [area] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(frame.area());
            frame.render_widget(
                Line::raw("Enlarge the terminal to start playing").centered(),
                area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Tuning};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_app() -> App<ChaCha12Rng> {
        App::new(Game::new_with_rng(
            Tuning::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        ))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn waits_for_usable_terminal() {
        let mut app = new_app();
        app.layout(Size::new(5, 5));
        assert!(!app.game.playing());
        app.layout(Size::new(80, 24));
        assert!(app.game.playing());
        let scene = app.game.scene().expect("game should be laid out");
        // 78×19 terminal cells at 20px each is a 1560×380 viewport, which
        // gets the largest cell size
        assert_eq!(scene.cell_size, 28);
        assert_eq!((scene.cols, scene.rows), (55, 13));
    }

    #[test]
    fn keys_steer_and_quit() {
        let mut app = new_app();
        app.layout(Size::new(80, 24));
        app.handle_event(&key(KeyCode::Up));
        assert_eq!(
            app.game.scene().map(|s| s.head.direction),
            Some(Direction::Up)
        );
        app.handle_event(&key(KeyCode::Char('h')));
        assert_eq!(
            app.game.scene().map(|s| s.head.direction),
            Some(Direction::Left)
        );
        assert!(!app.quitting);
        app.handle_event(&key(KeyCode::Char('v')));
        assert_eq!(app.mode, ViewMode::Pixels);
        app.handle_event(&key(KeyCode::Char('q')));
        assert!(app.quitting);
    }

    #[test]
    fn restart_only_after_game_over() {
        let mut app = new_app();
        app.layout(Size::new(80, 24));
        app.handle_event(&key(KeyCode::Up));
        app.frame(consts::START_SPEED);
        let moved = app.game.scene().map(|s| s.head.cell);
        app.handle_event(&key(KeyCode::Char('r')));
        assert_eq!(app.game.scene().map(|s| s.head.cell), moved);

        // Turning back on itself ends the game
        app.handle_event(&key(KeyCode::Down));
        app.frame(consts::START_SPEED);
        assert!(app.game.game_over());
        app.handle_event(&key(KeyCode::Char('r')));
        assert!(app.game.playing());
        assert_ne!(app.game.scene().map(|s| s.head.cell), moved);
    }
}
