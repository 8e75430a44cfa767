mod animation;
mod clock;
mod direction;
mod food;
mod grid;
pub(crate) mod scene;
mod snake;
mod speed;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, LayoutError};
pub(crate) use self::snake::Collision;
pub(crate) use self::speed::{Tuning, TuningError};
use self::animation::Animation;
use self::clock::SimClock;
use self::food::FoodSpawner;
use self::grid::Grid;
use self::scene::{FoodSprite, GameOver, GameOverCause, HeadSprite, Scene};
use self::snake::{Snake, StepResult};
use crate::consts;
use rand::Rng;
use std::time::Duration;

/// A game session: the snake, its food, the speed curve, the score, and the
/// cosmetic animations, advanced one rendered frame at a time by the host.
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    spawner: FoodSpawner<R>,
    tuning: Tuning,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(tuning: Tuning) -> Self {
        Game::new_with_rng(tuning, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(tuning: Tuning, rng: R) -> Game<R> {
        Game {
            spawner: FoodSpawner::new(rng),
            tuning,
            state: GameState::Uninitialized,
        }
    }

    /// Establish the grid from the size of the play area and start playing.
    /// Only the first successful call has any effect; the grid is fixed from
    /// then on.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the viewport has no area or is too small for the
    /// starting snake plus a food item.  The session stays uninitialized.
    pub(crate) fn on_layout(&mut self, width: f64, height: f64) -> Result<(), LayoutError> {
        if !matches!(self.state, GameState::Uninitialized) {
            return Ok(());
        }
        let grid = Grid::for_viewport(width, height)?;
        let too_small = LayoutError::TooSmall {
            cols: grid.cols(),
            rows: grid.rows(),
        };
        let snake = new_snake(&grid);
        if !snake.occupied().into_iter().all(|c| grid.in_bounds(c)) {
            return Err(too_small);
        }
        let board = self.new_board(grid).map_err(|_| too_small)?;
        log::info!(
            "Laid out {}×{} grid of {}px cells over {width}×{height} viewport",
            grid.cols(),
            grid.rows(),
            grid.cell_size()
        );
        self.state = GameState::Playing(board);
        Ok(())
    }

    /// Start over with a fresh snake, food, speed, score, and animations on
    /// the same grid.  Does nothing before the grid has been laid out.
    pub(crate) fn reset(&mut self) {
        let Some(grid) = self.state.board().map(|b| b.grid) else {
            return;
        };
        match self.new_board(grid) {
            Ok(board) => {
                log::info!("Starting new game");
                self.state = GameState::Playing(board);
            }
            Err(e) => {
                // on_layout() only accepts grids with room for a fresh board,
                // so this should not happen
                log::error!("Could not start new game: {e}");
            }
        }
    }

    /// Advance the session by one rendered frame that took `dt`.
    ///
    /// While playing, the snake steps if its interval has elapsed and the
    /// outcome of the step is applied, then the pulse and pop animations
    /// advance.  After the game is over, only the death flash keeps fading.
    pub(crate) fn tick(&mut self, dt: Duration) -> Option<GameEvent> {
        let board = match self.state {
            GameState::Playing(ref mut board) => board,
            GameState::Over(ref mut board, _) => {
                board.animation.fade_flash();
                return None;
            }
            GameState::Uninitialized => return None,
        };
        let step = board
            .clock
            .advance(dt)
            .then(|| board.snake.step(&board.grid, board.food));
        let event = match step {
            None | Some(StepResult::Moved) => None,
            Some(StepResult::Ate) => self.eat(),
            Some(StepResult::Collided(collision)) => {
                self.end(GameOverCause::Collision(collision))
            }
        };
        if let Some(board) = self.state.board_mut() {
            board.animation.tick();
        }
        event
    }

    fn eat(&mut self) -> Option<GameEvent> {
        let GameState::Playing(ref mut board) = self.state else {
            return None;
        };
        board.score += 1;
        board.animation.on_eat();
        let speed = self.tuning.speed_after(board.score, board.clock.interval());
        if speed != board.clock.interval() {
            log::debug!("Score {} reached; step interval now {speed:?}", board.score);
            board.clock.set_interval(speed);
        }
        match self.spawner.spawn(&board.grid, &board.snake.occupied()) {
            Ok(food) => {
                board.food = food;
                log::debug!(
                    "Ate food; score {}, length {}, next food at ({}, {})",
                    board.score,
                    board.snake.len(),
                    food.x,
                    food.y
                );
                Some(GameEvent::Ate {
                    score: board.score,
                    speed,
                })
            }
            Err(e) => {
                log::error!("{e}; ending game with score {}", board.score);
                self.end(GameOverCause::BoardFilled)
            }
        }
    }

    fn new_board(&mut self, grid: Grid) -> Result<Board, grid::GridFull> {
        let snake = new_snake(&grid);
        let food = self.spawner.spawn(&grid, &snake.occupied())?;
        Ok(Board {
            grid,
            snake,
            food,
            clock: SimClock::new(self.tuning.start_speed()),
            score: 0,
            animation: Animation::new(),
        })
    }
}

impl<R> Game<R> {
    /// Set the direction the snake will turn to on its next step.  Ignored
    /// unless a game is in progress.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if let GameState::Playing(ref mut board) = self.state {
            board.snake.turn(direction);
        }
    }

    /// Return a snapshot of the session for drawing, or `None` if the grid
    /// has not been laid out yet
    pub(crate) fn scene(&self) -> Option<Scene> {
        let board = self.state.board()?;
        let game_over = match self.state {
            GameState::Over(ref board, cause) => Some(GameOver {
                score: board.score,
                cause,
            }),
            _ => None,
        };
        Some(Scene {
            cell_size: board.grid.cell_size(),
            cols: board.grid.cols(),
            rows: board.grid.rows(),
            body: board.snake.body().iter().copied().collect(),
            head: HeadSprite {
                cell: board.snake.head(),
                pop: board.animation.head_pop(),
                direction: board.snake.direction(),
            },
            food: FoodSprite {
                cell: board.food,
                scale: board.animation.food_scale(),
            },
            death_flash: board.animation.flashing(),
            score: board.score,
            game_over,
        })
    }

    pub(crate) fn score(&self) -> u32 {
        self.state.board().map_or(0, |b| b.score)
    }

    pub(crate) fn playing(&self) -> bool {
        matches!(self.state, GameState::Playing(_))
    }

    pub(crate) fn game_over(&self) -> bool {
        matches!(self.state, GameState::Over(..))
    }

    fn end(&mut self, cause: GameOverCause) -> Option<GameEvent> {
        let board = match std::mem::replace(&mut self.state, GameState::Uninitialized) {
            GameState::Playing(mut board) => {
                board.animation.on_death();
                board
            }
            other => {
                self.state = other;
                return None;
            }
        };
        let over = GameOver {
            score: board.score,
            cause,
        };
        log::info!("Game over ({cause:?}) with score {}", board.score);
        self.state = GameState::Over(board, cause);
        Some(GameEvent::GameOver(over))
    }
}

/// The starting snake: centered, facing right, trailing off to the left
fn new_snake(grid: &Grid) -> Snake {
    Snake::new(
        grid.center(),
        Direction::Right,
        consts::INITIAL_SNAKE_LENGTH,
        grid.cell_size(),
    )
}

/// Notable things that happened during a frame
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameEvent {
    Ate { score: u32, speed: Duration },
    GameOver(GameOver),
}

#[derive(Clone, Debug, PartialEq)]
enum GameState {
    /// Waiting for the first usable layout
    Uninitialized,
    Playing(Board),
    Over(Board, GameOverCause),
}

impl GameState {
    fn board(&self) -> Option<&Board> {
        match self {
            GameState::Uninitialized => None,
            GameState::Playing(board) | GameState::Over(board, _) => Some(board),
        }
    }

    fn board_mut(&mut self) -> Option<&mut Board> {
        match self {
            GameState::Uninitialized => None,
            GameState::Playing(board) | GameState::Over(board, _) => Some(board),
        }
    }
}

/// Everything that gets replaced wholesale when a new game starts
#[derive(Clone, Debug, PartialEq)]
struct Board {
    grid: Grid,
    snake: Snake,
    food: Cell,
    clock: SimClock,
    score: u32,
    animation: Animation,
}
