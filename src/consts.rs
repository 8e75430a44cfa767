//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Smallest permitted grid cell size, in pixels
pub(crate) const GRID_MIN: i32 = 20;

/// Largest permitted grid cell size, in pixels
pub(crate) const GRID_MAX: i32 = 28;

/// The cell size is derived by dividing the viewport width into this many
/// columns (before clamping to [`GRID_MIN`]..=[`GRID_MAX`])
pub(crate) const CELLS_ACROSS: i32 = 30;

/// Time between snake steps at the start of a session
pub(crate) const START_SPEED: Duration = Duration::from_millis(300);

/// How much the step interval shrinks each time the speed goes up
pub(crate) const SPEED_STEP: Duration = Duration::from_millis(20);

/// The step interval never drops below this
pub(crate) const MIN_SPEED: Duration = Duration::from_millis(80);

/// The speed goes up every time the score reaches a multiple of this
pub(crate) const POINTS_PER_SPEED: u32 = 4;

/// Length of the snake at the start of a session
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Amount the food's scale changes by each frame
pub(crate) const FOOD_PULSE_RATE: f64 = 0.01;

/// The food pulse turns around once its scale exceeds this
pub(crate) const FOOD_SCALE_MAX: f64 = 1.15;

/// The food pulse turns around once its scale drops below this
pub(crate) const FOOD_SCALE_MIN: f64 = 0.85;

/// Fraction of the remaining head pop removed each frame
pub(crate) const HEAD_POP_DECAY: f64 = 0.25;

/// Head scale right after eating
pub(crate) const HEAD_POP_PEAK: f64 = 1.25;

/// Number of frames the background flashes for after the snake dies
pub(crate) const DEATH_FLASH_FRAMES: u32 = 10;

/// Eye edge length as a fraction of the cell size
pub(crate) const EYE_SIZE: f64 = 0.15;

/// Distance of the eyes from the leading edge as a fraction of the cell size
pub(crate) const EYE_INSET: f64 = 0.2;

/// Positions of the two eyes across the head, as fractions of the cell size
pub(crate) const EYE_LANES: [f64; 2] = [0.65, 0.35];

/// Time between rendered frames
pub(crate) const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

/// Number of virtual pixels presented to the game per terminal cell.  Equal
/// to [`GRID_MIN`] so that every grid cell fits in one terminal cell.
pub(crate) const PIXELS_PER_TERMINAL_CELL: u16 = 20;

/// Head scale above which the head is drawn highlighted
pub(crate) const HEAD_POP_HIGHLIGHT: f64 = 1.05;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food at or above its resting size
pub(crate) const FOOD_LARGE_SYMBOL: char = '●';

/// Glyph for the food below its resting size
pub(crate) const FOOD_SMALL_SYMBOL: char = '•';

/// Glyph for the snake's head once the game is over
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Color of the snake
pub(crate) const SNAKE_COLOR: Color = Color::Green;

/// Color of the snake's eyes in the pixel view
pub(crate) const EYE_COLOR: Color = Color::White;

/// Color of the food
pub(crate) const FOOD_COLOR: Color = Color::LightRed;

/// Background of the play area while the death flash is running
pub(crate) const DEATH_FLASH_COLOR: Color = Color::Rgb(77, 0, 0);

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(SNAKE_COLOR).add_modifier(Modifier::BOLD);

/// Style for the snake's head while it is popping after a meal
pub(crate) const SNAKE_POP_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::REVERSED);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(FOOD_COLOR);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(FOOD_COLOR)
    .add_modifier(Modifier::REVERSED);

/// Style for the play area while the death flash is running
pub(crate) const DEATH_FLASH_STYLE: Style = Style::new().bg(DEATH_FLASH_COLOR);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
