//! Renderer-facing snapshot of a game session
use super::direction::Direction;
use super::grid::Cell;
use super::snake::Collision;
use crate::consts;

/// Everything needed to draw one frame.  Positions are in the same pixel
/// space the session was laid out in, with `y` growing upwards.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Scene {
    pub(crate) cell_size: i32,
    pub(crate) cols: i32,
    pub(crate) rows: i32,

    /// The cells behind the snake's head, nearest first
    pub(crate) body: Vec<Cell>,

    pub(crate) head: HeadSprite,
    pub(crate) food: FoodSprite,

    /// Whether the background should be drawn in the death-flash tint
    pub(crate) death_flash: bool,

    pub(crate) score: u32,
    pub(crate) game_over: Option<GameOver>,
}

/// The final result of a finished game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOver {
    pub(crate) score: u32,
    pub(crate) cause: GameOverCause,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameOverCause {
    Collision(Collision),
    /// The snake covers the whole board and no food can be placed
    BoardFilled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct HeadSprite {
    pub(crate) cell: Cell,
    pub(crate) pop: f64,
    pub(crate) direction: Direction,
}

impl HeadSprite {
    /// The head square, scaled by the current pop about the cell's center
    pub(crate) fn square(&self, cell_size: i32) -> Square {
        Square::scaled(self.cell, cell_size, self.pop)
    }

    /// The two eye squares, placed near the edge of the cell the head is
    /// moving towards
    pub(crate) fn eyes(&self, cell_size: i32) -> [Square; 2] {
        let g = f64::from(cell_size);
        let size = g * consts::EYE_SIZE;
        let inset = g * consts::EYE_INSET;
        let (x, y) = (f64::from(self.cell.x), f64::from(self.cell.y));
        consts::EYE_LANES.map(|lane| {
            let (ex, ey) = match self.direction {
                Direction::Right => (x + g - inset, y + g * lane),
                Direction::Left => (x + inset - size, y + g * lane),
                Direction::Up => (x + g * (1.0 - lane), y + g - inset),
                Direction::Down => (x + g * (1.0 - lane), y + inset - size),
            };
            Square { x: ex, y: ey, size }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FoodSprite {
    pub(crate) cell: Cell,
    pub(crate) scale: f64,
}

impl FoodSprite {
    /// The food square, scaled by the current pulse about the cell's center
    pub(crate) fn square(&self, cell_size: i32) -> Square {
        Square::scaled(self.cell, cell_size, self.scale)
    }
}

/// An axis-aligned square with its bottom-left corner at `(x, y)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Square {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) size: f64,
}

impl Square {
    /// The unscaled square covering `cell`
    pub(crate) fn of_cell(cell: Cell, cell_size: i32) -> Square {
        Square::scaled(cell, cell_size, 1.0)
    }

    fn scaled(cell: Cell, cell_size: i32, scale: f64) -> Square {
        let g = f64::from(cell_size);
        let size = g * scale;
        let off = (g - size) / 2.0;
        Square {
            x: f64::from(cell.x) + off,
            y: f64::from(cell.y) + off,
            size,
        }
    }
}
