use super::grid::Cell;

/// A direction of travel on the grid.  `y` grows upwards, so `Up` moves
/// towards larger `y`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a numeric arrow-key code (273 through 276) onto a direction.  The
    /// terminal host gets named keys instead; its arrow bindings are checked
    /// against this table.
    #[cfg(test)]
    pub(crate) fn from_keycode(code: u32) -> Option<Direction> {
        match code {
            273 => Some(Direction::Up),
            274 => Some(Direction::Down),
            275 => Some(Direction::Right),
            276 => Some(Direction::Left),
            _ => None,
        }
    }

    /// Return the `(dx, dy)` unit step for this direction
    pub(crate) fn unit(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Return the cell one grid step of `cell_size` pixels away from `cell`.
    /// No bounds checking is done.
    pub(crate) fn advance(self, cell: Cell, cell_size: i32) -> Cell {
        let (dx, dy) = self.unit();
        Cell::new(
            cell.x.saturating_add(dx.saturating_mul(cell_size)),
            cell.y.saturating_add(dy.saturating_mul(cell_size)),
        )
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
