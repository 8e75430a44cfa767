use super::direction::Direction;
use super::grid::{Cell, Grid};
use std::collections::{HashSet, VecDeque};

/// The snake: a head plus the cells trailing behind it.
///
/// Cells are pixel positions on the grid.  Each cell is one grid step from
/// the one before it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of the cells behind the head, nearest first
    pub(super) body: VecDeque<Cell>,

    /// The direction the snake will move in on its next step.  Turning only
    /// updates this; the turn takes effect when the step happens.
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a straight snake of `len` cells (at least one) with its head at
    /// `head`, facing `direction`, with the rest of its body trailing out
    /// behind it.
    pub(super) fn new(head: Cell, direction: Direction, len: usize, cell_size: i32) -> Snake {
        let behind = direction.reverse();
        let body = std::iter::successors(Some(head), |&c| Some(behind.advance(c, cell_size)))
            .skip(1)
            .take(len.saturating_sub(1))
            .collect();
        Snake {
            head,
            body,
            direction,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        self.head
    }

    /// Return the positions of the cells behind the head, nearest first
    pub(super) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Return every cell the snake covers
    pub(super) fn occupied(&self) -> HashSet<Cell> {
        std::iter::once(self.head)
            .chain(self.body.iter().copied())
            .collect()
    }

    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Change the direction for the next step.  Reversals are accepted; they
    /// just make the snake bite its own neck.
    pub(super) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Move the snake one cell in its current direction.
    ///
    /// A step that would leave the grid or land on any cell the snake
    /// currently covers (including the tail, even though the tail would be
    /// vacated by the same step) collides, and leaves the snake unchanged.
    /// Otherwise the head moves on; the tail is dropped unless the new head
    /// landed on `food`.
    pub(super) fn step(&mut self, grid: &Grid, food: Cell) -> StepResult {
        let new_head = self.direction.advance(self.head, grid.cell_size());
        if !grid.in_bounds(new_head) {
            return StepResult::Collided(Collision::Wall);
        }
        if self.body.contains(&new_head) {
            return StepResult::Collided(Collision::Body);
        }
        self.body.push_front(self.head);
        self.head = new_head;
        if new_head == food {
            StepResult::Ate
        } else {
            let _ = self.body.pop_back();
            StepResult::Moved
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum StepResult {
    Moved,
    Ate,
    Collided(Collision),
}

/// What the snake ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    Wall,
    Body,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn grid() -> Grid {
        Grid::for_viewport(600.0, 600.0).expect("600×600 should be a usable viewport")
    }

    /// Build a snake from a head-first list of cells
    fn snake_from<const N: usize>(pts: [(i32, i32); N], direction: Direction) -> Snake {
        let mut cells = pts.into_iter().map(|(x, y)| Cell::new(x, y));
        let head = cells.next().expect("snake should have a head");
        Snake {
            head,
            body: cells.collect(),
            direction,
        }
    }

    /// Return a snake's cells head first
    fn cells_of(snake: &Snake) -> Vec<(i32, i32)> {
        std::iter::once(snake.head())
            .chain(snake.body().iter().copied())
            .map(|c| (c.x, c.y))
            .collect()
    }

    const NO_FOOD: Cell = Cell::new(0, 0);

    #[test]
    fn new_snake_trails_behind_head() {
        let snake = Snake::new(Cell::new(300, 300), Direction::Right, 3, 20);
        assert_eq!(cells_of(&snake), [(300, 300), (280, 300), (260, 300)]);
        let snake = Snake::new(Cell::new(300, 300), Direction::Up, 3, 20);
        assert_eq!(cells_of(&snake), [(300, 300), (300, 280), (300, 260)]);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.occupied().len(), 3);
    }

    #[test]
    fn step_moves_forward() {
        let mut snake = Snake::new(Cell::new(300, 300), Direction::Right, 3, 20);
        assert_eq!(snake.step(&grid(), NO_FOOD), StepResult::Moved);
        assert_eq!(cells_of(&snake), [(320, 300), (300, 300), (280, 300)]);
    }

    #[test]
    fn step_onto_food_grows() {
        let mut snake = Snake::new(Cell::new(300, 300), Direction::Up, 3, 20);
        assert_eq!(snake.step(&grid(), Cell::new(300, 320)), StepResult::Ate);
        assert_eq!(
            cells_of(&snake),
            [(300, 320), (300, 300), (300, 280), (300, 260)]
        );
        assert_eq!(snake.step(&grid(), NO_FOOD), StepResult::Moved);
        assert_eq!(snake.len(), 4);
    }

    #[rstest]
    #[case(Cell::new(580, 300), Direction::Right)]
    #[case(Cell::new(0, 300), Direction::Left)]
    #[case(Cell::new(300, 580), Direction::Up)]
    #[case(Cell::new(300, 0), Direction::Down)]
    fn step_into_wall(#[case] head: Cell, #[case] direction: Direction) {
        let mut snake = Snake::new(head, direction, 3, 20);
        let before = snake.clone();
        assert_eq!(
            snake.step(&grid(), NO_FOOD),
            StepResult::Collided(Collision::Wall)
        );
        assert_eq!(snake, before);
    }

    #[test]
    fn reversing_bites_neck() {
        let mut snake = Snake::new(Cell::new(300, 300), Direction::Right, 3, 20);
        snake.turn(Direction::Left);
        assert_eq!(
            snake.step(&grid(), NO_FOOD),
            StepResult::Collided(Collision::Body)
        );
    }

    #[test]
    fn self_collision() {
        let mut snake = snake_from(
            [
                (100, 100),
                (120, 100),
                (120, 80),
                (100, 80),
                (80, 80),
                (80, 100),
            ],
            Direction::Down,
        );
        assert_eq!(
            snake.step(&grid(), NO_FOOD),
            StepResult::Collided(Collision::Body)
        );
    }

    #[test]
    fn chasing_tail_collides() {
        // A 2×2 loop: the head's next cell is the current tail, which the
        // step would vacate, but it still counts as a collision
        let mut snake = snake_from(
            [(100, 100), (120, 100), (120, 80), (100, 80)],
            Direction::Down,
        );
        assert_eq!(
            snake.step(&grid(), NO_FOOD),
            StepResult::Collided(Collision::Body)
        );
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn turn_applies_on_next_step() {
        let mut snake = Snake::new(Cell::new(300, 300), Direction::Right, 3, 20);
        snake.turn(Direction::Up);
        snake.turn(Direction::Down);
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.step(&grid(), NO_FOOD), StepResult::Moved);
        assert_eq!(snake.head(), Cell::new(300, 280));
    }
}
