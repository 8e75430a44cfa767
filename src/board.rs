use crate::consts;
use crate::game::scene::{GameOverCause, Scene, Square};
use crate::game::{Cell, Collision, Direction};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{self, Rectangle},
        Block, Widget,
    },
};

/// Rows taken up by everything other than the play area: the score bar, the
/// top and bottom borders, and two message lines
const CHROME_HEIGHT: u16 = 5;

/// Columns taken up by the side borders
const CHROME_WIDTH: u16 = 2;

/// Return the largest play area, in terminal cells, that [`SceneView`] can
/// draw within a terminal of the given size
pub(crate) fn play_area(terminal: Size) -> Size {
    Size {
        width: terminal.width.saturating_sub(CHROME_WIDTH),
        height: terminal.height.saturating_sub(CHROME_HEIGHT),
    }
}

/// How the play area is drawn
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum ViewMode {
    /// One glyph per grid cell
    #[default]
    Glyphs,

    /// The scene's squares drawn to scale in braille dots, eyes included
    Pixels,
}

impl ViewMode {
    pub(crate) fn toggle(self) -> ViewMode {
        match self {
            ViewMode::Glyphs => ViewMode::Pixels,
            ViewMode::Pixels => ViewMode::Glyphs,
        }
    }
}

/// Draws a [`Scene`] with each grid cell occupying one terminal cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SceneView<'a> {
    scene: &'a Scene,
    mode: ViewMode,
}

impl<'a> SceneView<'a> {
    pub(crate) fn new(scene: &'a Scene, mode: ViewMode) -> Self {
        SceneView { scene, mode }
    }

    fn render_glyphs(self, block_area: Rect, buf: &mut Buffer) {
        let scene = self.scene;
        let background = if scene.death_flash {
            consts::DEATH_FLASH_STYLE
        } else {
            Style::new()
        };
        Block::bordered().style(background).render(block_area, buf);

        let mut level = GlyphCanvas {
            area: block_area.inner(Margin::new(1, 1)),
            rows: scene.rows,
            cell_size: scene.cell_size,
            background,
            buf,
        };
        for &cell in &scene.body {
            level.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        let food_symbol = if scene.food.scale < 1.0 {
            consts::FOOD_SMALL_SYMBOL
        } else {
            consts::FOOD_LARGE_SYMBOL
        };
        level.draw_cell(scene.food.cell, food_symbol, consts::FOOD_STYLE);
        // Draw the head last so that it's on top of anything it overlaps
        if scene.game_over.is_some() {
            level.draw_cell(
                scene.head.cell,
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            let style = if scene.head.pop > consts::HEAD_POP_HIGHLIGHT {
                consts::SNAKE_POP_STYLE
            } else {
                consts::SNAKE_STYLE
            };
            level.draw_cell(scene.head.cell, head_symbol(scene.head.direction), style);
        }
    }

    fn render_pixels(self, block_area: Rect, buf: &mut Buffer) {
        let scene = self.scene;
        let size = scene.cell_size;
        let g = f64::from(size);
        let background = if scene.death_flash {
            consts::DEATH_FLASH_COLOR
        } else {
            Color::Reset
        };
        let head_color = if scene.game_over.is_some() {
            consts::FOOD_COLOR
        } else {
            consts::SNAKE_COLOR
        };
        canvas::Canvas::default()
            .block(Block::bordered())
            .marker(Marker::Braille)
            .background_color(background)
            .x_bounds([0.0, f64::from(scene.cols) * g])
            .y_bounds([0.0, f64::from(scene.rows) * g])
            .paint(|ctx| {
                for &cell in &scene.body {
                    ctx.draw(&rectangle(Square::of_cell(cell, size), consts::SNAKE_COLOR));
                }
                ctx.draw(&rectangle(scene.food.square(size), consts::FOOD_COLOR));
                ctx.draw(&rectangle(scene.head.square(size), head_color));
                for eye in scene.head.eyes(size) {
                    ctx.draw(&rectangle(eye, consts::EYE_COLOR));
                }
            })
            .render(block_area, buf);
    }
}

impl Widget for SceneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scene = self.scene;
        let [score_area, field_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(format!(" Score: {}", scene.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let block_size = Size {
            width: to_u16(scene.cols).saturating_add(2),
            height: to_u16(scene.rows).saturating_add(2),
        };
        let block_area = center_rect(field_area, block_size);
        match self.mode {
            ViewMode::Glyphs => self.render_glyphs(block_area, buf),
            ViewMode::Pixels => self.render_pixels(block_area, buf),
        }

        if let Some(over) = scene.game_over {
            let reason = match over.cause {
                GameOverCause::Collision(Collision::Wall) => "Hit the wall",
                GameOverCause::Collision(Collision::Body) => "Bit yourself",
                GameOverCause::BoardFilled => "Board full",
            };
            Line::raw(format!(" {reason}! Score: {}", over.score)).render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(")  Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        }
    }
}

fn rectangle(sq: Square, color: Color) -> Rectangle {
    Rectangle {
        x: sq.x,
        y: sq.y,
        width: sq.size,
        height: sq.size,
        color,
    }
}

/// Return the glyph for the snake's head; the glyph's point is its mouth
fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

fn to_u16(n: i32) -> u16 {
    u16::try_from(n.max(0)).unwrap_or(u16::MAX)
}

/// The play area of the terminal, addressed by grid cell.  Grid rows count
/// up from the bottom, terminal rows count down from the top.
#[derive(Debug, Eq, PartialEq)]
struct GlyphCanvas<'a> {
    area: Rect,
    rows: i32,
    cell_size: i32,
    background: Style,
    buf: &'a mut Buffer,
}

impl GlyphCanvas<'_> {
    fn locate(&self, cell: Cell) -> Option<Position> {
        let col = cell.x.checked_div(self.cell_size)?;
        let row = self
            .rows
            .checked_sub(1)?
            .checked_sub(cell.y.checked_div(self.cell_size)?)?;
        let x = self.area.x.checked_add(u16::try_from(col).ok()?)?;
        let y = self.area.y.checked_add(u16::try_from(row).ok()?)?;
        let pos = Position { x, y };
        self.area.contains(pos).then_some(pos)
    }

    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some(pos) = self.locate(cell) else {
            return;
        };
        if let Some(c) = self.buf.cell_mut(pos) {
            c.set_char(symbol);
            c.set_style(Style::reset().patch(self.background).patch(style));
        }
    }
}
