use crate::consts;
use crate::game::{Cell, Direction, EndReason, Game, GameState, Grid};
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// How the floor of the grid is drawn; switched with the view toggle key
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum ViewMode {
    /// Empty cells are left blank
    #[default]
    Plain,
    /// Empty cells are drawn as floor tiles
    Tiled,
}

impl ViewMode {
    pub(crate) fn toggle(self) -> ViewMode {
        match self {
            ViewMode::Plain => ViewMode::Tiled,
            ViewMode::Tiled => ViewMode::Plain,
        }
    }
}

/// The game screen: a score bar above the grid, with a pop-up when the game
/// is over
#[derive(Debug)]
pub(crate) struct Board<'a, R> {
    game: &'a Game<R>,
    view: ViewMode,
}

impl<'a, R> Board<'a, R> {
    pub(crate) fn new(game: &'a Game<R>, view: ViewMode) -> Self {
        Board { game, view }
    }
}

impl<R> Widget for Board<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(
            format!(
                " Score: {}    Best: {}    Speed: {}",
                self.game.score(),
                self.game.high_score(),
                self.game.speed()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let grid = self.game.grid();
        let block_size = Size {
            width: grid.size().saturating_mul(2).saturating_add(2),
            height: grid.size().saturating_add(2),
        };
        let block_area = center_rect(block_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            grid,
            buf,
        };
        if self.view == ViewMode::Tiled {
            for cell in grid.cells() {
                canvas.draw_cell(cell, consts::FLOOR_SYMBOL, consts::FLOOR_STYLE);
            }
        }
        let snake = self.game.snake();
        for &cell in snake.cells().iter().skip(1) {
            canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = self.game.food() {
            canvas.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        let crashed = matches!(
            self.game.state(),
            GameState::GameOver(EndReason::OutOfBounds | EndReason::SelfCollision)
        );
        if crashed {
            canvas.draw_cell(snake.head(), consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        } else {
            canvas.draw_cell(
                snake.head(),
                head_symbol(self.game.direction()),
                consts::SNAKE_STYLE,
            );
        }
        let head_pos = canvas.position(snake.head());

        if let GameState::GameOver(reason) = self.game.state() {
            let popup = GameOver {
                reason,
                score: self.game.score(),
                best: self.game.high_score(),
                new_best: self.game.new_best(),
            };
            popup.render(GameOver::area(display, head_pos), buf);
        }
    }
}

/// Return the glyph to use for drawing the snake's head
fn head_symbol(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

/// Maps grid cells to two-column-wide spots in the buffer
#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    grid: Grid,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Return the buffer position of the left half of `cell`, or `None` if
    /// it falls outside the canvas
    fn position(&self, cell: Cell) -> Option<Position> {
        let b = self.grid.bound();
        let col = u16::try_from((cell.x + b) * 2).ok()?;
        let row = u16::try_from(cell.z + b).ok()?;
        (col < self.area.width && row < self.area.height)
            .then(|| Position::new(self.area.x + col, self.area.y + row))
    }

    fn draw_cell(&mut self, cell: Cell, symbol: &str, style: Style) {
        if let Some(pos) = self.position(cell) {
            self.buf
                .set_string(pos.x, pos.y, symbol, Style::reset().patch(style));
        }
    }
}

/// Pop-up shown over the grid once the game has ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GameOver {
    reason: EndReason,
    score: u32,
    best: u32,
    new_best: bool,
}

impl GameOver {
    const HEIGHT: u16 = 7;
    const WIDTH: u16 = 30;

    /// Where to draw the pop-up within `display`: centered, unless that
    /// would hide the snake's head at `head`, in which case it is moved to
    /// just above or below the head's row.
    fn area(display: Rect, head: Option<Position>) -> Rect {
        let area = center_rect(
            display,
            Size {
                width: GameOver::WIDTH,
                height: GameOver::HEIGHT,
            },
        );
        let Some(head) = head.filter(|h| area.intersects(Rect::new(h.x, h.y, 2, 1))) else {
            return area;
        };
        // Keep the score bar visible when going above.
        let y = if head.y.saturating_sub(display.y) > GameOver::HEIGHT {
            head.y - GameOver::HEIGHT
        } else {
            head.y + 1
        };
        Rect { y, ..area }
    }

    fn message(self) -> &'static str {
        match self.reason {
            EndReason::OutOfBounds => "You hit the wall!",
            EndReason::SelfCollision => "You ran into yourself!",
            EndReason::BoardFilled => "You filled the board!",
        }
    }
}

impl Widget for GameOver {
    /*
     * ┌───────── GAME OVER ────────┐
     * │ You hit the wall!          │
     * │                            │
     * │ Score: 40                  │
     * │ Best:  40  New best!       │
     * │ Back to menu (Enter)       │
     * └────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let mut best = Line::from(format!("Best:  {}", self.best));
        if self.new_best {
            best.push_span(Span::styled("  New best!", consts::FOOD_STYLE));
        }
        let lines = [
            Line::from(self.message()),
            Line::default(),
            Line::from(format!("Score: {}", self.score)),
            best,
            Line::from_iter([
                Span::raw("Back to menu ("),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TickOutcome;
    use crate::scores::{NullStore, ScoreTracker};
    use crate::speed::Speed;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game(size: u16) -> Game<ChaCha12Rng> {
        let (scores, _) = ScoreTracker::load(Box::new(NullStore));
        Game::new_with_rng(
            Grid::new(size).unwrap(),
            scores,
            Speed::Medium,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    fn render(game: &Game<ChaCha12Rng>, view: ViewMode) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        Board::new(game, view).render(area, &mut buffer);
        buffer
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    /// Return the two-column glyph drawn for `cell` on a board of the given
    /// size rendered into an 80x24 buffer
    fn glyph_at(buf: &Buffer, size: u16, cell: Cell) -> String {
        let (left, top) = board_origin(size);
        let b = i32::from((size - 1) / 2);
        let x = left + u16::try_from((cell.x + b) * 2).unwrap();
        let y = top + u16::try_from(cell.z + b).unwrap();
        format!("{}{}", buf[(x, y)].symbol(), buf[(x + 1, y)].symbol())
    }

    /// Buffer position of the top-left cell of the grid
    fn board_origin(size: u16) -> (u16, u16) {
        let width = size * 2 + 2;
        let height = size + 2;
        // The board area is everything below the score bar.
        ((80 - width) / 2 + 1, 1 + (23 - height) / 2 + 1)
    }

    #[test]
    fn playing_full_size() {
        let mut game = new_game(21);
        assert!(game.start(Speed::Medium));
        let buffer = render(&game, ViewMode::Plain);
        assert_eq!(
            row_text(&buffer, 0).trim_end(),
            " Score: 0    Best: 0    Speed: Medium"
        );
        assert_eq!(
            row_text(&buffer, 1),
            format!("{:18}┌{}┐{:18}", "", "─".repeat(42), "")
        );
        assert_eq!(glyph_at(&buffer, 21, Cell::new(0, 2)), consts::SNAKE_HEAD_DOWN_SYMBOL);
        assert_eq!(glyph_at(&buffer, 21, Cell::new(0, 1)), consts::SNAKE_BODY_SYMBOL);
        assert_eq!(glyph_at(&buffer, 21, Cell::new(0, 0)), consts::SNAKE_BODY_SYMBOL);
        let food = game.food().unwrap();
        assert_eq!(glyph_at(&buffer, 21, food), consts::FOOD_SYMBOL);
        let empty = if food == Cell::new(0, -1) {
            Cell::new(0, -2)
        } else {
            Cell::new(0, -1)
        };
        assert_eq!(glyph_at(&buffer, 21, empty), "  ");
        assert_eq!(
            row_text(&buffer, 23),
            format!("{:18}└{}┘{:18}", "", "─".repeat(42), "")
        );
    }

    #[test]
    fn tiled_view() {
        let mut game = new_game(21);
        assert!(game.start(Speed::Medium));
        let buffer = render(&game, ViewMode::Tiled);
        assert_eq!(glyph_at(&buffer, 21, Cell::new(-10, -10)), consts::FLOOR_SYMBOL);
        assert_eq!(glyph_at(&buffer, 21, Cell::new(10, 10)), consts::FLOOR_SYMBOL);
        assert_eq!(glyph_at(&buffer, 21, Cell::new(0, 1)), consts::SNAKE_BODY_SYMBOL);
        assert_eq!(ViewMode::Tiled.toggle(), ViewMode::Plain);
        assert_eq!(ViewMode::Plain.toggle(), ViewMode::Tiled);
    }

    #[test]
    fn small_grid_head_direction() {
        let mut game = new_game(7);
        assert!(game.start(Speed::Slow));
        assert!(game.submit_turn(Direction::Left));
        assert!(matches!(game.tick(), TickOutcome::Moved | TickOutcome::Ate));
        let buffer = render(&game, ViewMode::Plain);
        assert_eq!(glyph_at(&buffer, 7, Cell::new(-1, 2)), consts::SNAKE_HEAD_LEFT_SYMBOL);
        assert_eq!(glyph_at(&buffer, 7, Cell::new(0, 2)), consts::SNAKE_BODY_SYMBOL);
    }

    #[test]
    fn game_over_popup() {
        let mut game = new_game(7);
        assert!(game.start(Speed::Fast));
        // Run straight down into the wall: the head starts at z = 2 and the
        // wall is past z = 3.
        let mut outcome = game.tick();
        while matches!(outcome, TickOutcome::Moved | TickOutcome::Ate) {
            outcome = game.tick();
        }
        assert_eq!(outcome, TickOutcome::Ended(EndReason::OutOfBounds));
        let buffer = render(&game, ViewMode::Plain);
        let text = (0..24).map(|y| row_text(&buffer, y)).collect::<Vec<_>>();
        assert!(text.iter().any(|r| r.contains("GAME OVER")));
        assert!(text.iter().any(|r| r.contains("You hit the wall!")));
        assert!(text.iter().any(|r| r.contains("Back to menu (Enter)")));
        assert_eq!(glyph_at(&buffer, 7, Cell::new(0, 3)), consts::COLLISION_SYMBOL);
    }

    #[test]
    fn popup_placement() {
        let display = Rect::new(0, 0, 80, 24);
        let centered = GameOver::area(display, None);
        assert_eq!(centered.width, GameOver::WIDTH);
        assert_eq!(centered.height, GameOver::HEIGHT);
        // A head away from the pop-up leaves it centered.
        assert_eq!(GameOver::area(display, Some(Position::new(19, 3))), centered);
        // A head under the pop-up pushes it up to end just above the head.
        let head = Position::new(39, centered.bottom() - 1);
        let moved = GameOver::area(display, Some(head));
        assert_eq!(moved.bottom(), head.y);
        assert_eq!(moved.x, centered.x);
        // Only the right half of the head is under the pop-up.
        let head = Position::new(centered.x - 1, centered.bottom() - 1);
        assert_eq!(GameOver::area(display, Some(head)).bottom(), head.y);
        // No room above: the pop-up goes just below the head.
        let short = Rect::new(0, 0, 80, 12);
        let centered = GameOver::area(short, None);
        let head = Position::new(39, centered.y + 1);
        assert_eq!(GameOver::area(short, Some(head)).y, head.y + 1);
    }
}
