//! Assorted constants & hard-coded configuration
use crate::game::Direction;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Default number of cells along each side of the grid
pub(crate) const GRID_SIZE: u16 = 21;

/// Smallest grid size that can be configured
pub(crate) const MIN_GRID_SIZE: u16 = 5;

/// Largest grid size that can be configured; this is the most that fits in
/// [`DISPLAY_SIZE`] along with the score bar.
pub(crate) const MAX_GRID_SIZE: u16 = 21;

/// Cells of the snake at the start of a game, head first
pub(crate) const INITIAL_SNAKE: [(i32, i32); 3] = [(0, 2), (0, 1), (0, 0)];

/// Direction the snake moves in at the start of a game
pub(crate) const INITIAL_DIRECTION: Direction = Direction::Down;

/// Points awarded per food eaten
pub(crate) const SCORE_INCREMENT: u32 = 10;

/// Number of random cells to try when placing food before falling back to
/// searching the whole grid
pub(crate) const MAX_FOOD_ATTEMPTS: usize = 64;

/// Maximum number of turns that can be queued up ahead of the snake
pub(crate) const MAX_QUEUED_TURNS: usize = 4;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: &str = "▲ ";

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: &str = "▼ ";

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: &str = "◀ ";

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: &str = "▶ ";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "● ";

/// Glyph for empty cells when the tiled floor is shown
pub(crate) const FLOOR_SYMBOL: &str = "· ";

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the tiled floor
pub(crate) const FLOOR_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
