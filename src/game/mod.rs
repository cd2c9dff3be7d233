mod direction;
mod food;
mod grid;
mod input;
mod snake;
pub(crate) use self::direction::Direction;
use self::food::{place_food, BoardFull};
pub(crate) use self::grid::{Cell, Grid, GridSizeError};
use self::input::InputQueue;
pub(crate) use self::snake::Snake;
use crate::scores::{SaveError, ScoreTracker};
use crate::speed::Speed;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// The game's state machine.  `Game` owns the snake, the food, and the
/// scores; it only changes in response to [`Game::start()`],
/// [`Game::submit_turn()`], [`Game::tick()`], and [`Game::acknowledge()`].
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    state: GameState,
    snake: Snake,
    food: Option<Cell>,
    queue: InputQueue,
    scores: ScoreTracker,
    speed: Speed,
    save_error: Option<SaveError>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid, scores: ScoreTracker, speed: Speed) -> Self {
        Game::new_with_rng(grid, scores, speed, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game sitting at the main menu.  `speed` is the speed to
    /// preselect on the menu.
    pub(crate) fn new_with_rng(grid: Grid, scores: ScoreTracker, speed: Speed, rng: R) -> Game<R> {
        Game {
            rng,
            grid,
            state: GameState::Menu,
            snake: Snake::new(),
            food: None,
            queue: InputQueue::new(),
            scores,
            speed,
            save_error: None,
        }
    }

    /// Start a new game at the given speed.  Only valid from the menu;
    /// returns `false` and does nothing otherwise.
    pub(crate) fn start(&mut self, speed: Speed) -> bool {
        if self.state != GameState::Menu {
            return false;
        }
        self.snake = Snake::new();
        self.queue.reset();
        self.scores.reset();
        self.speed = speed;
        self.state = GameState::Playing;
        let size = self.grid.size();
        log::info!("Starting game at {speed} speed on a {size}x{size} grid");
        if let Err(e) = self.refill_food() {
            // Only possible on a grid no bigger than the snake.
            log::warn!("{e}");
            self.end(EndReason::BoardFilled);
        }
        true
    }

    /// Advance the game by one step.  Does nothing unless a game is in
    /// progress.
    pub(crate) fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Playing {
            return TickOutcome::Idle;
        }
        let dir = self.queue.next_or(self.snake.direction());
        self.snake.turn(dir);
        let head = self.snake.next_head(dir);
        if !self.grid.contains(head) {
            return self.end(EndReason::OutOfBounds);
        }
        let growing = self.food == Some(head);
        if self.snake.would_collide(head, growing) {
            return self.end(EndReason::SelfCollision);
        }
        self.snake.advance(head, growing);
        if !growing {
            return TickOutcome::Moved;
        }
        log::debug!("Ate food at {head}; length is now {}", self.snake.len());
        if let Err(e) = self.scores.record_food() {
            log::warn!("{e}");
            self.save_error = Some(e);
        }
        match self.refill_food() {
            Ok(()) => TickOutcome::Ate,
            Err(BoardFull) => self.end(EndReason::BoardFilled),
        }
    }

    fn refill_food(&mut self) -> Result<(), BoardFull> {
        let occupied = self.snake.cells().iter().copied().collect::<HashSet<_>>();
        self.food = None;
        self.food = Some(place_food(&mut self.rng, self.grid, &occupied)?);
        Ok(())
    }
}

impl<R> Game<R> {
    /// Request that the snake turn to face `dir` on an upcoming tick.
    /// Returns `false` if the request was rejected, either because no game
    /// is in progress or because the turn would reverse the snake.
    pub(crate) fn submit_turn(&mut self, dir: Direction) -> bool {
        self.state == GameState::Playing && self.queue.submit(dir, self.snake.direction())
    }

    /// Dismiss the game over screen and return to the menu.  Returns `false`
    /// and does nothing if the game is not over.
    pub(crate) fn acknowledge(&mut self) -> bool {
        if !matches!(self.state, GameState::GameOver(_)) {
            return false;
        }
        self.state = GameState::Menu;
        self.snake = Snake::new();
        self.food = None;
        self.queue.reset();
        self.scores.reset();
        true
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        log::info!(
            "Game over ({reason}) with score {}; best is {}",
            self.scores.score(),
            self.scores.best()
        );
        self.state = GameState::GameOver(reason);
        TickOutcome::Ended(reason)
    }

    /// Return the most recent error from saving the best score, if any
    pub(crate) fn take_save_error(&mut self) -> Option<SaveError> {
        self.save_error.take()
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    /// The direction in which the snake last moved
    pub(crate) fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub(crate) fn score(&self) -> u32 {
        self.scores.score()
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.scores.best()
    }

    /// Whether the current (or just-ended) game has set a new best score
    pub(crate) fn new_best(&self) -> bool {
        self.scores.new_best()
    }

    /// The speed of the current game or, at the menu, of the last game
    pub(crate) fn speed(&self) -> Speed {
        self.speed
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Menu,
    Playing,
    GameOver(EndReason),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EndReason {
    /// The snake's head left the grid
    OutOfBounds,
    /// The snake's head ran into its body
    SelfCollision,
    /// The snake has filled the board and there are no more cells to place
    /// food in.
    BoardFilled,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::OutOfBounds => write!(f, "hit a wall"),
            EndReason::SelfCollision => write!(f, "hit itself"),
            EndReason::BoardFilled => write!(f, "filled the board"),
        }
    }
}

/// What happened during a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    /// No game was in progress
    Idle,
    Moved,
    Ate,
    Ended(EndReason),
}
