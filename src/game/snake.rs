use super::direction::Direction;
use super::grid::Cell;
use crate::consts;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The cells are ordered from head to tail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// Positions of all of the snake's cells, with the head at the front
    pub(super) cells: VecDeque<Cell>,

    /// The direction in which the snake last moved (or, for a new snake,
    /// will first move)
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake in the fixed starting configuration given by
    /// [`INITIAL_SNAKE`][consts::INITIAL_SNAKE] and
    /// [`INITIAL_DIRECTION`][consts::INITIAL_DIRECTION]
    pub(super) fn new() -> Snake {
        Snake {
            cells: VecDeque::from(consts::INITIAL_SNAKE.map(Cell::from)),
            direction: consts::INITIAL_DIRECTION,
        }
    }

    pub(crate) fn head(&self) -> Cell {
        self.cells[0]
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn cells(&self) -> &VecDeque<Cell> {
        &self.cells
    }

    /// Return the cell the head would move to when travelling in `dir`
    pub(super) fn next_head(&self, dir: Direction) -> Cell {
        self.head().step(dir)
    }

    /// Test whether moving the head to `cell` would run into the snake's own
    /// body.  The tail is only an obstacle if the snake is about to grow, as
    /// otherwise it moves out of the way on the same tick.
    pub(super) fn would_collide(&self, cell: Cell, growing: bool) -> bool {
        let skip_tail = usize::from(!growing);
        self.cells
            .iter()
            .take(self.cells.len() - skip_tail)
            .any(|&c| c == cell)
    }

    /// Change the snake's direction to `direction`
    pub(super) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Move the head to `cell`.  Unless `grow` is true, the tail is dropped
    /// so that the length stays the same.
    pub(super) fn advance(&mut self, cell: Cell, grow: bool) {
        self.cells.push_front(cell);
        if !grow {
            let _ = self.cells.pop_back();
        }
    }
}
