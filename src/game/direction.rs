#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    /// Toward the far edge of the grid, `(0, -1)`
    Up,
    /// Toward the near edge of the grid, `(0, 1)`
    Down,
    /// `(-1, 0)`
    Left,
    /// `(1, 0)`
    Right,
}

impl Direction {
    /// Return the `(x, z)` unit vector for the direction
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn is_reverse_of(self, other: Direction) -> bool {
        self.reverse() == other
    }
}
