use super::direction::Direction;
use crate::consts;
use std::collections::VecDeque;

/// Turns requested by the player that have not been applied yet.  At most
/// one is consumed per tick.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct InputQueue(VecDeque<Direction>);

impl InputQueue {
    pub(crate) fn new() -> InputQueue {
        InputQueue::default()
    }

    /// Queue a turn in direction `dir`, where `current` is the direction the
    /// snake is presently moving in.  Returns `false` if the turn was
    /// rejected.
    ///
    /// A turn is rejected if it would reverse the snake, judged against the
    /// last queued turn or, if nothing is queued, against `current`.  It is
    /// also rejected if [`MAX_QUEUED_TURNS`][consts::MAX_QUEUED_TURNS] turns
    /// are already pending.
    pub(crate) fn submit(&mut self, dir: Direction, current: Direction) -> bool {
        let reference = self.0.back().copied().unwrap_or(current);
        if dir.is_reverse_of(reference) || self.0.len() >= consts::MAX_QUEUED_TURNS {
            false
        } else {
            self.0.push_back(dir);
            true
        }
    }

    /// Pop the oldest pending turn, or return `current` if there is none
    pub(crate) fn next_or(&mut self, current: Direction) -> Direction {
        self.0.pop_front().unwrap_or(current)
    }

    pub(crate) fn reset(&mut self) {
        self.0.clear();
    }
}
