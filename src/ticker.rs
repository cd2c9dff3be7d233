use std::time::{Duration, Instant};

/// Schedules the game's ticks at a fixed period.  A stopped ticker never
/// fires.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    next_tick: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new() -> Ticker {
        Ticker::default()
    }

    /// Start ticking every `period`, with the first tick one period from
    /// `now`.  Restarting a running ticker discards its pending tick.
    pub(crate) fn start(&mut self, period: Duration, now: Instant) {
        self.period = period;
        self.next_tick = Some(now + period);
    }

    pub(crate) fn stop(&mut self) {
        self.next_tick = None;
    }

    pub(crate) fn running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// How long to wait for input before the next tick is due.  Returns
    /// `None` if the ticker is stopped.
    pub(crate) fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.next_tick.map(|when| when.saturating_duration_since(now))
    }

    /// If a tick is due at `now`, schedule the one after it and return
    /// `true`.  Ticks that were missed entirely are not made up for.
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(when) if when <= now => {
                let next = when + self.period;
                self.next_tick = Some(if next <= now { now + self.period } else { next });
                true
            }
            _ => false,
        }
    }
}
