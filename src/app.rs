use crate::board::{Board, ViewMode};
use crate::command::Command;
use crate::game::{Game, GameState, TickOutcome};
use crate::menu::{MainMenu, MenuChoice};
use crate::ticker::Ticker;
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{self, Event};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Ties the game to the terminal: draws the current screen, waits for input
/// until the next tick is due, and routes commands to whichever screen has
/// focus
#[derive(Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    menu: MainMenu,
    ticker: Ticker,
    view: ViewMode,
    warning: Option<Warning>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        let menu = MainMenu::new(game.speed());
        App {
            game,
            menu,
            ticker: Ticker::new(),
            view: ViewMode::default(),
            warning: None,
            quitting: false,
        }
    }

    /// Show a warning pop-up on top of the current screen.  Ticks are held
    /// back until it is dismissed.
    pub(crate) fn show_warning(&mut self, warning: Warning) {
        self.warning = Some(warning);
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let area = frame.area();
        if self.game.state() == GameState::Menu {
            frame.render_widget(self.menu.screen(self.game.high_score()), area);
        } else {
            frame.render_widget(Board::new(&self.game, self.view), area);
        }
        if let Some(ref warning) = self.warning {
            frame.render_widget(warning, get_display_area(area));
        }
    }

    /// Wait for either an input event or the next tick, whichever comes
    /// first, and handle it.  A tick that is already due is run before any
    /// pending input.
    fn process_input(&mut self) -> io::Result<()> {
        let ready = match self.next_wait(Instant::now()) {
            Wait::Tick => false,
            Wait::Until(timeout) => event::poll(timeout)?,
            Wait::Input => true,
        };
        if ready {
            let ev = event::read()?;
            self.handle_event(&ev, Instant::now());
        } else {
            self.on_tick(Instant::now());
        }
        Ok(())
    }

    fn next_wait(&self, now: Instant) -> Wait {
        if self.warning.is_some() {
            return Wait::Input;
        }
        match self.ticker.time_until_tick(now) {
            Some(d) if d.is_zero() => Wait::Tick,
            Some(d) => Wait::Until(d),
            None => Wait::Input,
        }
    }

    fn handle_event(&mut self, event: &Event, now: Instant) {
        if let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            self.handle_command(cmd, now);
        }
    }

    fn on_tick(&mut self, now: Instant) -> TickOutcome {
        if !self.ticker.fire(now) {
            return TickOutcome::Idle;
        }
        let outcome = self.game.tick();
        if let Some(e) = self.game.take_save_error() {
            self.show_warning(Warning::from_error(&e));
        }
        if self.game.state() != GameState::Playing {
            self.ticker.stop();
        }
        outcome
    }

    fn handle_command(&mut self, cmd: Command, now: Instant) {
        if let Some(ref warning) = self.warning {
            match warning.handle_command(cmd) {
                Some(WarningOutcome::Dismissed) => {
                    self.warning = None;
                    if self.ticker.running() {
                        // Give the player a full period to get their
                        // bearings back.
                        self.ticker.start(self.game.speed().period(), now);
                    }
                }
                Some(WarningOutcome::Quit) => self.quitting = true,
                None => (),
            }
            return;
        }
        match self.game.state() {
            GameState::Menu => match self.menu.handle_command(cmd) {
                Some(MenuChoice::Play(speed)) => {
                    self.game.start(speed);
                    if self.game.state() == GameState::Playing {
                        self.ticker.start(speed.period(), now);
                    }
                }
                Some(MenuChoice::Quit) => self.quitting = true,
                None => (),
            },
            GameState::Playing => match cmd {
                Command::Quit | Command::Q => self.quitting = true,
                Command::ToggleView => self.view = self.view.toggle(),
                _ => {
                    if let Some(dir) = cmd.direction() {
                        self.game.submit_turn(dir);
                    }
                }
            },
            GameState::GameOver(_) => match cmd {
                Command::Quit | Command::Q => self.quitting = true,
                Command::ToggleView => self.view = self.view.toggle(),
                Command::Enter | Command::Space => {
                    self.game.acknowledge();
                    self.ticker.stop();
                    self.menu = MainMenu::new(self.game.speed());
                }
                _ => (),
            },
        }
    }
}

/// What the event loop should do next
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Wait {
    /// Run the tick that is due without looking at input
    Tick,
    /// Wait for input for at most this long, then tick
    Until(Duration),
    /// Block until input arrives
    Input,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, EndReason, Grid};
    use crate::scores::{NullStore, ScoreTracker};
    use crate::speed::Speed;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::backend::TestBackend;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_app(size: u16) -> App<ChaCha12Rng> {
        let (scores, _) = ScoreTracker::load(Box::new(NullStore));
        App::new(Game::new_with_rng(
            Grid::new(size).unwrap(),
            scores,
            Speed::Medium,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        ))
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn start_from_menu_starts_ticker() {
        let mut app = new_app(21);
        let t0 = Instant::now();
        assert!(!app.ticker.running());
        app.handle_event(&press(KeyCode::Char('3')), t0);
        assert_eq!(app.game.state(), GameState::Playing);
        assert_eq!(app.game.speed(), Speed::Fast);
        assert_eq!(app.ticker.time_until_tick(t0), Some(Speed::Fast.period()));
    }

    #[test]
    fn due_tick_comes_before_input() {
        let mut app = new_app(21);
        let t0 = Instant::now();
        assert_eq!(app.next_wait(t0), Wait::Input);
        app.handle_event(&press(KeyCode::Enter), t0);
        let period = Speed::Medium.period();
        assert_eq!(app.next_wait(t0), Wait::Until(period));
        assert_eq!(app.next_wait(t0 + period / 3), Wait::Until(period - period / 3));
        assert_eq!(app.next_wait(t0 + period), Wait::Tick);
        assert_eq!(app.next_wait(t0 + period * 3), Wait::Tick);
        // Input arriving in between doesn't push the tick back.
        app.handle_event(&press(KeyCode::Char('a')), t0 + period * 3);
        assert_eq!(app.next_wait(t0 + period * 3), Wait::Tick);
        app.on_tick(t0 + period * 3);
        assert_eq!(app.next_wait(t0 + period * 3), Wait::Until(period));
        app.show_warning(Warning::from_error(&io::Error::other("disk full")));
        assert_eq!(app.next_wait(t0 + period * 5), Wait::Input);
    }

    #[test]
    fn no_tick_before_deadline() {
        let mut app = new_app(21);
        let t0 = Instant::now();
        app.handle_event(&press(KeyCode::Enter), t0);
        assert_eq!(app.game.state(), GameState::Playing);
        assert_eq!(app.on_tick(t0 + Duration::from_millis(10)), TickOutcome::Idle);
        assert_eq!(app.game.snake().head(), crate::game::Cell::new(0, 2));
        let outcome = app.on_tick(t0 + Speed::Medium.period());
        assert!(matches!(outcome, TickOutcome::Moved | TickOutcome::Ate));
        assert_eq!(app.game.snake().head(), crate::game::Cell::new(0, 3));
    }

    #[test]
    fn game_over_stops_ticker() {
        let mut app = new_app(7);
        let mut now = Instant::now();
        app.handle_event(&press(KeyCode::Enter), now);
        let period = Speed::Medium.period();
        let mut outcome = TickOutcome::Idle;
        for _ in 0..10 {
            now += period;
            outcome = app.on_tick(now);
            if matches!(outcome, TickOutcome::Ended(_)) {
                break;
            }
        }
        assert_eq!(outcome, TickOutcome::Ended(EndReason::OutOfBounds));
        assert_eq!(
            app.game.state(),
            GameState::GameOver(EndReason::OutOfBounds)
        );
        assert!(!app.ticker.running());
        assert_eq!(app.on_tick(now + period * 5), TickOutcome::Idle);
        app.handle_event(&press(KeyCode::Char(' ')), now);
        assert_eq!(app.game.state(), GameState::Menu);
        assert!(!app.ticker.running());
    }

    #[test]
    fn turns_are_queued() {
        let mut app = new_app(21);
        let t0 = Instant::now();
        app.handle_event(&press(KeyCode::Enter), t0);
        app.handle_event(&press(KeyCode::Char('a')), t0);
        // Reversal of the queued turn is rejected.
        app.handle_event(&press(KeyCode::Right), t0);
        app.on_tick(t0 + Speed::Medium.period());
        assert_eq!(app.game.direction(), Direction::Left);
    }

    #[test]
    fn toggle_view() {
        let mut app = new_app(21);
        let t0 = Instant::now();
        app.handle_event(&press(KeyCode::Char('v')), t0);
        assert_eq!(app.view, ViewMode::Plain);
        app.handle_event(&press(KeyCode::Enter), t0);
        app.handle_event(&press(KeyCode::Char('v')), t0);
        assert_eq!(app.view, ViewMode::Tiled);
        app.handle_event(&press(KeyCode::Char('V')), t0);
        assert_eq!(app.view, ViewMode::Plain);
    }

    #[test]
    fn key_release_ignored() {
        let mut app = new_app(21);
        let mut ev = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        app.handle_event(&Event::Key(ev), Instant::now());
        assert_eq!(app.game.state(), GameState::Menu);
    }

    #[test]
    fn quit_from_menu() {
        let mut app = new_app(21);
        app.handle_event(&press(KeyCode::Char('q')), Instant::now());
        assert!(app.quitting);
    }

    #[test]
    fn warning_holds_input() {
        let mut app = new_app(21);
        let t0 = Instant::now();
        app.handle_event(&press(KeyCode::Enter), t0);
        app.show_warning(Warning::from_error(&io::Error::other("disk full")));
        app.handle_event(&press(KeyCode::Char('a')), t0);
        app.handle_event(&press(KeyCode::Char('q')), t0);
        assert!(!app.quitting);
        let t1 = t0 + Duration::from_secs(5);
        app.handle_event(&press(KeyCode::Enter), t1);
        assert!(app.warning.is_none());
        assert_eq!(app.ticker.time_until_tick(t1), Some(Speed::Medium.period()));
        app.on_tick(t1 + Speed::Medium.period());
        assert_eq!(app.game.direction(), Direction::Down);
    }

    #[test]
    fn draw_menu_and_board() {
        let mut app = new_app(21);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let row = (0..80).map(|x| buffer[(x, 20)].symbol()).collect::<String>();
        assert_eq!(row.trim(), "Best: 0");
        app.handle_event(&press(KeyCode::Enter), Instant::now());
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let row = (0..80).map(|x| buffer[(x, 0)].symbol()).collect::<String>();
        assert!(row.starts_with(" Score: 0"));
    }
}
