mod widgets;
use self::widgets::{Instructions, Logo};
use crate::command::Command;
use crate::consts;
use crate::speed::Speed;
use crate::util::{get_display_area, EnumExt};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// The main menu, from which the player picks a speed and starts a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: Selection,
}

impl MainMenu {
    /// Create a menu with `speed` preselected
    pub(crate) fn new(speed: Speed) -> Self {
        MainMenu {
            selection: Selection::Speed(speed),
        }
    }

    /// Handle a command.  Returns `Some` if the user made a choice.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<MenuChoice> {
        match (self.selection, cmd) {
            (_, Command::Quit | Command::Q) => return Some(MenuChoice::Quit),
            (Selection::Speed(speed), Command::Enter | Command::Space) => {
                return Some(MenuChoice::Play(speed))
            }
            (Selection::QuitButton, Command::Enter | Command::Space) => {
                return Some(MenuChoice::Quit)
            }
            (_, Command::Digit(d)) => {
                let speed = Speed::iter().nth(usize::from(d).checked_sub(1)?)?;
                return Some(MenuChoice::Play(speed));
            }
            (_, Command::Home) => self.selection = Selection::Speed(Speed::min()),
            (_, Command::End) => self.selection = Selection::QuitButton,
            (Selection::Speed(speed), Command::Up | Command::Prev) => {
                if let Some(sp) = speed.prev() {
                    self.selection = Selection::Speed(sp);
                } else if cmd == Command::Prev {
                    self.selection = Selection::QuitButton;
                }
            }
            (Selection::Speed(speed), Command::Down | Command::Next) => {
                self.selection = speed.next().map_or(Selection::QuitButton, Selection::Speed);
            }
            (Selection::QuitButton, Command::Up | Command::Prev) => {
                self.selection = Selection::Speed(Speed::max());
            }
            (Selection::QuitButton, Command::Next) => {
                self.selection = Selection::Speed(Speed::min());
            }
            _ => (),
        }
        None
    }

    /// Return a widget for drawing the menu along with the best score
    pub(crate) fn screen(&self, best_score: u32) -> MenuScreen<'_> {
        MenuScreen {
            menu: self,
            best_score,
        }
    }
}

/// What the user chose on the main menu
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MenuChoice {
    Play(Speed),
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Selection {
    Speed(Speed),
    QuitButton,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MenuScreen<'a> {
    menu: &'a MainMenu,
    best_score: u32,
}

impl MenuScreen<'_> {
    #[allow(clippy::cast_possible_truncation)]
    const SPEEDS_HEIGHT: u16 = (Speed::LENGTH as u16) + 2 /* for border */;
    const HORIZONTAL_PADDING: u16 = 1; // padding on each side
    const POINTER_WIDTH: u16 = 2;
    const LABEL_WIDTH: u16 = 6;
    const LABEL_KEY_GUTTER: u16 = 2;
    const KEY_WIDTH: u16 = 3;
    const SPEEDS_WIDTH: u16 = 2 /* for border */ + 2 * Self::HORIZONTAL_PADDING + Self::POINTER_WIDTH + Self::LABEL_WIDTH + Self::LABEL_KEY_GUTTER + Self::KEY_WIDTH;

    fn render_speeds(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Speed: ")
            .padding(Padding::horizontal(Self::HORIZONTAL_PADDING));
        let menu_area = block.inner(area);
        block.render(area, buf);
        for ((i, speed), row) in Speed::iter().enumerate().zip(menu_area.rows()) {
            let selected = self.menu.selection == Selection::Speed(speed);
            let style = if selected {
                consts::MENU_SELECTION_STYLE
            } else {
                Style::new()
            };
            Line::from_iter([
                Span::styled(
                    format!(
                        "{pointer:pwidth$}{speed:lwidth$}{space:gutter$}(",
                        pointer = if selected { "»" } else { "" },
                        pwidth = usize::from(Self::POINTER_WIDTH),
                        lwidth = usize::from(Self::LABEL_WIDTH),
                        space = "",
                        gutter = usize::from(Self::LABEL_KEY_GUTTER),
                    ),
                    style,
                ),
                Span::styled((i + 1).to_string(), consts::KEY_STYLE.patch(style)),
                Span::styled(")", style),
            ])
            .render(row, buf);
        }
    }
}

impl Widget for MenuScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, speeds_area, best_area, quit_area] =
            Layout::vertical([
                Logo::HEIGHT,
                Instructions::HEIGHT,
                Self::SPEEDS_HEIGHT,
                1,
                1,
            ])
            .flex(Flex::Start)
            .spacing(1)
            .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        let [speeds_area] = Layout::horizontal([Self::SPEEDS_WIDTH])
            .flex(Flex::Center)
            .areas(speeds_area);
        self.render_speeds(speeds_area, buf);

        Line::from(format!("Best: {}", self.best_score))
            .centered()
            .render(best_area, buf);

        let qstyle = if self.menu.selection == Selection::QuitButton {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled("[Quit (", qstyle),
            Span::styled("q", consts::KEY_STYLE.patch(qstyle)),
            Span::styled(")]", qstyle),
        ])
        .centered()
        .render(quit_area, buf);
    }
}
