use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const GRID_WIDTH: u16 = 10;
    const SNAKE_WIDTH: u16 = 15;
    const SNAKE_BODY_LENGTH: u16 = 6;
    const SNAKE_FOOD_GUTTER: u16 = 2;
    const TEXT_HEIGHT: u16 = 3;
    pub(super) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(super) const WIDTH: u16 = Self::GRID_WIDTH + Self::SNAKE_WIDTH;

    const GRID: [&'static str; Self::TEXT_HEIGHT as usize] = [
        "┌─┐┬─┐┬┌┬┐",
        "│ ┬├┬┘│ ││",
        "└─┘┴└─┴─┴┘",
    ];

    const SNAKE: [&'static str; Self::TEXT_HEIGHT as usize] = [
        "┌─┐┌┐┌┌─┐┬┌─┌─┐",
        "└─┐│││├─┤├┴┐├┤ ",
        "└─┘┘└┘┴ ┴┴ ┴└─┘",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Start)
            .areas(area);
        let [words_area, diagram_area] = Layout::vertical([Self::TEXT_HEIGHT, 1])
            .flex(Flex::Start)
            .spacing(1)
            .areas(area);
        let [grid_area, snake_area] = Layout::horizontal([Self::GRID_WIDTH, Self::SNAKE_WIDTH])
            .flex(Flex::Start)
            .areas(words_area);
        Text::from_iter(Self::GRID)
            .style(consts::FOOD_STYLE)
            .render(grid_area, buf);
        Text::from_iter(Self::SNAKE)
            .style(consts::SNAKE_STYLE)
            .render(snake_area, buf);
        let [diagram_area] = Layout::horizontal([Constraint::Length(
            (Self::SNAKE_BODY_LENGTH + 1 + Self::SNAKE_FOOD_GUTTER + 1) * 2,
        )])
        .flex(Flex::Center)
        .areas(diagram_area);
        let style = Style::reset().patch(consts::SNAKE_STYLE);
        let mut x = diagram_area.x;
        for _ in 0..Self::SNAKE_BODY_LENGTH {
            buf.set_string(x, diagram_area.y, consts::SNAKE_BODY_SYMBOL, style);
            x += 2;
        }
        buf.set_string(x, diagram_area.y, consts::SNAKE_HEAD_RIGHT_SYMBOL, style);
        x += 2 * (1 + Self::SNAKE_FOOD_GUTTER);
        buf.set_string(
            x,
            diagram_area.y,
            consts::FOOD_SYMBOL,
            Style::reset().patch(consts::FOOD_STYLE),
        );
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 7;
    pub(super) const WIDTH: u16 = 20;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let keys = |ks: [&'static str; 4]| {
            let mut spans = vec![Span::raw("   or: ")];
            for (i, k) in ks.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(k, consts::KEY_STYLE));
            }
            Line::from(spans)
        };
        let mut arrows = keys(["←", "↓", "↑", "→"]);
        arrows.spans[0] = Span::raw("       ");
        Text::from_iter([
            Line::from("Move the snake with:"),
            arrows,
            keys(["a", "s", "w", "d"]),
            keys(["h", "j", "k", "l"]),
            Line::from("Eat the food; don't"),
            Line::from("hit wall or tail!"),
            Line::from_iter([
                Span::styled("v", consts::KEY_STYLE),
                Span::raw(" toggles the floor"),
            ]),
        ])
        .render(area, buf);
    }
}
