use crate::command::Command;
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Span, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;
use std::error::Error;

/// A pop-up reporting a non-fatal error, such as a failure to save the best
/// score
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const MAX_LINES: u16 = 14;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    /// Build a warning from an error and its chain of sources
    pub(crate) fn from_error<E: Error + ?Sized>(e: &E) -> Warning {
        let mut msgs = vec![e.to_string()];
        let mut source = e.source();
        while let Some(src) = source {
            msgs.push(src.to_string());
            source = src.source();
        }
        Warning::from_messages(msgs)
    }

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter | Command::Space => Some(WarningOutcome::Dismissed),
            Command::Quit => Some(WarningOutcome::Quit),
            _ => None,
        }
    }

    fn from_messages(msgs: Vec<String>) -> Warning {
        let width = usize::from(Warning::TEXT_WIDTH);
        let mut msgs = msgs.into_iter();
        let mut lines = Vec::new();
        if let Some(first) = msgs.next() {
            let opts = textwrap::Options::new(width).break_words(true);
            lines.extend(textwrap::wrap(&first, opts).into_iter().map(Cow::into_owned));
        }
        let mut causes = msgs.peekable();
        if causes.peek().is_some() {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
            for m in causes {
                let opts = textwrap::Options::new(width)
                    .break_words(true)
                    .initial_indent("  - ")
                    .subsequent_indent("    ");
                lines.extend(textwrap::wrap(&m, opts).into_iter().map(Cow::into_owned));
            }
        }
        lines.truncate(usize::from(Warning::MAX_LINES));
        Warning { lines }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl Widget for &Warning {
    // `area` is the area of the whole display, not just of the pop-up.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let block_area = center_rect(
            area,
            Size {
                width: Warning::WIDTH,
                height,
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        Line::from_iter([
            Span::raw("[OK ("),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw(")]"),
        ])
        .centered()
        .render(ok_area, buf);
    }
}
