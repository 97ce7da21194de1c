//! Profile id prompt shown before a run starts

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use pdeck_app::view::InputView;

use super::modal_overlay::{centered_rect, dim_background};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 7;
const INPUT_PREFIX: &str = "> ";

pub struct ProfilePrompt<'a> {
    input: &'a InputView,
}

impl<'a> ProfilePrompt<'a> {
    pub fn new(input: &'a InputView) -> Self {
        Self { input }
    }

    /// Where the terminal cursor belongs when the prompt fills `area`
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner = Self::inner(area);
        let typed = (INPUT_PREFIX.width() + self.input.buffer.width()) as u16;
        Position::new(
            (inner.x + typed).min(inner.right().saturating_sub(1)),
            inner.y + 1,
        )
    }

    fn inner(area: Rect) -> Rect {
        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        styles::modal_block("").inner(modal)
    }
}

impl Widget for ProfilePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal, buf);

        let title = format!("Run profile on {}", self.input.target_title);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let lines = vec![
            Line::from(Span::styled("Profile ID", styles::text_muted())),
            Line::from(vec![
                Span::styled(INPUT_PREFIX, styles::accent_bold()),
                Span::styled(self.input.buffer.as_str(), styles::text_primary()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" run   ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
