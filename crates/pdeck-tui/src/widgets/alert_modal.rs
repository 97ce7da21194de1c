//! Blocking alert for rejected operator actions

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use pdeck_app::Alert;

use super::modal_overlay::{centered_rect, dim_background};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 8;

pub struct AlertModal<'a> {
    alert: &'a Alert,
}

impl<'a> AlertModal<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl Widget for AlertModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal, buf);

        let block = styles::modal_block(&self.alert.title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.alert.message.as_str(), styles::text_primary())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" to dismiss", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
