//! Key hints for the current mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use pdeck_app::UiMode;

use crate::theme::styles;

pub struct KeyHints {
    mode: UiMode,
}

impl KeyHints {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Normal => &[
                ("1-9", "select"),
                ("Tab", "next"),
                ("s", "run profile"),
                ("i", "inject"),
                ("c", "clear log"),
                ("l", "list remote"),
                ("q", "quit"),
            ],
            UiMode::ProfileInput => &[("Enter", "run"), ("Esc", "cancel")],
            UiMode::Alert => &[("Enter", "dismiss")],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.bindings() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}   ", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
