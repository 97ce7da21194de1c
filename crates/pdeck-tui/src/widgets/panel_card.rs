//! One panel of the grid: run details on top, newest log lines below.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use pdeck_app::view::{LogLine, PanelView};

use crate::theme::{palette, styles};

/// Placeholder for fields the backend has not reported yet
const ABSENT: &str = "-";

pub struct PanelCard<'a> {
    view: &'a PanelView,
}

impl<'a> PanelCard<'a> {
    pub fn new(view: &'a PanelView) -> Self {
        Self { view }
    }

    fn title(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            format!(" {} ", self.view.title),
            if self.view.selected {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        )];
        spans.push(Span::styled(
            format!(" {} ", self.view.badge.text),
            styles::badge(self.view.badge.kind),
        ));
        if self.view.polling {
            spans.push(Span::styled(" ⟳ ", styles::text_muted()));
        }
        Line::from(spans)
    }

    fn detail_lines(&self) -> Vec<Line<'a>> {
        let view = self.view;
        let field = |label: &'static str, value: Option<&str>| {
            Line::from(vec![
                Span::styled(label, styles::text_muted()),
                Span::styled(
                    value.unwrap_or(ABSENT).to_string(),
                    if value.is_some() {
                        styles::text_primary()
                    } else {
                        styles::text_muted()
                    },
                ),
            ])
        };

        let mut lines = vec![field("Profile  ", view.profile_id.as_deref())];
        lines.push(field("Debug    ", view.debug_endpoint.as_deref()));
        lines.push(field("WS       ", view.websocket.as_deref()));
        if view.started_at.is_some() {
            lines.push(field("Started  ", view.started_at.as_deref()));
        }
        lines
    }
}

fn log_line(line: &LogLine) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("{} ", line.time), styles::text_muted()),
        Span::styled(line.text.as_str(), styles::log_message(line.level)),
    ])
}

impl Widget for PanelCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.view.selected)
            .title(self.title())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let details = self.detail_lines();
        let detail_height = (details.len() as u16).min(inner.height);
        Paragraph::new(details).render(
            Rect {
                height: detail_height,
                ..inner
            },
            buf,
        );

        // One separator row, then the log fills the rest
        let log_top = inner.y + detail_height + 1;
        if log_top >= inner.bottom() {
            return;
        }
        let log_area = Rect::new(inner.x, log_top, inner.width, inner.bottom() - log_top);

        if self.view.log.is_empty() {
            Paragraph::new(Span::styled("No events", styles::text_muted())).render(log_area, buf);
            return;
        }

        let visible = log_area.height as usize;
        let skip = self.view.log.len().saturating_sub(visible);
        let lines: Vec<Line> = self.view.log[skip..].iter().map(log_line).collect();
        Paragraph::new(lines).render(log_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pdeck_app::view::render;
    use pdeck_app::Panel;
    use pdeck_core::DebugEndpoint;

    #[test]
    fn test_idle_card() {
        let panel = Panel::new(0, 100);
        let view = render(&panel);

        let mut term = TestTerminal::with_size(50, 10);
        term.render_widget(PanelCard::new(&view), Rect::new(0, 0, 50, 10));

        assert!(term.buffer_contains("Panel 1"));
        assert!(term.buffer_contains("idle"));
        assert!(term.buffer_contains("No events"));
    }

    #[test]
    fn test_running_card_shows_details_and_newest_log() {
        let mut panel = Panel::new(2, 100);
        panel.arm("profile-xyz");
        panel.debug_endpoint = Some(DebugEndpoint::new("10.0.0.5", 9333));
        panel.websocket = Some("ws://10.0.0.5:9333/devtools".into());
        for i in 0..20 {
            panel.log.info(format!("line {}", i));
        }
        let view = render(&panel);

        let mut term = TestTerminal::with_size(60, 12);
        term.render_widget(PanelCard::new(&view), Rect::new(0, 0, 60, 12));

        assert!(term.buffer_contains("Panel 3"));
        assert!(term.buffer_contains("profile-xyz"));
        assert!(term.buffer_contains("10.0.0.5:9333"));
        assert!(term.buffer_contains("line 19"));
        assert!(!term.buffer_contains("line 0 "));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let panel = Panel::new(0, 100);
        let view = render(&panel);
        let mut term = TestTerminal::with_size(4, 2);
        term.render_widget(PanelCard::new(&view), Rect::new(0, 0, 4, 2));
    }
}
