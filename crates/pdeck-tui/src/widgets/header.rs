//! Header bar: app title, backend, armed count and the remote listing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use pdeck_app::state::RemoteListing;
use pdeck_app::view::ViewModel;

use crate::theme::{palette, styles};

/// Remote profiles shown inline before the rest is summarised
const MAX_LISTED_PROFILES: usize = 6;

pub struct MainHeader<'a> {
    view: &'a ViewModel,
}

impl<'a> MainHeader<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }

    fn title_row(&self) -> Line<'a> {
        let armed = self
            .view
            .panels
            .iter()
            .filter(|p| p.profile_id.is_some())
            .count();

        Line::from(vec![
            Span::styled("Profile Deck", styles::accent_bold()),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(self.view.backend.as_str(), styles::text_secondary()),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(
                format!("{}/{} running", armed, self.view.panels.len()),
                styles::text_secondary(),
            ),
        ])
    }

    fn remote_row(&self) -> Line<'a> {
        let label = Span::styled("Remote: ", styles::text_muted());
        match &self.view.remote {
            RemoteListing::NotLoaded => Line::from(vec![
                label,
                Span::styled("press ", styles::text_muted()),
                Span::styled("l", styles::keybinding()),
                Span::styled(" to list profiles", styles::text_muted()),
            ]),
            RemoteListing::Loading => {
                Line::from(vec![label, Span::styled("loading...", styles::text_secondary())])
            }
            RemoteListing::Failed(error) => Line::from(vec![
                label,
                Span::styled(
                    format!("listing failed: {}", error),
                    styles::log_message(pdeck_core::LogLevel::Warning),
                ),
            ]),
            RemoteListing::Loaded {
                profiles,
                fetched_at,
            } => {
                let mut spans = vec![
                    label,
                    Span::styled(
                        format!(
                            "{} @ {}  ",
                            profiles.len(),
                            fetched_at.format("%H:%M:%S")
                        ),
                        styles::text_secondary(),
                    ),
                ];
                for profile in profiles.iter().take(MAX_LISTED_PROFILES) {
                    spans.push(Span::styled(
                        format!("{} ", profile.profile_id),
                        styles::text_primary(),
                    ));
                    spans.push(Span::styled(
                        format!(" {} ", profile.status),
                        styles::badge(profile.badge.kind),
                    ));
                    spans.push(Span::raw("  "));
                }
                if profiles.len() > MAX_LISTED_PROFILES {
                    spans.push(Span::styled(
                        format!("+{} more", profiles.len() - MAX_LISTED_PROFILES),
                        styles::text_muted(),
                    ));
                }
                Line::from(spans)
            }
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(vec![self.title_row(), self.remote_row()]).render(inner, buf);
    }
}
