//! Semantic style builders.

use pdeck_core::{BadgeKind, LogLevel};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::KEY_HINT)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(accent_bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Domain mappings ---

/// Reversed chip style for a badge
pub fn badge(kind: BadgeKind) -> Style {
    let color = match kind {
        BadgeKind::Neutral => palette::BADGE_NEUTRAL,
        BadgeKind::Running => palette::BADGE_RUNNING,
        BadgeKind::Ok => palette::BADGE_OK,
        BadgeKind::Error => palette::BADGE_ERROR,
    };
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}

pub fn log_message(level: LogLevel) -> Style {
    match level {
        LogLevel::Info => Style::default().fg(palette::LOG_INFO_MSG),
        LogLevel::Warning => Style::default().fg(palette::LOG_WARNING_MSG),
        LogLevel::Error => Style::default()
            .fg(palette::LOG_ERROR_MSG)
            .add_modifier(Modifier::BOLD),
    }
}
