//! Color palette. Named terminal colors only, so the deck follows the
//! user's terminal theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Text ---
pub const ACCENT: Color = Color::Cyan;
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black;

// --- Badge colors ---
pub const BADGE_NEUTRAL: Color = Color::Gray;
pub const BADGE_RUNNING: Color = Color::Yellow;
pub const BADGE_OK: Color = Color::Green;
pub const BADGE_ERROR: Color = Color::Red;

// --- Log level colors ---
pub const LOG_INFO_MSG: Color = Color::White;
pub const LOG_WARNING_MSG: Color = Color::Yellow;
pub const LOG_ERROR_MSG: Color = Color::LightRed;

// --- Key hints ---
pub const KEY_HINT: Color = Color::Yellow;
