//! Custom widget components

mod alert_modal;
mod footer;
mod header;
pub mod modal_overlay;
mod panel_card;
mod profile_prompt;

pub use alert_modal::AlertModal;
pub use footer::KeyHints;
pub use header::MainHeader;
pub use panel_card::PanelCard;
pub use profile_prompt::ProfilePrompt;
