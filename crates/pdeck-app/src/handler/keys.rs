//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::ProfileInput => handle_key_profile_input(key),
        UiMode::Alert => handle_key_alert(key),
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let selected = state.panels.selected_index();

    if let Some(index) = key.panel_digit() {
        return Some(Message::SelectPanel(index));
    }

    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab | InputKey::Right | InputKey::Down => Some(Message::NextPanel),
        InputKey::BackTab | InputKey::Left | InputKey::Up => Some(Message::PreviousPanel),

        InputKey::Char('s') | InputKey::Enter => Some(Message::OpenProfileInput),
        InputKey::Char('i') => Some(Message::RequestInject { panel: selected }),
        InputKey::Char('c') => Some(Message::ClearLog { panel: selected }),
        InputKey::Char('l') => Some(Message::RequestRemoteList),

        _ => None,
    }
}

fn handle_key_profile_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::CancelProfileInput),
        InputKey::Enter => Some(Message::SubmitProfileInput),
        InputKey::Backspace => Some(Message::ProfileInputBackspace),
        InputKey::Char(c) => Some(Message::ProfileInputChar(c)),
        _ => None,
    }
}

fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::DismissAlert),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
