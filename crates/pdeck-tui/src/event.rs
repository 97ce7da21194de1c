//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pdeck_app::message::Message;
use pdeck_app::InputKey;
use pdeck_core::prelude::*;

/// How long one poll waits for a key before yielding a tick
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Convert a crossterm key event into an [`InputKey`]
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let input = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => InputKey::CharCtrl(c),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        _ => return None,
    };
    Some(input)
}

/// Wait briefly for a key press.
///
/// Returns [`Message::Tick`] when nothing arrived so the caller redraws.
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_TIMEOUT)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        // Resize just needs a redraw, which the next loop iteration does
        Event::Resize(..) => Ok(Some(Message::Tick)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_and_letters() {
        assert_eq!(
            key_event_to_input(key(KeyCode::Char('3'))),
            Some(InputKey::Char('3'))
        );
        assert_eq!(
            key_event_to_input(key(KeyCode::Char('i'))),
            Some(InputKey::Char('i'))
        );
    }

    #[test]
    fn test_ctrl_c() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(ev), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_shift_tab_variants() {
        let ev = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(ev), Some(InputKey::BackTab));
        assert_eq!(key_event_to_input(key(KeyCode::BackTab)), Some(InputKey::BackTab));
        assert_eq!(key_event_to_input(key(KeyCode::Tab)), Some(InputKey::Tab));
    }

    #[test]
    fn test_prompt_editing_keys() {
        assert_eq!(key_event_to_input(key(KeyCode::Enter)), Some(InputKey::Enter));
        assert_eq!(key_event_to_input(key(KeyCode::Esc)), Some(InputKey::Esc));
        assert_eq!(
            key_event_to_input(key(KeyCode::Backspace)),
            Some(InputKey::Backspace)
        );
    }

    #[test]
    fn test_arrows() {
        assert_eq!(key_event_to_input(key(KeyCode::Up)), Some(InputKey::Up));
        assert_eq!(key_event_to_input(key(KeyCode::Down)), Some(InputKey::Down));
        assert_eq!(key_event_to_input(key(KeyCode::Left)), Some(InputKey::Left));
        assert_eq!(key_event_to_input(key(KeyCode::Right)), Some(InputKey::Right));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(key_event_to_input(key(KeyCode::F(5))), None);
        assert_eq!(key_event_to_input(key(KeyCode::Insert)), None);
        assert_eq!(key_event_to_input(key(KeyCode::PageUp)), None);
    }
}
