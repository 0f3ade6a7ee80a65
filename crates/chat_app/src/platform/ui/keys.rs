use chat_core::{AppViewModel, Key, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::constants::SCROLL_PAGE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

/// Translates a key press into a core message. Plain text editing of the
/// input field happens here; the core only sees the resulting text.
pub fn map_key(key: KeyEvent, view: &AppViewModel) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    if view.notice.is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                KeyAction::Dispatch(Msg::NoticeDismissed)
            }
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('l') if ctrl => KeyAction::Dispatch(Msg::ClearClicked),
        KeyCode::Enter => KeyAction::Dispatch(Msg::KeyActivated(Key::Enter)),
        KeyCode::Backspace => {
            let mut text = view.input.clone();
            if text.pop().is_some() {
                KeyAction::Dispatch(Msg::InputChanged(text))
            } else {
                KeyAction::Ignore
            }
        }
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut text = view.input.clone();
            text.push(ch);
            KeyAction::Dispatch(Msg::InputChanged(text))
        }
        KeyCode::PageUp => KeyAction::Dispatch(Msg::ScrollUp(SCROLL_PAGE)),
        KeyCode::PageDown => KeyAction::Dispatch(Msg::ScrollDown(SCROLL_PAGE)),
        KeyCode::Up => KeyAction::Dispatch(Msg::ScrollUp(1)),
        KeyCode::Down => KeyAction::Dispatch(Msg::ScrollDown(1)),
        _ => KeyAction::Ignore,
    }
}
