use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::state::Focus;

/// What a key press asks the app to do. Kept separate from the event
/// loop so the mapping stays a pure function of key and focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusPrevious,
    InsertChar(char),
    DeleteChar,
    Submit,
    CursorUp,
    CursorDown,
    Activate,
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    SeekForward,
    SeekBackward,
    RefreshDevices,
    Authenticate,
    Logout,
}

pub struct InputHandler;

impl InputHandler {
    pub fn map_key(key: KeyEvent, focus: Focus, authenticated: bool) -> Option<KeyAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(KeyAction::Quit),
            (KeyCode::Tab, _) => return Some(KeyAction::FocusNext),
            (KeyCode::BackTab, _) => return Some(KeyAction::FocusPrevious),
            _ => {}
        }

        if focus == Focus::Search {
            return match key.code {
                KeyCode::Char(c) => Some(KeyAction::InsertChar(c)),
                KeyCode::Backspace => Some(KeyAction::DeleteChar),
                KeyCode::Enter => Some(KeyAction::Submit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::CursorDown),
            KeyCode::Enter => Some(KeyAction::Activate),
            KeyCode::Char(' ') => Some(KeyAction::TogglePlayPause),
            KeyCode::Char('n') => Some(KeyAction::NextTrack),
            KeyCode::Char('p') => Some(KeyAction::PreviousTrack),
            KeyCode::Right | KeyCode::Char('l') => Some(KeyAction::SeekForward),
            KeyCode::Left | KeyCode::Char('h') => Some(KeyAction::SeekBackward),
            KeyCode::Char('d') => Some(KeyAction::RefreshDevices),
            KeyCode::Char('a') if !authenticated => Some(KeyAction::Authenticate),
            KeyCode::Char('o') if authenticated => Some(KeyAction::Logout),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn search_focus_captures_printable_keys_for_the_query() {
        assert_eq!(
            InputHandler::map_key(key(KeyCode::Char('q')), Focus::Search, true),
            Some(KeyAction::InsertChar('q'))
        );
        assert_eq!(
            InputHandler::map_key(key(KeyCode::Char(' ')), Focus::Search, true),
            Some(KeyAction::InsertChar(' '))
        );
    }

    #[test]
    fn ctrl_c_quits_even_while_typing() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            InputHandler::map_key(key, Focus::Search, true),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn transport_keys_apply_outside_the_search_panel() {
        assert_eq!(
            InputHandler::map_key(key(KeyCode::Char(' ')), Focus::Results, true),
            Some(KeyAction::TogglePlayPause)
        );
        assert_eq!(
            InputHandler::map_key(key(KeyCode::Char('q')), Focus::Devices, true),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn login_key_only_works_while_logged_out() {
        assert_eq!(
            InputHandler::map_key(key(KeyCode::Char('a')), Focus::Results, false),
            Some(KeyAction::Authenticate)
        );
        assert_eq!(
            InputHandler::map_key(key(KeyCode::Char('a')), Focus::Results, true),
            None
        );
    }

    #[test]
    fn focus_cycles_through_all_panels() {
        assert_eq!(Focus::Search.next(), Focus::Results);
        assert_eq!(Focus::Results.next(), Focus::Devices);
        assert_eq!(Focus::Devices.next(), Focus::Search);
        assert_eq!(Focus::Search.previous(), Focus::Devices);
    }
}
