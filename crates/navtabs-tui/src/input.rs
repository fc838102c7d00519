use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    FirstTab,
    LastTab,
    /// Digit keys 1-9 select a tab directly (0-based index here)
    SelectIndex(usize),
    ToggleDisabled,
    Remount,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    if let (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) = (key.code, key.modifiers) {
        return Action::SelectIndex(c as usize - '1' as usize);
    }

    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Some terminals report uppercase letters without SHIFT
    if let KeyCode::Char(c) = key.code {
        if c.is_ascii_uppercase() && key.modifiers == KeyModifiers::NONE {
            if let Some(action) = keymap.get(&KeyBinding::shift(key.code)) {
                return *action;
            }
        }
    }

    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_digits_select() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1'), KeyModifiers::NONE), &keymap),
            Action::SelectIndex(0)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('9'), KeyModifiers::NONE), &keymap),
            Action::SelectIndex(8)
        );
    }

    #[test]
    fn test_bound_keys() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('d'), KeyModifiers::NONE), &keymap),
            Action::ToggleDisabled
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('G'), KeyModifiers::NONE), &keymap),
            Action::LastTab
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('z'), KeyModifiers::NONE), &keymap),
            Action::None
        );
    }
}
