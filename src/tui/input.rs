//! Key bindings for the generator screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::pass::CharClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(char),
    Backspace,
    ClearLength,
    Toggle(CharClass),
    Generate,
    Reset,
    Copy,
    Save,
    Quit,
    Ignore,
}

/// Toggle hotkeys, in screen order.
pub const TOGGLE_KEYS: [(char, CharClass); 4] = [
    ('l', CharClass::Lowercase),
    ('u', CharClass::Uppercase),
    ('n', CharClass::Digit),
    ('s', CharClass::Symbol),
];

pub fn map_key(key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    match code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('u') if ctrl => Action::ClearLength,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter => Action::Generate,
        KeyCode::Backspace | KeyCode::Delete => Action::Backspace,
        KeyCode::Char(c) if c.is_ascii_digit() => Action::Digit(c),
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('w') => Action::Save,
        KeyCode::Char(c) => TOGGLE_KEYS
            .iter()
            .find(|(k, _)| *k == c)
            .map(|&(_, class)| Action::Toggle(class))
            .unwrap_or(Action::Ignore),
        _ => Action::Ignore,
    }
}

pub fn toggle_key(class: CharClass) -> char {
    TOGGLE_KEYS
        .iter()
        .find(|(_, c)| *c == class)
        .map(|&(k, _)| k)
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn digits_edit_length() {
        assert_eq!(map_key(key(KeyCode::Char('7'))), Action::Digit('7'));
        assert_eq!(map_key(key(KeyCode::Backspace)), Action::Backspace);
        assert_eq!(map_key(ctrl('u')), Action::ClearLength);
    }

    #[test]
    fn letters_toggle_classes() {
        assert_eq!(
            map_key(key(KeyCode::Char('l'))),
            Action::Toggle(CharClass::Lowercase)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('U'))),
            Action::Toggle(CharClass::Uppercase)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('n'))),
            Action::Toggle(CharClass::Digit)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('s'))),
            Action::Toggle(CharClass::Symbol)
        );
    }

    #[test]
    fn commands() {
        assert_eq!(map_key(key(KeyCode::Enter)), Action::Generate);
        assert_eq!(map_key(key(KeyCode::Char('r'))), Action::Reset);
        assert_eq!(map_key(key(KeyCode::Char('c'))), Action::Copy);
        assert_eq!(map_key(key(KeyCode::Char('w'))), Action::Save);
        assert_eq!(map_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(map_key(ctrl('c')), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('z'))), Action::Ignore);
    }

    #[test]
    fn caps_lock_does_not_change_bindings() {
        assert_eq!(map_key(key(KeyCode::Char('R'))), Action::Reset);
        assert_eq!(map_key(key(KeyCode::Char('C'))), Action::Copy);
        assert_eq!(map_key(key(KeyCode::Char('W'))), Action::Save);
        assert_eq!(map_key(key(KeyCode::Char('Q'))), Action::Quit);
        assert_eq!(
            map_key(key(KeyCode::Char('S'))),
            Action::Toggle(CharClass::Symbol)
        );
        assert_eq!(map_key(ctrl('C')), Action::Quit);
    }

    #[test]
    fn every_class_has_a_key() {
        for class in CharClass::ALL {
            assert_ne!(toggle_key(class), '?');
        }
    }
}
