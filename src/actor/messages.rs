//! Message types exchanged between the actors.

use bitflags::bitflags;

/// Key codes delivered to the application.
///
/// A simplified subset of crossterm's `KeyCode`; keys the engine has no use
/// for are dropped at conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Tab key.
    Tab,
    /// Escape key. Reserved: pressing it triggers the engine stop signal
    /// before the event reaches the application.
    Esc,
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Shift key held.
        const SHIFT = 0b0000_0001;
        /// Control key held.
        const CONTROL = 0b0000_0010;
        /// Alt/Option key held.
        const ALT = 0b0000_0100;
    }
}

/// Whether a key event is a press or a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// The key went down (repeats are reported as presses).
    Pressed,
    /// The key came up.
    Released,
}

/// A discrete key event forwarded to [`Game::on_key`](crate::Game::on_key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key involved.
    pub code: KeyCode,
    /// Press or release.
    pub state: KeyState,
    /// Modifiers held at the time.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// A plain press of a key with no modifiers.
    pub const fn pressed(code: KeyCode) -> Self {
        Self {
            code,
            state: KeyState::Pressed,
            modifiers: KeyModifiers::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_combine() {
        let mods = KeyModifiers::SHIFT | KeyModifiers::CONTROL;
        assert!(mods.contains(KeyModifiers::SHIFT));
        assert!(!mods.contains(KeyModifiers::ALT));
    }

    #[test]
    fn test_pressed_constructor() {
        let ev = KeyEvent::pressed(KeyCode::Char('a'));
        assert_eq!(ev.state, KeyState::Pressed);
        assert!(ev.modifiers.is_empty());
    }
}
