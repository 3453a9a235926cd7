//! Keyboard input handling
//!
//! Maps crossterm key events to calculator input tokens. Character keys go
//! through the shared [`InputToken::from_char`] mapping so the terminal and
//! the browser widget agree on every key.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::InputToken;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Apply an input token to the calculator
    Token(InputToken),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            // 'd' is terminal-only sugar for the angle toggle; everything
            // else shares the cross-frontend character map
            KeyCode::Char('d') => KeyAction::Token(InputToken::AngleToggle),
            KeyCode::Char(c) => InputToken::from_char(c).map_or(KeyAction::None, KeyAction::Token),
            KeyCode::Enter => KeyAction::Token(InputToken::Equals),
            KeyCode::Esc => KeyAction::Token(InputToken::ClearAll),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Token(InputToken::Delete),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BinaryOp;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            let expected = InputToken::Digit(c as u8 - b'0');
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Token(expected)
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('+'))),
            KeyAction::Token(InputToken::Op(BinaryOp::Add))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('/'))),
            KeyAction::Token(InputToken::Op(BinaryOp::Divide))
        );
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Token(InputToken::Decimal)
        );
    }

    #[test]
    fn test_handle_equals_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Token(InputToken::Equals)
        );
    }

    #[test]
    fn test_handle_mode_toggle_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('m'))),
            KeyAction::Token(InputToken::ModeToggle)
        );
    }

    #[test]
    fn test_handle_angle_toggle_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('d'))),
            KeyAction::Token(InputToken::AngleToggle)
        );
    }

    // ===== Action key tests =====

    #[test]
    fn test_handle_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Token(InputToken::Equals)
        );
    }

    #[test]
    fn test_handle_escape() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Token(InputToken::ClearAll)
        );
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Token(InputToken::Delete)
        );
    }

    #[test]
    fn test_handle_delete_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Delete)),
            KeyAction::Token(InputToken::Delete)
        );
    }

    // ===== Ctrl key tests =====

    #[test]
    fn test_handle_ctrl_c_quits() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_q_quits() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    // ===== Unknown key tests =====

    #[test]
    fn test_handle_unmapped_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_handle_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::F(1))),
            KeyAction::None
        );
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), KeyAction::None);
    }
}
