//! TUI application state
//!
//! Wraps the core [`CalcState`] with the one piece of state the terminal
//! needs and the core does not: the quit flag.

use crate::core::{AngleMode, CalcState, InputToken};

/// Calculator application state
#[derive(Debug, Clone, Default)]
pub struct CalculatorApp {
    /// The calculator state machine
    state: CalcState,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator app with an explicit random seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: CalcState::with_seed(seed),
            should_quit: false,
        }
    }

    /// Applies one input token to the calculator
    pub fn press(&mut self, token: InputToken) {
        self.state = self.state.apply(token);
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the pending-expression line, if an operation is pending
    #[must_use]
    pub fn pending(&self) -> Option<String> {
        self.state.pending_display()
    }

    /// Returns whether the display shows the error marker
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.state.has_error()
    }

    /// Returns whether the scientific key bank is shown
    #[must_use]
    pub fn scientific_mode(&self) -> bool {
        self.state.scientific_mode()
    }

    /// Returns the current angle mode
    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        self.state.angle_mode()
    }

    /// Returns the underlying calculator state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns the indicator line: angle mode, layout mode, memory flag
    #[must_use]
    pub fn status_line(&self) -> String {
        let mut parts = vec![self.state.angle_mode().label().to_string()];
        if self.state.scientific_mode() {
            parts.push("SCI".to_string());
        }
        if self.state.memory() != 0.0 {
            parts.push("M".to_string());
        }
        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BinaryOp;

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display(), "0");
        assert_eq!(app.pending(), None);
        assert!(!app.has_error());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_with_seed_is_deterministic() {
        let mut a = CalculatorApp::with_seed(7);
        let mut b = CalculatorApp::with_seed(7);
        a.press(InputToken::Random);
        b.press(InputToken::Random);
        assert_eq!(a.display(), b.display());
    }

    // ===== Press tests =====

    #[test]
    fn test_press_sequence() {
        let mut app = CalculatorApp::new();
        app.press(InputToken::Digit(2));
        app.press(InputToken::Op(BinaryOp::Add));
        app.press(InputToken::Digit(3));
        app.press(InputToken::Equals);
        assert_eq!(app.display(), "5");
    }

    #[test]
    fn test_pending_line() {
        let mut app = CalculatorApp::new();
        app.press(InputToken::Digit(8));
        app.press(InputToken::Op(BinaryOp::Multiply));
        assert_eq!(app.pending(), Some("8 *".to_string()));
    }

    #[test]
    fn test_error_flag_exposed() {
        let mut app = CalculatorApp::new();
        app.press(InputToken::Digit(1));
        app.press(InputToken::Op(BinaryOp::Divide));
        app.press(InputToken::Digit(0));
        app.press(InputToken::Equals);
        assert!(app.has_error());
        assert_eq!(app.display(), "Error");
    }

    // ===== Quit tests =====

    #[test]
    fn test_quit() {
        let mut app = CalculatorApp::new();
        assert!(!app.should_quit());
        app.quit();
        assert!(app.should_quit());
    }

    // ===== Status line tests =====

    #[test]
    fn test_status_line_default() {
        let app = CalculatorApp::new();
        assert_eq!(app.status_line(), "DEG");
    }

    #[test]
    fn test_status_line_all_indicators() {
        let mut app = CalculatorApp::new();
        app.press(InputToken::AngleToggle);
        app.press(InputToken::ModeToggle);
        app.press(InputToken::Digit(5));
        app.press(InputToken::MemoryStore);
        assert_eq!(app.status_line(), "RAD | SCI | M");
    }

    #[test]
    fn test_status_line_memory_cleared() {
        let mut app = CalculatorApp::new();
        app.press(InputToken::Digit(5));
        app.press(InputToken::MemoryStore);
        app.press(InputToken::MemoryClear);
        assert_eq!(app.status_line(), "DEG");
    }
}
