//! Unified calculator driver
//!
//! Write the press-sequence test logic once, run it against every frontend.
//! Both the TUI app and the WASM widget expose the same token-press surface,
//! so one set of verification functions covers them all.

use crate::core::{InputToken, SciFunction};

/// Abstract driver trait for calculator interactions
///
/// Implemented by the TUI app wrapper and the WASM widget, enabling unified
/// test specifications that work on any frontend.
///
/// # Example
///
/// ```rust
/// use calcpad::driver::{verify_basic_arithmetic, CalculatorDriver};
/// use calcpad::wasm::CalcWidget;
///
/// let mut widget = CalcWidget::new();
/// verify_basic_arithmetic(&mut widget);
/// ```
pub trait CalculatorDriver {
    /// Presses a single input token
    fn press(&mut self, token: InputToken);

    /// Gets the current display text
    fn display(&self) -> String;

    /// Gets the pending-expression line ("12 +"), empty when nothing pends
    fn pending(&self) -> String;

    /// Resets the calculator to its power-on state, memory included
    fn reset(&mut self);

    /// Presses a character sequence through the shared keyboard mapping.
    ///
    /// Characters with no mapping are ignored, matching how the frontends
    /// treat unmapped keys.
    fn press_all(&mut self, sequence: &str) {
        for c in sequence.chars() {
            if let Some(token) = InputToken::from_char(c) {
                self.press(token);
            }
        }
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::InputToken;
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, token: InputToken) {
            self.app.press(token);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn pending(&self) -> String {
            self.app.pending().unwrap_or_default()
        }

        fn reset(&mut self) {
            self.app = CalculatorApp::new();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Test Specifications =====
// These run against ANY CalculatorDriver implementation

/// Verifies two-operand arithmetic through the keypad
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all("2+3=");
    assert_eq!(driver.display(), "5");

    driver.reset();
    driver.press_all("10-4=");
    assert_eq!(driver.display(), "6");

    driver.reset();
    driver.press_all("6*7=");
    assert_eq!(driver.display(), "42");

    driver.reset();
    driver.press_all("20/4=");
    assert_eq!(driver.display(), "5");
}

/// Verifies that chained operators associate left to right
pub fn verify_left_associative_chaining<D: CalculatorDriver>(driver: &mut D) {
    // 2 + 3 * 4 evaluates as (2 + 3) * 4, not 2 + 12
    driver.reset();
    driver.press_all("2+3*4=");
    assert_eq!(driver.display(), "20");

    driver.reset();
    driver.press_all("100-50/2=");
    assert_eq!(driver.display(), "25");
}

/// Verifies the error state and recovery from it
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all("5/0=");
    assert_eq!(driver.display(), "Error");

    // Operators are ignored while in error
    driver.press(InputToken::Op(crate::core::BinaryOp::Add));
    assert_eq!(driver.display(), "Error");

    // A digit starts a fresh entry
    driver.press(InputToken::Digit(7));
    assert_eq!(driver.display(), "7");

    driver.reset();
    driver.press_all("5/0=");
    driver.press(InputToken::ClearAll);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.pending(), "");
}

/// Verifies entry editing: delete, decimal point, leading zero
pub fn verify_entry_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all("123");
    driver.press(InputToken::Delete);
    assert_eq!(driver.display(), "12");

    driver.reset();
    driver.press_all("7");
    driver.press(InputToken::Delete);
    assert_eq!(driver.display(), "0");

    driver.reset();
    driver.press_all("1.5.");
    assert_eq!(driver.display(), "1.5");

    driver.reset();
    driver.press_all("05");
    assert_eq!(driver.display(), "5");
}

/// Verifies the memory register round trip
pub fn verify_memory_round_trip<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all("42");
    driver.press(InputToken::MemoryStore);
    driver.press(InputToken::ClearAll);
    assert_eq!(driver.display(), "0");
    driver.press(InputToken::MemoryRecall);
    assert_eq!(driver.display(), "42");

    driver.press(InputToken::MemoryClear);
    driver.press(InputToken::MemoryRecall);
    assert_eq!(driver.display(), "0");
}

/// Verifies the factorial boundary behavior
pub fn verify_factorial_bounds<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all("5");
    driver.press(InputToken::Function(SciFunction::Factorial));
    assert_eq!(driver.display(), "120");

    driver.reset();
    driver.press_all("171");
    driver.press(InputToken::Function(SciFunction::Factorial));
    assert_eq!(driver.display(), "Error");

    driver.reset();
    driver.press_all("2.5");
    driver.press(InputToken::Function(SciFunction::Factorial));
    assert_eq!(driver.display(), "Error");
}

/// Verifies that the angle mode changes trig evaluation and nothing else
pub fn verify_angle_mode_isolation<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all("90");
    driver.press(InputToken::Function(SciFunction::Sin));
    assert_eq!(driver.display(), "1");

    // Toggling the mode does not re-evaluate the display
    driver.reset();
    driver.press_all("90");
    driver.press(InputToken::AngleToggle);
    assert_eq!(driver.display(), "90");
}

/// Complete verification suite - runs all specifications
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_left_associative_chaining(driver);
    verify_error_recovery(driver);
    verify_entry_editing(driver);
    verify_memory_round_trip(driver);
    verify_factorial_bounds(driver);
    verify_angle_mode_isolation(driver);
}
