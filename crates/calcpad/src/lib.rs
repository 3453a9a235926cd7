//! Calcpad - a calculator keypad state machine with TUI and WASM frontends
//!
//! The core is a pure transition function over [`core::CalcState`]: every
//! keypad press or keyboard event is translated into a
//! [`core::InputToken`] and applied, producing the next state. The same
//! core drives a ratatui terminal frontend and a wasm-bindgen browser
//! widget, and the [`driver::CalculatorDriver`] trait lets one test suite
//! exercise both.
//!
//! # Example
//!
//! ```rust
//! use calcpad::prelude::*;
//!
//! let mut state = CalcState::new();
//! for c in "12+3=".chars() {
//!     state = state.apply(InputToken::from_char(c).unwrap());
//! }
//! assert_eq!(state.display(), "15");
//!
//! // Division by zero never panics, it enters the error state
//! for c in "5/0=".chars() {
//!     state = state.apply(InputToken::from_char(c).unwrap());
//! }
//! assert_eq!(state.display(), "Error");
//! assert!(state.has_error());
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, AngleMode, BinaryOp, CalcError, CalcResult, CalcState, Constant,
        InputToken, SciFunction, ERROR_MARKER,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{CalcWidget, DomElement, DomEvent, MockDom};
}
