//! Terminal frontend for the calculator
//!
//! A thin shell over the core state machine: keyboard events become input
//! tokens, and the keypad grid mirrors what the WASM widget shows.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::render;
