//! Browser frontend for the calculator
//!
//! The widget itself runs against a mock DOM so the whole surface is
//! testable natively; the `wasm` feature adds the wasm-bindgen shell that
//! wires it to the real document.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod keypad;
mod widget;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom};
pub use keypad::{key_to_token, ButtonDef, MockDomKeypadExt, WasmKeypad};
pub use widget::CalcWidget;
