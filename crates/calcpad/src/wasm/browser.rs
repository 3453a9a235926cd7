//! Browser bindings for the calculator widget
//!
//! The wasm-bindgen shell around [`CalcWidget`]. JavaScript wires real DOM
//! events to `press_button`/`press_key` and reads the getters back after
//! each call; the widget keeps its own mirror of the state.

// Note: this module is conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::widget::CalcWidget;

/// Browser calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    widget: CalcWidget,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a new browser calculator, seeded from the performance clock
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            widget: CalcWidget::with_seed(clock_seed()),
        }
    }

    /// Gets the current display text
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn display(&self) -> String {
        self.widget.display().to_string()
    }

    /// Gets the pending-expression line ("12 +"), empty when nothing pends
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn pending(&self) -> String {
        self.widget.state().pending_display().unwrap_or_default()
    }

    /// Gets whether the display shows the error marker
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.widget.state().has_error()
    }

    /// Gets whether the scientific key bank should be shown
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn scientific_mode(&self) -> bool {
        self.widget.state().scientific_mode()
    }

    /// Gets the angle mode label ("DEG" or "RAD")
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn angle_label(&self) -> String {
        self.widget.state().angle_mode().label().to_string()
    }

    /// Handles a keypad button click by element ID; returns false for
    /// unknown IDs
    pub fn press_button(&mut self, button_id: &str) -> bool {
        self.widget.click(button_id)
    }

    /// Handles a keyboard event by `KeyboardEvent.key` value; returns false
    /// for unmapped keys
    pub fn press_key(&mut self, key: &str) -> bool {
        self.widget.key(key)
    }

    /// Serializes the full calculator state as JSON
    #[must_use]
    pub fn state_json(&self) -> String {
        self.widget.snapshot_json()
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives a random seed from the performance clock, falling back to a
/// constant when the API is unavailable
fn clock_seed() -> u64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0, |p| p.now().to_bits())
}

/// Module initialization, called once when the WASM module loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"calcpad loaded".into());
}
