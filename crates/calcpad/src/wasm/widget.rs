//! The calculator widget behind the browser bindings
//!
//! Owns the core state and a DOM (mock here, real in `browser.rs`) and keeps
//! the two in sync: every applied token is followed by a mirror pass that
//! writes display, pending line, and indicators back into the elements.

use super::dom::{DomElement, DomEvent, MockDom};
use super::keypad::{key_to_token, MockDomKeypadExt, WasmKeypad};
use crate::core::{CalcState, InputToken};
use crate::driver::CalculatorDriver;

/// Element ID of the main display
pub const DISPLAY_ID: &str = "calc-display";
/// Element ID of the pending-expression line
pub const PENDING_ID: &str = "calc-pending";
/// Element ID of the indicator line (angle mode, layout mode, memory)
pub const INDICATORS_ID: &str = "calc-indicators";

/// Calculator widget with a mock DOM surface
#[derive(Debug)]
pub struct CalcWidget {
    state: CalcState,
    dom: MockDom,
    basic: WasmKeypad,
    scientific: WasmKeypad,
}

impl Default for CalcWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcWidget {
    /// Creates a widget with the power-on state
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(CalcState::new())
    }

    /// Creates a widget with an explicit random seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_state(CalcState::with_seed(seed))
    }

    fn from_state(state: CalcState) -> Self {
        let mut dom = MockDom::new();
        dom.register_element(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_class("display"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(PENDING_ID)
                .with_class("pending"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(INDICATORS_ID)
                .with_class("indicators"),
        );
        let basic = WasmKeypad::basic();
        let scientific = WasmKeypad::scientific();
        dom.mount_keypad(&basic);
        dom.mount_keypad(&scientific);

        let mut widget = Self {
            state,
            dom,
            basic,
            scientific,
        };
        widget.sync_dom();
        widget
    }

    /// Applies one input token and mirrors the new state into the DOM
    pub fn press(&mut self, token: InputToken) {
        self.state = self.state.apply(token);
        self.sync_dom();
    }

    /// Handles a click on a keypad button; returns false for unknown IDs
    pub fn click(&mut self, element_id: &str) -> bool {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let token = self
            .basic
            .handle_click(element_id)
            .or_else(|| self.scientific.handle_click(element_id));
        match token {
            Some(token) => {
                self.press(token);
                true
            }
            None => false,
        }
    }

    /// Handles a keyboard event; returns false for unmapped keys
    pub fn key(&mut self, key: &str) -> bool {
        self.dom.dispatch_event(DomEvent::key_press(key));
        match key_to_token(key) {
            Some(token) => {
                self.press(token);
                true
            }
            None => false,
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the underlying calculator state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns the mock DOM for inspection
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Serializes the full state as JSON
    #[must_use]
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|_| "{}".to_string())
    }

    fn indicators(&self) -> String {
        let mut parts = vec![self.state.angle_mode().label().to_string()];
        if self.state.scientific_mode() {
            parts.push("SCI".to_string());
        }
        if self.state.memory() != 0.0 {
            parts.push("M".to_string());
        }
        parts.join(" | ")
    }

    fn sync_dom(&mut self) {
        let display = self.state.display().to_string();
        let pending = self.state.pending_display().unwrap_or_default();
        let indicators = self.indicators();
        let has_error = self.state.has_error();

        self.dom.set_element_text(DISPLAY_ID, &display);
        self.dom.set_element_text(PENDING_ID, &pending);
        self.dom.set_element_text(INDICATORS_ID, &indicators);
        if let Some(elem) = self.dom.get_element_mut(DISPLAY_ID) {
            if has_error {
                elem.add_class("error");
            } else {
                elem.remove_class("error");
            }
        }
    }
}

impl CalculatorDriver for CalcWidget {
    fn press(&mut self, token: InputToken) {
        Self::press(self, token);
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn pending(&self) -> String {
        self.state.pending_display().unwrap_or_default()
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
