//! Keypad layout for the browser widget
//!
//! Mirrors the TUI keypad so both frontends expose the same buttons: the
//! basic grid plus the scientific bank. Each button gets a stable element
//! ID so tests and the real DOM wiring can address it.

use super::dom::{DomElement, MockDom};
use crate::core::{BinaryOp, Constant, InputToken, SciFunction};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDef {
    /// The token this button applies
    pub token: InputToken,
    /// The label shown on the button
    pub label: &'static str,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl ButtonDef {
    /// Creates a new button definition with a derived element ID
    #[must_use]
    pub fn new(token: InputToken, label: &'static str, row: usize, col: usize) -> Self {
        Self {
            token,
            label,
            id: element_id(token),
            row,
            col,
        }
    }
}

/// Returns the stable element ID for a token's button
fn element_id(token: InputToken) -> String {
    match token {
        InputToken::Digit(d) => format!("btn-{d}"),
        InputToken::Decimal => "btn-decimal".to_string(),
        InputToken::Op(BinaryOp::Add) => "btn-plus".to_string(),
        InputToken::Op(BinaryOp::Subtract) => "btn-minus".to_string(),
        InputToken::Op(BinaryOp::Multiply) => "btn-times".to_string(),
        InputToken::Op(BinaryOp::Divide) => "btn-divide".to_string(),
        InputToken::Equals => "btn-equals".to_string(),
        InputToken::ClearAll => "btn-clear".to_string(),
        InputToken::Delete => "btn-delete".to_string(),
        InputToken::Function(f) => format!("btn-{}", function_name(f)),
        InputToken::Constant(Constant::Pi) => "btn-pi".to_string(),
        InputToken::Constant(Constant::E) => "btn-euler".to_string(),
        InputToken::Random => "btn-random".to_string(),
        InputToken::MemoryStore => "btn-mem-store".to_string(),
        InputToken::MemoryRecall => "btn-mem-recall".to_string(),
        InputToken::MemoryClear => "btn-mem-clear".to_string(),
        InputToken::ModeToggle => "btn-mode".to_string(),
        InputToken::AngleToggle => "btn-angle".to_string(),
    }
}

fn function_name(f: SciFunction) -> &'static str {
    match f {
        SciFunction::Sin => "sin",
        SciFunction::Cos => "cos",
        SciFunction::Tan => "tan",
        SciFunction::Asin => "asin",
        SciFunction::Acos => "acos",
        SciFunction::Atan => "atan",
        SciFunction::Sinh => "sinh",
        SciFunction::Cosh => "cosh",
        SciFunction::Tanh => "tanh",
        SciFunction::Log10 => "log",
        SciFunction::Ln => "ln",
        SciFunction::Exp => "exp",
        SciFunction::Sqrt => "sqrt",
        SciFunction::Cbrt => "cbrt",
        SciFunction::Round => "round",
        SciFunction::Floor => "floor",
        SciFunction::Ceil => "ceil",
        SciFunction::Factorial => "factorial",
    }
}

/// Maps a browser `KeyboardEvent.key` value to an input token.
///
/// Single characters go through the shared [`InputToken::from_char`] map;
/// named keys get the same treatment as in the terminal frontend.
#[must_use]
pub fn key_to_token(key: &str) -> Option<InputToken> {
    match key {
        "Enter" => Some(InputToken::Equals),
        "Escape" => Some(InputToken::ClearAll),
        "Backspace" | "Delete" => Some(InputToken::Delete),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => InputToken::from_char(c),
                _ => None,
            }
        }
    }
}

/// Keypad layout definition for the browser widget
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    container_id: &'static str,
    buttons: Vec<ButtonDef>,
}

impl WasmKeypad {
    /// Creates the basic keypad shown in every mode
    #[must_use]
    pub fn basic() -> Self {
        let buttons = vec![
            ButtonDef::new(InputToken::ClearAll, "AC", 0, 0),
            ButtonDef::new(InputToken::Delete, "DEL", 0, 1),
            ButtonDef::new(InputToken::ModeToggle, "sci", 0, 2),
            ButtonDef::new(InputToken::Op(BinaryOp::Divide), "/", 0, 3),
            ButtonDef::new(InputToken::Digit(7), "7", 1, 0),
            ButtonDef::new(InputToken::Digit(8), "8", 1, 1),
            ButtonDef::new(InputToken::Digit(9), "9", 1, 2),
            ButtonDef::new(InputToken::Op(BinaryOp::Multiply), "*", 1, 3),
            ButtonDef::new(InputToken::Digit(4), "4", 2, 0),
            ButtonDef::new(InputToken::Digit(5), "5", 2, 1),
            ButtonDef::new(InputToken::Digit(6), "6", 2, 2),
            ButtonDef::new(InputToken::Op(BinaryOp::Subtract), "-", 2, 3),
            ButtonDef::new(InputToken::Digit(1), "1", 3, 0),
            ButtonDef::new(InputToken::Digit(2), "2", 3, 1),
            ButtonDef::new(InputToken::Digit(3), "3", 3, 2),
            ButtonDef::new(InputToken::Op(BinaryOp::Add), "+", 3, 3),
            ButtonDef::new(InputToken::Digit(0), "0", 4, 0),
            ButtonDef::new(InputToken::Decimal, ".", 4, 1),
            ButtonDef::new(InputToken::Equals, "=", 4, 2),
        ];
        Self {
            container_id: "calc-keypad",
            buttons,
        }
    }

    /// Creates the scientific key bank
    #[must_use]
    pub fn scientific() -> Self {
        let buttons = vec![
            ButtonDef::new(InputToken::Function(SciFunction::Sin), "sin", 0, 0),
            ButtonDef::new(InputToken::Function(SciFunction::Cos), "cos", 0, 1),
            ButtonDef::new(InputToken::Function(SciFunction::Tan), "tan", 0, 2),
            ButtonDef::new(InputToken::Function(SciFunction::Factorial), "x!", 0, 3),
            ButtonDef::new(InputToken::Function(SciFunction::Asin), "asin", 1, 0),
            ButtonDef::new(InputToken::Function(SciFunction::Acos), "acos", 1, 1),
            ButtonDef::new(InputToken::Function(SciFunction::Atan), "atan", 1, 2),
            ButtonDef::new(InputToken::Function(SciFunction::Sqrt), "√x", 1, 3),
            ButtonDef::new(InputToken::Function(SciFunction::Sinh), "sinh", 2, 0),
            ButtonDef::new(InputToken::Function(SciFunction::Cosh), "cosh", 2, 1),
            ButtonDef::new(InputToken::Function(SciFunction::Tanh), "tanh", 2, 2),
            ButtonDef::new(InputToken::Function(SciFunction::Cbrt), "∛x", 2, 3),
            ButtonDef::new(InputToken::Function(SciFunction::Log10), "log", 3, 0),
            ButtonDef::new(InputToken::Function(SciFunction::Ln), "ln", 3, 1),
            ButtonDef::new(InputToken::Function(SciFunction::Exp), "exp", 3, 2),
            ButtonDef::new(InputToken::Function(SciFunction::Round), "rnd", 3, 3),
            ButtonDef::new(InputToken::Function(SciFunction::Floor), "⌊x⌋", 4, 0),
            ButtonDef::new(InputToken::Function(SciFunction::Ceil), "⌈x⌉", 4, 1),
            ButtonDef::new(InputToken::Constant(Constant::Pi), "π", 4, 2),
            ButtonDef::new(InputToken::Constant(Constant::E), "e", 4, 3),
            ButtonDef::new(InputToken::Random, "rand", 5, 0),
            ButtonDef::new(InputToken::MemoryStore, "MS", 5, 1),
            ButtonDef::new(InputToken::MemoryRecall, "MR", 5, 2),
            ButtonDef::new(InputToken::MemoryClear, "MC", 5, 3),
            ButtonDef::new(InputToken::AngleToggle, "d/r", 6, 0),
        ];
        Self {
            container_id: "calc-sci-keypad",
            buttons,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[ButtonDef] {
        &self.buttons
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Processes a button click event and returns the token to apply
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<InputToken> {
        self.find_button_by_id(element_id).map(|btn| btn.token)
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(btn.label)
                    .with_class("keypad-btn")
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string())
            })
            .collect()
    }

    /// Creates a keypad container element with all buttons as children
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        let mut keypad = DomElement::new("div")
            .with_id(self.container_id)
            .with_class("keypad");
        for btn_elem in self.create_dom_elements() {
            keypad = keypad.with_child(btn_elem);
        }
        keypad
    }
}

/// Extension for mounting keypads into a mock DOM
pub trait MockDomKeypadExt {
    /// Registers the keypad container and all of its buttons
    fn mount_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn mount_keypad(&mut self, keypad: &WasmKeypad) {
        for elem in keypad.create_dom_elements() {
            self.register_element(elem);
        }
        self.register_element(keypad.create_keypad_element());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ButtonDef tests =====

    #[test]
    fn test_button_ids_are_stable() {
        assert_eq!(element_id(InputToken::Digit(7)), "btn-7");
        assert_eq!(element_id(InputToken::Op(BinaryOp::Divide)), "btn-divide");
        assert_eq!(element_id(InputToken::Equals), "btn-equals");
        assert_eq!(
            element_id(InputToken::Function(SciFunction::Factorial)),
            "btn-factorial"
        );
        assert_eq!(element_id(InputToken::Constant(Constant::Pi)), "btn-pi");
        assert_eq!(element_id(InputToken::MemoryStore), "btn-mem-store");
    }

    #[test]
    fn test_button_ids_are_unique_across_layouts() {
        let mut seen = std::collections::HashSet::new();
        for keypad in [WasmKeypad::basic(), WasmKeypad::scientific()] {
            for btn in keypad.buttons() {
                assert!(seen.insert(btn.id.clone()), "duplicate id {}", btn.id);
            }
        }
    }

    // ===== Layout tests =====

    #[test]
    fn test_basic_layout_matches_tui_shape() {
        let keypad = WasmKeypad::basic();
        assert_eq!(keypad.button_count(), 19);
        for d in 0..=9 {
            assert!(keypad.handle_click(&format!("btn-{d}")).is_some());
        }
    }

    #[test]
    fn test_scientific_layout_has_full_bank() {
        let keypad = WasmKeypad::scientific();
        assert_eq!(keypad.button_count(), 25);
        assert_eq!(
            keypad.handle_click("btn-sin"),
            Some(InputToken::Function(SciFunction::Sin))
        );
        assert_eq!(keypad.handle_click("btn-angle"), Some(InputToken::AngleToggle));
        assert_eq!(keypad.handle_click("btn-random"), Some(InputToken::Random));
    }

    // ===== Click handling tests =====

    #[test]
    fn test_handle_click_known_button() {
        let keypad = WasmKeypad::basic();
        assert_eq!(keypad.handle_click("btn-5"), Some(InputToken::Digit(5)));
        assert_eq!(
            keypad.handle_click("btn-plus"),
            Some(InputToken::Op(BinaryOp::Add))
        );
    }

    #[test]
    fn test_handle_click_unknown_button() {
        let keypad = WasmKeypad::basic();
        assert_eq!(keypad.handle_click("btn-nonexistent"), None);
    }

    // ===== Keyboard mapping tests =====

    #[test]
    fn test_key_to_token_characters() {
        assert_eq!(key_to_token("7"), Some(InputToken::Digit(7)));
        assert_eq!(key_to_token("+"), Some(InputToken::Op(BinaryOp::Add)));
        assert_eq!(key_to_token("."), Some(InputToken::Decimal));
        assert_eq!(key_to_token("="), Some(InputToken::Equals));
        assert_eq!(key_to_token("m"), Some(InputToken::ModeToggle));
    }

    #[test]
    fn test_key_to_token_named_keys() {
        assert_eq!(key_to_token("Enter"), Some(InputToken::Equals));
        assert_eq!(key_to_token("Escape"), Some(InputToken::ClearAll));
        assert_eq!(key_to_token("Backspace"), Some(InputToken::Delete));
        assert_eq!(key_to_token("Delete"), Some(InputToken::Delete));
    }

    #[test]
    fn test_key_to_token_unmapped() {
        assert_eq!(key_to_token("x"), None);
        assert_eq!(key_to_token("ArrowUp"), None);
        assert_eq!(key_to_token(""), None);
    }

    // ===== DOM element creation tests =====

    #[test]
    fn test_create_dom_elements() {
        let keypad = WasmKeypad::basic();
        let elements = keypad.create_dom_elements();
        assert_eq!(elements.len(), keypad.button_count());
        let seven = elements.iter().find(|e| e.id == "btn-7").unwrap();
        assert_eq!(seven.tag, "button");
        assert_eq!(seven.text_content, "7");
        assert!(seven.has_class("keypad-btn"));
        assert_eq!(seven.get_attr("data-row"), Some("1"));
    }

    #[test]
    fn test_create_keypad_element() {
        let keypad = WasmKeypad::scientific();
        let container = keypad.create_keypad_element();
        assert_eq!(container.id, "calc-sci-keypad");
        assert_eq!(container.children.len(), keypad.button_count());
    }

    #[test]
    fn test_mount_keypad_registers_buttons() {
        let mut dom = MockDom::new();
        dom.mount_keypad(&WasmKeypad::basic());
        assert!(dom.get_element("calc-keypad").is_some());
        assert!(dom.get_element("btn-0").is_some());
        assert!(dom.get_element("btn-equals").is_some());
    }
}
