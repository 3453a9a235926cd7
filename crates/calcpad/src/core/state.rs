//! Calculator state and the token transition function
//!
//! [`CalcState`] is a plain value: applying a token returns a new state and
//! never mutates the old one, so every frontend (and every test) drives the
//! calculator the same way.

use serde::{Deserialize, Serialize};

use super::math::{
    apply_function, evaluate_binary, parse_operand, unit_interval, xorshift64, DEFAULT_SEED,
};
use super::token::{AngleMode, BinaryOp, Constant, InputToken, SciFunction};
use super::{format_number, ERROR_MARKER};

/// Complete calculator state
///
/// Operands are kept as display strings, not floats, because entry editing
/// (append digit, delete character, trailing decimal point) operates on the
/// text the user sees. Parsing happens only at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcState {
    /// The operand currently shown, or the error marker
    display: String,
    /// The first operand of a pending operation, empty when none
    previous_value: String,
    /// The pending binary operator, if any
    operation: Option<BinaryOp>,
    /// True when the next digit starts a fresh operand
    waiting_for_new_value: bool,
    /// True while the display shows the error marker
    has_error: bool,
    /// True when the scientific key bank is shown
    scientific_mode: bool,
    /// Angle interpretation for trig functions
    angle_mode: AngleMode,
    /// The single memory register
    memory: f64,
    /// xorshift state backing the random token
    rng: u64,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    /// Creates the power-on state: display "0", nothing pending, memory zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates the power-on state with an explicit random seed.
    ///
    /// Frontends seed from wall-clock time; tests pass a fixed seed so the
    /// random token is reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            display: "0".to_string(),
            previous_value: String::new(),
            operation: None,
            waiting_for_new_value: false,
            has_error: false,
            scientific_mode: false,
            angle_mode: AngleMode::default(),
            memory: 0.0,
            rng: seed,
        }
    }

    // ===== Accessors =====

    /// The current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The pending expression as "operand symbol", if an operation is pending
    #[must_use]
    pub fn pending_display(&self) -> Option<String> {
        match (&self.operation, self.previous_value.is_empty()) {
            (Some(op), false) => Some(format!("{} {}", self.previous_value, op.symbol())),
            _ => None,
        }
    }

    /// True while the display shows the error marker
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// True when the scientific key bank is shown
    #[must_use]
    pub fn scientific_mode(&self) -> bool {
        self.scientific_mode
    }

    /// The current angle mode
    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// The current memory register value
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    // ===== Transition function =====

    /// Applies one input token, producing the successor state.
    #[must_use]
    pub fn apply(&self, token: InputToken) -> Self {
        match token {
            InputToken::Digit(d) => self.with_digit(d),
            InputToken::Decimal => self.with_decimal(),
            InputToken::Op(op) => self.with_operator(op),
            InputToken::Equals => self.with_equals(),
            InputToken::ClearAll => self.with_clear_all(),
            InputToken::Delete => self.with_delete(),
            InputToken::Function(f) => self.with_function(f),
            InputToken::Constant(c) => self.with_constant(c),
            InputToken::Random => self.with_random(),
            InputToken::MemoryStore => self.with_memory_store(),
            InputToken::MemoryRecall => self.with_value(self.memory),
            InputToken::MemoryClear => self.with_memory_clear(),
            InputToken::ModeToggle => self.with_mode_toggled(),
            InputToken::AngleToggle => self.with_angle_toggled(),
        }
    }

    fn with_digit(&self, d: u8) -> Self {
        let mut next = self.clone();
        let digit = char::from(b'0' + d % 10);
        if next.has_error || next.waiting_for_new_value {
            // A digit after an error or a result starts a fresh entry
            next.display = digit.to_string();
            next.has_error = false;
            next.waiting_for_new_value = false;
        } else if next.display == "0" {
            next.display = digit.to_string();
        } else {
            next.display.push(digit);
        }
        next
    }

    fn with_decimal(&self) -> Self {
        if self.has_error {
            return self.clone();
        }
        let mut next = self.clone();
        if next.waiting_for_new_value {
            next.display = "0.".to_string();
            next.waiting_for_new_value = false;
        } else if !next.display.contains('.') {
            next.display.push('.');
        }
        next
    }

    fn with_operator(&self, op: BinaryOp) -> Self {
        if self.has_error {
            return self.clone();
        }
        let mut next = self.clone();
        match next.operation {
            // A complete pending expression is evaluated before the new
            // operator is captured, so chains associate left to right.
            Some(pending) if !next.previous_value.is_empty() && !next.waiting_for_new_value => {
                let result = evaluate_binary(&next.previous_value, &next.display, pending);
                next.has_error = result == ERROR_MARKER;
                next.display.clone_from(&result);
                next.previous_value = result;
            }
            _ => next.previous_value.clone_from(&next.display),
        }
        next.operation = Some(op);
        next.waiting_for_new_value = true;
        next
    }

    fn with_equals(&self) -> Self {
        let Some(op) = self.operation else {
            return self.clone();
        };
        if self.has_error || self.previous_value.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        let result = evaluate_binary(&next.previous_value, &next.display, op);
        next.has_error = result == ERROR_MARKER;
        next.display = result;
        next.previous_value.clear();
        next.operation = None;
        next.waiting_for_new_value = true;
        next
    }

    fn with_clear_all(&self) -> Self {
        // Memory, layout mode, angle mode, and the rng state all survive AC
        let mut next = self.clone();
        next.display = "0".to_string();
        next.previous_value.clear();
        next.operation = None;
        next.waiting_for_new_value = false;
        next.has_error = false;
        next
    }

    fn with_delete(&self) -> Self {
        let mut next = self.clone();
        if next.has_error || next.waiting_for_new_value {
            next.display = "0".to_string();
            next.has_error = false;
            next.waiting_for_new_value = false;
        } else {
            next.display.pop();
            if next.display.is_empty() {
                next.display = "0".to_string();
            }
        }
        next
    }

    fn with_function(&self, f: SciFunction) -> Self {
        if self.has_error {
            return self.clone();
        }
        let mut next = self.clone();
        match parse_operand(&next.display).and_then(|x| apply_function(f, x, next.angle_mode)) {
            Ok(value) => next.display = format_number(value),
            Err(_) => {
                next.display = ERROR_MARKER.to_string();
                next.has_error = true;
            }
        }
        // The pending operation is untouched, so "2 + 9 sqrt =" yields 5
        next.waiting_for_new_value = true;
        next
    }

    fn with_constant(&self, c: Constant) -> Self {
        self.with_value(c.value())
    }

    fn with_random(&self) -> Self {
        let bits = xorshift64(self.rng);
        let mut next = self.with_value(unit_interval(bits));
        next.rng = bits;
        next
    }

    /// Replaces the display with a computed value, used by constants,
    /// memory recall, and the random token. Clears an error state.
    fn with_value(&self, value: f64) -> Self {
        let mut next = self.clone();
        next.display = format_number(value);
        next.has_error = false;
        next.waiting_for_new_value = true;
        next
    }

    fn with_memory_store(&self) -> Self {
        let mut next = self.clone();
        next.memory = next.display.parse().unwrap_or(0.0);
        next
    }

    fn with_memory_clear(&self) -> Self {
        let mut next = self.clone();
        next.memory = 0.0;
        next
    }

    fn with_mode_toggled(&self) -> Self {
        let mut next = self.clone();
        next.scientific_mode = !next.scientific_mode;
        next
    }

    fn with_angle_toggled(&self) -> Self {
        let mut next = self.clone();
        next.angle_mode = next.angle_mode.toggled();
        next
    }
}
