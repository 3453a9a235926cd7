//! The input token alphabet
//!
//! Every control on the keypad (and every mapped keyboard key) resolves to
//! exactly one [`InputToken`]. The state machine consumes tokens and nothing
//! else, so frontends stay thin translation layers.

use serde::{Deserialize, Serialize};

/// A pending binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl BinaryOp {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operator to two operands
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

/// Unary scientific functions (scientific variant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SciFunction {
    /// Sine (respects the angle mode)
    Sin,
    /// Cosine (respects the angle mode)
    Cos,
    /// Tangent (respects the angle mode)
    Tan,
    /// Inverse sine (result converted through the angle mode)
    Asin,
    /// Inverse cosine (result converted through the angle mode)
    Acos,
    /// Inverse tangent (result converted through the angle mode)
    Atan,
    /// Hyperbolic sine
    Sinh,
    /// Hyperbolic cosine
    Cosh,
    /// Hyperbolic tangent
    Tanh,
    /// Base-10 logarithm
    Log10,
    /// Natural logarithm
    Ln,
    /// Natural exponential
    Exp,
    /// Square root
    Sqrt,
    /// Cube root
    Cbrt,
    /// Round to nearest integer
    Round,
    /// Round down
    Floor,
    /// Round up
    Ceil,
    /// Factorial (non-negative integers only)
    Factorial,
}

impl SciFunction {
    /// Returns the keypad label for this function
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Sqrt => "√x",
            Self::Cbrt => "∛x",
            Self::Round => "rnd",
            Self::Floor => "⌊x⌋",
            Self::Ceil => "⌈x⌉",
            Self::Factorial => "x!",
        }
    }
}

/// Zero-argument constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constant {
    /// The circle constant pi
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    /// Returns the numeric value of the constant
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    /// Returns the keypad label for this constant
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pi => "π",
            Self::E => "e",
        }
    }
}

/// Angle interpretation for trigonometric functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleMode {
    /// Inputs and outputs in degrees
    #[default]
    Degrees,
    /// Inputs and outputs in radians
    Radians,
}

impl AngleMode {
    /// Returns the other angle mode
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    /// Converts a trig input from this mode to radians
    #[must_use]
    pub fn input_to_radians(&self, value: f64) -> f64 {
        match self {
            Self::Degrees => value.to_radians(),
            Self::Radians => value,
        }
    }

    /// Converts an inverse-trig output in radians to this mode
    #[must_use]
    pub fn output_from_radians(&self, value: f64) -> f64 {
        match self {
            Self::Degrees => value.to_degrees(),
            Self::Radians => value,
        }
    }

    /// Returns the status label ("DEG" or "RAD")
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Degrees => "DEG",
            Self::Radians => "RAD",
        }
    }
}

/// One element of the calculator's input alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputToken {
    /// A digit key (0-9)
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// A binary operator key
    Op(BinaryOp),
    /// The equals key
    Equals,
    /// Clear-all (AC)
    ClearAll,
    /// Delete the last entered character (DEL / Backspace)
    Delete,
    /// A unary scientific function key
    Function(SciFunction),
    /// A constant key (pi, e)
    Constant(Constant),
    /// The random-number key, yields a value in [0, 1)
    Random,
    /// Store the display value in memory
    MemoryStore,
    /// Recall the memory value into the display
    MemoryRecall,
    /// Reset memory to zero
    MemoryClear,
    /// Toggle between basic and scientific layouts
    ModeToggle,
    /// Toggle between degrees and radians
    AngleToggle,
}

impl InputToken {
    /// Maps a plain character to a token, shared by the keyboard handlers.
    ///
    /// Covers digits, `.`, the four operators, `=`, and `m` (mode toggle).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '.' => Some(Self::Decimal),
            '+' => Some(Self::Op(BinaryOp::Add)),
            '-' => Some(Self::Op(BinaryOp::Subtract)),
            '*' => Some(Self::Op(BinaryOp::Multiply)),
            '/' => Some(Self::Op(BinaryOp::Divide)),
            '=' => Some(Self::Equals),
            'm' => Some(Self::ModeToggle),
            _ => None,
        }
    }
}
