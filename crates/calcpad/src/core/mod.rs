//! Core calculator state machine
//!
//! The whole calculator is a pure transition function: every input token
//! applied to a [`CalcState`] yields a new state. Frontends translate host
//! events into tokens and mirror the resulting display back out; nothing
//! else carries behavior.

pub mod math;
pub mod state;
pub mod token;

pub use state::CalcState;
pub use token::{AngleMode, BinaryOp, Constant, InputToken, SciFunction};

use thiserror::Error;

/// Result type for calculator evaluation
pub type CalcResult<T> = Result<T, CalcError>;

/// The literal shown in the display while the machine is in the error state
pub const ERROR_MARKER: &str = "Error";

/// Calculator error kinds
///
/// All of these surface identically to the user: the display shows
/// [`ERROR_MARKER`] and the machine waits for a fresh entry. They are kept
/// distinct internally so evaluation can choose between falling back
/// (unparsable operand) and erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a divisor of exactly zero
    #[error("division by zero")]
    DivisionByZero,
    /// A scientific function produced NaN or an infinite value
    #[error("invalid numeric result: {what}")]
    InvalidResult {
        /// What the result was ("NaN" or "infinite")
        what: String,
    },
    /// An operand string failed to parse as a number
    #[error("unparsable operand: {text}")]
    UnparsableOperand {
        /// The text that failed to parse
        text: String,
    },
}

/// Renders a computed value for the display.
///
/// Policy: Rust's `f64` `Display`, the shortest decimal string that parses
/// back to the same value. Unlike the usual browser conversion it never
/// switches to exponent notation for very large or very small magnitudes;
/// that is the one known formatting divergence.
#[must_use]
pub fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_display_invalid_result() {
        let err = CalcError::InvalidResult { what: "NaN".into() };
        assert_eq!(err.to_string(), "invalid numeric result: NaN");
    }

    #[test]
    fn test_error_display_unparsable_operand() {
        let err = CalcError::UnparsableOperand {
            text: "Error".into(),
        };
        assert_eq!(err.to_string(), "unparsable operand: Error");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("zero"));
    }

    // ===== Formatting policy tests =====

    #[test]
    fn test_format_integer_has_no_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_shortest_round_trip() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_large_magnitude_stays_positional() {
        // No exponent-notation switch, unlike browser toString
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_format_round_trips_through_parse() {
        for v in [0.1, 1.0 / 3.0, 123_456.789, -0.000_025] {
            let parsed: f64 = format_number(v).parse().unwrap();
            assert_eq!(parsed, v);
        }
    }
}
