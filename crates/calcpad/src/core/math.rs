//! Numeric evaluation behind the state machine
//!
//! Binary evaluation, the scientific function table, the factorial guard,
//! and the deterministic PRNG backing the random token all live here so the
//! transition code in `state.rs` stays a pure dispatch table.

use super::token::{AngleMode, BinaryOp, SciFunction};
use super::{format_number, CalcError, CalcResult, ERROR_MARKER};

/// Parses an operand string, mapping failure to [`CalcError::UnparsableOperand`]
pub(crate) fn parse_operand(text: &str) -> CalcResult<f64> {
    text.parse().map_err(|_| CalcError::UnparsableOperand {
        text: text.to_string(),
    })
}

/// Applies a binary operator, rejecting division by exactly zero
pub(crate) fn try_binary(a: f64, b: f64, op: BinaryOp) -> CalcResult<f64> {
    if op == BinaryOp::Divide && b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(op.apply(a, b))
}

/// Evaluates a pending binary expression over two operand strings.
///
/// An unparsable operand falls back to the current operand unchanged (the
/// entry simply survives); division by zero yields the error marker.
#[must_use]
pub fn evaluate_binary(previous: &str, current: &str, op: BinaryOp) -> String {
    let operands = parse_operand(previous).and_then(|a| parse_operand(current).map(|b| (a, b)));
    match operands.and_then(|(a, b)| try_binary(a, b, op)) {
        Ok(value) => format_number(value),
        Err(CalcError::UnparsableOperand { .. }) => current.to_string(),
        Err(_) => ERROR_MARKER.to_string(),
    }
}

/// Applies a unary scientific function to a parsed operand.
///
/// Trig converts the input through the angle mode; inverse trig converts
/// the output. A NaN or infinite result is rejected so the caller can enter
/// the error state.
pub fn apply_function(f: SciFunction, input: f64, angle: AngleMode) -> CalcResult<f64> {
    let result = match f {
        SciFunction::Sin => angle.input_to_radians(input).sin(),
        SciFunction::Cos => angle.input_to_radians(input).cos(),
        SciFunction::Tan => angle.input_to_radians(input).tan(),
        SciFunction::Asin => angle.output_from_radians(input.asin()),
        SciFunction::Acos => angle.output_from_radians(input.acos()),
        SciFunction::Atan => angle.output_from_radians(input.atan()),
        SciFunction::Sinh => input.sinh(),
        SciFunction::Cosh => input.cosh(),
        SciFunction::Tanh => input.tanh(),
        SciFunction::Log10 => input.log10(),
        SciFunction::Ln => input.ln(),
        SciFunction::Exp => input.exp(),
        SciFunction::Sqrt => input.sqrt(),
        SciFunction::Cbrt => input.cbrt(),
        SciFunction::Round => input.round(),
        SciFunction::Floor => input.floor(),
        SciFunction::Ceil => input.ceil(),
        SciFunction::Factorial => factorial(input),
    };

    if result.is_nan() {
        Err(CalcError::InvalidResult { what: "NaN".into() })
    } else if result.is_infinite() {
        Err(CalcError::InvalidResult {
            what: "infinite".into(),
        })
    } else {
        Ok(result)
    }
}

/// Factorial over f64, defined only for non-negative integers.
///
/// Inputs above 170 overflow f64 and return positive infinity; negative or
/// non-integer inputs return NaN.
#[must_use]
pub fn factorial(x: f64) -> f64 {
    if x < 0.0 || x.fract() != 0.0 {
        return f64::NAN;
    }
    if x > 170.0 {
        return f64::INFINITY;
    }
    let mut acc = 1.0;
    let mut k = 2.0;
    while k <= x {
        acc *= k;
        k += 1.0;
    }
    acc
}

/// Non-zero fallback seed for the xorshift state
pub(crate) const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// One xorshift64 step; a zero state is replaced by the default seed
#[must_use]
pub(crate) const fn xorshift64(state: u64) -> u64 {
    let mut x = if state == 0 { DEFAULT_SEED } else { state };
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    x
}

/// Folds 64 random bits into a uniform value in [0, 1)
#[must_use]
pub(crate) fn unit_interval(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}
