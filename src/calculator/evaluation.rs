//! Operand evaluation and result formatting.
//!
//! Operands arrive as the text the user typed. Anything that does not parse
//! as a decimal number means there is nothing to evaluate yet.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::operator::Operator;

/// Display text for an undefined result.
pub const ERROR_DISPLAY: &str = "Error";

/// Results at or above this magnitude are shown in scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e6;
/// Non-zero results below this magnitude are shown in scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-3;

/// Digits kept after the decimal point, in both notations.
const DISPLAY_DECIMALS: u32 = 2;

/// One press of equals with two numeric operands.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// E.g. `5 + 3`, or `5 ? 3` with no operator.
    pub expression: String,
    /// NaN when the operation is undefined.
    pub value: f64,
    pub display: String,
}

impl Evaluation {
    /// Division by zero or a missing operator.
    pub fn is_undefined(&self) -> bool {
        self.value.is_nan()
    }
}

/// Parse an operand as typed on the keypad.
pub fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Evaluate `lhs op rhs`.
///
/// Returns `None` when either operand is empty or is not a number; a missing
/// operator still evaluates, to NaN.
pub fn evaluate(lhs: &str, operator: Option<Operator>, rhs: &str) -> Option<Evaluation> {
    if lhs.is_empty() || rhs.is_empty() {
        return None;
    }
    let a = parse_operand(lhs)?;
    let b = parse_operand(rhs)?;

    let value = operator.map_or(f64::NAN, |op| op.apply(a, b));
    let symbol = operator.map_or('?', Operator::symbol);

    Some(Evaluation {
        expression: format!("{lhs} {symbol} {rhs}"),
        display: format_result(value),
        value,
    })
}

/// Format a numeric result for the display.
///
/// Two decimals, switching to scientific notation for very large or very
/// small magnitudes. Zero stays fixed-point. Ties round away from zero on the
/// shortest decimal form of the value, so `0.125` shows as `0.13`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return ERROR_DISPLAY.to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_UPPER || (magnitude > 0.0 && magnitude < SCIENTIFIC_LOWER) {
        format_scientific(value)
    } else {
        format_fixed(value)
    }
}

fn round_half_away(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Fixed-point, e.g. `3.14`.
fn format_fixed(value: f64) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(d) => format!("{:.2}", round_half_away(d)),
        Err(_) => format!("{:.2}", value),
    }
}

/// Scientific notation with a signed, at least two-digit exponent (`4.00e+06`).
///
/// The mantissa comes from the shortest `{:e}` form, so it always fits a
/// `Decimal` whatever the exponent.
fn format_scientific(value: f64) -> String {
    let shortest = format!("{:e}", value);
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (Ok(mantissa), Ok(mut exponent)) = (Decimal::from_str(mantissa), exponent.parse::<i32>())
    else {
        return format!("{:.2e}", value);
    };

    let mut mantissa = round_half_away(mantissa);
    if mantissa.abs() >= Decimal::TEN {
        mantissa = round_half_away(mantissa / Decimal::TEN);
        exponent += 1;
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{:.2}e{sign}{:02}", mantissa, exponent.unsigned_abs())
}
