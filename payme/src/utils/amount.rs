//! Amount formatting for numeric inputs.
//!
//! Amounts travel as strings with at most two fraction digits and no
//! trailing zeros: `3.0` becomes `"3"`, `3.10` becomes `"3.1"`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::AMOUNT_FRACTION_DIGITS;

/// Format a binary float, rounding half-to-even on its exact value.
pub fn format_amount_f64(amount: f64) -> String {
    let fixed = format!("{:.*}", AMOUNT_FRACTION_DIGITS as usize, amount);
    trim_fraction(&fixed).to_string()
}

/// Format an exact decimal, rounding half-to-even.
pub fn format_amount_decimal(amount: Decimal) -> String {
    amount
        .round_dp_with_strategy(AMOUNT_FRACTION_DIGITS, RoundingStrategy::MidpointNearestEven)
        .normalize()
        .to_string()
}

/// Drop trailing fraction zeros and a dangling decimal point.
fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
