//! Fixtures shared by unit tests, integration tests and benches.
#![allow(dead_code)]

use chrono::NaiveDate;

use crate::{LinkBuilder, Result};

/// A well-formed Slovak IBAN
#[doc(hidden)]
pub const SAMPLE_IBAN: &str = "SK1234567890123456789012";

#[doc(hidden)]
pub const SAMPLE_AMOUNT: &str = "25";

#[doc(hidden)]
pub fn sample_due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid calendar date")
}

/// Validating builder over the sample IBAN and amount.
#[doc(hidden)]
pub fn sample_builder() -> Result<LinkBuilder> {
    LinkBuilder::new(SAMPLE_IBAN, SAMPLE_AMOUNT)
}

/// Builder with every optional field set, direct identification included.
#[doc(hidden)]
pub fn fully_populated_builder() -> Result<LinkBuilder> {
    let mut builder = sample_builder()?;
    builder
        .set_payment_identification("INV-2024-0042")?
        .set_variable_symbol("2024042")?
        .set_specific_symbol("77")?
        .set_constant_symbol("0308")?
        .set_message("Invoice 42")?
        .set_creditors_name("Jan Novak")?
        .set_due_date(sample_due_date());
    Ok(builder)
}

/// A string of `len` copies of `c`.
#[doc(hidden)]
pub fn repeat_char(c: char, len: usize) -> String {
    std::iter::repeat_n(c, len).collect()
}
