// payme-rs/payme/src/link/validation.rs

//! Field checks shared by construction and the setters.
//!
//! Every check is a no-op when `validate` is false.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{IBAN_PATTERN, VERSION_1_CURRENCY};
use crate::types::{Field, Version};
use crate::{Result, ValidationError};

static IBAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IBAN_PATTERN).expect("IBAN pattern is a valid regex"));

/// Whether `iban` has the shape of an IBAN: two uppercase letters, two
/// digits, then 1 to 30 alphanumerics. Check digits are not verified.
pub fn is_iban_valid(iban: &str) -> bool {
    IBAN_RE.is_match(iban)
}

pub(crate) fn check_version(validate: bool, version: Version) -> Result<()> {
    if validate && !version.is_supported() {
        log::debug!("rejected link version {}", version);
        return Err(ValidationError::UnsupportedVersion {
            version: version.as_i32(),
        });
    }
    Ok(())
}

pub(crate) fn check_iban(validate: bool, iban: &str) -> Result<()> {
    if validate && !is_iban_valid(iban) {
        log::debug!("rejected IBAN {:?}", iban);
        return Err(ValidationError::InvalidIban);
    }
    Ok(())
}

/// Version 1 links only carry EUR; later versions are unconstrained.
pub(crate) fn check_currency_code(validate: bool, version: Version, currency: &str) -> Result<()> {
    if validate && version == Version::V1 && currency != VERSION_1_CURRENCY {
        log::debug!("rejected currency {:?} for version {}", currency, version);
        return Err(ValidationError::UnsupportedCurrency {
            version: version.as_i32(),
            currency: currency.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn check_len(validate: bool, field: Field, value: &str) -> Result<()> {
    if !validate {
        return Ok(());
    }
    let max = field.max_len();
    let actual = value.chars().count();
    if actual > max {
        log::debug!("rejected {}: {} chars, limit {}", field, actual, max);
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}
