// payme-rs/payme/src/prelude.rs
//! Common re-exports

pub use crate::link::{LinkBuilder, encode_component, is_iban_valid};
pub use crate::{Field, ParamKey, Result, ValidationError, Version};

pub use crate::utils::{format_amount_decimal, format_amount_f64};
