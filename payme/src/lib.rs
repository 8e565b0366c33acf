// payme-rs/payme/src/lib.rs

//! payme
//!
//! Validating builder for PayMe payment-request links.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod link;
pub mod prelude;
pub mod test_support;
pub mod types;
pub mod utils;

pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
