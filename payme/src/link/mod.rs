//! PayMe link construction.

pub mod builder;
pub(crate) mod identification;
pub mod query;
pub mod validation;

pub use builder::LinkBuilder;
pub use query::encode_component;
pub use validation::is_iban_valid;
