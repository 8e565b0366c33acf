//! Small helpers used by the link builder.

pub mod amount;

pub use amount::*;
