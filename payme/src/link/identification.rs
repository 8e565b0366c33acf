// payme-rs/payme/src/link/identification.rs

//! Resolution of the single `PI` value a link carries.

use std::borrow::Cow;

/// Identification inputs as stored on the builder.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct IdentificationParts<'a> {
    pub payment_identification: Option<&'a str>,
    pub variable_symbol: Option<&'a str>,
    pub specific_symbol: Option<&'a str>,
    pub constant_symbol: Option<&'a str>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl<'a> IdentificationParts<'a> {
    /// A direct identification wins; otherwise any symbol produces the
    /// composed `/VS../SS../KS..` form with unset symbols left empty.
    pub fn resolve(&self) -> Option<Cow<'a, str>> {
        if let Some(pi) = non_empty(self.payment_identification) {
            return Some(Cow::Borrowed(pi));
        }

        let any_symbol = [self.variable_symbol, self.specific_symbol, self.constant_symbol]
            .into_iter()
            .any(|s| non_empty(s).is_some());
        if !any_symbol {
            return None;
        }

        Some(Cow::Owned(format!(
            "/VS{}/SS{}/KS{}",
            self.variable_symbol.unwrap_or_default(),
            self.specific_symbol.unwrap_or_default(),
            self.constant_symbol.unwrap_or_default(),
        )))
    }
}
