// payme-rs/payme/src/link/query.rs
//! Link assembly: parameter order and query encoding

use std::borrow::Cow;
use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::constants::{PAYMENT_LINK_DOMAIN, PAYMENT_LINK_SCHEME};
use crate::types::ParamKey;

/// Characters left as-is in query components: alphanumerics plus
/// `-_.!~*'()`. Space encodes as `%20` and `/` as `%2F`.
pub const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one query key or value.
pub fn encode_component(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, QUERY_COMPONENT).into()
}

/// Ordered query parameters of a link.
///
/// Parameters render in the order they were pushed. Empty values are
/// dropped unless the key is mandatory.
#[derive(Debug, Default, Clone)]
pub(crate) struct LinkQuery<'a> {
    params: Vec<(ParamKey, Cow<'a, str>)>,
}

impl<'a> LinkQuery<'a> {
    pub fn new() -> Self {
        Self {
            params: Vec::with_capacity(ParamKey::ORDERED.len()),
        }
    }

    pub fn push(&mut self, key: ParamKey, value: impl Into<Cow<'a, str>>) -> &mut Self {
        let value = value.into();
        if value.is_empty() && !key.is_mandatory() {
            return self;
        }
        self.params.push((key, value));
        self
    }

    pub fn push_opt<V>(&mut self, key: ParamKey, value: Option<V>) -> &mut Self
    where
        V: Into<Cow<'a, str>>,
    {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = ParamKey> + '_ {
        self.params.iter().map(|(k, _)| *k)
    }
}

impl fmt::Display for LinkQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", PAYMENT_LINK_SCHEME, PAYMENT_LINK_DOMAIN)?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{}{}={}",
                sep,
                encode_component(key.as_str()),
                encode_component(value)
            )?;
        }
        Ok(())
    }
}
