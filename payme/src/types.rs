// payme-rs/payme/src/types.rs
//! Small domain types shared by the builder and its errors

use derive_more::Display;

use crate::constants;

/// Link protocol version
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version(i32);

impl Version {
    /// Version 1, the only one defined
    pub const V1: Self = Self(constants::SUPPORTED_VERSION);

    /// Wrap a raw version number
    pub const fn new(version: i32) -> Self {
        Self(version)
    }

    /// Raw version number
    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// Whether validating builders accept this version
    pub fn is_supported(&self) -> bool {
        self.0 == constants::SUPPORTED_VERSION
    }

    /// Version typed into a form field. Text that is not an integer falls
    /// back to the default; integers are kept as-is so unsupported ones
    /// are rejected by validation rather than silently replaced.
    pub fn from_input(raw: &str) -> Self {
        raw.parse::<i32>().map(Self).unwrap_or_default()
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::V1
    }
}

/// Length-limited builder fields, named the way error messages show them
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Field {
    #[display(fmt = "Amount")]
    Amount,
    #[display(fmt = "Payment identification")]
    PaymentIdentification,
    #[display(fmt = "Creditor's name")]
    CreditorsName,
    #[display(fmt = "Variable symbol")]
    VariableSymbol,
    #[display(fmt = "Specific symbol")]
    SpecificSymbol,
    #[display(fmt = "Constant symbol")]
    ConstantSymbol,
    #[display(fmt = "Message")]
    Message,
}

impl Field {
    /// Maximum length in characters
    pub fn max_len(&self) -> usize {
        match self {
            Self::Amount => constants::MAX_AMOUNT_LEN,
            Self::PaymentIdentification => constants::MAX_PAYMENT_IDENTIFICATION_LEN,
            Self::CreditorsName => constants::MAX_CREDITORS_NAME_LEN,
            Self::VariableSymbol => constants::MAX_VARIABLE_SYMBOL_LEN,
            Self::SpecificSymbol => constants::MAX_SPECIFIC_SYMBOL_LEN,
            Self::ConstantSymbol => constants::MAX_CONSTANT_SYMBOL_LEN,
            Self::Message => constants::MAX_MESSAGE_LEN,
        }
    }
}

/// Query parameter of a PayMe link. Declaration order is wire order.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum ParamKey {
    #[display(fmt = "V")]
    Version,
    #[display(fmt = "AM")]
    Amount,
    #[display(fmt = "CC")]
    CurrencyCode,
    #[display(fmt = "IBAN")]
    Iban,
    #[display(fmt = "PI")]
    PaymentIdentification,
    #[display(fmt = "MSG")]
    Message,
    #[display(fmt = "CN")]
    CreditorsName,
    #[display(fmt = "DD")]
    DueDate,
}

impl ParamKey {
    /// Every key in the order a link carries them
    pub const ORDERED: [Self; 8] = [
        Self::Version,
        Self::Amount,
        Self::CurrencyCode,
        Self::Iban,
        Self::PaymentIdentification,
        Self::Message,
        Self::CreditorsName,
        Self::DueDate,
    ];

    /// Key literal as it appears in the query
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Version => constants::ATTR_VERSION,
            Self::Amount => constants::ATTR_AMOUNT,
            Self::CurrencyCode => constants::ATTR_CURRENCY_CODE,
            Self::Iban => constants::ATTR_IBAN,
            Self::PaymentIdentification => constants::ATTR_PAYMENT_IDENTIFICATION,
            Self::Message => constants::ATTR_MESSAGE,
            Self::CreditorsName => constants::ATTR_CREDITORS_NAME,
            Self::DueDate => constants::ATTR_DUE_DATE,
        }
    }

    /// Mandatory keys are emitted even when their value is empty
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Self::Version | Self::Amount | Self::CurrencyCode)
    }
}
