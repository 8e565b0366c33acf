// payme-rs/payme/src/link/builder.rs
//! The validating PayMe link builder

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::{DEFAULT_CURRENCY_CODE, DUE_DATE_FORMAT, SUPPORTED_VERSION};
use crate::link::identification::IdentificationParts;
use crate::link::query::LinkQuery;
use crate::link::validation::{check_currency_code, check_iban, check_len, check_version};
use crate::types::{Field, ParamKey, Version};
use crate::utils::{format_amount_decimal, format_amount_f64};
use crate::Result;

/// Validating accumulator for a PayMe link.
///
/// Mandatory fields are fixed at construction; optional ones are attached
/// with the `set_*` methods, which check their input against the protocol
/// limits before storing it and return `&mut Self` for chaining. With
/// `validate` off every input is stored verbatim.
///
/// `build` only reads the state, so it can be called any number of times.
///
/// ```
/// use payme::LinkBuilder;
///
/// let mut builder = LinkBuilder::new("SK1234567890123456789012", "25")?;
/// builder.set_message("Invoice 42")?;
/// assert_eq!(
///     builder.build(),
///     "https://payme.sk?V=1&AM=25&CC=EUR&IBAN=SK1234567890123456789012&MSG=Invoice%2042"
/// );
/// # Ok::<(), payme::ValidationError>(())
/// ```
///
/// With the `serde` feature a builder deserializes through the same
/// checks as construction and the setters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLinkBuilder"))]
pub struct LinkBuilder {
    version: Version,
    iban: String,
    amount: String,
    currency_code: String,
    validate: bool,

    payment_identification: Option<String>,
    variable_symbol: Option<String>,
    specific_symbol: Option<String>,
    constant_symbol: Option<String>,
    message: Option<String>,
    creditors_name: Option<String>,
    due_date: Option<NaiveDate>,
}

impl LinkBuilder {
    /// Version 1 EUR link with validation on.
    pub fn new(iban: impl Into<String>, amount: impl Into<String>) -> Result<Self> {
        Self::with_params(iban, amount, DEFAULT_CURRENCY_CODE, SUPPORTED_VERSION, true)
    }

    /// Checks run in order version, IBAN, amount, currency; the currency
    /// rule depends on the version.
    pub fn with_params(
        iban: impl Into<String>,
        amount: impl Into<String>,
        currency_code: impl Into<String>,
        version: i32,
        validate: bool,
    ) -> Result<Self> {
        let version = Version::new(version);
        let iban = iban.into();
        let amount = amount.into();
        let currency_code = currency_code.into();

        check_version(validate, version)?;
        check_iban(validate, &iban)?;
        check_len(validate, Field::Amount, &amount)?;
        check_currency_code(validate, version, &currency_code)?;

        Ok(Self {
            version,
            iban,
            amount,
            currency_code,
            validate,
            payment_identification: None,
            variable_symbol: None,
            specific_symbol: None,
            constant_symbol: None,
            message: None,
            creditors_name: None,
            due_date: None,
        })
    }

    /// Replace the IBAN.
    pub fn set_iban(&mut self, iban: impl Into<String>) -> Result<&mut Self> {
        let iban = iban.into();
        check_iban(self.validate, &iban)?;
        self.iban = iban;
        Ok(self)
    }

    /// Replace the currency; version 1 only takes `EUR`.
    pub fn set_currency_code(&mut self, currency_code: impl Into<String>) -> Result<&mut Self> {
        let currency_code = currency_code.into();
        check_currency_code(self.validate, self.version, &currency_code)?;
        self.currency_code = currency_code;
        Ok(self)
    }

    /// Replace the amount, at most 9 characters.
    pub fn set_amount(&mut self, amount: impl Into<String>) -> Result<&mut Self> {
        let amount = amount.into();
        check_len(self.validate, Field::Amount, &amount)?;
        self.amount = amount;
        Ok(self)
    }

    /// Rounds to two fraction digits and drops trailing zeros, so `3.0`
    /// is stored as `"3"`.
    pub fn set_amount_f64(&mut self, amount: f64) -> Result<&mut Self> {
        self.set_amount(format_amount_f64(amount))
    }

    /// Like [`set_amount_f64`](Self::set_amount_f64) for exact decimals.
    pub fn set_amount_decimal(&mut self, amount: Decimal) -> Result<&mut Self> {
        self.set_amount(format_amount_decimal(amount))
    }

    /// Direct payment identification, at most 35 characters. Takes
    /// priority over the symbols.
    pub fn set_payment_identification(
        &mut self,
        payment_identification: impl Into<String>,
    ) -> Result<&mut Self> {
        let value = payment_identification.into();
        check_len(self.validate, Field::PaymentIdentification, &value)?;
        self.payment_identification = Some(value);
        Ok(self)
    }

    /// Creditor's name, at most 70 characters.
    pub fn set_creditors_name(&mut self, creditors_name: impl Into<String>) -> Result<&mut Self> {
        let value = creditors_name.into();
        check_len(self.validate, Field::CreditorsName, &value)?;
        self.creditors_name = Some(value);
        Ok(self)
    }

    /// Specific symbol, at most 10 characters.
    pub fn set_specific_symbol(&mut self, specific_symbol: impl Into<String>) -> Result<&mut Self> {
        let value = specific_symbol.into();
        check_len(self.validate, Field::SpecificSymbol, &value)?;
        self.specific_symbol = Some(value);
        Ok(self)
    }

    /// Variable symbol, at most 10 characters.
    pub fn set_variable_symbol(&mut self, variable_symbol: impl Into<String>) -> Result<&mut Self> {
        let value = variable_symbol.into();
        check_len(self.validate, Field::VariableSymbol, &value)?;
        self.variable_symbol = Some(value);
        Ok(self)
    }

    /// Constant symbol, at most 4 characters.
    pub fn set_constant_symbol(&mut self, constant_symbol: impl Into<String>) -> Result<&mut Self> {
        let value = constant_symbol.into();
        check_len(self.validate, Field::ConstantSymbol, &value)?;
        self.constant_symbol = Some(value);
        Ok(self)
    }

    /// Payment note, at most 140 characters.
    pub fn set_message(&mut self, message: impl Into<String>) -> Result<&mut Self> {
        let value = message.into();
        check_len(self.validate, Field::Message, &value)?;
        self.message = Some(value);
        Ok(self)
    }

    /// Due date; never rejected.
    pub fn set_due_date(&mut self, due_date: NaiveDate) -> &mut Self {
        self.due_date = Some(due_date);
        self
    }

    /// Link protocol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Stored IBAN
    pub fn iban(&self) -> &str {
        &self.iban
    }

    /// Stored amount, as it goes on the wire
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Stored currency code
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Whether inputs are checked against the protocol limits
    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Direct payment identification, if set
    pub fn payment_identification(&self) -> Option<&str> {
        self.payment_identification.as_deref()
    }

    /// Variable symbol, if set
    pub fn variable_symbol(&self) -> Option<&str> {
        self.variable_symbol.as_deref()
    }

    /// Specific symbol, if set
    pub fn specific_symbol(&self) -> Option<&str> {
        self.specific_symbol.as_deref()
    }

    /// Constant symbol, if set
    pub fn constant_symbol(&self) -> Option<&str> {
        self.constant_symbol.as_deref()
    }

    /// Payment note, if set
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Creditor's name, if set
    pub fn creditors_name(&self) -> Option<&str> {
        self.creditors_name.as_deref()
    }

    /// Due date, if set
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    fn identification(&self) -> IdentificationParts<'_> {
        IdentificationParts {
            payment_identification: self.payment_identification.as_deref(),
            variable_symbol: self.variable_symbol.as_deref(),
            specific_symbol: self.specific_symbol.as_deref(),
            constant_symbol: self.constant_symbol.as_deref(),
        }
    }

    /// Serialize the current state into a link.
    ///
    /// `V`, `AM` and `CC` are always present; `IBAN`, `PI`, `MSG`, `CN` and
    /// `DD` follow in that order when set and non-empty.
    pub fn build(&self) -> String {
        let mut query = LinkQuery::new();
        query
            .push(ParamKey::Version, self.version.to_string())
            .push(ParamKey::Amount, self.amount.as_str())
            .push(ParamKey::CurrencyCode, self.currency_code.as_str())
            .push(ParamKey::Iban, self.iban.as_str())
            .push_opt(ParamKey::PaymentIdentification, self.identification().resolve())
            .push_opt(ParamKey::Message, self.message.as_deref())
            .push_opt(ParamKey::CreditorsName, self.creditors_name.as_deref())
            .push_opt(
                ParamKey::DueDate,
                self.due_date.map(|d| d.format(DUE_DATE_FORMAT).to_string()),
            );

        let link = query.to_string();
        log::trace!("built payment link {}", link);
        link
    }
}

impl fmt::Display for LinkBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// Field-for-field mirror of [`LinkBuilder`] as it arrives from a
/// deserializer, before any check has run.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLinkBuilder {
    version: Version,
    iban: String,
    amount: String,
    currency_code: String,
    validate: bool,
    #[serde(default)]
    payment_identification: Option<String>,
    #[serde(default)]
    variable_symbol: Option<String>,
    #[serde(default)]
    specific_symbol: Option<String>,
    #[serde(default)]
    constant_symbol: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    creditors_name: Option<String>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLinkBuilder> for LinkBuilder {
    type Error = crate::ValidationError;

    fn try_from(raw: RawLinkBuilder) -> Result<Self> {
        let mut builder = Self::with_params(
            raw.iban,
            raw.amount,
            raw.currency_code,
            raw.version.as_i32(),
            raw.validate,
        )?;
        if let Some(v) = raw.payment_identification {
            builder.set_payment_identification(v)?;
        }
        if let Some(v) = raw.variable_symbol {
            builder.set_variable_symbol(v)?;
        }
        if let Some(v) = raw.specific_symbol {
            builder.set_specific_symbol(v)?;
        }
        if let Some(v) = raw.constant_symbol {
            builder.set_constant_symbol(v)?;
        }
        if let Some(v) = raw.message {
            builder.set_message(v)?;
        }
        if let Some(v) = raw.creditors_name {
            builder.set_creditors_name(v)?;
        }
        if let Some(d) = raw.due_date {
            builder.set_due_date(d);
        }
        Ok(builder)
    }
}
