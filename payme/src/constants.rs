// payme-rs/payme/src/constants.rs
//! Protocol literals for PayMe links

/// Scheme of every produced link
pub const PAYMENT_LINK_SCHEME: &str = "https";

/// Host of every produced link
pub const PAYMENT_LINK_DOMAIN: &str = "payme.sk";

/// The only protocol version currently defined
pub const SUPPORTED_VERSION: i32 = 1;

/// Currency required by version 1 links
pub const VERSION_1_CURRENCY: &str = "EUR";

/// Default currency for `LinkBuilder::new`
pub const DEFAULT_CURRENCY_CODE: &str = VERSION_1_CURRENCY;

/// Protocol version key
pub const ATTR_VERSION: &str = "V";
/// IBAN key
pub const ATTR_IBAN: &str = "IBAN";
/// Amount key
pub const ATTR_AMOUNT: &str = "AM";
/// Currency code key
pub const ATTR_CURRENCY_CODE: &str = "CC";
/// Due date key
pub const ATTR_DUE_DATE: &str = "DD";
/// Payment identification key
pub const ATTR_PAYMENT_IDENTIFICATION: &str = "PI";
/// Message key
pub const ATTR_MESSAGE: &str = "MSG";
/// Creditor's name key
pub const ATTR_CREDITORS_NAME: &str = "CN";

/// `yyyyMMdd` in chrono's strftime syntax
pub const DUE_DATE_FORMAT: &str = "%Y%m%d";

/// IBAN: country code, check digits, then 1..=30 BBAN characters
pub const IBAN_PATTERN: &str = "^[A-Z]{2}[0-9]{2}[A-Za-z0-9]{1,30}$";

/// Max amount length, in characters
pub const MAX_AMOUNT_LEN: usize = 9;
/// Max payment identification length
pub const MAX_PAYMENT_IDENTIFICATION_LEN: usize = 35;
/// Max creditor's name length
pub const MAX_CREDITORS_NAME_LEN: usize = 70;
/// Max variable symbol length
pub const MAX_VARIABLE_SYMBOL_LEN: usize = 10;
/// Max specific symbol length
pub const MAX_SPECIFIC_SYMBOL_LEN: usize = 10;
/// Max constant symbol length
pub const MAX_CONSTANT_SYMBOL_LEN: usize = 4;
/// Max message length
pub const MAX_MESSAGE_LEN: usize = 140;

/// Fraction digits kept when formatting numeric amounts
pub const AMOUNT_FRACTION_DIGITS: u32 = 2;
