#[path = "../common/mod.rs"]
mod common;

use payme::{Field, LinkBuilder, ValidationError};
use proptest::prelude::*;

type Setter = fn(&mut LinkBuilder, String) -> payme::Result<()>;

macro_rules! setter {
    ($method:ident) => {{
        fn set(b: &mut LinkBuilder, v: String) -> payme::Result<()> {
            b.$method(v).map(drop)
        }
        set as Setter
    }};
}

fn setters() -> Vec<(Field, Setter)> {
    vec![
        (Field::Amount, setter!(set_amount)),
        (Field::PaymentIdentification, setter!(set_payment_identification)),
        (Field::CreditorsName, setter!(set_creditors_name)),
        (Field::VariableSymbol, setter!(set_variable_symbol)),
        (Field::SpecificSymbol, setter!(set_specific_symbol)),
        (Field::ConstantSymbol, setter!(set_constant_symbol)),
        (Field::Message, setter!(set_message)),
    ]
}

#[test]
fn exactly_at_limit_is_accepted() {
    for (field, set) in setters() {
        let mut b = common::builder();
        let value = common::repeat_char('7', field.max_len());
        assert!(set(&mut b, value).is_ok(), "{field} at limit");
    }
}

#[test]
fn one_over_limit_is_rejected() {
    for (field, set) in setters() {
        let mut b = common::builder();
        let max = field.max_len();
        let err = set(&mut b, common::repeat_char('7', max + 1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field,
                max,
                actual: max + 1,
            }
        );
    }
}

#[test]
fn one_over_limit_is_accepted_without_validation() {
    for (field, set) in setters() {
        let mut b = common::unvalidated_builder();
        assert!(set(&mut b, common::repeat_char('7', field.max_len() + 1)).is_ok());
    }
}

#[test]
fn message_error_text() {
    let mut b = common::builder();
    let err = b.set_message(common::repeat_char('m', 141)).unwrap_err();
    assert_eq!(err.to_string(), "Message can be maximum 140 characters long");
    assert_eq!(b.message(), None);
}

#[test]
fn limits_count_characters_not_bytes() {
    let mut b = common::builder();
    // 140 two-byte characters
    assert!(b.set_message(common::repeat_char('ž', 140)).is_ok());
    assert!(b.set_message(common::repeat_char('ž', 141)).is_err());
}

#[test]
fn numeric_amounts() {
    let mut b = common::builder();
    b.set_amount_f64(3.0).unwrap();
    assert_eq!(b.amount(), "3");
    b.set_amount_f64(3.1).unwrap();
    assert_eq!(b.amount(), "3.1");
    b.set_amount_f64(3.14159).unwrap();
    assert_eq!(b.amount(), "3.14");
    b.set_amount_decimal(rust_decimal::Decimal::new(4200, 2)).unwrap();
    assert_eq!(b.amount(), "42");
}

proptest! {
    #[test]
    fn generated_ibans_are_accepted(iban in "[A-Z]{2}[0-9]{2}[A-Za-z0-9]{1,30}") {
        let mut b = common::builder();
        prop_assert!(b.set_iban(iban.clone()).is_ok());
        prop_assert_eq!(b.iban(), iban.as_str());
    }

    #[test]
    fn lowercase_country_codes_are_rejected(iban in "[a-z]{2}[0-9]{2}[A-Za-z0-9]{1,30}") {
        let mut b = common::builder();
        prop_assert_eq!(b.set_iban(iban).unwrap_err(), ValidationError::InvalidIban);
    }

    #[test]
    fn any_iban_is_accepted_without_validation(iban in ".*") {
        let mut b = common::unvalidated_builder();
        prop_assert!(b.set_iban(iban).is_ok());
    }

    #[test]
    fn message_length_decides_acceptance(message in "[ -~]{0,200}") {
        let mut b = common::builder();
        let result = b.set_message(message.clone());
        prop_assert_eq!(result.is_ok(), message.len() <= 140);
    }
}
