#[path = "../common/mod.rs"]
mod common;

use payme::LinkBuilder;

#[test]
fn oversized_message_is_emitted_verbatim() {
    let mut b = common::unvalidated_builder();
    let message = common::repeat_char('a', 200);
    b.set_message(message.clone()).unwrap();
    assert_eq!(common::query_value(&b.build(), "MSG"), Some(message.as_str()));
}

#[test]
fn oversized_message_with_spaces_is_encoded() {
    let mut b = common::unvalidated_builder();
    let message = "ab ".repeat(70);
    b.set_message(message).unwrap();
    let encoded = "ab%20".repeat(70);
    assert_eq!(common::query_value(&b.build(), "MSG"), Some(encoded.as_str()));
}

#[test]
fn empty_iban_is_omitted() {
    let b = LinkBuilder::with_params("", "10", "EUR", 1, false).unwrap();
    assert_eq!(b.build(), "https://payme.sk?V=1&AM=10&CC=EUR");
}

#[test]
fn malformed_mandatory_fields_pass_through() {
    let b = LinkBuilder::with_params("not an iban", "1 000 000,00", "czk", 9, false).unwrap();
    assert_eq!(
        b.build(),
        "https://payme.sk?V=9&AM=1%20000%20000%2C00&CC=czk&IBAN=not%20an%20iban"
    );
}

#[test]
fn empty_amount_is_still_emitted() {
    let b = LinkBuilder::with_params(common::SAMPLE_IBAN, "", "EUR", 1, false).unwrap();
    assert_eq!(
        b.build(),
        "https://payme.sk?V=1&AM=&CC=EUR&IBAN=SK1234567890123456789012"
    );
}

#[test]
fn unvalidated_currency_change_on_version_1() {
    let mut b = common::unvalidated_builder();
    b.set_currency_code("CZK").unwrap();
    assert_eq!(common::query_value(&b.build(), "CC"), Some("CZK"));
}
