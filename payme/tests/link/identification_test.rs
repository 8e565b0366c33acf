#[path = "../common/mod.rs"]
mod common;

#[test]
fn no_identification_fields_means_no_pi() {
    let link = common::builder().build();
    assert_eq!(common::query_value(&link, "PI"), None);
}

#[test]
fn direct_identification_is_emitted() {
    let mut b = common::builder();
    b.set_payment_identification("INV-2024-0042").unwrap();
    assert_eq!(
        common::query_value(&b.build(), "PI"),
        Some("INV-2024-0042")
    );
}

#[test]
fn direct_identification_wins_over_symbols() {
    let mut b = common::builder();
    b.set_variable_symbol("123").unwrap();
    b.set_specific_symbol("456").unwrap();
    b.set_constant_symbol("0308").unwrap();
    b.set_payment_identification("DIRECT").unwrap();
    assert_eq!(common::query_value(&b.build(), "PI"), Some("DIRECT"));
}

#[test]
fn symbols_compose_when_no_direct_identification() {
    let mut b = common::builder();
    b.set_variable_symbol("123").unwrap();
    b.set_specific_symbol("456").unwrap();
    b.set_constant_symbol("0308").unwrap();
    assert_eq!(
        common::query_value(&b.build(), "PI"),
        Some("%2FVS123%2FSS456%2FKS0308")
    );
}

#[test]
fn unset_symbols_render_empty() {
    let mut b = common::builder();
    b.set_specific_symbol("99").unwrap();
    assert_eq!(
        common::query_value(&b.build(), "PI"),
        Some("%2FVS%2FSS99%2FKS")
    );
}

#[test]
fn empty_direct_identification_falls_back_to_symbols() {
    let mut b = common::builder();
    b.set_payment_identification("").unwrap();
    b.set_variable_symbol("7").unwrap();
    assert_eq!(
        common::query_value(&b.build(), "PI"),
        Some("%2FVS7%2FSS%2FKS")
    );
}

#[test]
fn empty_symbols_only_mean_no_pi() {
    let mut b = common::builder();
    b.set_variable_symbol("").unwrap();
    b.set_constant_symbol("").unwrap();
    assert!(!common::query_keys(&b.build()).contains(&"PI".to_string()));
}
