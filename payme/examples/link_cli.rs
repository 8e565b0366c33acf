//! Build a PayMe link from raw text, the way a form-based caller would.
//!
//! Usage:
//!   cargo run -p payme --example link_cli -- <IBAN> <AMOUNT> [CURRENCY] [VERSION] \
//!       [--no-validate] [--message TEXT] [--pi TEXT] [--due YYYY-MM-DD]
//!
//! Set `RUST_LOG=payme=debug` to see why an input was rejected.

use anyhow::{Context, bail};
use chrono::NaiveDate;
use payme::{LinkBuilder, Version};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut positional = Vec::new();
    let mut validate = true;
    let mut message = None;
    let mut pi = None;
    let mut due = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-validate" => validate = false,
            "--message" => message = Some(args.next().context("--message needs a value")?),
            "--pi" => pi = Some(args.next().context("--pi needs a value")?),
            "--due" => {
                let raw = args.next().context("--due needs a value")?;
                due = Some(
                    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                        .with_context(|| format!("bad due date {raw:?}"))?,
                );
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() < 2 {
        bail!("usage: link_cli <IBAN> <AMOUNT> [CURRENCY] [VERSION] [options]");
    }
    let currency = positional.get(2).map(String::as_str).unwrap_or("EUR");
    let version = positional
        .get(3)
        .map(|v| Version::from_input(v))
        .unwrap_or_default();

    match build(&positional[0], &positional[1], currency, version, validate, message, pi, due) {
        Ok(link) => println!("{link}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn build(
    iban: &str,
    amount: &str,
    currency: &str,
    version: Version,
    validate: bool,
    message: Option<String>,
    pi: Option<String>,
    due: Option<NaiveDate>,
) -> payme::Result<String> {
    let mut builder = LinkBuilder::with_params(iban, amount, currency, version.as_i32(), validate)?;
    if let Some(message) = message {
        builder.set_message(message)?;
    }
    if let Some(pi) = pi {
        builder.set_payment_identification(pi)?;
    }
    if let Some(due) = due {
        builder.set_due_date(due);
    }
    Ok(builder.build())
}
