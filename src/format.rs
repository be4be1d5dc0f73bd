use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Turns an amount into the text shown in the preview tables.
pub trait AmountFormatter {
    fn format(&self, amount: Decimal) -> String;
}

impl<F: Fn(Decimal) -> String> AmountFormatter for F {
    fn format(&self, amount: Decimal) -> String {
        self(amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: Option<char>,
}

fn default_decimal_separator() -> char {
    ','
}

fn default_grouping_separator() -> Option<char> {
    Some('.')
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            grouping_separator: default_grouping_separator(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    currency: String,
    number_format: NumberFormat,
}

impl CurrencyFormatter {
    pub fn new(currency: impl Into<String>, number_format: NumberFormat) -> Self {
        Self {
            currency: currency.into(),
            number_format,
        }
    }
}

impl AmountFormatter for CurrencyFormatter {
    fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = format!("{:.2}", rounded.abs());
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        format!(
            "{sign}{}{}{fraction} {}",
            group_digits(integer, self.number_format.grouping_separator),
            self.number_format.decimal_separator,
            self.currency,
        )
    }
}

fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
