use rust_decimal::Decimal;

use crate::format::NumberFormat;

/// Parses amounts like `-1.234,56` according to the separators of a profile.
pub fn parse_amount(content: &str, format: &NumberFormat) -> Result<Decimal, &'static str> {
    let mut content = content.trim();
    let negative = if let Some(rest) = content.strip_prefix('-') {
        content = rest;
        true
    } else {
        if let Some(rest) = content.strip_prefix('+') {
            content = rest;
        }
        false
    };
    if content.is_empty() {
        return Err("Empty amount");
    }
    if content.starts_with(|c: char| !c.is_ascii_digit() && c != format.decimal_separator) {
        return Err("Expected amount to start with a digit");
    }
    let mut normalized = String::with_capacity(content.len());
    for c in content.chars() {
        if Some(c) == format.grouping_separator {
            continue;
        } else if c == format.decimal_separator {
            normalized.push('.');
        } else if c.is_ascii_digit() {
            normalized.push(c);
        } else {
            return Err("Unexpected character in amount");
        }
    }
    let amount = Decimal::from_str_exact(&normalized).map_err(|_| "Failed to parse amount")?;
    Ok(if negative { -amount } else { amount })
}
