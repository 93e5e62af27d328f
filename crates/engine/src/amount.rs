//! Shorthand amount notation.
//!
//! Amounts are integers in **thousand-VND units** (`1` = 1.000 đồng). Users
//! type them with a `k` (thousand) or `tr` (million) marker:
//!
//! ```rust
//! use engine::{format_amount, parse_amount};
//!
//! assert_eq!(parse_amount("200k").unwrap(), 200);
//! assert_eq!(parse_amount("1tr500").unwrap(), 1500);
//! assert_eq!(format_amount(2000), "2 triệu VND");
//! ```

use crate::{EngineError, ResultEngine};

const THOUSANDS_PER_MILLION: i64 = 1000;

/// Largest accepted amount: one trillion đồng. Far enough below `i64::MAX`
/// that summing a ledger cannot overflow.
pub const MAX_AMOUNT: i64 = 1_000_000_000;

/// Parses a shorthand amount into thousand-VND units.
///
/// The text is lowercased, trimmed and stripped of `,` separators, then the
/// first matching rule wins:
/// - `<n>[.<frac>]k`: `n` thousands, the fraction is truncated (`1.5k` → 1)
/// - `<m>[.<frac>]tr[<t>]`: `m` millions plus `t` leftover thousands
/// - `<n>`: plain integer, already in thousands
///
/// Results must be strictly positive and at most [`MAX_AMOUNT`].
pub fn parse_amount(text: &str) -> ResultEngine<i64> {
    let normalized = text.to_lowercase().replace(',', "");
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return Err(EngineError::Parse("empty amount".to_string()));
    }

    let amount = if let Some(prefix) = normalized.strip_suffix('k') {
        parse_thousands(prefix.trim_end())
    } else if normalized.contains("tr") {
        parse_millions(normalized)
    } else {
        parse_plain(normalized)
    }
    .ok_or_else(|| EngineError::Parse(format!("unrecognized amount \"{}\"", text.trim())))?;

    if amount <= 0 {
        return Err(EngineError::Parse("amount must be > 0".to_string()));
    }
    if amount > MAX_AMOUNT {
        return Err(EngineError::Parse(format!(
            "amount must be at most {MAX_AMOUNT}"
        )));
    }
    Ok(amount)
}

/// Renders an amount for confirmations: whole millions as `triệu`, anything
/// else as `nghìn`.
pub fn format_amount(amount: i64) -> String {
    if amount >= THOUSANDS_PER_MILLION && amount % THOUSANDS_PER_MILLION == 0 {
        format!("{} triệu VND", amount / THOUSANDS_PER_MILLION)
    } else {
        format!("{amount} nghìn VND")
    }
}

/// Splits a leading `<digits>[.<digits>]` off `input`, returning the integer
/// digits, the fractional digits (possibly empty) and the unparsed rest.
fn leading_decimal(input: &str) -> Option<(&str, &str, &str)> {
    let int_end = digits_len(input);
    if int_end == 0 {
        return None;
    }
    let (int_part, rest) = input.split_at(int_end);

    match rest.strip_prefix('.') {
        Some(after_dot) => {
            let frac_end = digits_len(after_dot);
            if frac_end == 0 {
                return None;
            }
            let (frac_part, rest) = after_dot.split_at(frac_end);
            Some((int_part, frac_part, rest))
        }
        None => Some((int_part, "", rest)),
    }
}

fn digits_len(input: &str) -> usize {
    input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len())
}

fn parse_thousands(prefix: &str) -> Option<i64> {
    let (int_part, _, rest) = leading_decimal(prefix)?;
    if !rest.is_empty() {
        return None;
    }
    int_part.parse().ok()
}

fn parse_millions(input: &str) -> Option<i64> {
    let (int_part, frac_part, rest) = leading_decimal(input)?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix("tr").unwrap_or(rest).trim_start();

    let leftover_end = digits_len(rest);
    let (leftover, rest) = rest.split_at(leftover_end);
    if !rest.is_empty() {
        return None;
    }

    // Only the first three fractional digits map onto whole thousands.
    let frac_thousands: i64 = format!("{:0<3.3}", frac_part).parse().ok()?;
    let leftover: i64 = if leftover.is_empty() {
        0
    } else {
        leftover.parse().ok()?
    };

    int_part
        .parse::<i64>()
        .ok()?
        .checked_mul(THOUSANDS_PER_MILLION)?
        .checked_add(frac_thousands)?
        .checked_add(leftover)
}

fn parse_plain(input: &str) -> Option<i64> {
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_thousand_suffix() {
        assert_eq!(parse_amount("200k").unwrap(), 200);
        assert_eq!(parse_amount("200K").unwrap(), 200);
        assert_eq!(parse_amount("1.5k").unwrap(), 1);
        assert_eq!(parse_amount("1,200k").unwrap(), 1200);
        assert_eq!(parse_amount("  50k ").unwrap(), 50);
    }

    #[test]
    fn parse_million_marker() {
        assert_eq!(parse_amount("1tr").unwrap(), 1000);
        assert_eq!(parse_amount("1tr500").unwrap(), 1500);
        assert_eq!(parse_amount("2.5tr").unwrap(), 2500);
        assert_eq!(parse_amount("1.005tr").unwrap(), 1005);
        assert_eq!(parse_amount("1.23456tr").unwrap(), 1234);
        assert_eq!(parse_amount("3TR2").unwrap(), 3002);
    }

    #[test]
    fn parse_plain_integer_is_thousands() {
        assert_eq!(parse_amount("150").unwrap(), 150);
        assert_eq!(parse_amount("1,500").unwrap(), 1500);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_amount(""), Err(EngineError::Parse(_))));
        assert!(matches!(parse_amount("   "), Err(EngineError::Parse(_))));
        assert!(matches!(parse_amount("k"), Err(EngineError::Parse(_))));
        assert!(matches!(parse_amount("abc"), Err(EngineError::Parse(_))));
        assert!(matches!(parse_amount("tr5"), Err(EngineError::Parse(_))));
        assert!(matches!(parse_amount("1tr500k"), Err(EngineError::Parse(_))));
        assert!(matches!(parse_amount("1.k"), Err(EngineError::Parse(_))));
        assert!(matches!(parse_amount("-5"), Err(EngineError::Parse(_))));
        assert!(matches!(parse_amount("1e3k"), Err(EngineError::Parse(_))));
    }

    #[test]
    fn parse_rejects_zero_and_overflow() {
        assert!(matches!(parse_amount("0"), Err(EngineError::Parse(_))));
        assert!(matches!(parse_amount("0.5k"), Err(EngineError::Parse(_))));
        assert!(matches!(
            parse_amount("99999999999999999999"),
            Err(EngineError::Parse(_))
        ));
        assert!(matches!(
            parse_amount("9223372036854775807tr"),
            Err(EngineError::Parse(_))
        ));
    }

    #[test]
    fn parse_caps_at_one_trillion_dong() {
        assert_eq!(parse_amount("1000000tr").unwrap(), MAX_AMOUNT);
        assert_eq!(parse_amount("1000000000").unwrap(), MAX_AMOUNT);
        for text in ["1000000tr1", "1000000001k", "9223372036854775807"] {
            assert!(matches!(parse_amount(text), Err(EngineError::Parse(_))), "{text}");
        }
    }

    #[test]
    fn format_millions_and_thousands() {
        assert_eq!(format_amount(1000), "1 triệu VND");
        assert_eq!(format_amount(3000), "3 triệu VND");
        assert_eq!(format_amount(1500), "1500 nghìn VND");
        assert_eq!(format_amount(500), "500 nghìn VND");
        assert_eq!(format_amount(0), "0 nghìn VND");
    }
}
