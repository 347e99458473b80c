/// Symbol prepended to every money amount shown in the UI
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats an amount without a trailing `.00` for whole values.
///
/// `50.0 -> "50"`, `12.5 -> "12.50"`, `1299.0 -> "1,299"`
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&group_thousands(whole));
    if cents > 0 {
        result.push_str(&format!(".{:02}", cents));
    }
    result
}

/// `format_amount` with the currency symbol: `50.0 -> "₹50"`
pub fn format_money(value: f64) -> String {
    let amount = format_amount(value);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-{}{}", CURRENCY_SYMBOL, abs),
        None => format!("{}{}", CURRENCY_SYMBOL, amount),
    }
}

fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(1299.99), "1,299.99");
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(-20.0), "-20");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(50.0), "₹50");
        assert_eq!(format_money(1299.5), "₹1,299.50");
        assert_eq!(format_money(-5.0), "-₹5");
    }
}
