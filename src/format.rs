//! Display formatting for currency and percentage values
//!
//! Mirrors the en-US formatting of the original calculator: two decimal
//! places and thousands separators for currency.

/// Format a dollar amount as "$1,234.56" (negative amounts as "-$1,234.56")
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// Format an annual percentage rate (4.25 -> "4.25%")
pub fn format_percent(rate: f64) -> String {
    format!("{rate:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.5), "$5.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(5217.07), "$5,217.07");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(-12.5), "-$12.50");
        assert_eq!(format_currency(-1000.0), "-$1,000.00");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(4.25), "4.25%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(12.5), "12.50%");
    }
}
