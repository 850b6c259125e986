//! Currency and percentage formatting
//!
//! The only place values are rounded: two decimals for money, whole numbers
//! for percentages.

/// Format a value as currency, e.g. `$1,234.50` or `-$12.00`
///
/// Non-finite values print as zero. With `show_sign`, positive values get a
/// leading `+`.
pub fn format_currency(value: f64, symbol: &str, show_sign: bool) -> String {
    let cents = if value.is_finite() {
        (value * 100.0).round() as i64
    } else {
        0
    };

    let sign = if cents < 0 {
        "-"
    } else if show_sign && cents > 0 {
        "+"
    } else {
        ""
    };

    let abs = cents.unsigned_abs();
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(abs / 100),
        abs % 100
    )
}

/// Format a ratio as a whole percentage, e.g. `0.256` as `26%`
pub fn format_percentage(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", (ratio * 100.0).round() as i64)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
