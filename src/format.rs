//! Display formatting for currency, percentages, and term durations
//!
//! Locale-bound presentation only. Nothing here feeds back into the
//! projection engine.

/// Insert thousands separators into a non-negative integer string
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Whole-dollar currency: `currency(15000.0)` is `"$15,000"`
pub fn currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}${}", group_thousands(&digits))
}

/// Cent-precise currency: `currency_precise(15000.0)` is `"$15,000.00"`
pub fn currency_precise(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (dollars, cents) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(dollars))
}

/// Percentage with two fraction digits and no sign suffix: `"4.25"`
pub fn percent(value: f64) -> String {
    format!("{value:.2}")
}

/// Human-readable term duration.
///
/// Whole months below a year, whole years when the term divides evenly,
/// otherwise the mixed "N yr M mo" form.
pub fn duration(months: u32) -> String {
    let years = months / 12;
    let remaining = months % 12;

    if years == 0 {
        let plural = if months == 1 { "" } else { "s" };
        return format!("{months} month{plural}");
    }

    if remaining == 0 {
        return if years == 1 {
            "1 year".to_string()
        } else {
            format!("{years} years")
        };
    }

    format!("{years} yr {remaining} mo")
}
