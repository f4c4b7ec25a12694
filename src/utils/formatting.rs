//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `1234.5` → `$1,234.50`, `-20` → `-$20.00`.
pub fn money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// One decimal place.
pub fn hours(value: f64) -> String {
    format!("{value:.1}")
}

/// Hours with an explicit sign for positive values: `+2.0`, `-1.5`, `0.0`.
pub fn signed_hours(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}")
    } else {
        format!("{value:.1}")
    }
}

/// Whole percent; `value` is already in percent units.
pub fn percent(value: f64) -> String {
    format!("{value:.0}%")
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Free text, or `None` when blank.
pub fn or_none(text: &str) -> &str {
    if text.trim().is_empty() { "None" } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(200.0), "$200.00");
        assert_eq!(money(1234.5), "$1,234.50");
        assert_eq!(money(-1234567.891), "-$1,234,567.89");
        assert_eq!(money(-0.001), "$0.00");
    }

    #[test]
    fn hours_and_percent() {
        assert_eq!(signed_hours(2.0), "+2.0");
        assert_eq!(signed_hours(-1.5), "-1.5");
        assert_eq!(signed_hours(0.0), "0.0");
        assert_eq!(percent(20.0), "20%");
        assert_eq!(percent(-50.0), "-50%");
    }

    #[test]
    fn text_placeholders() {
        assert_eq!(or_none("  "), "None");
        assert_eq!(or_none("ladder"), "ladder");
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
