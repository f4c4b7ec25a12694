use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a stored `YYYY-MM-DD` value. Missing or malformed input → `None`.
pub fn parse_local_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD`, the storage form.
pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// `MM/DD/YYYY`, or empty when there is no date.
pub fn format_display(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_default()
}

/// Display form of a raw stored date.
pub fn display_date(raw: &str) -> String {
    format_display(parse_local_date(raw))
}

/// Monday and Saturday of the working week around `day`.
///
/// A Sunday reaches back to the Monday before it and forward to the
/// Saturday after it.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let from_monday = day.weekday().num_days_from_monday() as i64;
    let to_saturday = 6 - day.weekday().num_days_from_sunday() as i64;
    (day - Duration::days(from_monday), day + Duration::days(to_saturday))
}
