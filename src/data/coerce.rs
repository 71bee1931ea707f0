use chrono::NaiveDate;

// The scraped listings mix ISO dates, US slashed dates, and spelled-out
// release dates ("December 25, 2019"). First matching format wins.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%Y/%m/%d",
];

/// Permissive date parse. Unrecognized input is `None`, never an error.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Plain float coercion: `"100.5"` -> `Some(100.5)`, `"N/A"` -> `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Currency-formatted text to a bare number: strips `$` and the `,` group
/// separators, then parses. `"$1,234.50"` -> `Some(1234.5)`; values still
/// malformed after stripping (`"$-"`, `""`) are `None`.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let stripped: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    parse_number(&stripped)
}

/// Integer coercion tolerating group separators: `"1,234,567"` -> `Some(1234567)`.
pub fn parse_count(raw: &str) -> Option<u64> {
    let stripped: String = raw.chars().filter(|c| *c != ',').collect();
    stripped.trim().parse::<u64>().ok()
}
