//! Duration inference: turns a free-text tenure string into a whole number of years.
//!
//! Rules, first hit wins:
//! 1. a number immediately followed by `year`/`yr` (case-insensitive, spaces allowed) → that number
//! 2. two or more standalone calendar years 1900–2099 → distance between the first and last found
//! 3. anything else → 1
//!
//! Rule 2 only looks at the outermost years, so text listing several ranges
//! ("2010-2012, 2019-2020") is read as one span.

use once_cell::sync::Lazy;
use regex::Regex;

/// Years assumed when the text carries no usable signal.
pub const DEFAULT_YEARS: u32 = 1;

static RE_YEAR_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:year|yr)").expect("valid year-count regex"));

static RE_CALENDAR_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid calendar-year regex"));

/// Infers a year count from `text`. Never fails; unparseable input yields [`DEFAULT_YEARS`].
pub fn infer_years(text: &str) -> u32 {
    explicit_year_count(text)
        .or_else(|| calendar_span(text))
        .unwrap_or(DEFAULT_YEARS)
}

fn explicit_year_count(text: &str) -> Option<u32> {
    RE_YEAR_COUNT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

fn calendar_span(text: &str) -> Option<u32> {
    let years: Vec<u32> = RE_CALENDAR_YEAR
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .collect();

    match years.as_slice() {
        [first, .., last] => Some(last.abs_diff(*first)),
        _ => None,
    }
}
