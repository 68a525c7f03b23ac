//! Free-form time entry normalized to 24-hour `HH:MM`.

use once_cell::sync::Lazy;
use regex::Regex;

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2})(?:[:.]?(\d{2}))?\s*(am|pm|a|p)?\s*$")
        .expect("time pattern is a valid regex")
});

/// Normalize a typed time to 24-hour `HH:MM`.
///
/// Accepts `8`, `0830`, `830`, `8:30`, `8.30`, each optionally followed by
/// `am`/`pm` (or `a`/`p`). Returns `None` when the text is not a time.
pub fn normalize_time(input: &str) -> Option<String> {
    let captures = TIME_PATTERN.captures(input)?;

    let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match captures.get(2) {
        Some(minute) => minute.as_str().parse().ok()?,
        None => 0,
    };
    if minute > 59 {
        return None;
    }

    let hour = match captures.get(3).map(|suffix| suffix.as_str().to_ascii_lowercase()) {
        Some(suffix) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            if suffix.starts_with('p') { hour % 12 + 12 } else { hour % 12 }
        }
        None if hour > 23 => return None,
        None => hour,
    };

    Some(format!("{:02}:{:02}", hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_hours_and_minutes() {
        assert_eq!(normalize_time("8").as_deref(), Some("08:00"));
        assert_eq!(normalize_time("17").as_deref(), Some("17:00"));
        assert_eq!(normalize_time("830").as_deref(), Some("08:30"));
        assert_eq!(normalize_time("1745").as_deref(), Some("17:45"));
        assert_eq!(normalize_time("8:05").as_deref(), Some("08:05"));
        assert_eq!(normalize_time("08.15").as_deref(), Some("08:15"));
        assert_eq!(normalize_time(" 23:59 ").as_deref(), Some("23:59"));
    }

    #[test]
    fn test_meridiem_suffixes() {
        assert_eq!(normalize_time("8pm").as_deref(), Some("20:00"));
        assert_eq!(normalize_time("8:30 PM").as_deref(), Some("20:30"));
        assert_eq!(normalize_time("12am").as_deref(), Some("00:00"));
        assert_eq!(normalize_time("12:15p").as_deref(), Some("12:15"));
        assert_eq!(normalize_time("1130a").as_deref(), Some("11:30"));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(normalize_time("24:00"), None);
        assert_eq!(normalize_time("8:60"), None);
        assert_eq!(normalize_time("13pm"), None);
        assert_eq!(normalize_time("0am"), None);
    }

    #[test]
    fn test_rejects_non_times() {
        assert_eq!(normalize_time(""), None);
        assert_eq!(normalize_time("noon"), None);
        assert_eq!(normalize_time("8:5"), None);
        assert_eq!(normalize_time("12345"), None);
    }
}
