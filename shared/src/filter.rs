//! Search bar filtering of record tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_display_date;
use crate::lookup::employee_name;
use crate::records::TimeRecord;

pub const QUERY_KEY: &str = "query";
pub const DATE_FROM_KEY: &str = "date_from";
pub const DATE_TO_KEY: &str = "date_to";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Employee code or name fragment
    pub query: String,
    /// `M/D/YYYY`, inclusive
    pub date_from: String,
    /// `M/D/YYYY`, inclusive
    pub date_to: String,
}

impl SearchFilter {
    /// Set one of the search bar inputs by key
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            QUERY_KEY => self.query = value,
            DATE_FROM_KEY => self.date_from = value,
            DATE_TO_KEY => self.date_to = value,
            _ => return false,
        }
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            QUERY_KEY => Some(&self.query),
            DATE_FROM_KEY => Some(&self.date_from),
            DATE_TO_KEY => Some(&self.date_to),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.date_from.trim().is_empty() && self.date_to.trim().is_empty()
    }

    pub fn matches<R: TimeRecord>(&self, record: &R) -> bool {
        self.matches_query(record.employee_code()) && self.matches_dates(record.date())
    }

    pub fn apply<'a, R: TimeRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }

    fn matches_query(&self, employee_code: &str) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        employee_code.to_lowercase().contains(&needle)
            || employee_name(employee_code)
                .map(|name| name.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }

    /// Unparsable bounds are ignored; while any bound is active a record
    /// with an unparsable date is left out.
    fn matches_dates(&self, date: &str) -> bool {
        let from = parse_display_date(&self.date_from);
        let to = parse_display_date(&self.date_to);
        if from.is_none() && to.is_none() {
            return true;
        }

        let Some(date) = parse_display_date(date) else {
            return false;
        };
        within(date, from, to)
    }
}

fn within(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RawLog;

    fn log(code: &str, date: &str) -> RawLog {
        RawLog {
            employee_code: code.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    fn codes(records: Vec<&RawLog>) -> Vec<String> {
        records.iter().map(|record| format!("{} {}", record.employee_code, record.date)).collect()
    }

    fn sample() -> Vec<RawLog> {
        vec![
            log("EMP-0001", "3/1/2025"),
            log("EMP-0002", "3/15/2025"),
            log("EMP-0003", "4/2/2025"),
            log("EMP-0001", "garbage"),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let records = sample();
        let filter = SearchFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&records).len(), 4);
    }

    #[test]
    fn test_query_matches_code_and_employee_name() {
        let records = sample();
        let mut filter = SearchFilter::default();

        filter.set(QUERY_KEY, "emp-0001".to_string());
        assert_eq!(codes(filter.apply(&records)), vec!["EMP-0001 3/1/2025", "EMP-0001 garbage"]);

        filter.set(QUERY_KEY, "santos".to_string());
        assert_eq!(codes(filter.apply(&records)), vec!["EMP-0002 3/15/2025"]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let records = sample();
        let filter = SearchFilter {
            date_from: "3/1/2025".to_string(),
            date_to: "3/15/2025".to_string(),
            ..Default::default()
        };
        assert_eq!(codes(filter.apply(&records)), vec!["EMP-0001 3/1/2025", "EMP-0002 3/15/2025"]);
    }

    #[test]
    fn test_open_ended_range() {
        let records = sample();
        let filter = SearchFilter {
            date_from: "3/2/2025".to_string(),
            ..Default::default()
        };
        assert_eq!(codes(filter.apply(&records)), vec!["EMP-0002 3/15/2025", "EMP-0003 4/2/2025"]);
    }

    #[test]
    fn test_unparsable_bound_is_ignored() {
        let records = sample();
        let filter = SearchFilter {
            date_from: "sometime".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 4);
    }

    #[test]
    fn test_set_and_get_by_key() {
        let mut filter = SearchFilter::default();
        assert!(filter.set(DATE_TO_KEY, "1/31/2025".to_string()));
        assert!(!filter.set("unknown", "x".to_string()));
        assert_eq!(filter.get(DATE_TO_KEY), Some("1/31/2025"));
        assert_eq!(filter.get("unknown"), None);
        assert!(!filter.is_empty());
    }
}
