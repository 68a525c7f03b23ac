//! Hardcoded master data behind the lookup popups.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupKind {
    Employee,
    Workshift,
    OtCode,
    LeaveType,
    Device,
}

impl LookupKind {
    pub fn title(&self) -> &'static str {
        match self {
            LookupKind::Employee => "Search Employee",
            LookupKind::Workshift => "Search Workshift",
            LookupKind::OtCode => "Search OT Code",
            LookupKind::LeaveType => "Search Leave Type",
            LookupKind::Device => "Search Device",
        }
    }

    /// Header of the third column in the popup table
    pub fn detail_label(&self) -> &'static str {
        match self {
            LookupKind::Employee => "Department",
            LookupKind::Workshift => "Schedule",
            LookupKind::OtCode => "Rate",
            LookupKind::LeaveType => "Paid",
            LookupKind::Device => "Location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LookupEntry {
    pub code: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
}

const fn entry(code: &'static str, description: &'static str, detail: &'static str) -> LookupEntry {
    LookupEntry { code, description, detail }
}

const EMPLOYEES: &[LookupEntry] = &[
    entry("EMP-0001", "Dela Cruz, Juan", "Operations"),
    entry("EMP-0002", "Santos, Maria", "Finance"),
    entry("EMP-0003", "Reyes, Jose", "Operations"),
    entry("EMP-0004", "Garcia, Ana", "Human Resources"),
    entry("EMP-0005", "Mendoza, Carlo", "Warehouse"),
    entry("EMP-0006", "Bautista, Liza", "Warehouse"),
    entry("EMP-0007", "Villanueva, Mark", "IT"),
    entry("EMP-0008", "Ramos, Grace", "Finance"),
];

const WORKSHIFTS: &[LookupEntry] = &[
    entry("WS-DAY", "Regular Day Shift", "08:00-17:00"),
    entry("WS-MID", "Mid Shift", "14:00-23:00"),
    entry("WS-GY", "Graveyard Shift", "22:00-07:00"),
    entry("WS-FLEX", "Flexible Hours", "07:00-19:00"),
    entry("WS-RD", "Rest Day", "-"),
];

const OT_CODES: &[LookupEntry] = &[
    entry("ROT", "Regular Overtime", "125%"),
    entry("RDOT", "Rest Day Overtime", "130%"),
    entry("SHOT", "Special Holiday Overtime", "130%"),
    entry("LHOT", "Legal Holiday Overtime", "200%"),
    entry("NDOT", "Night Differential Overtime", "137.5%"),
];

const LEAVE_TYPES: &[LookupEntry] = &[
    entry("VL", "Vacation Leave", "Yes"),
    entry("SL", "Sick Leave", "Yes"),
    entry("EL", "Emergency Leave", "Yes"),
    entry("ML", "Maternity Leave", "Yes"),
    entry("PL", "Paternity Leave", "Yes"),
    entry("LWOP", "Leave Without Pay", "No"),
    entry("ABS", "Absent", "No"),
];

const DEVICES: &[LookupEntry] = &[
    entry("BIO-01", "Biometric Reader 1", "Main Entrance"),
    entry("BIO-02", "Biometric Reader 2", "Warehouse Gate"),
    entry("BIO-03", "Biometric Reader 3", "Admin Building"),
    entry("WEB", "Web Punch", "Remote"),
];

pub fn catalog(kind: LookupKind) -> &'static [LookupEntry] {
    match kind {
        LookupKind::Employee => EMPLOYEES,
        LookupKind::Workshift => WORKSHIFTS,
        LookupKind::OtCode => OT_CODES,
        LookupKind::LeaveType => LEAVE_TYPES,
        LookupKind::Device => DEVICES,
    }
}

/// Case-insensitive substring search on code or description.
/// A blank query returns the whole catalog.
pub fn search(kind: LookupKind, query: &str) -> Vec<&'static LookupEntry> {
    let needle = query.trim().to_lowercase();
    catalog(kind)
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.code.to_lowercase().contains(&needle)
                || entry.description.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn find(kind: LookupKind, code: &str) -> Option<&'static LookupEntry> {
    let code = code.trim();
    catalog(kind).iter().find(|entry| entry.code.eq_ignore_ascii_case(code))
}

pub fn employee_name(code: &str) -> Option<&'static str> {
    find(LookupKind::Employee, code).map(|entry| entry.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_returns_everything() {
        assert_eq!(search(LookupKind::Device, "").len(), DEVICES.len());
        assert_eq!(search(LookupKind::Employee, "   ").len(), EMPLOYEES.len());
    }

    #[test]
    fn test_search_matches_code_and_description() {
        let by_code: Vec<_> = search(LookupKind::OtCode, "rdot").iter().map(|e| e.code).collect();
        assert_eq!(by_code, vec!["RDOT"]);

        let by_name: Vec<_> = search(LookupKind::Employee, "SANTOS").iter().map(|e| e.code).collect();
        assert_eq!(by_name, vec!["EMP-0002"]);

        let holidays: Vec<_> = search(LookupKind::OtCode, "holiday").iter().map(|e| e.code).collect();
        assert_eq!(holidays, vec!["SHOT", "LHOT"]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(search(LookupKind::LeaveType, "sabbatical").is_empty());
    }

    #[test]
    fn test_find_and_employee_name() {
        assert_eq!(find(LookupKind::Workshift, "ws-day").map(|e| e.detail), Some("08:00-17:00"));
        assert_eq!(employee_name("EMP-0004"), Some("Garcia, Ana"));
        assert_eq!(employee_name("EMP-9999"), None);
    }
}
