//! Date-picker calendar logic.
//!
//! Everything the calendar popup needs that does not touch the DOM lives
//! here: the 42-cell month grid, the month/year cursor and the small
//! open/closed state machine that turns a day click into a `M/D/YYYY`
//! string for the host form.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Six weeks of seven days.
pub const GRID_CELLS: usize = 42;

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Which month a grid cell belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellOrigin {
    /// Trailing day of the previous month, shown for continuity only
    Previous,
    /// Day of the displayed month
    Current,
    /// Leading day of the next month, shown for continuity only
    Next,
}

/// A single day in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: u32,
    pub origin: CellOrigin,
}

impl CalendarCell {
    /// Only days of the displayed month can be picked.
    pub fn is_selectable(&self) -> bool {
        self.origin == CellOrigin::Current
    }
}

/// The (month, year) pair the calendar is showing. `month` is zero-based.
///
/// Years span the whole `i32` range; navigating past either end stays on
/// the last representable month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawMonthCursor")]
pub struct MonthCursor {
    month: u32,
    year: i32,
}

/// Wire shape of [`MonthCursor`]; deserialized values go through
/// [`MonthCursor::new`] so the month is always in `0..12`.
#[derive(Deserialize)]
struct RawMonthCursor {
    month: u32,
    year: i32,
}

impl From<RawMonthCursor> for MonthCursor {
    fn from(raw: RawMonthCursor) -> Self {
        MonthCursor::new(raw.month, raw.year)
    }
}

impl MonthCursor {
    /// Build a cursor, carrying any month overflow into the year.
    pub fn new(month: u32, year: i32) -> Self {
        let carry = i32::try_from(month / 12).unwrap_or(i32::MAX);
        match year.checked_add(carry) {
            Some(year) => Self { month: month % 12, year },
            None => Self { month: 11, year: i32::MAX },
        }
    }

    /// Cursor for the month containing today's local date.
    pub fn today() -> Self {
        let now = Local::now();
        Self::new(now.month0(), now.year())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.month0(), date.year())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn previous_month(&mut self) {
        if self.month == 0 {
            if let Some(year) = self.year.checked_sub(1) {
                self.month = 11;
                self.year = year;
            }
        } else {
            self.month -= 1;
        }
    }

    pub fn next_month(&mut self) {
        if self.month == 11 {
            if let Some(year) = self.year.checked_add(1) {
                self.month = 0;
                self.year = year;
            }
        } else {
            self.month += 1;
        }
    }

    pub fn previous(mut self) -> Self {
        self.previous_month();
        self
    }

    pub fn next(mut self) -> Self {
        self.next_month();
        self
    }

    /// Header text, e.g. "March 2025"
    pub fn title(&self) -> String {
        format!("{} {:04}", MONTH_NAMES[self.month as usize], self.year)
    }

    /// The string handed to the host form for a picked day: `M/D/YYYY`
    /// with no zero padding on month or day.
    pub fn format_selection(&self, day: u32) -> String {
        format!("{}/{}/{}", self.month + 1, day, self.year)
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.month, self.year)
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Number of days in a zero-based month
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month % 12 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        _ => {
            if is_leap_year(year) { 29 } else { 28 }
        }
    }
}

/// Day of week of the 1st of a zero-based month, 0 = Sunday.
///
/// Plain integer arithmetic on the proleptic Gregorian calendar, so it is
/// defined for every `i32` year rather than only the range a date library
/// can represent.
pub fn first_weekday(month: u32, year: i32) -> u32 {
    const MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let month = (month % 12) as usize;
    let mut y = i64::from(year);
    if month < 2 {
        y -= 1;
    }
    let weekday = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + MONTH_OFFSETS[month] + 1;
    weekday.rem_euclid(7) as u32
}

/// Build the fixed 6x7 grid for the cursor's month, starting on Sunday.
pub fn month_grid(cursor: MonthCursor) -> Vec<CalendarCell> {
    let mut cells = Vec::with_capacity(GRID_CELLS);

    let leading = first_weekday(cursor.month, cursor.year);
    let previous_days = cursor.previous().days();
    for day in (previous_days - leading + 1)..=previous_days {
        cells.push(CalendarCell { day, origin: CellOrigin::Previous });
    }

    for day in 1..=cursor.days() {
        cells.push(CalendarCell { day, origin: CellOrigin::Current });
    }

    let trailing = GRID_CELLS - cells.len();
    for day in 1..=trailing as u32 {
        cells.push(CalendarCell { day, origin: CellOrigin::Next });
    }

    log::trace!("built grid for {}: {} leading, {} trailing", cursor.title(), leading, trailing);
    cells
}

/// Parse a `M/D/YYYY` string as produced by [`MonthCursor::format_selection`].
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().split('/');
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Open/closed state of a date-picker popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePicker {
    #[default]
    Closed,
    Open(MonthCursor),
}

impl DatePicker {
    pub fn open(&mut self, cursor: MonthCursor) {
        *self = DatePicker::Open(cursor);
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DatePicker::Open(_))
    }

    pub fn cursor(&self) -> Option<MonthCursor> {
        match self {
            DatePicker::Open(cursor) => Some(*cursor),
            DatePicker::Closed => None,
        }
    }

    pub fn grid(&self) -> Option<Vec<CalendarCell>> {
        self.cursor().map(month_grid)
    }

    pub fn previous_month(&mut self) {
        if let DatePicker::Open(cursor) = self {
            cursor.previous_month();
        }
    }

    pub fn next_month(&mut self) {
        if let DatePicker::Open(cursor) = self {
            cursor.next_month();
        }
    }

    /// Pick a cell. Returns the formatted date and closes the picker when
    /// the cell is a day of the displayed month; anything else is ignored.
    pub fn select(&mut self, cell: CalendarCell) -> Option<String> {
        let cursor = self.cursor()?;
        if !cell.is_selectable() || cell.day == 0 || cell.day > cursor.days() {
            return None;
        }
        *self = DatePicker::Closed;
        Some(cursor.format_selection(cell.day))
    }

    /// [`DatePicker::select`] wired to host callbacks: `on_select` gets the
    /// date string, then `on_close` runs. Neither runs for an inert cell.
    pub fn select_with(
        &mut self,
        cell: CalendarCell,
        on_select: impl FnOnce(String),
        on_close: impl FnOnce(),
    ) -> bool {
        match self.select(cell) {
            Some(date) => {
                on_select(date);
                on_close();
                true
            }
            None => false,
        }
    }

    /// Backdrop click or Escape
    pub fn dismiss(&mut self) {
        *self = DatePicker::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn current_days(grid: &[CalendarCell]) -> Vec<u32> {
        grid.iter()
            .filter(|cell| cell.origin == CellOrigin::Current)
            .map(|cell| cell.day)
            .collect()
    }

    #[test]
    fn test_grid_always_has_42_cells() {
        for year in [1900, 1999, 2000, 2023, 2024, 2025, 2100, -44, 0] {
            for month in 0..12 {
                let grid = month_grid(MonthCursor::new(month, year));
                assert_eq!(grid.len(), GRID_CELLS, "month {} year {}", month, year);
            }
        }
    }

    #[test]
    fn test_current_cells_match_month_length() {
        for year in [1900, 2000, 2023, 2024] {
            for month in 0..12 {
                let grid = month_grid(MonthCursor::new(month, year));
                let days = current_days(&grid);
                assert_eq!(days.len() as u32, days_in_month(month, year));
                assert_eq!(days, (1..=days_in_month(month, year)).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_leading_cells_are_previous_month_tail() {
        // March 2025 starts on a Saturday; February 2025 has 28 days
        let grid = month_grid(MonthCursor::new(2, 2025));
        assert_eq!(first_weekday(2, 2025), 6);
        let leading: Vec<_> = grid.iter().take(6).collect();
        assert!(leading.iter().all(|cell| cell.origin == CellOrigin::Previous));
        assert_eq!(leading.iter().map(|cell| cell.day).collect::<Vec<_>>(), vec![23, 24, 25, 26, 27, 28]);
        assert_eq!(grid[6], CalendarCell { day: 1, origin: CellOrigin::Current });

        // January rolls back into the previous year's December
        let grid = month_grid(MonthCursor::new(0, 2026));
        assert_eq!(first_weekday(0, 2026), 4);
        assert_eq!(
            grid.iter().take(4).map(|cell| cell.day).collect::<Vec<_>>(),
            vec![28, 29, 30, 31]
        );
    }

    #[test]
    fn test_first_current_cell_position() {
        for year in [1900, 2000, 2024, 2025] {
            for month in 0..12 {
                let grid = month_grid(MonthCursor::new(month, year));
                let position = grid.iter().position(|cell| cell.origin == CellOrigin::Current).unwrap();
                assert_eq!(position as u32, first_weekday(month, year));
                assert!(grid[..position].iter().all(|cell| cell.origin == CellOrigin::Previous));
            }
        }
    }

    #[test]
    fn test_trailing_cells_count_up_from_one() {
        // February 2026 starts on a Sunday: no leading cells, 14 trailing
        let grid = month_grid(MonthCursor::new(1, 2026));
        assert_eq!(grid[0], CalendarCell { day: 1, origin: CellOrigin::Current });
        let trailing: Vec<_> = grid.iter().filter(|cell| cell.origin == CellOrigin::Next).map(|cell| cell.day).collect();
        assert_eq!(trailing, (1..=14).collect::<Vec<_>>());
    }

    #[test]
    fn test_first_weekday_known_dates() {
        assert_eq!(first_weekday(0, 2000), 6); // Saturday
        assert_eq!(first_weekday(9, 2026), 4); // Thursday
        assert_eq!(first_weekday(6, 1969), 2); // Tuesday
        assert_eq!(first_weekday(0, 1900), 1); // Monday
    }

    #[test]
    fn test_first_weekday_agrees_with_chrono() {
        for year in 1890..2110 {
            for month in 0..12 {
                let date = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
                assert_eq!(first_weekday(month, year), date.weekday().num_days_from_sunday());
            }
        }
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_february_lengths() {
        assert_eq!(days_in_month(1, 2000), 29);
        assert_eq!(days_in_month(1, 1900), 28);
        assert_eq!(days_in_month(1, 2024), 29);
        assert_eq!(days_in_month(1, 2023), 28);
        assert_eq!(days_in_month(0, 2023), 31);
        assert_eq!(days_in_month(3, 2023), 30);
    }

    #[test]
    fn test_navigation_round_trip() {
        for month in 0..12 {
            for year in [1999, 2024] {
                let cursor = MonthCursor::new(month, year);
                assert_eq!(cursor.previous().next(), cursor);
                assert_eq!(cursor.next().previous(), cursor);
            }
        }
    }

    #[test]
    fn test_year_rollover() {
        let mut cursor = MonthCursor::new(0, 2025);
        cursor.previous_month();
        assert_eq!((cursor.month(), cursor.year()), (11, 2024));

        let mut cursor = MonthCursor::new(11, 2025);
        cursor.next_month();
        assert_eq!((cursor.month(), cursor.year()), (0, 2026));
    }

    #[test]
    fn test_cursor_new_normalizes_month() {
        let cursor = MonthCursor::new(14, 2024);
        assert_eq!((cursor.month(), cursor.year()), (2, 2025));
    }

    #[test]
    fn test_deserialized_cursor_is_normalized() {
        let cursor: MonthCursor = serde_json::from_str(r#"{"month":12,"year":2024}"#).unwrap();
        assert_eq!(cursor, MonthCursor::new(0, 2025));
        assert_eq!(cursor.title(), "January 2025");
        assert_eq!(cursor.format_selection(5), "1/5/2025");

        let cursor: MonthCursor = serde_json::from_str(r#"{"month":3,"year":1999}"#).unwrap();
        assert_eq!((cursor.month(), cursor.year()), (3, 1999));
        assert_eq!(serde_json::to_string(&cursor).unwrap(), r#"{"month":3,"year":1999}"#);
    }

    #[test]
    fn test_navigation_saturates_at_year_limits() {
        let mut cursor = MonthCursor::new(11, i32::MAX);
        cursor.next_month();
        assert_eq!((cursor.month(), cursor.year()), (11, i32::MAX));
        assert_eq!(month_grid(cursor).len(), GRID_CELLS);

        let mut cursor = MonthCursor::new(0, i32::MIN);
        cursor.previous_month();
        assert_eq!((cursor.month(), cursor.year()), (0, i32::MIN));
        assert_eq!(month_grid(cursor).len(), GRID_CELLS);

        let cursor = MonthCursor::new(12, i32::MAX);
        assert_eq!((cursor.month(), cursor.year()), (11, i32::MAX));

        let mut cursor = MonthCursor::new(10, i32::MAX);
        cursor.next_month();
        assert_eq!((cursor.month(), cursor.year()), (11, i32::MAX));
    }

    #[test]
    fn test_title_and_selection_format() {
        let cursor = MonthCursor::new(2, 2025);
        assert_eq!(cursor.title(), "March 2025");
        assert_eq!(cursor.format_selection(7), "3/7/2025");
        assert_eq!(MonthCursor::new(11, 2024).format_selection(25), "12/25/2024");
    }

    #[test]
    fn test_select_emits_date_then_close() {
        let calls = RefCell::new(Vec::new());
        let mut picker = DatePicker::default();
        picker.open(MonthCursor::new(4, 2024));

        let accepted = picker.select_with(
            CalendarCell { day: 9, origin: CellOrigin::Current },
            |date| calls.borrow_mut().push(format!("select:{}", date)),
            || calls.borrow_mut().push("close".to_string()),
        );

        assert!(accepted);
        assert_eq!(*calls.borrow(), vec!["select:5/9/2024".to_string(), "close".to_string()]);
        assert_eq!(picker, DatePicker::Closed);
    }

    #[test]
    fn test_select_adjacent_month_cell_is_inert() {
        let cursor = MonthCursor::new(2, 2025);
        let mut picker = DatePicker::Open(cursor);
        let calls = RefCell::new(0);

        for origin in [CellOrigin::Previous, CellOrigin::Next] {
            let accepted = picker.select_with(
                CalendarCell { day: 1, origin },
                |_| *calls.borrow_mut() += 1,
                || *calls.borrow_mut() += 1,
            );
            assert!(!accepted);
        }

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(picker, DatePicker::Open(cursor));
    }

    #[test]
    fn test_select_while_closed_does_nothing() {
        let mut picker = DatePicker::Closed;
        assert_eq!(picker.select(CalendarCell { day: 3, origin: CellOrigin::Current }), None);
    }

    #[test]
    fn test_picker_navigation_and_dismiss() {
        let mut picker = DatePicker::default();
        picker.next_month();
        assert_eq!(picker, DatePicker::Closed);

        picker.open(MonthCursor::new(11, 2025));
        picker.next_month();
        assert_eq!(picker.cursor(), Some(MonthCursor::new(0, 2026)));
        picker.previous_month();
        picker.previous_month();
        assert_eq!(picker.cursor(), Some(MonthCursor::new(10, 2025)));
        assert_eq!(picker.grid().map(|grid| grid.len()), Some(GRID_CELLS));

        picker.dismiss();
        assert!(!picker.is_open());
    }

    #[test]
    fn test_parse_display_date() {
        assert_eq!(parse_display_date("3/7/2025"), NaiveDate::from_ymd_opt(2025, 3, 7));
        assert_eq!(parse_display_date(" 12/31/1999 "), NaiveDate::from_ymd_opt(1999, 12, 31));
        assert_eq!(parse_display_date("2/30/2024"), None);
        assert_eq!(parse_display_date("2025-03-07"), None);
        assert_eq!(parse_display_date("3/7/2025/1"), None);
        assert_eq!(parse_display_date(""), None);
    }

    #[test]
    fn test_cursor_from_parsed_date() {
        let date = parse_display_date("8/15/2024").unwrap();
        assert_eq!(MonthCursor::from_date(date), MonthCursor::new(7, 2024));
    }
}
