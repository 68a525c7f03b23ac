use shared::{CalendarCell, DatePicker, MonthCursor};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::logging::Logger;

pub struct UseDatePickerResult {
    pub picker: DatePicker,
    pub actions: UseDatePickerActions,
}

#[derive(Clone)]
pub struct UseDatePickerActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub select: Callback<CalendarCell>,
}

/// Month cursor of a calendar popup. Starts open on `seed` (or the current
/// month) and lives only as long as the popup is mounted.
#[hook]
pub fn use_date_picker(
    seed: Option<MonthCursor>,
    on_date_select: Callback<String>,
    on_close: Callback<()>,
) -> UseDatePickerResult {
    let picker = use_state(move || DatePicker::Open(seed.unwrap_or_else(MonthCursor::today)));

    let prev_month = {
        let picker = picker.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *picker;
            next.previous_month();
            if let Some(cursor) = next.cursor() {
                Logger::debug_with_component("calendar", &cursor.title());
            }
            picker.set(next);
        })
    };

    let next_month = {
        let picker = picker.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *picker;
            next.next_month();
            if let Some(cursor) = next.cursor() {
                Logger::debug_with_component("calendar", &cursor.title());
            }
            picker.set(next);
        })
    };

    let select = {
        let picker = picker.clone();
        Callback::from(move |cell: CalendarCell| {
            let mut next = *picker;
            let accepted = next.select_with(
                cell,
                |date| on_date_select.emit(date),
                || on_close.emit(()),
            );
            if accepted {
                picker.set(next);
            }
        })
    };

    UseDatePickerResult {
        picker: *picker,
        actions: UseDatePickerActions {
            prev_month,
            next_month,
            select,
        },
    }
}
