use shared::calendar::{month_grid, WEEKDAY_LABELS};
use shared::{CalendarCell, MonthCursor};
use yew::prelude::*;

use crate::hooks::use_date_picker::use_date_picker;

#[derive(Properties, PartialEq)]
pub struct CalendarPopupProps {
    /// Month to show first; the current month when absent
    #[prop_or_default]
    pub seed: Option<MonthCursor>,
    /// Receives the picked day as `M/D/YYYY`
    pub on_date_select: Callback<String>,
    /// Fired after a pick and on backdrop click
    pub on_close: Callback<()>,
}

/// Inline date picker. The host decides when it is mounted.
#[function_component(CalendarPopup)]
pub fn calendar_popup(props: &CalendarPopupProps) -> Html {
    let date_picker = use_date_picker(props.seed, props.on_date_select.clone(), props.on_close.clone());

    let Some(cursor) = date_picker.picker.cursor() else {
        return html! {};
    };
    let cells = month_grid(cursor);

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_popup_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let render_cell = |cell: &CalendarCell| {
        if !cell.is_selectable() {
            return html! {
                <span class="calendar-day other-month">{cell.day}</span>
            };
        }
        let select = date_picker.actions.select.clone();
        let cell = *cell;
        html! {
            <button
                type="button"
                class="calendar-day current-month"
                onclick={Callback::from(move |_: MouseEvent| select.emit(cell))}
            >
                {cell.day}
            </button>
        }
    };

    html! {
        <div class="calendar-backdrop" onclick={on_backdrop_click}>
            <div class="calendar-dropdown" onclick={on_popup_click}>
                <div class="calendar-header">
                    <button type="button" class="nav-button" onclick={date_picker.actions.prev_month.clone()}>{"‹"}</button>
                    <span class="month-year">{cursor.title()}</span>
                    <button type="button" class="nav-button" onclick={date_picker.actions.next_month.clone()}>{"›"}</button>
                </div>

                <div class="calendar-grid">
                    <div class="weekday-header">
                        {for WEEKDAY_LABELS.iter().map(|label| html! { <span>{*label}</span> })}
                    </div>

                    {for cells.chunks(7).map(|week| html! {
                        <div class="calendar-week">
                            {for week.iter().map(&render_cell)}
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
