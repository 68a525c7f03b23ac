use shared::filter::{DATE_FROM_KEY, DATE_TO_KEY, QUERY_KEY};
use shared::SearchFilter;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::date_input::DateInput;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub filter: SearchFilter,
    /// (filter key, new value)
    pub on_change: Callback<(&'static str, String)>,
    pub on_open_calendar: Callback<&'static str>,
    pub on_open_employee_lookup: Callback<()>,
    pub on_clear: Callback<()>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_query_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((QUERY_KEY, input.value()));
        })
    };

    let date_input = |key: &'static str, id: &'static str, label: &'static str, value: &str| {
        let on_input = {
            let on_change = props.on_change.clone();
            Callback::from(move |value: String| on_change.emit((key, value)))
        };
        let on_open_calendar = {
            let on_open_calendar = props.on_open_calendar.clone();
            Callback::from(move |_| on_open_calendar.emit(key))
        };
        html! {
            <DateInput
                id={id}
                label={label}
                value={value.to_string()}
                {on_input}
                {on_open_calendar}
            />
        }
    };

    let on_lookup_click = {
        let on_open_employee_lookup = props.on_open_employee_lookup.clone();
        Callback::from(move |_: MouseEvent| on_open_employee_lookup.emit(()))
    };

    let on_clear_click = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class="search-bar">
            <div class="form-group">
                <label for="search-query">{"Employee"}</label>
                <div class="input-with-button">
                    <input
                        id="search-query"
                        type="text"
                        placeholder="Code or name"
                        value={props.filter.query.clone()}
                        oninput={on_query_input}
                    />
                    <button type="button" class="icon-button" title="Search employees" onclick={on_lookup_click}>
                        {"🔍"}
                    </button>
                </div>
            </div>
            {date_input(DATE_FROM_KEY, "search-date-from", "Date From", &props.filter.date_from)}
            {date_input(DATE_TO_KEY, "search-date-to", "Date To", &props.filter.date_to)}
            <button
                type="button"
                class="btn btn-secondary"
                onclick={on_clear_click}
                disabled={props.filter.is_empty()}
            >
                {"Clear"}
            </button>
        </div>
    }
}
