use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DateInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    pub on_open_calendar: Callback<()>,
}

/// Text input for a `M/D/YYYY` date with a button that asks the host to
/// show the calendar popup.
#[function_component(DateInput)]
pub fn date_input(props: &DateInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let on_calendar_click = {
        let on_open_calendar = props.on_open_calendar.clone();
        Callback::from(move |_: MouseEvent| on_open_calendar.emit(()))
    };

    html! {
        <div class="form-group date-input">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <div class="input-with-button">
                <input
                    id={props.id.clone()}
                    type="text"
                    placeholder="M/D/YYYY"
                    value={props.value.clone()}
                    {oninput}
                />
                <button type="button" class="icon-button" title="Pick a date" onclick={on_calendar_click}>
                    {"📅"}
                </button>
            </div>
        </div>
    }
}
