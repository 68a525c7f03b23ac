use shared::time_format::normalize_time;
use shared::{Draft, FieldKind, FieldSpec, FieldValue, LookupKind, TimeRecord};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::date_input::DateInput;

#[derive(Properties, PartialEq)]
pub struct RecordFormModalProps<R: TimeRecord> {
    pub draft: Draft<R>,
    /// (field key, new value)
    pub on_field_change: Callback<(&'static str, FieldValue)>,
    pub on_open_lookup: Callback<(LookupKind, &'static str)>,
    pub on_open_calendar: Callback<&'static str>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

/// Create/edit dialog for any record kind, laid out from `R::fields()`.
#[function_component(RecordFormModal)]
pub fn record_form_modal<R: TimeRecord>(props: &RecordFormModalProps<R>) -> Html {
    let title = if props.draft.is_new() {
        format!("New {}", R::KIND.label())
    } else {
        format!("Edit {}", R::KIND.label())
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal record-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{title}</h3>
                <form class="record-form" onsubmit={on_submit}>
                    {for R::fields().iter().map(|field| render_field(props, field))}

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary">{"Save"}</button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn render_field<R: TimeRecord>(props: &RecordFormModalProps<R>, field: &'static FieldSpec) -> Html {
    let key = field.key;
    let id = format!("field-{}", key);
    let value = props.draft.record.value(key);
    let text = value.as_ref().and_then(|v| v.as_text()).unwrap_or_default().to_string();

    let on_text_input = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((key, FieldValue::Text(input.value())));
        })
    };

    match field.kind {
        FieldKind::Date => {
            let on_input = {
                let on_field_change = props.on_field_change.clone();
                Callback::from(move |value: String| on_field_change.emit((key, FieldValue::Text(value))))
            };
            let on_open_calendar = {
                let on_open_calendar = props.on_open_calendar.clone();
                Callback::from(move |_| on_open_calendar.emit(key))
            };
            html! {
                <DateInput id={id} label={field.label} value={text} {on_input} {on_open_calendar} />
            }
        }
        FieldKind::Time => {
            let on_blur_change = {
                let on_field_change = props.on_field_change.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let raw = input.value();
                    if let Some(normalized) = normalize_time(&raw) {
                        on_field_change.emit((key, FieldValue::Text(normalized)));
                    }
                })
            };
            html! {
                <div class="form-group">
                    <label for={id.clone()}>{field.label}</label>
                    <input
                        id={id}
                        type="text"
                        placeholder="HH:MM"
                        value={text}
                        oninput={on_text_input}
                        onchange={on_blur_change}
                    />
                </div>
            }
        }
        FieldKind::Flag => {
            let checked = value.and_then(|v| v.as_flag()).unwrap_or(false);
            let on_toggle = {
                let on_field_change = props.on_field_change.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_field_change.emit((key, FieldValue::Flag(input.checked())));
                })
            };
            html! {
                <div class="form-group checkbox">
                    <label>
                        <input type="checkbox" {checked} onchange={on_toggle} />
                        {field.label}
                    </label>
                </div>
            }
        }
        FieldKind::Lookup(kind) => {
            let on_lookup_click = {
                let on_open_lookup = props.on_open_lookup.clone();
                Callback::from(move |_: MouseEvent| on_open_lookup.emit((kind, key)))
            };
            html! {
                <div class="form-group">
                    <label for={id.clone()}>{field.label}</label>
                    <div class="input-with-button">
                        <input id={id} type="text" value={text} oninput={on_text_input} />
                        <button type="button" class="icon-button" title={kind.title()} onclick={on_lookup_click}>
                            {"🔍"}
                        </button>
                    </div>
                </div>
            }
        }
        FieldKind::Text | FieldKind::Hours => {
            let input_class = if field.kind == FieldKind::Hours { "hours-input" } else { "text-input" };
            html! {
                <div class="form-group">
                    <label for={id.clone()}>{field.label}</label>
                    <input id={id} class={input_class} type="text" value={text} oninput={on_text_input} />
                </div>
            }
        }
    }
}
