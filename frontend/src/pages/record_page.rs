use std::marker::PhantomData;

use shared::calendar::parse_display_date;
use shared::filter::QUERY_KEY;
use shared::sample::sample_records;
use shared::{
    Draft, DraftError, DraftTarget, FieldValue, InMemoryRepository, LookupKind, ModalId, MonthCursor,
    RecordRepository, SearchFilter, TimeRecord,
};
use uuid::Uuid;
use yew::prelude::*;

use crate::components::calendar_popup::CalendarPopup;
use crate::components::lookup_modal::LookupModal;
use crate::components::record_form_modal::RecordFormModal;
use crate::components::record_table::RecordTable;
use crate::components::search_bar::SearchBar;
use crate::hooks::use_modal_stack::use_modal_stack;
use crate::services::logging::Logger;

/// Where a value picked in a lookup or calendar popup is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// A search bar field
    Filter,
    /// A field of the open record form
    Form,
}

/// Lookup and calendar results land either in the search bar or in the
/// open form, depending on the key they were opened for.
pub fn pick_target(filter: &SearchFilter, key: &str) -> PickTarget {
    if filter.get(key).is_some() {
        PickTarget::Filter
    } else {
        PickTarget::Form
    }
}

/// A draft outlives its form only until the next render.
fn is_stale_draft<R: TimeRecord>(dialogs: &[ModalId], draft: &Option<Draft<R>>) -> bool {
    draft.is_some() && !dialogs.contains(&ModalId::RecordForm)
}

#[derive(Properties, PartialEq)]
pub struct RecordPageProps<R: TimeRecord> {
    /// Start with demo records instead of an empty table
    #[prop_or_default]
    pub seed_sample_data: bool,
    #[prop_or_default]
    _kind: PhantomData<R>,
}

/// Search bar, table and dialogs for one record kind.
#[function_component(RecordPage)]
pub fn record_page<R: TimeRecord>(props: &RecordPageProps<R>) -> Html {
    let repository = use_state(|| {
        let records = if props.seed_sample_data { sample_records::<R>() } else { Vec::new() };
        InMemoryRepository::with_records(records)
    });
    let filter = use_state(SearchFilter::default);
    let draft = use_state(|| Option::<Draft<R>>::None);
    let modals = use_modal_stack(R::KIND);
    let component = R::KIND.label();

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |(key, value): (&'static str, String)| {
            let mut next = (*filter).clone();
            next.set(key, value);
            filter.set(next);
        })
    };

    let on_filter_clear = {
        let filter = filter.clone();
        Callback::from(move |_| filter.set(SearchFilter::default()))
    };

    let on_field_change = {
        let draft = draft.clone();
        Callback::from(move |(key, value): (&'static str, FieldValue)| {
            if let Some(mut next) = (*draft).clone() {
                next.set(key, value);
                draft.set(Some(next));
            }
        })
    };

    let assign = {
        let on_filter_change = on_filter_change.clone();
        let on_field_change = on_field_change.clone();
        let filter = filter.clone();
        Callback::from(move |(key, value): (&'static str, String)| match pick_target(&filter, key) {
            PickTarget::Filter => on_filter_change.emit((key, value)),
            PickTarget::Form => on_field_change.emit((key, FieldValue::Text(value))),
        })
    };

    // Escape or a screen switch can close the form without going through
    // `on_form_close`; drop the buffer whenever the form leaves the stack.
    {
        let draft = draft.clone();
        let form_open = modals.dialogs.contains(&ModalId::RecordForm);
        let dialogs = modals.dialogs.clone();
        use_effect_with(form_open, move |_| {
            if is_stale_draft(&dialogs, &*draft) {
                draft.set(None);
            }
            || ()
        });
    }

    let on_new = {
        let draft = draft.clone();
        let open = modals.actions.open.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(Some(Draft::new()));
            open.emit(ModalId::RecordForm);
        })
    };

    let on_edit = {
        let draft = draft.clone();
        let repository = repository.clone();
        let open = modals.actions.open.clone();
        Callback::from(move |id: Uuid| match repository.get(id) {
            Some(record) => {
                draft.set(Some(Draft::edit(&record)));
                open.emit(ModalId::RecordForm);
            }
            None => Logger::warn_with_component(component, &format!("edit requested for missing record {}", id)),
        })
    };

    let on_delete = {
        let repository = repository.clone();
        Callback::from(move |id: Uuid| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this record?") {
                return;
            }
            let mut next = (*repository).clone();
            match next.delete(id) {
                Ok(removed) => {
                    Logger::info_with_component(component, &format!("deleted {} ({})", removed.id(), removed.employee_code()));
                    repository.set(next);
                }
                Err(e) => Logger::error_with_component(component, &e.to_string()),
            }
        })
    };

    let on_form_close = {
        let draft = draft.clone();
        let close = modals.actions.close.clone();
        Callback::from(move |_| {
            draft.set(None);
            close.emit(ModalId::RecordForm);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let repository = repository.clone();
        let on_form_close = on_form_close.clone();
        Callback::from(move |_| {
            let Some(current) = (*draft).clone() else {
                return;
            };
            let action = match current.target {
                DraftTarget::New => "created",
                DraftTarget::Existing(_) => "updated",
            };
            let mut next = (*repository).clone();
            match current.commit(&mut next) {
                Ok(saved) => {
                    Logger::info_with_component(component, &format!("{} {} ({})", action, saved.id(), saved.employee_code()));
                    repository.set(next);
                    on_form_close.emit(());
                }
                Err(DraftError::Invalid(e)) => gloo::dialogs::alert(&e.to_string()),
                Err(e) => {
                    Logger::error_with_component(component, &e.to_string());
                    gloo::dialogs::alert(&format!("Could not save the record: {}", e));
                }
            }
        })
    };

    let on_open_lookup = {
        let open = modals.actions.open.clone();
        Callback::from(move |(kind, key): (LookupKind, &'static str)| open.emit(ModalId::Lookup(kind, key)))
    };

    let on_open_calendar = {
        let open = modals.actions.open.clone();
        Callback::from(move |key: &'static str| open.emit(ModalId::Calendar(key)))
    };

    let on_open_employee_lookup = {
        let on_open_lookup = on_open_lookup.clone();
        Callback::from(move |_| on_open_lookup.emit((LookupKind::Employee, QUERY_KEY)))
    };

    let current_text = |key: &str| -> String {
        if let Some(value) = filter.get(key) {
            return value.to_string();
        }
        (*draft)
            .as_ref()
            .and_then(|draft| draft.record.value(key))
            .and_then(|value| value.as_text().map(str::to_string))
            .unwrap_or_default()
    };

    let render_modal = |id: ModalId| -> Html {
        let close = {
            let close = modals.actions.close.clone();
            Callback::from(move |_| close.emit(id))
        };

        let content = match id {
            ModalId::RecordForm => match (*draft).clone() {
                Some(draft) => html! {
                    <RecordFormModal<R>
                        {draft}
                        on_field_change={on_field_change.clone()}
                        on_open_lookup={on_open_lookup.clone()}
                        on_open_calendar={on_open_calendar.clone()}
                        on_submit={on_submit.clone()}
                        on_close={on_form_close.clone()}
                    />
                },
                None => html! {},
            },
            ModalId::Lookup(kind, key) => {
                let on_select = {
                    let assign = assign.clone();
                    let close = close.clone();
                    Callback::from(move |code: String| {
                        assign.emit((key, code));
                        close.emit(());
                    })
                };
                html! { <LookupModal {kind} {on_select} on_close={close} /> }
            }
            ModalId::Calendar(key) => {
                let seed = parse_display_date(&current_text(key)).map(MonthCursor::from_date);
                let on_date_select = {
                    let assign = assign.clone();
                    Callback::from(move |date: String| assign.emit((key, date)))
                };
                html! { <CalendarPopup {seed} {on_date_select} on_close={close} /> }
            }
        };

        html! {
            <div class="modal-layer" key={format!("{:?}", id)}>
                {content}
            </div>
        }
    };

    let records = repository.list();
    let visible: Vec<R> = filter.apply(&records).into_iter().cloned().collect();

    html! {
        <section class="record-page">
            <div class="record-page-header">
                <h2>{component}</h2>
                <button type="button" class="btn btn-primary" onclick={on_new}>{"New"}</button>
            </div>

            <SearchBar
                filter={(*filter).clone()}
                on_change={on_filter_change.clone()}
                on_open_calendar={on_open_calendar.clone()}
                {on_open_employee_lookup}
                on_clear={on_filter_clear}
            />

            <div class="record-count">
                {format!("Showing {} of {} records", visible.len(), records.len())}
            </div>

            <RecordTable<R> records={visible} {on_edit} {on_delete} />

            {for modals.dialogs.iter().copied().map(render_modal)}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::filter::{DATE_FROM_KEY, DATE_TO_KEY};
    use shared::RawLog;

    #[test]
    fn test_search_bar_keys_route_to_filter() {
        let filter = SearchFilter::default();
        for key in [QUERY_KEY, DATE_FROM_KEY, DATE_TO_KEY] {
            assert_eq!(pick_target(&filter, key), PickTarget::Filter, "{}", key);
        }
    }

    #[test]
    fn test_record_keys_route_to_form() {
        let filter = SearchFilter::default();
        for key in ["employee_code", "date", "device_code", "workshift_code"] {
            assert_eq!(pick_target(&filter, key), PickTarget::Form, "{}", key);
        }
    }

    #[test]
    fn test_routing_ignores_filter_contents() {
        let mut filter = SearchFilter::default();
        filter.set(QUERY_KEY, "EMP-0001".to_string());
        filter.set(DATE_FROM_KEY, "3/1/2025".to_string());
        assert_eq!(pick_target(&filter, DATE_FROM_KEY), PickTarget::Filter);
        assert_eq!(pick_target(&filter, "date"), PickTarget::Form);
    }

    #[test]
    fn test_draft_is_dropped_once_form_leaves_the_stack() {
        let draft = Some(Draft::<RawLog>::new());
        let with_form = [ModalId::RecordForm, ModalId::Calendar("date")];
        assert!(!is_stale_draft(&with_form, &draft));

        // Escape popped the form while a search-bar calendar stays open
        let after_escape = [ModalId::Calendar(DATE_FROM_KEY)];
        assert!(is_stale_draft(&after_escape, &draft));
        assert!(is_stale_draft(&[], &draft));
        assert!(!is_stale_draft::<RawLog>(&[], &None));
    }
}
