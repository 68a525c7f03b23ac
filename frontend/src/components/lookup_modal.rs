use shared::lookup;
use shared::LookupKind;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LookupModalProps {
    pub kind: LookupKind,
    /// Receives the code of the clicked row
    pub on_select: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(LookupModal)]
pub fn lookup_modal(props: &LookupModalProps) -> Html {
    let query = use_state(String::new);
    let matches = lookup::search(props.kind, &query);

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
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
        <div class="modal-backdrop lookup-backdrop" onclick={on_backdrop_click}>
            <div class="modal lookup-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{props.kind.title()}</h3>

                <input
                    type="text"
                    class="lookup-query"
                    placeholder="Type a code or description"
                    value={(*query).clone()}
                    oninput={on_query_input}
                    autofocus=true
                />

                <div class="table-container">
                    <table class="lookup-table">
                        <thead>
                            <tr>
                                <th>{"Code"}</th>
                                <th>{"Description"}</th>
                                <th>{props.kind.detail_label()}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {if matches.is_empty() {
                                html! {
                                    <tr><td colspan="3" class="empty">{"No matches"}</td></tr>
                                }
                            } else {
                                html! {
                                    {for matches.iter().map(|entry| {
                                        let on_select = props.on_select.clone();
                                        let code = entry.code.to_string();
                                        html! {
                                            <tr class="selectable" onclick={Callback::from(move |_: MouseEvent| on_select.emit(code.clone()))}>
                                                <td>{entry.code}</td>
                                                <td>{entry.description}</td>
                                                <td>{entry.detail}</td>
                                            </tr>
                                        }
                                    })}
                                }
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="modal-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                </div>
            </div>
        </div>
    }
}
