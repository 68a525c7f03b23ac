use shared::TimeRecord;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecordTableProps<R: TimeRecord> {
    pub records: Vec<R>,
    pub on_edit: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
}

#[function_component(RecordTable)]
pub fn record_table<R: TimeRecord>(props: &RecordTableProps<R>) -> Html {
    let fields = R::fields();

    html! {
        <div class="table-container">
            <table class="records-table">
                <thead>
                    <tr>
                        {for fields.iter().map(|field| html! { <th>{field.label}</th> })}
                        <th class="actions">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.records.is_empty() {
                        html! {
                            <tr>
                                <td class="empty" colspan={(fields.len() + 1).to_string()}>{"No records found"}</td>
                            </tr>
                        }
                    } else {
                        html! {
                            {for props.records.iter().map(|record| {
                                let id = record.id();
                                let on_edit = {
                                    let on_edit = props.on_edit.clone();
                                    Callback::from(move |_: MouseEvent| on_edit.emit(id))
                                };
                                let on_delete = {
                                    let on_delete = props.on_delete.clone();
                                    Callback::from(move |_: MouseEvent| on_delete.emit(id))
                                };

                                html! {
                                    <tr key={id.to_string()}>
                                        {for record.row().into_iter().map(|cell| html! { <td>{cell}</td> })}
                                        <td class="actions">
                                            <button type="button" class="btn btn-small" onclick={on_edit}>{"Edit"}</button>
                                            <button type="button" class="btn btn-small btn-danger" onclick={on_delete}>{"Delete"}</button>
                                        </td>
                                    </tr>
                                }
                            })}
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
