use shared::{
    Adjustment, Advanced, HoursPerDay, LeaveAbsence, OtherEarning, Overtime, ProcessedTab, Tardiness,
    Undertime,
};
use yew::prelude::*;

use super::record_page::RecordPage;
use crate::hooks::use_modal_stack::ModalContext;

#[derive(Properties, PartialEq)]
pub struct ProcessedDataPageProps {
    pub seed_sample_data: bool,
}

/// Tabbed screen over every processed-data record kind. All tabs stay
/// mounted so switching tabs keeps their records and search filters.
#[function_component(ProcessedDataPage)]
pub fn processed_data_page(props: &ProcessedDataPageProps) -> Html {
    let active_tab = use_state(|| ProcessedTab::HoursPerDay);
    let seed_sample_data = props.seed_sample_data;
    let modals = use_context::<ModalContext>();

    let tab_panel = |tab: ProcessedTab, content: Html| {
        html! {
            <div class="tab-panel" hidden={*active_tab != tab}>
                {content}
            </div>
        }
    };

    html! {
        <section class="processed-data">
            <nav class="tab-strip">
                {for ProcessedTab::ALL.iter().map(|tab| {
                    let tab = *tab;
                    let is_active = *active_tab == tab;
                    let active_tab = active_tab.clone();
                    let modals = modals.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        if let Some(modals) = &modals {
                            modals.close_all();
                        }
                        active_tab.set(tab);
                    });
                    html! {
                        <button
                            type="button"
                            class={classes!("tab", is_active.then_some("active"))}
                            {onclick}
                        >
                            {tab.label()}
                        </button>
                    }
                })}
            </nav>

            {tab_panel(ProcessedTab::HoursPerDay, html! { <RecordPage<HoursPerDay> {seed_sample_data} /> })}
            {tab_panel(ProcessedTab::Tardiness, html! { <RecordPage<Tardiness> {seed_sample_data} /> })}
            {tab_panel(ProcessedTab::Undertime, html! { <RecordPage<Undertime> {seed_sample_data} /> })}
            {tab_panel(ProcessedTab::Overtime, html! { <RecordPage<Overtime> {seed_sample_data} /> })}
            {tab_panel(ProcessedTab::LeaveAbsence, html! { <RecordPage<LeaveAbsence> {seed_sample_data} /> })}
            {tab_panel(ProcessedTab::OtherEarning, html! { <RecordPage<OtherEarning> {seed_sample_data} /> })}
            {tab_panel(ProcessedTab::Adjustment, html! { <RecordPage<Adjustment> {seed_sample_data} /> })}
            {tab_panel(ProcessedTab::Advanced, html! { <RecordPage<Advanced> {seed_sample_data} /> })}
        </section>
    }
}
