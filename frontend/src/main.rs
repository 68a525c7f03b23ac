use shared::{AppConfig, OtGap, RawLog, Screen};
use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::header::Header;
use hooks::use_modal_stack::{use_modal_provider, ModalContext};
use pages::processed_data::ProcessedDataPage;
use pages::record_page::RecordPage;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let screen = use_state(|| props.config.default_screen);
    let seed_sample_data = props.config.seed_sample_data;
    let modals = use_modal_provider();

    let on_navigate = {
        let screen = screen.clone();
        let modals = modals.clone();
        Callback::from(move |next: Screen| {
            log::debug!("navigating to {}", next.label());
            modals.close_all();
            screen.set(next);
        })
    };

    // Screens stay mounted so their in-memory records survive navigation.
    html! {
        <ContextProvider<ModalContext> context={modals}>
        <div class="app">
            <Header active={*screen} {on_navigate} />
            <main class="container">
                <div hidden={*screen != Screen::RawData}>
                    <RecordPage<RawLog> {seed_sample_data} />
                </div>
                <div hidden={*screen != Screen::OtGap}>
                    <RecordPage<OtGap> {seed_sample_data} />
                </div>
                <div hidden={*screen != Screen::ProcessedData}>
                    <ProcessedDataPage {seed_sample_data} />
                </div>
            </main>
        </div>
        </ContextProvider<ModalContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match services::config::load_config() {
        Ok(stored) => (stored.unwrap_or_default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    services::logging::init(config.level());
    if let Some(e) = config_error {
        log::warn!("using default configuration: {:#}", e);
    }
    log::info!("starting timekeeping screens on {}", config.default_screen.label());

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
