use shared::Screen;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: Screen,
    pub on_navigate: Callback<Screen>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Timekeeping"}</h1>
                <nav class="header-nav">
                    {for Screen::ALL.iter().map(|screen| {
                        let screen = *screen;
                        let on_navigate = props.on_navigate.clone();
                        html! {
                            <button
                                type="button"
                                class={classes!("nav-link", (screen == props.active).then_some("active"))}
                                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(screen))}
                            >
                                {screen.label()}
                            </button>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}
