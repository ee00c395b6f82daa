mod api;
mod app;
mod components;
mod containers;
mod format;
mod models;
mod pages;
mod routes;

use app::App;
use models::app_state::AppState;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::Dispatch;
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    let cx = yewdux::Context::new();
    Dispatch::<AppState>::new(&cx).set(AppState::default());

    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    Renderer::<Root>::new().render();
}
