mod config;
mod csrf;
mod env_variable_utils;
mod error;
mod feedback;
mod http;
mod models;
mod router;
mod search;
mod services;
mod shortcuts;
mod tabs;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, BACKEND_URL};
use crate::router::{switch, Route};
use crate::services::AppServices;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| AppServices::new(BACKEND_URL.as_str()));

    html! {
        <ContextProvider<AppServices> context={(*services).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AppServices>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if is_debug_mode() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        &*BACKEND_URL,
        is_debug_mode()
    );

    yew::Renderer::<App>::new().render();
}
