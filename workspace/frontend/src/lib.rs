use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
mod router;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use crate::common::toast::ToastProvider;
use router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Flight Delay Predictor Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction service: {}", settings.api_base_url);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
