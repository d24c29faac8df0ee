//! Elaina POS Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use pos_core::PosConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = PosConfig::from_build_env();
    if let Err(e) = rolling_logger::init_logger("ElainaPOS", config.log_capacity) {
        web_sys::console::warn_1(&format!("logger: {}", e).into());
    }
    log::info!("starting against {}", config.api_base_url);
    api::init(&config);

    mount_to_body(move || view! { <App config=config /> });
}
