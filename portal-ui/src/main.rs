mod app;
mod bridge;
mod components;
mod dispatcher;
mod identity;
mod state;

use app::App;
use leptos::*;
use portal_core::PortalConfig;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    mount_to_body(|| view! { <App config=PortalConfig::default()/> });
}
