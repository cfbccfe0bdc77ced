//! WebAssembly entry point of the portal.
//!
//! Hydrates the server-rendered shell so the navigation bar's menu toggle,
//! scroll tracking and client-side routing become interactive.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the Leptos application on the client.
///
/// Installs `console_log` and `console_error_panic_hook`, then mounts
/// `app::component` onto the server-rendered body.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    log::debug!("hydrating portal shell");
    leptos::mount::hydrate_body(component);
}

const fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
