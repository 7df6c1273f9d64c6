pub mod api;
pub mod components;
pub mod config;
pub mod export;
pub mod notifications;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {}", err).into());
    }
    log::info!("Starting Travel Request Admin (wasm)");

    // Resolve ./config.json or window.__TRAVEL_ADMIN_ENV in the background.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
