/// Quiz Popup - browser extension that serves trivia questions by category
/// Built with Rust + WASM + Yew

pub mod config;
pub mod controller;
pub mod question;
pub mod random;
pub mod source;
pub mod storage;
pub mod view;
pub mod ui;

#[cfg(test)]
mod testing;

use config::{ConfigOverrides, QuizConfig};
use wasm_bindgen::prelude::*;

// Set up panic hook and logging for the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the popup with the compiled configuration
#[wasm_bindgen]
pub fn start_popup() -> Result<(), JsValue> {
    start_popup_with_config(JsValue::UNDEFINED)
}

/// Start the popup, overriding configuration from a JS object such as
/// `{ endpoint: "https://...", categories: ["Cypress", "Playwright"] }`
#[wasm_bindgen]
pub fn start_popup_with_config(options: JsValue) -> Result<(), JsValue> {
    let overrides: ConfigOverrides = if options.is_null() || options.is_undefined() {
        ConfigOverrides::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| js_error(&format!("Invalid popup options: {}", e)))?
    };

    let config = QuizConfig::from_overrides(overrides).map_err(|e| js_error(&e.to_string()))?;
    log::info!("Starting quiz popup against {}", config.endpoint);

    yew::Renderer::<ui::popup::App>::with_props(ui::popup::AppProps { config }).render();
    Ok(())
}

fn js_error(message: &str) -> JsValue {
    log::error!("{}", message);
    js_sys::Error::new(message).into()
}
