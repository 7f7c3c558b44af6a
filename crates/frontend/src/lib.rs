pub mod app;
pub mod domain;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::shared::config::{load_config, WidgetConfig};

/// Id of the element the host page reserves for the widget
pub const MOUNT_ID: &str = "calculator-widget";

pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(container) = document
        .get_element_by_id(MOUNT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::debug!("#{} not found, calculator widget not mounted", MOUNT_ID);
        return;
    };

    let overrides = container.get_attribute("data-config");
    let config = load_config(overrides.as_deref()).unwrap_or_else(|e| {
        log::error!("{}, falling back to defaults", e);
        WidgetConfig::default()
    });

    leptos::mount::mount_to(container, move || view! { <App config=config /> }).forget();
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
