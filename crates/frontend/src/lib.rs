pub mod app;
pub mod shared;

use app::App;
use contracts::shared::carousel::{CarouselConfig, CarouselError};
use leptos::prelude::*;
use shared::carousel::page;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` holding the config.
const CONFIG_ELEMENT_ID: &str = "carousel-config";

/// Read the JSON config embedded in the page, if any.
fn read_page_config(document: &Document) -> Result<Option<CarouselConfig>, CarouselError> {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Ok(None);
    };
    CarouselConfig::from_json(&json).map(Some)
}

/// Page-ready handler: bind existing markup, or render the component.
fn run() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("carousel: no document available");
        return;
    };

    let mut config = match read_page_config(&document) {
        Ok(Some(config)) => config,
        Ok(None) => CarouselConfig::default(),
        Err(err) => {
            log::error!("carousel: {}, using defaults", err);
            CarouselConfig::default()
        }
    };

    if page::has_page_markup(&document, &config.classes) {
        if let Err(err) = page::bind_page(&document, &config.classes) {
            log::error!("carousel: failed to bind page markup: {}", err);
        }
        return;
    }

    if let Err(err) = config.validate() {
        log::info!("carousel: {}, showing demo set", err);
        config.slides = CarouselConfig::demo().slides;
    }
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

fn boot() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    page::on_page_ready(run);
}

#[wasm_bindgen(start)]
pub fn start() {
    boot();
}
