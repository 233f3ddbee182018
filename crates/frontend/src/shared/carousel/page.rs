//! Page-level carousel bound to server-rendered markup.
//!
//! Markup produced outside Rust calls `nextSlide()`, `prevSlide()` and
//! `goToSlide(i)` from `onclick` attributes; those names are exported here
//! and forwarded to the one controller bound to the page.

use super::controller::CarouselController;
use super::dom_surface::DomSurface;
use contracts::shared::carousel::{index_from_js, CarouselClasses, CarouselError};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

thread_local! {
    static PAGE_CAROUSEL: RefCell<Option<CarouselController<DomSurface>>> = const { RefCell::new(None) };
}

/// Run `callback` once the document has been parsed.
///
/// If the page is already past `loading` the callback runs right away,
/// otherwise it is registered for `DOMContentLoaded`.
pub fn on_page_ready(callback: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("carousel: no document, page-ready hook not installed");
        return;
    };

    if document.ready_state() != "loading" {
        callback();
        return;
    }

    let listener: Closure<dyn FnMut()> = Closure::once(callback);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", listener.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("carousel: failed to register DOMContentLoaded listener");
    }
    // lives for the page lifetime
    listener.forget();
}

/// Whether `document` already contains carousel markup to bind to.
pub fn has_page_markup(document: &Document, classes: &CarouselClasses) -> bool {
    document.get_elements_by_class_name(&classes.track).length() > 0
}

/// Bind the page-level controller and show the first slide.
/// A second call leaves the existing binding in place.
pub fn bind_page(document: &Document, classes: &CarouselClasses) -> Result<(), CarouselError> {
    if PAGE_CAROUSEL.with(|cell| cell.borrow().is_some()) {
        log::warn!("carousel: page carousel already bound");
        return Ok(());
    }

    let surface = DomSurface::bind(document, classes)?;
    let mut controller = CarouselController::new(surface)?;
    controller.start();
    log::info!("carousel: bound {} slides", controller.slide_count());

    PAGE_CAROUSEL.with(|cell| *cell.borrow_mut() = Some(controller));
    Ok(())
}

fn with_page_carousel(action: &str, f: impl FnOnce(&mut CarouselController<DomSurface>)) {
    PAGE_CAROUSEL.with(|cell| match cell.borrow_mut().as_mut() {
        Some(controller) => f(controller),
        None => log::warn!("carousel: {} ignored, no carousel bound", action),
    });
}

#[wasm_bindgen(js_name = nextSlide)]
pub fn next_slide() {
    with_page_carousel("nextSlide", |c| c.next_slide());
}

#[wasm_bindgen(js_name = prevSlide)]
pub fn prev_slide() {
    with_page_carousel("prevSlide", |c| c.prev_slide());
}

#[wasm_bindgen(js_name = goToSlide)]
pub fn go_to_slide(index: f64) {
    with_page_carousel("goToSlide", |c| c.go_to_slide(index_from_js(index)));
}

/// Index of the slide shown by the page-level carousel, if one is bound.
#[wasm_bindgen(js_name = currentSlide)]
pub fn current_slide() -> Option<u32> {
    PAGE_CAROUSEL.with(|cell| cell.borrow().as_ref().map(|c| c.current_index() as u32))
}
