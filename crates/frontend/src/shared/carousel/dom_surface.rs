//! Surface bound to carousel markup that already exists in the page.
//!
//! Elements are looked up by class name once, when the surface is built.

use super::surface::CarouselSurface;
use contracts::shared::carousel::{
    check_indicator_count, track_transform, CarouselClasses, CarouselError,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

#[derive(Debug)]
pub struct DomSurface {
    track: HtmlElement,
    indicators: Vec<Element>,
    slide_count: usize,
    active_class: String,
}

impl DomSurface {
    /// Bind to the first track and to every slide and indicator in `document`.
    pub fn bind(document: &Document, classes: &CarouselClasses) -> Result<Self, CarouselError> {
        let track = document
            .get_elements_by_class_name(&classes.track)
            .item(0)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| CarouselError::MissingElement(classes.track_selector()))?;

        let slide_count = document.get_elements_by_class_name(&classes.slide).length() as usize;

        let collection = document.get_elements_by_class_name(&classes.indicator);
        let indicators: Vec<Element> = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect();

        check_indicator_count(slide_count, indicators.len())?;

        Ok(Self {
            track,
            indicators,
            slide_count,
            active_class: classes.active.clone(),
        })
    }
}

impl CarouselSurface for DomSurface {
    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn set_active(&mut self, index: usize) {
        if let Some(indicator) = self.indicators.get(index) {
            let _ = indicator.class_list().add_1(&self.active_class);
        }
    }

    fn clear_active(&mut self, index: usize) {
        if let Some(indicator) = self.indicators.get(index) {
            let _ = indicator.class_list().remove_1(&self.active_class);
        }
    }

    fn set_offset(&mut self, offset_percent: i64) {
        let _ = self
            .track
            .style()
            .set_property("transform", &track_transform(offset_percent));
    }
}
