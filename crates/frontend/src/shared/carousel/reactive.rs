use super::surface::CarouselSurface;
use leptos::prelude::*;

/// Surface backed by signals, one per indicator plus one for the track.
/// The `<Carousel/>` view reads them; the controller writes them.
#[derive(Debug, Clone)]
pub struct ReactiveSurface {
    indicators: Vec<RwSignal<bool>>,
    offset: RwSignal<i64>,
}

impl ReactiveSurface {
    pub fn new(slide_count: usize) -> Self {
        Self {
            indicators: (0..slide_count).map(|_| RwSignal::new(false)).collect(),
            offset: RwSignal::new(0),
        }
    }

    pub fn indicators(&self) -> Vec<RwSignal<bool>> {
        self.indicators.clone()
    }

    pub fn offset(&self) -> RwSignal<i64> {
        self.offset
    }
}

impl CarouselSurface for ReactiveSurface {
    fn slide_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_active(&mut self, index: usize) {
        if let Some(active) = self.indicators.get(index) {
            active.set(true);
        }
    }

    fn clear_active(&mut self, index: usize) {
        // skip untouched dots so only the two that change re-render
        if let Some(active) = self.indicators.get(index) {
            if active.get_untracked() {
                active.set(false);
            }
        }
    }

    fn set_offset(&mut self, offset_percent: i64) {
        self.offset.set(offset_percent);
    }
}
