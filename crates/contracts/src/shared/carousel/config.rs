use super::error::CarouselError;
use serde::{Deserialize, Serialize};

/// Class names used to find and mark carousel markup.
///
/// Defaults match the markup the widget has always shipped with, so a page
/// can bind without any config at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselClasses {
    pub track: String,
    pub slide: String,
    pub indicator: String,
    /// Toggled on the indicator of the current slide.
    pub active: String,
}

impl Default for CarouselClasses {
    fn default() -> Self {
        Self {
            track: "carousel-track".to_string(),
            slide: "carousel-slide".to_string(),
            indicator: "carousel-indicator".to_string(),
            active: "active".to_string(),
        }
    }
}

impl CarouselClasses {
    pub fn track_selector(&self) -> String {
        format!(".{}", self.track)
    }
}

/// One slide rendered by the component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideSpec {
    pub id: String,
    pub image_url: Option<String>,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub caption: Option<String>,
}

/// Carousel configuration, usually embedded in the page as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub classes: CarouselClasses,
    pub slides: Vec<SlideSpec>,
}

impl CarouselConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CarouselError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fail fast when there is nothing to show.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.slides.is_empty() {
            return Err(CarouselError::EmptySlides);
        }
        Ok(())
    }

    /// Built-in slide set used when the page provides no config.
    pub fn demo() -> Self {
        let slides = ["First", "Second", "Third"]
            .iter()
            .enumerate()
            .map(|(i, title)| SlideSpec {
                id: format!("slide-{}", i + 1),
                title: Some(format!("{} slide", title)),
                caption: Some(format!("Slide {} of 3", i + 1)),
                ..Default::default()
            })
            .collect();

        Self {
            classes: CarouselClasses::default(),
            slides,
        }
    }
}
