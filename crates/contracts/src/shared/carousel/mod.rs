mod binding;
mod config;
mod error;
mod navigation;

pub use binding::check_indicator_count;
pub use config::{CarouselClasses, CarouselConfig, SlideSpec};
pub use error::CarouselError;
pub use navigation::{index_from_js, normalize_index, track_offset_percent, track_transform};
