//! Slide carousel: controller, render surfaces and the leptos component.

mod component;
mod controller;
mod dom_surface;
pub mod page;
mod reactive;
mod surface;

pub use component::Carousel;
pub use controller::CarouselController;
pub use dom_surface::DomSurface;
pub use reactive::ReactiveSurface;
pub use surface::CarouselSurface;
