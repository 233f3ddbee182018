use crate::shared::carousel::Carousel;
use contracts::shared::carousel::CarouselConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: CarouselConfig) -> impl IntoView {
    view! {
        <main class="carousel-page">
            <Carousel config=config />
        </main>
    }
}
