use super::controller::CarouselController;
use super::reactive::ReactiveSurface;
use crate::shared::icons::icon;
use contracts::shared::carousel::{track_transform, CarouselConfig, SlideSpec};
use leptos::prelude::*;

/// Carousel rendered from a [`CarouselConfig`].
///
/// Uses the same class names as server-rendered markup so one stylesheet
/// covers both. Each instance owns its controller, so several carousels can
/// share a page.
#[component]
pub fn Carousel(
    /// Slides and class names
    config: CarouselConfig,
) -> impl IntoView {
    let CarouselConfig { classes, slides } = config;

    let surface = ReactiveSurface::new(slides.len());
    let indicators = surface.indicators();
    let offset = surface.offset();

    let controller = match CarouselController::new(surface) {
        Ok(controller) => controller,
        Err(err) => {
            log::error!("carousel: {}", err);
            return view! {
                <div class="carousel carousel--error">{err.to_string()}</div>
            }
            .into_any();
        }
    };
    let controller = StoredValue::new(controller);
    controller.update_value(|c| c.start());

    let slide_class = classes.slide.clone();
    let slide_views = slides
        .into_iter()
        .map(|slide| slide_view(slide, slide_class.clone()))
        .collect_view();

    let dots = indicators
        .into_iter()
        .enumerate()
        .map(|(i, active)| {
            let base = classes.indicator.clone();
            let active_class = format!("{} {}", classes.indicator, classes.active);
            view! {
                <button
                    class=move || {
                        if active.get() { active_class.clone() } else { base.clone() }
                    }
                    title=format!("Slide {}", i + 1)
                    on:click=move |_| controller.update_value(|c| c.go_to_slide(i as i64))
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="carousel">
            <div class="carousel-viewport">
                <div
                    class=classes.track.clone()
                    style=move || format!("transform: {};", track_transform(offset.get()))
                >
                    {slide_views}
                </div>
            </div>
            <button
                class="carousel-control carousel-control--prev"
                on:click=move |_| controller.update_value(|c| c.prev_slide())
                title="Previous slide"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="carousel-control carousel-control--next"
                on:click=move |_| controller.update_value(|c| c.next_slide())
                title="Next slide"
            >
                {icon("chevron-right")}
            </button>
            <div class="carousel-indicators">{dots}</div>
        </div>
    }
    .into_any()
}

fn slide_view(slide: SlideSpec, class: String) -> impl IntoView {
    let SlideSpec {
        id,
        image_url,
        alt,
        title,
        caption,
    } = slide;

    let image = image_url.map(|src| {
        view! { <img src=src alt=alt.unwrap_or_default() /> }
    });
    let title = title.map(|t| view! { <h3 class="carousel-slide__title">{t}</h3> });
    let caption = caption.map(|c| view! { <p class="carousel-slide__caption">{c}</p> });

    view! {
        <div class=class data-slide-id=id>
            {image}
            {title}
            {caption}
        </div>
    }
}
