use super::error::CarouselError;

/// Check that markup carries one indicator per slide.
///
/// Zero slides passes here; the controller reports that case as
/// [`CarouselError::EmptySlides`].
pub fn check_indicator_count(slides: usize, indicators: usize) -> Result<(), CarouselError> {
    if slides > 0 && indicators != slides {
        return Err(CarouselError::IndicatorMismatch { slides, indicators });
    }
    Ok(())
}
