/// What the controller needs from whatever renders the carousel.
///
/// Implementations are handed to [`super::CarouselController`] once at
/// construction; the controller never looks anything up on its own.
pub trait CarouselSurface {
    /// Number of slides. Fixed for the lifetime of the surface.
    fn slide_count(&self) -> usize;

    /// Mark the indicator at `index` as active.
    fn set_active(&mut self, index: usize);

    /// Remove the active mark from the indicator at `index`.
    fn clear_active(&mut self, index: usize);

    /// Move the track to `offset_percent` of one slide width.
    fn set_offset(&mut self, offset_percent: i64);
}
