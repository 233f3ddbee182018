//! Carousel controller: owns the current slide index and keeps the surface
//! in sync with it.

use super::surface::CarouselSurface;
use contracts::shared::carousel::{normalize_index, track_offset_percent, CarouselError};

/// Tracks the current slide of one carousel.
///
/// `current` always stays within `0..total`. Every navigation call wraps
/// the requested index and then redraws the surface in a fixed order:
/// clear every indicator, mark the current one, move the track.
#[derive(Debug)]
pub struct CarouselController<S: CarouselSurface> {
    surface: S,
    total: usize,
    current: usize,
}

impl<S: CarouselSurface> CarouselController<S> {
    /// Take ownership of `surface`. Fails with [`CarouselError::EmptySlides`]
    /// when there is nothing to cycle through. The surface is not touched
    /// until [`start`](Self::start) or a navigation call.
    pub fn new(surface: S) -> Result<Self, CarouselError> {
        let total = surface.slide_count();
        if total == 0 {
            return Err(CarouselError::EmptySlides);
        }
        Ok(Self {
            surface,
            total,
            current: 0,
        })
    }

    /// Page-ready initialisation: show the first slide.
    pub fn start(&mut self) {
        self.go_to_slide(0);
    }

    /// Jump to `index`, wrapping anything out of range.
    pub fn go_to_slide(&mut self, index: i64) {
        let previous = self.current;
        self.current = normalize_index(index, self.total);

        for i in 0..self.total {
            self.surface.clear_active(i);
        }
        self.surface.set_active(self.current);
        self.surface.set_offset(track_offset_percent(self.current));

        log::debug!(
            "carousel: requested {} -> slide {} (was {}, total {})",
            index,
            self.current,
            previous,
            self.total
        );
    }

    pub fn next_slide(&mut self) {
        self.go_to_slide(self.current as i64 + 1);
    }

    pub fn prev_slide(&mut self) {
        self.go_to_slide(self.current as i64 - 1);
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.total
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(usize),
        Set(usize),
        Offset(i64),
    }

    /// In-memory surface that records every call.
    #[derive(Debug)]
    struct FakeSurface {
        active: Vec<bool>,
        offset: Option<i64>,
        calls: Vec<Call>,
    }

    impl FakeSurface {
        fn new(slides: usize) -> Self {
            Self {
                active: vec![false; slides],
                offset: None,
                calls: Vec::new(),
            }
        }

        fn active_count(&self) -> usize {
            self.active.iter().filter(|a| **a).count()
        }

        fn active_index(&self) -> Option<usize> {
            self.active.iter().position(|a| *a)
        }
    }

    impl CarouselSurface for FakeSurface {
        fn slide_count(&self) -> usize {
            self.active.len()
        }

        fn set_active(&mut self, index: usize) {
            self.active[index] = true;
            self.calls.push(Call::Set(index));
        }

        fn clear_active(&mut self, index: usize) {
            self.active[index] = false;
            self.calls.push(Call::Clear(index));
        }

        fn set_offset(&mut self, offset_percent: i64) {
            self.offset = Some(offset_percent);
            self.calls.push(Call::Offset(offset_percent));
        }
    }

    fn controller(slides: usize) -> CarouselController<FakeSurface> {
        let mut c = CarouselController::new(FakeSurface::new(slides)).unwrap();
        c.start();
        c
    }

    fn assert_state(c: &CarouselController<FakeSurface>, index: usize, offset: i64) {
        assert_eq!(c.current_index(), index);
        assert_eq!(c.surface().active_count(), 1);
        assert_eq!(c.surface().active_index(), Some(index));
        assert_eq!(c.surface().offset, Some(offset));
    }

    #[test]
    fn test_empty_surface_is_rejected() {
        let err = CarouselController::new(FakeSurface::new(0)).unwrap_err();
        assert_eq!(err, CarouselError::EmptySlides);
    }

    #[test]
    fn test_new_does_not_touch_surface() {
        let c = CarouselController::new(FakeSurface::new(2)).unwrap();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.slide_count(), 2);
        assert!(c.surface().calls.is_empty());
    }

    #[test]
    fn test_three_slide_walkthrough() {
        let mut c = controller(3);
        assert_state(&c, 0, 0);

        c.next_slide();
        assert_state(&c, 1, -100);
        c.next_slide();
        assert_state(&c, 2, -200);
        c.next_slide();
        assert_state(&c, 0, 0);
        c.prev_slide();
        assert_state(&c, 2, -200);
        c.go_to_slide(1);
        assert_state(&c, 1, -100);
    }

    #[test]
    fn test_sync_order() {
        let mut c = CarouselController::new(FakeSurface::new(3)).unwrap();
        c.go_to_slide(2);
        assert_eq!(
            c.surface().calls,
            vec![
                Call::Clear(0),
                Call::Clear(1),
                Call::Clear(2),
                Call::Set(2),
                Call::Offset(-200),
            ]
        );
    }

    #[test]
    fn test_wraparound_laws() {
        for n in 1..=6usize {
            let mut c = controller(n);

            c.go_to_slide(n as i64);
            assert_eq!(c.current_index(), 0, "goto(N) for N={}", n);

            c.go_to_slide(-1);
            assert_eq!(c.current_index(), n - 1, "goto(-1) for N={}", n);

            c.go_to_slide(n as i64 + 5);
            assert_eq!(c.current_index(), 0, "goto(N+5) for N={}", n);

            c.go_to_slide(-5);
            assert_eq!(c.current_index(), n - 1, "goto(-5) for N={}", n);
        }
    }

    #[test]
    fn test_next_from_last_and_prev_from_first() {
        let mut c = controller(4);
        c.go_to_slide(3);
        c.next_slide();
        assert_state(&c, 0, 0);
        c.prev_slide();
        assert_state(&c, 3, -300);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut c = controller(1);
        c.next_slide();
        assert_state(&c, 0, 0);
        c.prev_slide();
        assert_state(&c, 0, 0);
        c.go_to_slide(42);
        assert_state(&c, 0, 0);
    }

    #[test]
    fn test_invariants_over_mixed_sequence() {
        let n = 5;
        let mut c = controller(n);
        let targets = [-7i64, 0, 3, 9, -1, 4, 5, 2, i64::MAX, i64::MIN, 1];

        for (step, target) in targets.iter().enumerate() {
            match step % 3 {
                0 => c.next_slide(),
                1 => c.prev_slide(),
                _ => c.go_to_slide(*target),
            }
            let idx = c.current_index();
            assert!(idx < n);
            assert_eq!(c.surface().active_count(), 1);
            assert_eq!(c.surface().active_index(), Some(idx));
            assert_eq!(c.surface().offset, Some(-(idx as i64) * 100));
        }
    }
}
