//! Slide index arithmetic.
//!
//! Out-of-range indices wrap with a two-branch clamp, not modulo:
//! anything past the end lands on the first slide, anything below zero
//! lands on the last one.

/// Normalize a requested slide index into `0..total`.
///
/// - `index >= total` wraps to `0` (so `total + 5` gives `0`, not `5`)
/// - `index < 0` wraps to `total - 1` (so `-5` gives the last slide)
/// - everything else is returned unchanged
///
/// `total` must be at least 1; the controller refuses to build otherwise.
pub fn normalize_index(index: i64, total: usize) -> usize {
    debug_assert!(total > 0, "normalize_index called with an empty carousel");
    if index < 0 {
        total.saturating_sub(1)
    } else if index as u64 >= total as u64 {
        0
    } else {
        index as usize
    }
}

/// Convert a slide index received from JavaScript (a plain `Number`).
///
/// Fractions round down, so `-0.5` still counts as negative. Values beyond
/// the `i64` range saturate instead of wrapping, which keeps every huge
/// index on the same side of the range it started on. `NaN` maps to `0`.
pub fn index_from_js(value: f64) -> i64 {
    value.floor() as i64
}

/// Horizontal track offset, in percent of one slide width, that brings
/// slide `index` into view. Later slides sit to the right, so the offset
/// is negative.
pub fn track_offset_percent(index: usize) -> i64 {
    -(index as i64 * 100)
}

/// CSS `transform` value for a track offset in percent.
/// Example: `-200` -> `"translateX(-200%)"`
pub fn track_transform(offset_percent: i64) -> String {
    format!("translateX({}%)", offset_percent)
}
