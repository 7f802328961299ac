//! Pan offset bounds
//!
//! Offsets are measured from the centred position, in screen pixels.

use super::scale::clamp_to_range;

/// Largest offset from centre along one axis before the image edge
/// detaches from the viewport edge.
///
/// Content smaller than the viewport cannot be panned (edge is 0).
#[inline]
pub fn pan_edge(viewport_len: f64, content_len: f64) -> f64 {
    ((content_len - viewport_len) / 2.0).max(0.0)
}

/// Bound a pan offset to `[-(edge + overshoot), edge + overshoot]`.
///
/// `overshoot` is the elastic slack allowed while a drag is in progress;
/// pass `0.0` for the resting position.
#[inline]
pub fn clamp_pan(offset: f64, edge: f64, overshoot: f64) -> f64 {
    let limit = edge + overshoot.max(0.0);
    clamp_to_range(offset, -limit, limit)
}
