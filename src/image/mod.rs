//! Zoom and pan bounds for the image viewer
//!
//! Pure math used on every frame of a pinch, wheel or drag gesture.
//! Live gesture values are allowed to overshoot the nominal bounds by an
//! elastic buffer; the animation layer snaps them back with [`ScaleLimits::settle`]
//! once the gesture ends.

pub mod pan;
pub mod scale;

pub use pan::{clamp_pan, pan_edge};
pub use scale::{clamp_to_range, normalize_scale};

/// Default minimum zoom level (100%)
pub const MIN_SCALE: f64 = 1.0;
/// Default maximum zoom level (600%)
pub const MAX_SCALE: f64 = 6.0;
/// Default overshoot allowed while a gesture is in progress (20%)
pub const ELASTIC_BUFFER: f64 = 0.2;

/// Zoom bounds for one viewer instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLimits {
    /// Nominal minimum scale
    pub min_scale: f64,
    /// Nominal maximum scale
    pub max_scale: f64,
    /// Fractional overshoot allowed during a gesture (0.2 = 20%)
    pub elastic_buffer: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            elastic_buffer: ELASTIC_BUFFER,
        }
    }
}

impl ScaleLimits {
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        Self {
            min_scale,
            max_scale,
            ..Self::default()
        }
    }

    /// Set the elastic buffer (builder pattern)
    pub fn with_elastic_buffer(mut self, elastic_buffer: f64) -> Self {
        self.elastic_buffer = elastic_buffer;
        self
    }

    /// Bound a live gesture scale, allowing elastic overshoot.
    ///
    /// `hard_upper_bound` raises the ceiling for this call only (e.g. the
    /// natural 1:1 scale of a very large image); pass `0.0` for none.
    #[inline]
    pub fn normalize(&self, scale: f64, hard_upper_bound: f64) -> f64 {
        normalize_scale(
            scale,
            hard_upper_bound,
            self.elastic_buffer,
            self.min_scale,
            self.max_scale,
        )
    }

    /// Bound a scale to the nominal range with no overshoot.
    ///
    /// This is the value a gesture settles to once the user lets go.
    #[inline]
    pub fn settle(&self, scale: f64, hard_upper_bound: f64) -> f64 {
        normalize_scale(scale, hard_upper_bound, 0.0, self.min_scale, self.max_scale)
    }

    /// Whether `scale` lies in the elastic band outside the nominal range
    pub fn is_overshooting(&self, scale: f64, hard_upper_bound: f64) -> bool {
        self.settle(scale, hard_upper_bound) != scale
    }

    /// A well-formed range has a positive minimum not above the maximum
    pub fn is_well_formed(&self) -> bool {
        self.min_scale > 0.0
            && self.min_scale <= self.max_scale
            && (0.0..1.0).contains(&self.elastic_buffer)
    }
}
