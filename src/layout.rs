//! # Layout Engine
//!
//! Converts surface pixel dimensions into every derived drawing dimension:
//! center point, dial radius, pin radius, border width, and per-class hand
//! metrics. [`LayoutMetrics::compute`] is pure and deterministic — the same
//! `min(width, height)` always reproduces bit-identical values — and
//! [`Layout`] caches exactly one computed value until the dimensions change.
//!
//! The arithmetic deliberately mixes integer and truncating division. The
//! fractions look ad hoc (`radius - radius/2` truncated, padding at a 1/20
//! ratio) but they are visual-tuning constants; changing them to "cleaner"
//! math changes the rendered face.

use crate::SurfaceDimensions;

/// Length, tail length, and stroke width for one class of hand.
///
/// The hour hand has its own class; the minute and second hands share one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandMetrics {
    /// Reach from the center toward the rim, in pixels
    pub length: f32,
    /// Short overshoot behind the center, in pixels
    pub tail: f32,
    /// Stroke width in pixels
    pub width: f32,
}

/// Every geometric constant a frame needs, derived from the surface size.
///
/// Immutable once computed; replaced wholesale on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub center_x: f32,
    pub center_y: f32,
    /// Dial radius after padding
    pub radius: f32,
    /// Center pin radius
    pub pin_radius: f32,
    /// Base radius of a tick dot (hour positions draw at 1.5×)
    pub border_dot_radius: f32,
    /// Stroke width of the outer ring
    pub border_width: f32,
    pub hour_hand: HandMetrics,
    /// Shared by the minute and second hands
    pub minute_second_hand: HandMetrics,
}

impl LayoutMetrics {
    /// Derive all drawing dimensions from the surface size.
    ///
    /// Integer division (padding, half-minimum, centers) and truncating
    /// conversions (hand lengths and tails) are part of the face's look;
    /// see the module docs. Degenerate input is not rejected:
    /// a non-positive minimum yields zero or negative metrics without
    /// faulting, and [`Layout`] refuses to hand such metrics out.
    pub fn compute(dims: SurfaceDimensions) -> Self {
        let minimum = dims.minimum();
        let padding = minimum / 20;
        let radius = (minimum / 2 - padding) as f32;

        let pin_radius = radius / 35.0;
        let hour_length = (radius - radius / 2.0).trunc();
        let hand_length = (radius - radius / 4.0).trunc();

        Self {
            center_x: (dims.width / 2) as f32,
            center_y: (dims.height / 2) as f32,
            radius,
            pin_radius,
            border_dot_radius: pin_radius / 2.0,
            border_width: radius * 0.07,
            hour_hand: HandMetrics {
                length: hour_length,
                tail: (hour_length / 8.0).trunc(),
                width: 3.0 * pin_radius,
            },
            minute_second_hand: HandMetrics {
                length: hand_length,
                tail: (hand_length / 8.0).trunc(),
                width: 1.1 * pin_radius,
            },
        }
    }
}

/// Single-value layout cache with a dirty check against the last-seen
/// dimensions.
///
/// Owned by whatever drives the frame loop; recomputes only on the first
/// request or when the surface was resized. A degenerate surface
/// (non-positive minimum) yields `None` — "not yet laid out" — so the
/// caller skips the frame instead of drawing garbage.
#[derive(Debug, Default)]
pub struct Layout {
    cached: Option<(SurfaceDimensions, LayoutMetrics)>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metrics for the given dimensions, recomputing only when they differ
    /// from the cached ones.
    pub fn metrics(&mut self, dims: SurfaceDimensions) -> Option<LayoutMetrics> {
        if dims.minimum() <= 0 {
            self.cached = None;
            return None;
        }
        if let Some((cached_dims, metrics)) = self.cached {
            if cached_dims == dims {
                return Some(metrics);
            }
        }
        let metrics = LayoutMetrics::compute(dims);
        self.cached = Some((dims, metrics));
        Some(metrics)
    }
}
