//! # Frame Renderer
//!
//! Turns a cached [`LayoutMetrics`], a [`Config`], and one [`TimeSample`]
//! into an ordered list of [`DrawCommand`]s. Later commands occlude earlier
//! ones, so the order is part of the contract: face disc, tick dots, border
//! ring, numerals, hour/minute/second hands, center pin.
//!
//! One angle formula drives everything on the dial. A time value is first
//! expressed as a *location* on the 0–60 minute-tick scale, then
//! [`hand_angle`] maps it to radians with 0 pointing at 12 o'clock. Hours
//! rescale into the same domain via [`hour_location`], numerals via
//! `number * 5`.
//!
//! The renderer is pure: no clocks, no timers. Hosts repaint on their own
//! schedule, nominally every [`REPAINT_INTERVAL`] — the second hand may
//! trail a true second boundary by up to that interval.

use std::f32::consts::{FRAC_PI_2, PI};
use std::time::Duration;

use crate::config::{Color, Config};
use crate::layout::{HandMetrics, LayoutMetrics};
use crate::TimeSample;

/// Recommended delay between frames. ~2 Hz keeps the second hand lively
/// without aligning to wall-clock second ticks.
pub const REPAINT_INTERVAL: Duration = Duration::from_millis(500);

/// A point in surface pixel space, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One drawing primitive of a frame.
///
/// Backends replay these in order against their own surface; the renderer
/// resolves all geometry (including text centering) so backends stay dumb.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Filled circle
    Disc {
        center: Point2,
        radius: f32,
        color: Color,
    },
    /// Stroked circle, stroke centered on the outline
    Ring {
        center: Point2,
        radius: f32,
        stroke_width: f32,
        color: Color,
    },
    /// Stroked line segment
    Segment {
        start: Point2,
        end: Point2,
        width: f32,
        color: Color,
    },
    /// Text with a pre-centered top-left origin
    Label {
        top_left: Point2,
        text: String,
        font_px: f32,
        color: Color,
    },
}

/// Text measurement seam between the renderer and a backend.
///
/// Numerals are centered on their dial point, which requires the rendered
/// size of each glyph run at the requested pixel size. Backends answer in
/// whole pixels; the renderer offsets by integer halves.
pub trait MeasureText {
    fn text_size(&self, text: &str, font_px: f32) -> (u32, u32);
}

/// Angle in radians for a location on the 0–60 minute-tick scale.
///
/// Location 0 points straight up (12 o'clock): the `-π/2` term rotates the
/// mathematical zero from 3 o'clock into dial orientation.
pub fn hand_angle(location: f32) -> f32 {
    PI * location / 30.0 - FRAC_PI_2
}

/// Hour-hand location on the minute-tick scale, advancing smoothly with
/// the minute: 3:30 sits at 17.5, strictly between the 3 and 4 marks.
pub fn hour_location(hour: u32, minute: u32) -> f32 {
    (hour as f32 + minute as f32 / 60.0) * 5.0
}

/// Point at `distance` from `center` along `angle`.
fn dial_point(center: Point2, angle: f32, distance: f32) -> Point2 {
    Point2::new(
        center.x + angle.cos() * distance,
        center.y + angle.sin() * distance,
    )
}

/// Produce one frame.
///
/// Pure function of its inputs; an identical layout, configuration, and
/// time sample always yields an identical command list.
pub fn render<M: MeasureText>(
    metrics: &LayoutMetrics,
    config: &Config,
    time: TimeSample,
    measure: &M,
) -> Vec<DrawCommand> {
    let center = Point2::new(metrics.center_x, metrics.center_y);
    let mut frame = Vec::new();

    frame.push(DrawCommand::Disc {
        center,
        radius: metrics.radius,
        color: config.face.background_color,
    });

    if config.face.border_dots_enabled {
        let dot_circle_radius = metrics.radius - metrics.radius / 10.0;
        for i in 1..=60u32 {
            // Every 5th dot marks an hour position and draws larger
            let radius = if i % 5 == 0 {
                1.5 * metrics.border_dot_radius
            } else {
                metrics.border_dot_radius
            };
            frame.push(DrawCommand::Disc {
                center: dial_point(center, hand_angle(i as f32), dot_circle_radius),
                radius,
                color: config.face.border_dots_color,
            });
        }
    }

    // The ring strokes over the outer edge of the dots
    frame.push(DrawCommand::Ring {
        center,
        radius: metrics.radius,
        stroke_width: metrics.border_width,
        color: config.face.border_color,
    });

    if config.face.numerals_enabled {
        let font_px = metrics.radius / 4.0;
        let numeral_circle_radius = metrics.radius - metrics.radius / 4.0;
        for number in 1..=12u32 {
            let numeral = number.to_string();
            let (w, h) = measure.text_size(&numeral, font_px);
            let anchor = dial_point(center, hand_angle((number * 5) as f32), numeral_circle_radius);
            frame.push(DrawCommand::Label {
                top_left: Point2::new(anchor.x - (w / 2) as f32, anchor.y - (h / 2) as f32),
                text: numeral,
                font_px,
                color: config.face.numerals_color,
            });
        }
    }

    push_hand(
        &mut frame,
        center,
        hour_location(time.hour, time.minute),
        &metrics.hour_hand,
        config.hands.hour_color,
    );
    push_hand(
        &mut frame,
        center,
        time.minute as f32,
        &metrics.minute_second_hand,
        config.hands.minute_color,
    );
    push_hand(
        &mut frame,
        center,
        time.second as f32,
        &metrics.minute_second_hand,
        config.hands.second_color,
    );

    // Pin goes last so it sits atop all three hands
    frame.push(DrawCommand::Disc {
        center,
        radius: metrics.pin_radius,
        color: config.face.center_pin_color,
    });

    frame
}

/// The one radial-hand primitive all three hands share: a segment from a
/// short tail behind the center out toward the rim.
fn push_hand(
    frame: &mut Vec<DrawCommand>,
    center: Point2,
    location: f32,
    hand: &HandMetrics,
    color: Color,
) {
    let angle = hand_angle(location);
    frame.push(DrawCommand::Segment {
        start: dial_point(center, angle, -hand.tail),
        end: dial_point(center, angle, hand.length),
        width: hand.width,
        color,
    });
}
