//! # embedded-graphics Backend
//!
//! Replays a frame's [`DrawCommand`] list onto any
//! [`DrawTarget`](embedded_graphics::draw_target::DrawTarget) with an
//! `Rgb888` color space, and supplies the mono-font text metrics the
//! renderer needs for numeral centering.
//!
//! The stack's fonts are fixed-size bitmaps, so the requested numeral size
//! (`radius / 4`) maps onto the nearest font from a small ladder. Measuring
//! and painting go through the same ladder, which keeps centering honest.

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_9X15},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::{Baseline, Text},
};

use crate::config::Color;
use crate::renderer::{DrawCommand, MeasureText, Point2};

impl From<Color> for Rgb888 {
    fn from(color: Color) -> Self {
        Rgb888::new(color.r, color.g, color.b)
    }
}

/// Largest ladder font that does not overshoot the requested pixel height.
fn font_for_px(px: f32) -> &'static MonoFont<'static> {
    if px >= 20.0 {
        &FONT_10X20
    } else if px >= 15.0 {
        &FONT_9X15
    } else {
        &FONT_6X10
    }
}

/// Text metrics of the mono-font ladder.
pub struct MonoFontMetrics;

impl MeasureText for MonoFontMetrics {
    fn text_size(&self, text: &str, font_px: f32) -> (u32, u32) {
        let font = font_for_px(font_px);
        let glyphs = text.chars().count() as u32;
        let width = match glyphs {
            0 => 0,
            n => n * font.character_size.width + (n - 1) * font.character_spacing,
        };
        (width, font.character_size.height)
    }
}

fn point(p: Point2) -> Point {
    Point::new(p.x.round() as i32, p.y.round() as i32)
}

fn diameter(radius: f32) -> u32 {
    (radius * 2.0).round().max(0.0) as u32
}

fn stroke(width: f32) -> u32 {
    (width.round() as u32).max(1)
}

/// Replay one frame in order onto the target.
///
/// Propagates the target's own error type, matching how the target reports
/// drawing failures; the commands themselves cannot fail.
pub fn draw_frame<D>(display: &mut D, frame: &[DrawCommand]) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    for command in frame {
        match command {
            DrawCommand::Disc {
                center,
                radius,
                color,
            } => {
                Circle::with_center(point(*center), diameter(*radius))
                    .into_styled(PrimitiveStyle::with_fill((*color).into()))
                    .draw(display)?;
            }
            DrawCommand::Ring {
                center,
                radius,
                stroke_width,
                color,
            } => {
                Circle::with_center(point(*center), diameter(*radius))
                    .into_styled(PrimitiveStyle::with_stroke((*color).into(), stroke(*stroke_width)))
                    .draw(display)?;
            }
            DrawCommand::Segment {
                start,
                end,
                width,
                color,
            } => {
                Line::new(point(*start), point(*end))
                    .into_styled(PrimitiveStyle::with_stroke((*color).into(), stroke(*width)))
                    .draw(display)?;
            }
            DrawCommand::Label {
                top_left,
                text,
                font_px,
                color,
            } => {
                let style = MonoTextStyle::new(font_for_px(*font_px), (*color).into());
                Text::with_baseline(text, point(*top_left), style, Baseline::Top).draw(display)?;
            }
        }
    }
    Ok(())
}
