//! # Clock Face Application Entry Point
//!
//! The host side of the clock: loads configuration, owns the repaint loop,
//! and rasterizes each frame to the terminal. The core library never
//! schedules anything itself — this loop ticks it at the renderer's
//! recommended interval.

// Test modules
#[cfg(test)]
mod tests;

use std::env;
use std::io::Write;

use anyhow::Context;
use clock_face_lib::ascii::AsciiCanvas;
use clock_face_lib::config::Config;
use clock_face_lib::layout::Layout;
use clock_face_lib::renderer::{self, REPAINT_INTERVAL};
use clock_face_lib::TimeSample;
use log::warn;

/// Terminal width of the rendered dial, in character cells.
const CANVAS_COLS: usize = 72;

/// Render one frame to a fresh canvas, or `None` for a degenerate surface.
fn draw_frame(layout: &mut Layout, config: &Config) -> Option<AsciiCanvas> {
    let dims = config.dimensions();
    let metrics = layout.metrics(dims)?;
    let mut canvas = AsciiCanvas::new(dims, CANVAS_COLS);
    let frame = renderer::render(&metrics, config, TimeSample::now(), &canvas);
    canvas.paint(&frame);
    Some(canvas)
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Development mode: render a single frame and exit
    let once = env::args().any(|arg| arg == "--once");

    let config = Config::load();
    let mut layout = Layout::new();

    if once {
        match draw_frame(&mut layout, &config) {
            Some(canvas) => print!("{canvas}"),
            None => warn!(
                "surface {}x{} has nothing to draw",
                config.display.width, config.display.height
            ),
        }
        return Ok(());
    }

    let rt = tokio::runtime::Runtime::new().context("failed to build tokio runtime")?;
    rt.block_on(async {
        let mut ticker = tokio::time::interval(REPAINT_INTERVAL);
        loop {
            ticker.tick().await;
            let Some(canvas) = draw_frame(&mut layout, &config) else {
                // A degenerate configured surface will not fix itself
                warn!(
                    "surface {}x{} has nothing to draw, exiting",
                    config.display.width, config.display.height
                );
                break;
            };
            // Repaint in place
            print!("\x1b[2J\x1b[H{canvas}");
            std::io::stdout().flush().ok();
        }
    });

    Ok(())
}
