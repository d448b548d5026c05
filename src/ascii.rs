//! # ASCII Backend
//!
//! Rasterizes a frame into a character grid — the development-mode
//! counterpart of the pixel backend, for running the clock in a terminal
//! without any display hardware.
//!
//! Terminal cells are roughly twice as tall as wide, so the canvas maps the
//! pixel surface onto cells with a 1:2 aspect to keep the dial round.
//! Colors are ignored; command kinds pick the glyph instead: the face disc
//! fills with `.`, the border ring strokes with `o`, sub-cell discs (tick
//! dots, the center pin) collapse to `@`, hands draw as `#`, and numerals
//! keep their digits.

use std::fmt;

use crate::renderer::{DrawCommand, MeasureText, Point2};
use crate::SurfaceDimensions;

const FACE_CHAR: char = '.';
const RING_CHAR: char = 'o';
const MARKER_CHAR: char = '@';
const HAND_CHAR: char = '#';

/// A character-cell rasterizer for one frame.
///
/// Also answers the renderer's text measurements in terms of its own cell
/// size, so numerals land centered on the grid.
pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    cell_w: f32,
    cell_h: f32,
    grid: Vec<Vec<char>>,
}

impl AsciiCanvas {
    /// Canvas with `cols` columns; the row count follows from the surface
    /// aspect with 1:2 cells.
    pub fn new(dims: SurfaceDimensions, cols: usize) -> Self {
        let cols = cols.max(1);
        let width = dims.width.max(1) as i64;
        let height = dims.height.max(1) as i64;
        let cell_w = width as f32 / cols as f32;
        let cell_h = 2.0 * cell_w;
        // ceil(height / cell_h) in integer math; float division drifts just
        // past whole row counts
        let rows = ((height * cols as i64 + 2 * width - 1) / (2 * width)).max(1) as usize;
        Self {
            cols,
            rows,
            cell_w,
            cell_h,
            grid: vec![vec![' '; cols]; rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Finished grid, one string per row.
    pub fn lines(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect()
    }

    /// Rasterize the commands in order; later commands overwrite earlier
    /// cells, preserving the frame's occlusion contract.
    pub fn paint(&mut self, frame: &[DrawCommand]) {
        for command in frame {
            match command {
                DrawCommand::Disc { center, radius, .. } => self.paint_disc(*center, *radius),
                DrawCommand::Ring {
                    center,
                    radius,
                    stroke_width,
                    ..
                } => self.paint_ring(*center, *radius, *stroke_width),
                DrawCommand::Segment { start, end, .. } => self.paint_segment(*start, *end),
                DrawCommand::Label { top_left, text, .. } => self.paint_label(*top_left, text),
            }
        }
    }

    fn cell_of(&self, p: Point2) -> (i32, i32) {
        (
            (p.x / self.cell_w).floor() as i32,
            (p.y / self.cell_h).floor() as i32,
        )
    }

    fn cell_center(&self, col: usize, row: usize) -> Point2 {
        Point2::new(
            (col as f32 + 0.5) * self.cell_w,
            (row as f32 + 0.5) * self.cell_h,
        )
    }

    fn put(&mut self, col: i32, row: i32, ch: char) {
        if col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows {
            self.grid[row as usize][col as usize] = ch;
        }
    }

    fn paint_disc(&mut self, center: Point2, radius: f32) {
        // Discs smaller than a cell would fall between sample points
        if radius <= self.cell_h {
            let (col, row) = self.cell_of(center);
            self.put(col, row, MARKER_CHAR);
            return;
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = self.cell_center(col, row);
                let (dx, dy) = (p.x - center.x, p.y - center.y);
                if dx * dx + dy * dy <= radius * radius {
                    self.grid[row][col] = FACE_CHAR;
                }
            }
        }
    }

    fn paint_ring(&mut self, center: Point2, radius: f32, stroke_width: f32) {
        // Band wide enough that cell sampling leaves no gaps
        let band = (stroke_width / 2.0).max(self.cell_h / 2.0);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = self.cell_center(col, row);
                let distance = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
                if (distance - radius).abs() <= band {
                    self.grid[row][col] = RING_CHAR;
                }
            }
        }
    }

    fn paint_segment(&mut self, start: Point2, end: Point2) {
        let (mut col, mut row) = self.cell_of(start);
        let (end_col, end_row) = self.cell_of(end);
        let dx = (end_col - col).abs();
        let dy = -(end_row - row).abs();
        let step_x = if col < end_col { 1 } else { -1 };
        let step_y = if row < end_row { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(col, row, HAND_CHAR);
            if col == end_col && row == end_row {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                col += step_x;
            }
            if doubled <= dx {
                err += dx;
                row += step_y;
            }
        }
    }

    fn paint_label(&mut self, top_left: Point2, text: &str) {
        let col = ((top_left.x + self.cell_w / 2.0) / self.cell_w).floor() as i32;
        let row = ((top_left.y + self.cell_h / 2.0) / self.cell_h).floor() as i32;
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch);
        }
    }
}

impl MeasureText for AsciiCanvas {
    fn text_size(&self, text: &str, _font_px: f32) -> (u32, u32) {
        let width = (text.chars().count() as f32 * self.cell_w).round() as u32;
        (width, self.cell_h.round() as u32)
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::layout::LayoutMetrics;
    use crate::renderer::render;
    use crate::TimeSample;

    fn painted_canvas(time: TimeSample) -> AsciiCanvas {
        let dims = SurfaceDimensions::new(400, 400);
        let metrics = LayoutMetrics::compute(dims);
        let mut canvas = AsciiCanvas::new(dims, 72);
        let frame = render(&metrics, &Config::default(), time, &canvas);
        canvas.paint(&frame);
        canvas
    }

    #[test]
    fn aspect_halves_the_rows() {
        let canvas = AsciiCanvas::new(SurfaceDimensions::new(400, 400), 72);
        assert_eq!(canvas.cols(), 72);
        assert_eq!(canvas.rows(), 36);
    }

    #[test]
    fn measurement_matches_cells() {
        let canvas = AsciiCanvas::new(SurfaceDimensions::new(400, 400), 80);
        // 5 px cells, 10 px tall
        assert_eq!(canvas.text_size("12", 45.0), (10, 10));
        assert_eq!(canvas.text_size("3", 45.0), (5, 10));
    }

    #[test]
    fn frame_rasterizes_every_layer() {
        let canvas = painted_canvas(TimeSample::new(3, 0, 0));
        let text: String = canvas.lines().join("\n");

        assert!(text.contains(FACE_CHAR), "face fill missing");
        assert!(text.contains(RING_CHAR), "border ring missing");
        assert!(text.contains(HAND_CHAR), "hands missing");
        // Tick dots survive inside the ring band
        assert!(text.contains(MARKER_CHAR), "tick dots missing");
        for digit in ["1", "3", "6", "9"] {
            assert!(text.contains(digit), "numeral {digit} missing");
        }
    }

    #[test]
    fn pin_marks_the_center_cell() {
        let canvas = painted_canvas(TimeSample::new(3, 0, 0));
        let lines = canvas.lines();
        // Surface center (200, 200) lands on a cell boundary; accept either
        // side of it
        let marked = [(35, 17), (36, 17), (35, 18), (36, 18)]
            .iter()
            .any(|&(col, row)| lines[row].chars().nth(col) == Some(MARKER_CHAR));
        assert!(marked, "center pin missing around the grid center");
    }

    #[test]
    fn corners_stay_blank() {
        let canvas = painted_canvas(TimeSample::new(3, 0, 0));
        let lines = canvas.lines();
        assert_eq!(lines[0].chars().next(), Some(' '));
        assert_eq!(lines[canvas.rows() - 1].chars().last(), Some(' '));
    }
}
