//! Character-grid surface for terminals and tests

use glam::Vec2;

use super::Surface;
use crate::sim::{Color, GameState};

/// Brightness ramp, darkest first
const RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Rasterizes rectangles into a fixed grid of characters
///
/// Each cell maps to a patch of court space. A rectangle covers every cell it touches,
/// so objects smaller than a cell still show up.
#[derive(Debug, Clone)]
pub struct TextSurface {
    cols: usize,
    rows: usize,
    view_min: Vec2,
    view_max: Vec2,
    cells: Vec<char>,
}

impl TextSurface {
    pub fn new(cols: usize, rows: usize, view_min: Vec2, view_max: Vec2) -> Self {
        Self {
            cols,
            rows,
            view_min,
            view_max,
            cells: vec![' '; cols * rows],
        }
    }

    /// A surface framing the whole court including its walls
    pub fn for_state(state: &GameState, cols: usize, rows: usize) -> Self {
        let t = state.settings.wall_thickness;
        Self::new(
            cols,
            rows,
            Vec2::splat(-t),
            Vec2::new(state.settings.court_width + t, state.settings.court_height + t),
        )
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    pub fn glyph_at(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn render(&self) -> String {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn glyph(color: Color) -> char {
        let idx = (color.luminance().clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
        // Keep filled cells visible even for very dark colors
        RAMP[idx.max(1)]
    }

    /// Cell index range `[first, last]` covered by `lo..hi` along one axis
    fn span(lo: f32, hi: f32, min: f32, max: f32, count: usize) -> Option<(usize, usize)> {
        if count == 0 || hi < min || lo > max {
            return None;
        }
        let cell = (max - min) / count as f32;
        let last_cell = count as f32 - 1.0;
        let first = ((lo - min) / cell).floor().clamp(0.0, last_cell) as usize;
        let last = (((hi - min) / cell).ceil() - 1.0).clamp(0.0, last_cell) as usize;
        Some((first, last.max(first)))
    }
}

impl Surface for TextSurface {
    fn fill_rect(&mut self, color: Color, cx: f32, cy: f32, width: f32, height: f32) {
        let (half_w, half_h) = (width / 2.0, height / 2.0);
        let Some((c0, c1)) = Self::span(
            cx - half_w,
            cx + half_w,
            self.view_min.x,
            self.view_max.x,
            self.cols,
        ) else {
            return;
        };
        let Some((r0, r1)) = Self::span(
            cy - half_h,
            cy + half_h,
            self.view_min.y,
            self.view_max.y,
            self.rows,
        ) else {
            return;
        };

        let glyph = Self::glyph(color);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.cells[row * self.cols + col] = glyph;
            }
        }
    }
}
