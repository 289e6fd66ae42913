//! Matrix rain animation (stateful, timer driven).

use hexfolio_core::{ColorTheme, EffectSettings};
use rand::Rng;
use ratatui::{style::Style, text::Span};

use crate::chars::MATRIX_CHARS;
use crate::color::blend_over_black;

/// Trail cells dimmer than this are cleared.
const MIN_INTENSITY: f32 = 0.02;

/// Brightness of a fresh glyph; the layer sits far behind the page text.
const LAYER_ALPHA: f32 = 0.45;

/// A glyph left behind by a falling drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailCell {
    pub glyph: char,
    /// 1.0 when freshly drawn, decaying toward 0 each tick.
    pub intensity: f32,
}

impl Default for TrailCell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            intensity: 0.0,
        }
    }
}

/// Rain state for one viewport.
#[derive(Debug, Clone)]
pub struct MatrixRain {
    /// Viewport width in cells.
    width: u16,
    /// Viewport height in cells.
    height: u16,
    /// Cells between neighbouring columns.
    column_width: u16,
    /// Row of each column's drop, counted from 1 at the top.
    drops: Vec<u32>,
    /// Fading trail, row-major.
    trail: Vec<TrailCell>,
    /// Brightness kept per tick.
    persistence: f32,
    reset_chance: f64,
}

impl MatrixRain {
    /// Create rain for a `width` x `height` viewport with all drops at the top.
    pub fn new(width: u16, height: u16, settings: &EffectSettings) -> Self {
        let settings = settings.clone().sanitized();
        let column_width = settings.matrix_column_width;
        let columns = (width / column_width) as usize;
        Self {
            width,
            height,
            column_width,
            drops: vec![1; columns],
            trail: vec![TrailCell::default(); width as usize * height as usize],
            persistence: 1.0 - settings.matrix_fade,
            reset_chance: settings.matrix_reset_chance,
        }
    }

    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Trail cell at viewport position, if inside the viewport.
    pub fn cell(&self, x: u16, y: u16) -> Option<TrailCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.trail
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// One rain step: dim the trail, draw a glyph per column and let every
    /// drop fall one row.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.trail {
            cell.intensity *= self.persistence;
            if cell.intensity < MIN_INTENSITY {
                *cell = TrailCell::default();
            }
        }

        let width = self.width as usize;
        for (i, drop) in self.drops.iter_mut().enumerate() {
            let glyph = MATRIX_CHARS[rng.gen_range(0..MATRIX_CHARS.len())];
            let row = drop.saturating_sub(1) as usize;
            if row < self.height as usize {
                let x = i * self.column_width as usize;
                self.trail[row * width + x] = TrailCell {
                    glyph,
                    intensity: 1.0,
                };
            }

            // Staggered restart once the drop has left the screen
            if *drop > self.height as u32 && rng.gen_bool(self.reset_chance) {
                *drop = 0;
            }
            *drop = drop.saturating_add(1);
        }
    }

    /// Render a matrix rain character.
    pub fn render_char(&self, x: u16, y: u16, theme: ColorTheme) -> Span<'static> {
        match self.cell(x, y) {
            Some(cell) if cell.intensity >= MIN_INTENSITY => {
                let color = blend_over_black(theme.accent_rgb(), cell.intensity * LAYER_ALPHA);
                Span::styled(cell.glyph.to_string(), Style::new().fg(color))
            }
            _ => Span::raw(" "),
        }
    }
}
