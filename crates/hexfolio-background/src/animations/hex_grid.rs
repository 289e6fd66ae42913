//! Pulsing hexagon lattice (stateful, laid out once per surface size).

use std::f32::consts::{FRAC_PI_3, TAU};

use hexfolio_core::Surface;
use rand::Rng;

/// √3, the horizontal spacing factor of a pointy-side hex tiling.
const SQRT_3: f32 = 1.732_050_8;

/// Upper bound (exclusive) of a cell's base opacity.
pub const BASE_OPACITY_MAX: f32 = 0.15;

/// Amplitude of the cosine pulse added to the base opacity.
pub const PULSE_AMPLITUDE: f32 = 0.05;

/// A single hexagon outline.
#[derive(Debug, Clone)]
pub struct HexCell {
    /// Centre x in virtual pixels.
    pub x: f32,
    /// Centre y in virtual pixels.
    pub y: f32,
    /// Circumradius.
    pub size: f32,
    /// Opacity around which the pulse oscillates.
    pub base_opacity: f32,
    /// Pulse phase in radians, kept in `[0, TAU)`.
    pub phase: f32,
}

impl HexCell {
    /// Current opacity: base value modulated by the cosine of the phase.
    ///
    /// May dip slightly below zero; renderers treat that as invisible.
    pub fn display_opacity(&self) -> f32 {
        self.base_opacity + self.phase.cos() * PULSE_AMPLITUDE
    }

    /// The six corners, starting at angle 0 and turning by 60°.
    pub fn vertices(&self) -> [(f32, f32); 6] {
        std::array::from_fn(|i| {
            let angle = FRAC_PI_3 * i as f32;
            (
                self.x + self.size * angle.cos(),
                self.y + self.size * angle.sin(),
            )
        })
    }
}

/// Grid of hexagons covering a surface.
#[derive(Debug, Clone, Default)]
pub struct HexGrid {
    cells: Vec<HexCell>,
    rows: usize,
    cols: usize,
    surface: Option<Surface>,
}

impl HexGrid {
    /// Rows and columns needed to cover `surface` with cells of `size`.
    pub fn dimensions(surface: Surface, size: f32) -> (usize, usize) {
        if !size.is_finite() || size <= 0.0 {
            return (0, 0);
        }
        let rows = (surface.height() / (size * 1.5)).ceil() as usize;
        let cols = (surface.width() / (size * SQRT_3)).ceil() as usize;
        (rows, cols)
    }

    /// Lay out a fresh grid for `surface`; an absent surface yields an empty grid.
    pub fn layout<R: Rng>(surface: Option<Surface>, size: f32, rng: &mut R) -> Self {
        let Some(s) = surface else {
            return Self::default();
        };
        let (rows, cols) = Self::dimensions(s, size);
        let dx = size * SQRT_3;
        let dy = size * 1.5;

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            // Odd rows shift right by half a cell
            let offset = (row % 2) as f32 * dx / 2.0;
            for col in 0..cols {
                cells.push(HexCell {
                    x: col as f32 * dx + offset,
                    y: row as f32 * dy,
                    size,
                    base_opacity: rng.gen_range(0.0..BASE_OPACITY_MAX),
                    phase: rng.gen_range(0.0..TAU),
                });
            }
        }

        Self {
            cells,
            rows,
            cols,
            surface,
        }
    }

    /// Advance every cell's pulse phase by `step` radians.
    pub fn advance(&mut self, step: f32) {
        for cell in &mut self.cells {
            cell.phase = (cell.phase + step).rem_euclid(TAU);
        }
    }

    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    /// Cells whose outline may intersect the band `[top, bottom]`.
    pub fn visible(&self, top: f32, bottom: f32) -> impl Iterator<Item = &HexCell> {
        self.cells
            .iter()
            .filter(move |c| c.y + c.size >= top && c.y - c.size <= bottom)
    }
}
