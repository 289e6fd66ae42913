//! Drawable surface geometry.

/// Width of one terminal cell in virtual pixels.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Height of one terminal cell in virtual pixels.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// A drawable area measured in virtual pixels.
///
/// A surface always has a positive width and height. Code that would
/// otherwise draw onto a zero-sized or detached area holds an
/// `Option<Surface>` and skips its work when it is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    width: f32,
    height: f32,
}

impl Surface {
    /// Create a surface, or `None` if either dimension is not positive.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        (width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite())
            .then_some(Self { width, height })
    }

    /// Create a surface covering `cols` x `rows` terminal cells.
    pub fn from_cells(cols: u16, rows: u16) -> Option<Self> {
        Self::new(cols as f32 * CELL_WIDTH_PX, rows as f32 * CELL_HEIGHT_PX)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Whether a point lies inside the surface (edges inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_has_no_surface() {
        assert!(Surface::new(0.0, 100.0).is_none());
        assert!(Surface::new(100.0, 0.0).is_none());
        assert!(Surface::new(-1.0, 10.0).is_none());
        assert!(Surface::from_cells(0, 24).is_none());
    }

    #[test]
    fn test_from_cells_uses_cell_size() {
        let surface = Surface::from_cells(150, 50).unwrap();
        assert_eq!(surface.width(), 1200.0);
        assert_eq!(surface.height(), 800.0);
        assert!(surface.contains(1200.0, 0.0));
        assert!(!surface.contains(1200.5, 0.0));
    }
}
