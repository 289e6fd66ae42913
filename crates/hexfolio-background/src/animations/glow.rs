//! Radial glow following the pointer (stateless).

use hexfolio_core::{CELL_HEIGHT_PX, CELL_WIDTH_PX, ColorTheme, MousePosition};
use ratatui::{buffer::Buffer, layout::Rect};

use crate::color::tint;

/// Radius of the glow in virtual pixels.
pub const GLOW_RADIUS_PX: f32 = 300.0;

/// Fraction of the radius after which the glow is fully transparent.
const GLOW_FALLOFF: f32 = 0.7;

/// Opacity at the centre.
const GLOW_ALPHA: f32 = 0.15;

/// Glow opacity at a cell offset `(dx, dy)` from the pointer.
pub fn glow_alpha(dx: f32, dy: f32) -> f32 {
    let nx = dx * CELL_WIDTH_PX / GLOW_RADIUS_PX;
    let ny = dy * CELL_HEIGHT_PX / GLOW_RADIUS_PX;
    let d = (nx * nx + ny * ny).sqrt() / GLOW_FALLOFF;
    if d >= 1.0 { 0.0 } else { GLOW_ALPHA * (1.0 - d) }
}

/// Tint cell backgrounds around `mouse`.
pub fn render_glow(buf: &mut Buffer, area: Rect, mouse: MousePosition, theme: ColorTheme) {
    let rx = (GLOW_RADIUS_PX * GLOW_FALLOFF / CELL_WIDTH_PX).ceil() as i32;
    let ry = (GLOW_RADIUS_PX * GLOW_FALLOFF / CELL_HEIGHT_PX).ceil() as i32;
    let cx = mouse.column as i32;
    let cy = mouse.row as i32;
    let rgb = theme.accent_rgb();

    let x0 = (cx - rx).max(area.left() as i32);
    let x1 = (cx + rx).min(area.right() as i32 - 1);
    let y0 = (cy - ry).max(area.top() as i32);
    let y1 = (cy + ry).min(area.bottom() as i32 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let alpha = glow_alpha((x - cx) as f32, (y - cy) as f32);
            if alpha <= 0.0 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                let bg = tint(cell.bg, rgb, alpha);
                cell.set_bg(bg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;

    #[test]
    fn test_alpha_falls_off() {
        assert!((glow_alpha(0.0, 0.0) - GLOW_ALPHA).abs() < 1e-6);
        assert!(glow_alpha(5.0, 0.0) < glow_alpha(1.0, 0.0));
        // 0.7 * 300px / 8px = 26.25 columns
        assert_eq!(glow_alpha(27.0, 0.0), 0.0);
        assert!(glow_alpha(0.0, 13.0) > 0.0);
        assert_eq!(glow_alpha(0.0, 14.0), 0.0);
    }

    #[test]
    fn test_render_glow_tints_only_near_pointer() {
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        render_glow(
            &mut buf,
            area,
            MousePosition { column: 10, row: 5 },
            ColorTheme::Emerald,
        );
        assert_ne!(buf[(10, 5)].bg, Color::Reset);
        assert_eq!(buf[(90, 35)].bg, Color::Reset);
    }

    #[test]
    fn test_render_glow_clips_to_area() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        render_glow(
            &mut buf,
            area,
            MousePosition { column: 200, row: 100 },
            ColorTheme::Cyan,
        );
        assert_eq!(buf[(3, 1)].bg, Color::Reset);
    }
}
