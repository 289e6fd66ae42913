//! Color utility functions for background animations.
//!
//! Terminals have no alpha channel, so translucent strokes are flattened
//! against the black page background before they reach a cell.

use ratatui::style::Color;

/// Flatten `rgb` drawn at `alpha` over black into an opaque colour.
pub fn blend_over_black(rgb: (u8, u8, u8), alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    let (r, g, b) = rgb;
    Color::Rgb(
        (r as f32 * a) as u8,
        (g as f32 * a) as u8,
        (b as f32 * a) as u8,
    )
}

/// Linear interpolation between two RGB triples.
pub fn lerp_rgb(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    (mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Add a translucent tint on top of an existing cell colour.
pub(crate) fn tint(base: Color, rgb: (u8, u8, u8), alpha: f32) -> Color {
    let (br, bg, bb) = match base {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    };
    let (r, g, b) = lerp_rgb((br, bg, bb), rgb, alpha);
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_over_black() {
        assert_eq!(blend_over_black((200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(blend_over_black((200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(blend_over_black((200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        // Out-of-range alpha is clamped
        assert_eq!(blend_over_black((200, 100, 50), 3.0), Color::Rgb(200, 100, 50));
    }

    #[test]
    fn test_tint_from_reset_color() {
        assert_eq!(tint(Color::Reset, (100, 200, 0), 0.5), Color::Rgb(50, 100, 0));
        assert_eq!(tint(Color::Rgb(10, 10, 10), (10, 10, 10), 0.7), Color::Rgb(10, 10, 10));
    }
}
