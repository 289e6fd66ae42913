//! Block letter font for the hexfolio title.
//!
//! Glyphs are 3 pixels wide and 5 tall. Each pixel is drawn as two
//! full-block characters so letters come out roughly square in a
//! terminal. Every glyph has the same width, which keeps a glitching
//! title from jittering sideways while its characters change.

/// Lines in a rendered title.
pub const GLYPH_ROWS: usize = 5;

/// Pixels per glyph row.
const GLYPH_PIXELS: usize = 3;

/// Characters used to draw one pixel.
const PIXEL: &str = "██";

/// Columns taken by one glyph.
pub const GLYPH_WIDTH: usize = GLYPH_PIXELS * 2;

/// Columns between neighbouring glyphs.
const GLYPH_GAP: usize = 1;

/// Drawn for characters without a glyph.
const FALLBACK: [u8; GLYPH_ROWS] = [0b110, 0b001, 0b010, 0b000, 0b010];

/// Row bitmasks for a supported character, most significant bit on the left.
///
/// Lowercase letters share the uppercase glyphs.
fn bitmap(c: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b110, 0b001, 0b010, 0b100, 0b111],
        '3' => [0b110, 0b001, 0b010, 0b001, 0b110],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b110, 0b001, 0b110],
        '6' => [0b011, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b110],
        '@' => [0b010, 0b101, 0b111, 0b100, 0b011],
        '#' => [0b101, 0b111, 0b101, 0b111, 0b101],
        '$' => [0b011, 0b110, 0b010, 0b011, 0b110],
        '%' => [0b101, 0b001, 0b010, 0b100, 0b101],
        '&' => [0b010, 0b101, 0b010, 0b101, 0b011],
        '*' => [0b101, 0b010, 0b111, 0b010, 0b101],
        ' ' => [0; GLYPH_ROWS],
        _ => return None,
    };
    Some(rows)
}

/// Whether `c` has its own glyph.
pub fn has_glyph(c: char) -> bool {
    bitmap(c).is_some()
}

/// One rendered row of the glyph for `c`.
fn glyph_row(c: char, row: usize) -> String {
    let bits = bitmap(c).unwrap_or(FALLBACK)[row];
    (0..GLYPH_PIXELS)
        .map(|px| {
            if bits & (1 << (GLYPH_PIXELS - 1 - px)) != 0 {
                PIXEL
            } else {
                "  "
            }
        })
        .collect()
}

/// Columns needed to draw `len` characters.
pub fn art_width(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        len * GLYPH_WIDTH + (len - 1) * GLYPH_GAP
    }
}

/// Build large block letter art for `text`.
///
/// # Returns
/// A vector of [`GLYPH_ROWS`] strings, each representing one line of the
/// art. Empty text yields empty lines.
pub fn build_title_art(text: &str) -> Vec<String> {
    let gap = " ".repeat(GLYPH_GAP);
    (0..GLYPH_ROWS)
        .map(|row| {
            text.chars()
                .map(|c| glyph_row(c, row))
                .collect::<Vec<_>>()
                .join(&gap)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_coverage() {
        for c in "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%&*".chars() {
            assert!(has_glyph(c), "missing glyph for {c}");
        }
        assert!(has_glyph('q'));
        assert!(!has_glyph('~'));
    }

    #[test]
    fn test_build_title_art_shape() {
        let art = build_title_art("LOVE");
        assert_eq!(art.len(), GLYPH_ROWS);
        for line in &art {
            assert_eq!(line.chars().count(), art_width(4));
        }
        // First column of L is solid
        assert!(art.iter().all(|line| line.starts_with(PIXEL)));
        assert_eq!(art[4], "██████   ██     ██   ██████");
    }

    #[test]
    fn test_width_independent_of_characters() {
        let a = build_title_art("LOVE");
        let b = build_title_art("#%~1");
        assert_eq!(a[0].chars().count(), b[0].chars().count());
    }

    #[test]
    fn test_empty_text() {
        let art = build_title_art("");
        assert_eq!(art.len(), GLYPH_ROWS);
        assert!(art.iter().all(String::is_empty));
        assert_eq!(art_width(0), 0);
    }
}
