//! Scroll position, pointer position and active-section tracking.

use crate::section::Section;
use crate::surface::CELL_HEIGHT_PX;

/// Distance of the section reference line from the top of the viewport.
pub const REFERENCE_LINE_PX: f32 = 100.0;

/// Scroll distance after which the navigation bar switches to its
/// "scrolled" look.
pub const SCROLLED_THRESHOLD_PX: f32 = 50.0;

/// Viewport row of the section reference line.
pub fn reference_row() -> u16 {
    (REFERENCE_LINE_PX / CELL_HEIGHT_PX) as u16
}

/// Rows of the page occupied by one section: `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Find the section crossing the reference line at the given scroll offset.
///
/// A span covers the reference line when its top is at or above it and its
/// bottom edge at or below it, so neighbouring spans both match on their
/// shared boundary row. Spans are checked in order and the first hit wins,
/// which gives that row to the earlier section.
pub fn detect_active(spans: &[SectionSpan], scroll: u16, reference_row: u16) -> Option<Section> {
    let line = reference_row as i32;
    spans
        .iter()
        .find(|span| {
            let top = span.top as i32 - scroll as i32;
            let bottom = span.bottom() as i32 - scroll as i32;
            top <= line && bottom >= line
        })
        .map(|span| span.section)
}

/// Pointer position in viewport cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MousePosition {
    pub column: u16,
    pub row: u16,
}

/// Decorative UI state derived from input events.
///
/// Holds only current values; nothing here keeps history.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// First page row shown at the top of the viewport.
    scroll_offset: u16,
    /// Total page height in rows.
    page_height: u16,
    /// Viewport width in columns.
    viewport_width: u16,
    /// Viewport height in rows.
    viewport_height: u16,
    /// Last known pointer position.
    mouse: Option<MousePosition>,
    /// Section currently under the reference line.
    active_section: Section,
    /// Whether the page has scrolled past the threshold.
    is_scrolled: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Scroll offset in virtual pixels.
    pub fn scroll_px(&self) -> f32 {
        self.scroll_offset as f32 * CELL_HEIGHT_PX
    }

    pub fn page_height(&self) -> u16 {
        self.page_height
    }

    pub fn viewport(&self) -> (u16, u16) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn mouse(&self) -> Option<MousePosition> {
        self.mouse
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Largest valid scroll offset for the current page and viewport.
    pub fn max_scroll(&self) -> u16 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    /// Record new viewport dimensions.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Record the page height after a layout pass.
    pub fn set_page_height(&mut self, rows: u16) {
        self.page_height = rows;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Move to `offset` and update the scrolled flag and active section.
    ///
    /// Returns `true` if the active section changed. When no section
    /// crosses the reference line the previous one stays active.
    pub fn on_scroll(&mut self, offset: u16, spans: &[SectionSpan]) -> bool {
        self.scroll_offset = offset.min(self.max_scroll());
        self.is_scrolled = self.scroll_px() > SCROLLED_THRESHOLD_PX;

        match detect_active(spans, self.scroll_offset, reference_row()) {
            Some(section) if section != self.active_section => {
                self.active_section = section;
                true
            }
            _ => false,
        }
    }

    /// Re-evaluate the active section at the current offset.
    pub fn refresh(&mut self, spans: &[SectionSpan]) -> bool {
        self.on_scroll(self.scroll_offset, spans)
    }

    /// Scroll by a signed number of rows.
    pub fn scroll_by(&mut self, delta: i32, spans: &[SectionSpan]) -> bool {
        let target = (self.scroll_offset as i32 + delta).clamp(0, u16::MAX as i32) as u16;
        self.on_scroll(target, spans)
    }

    /// Scroll offset that puts `section` at the top of the viewport.
    pub fn section_target(&self, section: Section, spans: &[SectionSpan]) -> Option<u16> {
        spans
            .iter()
            .find(|span| span.section == section)
            .map(|span| span.top.min(self.max_scroll()))
    }

    /// Scroll so that `section` starts at the top of the viewport.
    pub fn scroll_to_section(&mut self, section: Section, spans: &[SectionSpan]) -> bool {
        match self.section_target(section, spans) {
            Some(offset) => self.on_scroll(offset, spans),
            None => false,
        }
    }

    /// Record the pointer position for the glow.
    pub fn on_mouse_move(&mut self, column: u16, row: u16) {
        self.mouse = Some(MousePosition { column, row });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        let mut top = 0;
        Section::ALL
            .iter()
            .map(|&section| {
                let span = SectionSpan {
                    section,
                    top,
                    height: 20,
                };
                top += 20;
                span
            })
            .collect()
    }

    fn view(spans: &[SectionSpan]) -> ViewState {
        let mut view = ViewState::new();
        view.on_resize(80, 24);
        view.set_page_height(spans.last().map(|s| s.bottom()).unwrap_or(0));
        view
    }

    #[test]
    fn test_reference_row() {
        assert_eq!(reference_row(), 6);
    }

    #[test]
    fn test_detect_active_picks_first_hit() {
        let spans = spans();
        for scroll in 0..140 {
            let first = spans.iter().find(|span| {
                let top = span.top as i32 - scroll as i32;
                let bottom = span.bottom() as i32 - scroll as i32;
                top <= 6 && bottom >= 6
            });
            assert_eq!(
                detect_active(&spans, scroll, 6),
                first.map(|span| span.section)
            );
        }
    }

    #[test]
    fn test_shared_boundary_goes_to_earlier_section() {
        let spans = spans();
        // Row 20 is both the bottom edge of the hero and the top of About
        assert_eq!(detect_active(&spans, 14, 6), Some(Section::Hero));
        assert_eq!(detect_active(&spans, 15, 6), Some(Section::About));
        // Bottom edge of the last section still counts
        assert_eq!(detect_active(&spans, 134, 6), Some(Section::Contact));
        assert_eq!(detect_active(&spans, 135, 6), None);
    }

    #[test]
    fn test_detect_active_is_idempotent() {
        let spans = spans();
        for scroll in [0, 13, 14, 15, 40, 99] {
            let first = detect_active(&spans, scroll, 6);
            assert_eq!(first, detect_active(&spans, scroll, 6));
        }
        assert_eq!(detect_active(&spans, 0, 6), Some(Section::Hero));
        assert_eq!(detect_active(&spans, 13, 6), Some(Section::Hero));
    }

    #[test]
    fn test_detect_active_none_outside_page() {
        let spans = spans();
        assert_eq!(detect_active(&spans, 200, 6), None);
        assert_eq!(detect_active(&[], 0, 6), None);
    }

    #[test]
    fn test_on_scroll_updates_state() {
        let spans = spans();
        let mut view = view(&spans);
        assert_eq!(view.active_section(), Section::Hero);
        assert!(!view.is_scrolled());

        assert!(view.on_scroll(30, &spans));
        assert_eq!(view.active_section(), Section::About);
        assert!(view.is_scrolled());

        // Same offset again changes nothing
        assert!(!view.on_scroll(30, &spans));
        assert_eq!(view.active_section(), Section::About);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let spans = spans();
        let mut view = view(&spans);
        view.scroll_by(10_000, &spans);
        assert_eq!(view.scroll_offset(), view.max_scroll());
        view.scroll_by(-10_000, &spans);
        assert_eq!(view.scroll_offset(), 0);
    }

    #[test]
    fn test_missing_section_keeps_previous() {
        let spans = spans();
        let mut view = view(&spans);
        view.on_scroll(60, &spans);
        let active = view.active_section();
        // Only the hero is known; the reference line misses it
        assert!(!view.on_scroll(60, &spans[..1]));
        assert_eq!(view.active_section(), active);
    }

    #[test]
    fn test_scroll_to_section() {
        let spans = spans();
        let mut view = view(&spans);
        view.scroll_to_section(Section::Projects, &spans);
        assert_eq!(view.scroll_offset(), 80);
        assert_eq!(view.active_section(), Section::Projects);
    }

    #[test]
    fn test_section_target_is_clamped() {
        let spans = spans();
        let view = view(&spans);
        assert_eq!(view.section_target(Section::About, &spans), Some(20));
        // 140 page rows in a 24 row viewport
        assert_eq!(view.section_target(Section::Contact, &spans), Some(116));
        assert_eq!(view.section_target(Section::About, &[]), None);
    }

    #[test]
    fn test_mouse_tracking() {
        let mut view = ViewState::new();
        assert!(view.mouse().is_none());
        view.on_mouse_move(10, 4);
        view.on_mouse_move(12, 5);
        assert_eq!(view.mouse(), Some(MousePosition { column: 12, row: 5 }));
    }
}
