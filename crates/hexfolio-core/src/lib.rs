//! Core types shared by the hexfolio crates.
//!
//! Geometry, section bookkeeping, the scroll/pointer view state, colour
//! themes, effect tuning and the portfolio content model all live here so
//! the background, config and application crates agree on them.

mod content;
mod section;
mod settings;
mod speed;
mod surface;
mod theme;
mod view;

pub use content::{
    Contact, Education, Experience, Highlight, Portfolio, Project, SkillGroup,
};
pub use section::Section;
pub use settings::{
    AppearanceSettings, EffectSettings, GlitchSettings, MAX_CIRCUIT_COUNT, MIN_HEX_SIZE,
};
pub use speed::AnimationSpeed;
pub use surface::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Surface};
pub use theme::ColorTheme;
pub use view::{
    MousePosition, REFERENCE_LINE_PX, SCROLLED_THRESHOLD_PX, SectionSpan, ViewState,
    detect_active, reference_row,
};
