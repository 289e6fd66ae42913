//! Background animation rendering for hexfolio.
//!
//! This crate provides the decorative layers drawn under the portfolio
//! page: a pulsing hexagon lattice and drifting circuit lines that scroll
//! with the page, matrix rain fixed to the viewport, a pointer glow and
//! the glitching title text. Each effect is a plain data structure
//! advanced by its own clock; [`BackgroundState`] owns them and draws
//! them into a ratatui frame.

mod animations;
mod chars;
mod color;
mod glitch;
mod state;
mod timer;

pub use animations::circuit::{CircuitField, CircuitLine};
pub use animations::hex_grid::{HexCell, HexGrid};
pub use animations::matrix::{MatrixRain, TrailCell};
pub use chars::{GLITCH_CHARS, MATRIX_CHARS};
pub use color::{blend_over_black, lerp_rgb};
pub use glitch::{GlitchPhase, GlitchText};
pub use state::BackgroundState;
pub use timer::IntervalTimer;
