//! Tuning values for the animated layers.
//!
//! None of these constants are load-bearing; they reproduce the look of
//! the page and can be overridden from the config file.

use serde::{Deserialize, Serialize};

use crate::speed::AnimationSpeed;
use crate::theme::ColorTheme;

/// Smallest hexagon circumradius accepted, in virtual pixels.
pub const MIN_HEX_SIZE: f32 = 8.0;

/// Most circuit-line particles accepted.
pub const MAX_CIRCUIT_COUNT: usize = 500;

/// Geometry and timing of the background effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Hexagon circumradius in virtual pixels.
    pub hex_size: f32,
    /// Phase added to every hexagon each frame (radians).
    pub hex_pulse_step: f32,
    /// Number of circuit-line particles.
    pub circuit_count: usize,
    /// Period of the matrix rain timer.
    pub matrix_interval_ms: u64,
    /// Fraction of trail brightness removed per rain tick.
    pub matrix_fade: f32,
    /// Chance per tick that a drop past the bottom restarts at the top.
    pub matrix_reset_chance: f64,
    /// Width of one rain column in cells.
    pub matrix_column_width: u16,
    /// Target duration of one animation frame.
    pub frame_interval_ms: u64,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            hex_size: 40.0,
            hex_pulse_step: 0.03,
            circuit_count: 30,
            matrix_interval_ms: 30,
            matrix_fade: 0.08,
            matrix_reset_chance: 0.025,
            matrix_column_width: 2,
            frame_interval_ms: 33,
        }
    }
}

impl EffectSettings {
    /// Replace values the effects cannot run with.
    ///
    /// Non-finite numbers fall back to their defaults; sizes, counts,
    /// probabilities and periods are clamped to workable ranges.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            hex_size: finite_or(self.hex_size, defaults.hex_size).max(MIN_HEX_SIZE),
            hex_pulse_step: finite_or(self.hex_pulse_step, defaults.hex_pulse_step),
            circuit_count: self.circuit_count.min(MAX_CIRCUIT_COUNT),
            matrix_interval_ms: self.matrix_interval_ms.max(1),
            matrix_fade: finite_or(self.matrix_fade, defaults.matrix_fade).clamp(0.0, 1.0),
            matrix_reset_chance: if self.matrix_reset_chance.is_finite() {
                self.matrix_reset_chance.clamp(0.0, 1.0)
            } else {
                defaults.matrix_reset_chance
            },
            matrix_column_width: self.matrix_column_width.max(1),
            frame_interval_ms: self.frame_interval_ms.max(1),
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

/// Timing of the title glitch effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlitchSettings {
    /// The string that gets scrambled and resolved.
    pub text: String,
    /// Pause between the start of two bursts.
    pub repeat_ms: u64,
    /// Period of one scramble step within a burst.
    pub step_ms: u64,
    /// Characters revealed per step; fractional values slow the reveal.
    pub reveal_per_step: f32,
}

impl Default for GlitchSettings {
    fn default() -> Self {
        Self {
            text: "LOVE".to_string(),
            repeat_ms: 4000,
            step_ms: 50,
            reveal_per_step: 0.5,
        }
    }
}

/// User-facing look and feel toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub theme: ColorTheme,
    pub speed: AnimationSpeed,
    pub show_hex_grid: bool,
    pub show_circuits: bool,
    pub show_matrix: bool,
    pub show_glow: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            speed: AnimationSpeed::default(),
            show_hex_grid: true,
            show_circuits: true,
            show_matrix: true,
            show_glow: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let settings = EffectSettings {
            hex_size: 60.0,
            matrix_reset_chance: 0.5,
            ..EffectSettings::default()
        };
        assert_eq!(settings.clone().sanitized(), settings);
    }

    #[test]
    fn test_sanitized_replaces_non_finite() {
        let settings = EffectSettings {
            hex_size: f32::NAN,
            hex_pulse_step: f32::INFINITY,
            matrix_fade: f32::NAN,
            matrix_reset_chance: f64::NAN,
            ..EffectSettings::default()
        }
        .sanitized();
        assert_eq!(settings, EffectSettings::default());
    }

    #[test]
    fn test_sanitized_clamps_extremes() {
        let settings = EffectSettings {
            hex_size: 0.001,
            circuit_count: usize::MAX,
            matrix_interval_ms: 0,
            matrix_fade: -3.0,
            matrix_reset_chance: 7.0,
            matrix_column_width: 0,
            frame_interval_ms: 0,
            ..EffectSettings::default()
        }
        .sanitized();
        assert_eq!(settings.hex_size, MIN_HEX_SIZE);
        assert_eq!(settings.circuit_count, MAX_CIRCUIT_COUNT);
        assert_eq!(settings.matrix_interval_ms, 1);
        assert_eq!(settings.matrix_fade, 0.0);
        assert_eq!(settings.matrix_reset_chance, 1.0);
        assert_eq!(settings.matrix_column_width, 1);
        assert_eq!(settings.frame_interval_ms, 1);
    }
}
