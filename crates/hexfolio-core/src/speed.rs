//! Animation speed presets.

use serde::{Deserialize, Serialize};

/// Global animation speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Factor applied to per-frame increments (hex pulse, circuit progress).
    pub fn multiplier(&self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Scale a timer period so faster speeds tick more often.
    pub fn scale_period_ms(&self, period_ms: u64) -> u64 {
        ((period_ms as f32 / self.multiplier()) as u64).max(1)
    }

    pub fn next(&self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_period() {
        assert_eq!(AnimationSpeed::Medium.scale_period_ms(30), 30);
        assert_eq!(AnimationSpeed::Slow.scale_period_ms(30), 60);
        assert_eq!(AnimationSpeed::Fast.scale_period_ms(30), 15);
        assert_eq!(AnimationSpeed::Fast.scale_period_ms(1), 1);
    }
}
