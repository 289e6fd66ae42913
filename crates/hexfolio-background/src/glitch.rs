//! Glitching title text.
//!
//! Every `repeat_ms` the text is scrambled and then resolved left to
//! right, one step every `step_ms`, until it reads as the original again.

use hexfolio_core::GlitchSettings;
use rand::Rng;

use crate::chars::GLITCH_CHARS;
use crate::timer::IntervalTimer;

/// Smallest reveal rate accepted, so a burst always ends.
const MIN_REVEAL_PER_STEP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlitchPhase {
    /// Showing the original text.
    Stable,
    /// A burst is running; characters before `revealed` are resolved.
    Resolving { revealed: f32 },
}

/// State machine for the scramble-and-resolve title effect.
#[derive(Debug, Clone)]
pub struct GlitchText {
    original: String,
    display: Vec<char>,
    phase: GlitchPhase,
    reveal_per_step: f32,
    /// Starts a new burst.
    repeat: IntervalTimer,
    /// Advances the running burst.
    step: IntervalTimer,
}

impl GlitchText {
    pub fn new(settings: &GlitchSettings) -> Self {
        Self {
            original: settings.text.clone(),
            display: settings.text.chars().collect(),
            phase: GlitchPhase::Stable,
            reveal_per_step: settings.reveal_per_step.max(MIN_REVEAL_PER_STEP),
            repeat: IntervalTimer::new(settings.repeat_ms),
            step: IntervalTimer::new(settings.step_ms),
        }
    }

    /// The text as currently displayed.
    pub fn text(&self) -> String {
        self.display.iter().collect()
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_stable(&self) -> bool {
        self.phase == GlitchPhase::Stable
    }

    pub fn is_running(&self) -> bool {
        self.repeat.is_running()
    }

    /// Start the repeat timer; the first burst begins one period later.
    pub fn start(&mut self, now_ms: u64) {
        self.repeat.start(now_ms);
    }

    /// Stop both timers and settle on the original text.
    pub fn stop(&mut self) {
        self.repeat.stop();
        self.step.stop();
        self.settle();
    }

    /// Begin a scramble burst immediately.
    pub fn trigger(&mut self, now_ms: u64) {
        self.phase = GlitchPhase::Resolving { revealed: 0.0 };
        self.step.start(now_ms);
    }

    /// Run one scramble step. Returns `true` while the burst continues.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> bool {
        let GlitchPhase::Resolving { revealed } = self.phase else {
            return false;
        };

        self.display = self
            .original
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if (i as f32) < revealed {
                    ch
                } else {
                    GLITCH_CHARS[rng.gen_range(0..GLITCH_CHARS.len())]
                }
            })
            .collect();

        let revealed = revealed + self.reveal_per_step;
        if revealed >= self.display.len() as f32 {
            self.step.stop();
            self.settle();
            false
        } else {
            self.phase = GlitchPhase::Resolving { revealed };
            true
        }
    }

    /// Fire whatever timers are due at `now_ms`.
    pub fn advance<R: Rng>(&mut self, now_ms: u64, rng: &mut R) {
        if self.repeat.poll(now_ms) > 0 {
            self.trigger(now_ms);
        }
        for _ in 0..self.step.poll(now_ms) {
            if !self.step(rng) {
                break;
            }
        }
    }

    fn settle(&mut self) {
        self.display = self.original.chars().collect();
        self.phase = GlitchPhase::Stable;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn glitch(text: &str) -> GlitchText {
        GlitchText::new(&GlitchSettings {
            text: text.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_starts_stable() {
        let g = glitch("LOVE");
        assert!(g.is_stable());
        assert_eq!(g.text(), "LOVE");
    }

    #[test]
    fn test_burst_terminates_with_original() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut g = glitch("LOVE");
        g.trigger(0);

        let mut steps = 0;
        while g.step(&mut rng) {
            steps += 1;
            assert_eq!(g.text().chars().count(), 4);
            assert!(steps < 100);
        }
        // 4 chars revealed at half a char per step
        assert_eq!(steps + 1, 8);
        assert!(g.is_stable());
        assert_eq!(g.text(), "LOVE");
    }

    #[test]
    fn test_resolved_prefix_is_kept() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut g = glitch("HEXFOLIO");
        g.trigger(0);
        for _ in 0..5 {
            g.step(&mut rng);
        }
        // revealed = 2.0 at the fifth step, so the first two are fixed
        let text: Vec<char> = g.text().chars().collect();
        assert_eq!(text[0], 'H');
        assert_eq!(text[1], 'E');
        assert!(text.iter().all(|c| GLITCH_CHARS.contains(c)));
    }

    #[test]
    fn test_timers_drive_bursts() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut g = glitch("LOVE");
        g.start(0);

        g.advance(3_999, &mut rng);
        assert!(g.is_stable());

        g.advance(4_000, &mut rng);
        assert!(!g.is_stable());

        // 8 steps of 50 ms resolve the burst
        let mut now = 4_000;
        while now <= 4_000 + 8 * 50 {
            now += 50;
            g.advance(now, &mut rng);
        }
        assert!(g.is_stable());
        assert_eq!(g.text(), "LOVE");
    }

    #[test]
    fn test_stop_settles_and_halts() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut g = glitch("LOVE");
        g.start(0);
        g.trigger(0);
        g.step(&mut rng);
        g.stop();
        assert!(g.is_stable());
        assert_eq!(g.text(), "LOVE");
        g.advance(100_000, &mut rng);
        assert!(g.is_stable());
        assert!(!g.is_running());
    }

    #[test]
    fn test_empty_text_resolves_at_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut g = glitch("");
        g.trigger(0);
        assert!(!g.step(&mut rng));
        assert_eq!(g.text(), "");
    }
}
