//! Circuit lines: particles tracing a line between two random points.

use hexfolio_core::Surface;
use rand::Rng;

/// Slowest progress increment per frame.
const MIN_SPEED: f32 = 0.01;
/// Range added on top of [`MIN_SPEED`].
const SPEED_RANGE: f32 = 0.015;
/// Faintest particle opacity.
const MIN_OPACITY: f32 = 0.5;

/// One particle travelling from `start` to `target`.
#[derive(Debug, Clone)]
pub struct CircuitLine {
    pub start: (f32, f32),
    pub target: (f32, f32),
    /// Fraction of the path travelled, in `[0, 1)`.
    pub progress: f32,
    /// Progress added per frame.
    pub speed: f32,
    pub opacity: f32,
}

impl CircuitLine {
    pub fn new<R: Rng>(surface: Surface, rng: &mut R) -> Self {
        let mut line = Self {
            start: (0.0, 0.0),
            target: (0.0, 0.0),
            progress: 0.0,
            speed: 0.0,
            opacity: 0.0,
        };
        line.reset(surface, rng);
        line
    }

    /// Pick new endpoints, speed and opacity and restart from the beginning.
    pub fn reset<R: Rng>(&mut self, surface: Surface, rng: &mut R) {
        self.start = random_point(surface, rng);
        self.target = random_point(surface, rng);
        self.progress = 0.0;
        self.speed = MIN_SPEED + rng.gen_range(0.0..SPEED_RANGE);
        self.opacity = MIN_OPACITY + rng.gen_range(0.0..1.0 - MIN_OPACITY);
    }

    /// Advance along the path; a finished traversal restarts at random.
    pub fn update<R: Rng>(&mut self, surface: Surface, speed_scale: f32, rng: &mut R) {
        self.progress += self.speed * speed_scale;
        if self.progress >= 1.0 {
            self.reset(surface, rng);
        }
    }

    /// Current position of the travelling head.
    pub fn head(&self) -> (f32, f32) {
        (
            self.start.0 + (self.target.0 - self.start.0) * self.progress,
            self.start.1 + (self.target.1 - self.start.1) * self.progress,
        )
    }

    /// Stroke alpha and deep-colour mix at fraction `t` of the drawn segment.
    ///
    /// The stroke fades in from transparent at the tail, reaches full
    /// opacity halfway and shifts toward the deep accent at 0.8 opacity at
    /// the head.
    pub fn gradient_at(&self, t: f32) -> (f32, f32) {
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            (self.opacity * t / 0.5, 0.0)
        } else {
            let k = (t - 0.5) / 0.5;
            (self.opacity * (1.0 - 0.2 * k), k)
        }
    }
}

fn random_point<R: Rng>(surface: Surface, rng: &mut R) -> (f32, f32) {
    (
        rng.gen_range(0.0..surface.width()),
        rng.gen_range(0.0..surface.height()),
    )
}

/// Fixed-size collection of circuit lines.
#[derive(Debug, Clone, Default)]
pub struct CircuitField {
    lines: Vec<CircuitLine>,
    count: usize,
    surface: Option<Surface>,
}

impl CircuitField {
    pub fn new<R: Rng>(count: usize, surface: Option<Surface>, rng: &mut R) -> Self {
        let mut field = Self {
            lines: Vec::with_capacity(count),
            count,
            surface: None,
        };
        field.set_surface(surface, rng);
        field
    }

    /// Use a new surface for future resets.
    ///
    /// Lines in flight finish their current path. The collection is
    /// populated the first time a surface becomes available.
    pub fn set_surface<R: Rng>(&mut self, surface: Option<Surface>, rng: &mut R) {
        self.surface = surface;
        if let Some(s) = surface {
            while self.lines.len() < self.count {
                self.lines.push(CircuitLine::new(s, rng));
            }
        }
    }

    /// Advance every line; does nothing without a surface.
    pub fn update<R: Rng>(&mut self, speed_scale: f32, rng: &mut R) {
        let Some(surface) = self.surface else {
            return;
        };
        for line in &mut self.lines {
            line.update(surface, speed_scale, rng);
        }
    }

    pub fn lines(&self) -> &[CircuitLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn surface() -> Surface {
        Surface::new(1200.0, 800.0).unwrap()
    }

    #[test]
    fn test_reset_ranges() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let line = CircuitLine::new(surface(), &mut rng);
            assert_eq!(line.progress, 0.0);
            assert!((0.01..=0.025).contains(&line.speed));
            assert!((0.5..=1.0).contains(&line.opacity));
            assert!(surface().contains(line.start.0, line.start.1));
            assert!(surface().contains(line.target.0, line.target.1));
        }
    }

    #[test]
    fn test_progress_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut field = CircuitField::new(30, Some(surface()), &mut rng);
        assert_eq!(field.len(), 30);
        for _ in 0..1_000 {
            field.update(1.0, &mut rng);
            for line in field.lines() {
                assert!((0.0..1.0).contains(&line.progress));
            }
        }
        assert_eq!(field.len(), 30);
    }

    #[test]
    fn test_completion_restarts() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut line = CircuitLine::new(surface(), &mut rng);
        line.progress = 0.999;
        line.speed = 0.02;
        line.update(surface(), 1.0, &mut rng);
        assert_eq!(line.progress, 0.0);
        assert!((0.01..=0.025).contains(&line.speed));
    }

    #[test]
    fn test_head_interpolates() {
        let line = CircuitLine {
            start: (0.0, 100.0),
            target: (200.0, 300.0),
            progress: 0.25,
            speed: 0.01,
            opacity: 1.0,
        };
        assert_eq!(line.head(), (50.0, 150.0));
    }

    #[test]
    fn test_gradient_stops() {
        let line = CircuitLine {
            start: (0.0, 0.0),
            target: (1.0, 1.0),
            progress: 0.5,
            speed: 0.01,
            opacity: 0.8,
        };
        assert_eq!(line.gradient_at(0.0), (0.0, 0.0));
        assert!((line.gradient_at(0.5).0 - 0.8).abs() < 1e-6);
        let (alpha, mix) = line.gradient_at(1.0);
        assert!((alpha - 0.64).abs() < 1e-6);
        assert_eq!(mix, 1.0);
    }

    #[test]
    fn test_no_surface_skips_update() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut field = CircuitField::new(30, None, &mut rng);
        assert!(field.is_empty());
        field.update(1.0, &mut rng);
        assert!(field.is_empty());

        field.set_surface(Some(surface()), &mut rng);
        assert_eq!(field.len(), 30);
    }
}
