//! Background animation state management.

use hexfolio_core::{
    AnimationSpeed, AppearanceSettings, CELL_HEIGHT_PX, CELL_WIDTH_PX, ColorTheme,
    EffectSettings, Surface, ViewState,
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

use crate::animations::{circuit::CircuitField, glow, hex_grid::HexGrid, matrix::MatrixRain};
use crate::color::{blend_over_black, lerp_rgb};
use crate::timer::IntervalTimer;

/// Gain applied to hexagon opacity so the faint outlines survive on a terminal.
const HEX_GAIN: f32 = 2.0;

/// Hexagons dimmer than this are not drawn.
const HEX_MIN_ALPHA: f32 = 0.02;

/// Gain applied to circuit line opacity.
const CIRCUIT_GAIN: f32 = 0.8;

/// Segments used to approximate a circuit line's gradient.
const GRADIENT_STEPS: usize = 8;

/// Radius of the dot at a circuit line's head, in virtual pixels.
const HEAD_RADIUS_PX: f64 = 3.0;

/// Background animation state.
///
/// Owns the page layer (hex grid and circuit lines, sized to the whole
/// page) and the viewport layer (matrix rain). The page layer advances
/// on the frame timer, the rain on its own timer.
#[derive(Debug)]
pub struct BackgroundState {
    /// Hexagon lattice covering the page.
    hex_grid: HexGrid,
    /// Circuit-line particles on the page.
    circuits: CircuitField,
    /// Rain state for the viewport.
    matrix: MatrixRain,
    /// Paces the page layer at the configured frame interval.
    frame_timer: IntervalTimer,
    /// Drives the rain independently of the frame rate.
    matrix_timer: IntervalTimer,
    /// Tuning values.
    settings: EffectSettings,
    /// Global animation speed.
    speed: AnimationSpeed,
    /// Page surface, `None` until a non-empty page is known.
    page_surface: Option<Surface>,
    /// Last known viewport width and height in cells.
    viewport: (u16, u16),
    /// Cleared by `stop`; a stopped state never advances again.
    running: bool,
    rng: StdRng,
}

impl BackgroundState {
    /// Create a new background state seeded from the OS.
    pub fn new(settings: EffectSettings, speed: AnimationSpeed) -> Self {
        Self::with_rng(settings, speed, StdRng::from_entropy())
    }

    /// Create a deterministic background state.
    pub fn with_seed(settings: EffectSettings, speed: AnimationSpeed, seed: u64) -> Self {
        Self::with_rng(settings, speed, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: EffectSettings, speed: AnimationSpeed, mut rng: StdRng) -> Self {
        let settings = settings.sanitized();
        let frame_timer = IntervalTimer::new(settings.frame_interval_ms);
        let matrix_timer = IntervalTimer::new(speed.scale_period_ms(settings.matrix_interval_ms));
        let circuits = CircuitField::new(settings.circuit_count, None, &mut rng);
        Self {
            hex_grid: HexGrid::default(),
            circuits,
            matrix: MatrixRain::new(0, 0, &settings),
            frame_timer,
            matrix_timer,
            settings,
            speed,
            page_surface: None,
            viewport: (0, 0),
            running: false,
            rng,
        }
    }

    /// Start the frame and rain timers.
    pub fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.frame_timer.start(now_ms);
        self.matrix_timer.start(now_ms);
    }

    /// Stop every loop and timer.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("stopping background animations");
        }
        self.running = false;
        self.frame_timer.stop();
        self.matrix_timer.stop();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn hex_grid(&self) -> &HexGrid {
        &self.hex_grid
    }

    pub fn circuits(&self) -> &CircuitField {
        &self.circuits
    }

    pub fn matrix(&self) -> &MatrixRain {
        &self.matrix
    }

    pub fn page_surface(&self) -> Option<Surface> {
        self.page_surface
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    /// Change the animation speed, retiming the rain.
    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
        self.matrix_timer
            .set_period(speed.scale_period_ms(self.settings.matrix_interval_ms));
    }

    /// Record viewport and page dimensions.
    ///
    /// The rain is rebuilt when the viewport changes; the hex grid is laid
    /// out again when the page surface changes.
    pub fn resize(&mut self, width: u16, height: u16, page_rows: u16) {
        if self.viewport != (width, height) {
            self.viewport = (width, height);
            self.matrix = MatrixRain::new(width, height, &self.settings);
        }

        let page_surface = Surface::from_cells(width, page_rows);
        if page_surface != self.page_surface {
            self.page_surface = page_surface;
            self.hex_grid = HexGrid::layout(page_surface, self.settings.hex_size, &mut self.rng);
            log::debug!(
                "page surface changed to {page_surface:?}, hex grid {}x{}",
                self.hex_grid.rows(),
                self.hex_grid.cols()
            );
            self.circuits.set_surface(page_surface, &mut self.rng);
        }
    }

    /// Run the animation frames and rain ticks due at `now_ms`.
    ///
    /// Returns the number of rain ticks run. Does nothing once stopped.
    pub fn advance(&mut self, now_ms: u64) -> u32 {
        if !self.running {
            return 0;
        }

        for _ in 0..self.frame_timer.poll(now_ms) {
            self.step_frame();
        }

        let ticks = self.matrix_timer.poll(now_ms);
        for _ in 0..ticks {
            self.matrix.tick(&mut self.rng);
        }
        ticks
    }

    /// Advance the page layer by one frame.
    pub fn step_frame(&mut self) {
        if self.page_surface.is_none() {
            log::trace!("no page surface, skipping frame");
            return;
        }
        let scale = self.speed.multiplier();
        self.hex_grid.advance(self.settings.hex_pulse_step * scale);
        self.circuits.update(scale, &mut self.rng);
    }

    /// Render all enabled layers into `area`.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &ViewState,
        appearance: &AppearanceSettings,
    ) {
        if area.is_empty() {
            return;
        }
        let theme = appearance.theme;

        if appearance.show_matrix {
            self.render_matrix(frame, area, theme);
        }
        if appearance.show_hex_grid || appearance.show_circuits {
            self.render_page_layer(
                frame,
                area,
                view.scroll_px(),
                theme,
                appearance.show_hex_grid,
                appearance.show_circuits,
            );
        }
        if appearance.show_glow
            && let Some(mouse) = view.mouse()
        {
            glow::render_glow(frame.buffer_mut(), area, mouse, theme);
        }
    }

    /// Render the matrix rain fixed to the viewport.
    fn render_matrix(&self, frame: &mut Frame, area: Rect, theme: ColorTheme) {
        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| self.matrix.render_char(x, y, theme))
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Render the hex grid and circuit lines visible at `scroll_px`.
    fn render_page_layer(
        &self,
        frame: &mut Frame,
        area: Rect,
        scroll_px: f32,
        theme: ColorTheme,
        show_hex: bool,
        show_circuits: bool,
    ) {
        let width = area.width as f64 * CELL_WIDTH_PX as f64;
        let height = area.height as f64 * CELL_HEIGHT_PX as f64;
        let top = scroll_px;
        let bottom = scroll_px + height as f32;

        // Canvas y grows upward; page y grows downward from the scroll offset
        let to_canvas = |x: f32, y: f32| (x as f64, height - (y - scroll_px) as f64);

        let accent = theme.accent_rgb();
        let deep = theme.deep_rgb();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                if show_hex {
                    for cell in self.hex_grid.visible(top, bottom) {
                        let alpha = cell.display_opacity() * HEX_GAIN;
                        if alpha < HEX_MIN_ALPHA {
                            continue;
                        }
                        let color = blend_over_black(accent, alpha);
                        let v = cell.vertices();
                        for (a, b) in v.iter().zip(v.iter().cycle().skip(1)) {
                            let (x1, y1) = to_canvas(a.0, a.1);
                            let (x2, y2) = to_canvas(b.0, b.1);
                            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                        }
                    }
                    ctx.layer();
                }

                if show_circuits {
                    for line in self.circuits.lines() {
                        let head = line.head();
                        for step in 0..GRADIENT_STEPS {
                            let t0 = step as f32 / GRADIENT_STEPS as f32;
                            let t1 = (step + 1) as f32 / GRADIENT_STEPS as f32;
                            let (alpha, mix) = line.gradient_at((t0 + t1) / 2.0);
                            let rgb = lerp_rgb(accent, deep, mix);
                            let color = blend_over_black(rgb, alpha * CIRCUIT_GAIN);
                            let p0 = lerp_point(line.start, head, t0);
                            let p1 = lerp_point(line.start, head, t1);
                            let (x1, y1) = to_canvas(p0.0, p0.1);
                            let (x2, y2) = to_canvas(p1.0, p1.1);
                            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                        }

                        let (hx, hy) = to_canvas(head.0, head.1);
                        ctx.draw(&Circle {
                            x: hx,
                            y: hy,
                            radius: HEAD_RADIUS_PX,
                            color: blend_over_black(accent, line.opacity),
                        });
                    }
                }
            });

        frame.render_widget(canvas, area);
    }
}

fn lerp_point(a: (f32, f32), b: (f32, f32), t: f32) -> (f32, f32) {
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

impl Drop for BackgroundState {
    fn drop(&mut self) {
        self.stop();
    }
}
