mod logging;
mod page;

use std::io;
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use hexfolio_background::{BackgroundState, GlitchText};
use hexfolio_config::Config;
use hexfolio_core::{Section, ViewState};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::page::{NAV_ROWS, Page, PageView};

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Some(path) = logging::init() {
        log::info!("logging to {}", path.display());
    }

    let config = Config::load();
    let terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture)
        .wrap_err("failed to enable mouse capture")
        .and_then(|()| App::new(config).run(terminal));
    if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
        log::warn!("failed to disable mouse capture: {err}");
    }
    ratatui::restore();
    log::info!("hexfolio exited");
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Settings and page content.
    config: Config,
    /// Scroll, pointer and active-section state.
    view: ViewState,
    /// Current page layout.
    page: Page,
    /// Hex grid, circuit lines and matrix rain.
    background: BackgroundState,
    /// Title text effect.
    glitch: GlitchText,
    /// Randomness for the glitch effect.
    rng: StdRng,
    /// Monotonic clock for every timer.
    clock: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let background = BackgroundState::new(config.effects.clone(), config.appearance.speed);
        Self::with_parts(config, background, StdRng::from_entropy())
    }

    #[cfg(test)]
    fn with_seed(config: Config, seed: u64) -> Self {
        let background =
            BackgroundState::with_seed(config.effects.clone(), config.appearance.speed, seed);
        Self::with_parts(config, background, StdRng::seed_from_u64(seed))
    }

    fn with_parts(config: Config, background: BackgroundState, rng: StdRng) -> Self {
        let glitch = GlitchText::new(&config.glitch);
        Self {
            running: false,
            config,
            view: ViewState::new(),
            page: Page::default(),
            background,
            glitch,
            rng,
            clock: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.on_resize(size.width, size.height);

        let now = self.now_ms();
        self.running = true;
        self.background.start(now);
        self.glitch.start(now);
        log::info!("started");

        let frame_interval = Duration::from_millis(self.config.effects.frame_interval_ms.max(1));
        while self.running {
            let now = self.now_ms();
            self.background.advance(now);
            self.glitch.advance(now, &mut self.rng);
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(frame_interval)?;
        }

        self.stop();
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.clock.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let appearance = &self.config.appearance;

        self.background.render(frame, area, &self.view, appearance);

        let title = self.glitch.text();
        frame.render_widget(
            PageView {
                page: &self.page,
                scroll: self.view.scroll_offset(),
                title: &title,
                theme: appearance.theme,
            },
            area,
        );

        let chunks = Layout::vertical([
            Constraint::Length(NAV_ROWS), // Navigation bar
            Constraint::Fill(1),          // Page
            Constraint::Length(1),        // Help text
        ])
        .split(area);

        self.render_nav(frame, chunks[0], &title);
        self.render_help(frame, chunks[2]);
    }

    /// Render the fixed navigation bar.
    fn render_nav(&self, frame: &mut Frame, area: Rect, title: &str) {
        if area.is_empty() {
            return;
        }
        let theme = self.config.appearance.theme;
        let color = theme.color();
        if self.view.is_scrolled() {
            frame.render_widget(Clear, area);
        }

        let links: Vec<Span> = Section::ALL
            .iter()
            .filter(|s| s.in_nav())
            .flat_map(|section| {
                let style = if *section == self.view.active_section() {
                    Style::new()
                        .fg(color)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::new().dark_gray()
                };
                [
                    Span::styled(format!("{}", section.index() + 1), Style::new().fg(color)),
                    Span::styled(format!(" {}", section.label()), style),
                    Span::raw("  "),
                ]
            })
            .collect();
        let links = Line::from(links);
        let links_width = (links.width() as u16).min(area.width);

        let [brand_area, links_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(links_width)])
                .areas(Rect { height: 1, ..area });

        let brand = Line::from(vec![
            Span::raw(" "),
            "◆ ".fg(color),
            Span::styled(title.to_string(), Style::new().fg(color).bold()),
        ]);
        frame.render_widget(brand, brand_area);
        frame.render_widget(links, links_area);

        if self.view.is_scrolled() && area.height > 1 {
            let rule = Paragraph::new("─".repeat(area.width as usize)).fg(theme.deep_color());
            frame.render_widget(rule, Rect { y: area.y + 1, height: 1, ..area });
        }
    }

    /// Render the help line.
    fn render_help(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() || frame.area().height <= NAV_ROWS + 1 {
            return;
        }
        let appearance = &self.config.appearance;
        let color = appearance.theme.color();
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "↑↓".bold().fg(color),
            " scroll  ".dark_gray(),
            "tab".bold().fg(color),
            " section  ".dark_gray(),
            "c".bold().fg(color),
            " cycle color  ".dark_gray(),
            "m".bold().fg(color),
            (if appearance.show_matrix { " matrix on  " } else { " matrix off  " }).dark_gray(),
            "s".bold().fg(color),
            format!(" speed {}", appearance.speed.label()).dark_gray(),
        ])
        .centered();
        frame.render_widget(Clear, area);
        frame.render_widget(help, area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval as timeout so animations keep running.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(width, height) => self.on_resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let page_rows = self.view.viewport().1.saturating_sub(NAV_ROWS).max(1) as i32;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.scroll_by(-1),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.scroll_by(1),
            (_, KeyCode::PageUp) => self.scroll_by(-page_rows),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.scroll_by(page_rows),
            (_, KeyCode::Home) => self.scroll_to(0),
            (_, KeyCode::End) => self.scroll_to(self.view.max_scroll()),
            (_, KeyCode::Tab) => self.jump_to(self.view.active_section().next()),
            (_, KeyCode::BackTab) => self.jump_to(self.view.active_section().prev()),
            (_, KeyCode::Char(c @ '1'..='9')) => {
                if let Some(section) = c.to_digit(10).and_then(Section::from_number) {
                    self.jump_to(section);
                }
            }
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('m')) => self.toggle_matrix(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            _ => {}
        }
    }

    /// Handles wheel and pointer movement.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_ROWS),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.view.on_mouse_move(mouse.column, mouse.row)
            }
            _ => {}
        }
    }

    /// Lay the page out for a new terminal size and resize every layer.
    fn on_resize(&mut self, width: u16, height: u16) {
        log::debug!("resize to {width}x{height}");
        self.view.on_resize(width, height);
        self.relayout();
    }

    /// Rebuild the page for the current viewport and theme.
    fn relayout(&mut self) {
        let (width, height) = self.view.viewport();
        self.page = Page::build(
            &self.config.content,
            self.glitch.original(),
            width,
            height,
            self.config.appearance.theme,
        );
        self.view.set_page_height(self.page.height());
        self.background.resize(width, height, self.page.height());
        let changed = self.view.refresh(self.page.spans());
        self.log_section_change(changed);
    }

    fn scroll_by(&mut self, rows: i32) {
        let changed = self.view.scroll_by(rows, self.page.spans());
        self.log_section_change(changed);
    }

    fn scroll_to(&mut self, offset: u16) {
        let changed = self.view.on_scroll(offset, self.page.spans());
        self.log_section_change(changed);
    }

    fn jump_to(&mut self, section: Section) {
        let changed = self.view.scroll_to_section(section, self.page.spans());
        self.log_section_change(changed);
    }

    fn log_section_change(&self, changed: bool) {
        if changed {
            log::debug!("active section: {}", self.view.active_section().id());
        }
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.config.appearance.theme = self.config.appearance.theme.next();
        self.relayout();
    }

    /// Show or hide the matrix rain.
    fn toggle_matrix(&mut self) {
        self.config.appearance.show_matrix = !self.config.appearance.show_matrix;
    }

    /// Cycle through animation speeds.
    fn cycle_speed(&mut self) {
        let speed = self.config.appearance.speed.next();
        self.config.appearance.speed = speed;
        self.background.set_speed(speed);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }

    /// Stop every animation loop and timer.
    fn stop(&mut self) {
        self.background.stop();
        self.glitch.stop();
        log::info!("stopped all animations");
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use hexfolio_core::{AnimationSpeed, ColorTheme};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn app() -> App {
        let mut app = App::with_seed(Config::default(), 7);
        app.running = true;
        app.on_resize(100, 30);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = self::app();
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
        assert_eq!(app.config.appearance.theme, ColorTheme::Emerald);
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let mut app = app();
        for section in Section::ALL {
            let key = char::from_digit(section.index() as u32 + 1, 10).unwrap();
            press(&mut app, KeyCode::Char(key));
            assert_eq!(app.view.active_section(), section);
            assert_eq!(
                app.view.scroll_offset(),
                app.page.span(section).unwrap().top
            );
        }
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.view.active_section(), Section::Contact);
    }

    #[test]
    fn test_tab_walks_sections() {
        let mut app = app();
        let mut seen = vec![app.view.active_section()];
        for _ in 0..Section::ALL.len() {
            press(&mut app, KeyCode::Tab);
            seen.push(app.view.active_section());
        }
        assert_eq!(&seen[..Section::ALL.len()], &Section::ALL);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view.active_section(), Section::Education);
    }

    #[test]
    fn test_scroll_keys_clamp() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.view.scroll_offset(), 0);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.view.scroll_offset(), 1);
        press(&mut app, KeyCode::End);
        assert_eq!(app.view.scroll_offset(), app.view.max_scroll());
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.view.scroll_offset(), app.view.max_scroll());
        press(&mut app, KeyCode::Home);
        assert_eq!(app.view.scroll_offset(), 0);
        assert!(!app.view.is_scrolled());
    }

    #[test]
    fn test_mouse_wheel_and_pointer() {
        let mut app = app();
        let event = |kind| MouseEvent {
            kind,
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        app.on_mouse_event(event(MouseEventKind::ScrollDown));
        assert_eq!(app.view.scroll_offset(), 3);
        app.on_mouse_event(event(MouseEventKind::Moved));
        let mouse = app.view.mouse().unwrap();
        assert_eq!((mouse.column, mouse.row), (12, 4));
    }

    #[test]
    fn test_toggles() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.config.appearance.theme, ColorTheme::Cyan);
        press(&mut app, KeyCode::Char('m'));
        assert!(!app.config.appearance.show_matrix);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.config.appearance.speed, AnimationSpeed::Fast);
        assert_eq!(app.background.speed(), AnimationSpeed::Fast);
    }

    #[test]
    fn test_resize_rebuilds_layers() {
        let mut app = app();
        app.on_resize(60, 20);
        assert_eq!(app.view.viewport(), (60, 20));
        assert_eq!(app.view.page_height(), app.page.height());
        assert_eq!(app.background.matrix().dimensions(), (60, 20));
        assert!(app.background.page_surface().is_some());
    }

    #[test]
    fn test_resize_refreshes_active_section() {
        let mut app = app();
        app.jump_to(Section::Projects);
        app.on_resize(40, 12);

        // The reflowed page moves every span; the active section follows
        assert!(!app.view.refresh(app.page.spans()));
        app.on_resize(100, 30);
        assert!(!app.view.refresh(app.page.spans()));
    }

    #[test]
    fn test_stop_halts_animations() {
        let mut app = app();
        app.background.start(0);
        app.glitch.start(0);
        app.stop();
        assert!(!app.background.is_running());
        assert!(!app.glitch.is_running());
        assert_eq!(app.glitch.text(), app.glitch.original());
    }

    #[test]
    fn test_render_frame() {
        let mut app = app();
        app.on_resize(80, 24);
        app.background.start(0);
        app.background.advance(100);
        app.view.on_mouse_move(40, 12);
        app.scroll_by(10);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let top: String = (0..80).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(top.contains("About"));
        let bottom: String = (0..80).map(|x| buffer[(x, 23)].symbol()).collect();
        assert!(bottom.contains("quit"));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let mut app = app();
        app.on_resize(1, 1);
        let mut terminal = Terminal::new(TestBackend::new(1, 1)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }
}
