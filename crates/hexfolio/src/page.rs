//! Portfolio page layout and rendering.
//!
//! The page is laid out once per viewport size into a list of styled rows
//! plus the row span of every section. Rendering draws only visible,
//! non-blank characters so the background layers show through the gaps.

use hexfolio_background::lerp_rgb;
use hexfolio_core::{ColorTheme, Portfolio, Section, SectionSpan};
use hexfolio_fonts::{GLYPH_ROWS, build_title_art};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

/// Rows covered by the fixed navigation bar.
pub const NAV_ROWS: u16 = 2;

/// Widest text column on the page.
pub const MAX_COLUMN_WIDTH: u16 = 100;

/// Blank rows above and below each section's content.
const SECTION_PADDING: usize = 2;

/// Body text colour.
const TEXT: Color = Color::Rgb(203, 213, 225);

/// Secondary text colour.
const MUTED: Color = Color::Rgb(100, 116, 139);

/// One row of page text, starting `indent` cells into the column.
#[derive(Debug, Clone, Default)]
pub struct PageLine {
    pub indent: u16,
    pub spans: Vec<Span<'static>>,
}

impl PageLine {
    fn width(&self) -> usize {
        self.spans.iter().map(|s| s.content.chars().count()).sum()
    }
}

/// The laid out page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    lines: Vec<PageLine>,
    spans: Vec<SectionSpan>,
    /// First row of the block letter title.
    title_row: u16,
    /// Width of the text column.
    column_width: u16,
}

impl Page {
    /// Lay out `portfolio` for a `width` x `height` viewport.
    pub fn build(portfolio: &Portfolio, title: &str, width: u16, height: u16, theme: ColorTheme) -> Self {
        let column_width = width.saturating_sub(4).min(MAX_COLUMN_WIDTH).max(1);
        let mut builder = Builder::new(column_width as usize, theme);

        let title_row = builder.hero(portfolio, height);
        builder.section(Section::About, "About Me", |b| b.about(portfolio));
        builder.section(Section::Skills, "Technical Arsenal", |b| b.skills(portfolio));
        builder.section(Section::Experience, "Experience", |b| b.experience(portfolio));
        builder.section(Section::Projects, "Featured Projects", |b| b.projects(portfolio));
        builder.section(Section::Education, "Education & Certifications", |b| {
            b.education(portfolio)
        });
        builder.section(Section::Contact, "Let's Connect", |b| b.contact(portfolio));
        builder.footer(portfolio, title);

        // Every section must be able to reach the top of the viewport
        if let Some(last) = builder.spans.last() {
            let min_rows = last.top as usize + height as usize;
            while builder.lines.len() < min_rows {
                builder.blank(1);
            }
        }

        Self {
            lines: builder.lines,
            spans: builder.spans,
            title_row,
            column_width,
        }
    }

    /// Total page height in rows.
    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn lines(&self) -> &[PageLine] {
        &self.lines
    }

    pub fn title_row(&self) -> u16 {
        self.title_row
    }

    pub fn column_width(&self) -> u16 {
        self.column_width
    }

    /// Span of `section`, if laid out.
    pub fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans.iter().copied().find(|s| s.section == section)
    }
}

/// Accumulates page rows and section spans.
struct Builder {
    lines: Vec<PageLine>,
    spans: Vec<SectionSpan>,
    width: usize,
    theme: ColorTheme,
}

impl Builder {
    fn new(width: usize, theme: ColorTheme) -> Self {
        Self {
            lines: Vec::new(),
            spans: Vec::new(),
            width,
            theme,
        }
    }

    fn row(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    fn accent(&self) -> Style {
        Style::new().fg(self.theme.color())
    }

    fn blank(&mut self, rows: usize) {
        for _ in 0..rows {
            self.lines.push(PageLine::default());
        }
    }

    fn push(&mut self, indent: usize, spans: Vec<Span<'static>>) {
        self.lines.push(PageLine {
            indent: indent.min(u16::MAX as usize) as u16,
            spans,
        });
    }

    fn centered(&mut self, spans: Vec<Span<'static>>) {
        let line = PageLine { indent: 0, spans };
        let indent = self.width.saturating_sub(line.width()) / 2;
        self.push(indent, line.spans);
    }

    /// Word-wrapped text with a hanging indent.
    fn wrapped(&mut self, text: &str, style: Style, indent: usize) {
        for line in wrap(text, self.width.saturating_sub(indent).max(1)) {
            self.push(indent, vec![Span::styled(line, style)]);
        }
    }

    /// Word-wrapped text with every row centered.
    fn wrapped_centered(&mut self, text: &str, style: Style) {
        for line in wrap(text, self.width) {
            self.centered(vec![Span::styled(line, style)]);
        }
    }

    /// Bullet item: a marker followed by wrapped text aligned after it.
    fn bullet(&mut self, indent: usize, marker: &str, text: &str, style: Style) {
        let marker_width = marker.chars().count() + 1;
        let lines = wrap(text, self.width.saturating_sub(indent + marker_width).max(1));
        for (i, line) in lines.into_iter().enumerate() {
            if i == 0 {
                self.push(
                    indent,
                    vec![
                        Span::styled(format!("{marker} "), self.accent()),
                        Span::styled(line, style),
                    ],
                );
            } else {
                self.push(indent + marker_width, vec![Span::styled(line, style)]);
            }
        }
    }

    /// Lay out the hero, returning the row of the title art.
    fn hero(&mut self, portfolio: &Portfolio, viewport_height: u16) -> u16 {
        let mut hero = Builder::new(self.width, self.theme);
        hero.centered(vec![Span::styled(
            format!("[ {} ]", portfolio.role),
            self.accent().add_modifier(Modifier::BOLD),
        )]);
        hero.blank(1);
        let title_offset = hero.row();
        // Placeholder rows; the title is drawn live from the glitch state
        hero.blank(GLYPH_ROWS);
        hero.blank(1);
        hero.wrapped_centered(&portfolio.tagline, Style::new().fg(TEXT));
        hero.blank(1);
        hero.wrapped_centered(&portfolio.summary, Style::new().fg(MUTED));
        hero.blank(1);
        hero.centered(vec![
            Span::styled("[7]", self.accent().add_modifier(Modifier::BOLD)),
            Span::styled(" Get In Touch    ", Style::new().fg(TEXT)),
            Span::styled("[5]", self.accent().add_modifier(Modifier::BOLD)),
            Span::styled(" View Projects", Style::new().fg(TEXT)),
        ]);
        hero.blank(1);
        let links: Vec<&str> = [
            portfolio.contact.email.as_str(),
            portfolio.contact.linkedin.as_str(),
            portfolio.contact.github.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
        if !links.is_empty() {
            hero.wrapped_centered(&links.join("  ·  "), Style::new().fg(MUTED));
        }

        // At least one viewport tall, content centered below the nav bar
        let content = hero.lines.len();
        let total = (viewport_height as usize).max(content + NAV_ROWS as usize + 2);
        let free = total - content - NAV_ROWS as usize;
        let top = NAV_ROWS as usize + free / 2;

        let start = self.row();
        self.blank(top);
        self.lines.extend(hero.lines);
        while self.lines.len() < start as usize + total - 1 {
            self.blank(1);
        }
        self.centered(vec![Span::styled("scroll ↓", Style::new().fg(MUTED))]);

        self.spans.push(SectionSpan {
            section: Section::Hero,
            top: start,
            height: self.row() - start,
        });
        start + top as u16 + title_offset
    }

    /// Lay out a titled section and record its span.
    fn section(&mut self, section: Section, heading: &str, body: impl FnOnce(&mut Self)) {
        let top = self.row();
        self.blank(SECTION_PADDING);
        self.centered(vec![Span::styled(
            heading.to_string(),
            self.accent().add_modifier(Modifier::BOLD),
        )]);
        let rule = "─".repeat(heading.chars().count().min(self.width));
        self.centered(vec![Span::styled(rule, Style::new().fg(self.theme.deep_color()))]);
        self.blank(1);
        body(self);
        self.blank(SECTION_PADDING);

        self.spans.push(SectionSpan {
            section,
            top,
            height: self.row() - top,
        });
    }

    fn about(&mut self, portfolio: &Portfolio) {
        for (i, paragraph) in portfolio.about.iter().enumerate() {
            if i > 0 {
                self.blank(1);
            }
            self.wrapped(paragraph, Style::new().fg(TEXT), 0);
        }
        if !portfolio.highlights.is_empty() {
            self.blank(1);
        }
        for highlight in &portfolio.highlights {
            self.centered(vec![
                Span::styled(
                    format!("◆ {}", highlight.value),
                    self.accent().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", highlight.caption), Style::new().fg(MUTED)),
            ]);
        }
    }

    fn skills(&mut self, portfolio: &Portfolio) {
        for (i, group) in portfolio.skills.iter().enumerate() {
            if i > 0 {
                self.blank(1);
            }
            self.push(
                0,
                vec![Span::styled(
                    format!("▸ {}", group.name),
                    self.accent().add_modifier(Modifier::BOLD),
                )],
            );
            self.wrapped(&group.items.join(" · "), Style::new().fg(TEXT), 2);
        }
    }

    fn experience(&mut self, portfolio: &Portfolio) {
        for (i, job) in portfolio.experience.iter().enumerate() {
            if i > 0 {
                self.blank(1);
            }
            self.wrapped(&job.title, Style::new().fg(TEXT).add_modifier(Modifier::BOLD), 0);
            self.push(
                0,
                vec![
                    Span::styled(job.company.clone(), self.accent()),
                    Span::styled(format!("  {}", job.period), Style::new().fg(MUTED)),
                ],
            );
            for achievement in &job.achievements {
                self.bullet(2, "›", achievement, Style::new().fg(TEXT));
            }
        }
    }

    fn projects(&mut self, portfolio: &Portfolio) {
        for (i, project) in portfolio.projects.iter().enumerate() {
            if i > 0 {
                self.blank(1);
            }
            self.wrapped(&project.name, self.accent().add_modifier(Modifier::BOLD), 0);
            self.wrapped(&project.description, Style::new().fg(TEXT), 2);
            let tags: Vec<String> = project.tech.iter().map(|t| format!("[{t}]")).collect();
            if !tags.is_empty() {
                self.wrapped(&tags.join(" "), Style::new().fg(self.theme.deep_color()), 2);
            }
        }
    }

    fn education(&mut self, portfolio: &Portfolio) {
        for (i, entry) in portfolio.education.iter().enumerate() {
            if i > 0 {
                self.blank(1);
            }
            self.wrapped(&entry.title, Style::new().fg(TEXT).add_modifier(Modifier::BOLD), 0);
            self.wrapped(&entry.institution, self.accent(), 2);
            if !entry.note.is_empty() {
                self.wrapped(&entry.note, Style::new().fg(MUTED), 2);
            }
        }
        if !portfolio.certifications.is_empty() {
            self.blank(1);
            self.push(
                0,
                vec![Span::styled(
                    "Certifications",
                    self.accent().add_modifier(Modifier::BOLD),
                )],
            );
            for cert in &portfolio.certifications {
                self.bullet(2, "✓", cert, Style::new().fg(TEXT));
            }
        }
    }

    fn contact(&mut self, portfolio: &Portfolio) {
        let contact = &portfolio.contact;
        self.wrapped_centered(&contact.pitch, Style::new().fg(TEXT));
        self.blank(1);
        let entries = [
            ("Email", &contact.email),
            ("Phone", &contact.phone),
            ("LinkedIn", &contact.linkedin),
            ("GitHub", &contact.github),
            ("Location", &contact.location),
        ];
        for (label, value) in entries {
            if value.is_empty() {
                continue;
            }
            self.centered(vec![
                Span::styled(format!("{label}: "), self.accent().add_modifier(Modifier::BOLD)),
                Span::styled(value.clone(), Style::new().fg(TEXT)),
            ]);
        }
    }

    fn footer(&mut self, portfolio: &Portfolio, title: &str) {
        self.push(
            0,
            vec![Span::styled(
                "─".repeat(self.width),
                Style::new().fg(self.theme.deep_color()),
            )],
        );
        self.blank(1);
        self.centered(vec![Span::styled(
            format!("◆ {title}"),
            self.accent().add_modifier(Modifier::BOLD),
        )]);
        if !portfolio.footer.is_empty() {
            self.wrapped_centered(&portfolio.footer, Style::new().fg(MUTED));
        }
        self.blank(1);
    }
}

/// Greedy word wrap to `width` characters. Words longer than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.extend(word.iter());
                current_len += word.len();
                break;
            }
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }
            // Word alone is too long for a line
            let rest = word.split_off(width);
            lines.push(word.iter().collect());
            word = rest;
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Draws the visible slice of a [`Page`].
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub page: &'a Page,
    /// First page row shown at the top of the area.
    pub scroll: u16,
    /// Current (possibly scrambled) title text.
    pub title: &'a str,
    pub theme: ColorTheme,
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let left = area.x + area.width.saturating_sub(self.page.column_width) / 2;
        let right = area.right();
        let title_art = build_title_art(self.title);
        let title_rows = self.page.title_row..self.page.title_row.saturating_add(GLYPH_ROWS as u16);

        for row in 0..area.height {
            let y = area.y + row;
            let page_row = self.scroll.saturating_add(row);

            if title_rows.contains(&page_row) {
                let art = &title_art[(page_row - self.page.title_row) as usize];
                self.render_title_row(buf, area, y, art);
                continue;
            }

            let Some(line) = self.page.lines.get(page_row as usize) else {
                break;
            };
            let mut x = left.saturating_add(line.indent);
            for span in &line.spans {
                for ch in span.content.chars() {
                    if x >= right {
                        break;
                    }
                    if ch != ' ' {
                        buf[(x, y)].set_char(ch).set_style(span.style);
                    }
                    x += 1;
                }
            }
        }
    }
}

impl PageView<'_> {
    /// Draw one row of the title art with a horizontal accent gradient.
    fn render_title_row(&self, buf: &mut Buffer, area: Rect, y: u16, art: &str) {
        let width = art.chars().count();
        let start = area.x as usize + (area.width as usize).saturating_sub(width) / 2;
        let (from, to) = (self.theme.accent_rgb(), self.theme.deep_rgb());
        for (i, ch) in art.chars().enumerate() {
            let x = start + i;
            if x >= area.right() as usize {
                break;
            }
            if ch == ' ' {
                continue;
            }
            let t = if width > 1 { i as f32 / (width - 1) as f32 } else { 0.0 };
            let (r, g, b) = lerp_rgb(from, to, t);
            buf[(x as u16, y)]
                .set_char(ch)
                .set_style(Style::new().fg(Color::Rgb(r, g, b)).add_modifier(Modifier::BOLD));
        }
    }
}
