//! The scrollable page body.
//!
//! The page is laid out once per frame into pre-wrapped lines, so the row of
//! each section anchor is known exactly. Those rows are the "section top
//! positions" fed to the active-section tracker.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::core::LinkTarget;
use crate::app::{App, SectionId};
use crate::ui::colors::{self, Colors};
use crate::ui::widgets::contact_form;

/// Left margin of the body text.
pub const MARGIN: u16 = 2;
/// Body text never gets wider than this, however wide the terminal.
pub const MAX_TEXT_WIDTH: u16 = 96;

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    /// Row of each section heading, in declared order.
    pub tops: Vec<(SectionId, u32)>,
    /// Rows that open a link when clicked.
    pub links: Vec<(u32, LinkTarget)>,
}

impl Page {
    /// Lay out the whole page for a terminal `width` columns wide.
    pub fn build(app: &App, width: u16) -> Self {
        let mut b = PageBuilder::new(width, colors::current());
        hero(&mut b, app);
        about(&mut b, app);
        skills(&mut b, app);
        experience(&mut b, app);
        projects(&mut b, app);
        contact(&mut b, app);
        footer(&mut b, app);
        Page {
            lines: b.lines,
            tops: b.tops,
            links: b.links,
        }
    }

    pub fn height(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }

    /// Height including trailing space so the last section can be scrolled
    /// to the top of a `viewport` rows tall body.
    pub fn padded_height(&self, viewport: u32) -> u32 {
        let last_top = self.tops.last().map(|(_, t)| *t).unwrap_or(0);
        self.height().max(last_top.saturating_add(viewport))
    }

    /// Link on page row `row`, if any.
    pub fn link_at(&self, row: u32) -> Option<LinkTarget> {
        self.links.iter().find(|(r, _)| *r == row).map(|(_, t)| *t)
    }

    /// Page as plain text, one terminal row per line.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            for span in &line.spans {
                out.push_str(&span.content);
            }
            let trimmed = out.trim_end_matches(' ').len();
            out.truncate(trimmed);
            out.push('\n');
        }
        out
    }
}

pub(crate) struct PageBuilder {
    pub lines: Vec<Line<'static>>,
    pub tops: Vec<(SectionId, u32)>,
    pub links: Vec<(u32, LinkTarget)>,
    pub text_width: usize,
    pub colors: Colors,
}

impl PageBuilder {
    pub fn new(width: u16, colors: Colors) -> Self {
        let usable = width.saturating_sub(MARGIN * 2).clamp(10, MAX_TEXT_WIDTH);
        PageBuilder {
            lines: Vec::new(),
            tops: Vec::new(),
            links: Vec::new(),
            text_width: usize::from(usable),
            colors,
        }
    }

    fn margin() -> Span<'static> {
        Span::raw(" ".repeat(usize::from(MARGIN)))
    }

    fn next_row(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }

    /// Mark the row about to be pushed as a link to `target`.
    pub fn link_row(&mut self, target: LinkTarget) {
        let row = self.next_row();
        self.links.push((row, target));
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn push_spans(&mut self, spans: Vec<Span<'static>>) {
        let mut all = vec![Self::margin()];
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    /// Start a navigable section with a heading and an underline rule.
    pub fn section(&mut self, id: SectionId, title: &str) {
        let row = self.next_row();
        self.tops.push((id, row));
        self.blank();
        let heading = self.colors.heading_style;
        let accent = self.colors.accent_style;
        self.push_spans(vec![Span::styled(title.to_string(), heading)]);
        self.push_spans(vec![Span::styled("━".repeat(6), accent)]);
        self.blank();
    }

    /// Word-wrapped paragraph with an extra `indent`.
    pub fn para(&mut self, text: &str, style: Style, indent: usize) {
        let width = self.text_width.saturating_sub(indent).max(8);
        for l in textwrap::wrap(text, width) {
            self.push_spans(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(l.into_owned(), style),
            ]);
        }
    }

    /// Bulleted, hanging-indented paragraph.
    pub fn bullet(&mut self, text: &str, indent: usize) {
        let width = self.text_width.saturating_sub(indent + 2).max(8);
        let accent = self.colors.accent_style;
        let base = self.colors.base_style;
        for (i, l) in textwrap::wrap(text, width).into_iter().enumerate() {
            let marker = if i == 0 { "• " } else { "  " };
            self.push_spans(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(marker, accent),
                Span::styled(l.into_owned(), base),
            ]);
        }
    }

    /// Chips such as technology tags, flowed over as many rows as needed.
    pub fn tags(&mut self, tags: &[String], indent: usize, style: Style) {
        let mut row: Vec<Span<'static>> = vec![Span::raw(" ".repeat(indent))];
        let mut used = indent;
        for t in tags {
            let chip = format!(" {} ", t);
            let w = chip.chars().count();
            if used > indent && used + w > self.text_width {
                self.push_spans(std::mem::take(&mut row));
                row.push(Span::raw(" ".repeat(indent)));
                used = indent;
            }
            row.push(Span::styled(chip, style));
            row.push(Span::raw(" "));
            used += w + 1;
        }
        if used > indent {
            self.push_spans(row);
        }
    }
}

fn hero(b: &mut PageBuilder, app: &App) {
    let p = &app.content.profile;
    let c = b.colors.clone();
    b.tops.push((SectionId::Home, 0));
    b.blank();
    if let Some(a) = &p.availability {
        b.push_spans(vec![Span::styled(format!("● {}", a), c.success_style)]);
        b.blank();
    }
    b.push_spans(vec![
        Span::styled("Hi, I'm ", c.heading_style),
        Span::styled(p.name.clone(), c.accent_style.add_modifier(ratatui::style::Modifier::BOLD)),
    ]);
    if !p.tagline.is_empty() {
        b.push_spans(vec![Span::styled(p.tagline.clone(), c.muted_style)]);
    }
    b.blank();
    if !p.highlights.is_empty() {
        b.tags(&p.highlights, 0, c.tag_style);
        b.blank();
    }
    if !p.intro.is_empty() {
        b.para(&p.intro, c.base_style, 0);
        b.blank();
    }
    let projects_key = SectionId::Projects.index() + 1;
    let mut buttons = vec![
        Span::styled(format!(" View Projects ({}) ", projects_key), c.button_style),
        Span::raw("  "),
    ];
    if p.resume.is_some() {
        buttons.push(Span::styled(" Download Resume (d) ", c.tag_style));
        buttons.push(Span::raw("  "));
    }
    buttons.push(Span::styled(" Contact Me (c) ", c.tag_style));
    b.push_spans(buttons);
    b.blank();
    b.push_spans(vec![Span::styled("Scroll to explore ↓", c.muted_style)]);
}

fn about(b: &mut PageBuilder, app: &App) {
    let p = &app.content;
    let c = b.colors.clone();
    b.section(SectionId::About, "About Me");
    if !p.profile.about.is_empty() {
        b.push_spans(vec![Span::styled("Who I Am", c.heading_style)]);
        b.para(&p.profile.about, c.base_style, 0);
        b.blank();
    }
    if !p.education.is_empty() {
        b.push_spans(vec![Span::styled("Education", c.heading_style)]);
        for e in &p.education {
            b.push_spans(vec![Span::styled(format!("  {}", e.period), c.muted_style)]);
            b.push_spans(vec![Span::styled(format!("  {}", e.degree), c.accent_style)]);
            b.push_spans(vec![Span::styled(format!("  {}", e.institution), c.base_style)]);
            if let Some(n) = &e.note {
                b.push_spans(vec![Span::styled(format!("  {}", n), c.muted_style)]);
            }
        }
    }
}

fn skills(b: &mut PageBuilder, app: &App) {
    let c = b.colors.clone();
    b.section(SectionId::Skills, "Skills & Technologies");
    for (i, cat) in app.content.skills.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        b.push_spans(vec![Span::styled(cat.title.clone(), c.heading_style)]);
        b.tags(&cat.skills, 2, c.tag_style);
    }
}

fn experience(b: &mut PageBuilder, app: &App) {
    let c = b.colors.clone();
    b.section(SectionId::Experience, "Experience");
    for (i, e) in app.content.experience.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        b.push_spans(vec![Span::styled(e.role.clone(), c.heading_style)]);
        let mut org = vec![Span::styled(e.organisation.clone(), c.accent_style)];
        if let Some(k) = &e.kind {
            org.push(Span::styled(format!(" • {}", k), c.muted_style));
        }
        b.push_spans(org);
        b.push_spans(vec![Span::styled(e.period.clone(), c.muted_style)]);
        if !e.tools.is_empty() {
            b.push_spans(vec![Span::styled("Tools Used:", c.muted_style)]);
            b.tags(&e.tools, 2, c.tag_style);
        }
        for h in &e.highlights {
            b.bullet(h, 0);
        }
    }
}

fn projects(b: &mut PageBuilder, app: &App) {
    let c = b.colors.clone();
    b.section(SectionId::Projects, "Projects");
    for (i, p) in app.content.projects.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        let mut title = vec![Span::styled(p.title.trim().to_string(), c.heading_style)];
        if p.featured {
            title.push(Span::raw(" "));
            title.push(Span::styled(" Featured ", c.featured_style));
        }
        b.push_spans(title);
        b.para(&p.description, c.base_style, 0);
        b.tags(&p.tags, 0, c.tag_style);
        if let Some(link) = &p.link {
            b.link_row(LinkTarget::Project(i));
            b.push_spans(vec![
                Span::styled("View Code ↗ ", c.accent_style),
                Span::styled(link.clone(), c.muted_style),
            ]);
        }
    }

    let o = &app.content.opportunities;
    if !o.open_to.is_empty() {
        b.blank();
        b.push_spans(vec![Span::styled("Currently Open To", c.heading_style)]);
        b.tags(&o.open_to, 2, c.featured_style);
        if let Some(n) = &o.note {
            b.para(n, c.muted_style, 2);
        }
    }
}

fn contact(b: &mut PageBuilder, app: &App) {
    let c = b.colors.clone();
    b.section(SectionId::Contact, "Get In Touch");
    for l in &app.content.contact {
        let value_style = if l.href.is_some() { c.accent_style } else { c.base_style };
        b.push_spans(vec![
            Span::styled(format!("{:<10}", l.label), c.muted_style),
            Span::styled(l.value.clone(), value_style),
        ]);
    }
    b.blank();
    for line in contact_form::form_lines(app, b.text_width, &c) {
        b.push_spans(line.spans);
    }
}

fn footer(b: &mut PageBuilder, app: &App) {
    let c = b.colors.clone();
    b.blank();
    b.push_spans(vec![Span::styled("─".repeat(b.text_width), c.border_style)]);
    b.push_spans(vec![
        Span::styled(format!(" {} ", app.content.initials()), c.logo_style),
        Span::raw(" "),
        Span::styled(app.content.profile.name.clone(), c.heading_style),
    ]);
    let all = SectionId::ALL;
    let links: Vec<&str> = all[..all.len() - 1].iter().map(|s| s.label()).collect();
    b.push_spans(vec![Span::styled(links.join(" · "), c.muted_style)]);
    if let Some(cr) = &app.content.profile.copyright {
        b.push_spans(vec![Span::styled(cr.clone(), c.muted_style)]);
    }
    b.blank();
}
