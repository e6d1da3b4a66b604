//! Scrollable portfolio page.
//!
//! The page is laid out once per width into pre-wrapped lines so section
//! bounds are exact row ranges. `PageView` is also the [`ViewHost`] the
//! interactive layer attaches to: it owns the palette (presentation
//! attribute), the scroll position, the typewriter line and the nav
//! highlight mirror.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::behavior::{
    PresentationTarget, Scroller, SectionBounds, SectionId, ThemeMode, ViewHost, Viewport,
};
use crate::models::Portfolio;

use super::Theme;

/// Narrowest width the page wraps to.
const MIN_WRAP_WIDTH: usize = 20;

/// Visual role of a page line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty spacer
    Blank,
    /// Banner name
    Name,
    /// Placeholder for the typewriter text
    Typing,
    /// Section heading
    Heading,
    /// Entry heading (role, project name, ...)
    Subheading,
    /// Secondary heading (company, issuer)
    Secondary,
    /// Plain paragraph text
    Body,
    /// Dim text (locations, tags)
    Muted,
    /// Link or attachment reference
    Link,
    /// Call to action
    Action,
}

/// One pre-wrapped row of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    /// Section the row belongs to, `None` for trailing padding
    pub section: Option<SectionId>,
    /// How the row is styled
    pub kind: LineKind,
    /// Row text
    pub text: String,
}

/// Greedy word wrap measured in terminal columns.
///
/// `indent` prefixes the first row and `hang` prefixes continuation rows.
/// Words wider than the row are split between characters.
#[must_use]
pub fn wrap(text: &str, width: usize, indent: &str, hang: &str) -> Vec<String> {
    let width = width.max(MIN_WRAP_WIDTH);
    let mut rows = Vec::new();
    let mut current = indent.to_string();
    let mut current_cols = indent.width();
    let mut empty = true;

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let sep = usize::from(!empty);
            if current_cols + sep + word.width() <= width {
                if !empty {
                    current.push(' ');
                }
                current.push_str(word);
                current_cols += sep + word.width();
                empty = false;
                break;
            }
            if empty {
                // Word alone does not fit: split it
                let room = width.saturating_sub(current_cols);
                let (head, rest) = split_at_columns(word, room);
                current.push_str(head);
                rows.push(std::mem::take(&mut current));
                current = hang.to_string();
                current_cols = hang.width();
                word = rest;
                if word.is_empty() {
                    break;
                }
                continue;
            }
            rows.push(std::mem::take(&mut current));
            current = hang.to_string();
            current_cols = hang.width();
            empty = true;
        }
    }

    if !empty || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Splits `word` after the longest prefix that fits in `room` columns.
/// The prefix always holds at least one character.
fn split_at_columns(word: &str, room: usize) -> (&str, &str) {
    let mut cols = 0;
    let mut end = 0;
    for (i, ch) in word.char_indices() {
        let w = ch.width().unwrap_or(0);
        if end > 0 && cols + w > room {
            break;
        }
        cols += w;
        end = i + ch.len_utf8();
    }
    word.split_at(end)
}

/// Builder accumulating lines for one section.
struct SectionWriter<'a> {
    lines: &'a mut Vec<PageLine>,
    section: SectionId,
    width: usize,
}

impl SectionWriter<'_> {
    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(PageLine {
            section: Some(self.section),
            kind,
            text: text.into(),
        });
    }

    fn blank(&mut self) {
        self.push(LineKind::Blank, "");
    }

    fn paragraph(&mut self, kind: LineKind, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        for row in wrap(text, self.width, "", "") {
            self.push(kind, row);
        }
    }

    fn bullet(&mut self, text: &str) {
        for row in wrap(text, self.width, "  • ", "    ") {
            self.push(LineKind::Body, row);
        }
    }

    fn heading(&mut self, title: &str) {
        self.blank();
        self.push(LineKind::Heading, title.to_uppercase());
        self.push(LineKind::Heading, "─".repeat(title.width()));
        self.blank();
    }
}

/// Lays out the portfolio into page lines for `width` columns.
#[must_use]
pub fn layout_portfolio(portfolio: &Portfolio, width: usize) -> Vec<PageLine> {
    let mut lines = Vec::new();

    for section in SectionId::ALL {
        let mut w = SectionWriter {
            lines: &mut lines,
            section,
            width,
        };
        match section {
            SectionId::Hero => {
                let profile = &portfolio.profile;
                w.blank();
                if !profile.greeting.is_empty() {
                    w.push(LineKind::Muted, profile.greeting.clone());
                }
                w.push(LineKind::Name, profile.name.clone());
                w.push(LineKind::Typing, "");
                w.blank();
                w.paragraph(LineKind::Body, &profile.summary);
                w.blank();
                w.push(LineKind::Action, "[r] Request resume   [1-7] Jump to section");
                if !profile.links.is_empty() {
                    w.blank();
                    for link in &profile.links {
                        w.push(LineKind::Link, format!("{}: {}", link.label, link.url));
                    }
                }
                w.blank();
            }
            SectionId::About => {
                w.heading("About Me");
                w.paragraph(LineKind::Body, &portfolio.about.description);
                if !portfolio.about.education.is_empty() {
                    w.blank();
                    w.push(LineKind::Secondary, "Education");
                    for edu in &portfolio.about.education {
                        w.blank();
                        w.push(LineKind::Subheading, edu.institution.clone());
                        w.paragraph(LineKind::Body, &edu.degree);
                        if !edu.location.is_empty() {
                            w.push(LineKind::Muted, edu.location.clone());
                        }
                    }
                }
                w.blank();
            }
            SectionId::Experience => {
                w.heading("Experience");
                for job in &portfolio.experience {
                    w.push(LineKind::Subheading, job.role.clone());
                    let company = if job.location.is_empty() {
                        job.company.clone()
                    } else {
                        format!("{} · {}", job.company, job.location)
                    };
                    w.push(LineKind::Secondary, company);
                    for highlight in &job.highlights {
                        w.bullet(highlight);
                    }
                    if let Some(attachment) = &job.attachment {
                        w.push(
                            LineKind::Link,
                            format!("  ⇩ {} ({})", attachment.label, attachment.path),
                        );
                    }
                    w.blank();
                }
            }
            SectionId::Skills => {
                w.heading("Skills");
                for group in &portfolio.skills {
                    w.push(LineKind::Subheading, group.name.clone());
                    w.paragraph(LineKind::Body, &group.items.join(" · "));
                    w.blank();
                }
            }
            SectionId::Projects => {
                w.heading("Projects");
                for project in &portfolio.projects {
                    w.push(LineKind::Subheading, project.name.clone());
                    w.paragraph(LineKind::Body, &project.description);
                    if !project.tags.is_empty() {
                        let tags: Vec<String> =
                            project.tags.iter().map(|t| format!("[{t}]")).collect();
                        w.paragraph(LineKind::Muted, &tags.join(" "));
                    }
                    if let Some(link) = &project.link {
                        w.push(LineKind::Link, format!("  ↗ {link}"));
                    }
                    w.blank();
                }
            }
            SectionId::Achievements => {
                w.heading("Achievements");
                for achievement in &portfolio.achievements {
                    w.paragraph(LineKind::Subheading, &achievement.title);
                    if let Some(issuer) = &achievement.issuer {
                        w.push(LineKind::Secondary, issuer.clone());
                    }
                    w.paragraph(LineKind::Body, &achievement.description);
                    for attachment in &achievement.attachments {
                        w.push(
                            LineKind::Link,
                            format!("  ⇩ {} ({})", attachment.label, attachment.path),
                        );
                    }
                    w.blank();
                }
            }
            SectionId::Contact => {
                let contact = &portfolio.contact;
                w.heading("Contact");
                w.push(LineKind::Secondary, "Email");
                w.push(LineKind::Body, contact.email.clone());
                if let Some(phone) = &contact.phone {
                    w.push(LineKind::Secondary, "Phone");
                    w.push(LineKind::Body, phone.clone());
                }
                if let Some(location) = &contact.location {
                    w.push(LineKind::Secondary, "Location");
                    w.push(LineKind::Body, location.clone());
                }
                w.blank();
            }
        }
    }

    lines
}

/// Computes section bounds from laid-out lines.
#[must_use]
pub fn section_bounds(lines: &[PageLine]) -> Vec<SectionBounds> {
    let mut bounds: Vec<SectionBounds> = Vec::new();
    for (row, line) in lines.iter().enumerate() {
        let Some(section) = line.section else {
            continue;
        };
        match bounds.last_mut() {
            Some(last) if last.section == section => last.height += 1,
            _ => bounds.push(SectionBounds {
                section,
                top: row as u32,
                height: 1,
            }),
        }
    }
    bounds
}

/// The page and the view state the interactive layer drives.
#[derive(Debug, Clone)]
pub struct PageView {
    portfolio: Portfolio,
    lines: Vec<PageLine>,
    bounds: Vec<SectionBounds>,
    width: u16,
    height: u16,
    offset: u32,
    target: u32,
    mode: ThemeMode,
    theme: Theme,
    typing_text: String,
    highlight: Option<SectionId>,
}

impl PageView {
    /// Creates a page for `portfolio` sized to `area` (the page's inner area).
    #[must_use]
    pub fn new(portfolio: Portfolio, area: Rect) -> Self {
        let mut view = Self {
            portfolio,
            lines: Vec::new(),
            bounds: Vec::new(),
            width: 0,
            height: 0,
            offset: 0,
            target: 0,
            mode: ThemeMode::Dark,
            theme: Theme::dark(),
            typing_text: String::new(),
            highlight: None,
        };
        view.resize(area.width, area.height);
        view
    }

    /// Re-lays out the page. Returns true if section bounds changed.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        if width == self.width && height == self.height && !self.lines.is_empty() {
            return false;
        }
        self.width = width;
        self.height = height;

        let mut lines = layout_portfolio(&self.portfolio, usize::from(width));
        // Pad so the last section can scroll to the top of the viewport
        let last_height = lines
            .iter()
            .rev()
            .take_while(|l| l.section == Some(SectionId::Contact))
            .count();
        for _ in last_height..usize::from(height) {
            lines.push(PageLine {
                section: None,
                kind: LineKind::Blank,
                text: String::new(),
            });
        }

        let bounds = section_bounds(&lines);
        let changed = bounds != self.bounds;
        self.lines = lines;
        self.bounds = bounds;
        self.offset = self.offset.min(self.max_offset());
        self.target = self.target.min(self.max_offset());
        changed
    }

    /// Largest valid scroll offset.
    pub fn max_offset(&self) -> u32 {
        (self.lines.len() as u32).saturating_sub(u32::from(self.height))
    }

    /// Current scroll offset.
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Offset a smooth scroll is heading to.
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Whether a smooth scroll is in progress.
    pub const fn is_scrolling(&self) -> bool {
        self.offset != self.target
    }

    /// The visible window, for the scroll spy.
    pub const fn viewport(&self) -> Viewport {
        Viewport {
            offset: self.offset,
            height: self.height as u32,
        }
    }

    /// Current palette.
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Current presentation mode.
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Text written by the typewriter.
    pub fn typing_text(&self) -> &str {
        &self.typing_text
    }

    /// Highlighted nav entry mirrored from the navigation synchronizer.
    pub const fn highlight(&self) -> Option<SectionId> {
        self.highlight
    }

    /// Portfolio shown on the page.
    pub const fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Scrolls immediately by `delta` rows, cancelling any smooth scroll.
    pub fn scroll_by(&mut self, delta: i64) {
        let next = (i64::from(self.offset) + delta).clamp(0, i64::from(self.max_offset()));
        self.offset = next as u32;
        self.target = self.offset;
    }

    /// Scrolls immediately to the top.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.target = 0;
    }

    /// Scrolls immediately to the bottom.
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.target = self.offset;
    }

    /// Advances a smooth scroll by one frame. Returns true if it moved.
    ///
    /// Each frame covers a quarter of the remaining distance, at least one
    /// row.
    pub fn tick_scroll(&mut self) -> bool {
        if self.offset == self.target {
            return false;
        }
        let distance = self.offset.abs_diff(self.target);
        let step = (distance / 4).max(1);
        if self.offset < self.target {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        true
    }

    /// Renders the visible slice of the page.
    pub fn render(&self, f: &mut Frame, area: Rect, title: &str) {
        let theme = &self.theme;
        let start = self.offset as usize;
        let end = (start + usize::from(self.height)).min(self.lines.len());
        let visible: Vec<Line> = self.lines[start.min(end)..end]
            .iter()
            .map(|line| self.styled_line(line))
            .collect();

        let page = Paragraph::new(visible)
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {title} "))
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(page, area);
    }

    fn styled_line(&self, line: &PageLine) -> Line<'static> {
        let theme = &self.theme;
        let style = match line.kind {
            LineKind::Blank | LineKind::Body => Style::default().fg(theme.text),
            LineKind::Name => Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
            LineKind::Heading => Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
            LineKind::Subheading => Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            LineKind::Secondary => Style::default().fg(theme.accent),
            LineKind::Muted => Style::default().fg(theme.text_muted),
            LineKind::Link => Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::UNDERLINED),
            LineKind::Action => Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            LineKind::Typing => {
                return Line::from(vec![
                    Span::styled("> ", Style::default().fg(theme.text_muted)),
                    Span::styled(
                        self.typing_text.clone(),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("▌", Style::default().fg(theme.accent)),
                ]);
            }
        };
        Line::from(Span::styled(line.text.clone(), style))
    }
}

impl PresentationTarget for PageView {
    fn set_presentation(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.theme = Theme::from_mode(mode);
    }
}

impl Scroller for PageView {
    fn scroll_into_view(&mut self, section: SectionId) -> bool {
        let Some(bounds) = self.bounds.iter().find(|b| b.section == section) else {
            return false;
        };
        self.target = bounds.top.min(self.max_offset());
        true
    }
}

impl ViewHost for PageView {
    fn has_theme_switch(&self) -> bool {
        true
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        self.bounds.clone()
    }

    fn has_typing_target(&self) -> bool {
        self.lines.iter().any(|l| l.kind == LineKind::Typing)
    }

    fn set_typing_text(&mut self, text: &str) {
        text.clone_into(&mut self.typing_text);
    }

    fn set_nav_highlight(&mut self, section: Option<SectionId>) {
        self.highlight = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(width: u16, height: u16) -> PageView {
        PageView::new(Portfolio::embedded().unwrap(), Rect::new(0, 0, width, height))
    }

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap(
            "the quick brown fox jumps over the lazy dog again and again",
            20,
            "",
            "",
        );
        assert!(rows.len() > 1);
        for row in &rows {
            assert!(row.width() <= 20, "row too long: {row:?}");
        }
        assert_eq!(rows.join(" "), "the quick brown fox jumps over the lazy dog again and again");
    }

    #[test]
    fn test_wrap_indent_and_hang() {
        let rows = wrap("alpha beta gamma delta epsilon zeta", 20, "  • ", "    ");
        assert!(rows[0].starts_with("  • alpha"));
        assert!(rows[1..].iter().all(|r| r.starts_with("    ")));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let rows = wrap(&"x".repeat(45), 20, "", "");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].len(), 5);
    }

    #[test]
    fn test_wrap_measures_wide_characters_in_columns() {
        let text = "日本語のテキスト 全角文字 ソフトウェア開発者 東京";
        let rows = wrap(text, 20, "", "");
        for row in &rows {
            assert!(row.width() <= 20, "row overflows 20 columns: {row:?}");
        }
        assert_eq!(
            rows,
            vec!["日本語のテキスト", "全角文字", "ソフトウェア開発者", "東京"]
        );
    }

    #[test]
    fn test_wrap_splits_wide_word_on_column_boundary() {
        let rows = wrap(&"漢".repeat(15), 21, "", "");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].chars().count(), 10);
        assert_eq!(rows[1].chars().count(), 5);
        assert!(rows.iter().all(|r| r.width() <= 21));
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap("", 40, "", ""), vec![String::new()]);
    }

    #[test]
    fn test_every_section_has_bounds_in_order() {
        let page = view(60, 20);
        let bounds = page.section_bounds();
        let order: Vec<_> = bounds.iter().map(|b| b.section).collect();
        assert_eq!(order, SectionId::ALL.to_vec());
        for pair in bounds.windows(2) {
            assert_eq!(pair[0].top + pair[0].height, pair[1].top, "sections are contiguous");
        }
    }

    #[test]
    fn test_last_section_can_reach_top() {
        let page = view(60, 20);
        let contact = page
            .section_bounds()
            .into_iter()
            .find(|b| b.section == SectionId::Contact)
            .unwrap();
        assert!(contact.top <= page.max_offset());
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut page = view(60, 20);
        assert!(page.scroll_into_view(SectionId::Projects));
        let target = page.target();
        assert!(target > 0);

        let mut frames = 0;
        while page.tick_scroll() {
            frames += 1;
            assert!(frames < 200, "smooth scroll never settled");
        }
        assert_eq!(page.offset(), target);
        assert!(frames > 1, "scroll is animated, not a jump");
    }

    #[test]
    fn test_manual_scroll_clamps() {
        let mut page = view(60, 20);
        page.scroll_by(-5);
        assert_eq!(page.offset(), 0);
        page.scroll_by(1_000_000);
        assert_eq!(page.offset(), page.max_offset());
        page.scroll_to_top();
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_presentation_swaps_palette() {
        let mut page = view(60, 20);
        page.set_presentation(ThemeMode::Light);
        assert_eq!(page.mode(), ThemeMode::Light);
        assert_eq!(page.theme(), &Theme::light());
    }

    #[test]
    fn test_resize_reports_bound_changes() {
        let mut page = view(60, 20);
        assert!(!page.resize(60, 20));
        assert!(page.resize(30, 20), "narrower page wraps into more rows");
    }

    #[test]
    fn test_typing_target_present() {
        assert!(view(60, 20).has_typing_target());
    }
}
