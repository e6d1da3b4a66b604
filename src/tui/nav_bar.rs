//! Top navigation bar with one entry per section and the theme switch.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::behavior::{SectionId, ThemeMode};

/// Navigation bar widget
pub struct NavBar;

impl NavBar {
    /// Spans for the nav entries; `highlight` gets the active style.
    #[must_use]
    pub fn entries(highlight: Option<SectionId>, theme: &Theme) -> Line<'static> {
        let mut spans = Vec::with_capacity(SectionId::ALL.len());
        for section in SectionId::ALL {
            let style = if highlight == Some(section) {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            spans.push(Span::styled(format!(" {} ", section.label()), style));
        }
        Line::from(spans)
    }

    /// Label of the theme switch for `mode`.
    #[must_use]
    pub const fn switch_label(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Dark => "☾ Dark",
            ThemeMode::Light => "☀ Light",
        }
    }

    /// Render the nav bar.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        title: &str,
        highlight: Option<SectionId>,
        mode: ThemeMode,
        theme: &Theme,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(11)])
            .split(inner);

        f.render_widget(Paragraph::new(Self::entries(highlight, theme)), chunks[0]);

        let switch = Paragraph::new(Span::styled(
            format!("[t] {}", Self::switch_label(mode)),
            Style::default().fg(theme.accent),
        ))
        .alignment(Alignment::Right);
        f.render_widget(switch, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_entry_highlighted() {
        let theme = Theme::dark();
        let line = NavBar::entries(Some(SectionId::Skills), &theme);
        let highlighted: Vec<_> = line
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(theme.highlight_bg))
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].content, " Skills ");
    }

    #[test]
    fn test_no_highlight_before_activation() {
        let theme = Theme::dark();
        let line = NavBar::entries(None, &theme);
        assert!(line
            .spans
            .iter()
            .all(|s| s.style.bg != Some(theme.highlight_bg)));
    }

    #[test]
    fn test_switch_label_tracks_mode() {
        assert!(NavBar::switch_label(ThemeMode::Dark).contains("Dark"));
        assert!(NavBar::switch_label(ThemeMode::Light).contains("Light"));
    }
}
