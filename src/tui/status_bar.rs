//! Status bar with the current section and contextual key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::help_registry::HelpRegistry;
use super::{AppState, Theme};

/// Maximum number of hints shown.
const MAX_HINTS: usize = 5;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status = Paragraph::new(Self::status_line(state, theme))
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .border_style(Style::default().fg(theme.text_muted))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(status, area);
    }

    /// Section indicator followed by hints for the current context.
    fn status_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let section = state
            .view
            .highlight()
            .map_or("-", |s| s.label())
            .to_string();
        let mut spans = vec![
            Span::styled("Section: ", Style::default().fg(theme.primary)),
            Span::styled(
                section,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        spans.extend(Self::hint_spans(&state.help, state.context_name(), theme));
        Line::from(spans)
    }

    /// Key hints from the help registry, e.g. `t Theme  r Resume`.
    fn hint_spans(registry: &HelpRegistry, context: &str, theme: &Theme) -> Vec<Span<'static>> {
        let hints = registry.format_status_bar_hints(context, MAX_HINTS);
        let mut spans = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }
        spans
    }
}
