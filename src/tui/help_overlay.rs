//! Help overlay showing every keyboard shortcut.
//!
//! Content comes from the [`HelpRegistry`], so the overlay, the status bar
//! and `help.toml` never disagree.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::help_registry::{contexts, HelpRegistry};
use super::Theme;
use crate::behavior::SectionId;
use crate::shortcuts::{Action, ShortcutRegistry};

/// Rows moved by page up/down.
const PAGE_ROWS: usize = 10;

/// Width of the key column.
const KEY_COLUMN: usize = 22;

/// One row of help content, styled at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HelpRow {
    Title(String),
    Heading(String),
    Binding { keys: String, action: String },
    Note(String),
    Blank,
}

/// Scrollable help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    rows: Vec<HelpRow>,
    /// Current scroll offset (row number)
    scroll_offset: usize,
    shortcuts: ShortcutRegistry,
}

impl HelpOverlay {
    /// Builds the overlay from the registry's bindings.
    #[must_use]
    pub fn new(registry: &HelpRegistry) -> Self {
        let mut rows = vec![
            HelpRow::Title(format!(
                "{} - Help (keymap v{})",
                registry.app_name(),
                registry.version()
            )),
            HelpRow::Blank,
        ];

        for ctx in [contexts::MAIN, contexts::HELP] {
            let Some(context) = registry.get_context(ctx) else {
                continue;
            };
            rows.push(HelpRow::Heading(context.name.to_uppercase()));
            rows.push(HelpRow::Note(context.description.clone()));
            rows.push(HelpRow::Blank);
            for binding in registry.get_bindings(ctx) {
                let (keys, action) = HelpRegistry::format_binding_for_help(binding);
                rows.push(HelpRow::Binding { keys, action });
            }
            rows.push(HelpRow::Blank);
        }

        rows.push(HelpRow::Heading("SECTIONS".to_string()));
        rows.push(HelpRow::Blank);
        for (pos, section) in SectionId::ALL.iter().enumerate() {
            rows.push(HelpRow::Binding {
                keys: (pos + 1).to_string(),
                action: section.label().to_string(),
            });
        }
        rows.push(HelpRow::Blank);
        rows.push(HelpRow::Note(
            "The nav bar follows your scrolling and highlights the section in view.".to_string(),
        ));
        rows.push(HelpRow::Note(
            "Request resume shows a note for a few seconds and jumps to Contact.".to_string(),
        ));

        Self {
            rows,
            scroll_offset: 0,
            shortcuts: ShortcutRegistry::new(),
        }
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Total number of content rows.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.rows.len()
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.rows.len() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.rows.len().saturating_sub(1);
    }

    /// Scroll down by a page.
    pub fn page_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + PAGE_ROWS).min(self.rows.len().saturating_sub(1));
    }

    /// Scroll up by a page.
    pub const fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_ROWS);
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        self.rows
            .iter()
            .map(|row| match row {
                HelpRow::Title(text) => Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
                HelpRow::Heading(text) => Line::from(Span::styled(
                    format!("═══ {text} ═══"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                HelpRow::Binding { keys, action } => Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{keys:<KEY_COLUMN$}"),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(action.clone(), Style::default().fg(theme.text)),
                ]),
                HelpRow::Note(text) => Line::from(Span::styled(
                    format!("  • {text}"),
                    Style::default().fg(theme.text_secondary),
                )),
                HelpRow::Blank => Line::from(""),
            })
            .collect()
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match self.shortcuts.lookup(contexts::HELP, key)? {
            Action::ScrollUp => self.scroll_up(),
            Action::ScrollDown => self.scroll_down(),
            Action::PageUp => self.page_up(),
            Action::PageDown => self.page_down(),
            Action::JumpToTop => self.scroll_to_top(),
            Action::JumpToBottom => self.scroll_to_bottom(),
            Action::ToggleHelp | Action::Cancel => return Some(ComponentEvent::Closed),
            Action::Quit => return Some(ComponentEvent::QuitRequested),
            _ => {}
        }
        None
    }

    /// Renders as a centered modal (60% width, 80% height).
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = super::centered_rect(60, 80, area);
        f.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);
        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let visible_height = content_area.height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(self.lines(theme))
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state = ScrollbarState::new(self.rows.len().saturating_sub(visible_height))
            .position(self.scroll_offset);
        f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}
