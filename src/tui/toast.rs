//! Floating notification box in the top-right corner of the page.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::Theme;

/// Toast widget
pub struct ToastWidget;

impl ToastWidget {
    /// Area the toast occupies inside `area`.
    ///
    /// One row below the top edge and two columns in from the right, sized
    /// to the message and clamped to the available space.
    #[must_use]
    pub fn area(message: &str, area: Rect) -> Rect {
        let cols = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let width = cols.saturating_add(4).min(area.width.saturating_sub(2));
        let height = 3.min(area.height);
        Rect {
            x: area.x + area.width.saturating_sub(width + 2),
            y: area.y + 1.min(area.height.saturating_sub(height)),
            width,
            height,
        }
    }

    /// Render `message` over the top-right corner of `area`.
    pub fn render(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
        let toast_area = Self::area(message, area);
        if toast_area.width < 3 || toast_area.height < 3 {
            return;
        }
        f.render_widget(Clear, toast_area);
        let style = Style::default().fg(theme.toast_fg).bg(theme.toast_bg);
        let toast = Paragraph::new(Span::styled(
            message.to_string(),
            style.add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true })
        .style(style)
        .block(Block::default().borders(Borders::ALL).style(style));
        f.render_widget(toast, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_hugs_top_right() {
        let area = Rect::new(0, 3, 80, 20);
        let toast = ToastWidget::area("hello", area);
        assert_eq!(toast.width, 9);
        assert_eq!(toast.height, 3);
        assert_eq!(toast.x + toast.width, 78);
        assert_eq!(toast.y, 4);
    }

    #[test]
    fn test_area_sized_in_columns_for_wide_text() {
        let area = Rect::new(0, 0, 80, 20);
        let toast = ToastWidget::area("履歴書を送信しました", area);
        // ten double-width characters plus borders and padding
        assert_eq!(toast.width, 24);
        assert_eq!(toast.x + toast.width, 78);
    }

    #[test]
    fn test_area_clamped_to_narrow_screen() {
        let area = Rect::new(0, 0, 12, 2);
        let toast = ToastWidget::area("a rather long message", area);
        assert!(toast.width <= 10);
        assert!(toast.height <= 2);
        assert!(toast.x + toast.width <= area.width);
    }
}
