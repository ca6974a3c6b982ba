//! # TitleBar Component
//!
//! Single row under the progress bar.
//!
//! ## Responsibilities
//!
//! - Sidebar toggle button `[≡]` at the left edge (clickable)
//! - Guide name and `Section i/N` position
//! - Status notice (e.g. a rejected jump) when one is set
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"[≡] Web Performance Optimization · Section 3/7 | No section 9 (guide has 7)"`
//! 2. **Default**: `"[≡] Web Performance Optimization · Section 3/7"`
//!
//! TitleBar is purely presentational: it receives everything as props and
//! has no internal state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const TOGGLE_LABEL: &str = "[≡]";

/// Top bar showing the guide name, position and notices.
pub struct TitleBar<'a> {
    pub guide_title: &'a str,
    /// 0-based index of the section on screen
    pub current_index: usize,
    pub section_count: usize,
    pub status_message: Option<&'a str>,
    pub sidebar_visible: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(
        guide_title: &'a str,
        current_index: usize,
        section_count: usize,
        status_message: Option<&'a str>,
        sidebar_visible: bool,
    ) -> Self {
        Self {
            guide_title,
            current_index,
            section_count,
            status_message,
            sidebar_visible,
        }
    }

    fn heading(&self) -> String {
        format!(
            " {} · Section {}/{}",
            self.guide_title,
            self.current_index + 1,
            self.section_count
        )
    }
}

/// Where the sidebar toggle sits inside the title bar area.
pub fn toggle_area(area: Rect) -> Rect {
    Rect {
        width: (TOGGLE_LABEL.chars().count() as u16).min(area.width),
        height: area.height.min(1),
        ..area
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let toggle_style = if self.sidebar_visible {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };

        let mut spans = vec![
            Span::styled(TOGGLE_LABEL, toggle_style),
            Span::styled(
                self.heading(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(status) = self.status_message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                status.to_string(),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar<'_>) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_shows_position() {
        let mut title_bar = TitleBar::new("Guide", 2, 7, None, true);
        let text = render_text(&mut title_bar);

        assert!(text.starts_with("[≡] Guide"));
        assert!(text.contains("Section 3/7"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar =
            TitleBar::new("Guide", 0, 7, Some("No section 9 (guide has 7)"), false);
        let text = render_text(&mut title_bar);

        assert!(text.contains("Section 1/7"));
        assert!(text.contains("| No section 9 (guide has 7)"));
    }

    #[test]
    fn test_toggle_area_is_left_edge() {
        let area = Rect::new(0, 1, 80, 1);
        assert_eq!(toggle_area(area), Rect::new(0, 1, 3, 1));
        assert_eq!(toggle_area(Rect::new(0, 1, 2, 1)).width, 2);
    }
}
