//! # NavBar Component
//!
//! Bottom row with `◀ Previous` and `Next ▶` buttons and a key hint
//! between them. A button is drawn dimmed, and ignores clicks, exactly when
//! pressing it would not move the cursor.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub const BUTTON_WIDTH: u16 = 14;
const PREVIOUS_LABEL: &str = "◀ Previous";
const NEXT_LABEL: &str = "Next ▶";
const HINT: &str = "←/→ page · 1-9 jump · Tab sidebar · q quit";

pub struct NavBar {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl NavBar {
    pub fn new(previous_enabled: bool, next_enabled: bool) -> Self {
        Self {
            previous_enabled,
            next_enabled,
        }
    }
}

/// Split the nav bar into (previous, hint, next) areas.
pub fn button_areas(area: Rect) -> (Rect, Rect, Rect) {
    let [previous, hint, next] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Min(0),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .areas(area);
    (previous, hint, next)
}

fn button(label: &str, enabled: bool) -> Paragraph<'_> {
    let (style, border) = if enabled {
        (
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Blue),
        )
    } else {
        (
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )
    };
    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border))
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (previous, hint, next) = button_areas(area);

        frame.render_widget(button(PREVIOUS_LABEL, self.previous_enabled), previous);
        frame.render_widget(button(NEXT_LABEL, self.next_enabled), next);

        // Hint sits on the middle row, level with the button labels
        let hint_row = Rect {
            y: hint.y + hint.height / 2,
            height: hint.height.min(1),
            ..hint
        };
        frame.render_widget(
            Paragraph::new(HINT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            hint_row,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(nav_bar: &mut NavBar) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal.draw(|f| nav_bar.render(f, f.area())).unwrap();
        terminal
    }

    #[test]
    fn test_button_areas_pin_edges() {
        let (previous, hint, next) = button_areas(Rect::new(0, 20, 80, 3));
        assert_eq!(previous, Rect::new(0, 20, BUTTON_WIDTH, 3));
        assert_eq!(next, Rect::new(80 - BUTTON_WIDTH, 20, BUTTON_WIDTH, 3));
        assert_eq!(hint.width, 80 - 2 * BUTTON_WIDTH);
    }

    #[test]
    fn test_labels_render() {
        let terminal = draw(&mut NavBar::new(true, true));
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("◀ Previous"));
        assert!(text.contains("Next ▶"));
    }

    #[test]
    fn test_disabled_button_is_dimmed() {
        let terminal = draw(&mut NavBar::new(false, true));
        let buffer = terminal.backend().buffer();
        // Middle row, inside each button
        let prev_cell = &buffer[(3, 1)];
        let next_cell = &buffer[(80 - BUTTON_WIDTH + 3, 1)];
        assert!(prev_cell.modifier.contains(Modifier::DIM));
        assert_eq!(prev_cell.fg, Color::DarkGray);
        assert_eq!(next_cell.bg, Color::Blue);
        assert!(!next_cell.modifier.contains(Modifier::DIM));
    }
}
