//! # ProgressBar Component
//!
//! One-row gauge across the top of the screen. Its filled width is the
//! navigator's progress; the label shows the rounded percentage.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Gauge;

use crate::tui::component::Component;

pub struct ProgressBar {
    /// Percentage in `[0, 100]`
    pub percent: f64,
}

impl ProgressBar {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }

    pub fn label(&self) -> String {
        format!("{:.0}%", self.percent)
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let ratio = (self.percent / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
            .label(ratatui::text::Span::styled(
                self.label(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .use_unicode(true)
            .ratio(ratio);
        frame.render_widget(gauge, area);
    }
}
