//! # Table of Contents Component
//!
//! Sidebar listing every section as `glyph title`. The current section is
//! highlighted and kept in view. Clicking an entry jumps to it (hit testing
//! lives in `ui.rs`, which reads [`TocState::offset`] after each frame).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TocState` lives in `TuiState`
//! - `TableOfContents` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::{Catalog, IconKind};
use crate::tui::component::Component;
use crate::tui::icons;

/// Persistent state for the sidebar list.
#[derive(Default)]
pub struct TocState {
    pub list_state: ListState,
}

impl TocState {
    /// Index of the first entry drawn on the last frame.
    pub fn offset(&self) -> usize {
        self.list_state.offset()
    }
}

/// Transient render wrapper for the sidebar.
pub struct TableOfContents<'a> {
    state: &'a mut TocState,
    catalog: &'a Catalog,
    current_index: usize,
    show_icons: bool,
}

impl<'a> TableOfContents<'a> {
    pub fn new(
        state: &'a mut TocState,
        catalog: &'a Catalog,
        current_index: usize,
        show_icons: bool,
    ) -> Self {
        Self {
            state,
            catalog,
            current_index,
            show_icons,
        }
    }
}

impl Component for TableOfContents<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        // "λ " before the title when icons are on
        let icon_width = if self.show_icons { 2 } else { 0 };
        let title_width = inner_width.saturating_sub(icon_width);

        let items: Vec<ListItem> = self
            .catalog
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let is_current = i == self.current_index;
                let style = if is_current {
                    Style::default()
                        .fg(Color::Blue)
                        .bg(Color::Gray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Blue)
                };

                let mut spans = Vec::with_capacity(3);
                if self.show_icons {
                    spans.push(Span::styled(
                        icons::glyph(section.icon.kind),
                        style.fg(icons::color(section.icon.tint)),
                    ));
                    spans.push(Span::styled(" ", style));
                }
                spans.push(Span::styled(truncate(&section.title, title_width), style));

                ListItem::new(Line::from(spans)).style(style)
            })
            .collect();

        let heading = Line::from(vec![
            Span::raw(" "),
            Span::raw(icons::glyph(IconKind::Book)),
            Span::raw(" Table of Contents "),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(heading)
            .title_style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            );

        self.state.list_state.select(Some(self.current_index));
        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate to `max_width` display columns, ending in `…` when cut.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
