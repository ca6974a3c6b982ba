//! # ContentPanel Component
//!
//! Scrollable view of the current section.
//!
//! ## Responsibilities
//!
//! - Section heading (icon + title) over a rule
//! - Each content block by its kind:
//!   `Text` → wrapped paragraph, `Code` → bordered block labelled with its
//!   language, syntax highlighted and hard-wrapped inside the frame, `List` → optional bold caption then
//!   `• item` lines with a hanging indent
//! - Vertical scrolling, reset to the top whenever the section changes
//!
//! ## Architecture
//!
//! `ContentPanel` is a transient component (created each frame) that wraps
//! `&'a mut ContentPanelState` (persistent state) and the section (props).
//! Wrapping and highlighting are cached per (section, width), so redraws
//! triggered by scrolling don't redo them.

use ratatui::Frame;
use ratatui::layout::{Margin, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthChar;

use crate::core::catalog::{ContentBlock, Section};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::highlight::CodeHighlighter;
use crate::tui::icons;

const BORDER: Style = Style::new().fg(Color::DarkGray);
const BULLET: Style = Style::new().fg(Color::Blue);

/// Wrapped lines for one section at one width.
struct RenderedSection {
    index: usize,
    width: u16,
    lines: Vec<Line<'static>>,
}

/// Scroll and layout state for the content panel.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct ContentPanelState {
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    cache: Option<RenderedSection>,
}

impl ContentPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top; called when a different section becomes current.
    pub fn reset_scroll(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    pub fn content_height(&self) -> u16 {
        self.cache
            .as_ref()
            .map_or(0, |c| c.lines.len().min(u16::MAX as usize) as u16)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

pub struct ContentPanel<'a> {
    pub state: &'a mut ContentPanelState,
    pub section: &'a Section,
    pub section_index: usize,
    pub highlighter: &'a CodeHighlighter,
    pub show_icons: bool,
}

impl<'a> ContentPanel<'a> {
    pub fn new(
        state: &'a mut ContentPanelState,
        section: &'a Section,
        section_index: usize,
        highlighter: &'a CodeHighlighter,
        show_icons: bool,
    ) -> Self {
        Self {
            state,
            section,
            section_index,
            highlighter,
            show_icons,
        }
    }
}

impl Component for ContentPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = area.inner(Margin {
            horizontal: 1,
            vertical: 0,
        });
        let content_width = inner.width.saturating_sub(1); // -1 for scrollbar
        if content_width == 0 || inner.height == 0 {
            return;
        }

        let stale = !matches!(
            &self.state.cache,
            Some(c) if c.index == self.section_index && c.width == content_width
        );
        if stale {
            let lines = section_lines(
                self.section,
                content_width,
                self.highlighter,
                self.show_icons,
            );
            self.state.cache = Some(RenderedSection {
                index: self.section_index,
                width: content_width,
                lines,
            });
        }

        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let total_height = self.state.content_height();
        let lines = self
            .state
            .cache
            .as_ref()
            .map(|c| c.lines.clone())
            .unwrap_or_default();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(Text::from(lines)),
            Rect::new(0, 0, content_width, total_height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

impl EventHandler for ContentPanelState {
    type Event = (); // scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

// ── Section → lines ─────────────────────────────────────────────────────────

/// Lay out a whole section at `width` columns.
pub fn section_lines(
    section: &Section,
    width: u16,
    highlighter: &CodeHighlighter,
    show_icons: bool,
) -> Vec<Line<'static>> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();

    let title_style = Style::default().add_modifier(Modifier::BOLD);
    let (first_prefix, rest_prefix) = if show_icons {
        (vec![icons::span(section.icon), Span::raw(" ")], "  ")
    } else {
        (vec![], "")
    };
    let title_width = width.saturating_sub(rest_prefix.len()).max(1);
    for (i, part) in textwrap::wrap(&section.title, wrap_options(title_width))
        .into_iter()
        .enumerate()
    {
        let mut spans = if i == 0 {
            first_prefix.clone()
        } else {
            vec![Span::raw(rest_prefix)]
        };
        spans.push(Span::styled(part.into_owned(), title_style));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled("─".repeat(width), BORDER)));

    for block in &section.content {
        lines.push(Line::default());
        match block {
            ContentBlock::Text { text } => {
                lines.extend(
                    textwrap::wrap(text, wrap_options(width))
                        .into_iter()
                        .map(|l| Line::from(l.into_owned())),
                );
            }
            ContentBlock::Code { text, language } => {
                lines.push(Line::from(vec![
                    Span::styled("╭── ", BORDER),
                    Span::styled(language.clone(), BORDER.add_modifier(Modifier::BOLD)),
                    Span::styled(" ──", BORDER),
                ]));
                let code_width = width.saturating_sub(2).max(1);
                for code_line in highlighter.highlight(language, text) {
                    for row in wrap_spans(code_line.spans, code_width) {
                        let mut spans = vec![Span::styled("│ ", BORDER)];
                        spans.extend(row);
                        lines.push(Line::from(spans));
                    }
                }
                lines.push(Line::from(Span::styled("╰──", BORDER)));
            }
            ContentBlock::List { title, items } => {
                if let Some(title) = title {
                    lines.extend(textwrap::wrap(title, wrap_options(width)).into_iter().map(
                        |l| Line::from(Span::styled(l.into_owned(), title_style)),
                    ));
                }
                let item_width = width.saturating_sub(2).max(1);
                for item in items {
                    for (i, part) in textwrap::wrap(item, wrap_options(item_width))
                        .into_iter()
                        .enumerate()
                    {
                        let marker = if i == 0 {
                            Span::styled("• ", BULLET)
                        } else {
                            Span::raw("  ")
                        };
                        lines.push(Line::from(vec![marker, Span::raw(part.into_owned())]));
                    }
                }
            }
        }
    }
    lines
}

/// Hard-wrap styled spans at `width` display columns, splitting a span
/// where a row fills up. Code keeps its spacing, so no word breaking.
fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Vec<Span<'static>>> {
    let mut rows = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for span in spans {
        let style = span.style;
        let mut chunk = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && used > 0 {
                if !chunk.is_empty() {
                    row.push(Span::styled(std::mem::take(&mut chunk), style));
                }
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            chunk.push(ch);
            used += w;
        }
        if !chunk.is_empty() {
            row.push(Span::styled(chunk, style));
        }
    }
    rows.push(row);
    rows
}

fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}
