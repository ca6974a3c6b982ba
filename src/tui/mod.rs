//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates, so the loop sleeps up to 500ms waiting for
//! input and only redraws after an event (key, click, scroll or resize).
//! All pending events are drained before the next draw.

mod component;
pub mod components;
pub mod event;
pub mod highlight;
pub mod icons;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ContentPanelState, TocState};
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::highlight::CodeHighlighter;
use crate::tui::ui::{Hit, ScreenLayout, hit_test};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core reading logic)
pub struct TuiState {
    // Persistent component states
    pub toc: TocState,
    pub content: ContentPanelState,
    // Where things were drawn on the last frame (for hit testing)
    pub layout: Option<ScreenLayout>,
    // Display settings
    pub highlighter: CodeHighlighter,
    pub sidebar_width: u16,
    pub show_icons: bool,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            toc: TocState::default(),
            content: ContentPanelState::new(),
            layout: None,
            highlighter: CodeHighlighter::new(&config.code_theme),
            sidebar_width: config.sidebar_width,
            show_icons: config.show_icons,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, app, config));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(config);
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = vec![first_event];
        while let Some(event) = poll_event_timeout(Duration::ZERO)? {
            pending.push(event);
        }

        for event in pending {
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                info!("Quit requested at section {}", app.nav.current_index());
                return Ok(());
            }
        }
    }
}

/// Apply one input event. Scrolling stays in the TUI; everything else
/// becomes an `Action` for `core::update`.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let action = match event {
        TuiEvent::Quit => Action::Quit,
        TuiEvent::Next => Action::Next,
        TuiEvent::Previous => Action::Previous,
        TuiEvent::First => Action::First,
        TuiEvent::Last => Action::Last,
        TuiEvent::Jump(index) => Action::GoTo(index),
        TuiEvent::ToggleSidebar => Action::ToggleSidebar,
        TuiEvent::Click(column, row) => match click_action(app, tui, column, row) {
            Some(action) => action,
            None => return Effect::None,
        },
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.content.handle_event(&event);
            return Effect::None;
        }
        TuiEvent::Resize => return Effect::None,
    };

    let effect = update(app, action);
    if effect == Effect::SectionChanged {
        tui.content.reset_scroll();
    }
    effect
}

/// Disabled buttons swallow clicks.
fn click_action(app: &App, tui: &TuiState, column: u16, row: u16) -> Option<Action> {
    let layout = tui.layout.as_ref()?;
    let hit = hit_test(
        layout,
        column,
        row,
        tui.toc.offset(),
        app.nav.section_count(),
    );
    debug!("Click at ({}, {}) hit {:?}", column, row, hit);
    match hit? {
        Hit::ToggleSidebar => Some(Action::ToggleSidebar),
        Hit::Previous if app.nav.can_go_previous() => Some(Action::Previous),
        Hit::Next if app.nav.can_go_next() => Some(Action::Next),
        Hit::Previous | Hit::Next => None,
        Hit::TocEntry(index) => Some(Action::GoTo(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    /// Draw once so clicks have a layout to hit.
    fn drawn(count: usize) -> (App, TuiState) {
        let app = test_app(count);
        let mut tui = TuiState::new(&ResolvedConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)).unwrap();
        (app, tui)
    }

    #[test]
    fn test_keys_drive_navigation() {
        let (mut app, mut tui) = drawn(7);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Next), Effect::SectionChanged);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Jump(5)), Effect::SectionChanged);
        assert_eq!(app.nav.current_index(), 5);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Quit), Effect::Quit);
    }

    #[test]
    fn test_out_of_range_jump_keeps_section() {
        let (mut app, mut tui) = drawn(7);
        handle_event(&mut app, &mut tui, TuiEvent::Jump(2));
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Jump(8)), Effect::None);
        assert_eq!(app.nav.current_index(), 2);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_click_toc_entry_jumps() {
        let (mut app, mut tui) = drawn(7);
        // Sidebar entries start at row 3 (progress, title, border)
        let effect = handle_event(&mut app, &mut tui, TuiEvent::Click(5, 6));
        assert_eq!(effect, Effect::SectionChanged);
        assert_eq!(app.nav.current_index(), 3);
        assert_eq!(app.nav.progress(), 50.0);
    }

    #[test]
    fn test_click_buttons() {
        let (mut app, mut tui) = drawn(7);
        let previous = tui.layout.unwrap().previous;
        let next = tui.layout.unwrap().next;

        // Previous is disabled on the first section
        handle_event(&mut app, &mut tui, TuiEvent::Click(previous.x + 2, previous.y + 1));
        assert_eq!(app.nav.current_index(), 0);

        handle_event(&mut app, &mut tui, TuiEvent::Click(next.x + 2, next.y + 1));
        assert_eq!(app.nav.current_index(), 1);
        handle_event(&mut app, &mut tui, TuiEvent::Click(previous.x + 2, previous.y + 1));
        assert_eq!(app.nav.current_index(), 0);
    }

    #[test]
    fn test_click_next_on_last_section_is_ignored() {
        let (mut app, mut tui) = drawn(7);
        let next = tui.layout.unwrap().next;
        handle_event(&mut app, &mut tui, TuiEvent::Last);
        assert_eq!(app.nav.current_index(), 6);

        let effect = handle_event(&mut app, &mut tui, TuiEvent::Click(next.x + 2, next.y + 1));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav.current_index(), 6);
        assert_eq!(app.nav.progress(), 100.0);
    }

    #[test]
    fn test_click_toggle_hides_sidebar() {
        let (mut app, mut tui) = drawn(7);
        handle_event(&mut app, &mut tui, TuiEvent::Click(1, 1));
        assert!(!app.nav.sidebar_visible());
        assert_eq!(app.nav.current_index(), 0);
    }

    #[test]
    fn test_click_before_first_draw_is_ignored() {
        let mut app = test_app(7);
        let mut tui = TuiState::new(&ResolvedConfig::default());
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Click(5, 6)), Effect::None);
        assert_eq!(app.nav.current_index(), 0);
    }

    #[test]
    fn test_section_change_resets_scroll() {
        let (mut app, mut tui) = drawn(7);
        tui.content.scroll_state.set_offset(Position { x: 0, y: 3 });
        handle_event(&mut app, &mut tui, TuiEvent::Next);
        assert_eq!(tui.content.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_scroll_events_do_not_navigate() {
        let (mut app, mut tui) = drawn(7);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ScrollDown), Effect::None);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Resize), Effect::None);
        assert_eq!(app.nav.current_index(), 0);
    }
}
