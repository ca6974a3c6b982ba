//! Screen layout, drawing and mouse hit testing.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │████████████████░░░░░░░ 50% ░░░░░░░░░░░░░░░░░░│ progress
//! │[≡] Guide · Section 4/7                        │ title
//! │┌ ▤ Table of Contents ┐ ◷ Section title       │
//! ││ ...                 │ ───────────────────── │ body
//! │└─────────────────────┘ paragraph / code / list│
//! │┌──────────┐                      ┌──────────┐│
//! ││◀ Previous│   hint               │  Next ▶  ││ nav
//! │└──────────┘                      └──────────┘│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The same [`compute_layout`] drives drawing and [`hit_test`], so a click
//! always lands on what the last frame showed.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::content::GUIDE_TITLE;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::nav_bar::button_areas;
use crate::tui::components::title_bar::toggle_area;
use crate::tui::components::{ContentPanel, NavBar, ProgressBar, TableOfContents, TitleBar};

const NAV_HEIGHT: u16 = 3;

/// Where every interactive region sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub progress: Rect,
    pub title: Rect,
    pub toggle: Rect,
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub nav: Rect,
    pub previous: Rect,
    pub next: Rect,
}

pub fn compute_layout(area: Rect, sidebar_visible: bool, sidebar_width: u16) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [progress, title, body, nav] =
        Layout::vertical([Length(1), Length(1), Min(0), Length(NAV_HEIGHT)]).areas(area);

    let (sidebar, content) = if sidebar_visible {
        // Never let the sidebar squeeze the content below half the screen
        let width = sidebar_width.min(body.width / 2);
        let [sidebar, content] = Layout::horizontal([Length(width), Min(0)]).areas(body);
        (Some(sidebar), content)
    } else {
        (None, body)
    };

    let (previous, _hint, next) = button_areas(nav);

    ScreenLayout {
        progress,
        title,
        toggle: toggle_area(title),
        sidebar,
        content,
        nav,
        previous,
        next,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let nav = &app.nav;
    let layout = compute_layout(frame.area(), nav.sidebar_visible(), tui.sidebar_width);

    ProgressBar::new(nav.progress()).render(frame, layout.progress);

    TitleBar::new(
        GUIDE_TITLE,
        nav.current_index(),
        nav.section_count(),
        app.status_message.as_deref(),
        nav.sidebar_visible(),
    )
    .render(frame, layout.title);

    if let Some(sidebar) = layout.sidebar {
        TableOfContents::new(
            &mut tui.toc,
            app.catalog(),
            nav.current_index(),
            tui.show_icons,
        )
        .render(frame, sidebar);
    }

    ContentPanel::new(
        &mut tui.content,
        app.current_section(),
        nav.current_index(),
        &tui.highlighter,
        tui.show_icons,
    )
    .render(frame, layout.content);

    NavBar::new(nav.can_go_previous(), nav.can_go_next()).render(frame, layout.nav);

    tui.layout = Some(layout);
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ToggleSidebar,
    Previous,
    Next,
    TocEntry(usize),
}

/// Map a screen position to the control under it.
///
/// `toc_offset` is the index of the first entry the sidebar list drew.
pub fn hit_test(
    layout: &ScreenLayout,
    column: u16,
    row: u16,
    toc_offset: usize,
    section_count: usize,
) -> Option<Hit> {
    let pos = Position::new(column, row);

    if layout.toggle.contains(pos) {
        return Some(Hit::ToggleSidebar);
    }
    if layout.previous.contains(pos) {
        return Some(Hit::Previous);
    }
    if layout.next.contains(pos) {
        return Some(Hit::Next);
    }
    if let Some(sidebar) = layout.sidebar {
        // Entries start one row below the top border
        let entries = Rect {
            x: sidebar.x + 1,
            y: sidebar.y + 1,
            width: sidebar.width.saturating_sub(2),
            height: sidebar.height.saturating_sub(2),
        };
        if entries.contains(pos) {
            let index = toc_offset + (row - entries.y) as usize;
            if index < section_count {
                return Some(Hit::TocEntry(index));
            }
        }
    }
    None
}
