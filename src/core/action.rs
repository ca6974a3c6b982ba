//! # Actions
//!
//! Everything the reader can do becomes an `Action`.
//! User presses →? That's `Action::Next`.
//! User clicks the third TOC entry? That's `Action::GoTo(2)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what else needs to happen. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    GoTo(usize),
    First,
    Last,
    ToggleSidebar,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A different section is now current; views tied to the old one reset.
    SectionChanged,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?} (at section {})", action, app.nav.current_index());
    let before = app.nav.current_index();

    match action {
        Action::Next => {
            app.nav.go_next();
        }
        Action::Previous => {
            app.nav.go_previous();
        }
        Action::GoTo(index) => {
            if let Err(e) = app.nav.go_to(index) {
                warn!("Rejected jump: {}", e);
                app.status_message = Some(format!(
                    "No section {} (guide has {})",
                    index + 1,
                    app.nav.section_count()
                ));
                return Effect::None;
            }
        }
        Action::First => {
            app.nav.go_first();
        }
        Action::Last => {
            app.nav.go_last();
        }
        Action::ToggleSidebar => {
            app.nav.toggle_sidebar();
            debug!("Sidebar visible: {}", app.nav.sidebar_visible());
            return Effect::None;
        }
        Action::Quit => return Effect::Quit,
    }

    if app.nav.current_index() == before {
        return Effect::None;
    }
    app.status_message = None;
    debug!(
        "Moved to section {} ({:.0}%)",
        app.nav.current_index(),
        app.nav.progress()
    );
    Effect::SectionChanged
}
