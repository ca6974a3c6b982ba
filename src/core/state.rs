//! # Application State
//!
//! Core reader state. Domain logic only, no terminal types. Presentation
//! state (scroll offsets, hit areas) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog              // compiled-in sections, read-only
//! ├── nav: Navigator                // cursor + sidebar flag
//! └── status_message: Option<String> // last rejected jump, if any
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::catalog::{Catalog, Section};
use crate::core::navigation::Navigator;

pub struct App {
    catalog: Catalog,
    pub nav: Navigator,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let nav = Navigator::new(catalog.len());
        Self {
            catalog,
            nav,
            status_message: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Falls back to the first section if `nav` was swapped for one sized
    /// from a different catalog.
    pub fn current_section(&self) -> &Section {
        self.catalog
            .get(self.nav.current_index())
            .unwrap_or_else(|| self.catalog.first())
    }
}
