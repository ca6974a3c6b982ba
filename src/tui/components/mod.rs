//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `ProgressBar`: Top gauge showing how far through the guide the reader is
//! - `TitleBar`: Sidebar toggle, guide name, position and notices
//! - `NavBar`: Previous/Next buttons with enabled/disabled styling
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! - `TableOfContents` / `TocState`: sidebar list, keeps the current entry in view
//! - `ContentPanel` / `ContentPanelState`: scrollable section body with a
//!   wrapped-lines cache
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (constructor parameters), not
//! by reaching into global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! NavBar::new(app.nav.can_go_previous(), app.nav.can_go_next()).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! NavBar::default().render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── progress_bar.rs   (Top gauge)
//! ├── title_bar.rs      (Toggle + position)
//! ├── toc.rs            (Sidebar table of contents)
//! ├── content_panel.rs  (Current section body)
//! └── nav_bar.rs        (Previous/Next buttons)
//! ```

pub mod content_panel;
pub mod nav_bar;
pub mod progress_bar;
pub mod title_bar;
pub mod toc;

pub use content_panel::{ContentPanel, ContentPanelState};
pub use nav_bar::NavBar;
pub use progress_bar::ProgressBar;
pub use title_bar::TitleBar;
pub use toc::{TableOfContents, TocState};
