//! # Core Application Logic
//!
//! This module contains Guidebook's reading logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (content)    │
//!                    │  • Navigator (cursor)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Export   │
//!           │  Adapter   │              │ (--dump)   │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Section` and `ContentBlock`, the content as data
//! - [`content`]: the compiled-in guide
//! - [`navigation`]: `Navigator`, the cursor and sidebar flag
//! - [`state`]: The `App` struct, all reader state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: layered settings
//! - [`export`]: Markdown and JSON dumps of the catalog

pub mod action;
pub mod catalog;
pub mod config;
pub mod content;
pub mod export;
pub mod navigation;
pub mod state;
