//! # Navigation
//!
//! The reading cursor and sidebar flag. This is the only mutable state in
//! the viewer, and it changes only through the methods below.
//!
//! Invariant: `current_index < section_count` at all times. Moves that
//! would break it are no-ops; jumps that would break it are rejected with
//! [`NavError::OutOfRange`] and leave the state as it was.

use std::fmt;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavError {
    OutOfRange { index: usize, section_count: usize },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::OutOfRange {
                index,
                section_count,
            } => write!(
                f,
                "section index {index} out of range (guide has {section_count} sections)"
            ),
        }
    }
}

impl std::error::Error for NavError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current_index: usize,
    sidebar_visible: bool,
    section_count: NonZeroUsize,
}

impl Navigator {
    /// Every session starts on the first section with the sidebar shown.
    pub fn new(section_count: NonZeroUsize) -> Self {
        Self {
            current_index: 0,
            sidebar_visible: true,
            section_count,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    pub fn section_count(&self) -> usize {
        self.section_count.get()
    }

    pub fn last_index(&self) -> usize {
        self.section_count.get() - 1
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current_index == index
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index < self.last_index()
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Advance one section. Returns `false` (and does nothing) on the last one.
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Step back one section. Returns `false` (and does nothing) on the first one.
    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Jump to the first section. Returns whether the cursor moved.
    pub fn go_first(&mut self) -> bool {
        let moved = self.current_index != 0;
        self.current_index = 0;
        moved
    }

    /// Jump to the last section. Returns whether the cursor moved.
    pub fn go_last(&mut self) -> bool {
        let last = self.last_index();
        let moved = self.current_index != last;
        self.current_index = last;
        moved
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), NavError> {
        if index >= self.section_count.get() {
            return Err(NavError::OutOfRange {
                index,
                section_count: self.section_count.get(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    /// Percentage through the guide, in `[0, 100]`.
    ///
    /// A single-section guide has nowhere to progress to and reports 0.
    pub fn progress(&self) -> f64 {
        let last = self.last_index();
        if last == 0 {
            return 0.0;
        }
        self.current_index as f64 / last as f64 * 100.0
    }
}
