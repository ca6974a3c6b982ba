//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Catalog, ContentBlock, Icon, IconKind, Section, Tint};
use crate::core::state::App;

/// A catalog of `count` synthetic sections titled "Section 1", "Section 2", ...
/// Each one holds a paragraph, a code sample and a list.
pub fn test_catalog(count: usize) -> Catalog {
    let sections = (1..=count)
        .map(|n| {
            Section::new(
                format!("Section {n}"),
                Icon::new(IconKind::Code, Tint::Green),
                vec![
                    ContentBlock::text(format!("Body of section {n}.")),
                    ContentBlock::code("rust", format!("fn section_{n}() {{}}")),
                    ContentBlock::list([format!("point {n}a"), format!("point {n}b")]),
                ],
            )
        })
        .collect();
    Catalog::new(sections).expect("test catalog must be non-empty")
}

/// Creates a test App over `count` synthetic sections.
pub fn test_app(count: usize) -> App {
    App::new(test_catalog(count))
}
