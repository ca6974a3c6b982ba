//! # Content Catalog
//!
//! The guide's content as plain data. Nothing here knows how it will be
//! drawn: icons are opaque tokens, code blocks carry a language name rather
//! than highlighting, and lists are just strings.
//!
//! ```text
//! Catalog
//! └── sections: Vec<Section>          // never empty
//!     ├── title: String
//!     ├── icon: Icon { kind, tint }
//!     └── content: Vec<ContentBlock>
//!         ├── Text { text }
//!         ├── Code { text, language }
//!         └── List { title?, items }
//! ```
//!
//! A section's identity is its position in the catalog.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;

/// Which pictogram a section is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Timer,
    Code,
    Image,
    Zap,
    TextSelect,
    Rocket,
    Book,
}

/// Accent colour hint for an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
    Pink,
    Indigo,
}

/// Opaque display token attached to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub kind: IconKind,
    pub tint: Tint,
}

impl Icon {
    pub const fn new(kind: IconKind, tint: Tint) -> Self {
        Self { kind, tint }
    }
}

/// One renderable unit inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Code {
        text: String,
        language: String,
    },
    List {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        items: Vec<String>,
    },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn code(language: impl Into<String>, text: impl Into<String>) -> Self {
        ContentBlock::Code {
            text: text.into(),
            language: language.into(),
        }
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::List {
            title: None,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// A list with a caption shown above its items.
    pub fn titled_list<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::List {
            title: Some(title.into()),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub icon: Icon,
    pub content: Vec<ContentBlock>,
}

impl Section {
    pub fn new(title: impl Into<String>, icon: Icon, content: Vec<ContentBlock>) -> Self {
        Self {
            title: title.into(),
            icon,
            content,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    UntitledSection(usize),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no sections"),
            CatalogError::UntitledSection(i) => write!(f, "section {i} has an empty title"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered, immutable, non-empty sequence of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    sections: Vec<Section>,
    #[serde(skip)]
    len: NonZeroUsize,
}

impl Catalog {
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        let Some(len) = NonZeroUsize::new(sections.len()) else {
            return Err(CatalogError::Empty);
        };
        if let Some(i) = sections.iter().position(|s| s.title.trim().is_empty()) {
            return Err(CatalogError::UntitledSection(i));
        }
        Ok(Self { sections, len })
    }

    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Always present: a catalog is never empty.
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon() -> Icon {
        Icon::new(IconKind::Book, Tint::Blue)
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn test_blank_title_rejected() {
        let sections = vec![
            Section::new("Intro", icon(), vec![]),
            Section::new("   ", icon(), vec![]),
        ];
        assert_eq!(
            Catalog::new(sections),
            Err(CatalogError::UntitledSection(1))
        );
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            Section::new("One", icon(), vec![]),
            Section::new("Two", icon(), vec![]),
        ])
        .unwrap();
        assert_eq!(catalog.len().get(), 2);
        assert_eq!(catalog.first().title, "One");
        let titles: Vec<&str> = catalog.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["One", "Two"]);
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_len_matches_sections() {
        for n in 1..=5 {
            let sections = (0..n)
                .map(|i| Section::new(format!("S{i}"), icon(), vec![]))
                .collect();
            let catalog = Catalog::new(sections).unwrap();
            assert_eq!(catalog.len().get(), n);
            assert_eq!(catalog.len().get(), catalog.sections().len());
        }
    }

    #[test]
    fn test_block_serializes_with_type_tag() {
        let json = serde_json::to_value(ContentBlock::code("css", "a {}")).unwrap();
        assert_eq!(json["type"], "code");
        assert_eq!(json["language"], "css");

        let json = serde_json::to_value(ContentBlock::list(["a", "b"])).unwrap();
        assert_eq!(json["type"], "list");
        assert!(json.get("title").is_none());
        assert_eq!(json["items"][1], "b");
    }

    #[test]
    fn test_catalog_serializes_as_array() {
        let catalog = Catalog::new(vec![Section::new("Only", icon(), vec![])]).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["title"], "Only");
        assert_eq!(json[0]["icon"]["kind"], "book");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CatalogError::Empty.to_string(), "catalog has no sections");
        assert_eq!(
            CatalogError::UntitledSection(3).to_string(),
            "section 3 has an empty title"
        );
    }
}
