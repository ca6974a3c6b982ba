//! # Export
//!
//! Renders the whole catalog as a single document for `--dump`, outside the
//! terminal UI. Markdown follows the same block rules as the content panel:
//! paragraphs, fenced code tagged with its language, bulleted lists.

use clap::ValueEnum;
use std::fmt::Write as _;

use crate::core::catalog::{Catalog, ContentBlock, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Markdown,
    Json,
}

pub fn render(catalog: &Catalog, format: DumpFormat, wrap_width: usize) -> serde_json::Result<String> {
    match format {
        DumpFormat::Markdown => Ok(to_markdown(catalog, wrap_width)),
        DumpFormat::Json => serde_json::to_string_pretty(catalog),
    }
}

/// `wrap_width == 0` leaves paragraphs and list items on one line each.
pub fn to_markdown(catalog: &Catalog, wrap_width: usize) -> String {
    let mut out = String::new();
    for (i, section) in catalog.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_section(&mut out, section, wrap_width);
    }
    out
}

fn write_section(out: &mut String, section: &Section, wrap_width: usize) {
    let _ = writeln!(out, "# {}", section.title);
    for block in &section.content {
        out.push('\n');
        match block {
            ContentBlock::Text { text } => {
                for line in wrap(text, wrap_width, "") {
                    let _ = writeln!(out, "{line}");
                }
            }
            ContentBlock::Code { text, language } => {
                let _ = writeln!(out, "```{language}");
                let _ = writeln!(out, "{}", text.trim_end_matches('\n'));
                let _ = writeln!(out, "```");
            }
            ContentBlock::List { title, items } => {
                if let Some(title) = title {
                    let _ = writeln!(out, "**{title}**");
                    out.push('\n');
                }
                for item in items {
                    for line in wrap(item, wrap_width, "- ") {
                        let _ = writeln!(out, "{line}");
                    }
                }
            }
        }
    }
}

/// Wrap `text` to `width`, starting the first line with `bullet` and
/// hanging the rest under it.
fn wrap(text: &str, width: usize, bullet: &str) -> Vec<String> {
    if width == 0 {
        return vec![format!("{bullet}{text}")];
    }
    let indent = " ".repeat(bullet.len());
    let options = textwrap::Options::new(width)
        .initial_indent(bullet)
        .subsequent_indent(&indent);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Icon, IconKind, Tint};
    use crate::test_support::test_catalog;

    #[test]
    fn test_markdown_renders_each_block_kind() {
        let md = to_markdown(&test_catalog(1), 80);
        assert_eq!(
            md,
            "# Section 1\n\
             \n\
             Body of section 1.\n\
             \n\
             ```rust\n\
             fn section_1() {}\n\
             ```\n\
             \n\
             - point 1a\n\
             - point 1b\n"
        );
    }

    #[test]
    fn test_sections_separated_by_blank_line() {
        let md = to_markdown(&test_catalog(2), 80);
        assert!(md.contains("- point 1b\n\n# Section 2\n"));
    }

    #[test]
    fn test_list_caption_is_bold() {
        let catalog = Catalog::new(vec![Section::new(
            "Metrics",
            Icon::new(IconKind::Zap, Tint::Yellow),
            vec![ContentBlock::titled_list("Key:", ["FCP", "LCP"])],
        )])
        .unwrap();
        let md = to_markdown(&catalog, 80);
        assert!(md.contains("**Key:**\n\n- FCP\n- LCP\n"));
    }

    #[test]
    fn test_paragraphs_wrap_and_items_hang() {
        let catalog = Catalog::new(vec![Section::new(
            "Wrap",
            Icon::new(IconKind::Book, Tint::Blue),
            vec![
                ContentBlock::text("one two three four five six"),
                ContentBlock::list(["alpha beta gamma delta"]),
            ],
        )])
        .unwrap();
        let md = to_markdown(&catalog, 12);
        assert!(md.contains("one two\nthree four\nfive six\n"), "{md}");
        assert!(md.contains("- alpha beta\n  gamma\n  delta\n"), "{md}");
    }

    #[test]
    fn test_zero_width_disables_wrapping() {
        let catalog = Catalog::new(vec![Section::new(
            "Flat",
            Icon::new(IconKind::Book, Tint::Blue),
            vec![ContentBlock::text("one two three four five six")],
        )])
        .unwrap();
        let md = to_markdown(&catalog, 0);
        assert!(md.contains("one two three four five six\n"));
    }

    #[test]
    fn test_json_export_is_section_array() {
        let json = render(&test_catalog(3), DumpFormat::Json, 80).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[2]["content"][1]["type"], "code");
    }
}
