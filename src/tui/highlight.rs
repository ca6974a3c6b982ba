//! Code sample → styled ratatui `Line`s via `syntect`.
//!
//! The syntax and theme sets load once per process. Unknown languages and
//! lines syntect fails on fall back to plain white text.

use std::sync::LazyLock;

use log::warn;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::core::config::DEFAULT_CODE_THEME;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const PLAIN_CODE: Style = Style::new().fg(Color::White);

pub struct CodeHighlighter {
    theme: &'static Theme,
}

impl CodeHighlighter {
    /// Uses the named syntect theme, or the default one if it doesn't exist.
    pub fn new(theme_name: &str) -> Self {
        let themes = &THEME_SET.themes;
        let theme = match themes.get(theme_name) {
            Some(theme) => theme,
            None => {
                warn!(
                    "Unknown code theme {:?}, using {}",
                    theme_name, DEFAULT_CODE_THEME
                );
                &themes[DEFAULT_CODE_THEME]
            }
        };
        Self { theme }
    }

    /// One `Line` per source line, tabs expanded to 4 spaces
    /// (ratatui renders `\t` as zero-width).
    pub fn highlight(&self, language: &str, code: &str) -> Vec<Line<'static>> {
        let Some(syntax) = SYNTAX_SET.find_syntax_by_token(language) else {
            return plain(code);
        };
        let mut hl = HighlightLines::new(syntax, self.theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(code) {
            match hl.highlight_line(line, &SYNTAX_SET) {
                Ok(ranges) => {
                    let spans: Vec<Span<'static>> = ranges
                        .into_iter()
                        .filter_map(|(hl_style, frag)| {
                            let content = frag.trim_end_matches('\n').replace('\t', "    ");
                            if content.is_empty() {
                                return None;
                            }
                            let fg = Color::Rgb(
                                hl_style.foreground.r,
                                hl_style.foreground.g,
                                hl_style.foreground.b,
                            );
                            Some(Span::styled(content, Style::default().fg(fg)))
                        })
                        .collect();
                    lines.push(Line::from(spans));
                }
                Err(e) => {
                    warn!("Highlighting failed for {} sample: {}", language, e);
                    lines.push(plain_line(line));
                }
            }
        }
        lines
    }
}

fn plain(code: &str) -> Vec<Line<'static>> {
    code.lines().map(plain_line).collect()
}

fn plain_line(line: &str) -> Line<'static> {
    let content = line.trim_end_matches('\n').replace('\t', "    ");
    Line::from(Span::styled(content, PLAIN_CODE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn known_language_is_colored() {
        let hl = CodeHighlighter::new(DEFAULT_CODE_THEME);
        let lines = hl.highlight("css", "a {\n    color: red;\n}");
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[1]), "    color: red;");
        assert!(
            lines[1]
                .spans
                .iter()
                .all(|s| matches!(s.style.fg, Some(Color::Rgb(..))))
        );
    }

    #[test]
    fn unknown_language_is_plain() {
        let hl = CodeHighlighter::new(DEFAULT_CODE_THEME);
        let lines = hl.highlight("no-such-lang", "x = 1\ny = 2");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::White));
        assert_eq!(line_text(&lines[1]), "y = 2");
    }

    #[test]
    fn blank_lines_are_kept() {
        let hl = CodeHighlighter::new(DEFAULT_CODE_THEME);
        let lines = hl.highlight("html", "<p>a</p>\n\n<p>b</p>");
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[1]), "");
    }

    #[test]
    fn tabs_expanded_to_spaces() {
        let hl = CodeHighlighter::new(DEFAULT_CODE_THEME);
        let lines = hl.highlight("javascript", "function f() {\n\treturn 1;\n}");
        assert!(line_text(&lines[1]).starts_with("    return"));
        assert!(!lines.iter().any(|l| line_text(l).contains('\t')));
    }

    #[test]
    fn unknown_theme_falls_back() {
        let hl = CodeHighlighter::new("definitely-not-a-theme");
        assert!(std::ptr::eq(hl.theme, &THEME_SET.themes[DEFAULT_CODE_THEME]));
    }
}
