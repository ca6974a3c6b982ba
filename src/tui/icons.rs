//! Terminal rendering of the catalog's icon tokens.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::catalog::{Icon, IconKind, Tint};

/// Single-column glyph for an icon.
pub fn glyph(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Timer => "◷",
        IconKind::Code => "λ",
        IconKind::Image => "▣",
        IconKind::Zap => "ϟ",
        IconKind::TextSelect => "¶",
        IconKind::Rocket => "➶",
        IconKind::Book => "▤",
    }
}

pub fn color(tint: Tint) -> Color {
    match tint {
        Tint::Blue => Color::Blue,
        Tint::Green => Color::Green,
        Tint::Purple => Color::Magenta,
        Tint::Red => Color::Red,
        Tint::Yellow => Color::Yellow,
        Tint::Pink => Color::LightMagenta,
        Tint::Indigo => Color::LightBlue,
    }
}

pub fn span(icon: Icon) -> Span<'static> {
    Span::styled(glyph(icon.kind), Style::default().fg(color(icon.tint)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn glyphs_are_single_column() {
        let kinds = [
            IconKind::Timer,
            IconKind::Code,
            IconKind::Image,
            IconKind::Zap,
            IconKind::TextSelect,
            IconKind::Rocket,
            IconKind::Book,
        ];
        for kind in kinds {
            assert_eq!(glyph(kind).width(), 1, "{kind:?}");
        }
    }

    #[test]
    fn span_carries_tint() {
        let s = span(Icon::new(IconKind::Zap, Tint::Yellow));
        assert_eq!(s.content, "ϟ");
        assert_eq!(s.style.fg, Some(Color::Yellow));
    }
}
