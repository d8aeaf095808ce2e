use quill_markup_engine::{
    Decoration, DecorationKind, StyleClass, TextBuffer, ThemeStyles, VisualStyle, Widget,
    buffer::LineRef, theme::Color,
};
use ratatui::{
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
};
use xi_rope::Rope;

use crate::app::Row;

const GUTTER: &str = "│ ";
const OPEN_WIDGET: &str = "▾ ───";
const CLOSE_WIDGET: &str = "  ───";

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb(c.r, c.g, c.b)
}

/// Converts a resolved visual style to a terminal style.
pub fn to_style(v: &VisualStyle) -> Style {
    let mut style = Style::default();
    if let Some(fg) = v.foreground {
        style = style.fg(term_color(fg));
    }
    if let Some(bg) = v.background {
        style = style.bg(term_color(bg));
    }
    if v.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if v.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if v.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Renders one row. Only decorations touching the row's line are consulted.
pub fn render_row(
    rope: &Rope,
    row: Row,
    decorations: &[Decoration],
    styles: &ThemeStyles,
) -> Line<'static> {
    match row {
        Row::Line(n) => render_line(&rope.line(n), decorations, styles),
        Row::Folded { line, range } => {
            let hidden = rope.line_at(range.to).number - line + 1;
            let block = styles.get(StyleClass::Block);
            let delimiter = to_style(&styles.get(StyleClass::Delimiter)).patch(to_style(&block));
            Line::from(vec![
                Span::styled(GUTTER, border_style(&block)),
                Span::styled(format!("▸ ─── {hidden} lines folded"), delimiter),
            ])
        }
    }
}

fn border_style(block: &VisualStyle) -> Style {
    let mut style = to_style(block);
    if let Some(border) = block.border {
        style = style.fg(term_color(border));
    }
    style
}

fn render_line(line: &LineRef, decorations: &[Decoration], styles: &ThemeStyles) -> Line<'static> {
    let start = line.span.start;
    let end = line.span.end;
    let touching = decorations
        .iter()
        .filter(|d| d.from <= end && d.to >= start);

    let mut base = Style::default();
    let mut in_block = false;
    let mut widget = None;
    let mut marks = vec![];
    for d in touching {
        match d.kind {
            DecorationKind::Line(class) if d.from == start => {
                in_block = true;
                base = base.patch(to_style(&styles.get(class)));
            }
            DecorationKind::Replace(w) if d.from == start => widget = Some(w),
            DecorationKind::Mark(class) if d.from < d.to => marks.push((d.from, d.to, class)),
            _ => {}
        }
    }

    let mut spans = vec![];
    if in_block {
        spans.push(Span::styled(
            GUTTER,
            border_style(&styles.get(StyleClass::Block)),
        ));
    }

    if let Some(w) = widget {
        let text = match w {
            Widget::OpenDelimiter { .. } => OPEN_WIDGET,
            Widget::CloseDelimiter => CLOSE_WIDGET,
        };
        spans.push(Span::styled(
            text,
            base.patch(to_style(&styles.get(w.style()))),
        ));
        return Line::from(spans);
    }

    // Style each char by the last mark covering it; marks arrive sorted.
    let mut run = String::new();
    let mut run_style = base;
    for (i, ch) in line.text.char_indices() {
        let pos = start + i;
        let style = marks
            .iter()
            .filter(|(from, to, _)| *from <= pos && pos < *to)
            .fold(base, |s, (_, _, class)| s.patch(to_style(&styles.get(*class))));
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(ch);
    }
    if !run.is_empty() || spans.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    Line::from(spans)
}
