use crate::{
    buffer::{Span, TextBuffer},
    fold::{FoldHost, fold_block_at_position},
};

use super::style::StyleClass;

/// Widget replacing a delimiter line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Widget {
    /// Opening `---`; clicking it folds `block`.
    OpenDelimiter { block: Span },
    /// Closing `---`; inert.
    CloseDelimiter,
}

impl Widget {
    pub fn is_interactive(&self) -> bool {
        matches!(self, Widget::OpenDelimiter { .. })
    }

    pub fn style(&self) -> StyleClass {
        StyleClass::Delimiter
    }

    pub fn name(&self) -> &'static str {
        match self {
            Widget::OpenDelimiter { .. } => "open-delimiter",
            Widget::CloseDelimiter => "close-delimiter",
        }
    }

    /// Handles a click on the rendered widget.
    ///
    /// An opening delimiter synchronously requests a fold of its block.
    /// Returns whether a fold was requested.
    pub fn click<B, H>(&self, buffer: &B, host: &mut H) -> bool
    where
        B: TextBuffer + ?Sized,
        H: FoldHost + ?Sized,
    {
        match self {
            Widget::OpenDelimiter { block } => fold_block_at_position(buffer, host, block.start),
            Widget::CloseDelimiter => false,
        }
    }
}

/// What a decoration does to its range.
///
/// Variant order is the tie-break order when two decorations share a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DecorationKind {
    /// Attribute on the line starting at `from`; `from == to`.
    Line(StyleClass),
    /// Replace the range with a widget.
    Replace(Widget),
    /// Style the range.
    Mark(StyleClass),
}

/// A single rendering directive with absolute byte offsets.
///
/// The derived ordering is `(from, to, kind)`, which is the order renderers
/// expect: a line decoration sorts before a mark starting at the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decoration {
    pub from: usize,
    pub to: usize,
    pub kind: DecorationKind,
}

impl Decoration {
    pub fn line(line_start: usize, class: StyleClass) -> Self {
        Self {
            from: line_start,
            to: line_start,
            kind: DecorationKind::Line(class),
        }
    }

    pub fn mark(span: Span, class: StyleClass) -> Self {
        Self {
            from: span.start,
            to: span.end,
            kind: DecorationKind::Mark(class),
        }
    }

    pub fn replace(span: Span, widget: Widget) -> Self {
        Self {
            from: span.start,
            to: span.end,
            kind: DecorationKind::Replace(widget),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.from, self.to)
    }

    /// The class a renderer should paint this decoration with.
    pub fn style(&self) -> StyleClass {
        match self.kind {
            DecorationKind::Line(class) | DecorationKind::Mark(class) => class,
            DecorationKind::Replace(widget) => widget.style(),
        }
    }

    pub fn widget(&self) -> Option<&Widget> {
        match &self.kind {
            DecorationKind::Replace(widget) => Some(widget),
            _ => None,
        }
    }
}
