use std::borrow::Cow;

use xi_rope::{LinesMetric, Rope};

use super::span::Span;

/// A single buffer line with its 1-based number and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// 1-based line number.
    pub number: usize,
    /// Byte span of the line text, excluding the line break.
    pub span: Span,
    /// The line text without its line break.
    pub text: String,
}

impl LineRef {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Read-only view of the host's text buffer.
///
/// Line numbers are 1-based and always within `1..=line_count()`; offsets are
/// byte offsets within `[0, len()]`. Out-of-range arguments are clamped.
pub trait TextBuffer {
    /// Total length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lines. An empty buffer has one empty line.
    fn line_count(&self) -> usize;

    /// Looks up a line by its 1-based number.
    fn line(&self, number: usize) -> LineRef;

    /// The line containing byte offset `offset`.
    fn line_at(&self, offset: usize) -> LineRef;

    /// Text of `span`.
    fn slice(&self, span: Span) -> Cow<'_, str>;
}

impl TextBuffer for Rope {
    fn len(&self) -> usize {
        Rope::len(self)
    }

    fn line_count(&self) -> usize {
        self.measure::<LinesMetric>() + 1
    }

    fn line(&self, number: usize) -> LineRef {
        let count = TextBuffer::line_count(self);
        let number = number.clamp(1, count);
        let start = self.offset_of_line(number - 1);
        let mut end = if number < count {
            // Drop the trailing '\n'.
            self.offset_of_line(number) - 1
        } else {
            Rope::len(self)
        };
        let mut text = self.slice_to_cow(start..end).into_owned();
        if text.ends_with('\r') {
            text.pop();
            end -= 1;
        }
        LineRef {
            number,
            span: Span { start, end },
            text,
        }
    }

    fn line_at(&self, offset: usize) -> LineRef {
        let offset = offset.min(Rope::len(self));
        TextBuffer::line(self, self.line_of_offset(offset) + 1)
    }

    fn slice(&self, span: Span) -> Cow<'_, str> {
        let span = span.clamp_to(Rope::len(self));
        self.slice_to_cow(span.start..span.end)
    }
}

/// Returns the lines intersecting the half-open `span`, in order.
///
/// An empty span yields no lines.
pub fn lines_in<B: TextBuffer + ?Sized>(
    buffer: &B,
    span: Span,
) -> impl Iterator<Item = LineRef> + '_ {
    let span = span.clamp_to(buffer.len());
    let range = if span.is_empty() {
        1..1
    } else {
        let first = buffer.line_at(span.start).number;
        let last = buffer.line_at(span.end - 1).number;
        first..last + 1
    };
    range.map(move |n| buffer.line(n))
}

/// Widens `span` to whole lines: from the start of its first line to the end
/// of its last line. Empty spans are only clamped.
pub fn line_bounds<B: TextBuffer + ?Sized>(buffer: &B, span: Span) -> Span {
    let span = span.clamp_to(buffer.len());
    if span.is_empty() {
        return span;
    }
    let start = buffer.line_at(span.start).span.start;
    let end = buffer.line_at(span.end - 1).span.end.max(span.end);
    Span::new(start, end)
}
