/// A byte range `[start, end)` into the buffer.
///
/// Every scanner result stores spans rather than copied text, so slicing the
/// buffer with any span reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// True if `pos` lies in `[start, end]`; the end offset counts as inside.
    #[must_use]
    pub fn contains(self, pos: usize) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// The overlap of two half-open spans, if they share at least one byte.
    #[must_use]
    pub fn intersect(self, other: Span) -> Option<Span> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Span { start, end })
    }

    /// Clamps both ends to `[0, len]`.
    #[must_use]
    pub fn clamp_to(self, len: usize) -> Span {
        let end = self.end.min(len);
        Span {
            start: self.start.min(end),
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_overlapping() {
        let a = Span::new(0, 10);
        let b = Span::new(5, 20);
        assert_eq!(a.intersect(b), Some(Span::new(5, 10)));
    }

    #[test]
    fn intersect_touching_is_none() {
        assert_eq!(Span::new(0, 5).intersect(Span::new(5, 9)), None);
    }

    #[test]
    fn contains_is_end_inclusive() {
        let sp = Span::new(3, 6);
        assert!(sp.contains(3));
        assert!(sp.contains(6));
        assert!(!sp.contains(7));
        assert!(!sp.contains(2));
    }

    #[test]
    fn clamp_past_end() {
        assert_eq!(Span::new(4, 100).clamp_to(10), Span::new(4, 10));
        assert_eq!(Span::new(40, 100).clamp_to(10), Span::new(10, 10));
    }
}
