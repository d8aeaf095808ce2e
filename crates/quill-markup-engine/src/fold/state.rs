use crate::{buffer::Span, scan::MetadataBlock};

/// A collapsed region owned by the host's fold state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FoldRange {
    pub from: usize,
    pub to: usize,
}

impl FoldRange {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// The range that folds `block` exactly.
    pub fn of_block(block: &MetadataBlock) -> Self {
        Self::new(block.from, block.to)
    }

    pub fn span(self) -> Span {
        Span::new(self.from, self.to)
    }

    /// True if the ranges touch or overlap; both ends are inclusive.
    pub fn intersects(self, span: Span) -> bool {
        self.from <= span.end && self.to >= span.start
    }

    /// True if this range hides all of `span`.
    pub fn covers(self, span: Span) -> bool {
        self.from <= span.start && self.to >= span.end
    }
}

/// A request to change the host's fold state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldEffect {
    Fold(FoldRange),
    Unfold(FoldRange),
}

/// Read access to the host's folded ranges.
pub trait FoldState {
    /// Folded ranges intersecting `span` (inclusive ends), in host order.
    fn folded_in(&self, span: Span) -> Vec<FoldRange>;
}

/// A fold state that also accepts change requests.
///
/// The engine never edits fold state in place; it only dispatches effects.
pub trait FoldHost: FoldState {
    /// Applies `effects` in order, within the current update cycle.
    fn dispatch(&mut self, effects: Vec<FoldEffect>);
}

/// In-memory fold state.
///
/// Like many editor hosts it does not deduplicate: folding the same range
/// twice stores it twice. Unfolding removes every exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldSet {
    ranges: Vec<FoldRange>,
}

impl FoldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ranges(ranges: impl IntoIterator<Item = FoldRange>) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
        }
    }

    pub fn ranges(&self) -> &[FoldRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The ranges sorted, for order-independent comparisons.
    pub fn sorted(&self) -> Vec<FoldRange> {
        let mut ranges = self.ranges.clone();
        ranges.sort();
        ranges
    }

    /// The outermost folded range hiding `pos`, if any.
    pub fn folded_at(&self, pos: usize) -> Option<FoldRange> {
        self.ranges
            .iter()
            .copied()
            .filter(|r| r.from <= pos && pos <= r.to)
            .min_by_key(|r| (r.from, std::cmp::Reverse(r.to)))
    }

    /// True if some folded range hides all of `span`.
    pub fn is_folded(&self, span: Span) -> bool {
        self.ranges.iter().any(|r| r.covers(span))
    }

    /// Removes every range containing `pos`. Returns how many were removed.
    pub fn unfold_at(&mut self, pos: usize) -> usize {
        let before = self.ranges.len();
        self.ranges.retain(|r| !(r.from <= pos && pos <= r.to));
        before - self.ranges.len()
    }
}

impl FoldState for FoldSet {
    fn folded_in(&self, span: Span) -> Vec<FoldRange> {
        self.ranges
            .iter()
            .copied()
            .filter(|r| r.intersects(span))
            .collect()
    }
}

impl FoldHost for FoldSet {
    fn dispatch(&mut self, effects: Vec<FoldEffect>) {
        for effect in effects {
            match effect {
                FoldEffect::Fold(range) => self.ranges.push(range),
                FoldEffect::Unfold(range) => self.ranges.retain(|r| *r != range),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_set_keeps_duplicates() {
        let mut set = FoldSet::new();
        let r = FoldRange::new(0, 10);
        set.dispatch(vec![FoldEffect::Fold(r), FoldEffect::Fold(r)]);
        assert_eq!(set.ranges().len(), 2);
        set.dispatch(vec![FoldEffect::Unfold(r)]);
        assert!(set.is_empty());
    }

    #[test]
    fn folded_in_uses_inclusive_ends() {
        let set = FoldSet::from_ranges([FoldRange::new(5, 10), FoldRange::new(20, 30)]);
        assert_eq!(set.folded_in(Span::new(10, 12)), vec![FoldRange::new(5, 10)]);
        assert_eq!(set.folded_in(Span::new(11, 19)), vec![]);
        assert_eq!(set.folded_in(Span::new(0, 100)).len(), 2);
    }

    #[test]
    fn folded_at_prefers_outermost() {
        let set = FoldSet::from_ranges([FoldRange::new(4, 8), FoldRange::new(0, 20)]);
        assert_eq!(set.folded_at(6), Some(FoldRange::new(0, 20)));
        assert_eq!(set.folded_at(21), None);
    }

    #[test]
    fn unfold_at_removes_containing_ranges() {
        let mut set = FoldSet::from_ranges([
            FoldRange::new(0, 20),
            FoldRange::new(4, 8),
            FoldRange::new(30, 40),
        ]);
        assert!(set.is_folded(Span::new(5, 7)));
        assert_eq!(set.unfold_at(6), 2);
        assert_eq!(set.ranges(), &[FoldRange::new(30, 40)]);
        assert!(!set.is_folded(Span::new(5, 7)));
        assert_eq!(set.unfold_at(25), 0);
    }

    #[test]
    fn covers_and_intersects() {
        let r = FoldRange::new(10, 20);
        assert!(r.covers(Span::new(10, 13)));
        assert!(!r.covers(Span::new(8, 13)));
        assert!(r.intersects(Span::new(0, 10)));
        assert!(!r.intersects(Span::new(21, 25)));
    }
}
