use crate::{
    buffer::{Span, TextBuffer},
    fold::FoldState,
};

use super::{
    builder::build_decorations,
    types::{Decoration, Widget},
};

/// What changed since the last pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewUpdate {
    pub doc_changed: bool,
    pub viewport_changed: bool,
    pub folds_changed: bool,
}

impl ViewUpdate {
    /// Everything changed.
    pub const ALL: ViewUpdate = ViewUpdate {
        doc_changed: true,
        viewport_changed: true,
        folds_changed: true,
    };

    pub fn needs_rebuild(&self) -> bool {
        self.doc_changed || self.viewport_changed || self.folds_changed
    }
}

/// Holds the decoration list for one editor view and rebuilds it on demand.
///
/// Nothing is carried between passes except the finished list: every
/// rebuild rescans the live buffer.
#[derive(Debug, Clone, Default)]
pub struct DecorationView {
    decorations: Vec<Decoration>,
    passes: usize,
}

impl DecorationView {
    pub fn new<B, S>(buffer: &B, visible: &[Span], folds: &S) -> Self
    where
        B: TextBuffer + ?Sized,
        S: FoldState + ?Sized,
    {
        Self {
            decorations: build_decorations(buffer, visible, folds),
            passes: 1,
        }
    }

    /// Rebuilds if `update` reports a relevant change. Returns whether it did.
    pub fn update<B, S>(
        &mut self,
        update: &ViewUpdate,
        buffer: &B,
        visible: &[Span],
        folds: &S,
    ) -> bool
    where
        B: TextBuffer + ?Sized,
        S: FoldState + ?Sized,
    {
        if !update.needs_rebuild() {
            return false;
        }
        self.decorations = build_decorations(buffer, visible, folds);
        self.passes += 1;
        true
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Number of decoration passes run so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// The widget whose replaced range contains `pos`, if any.
    pub fn widget_at(&self, pos: usize) -> Option<&Widget> {
        self.decorations
            .iter()
            .filter(|d| d.from <= pos && pos <= d.to)
            .find_map(Decoration::widget)
    }
}
