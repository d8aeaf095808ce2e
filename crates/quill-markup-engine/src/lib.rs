pub mod buffer;
pub mod decorate;
pub mod fold;
pub mod scan;
pub mod snapshot;
pub mod theme;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use buffer::{Span, TextBuffer};
pub use decorate::{
    Decoration, DecorationKind, DecorationView, StyleClass, ViewUpdate, Widget, build_decorations,
};
pub use fold::{
    FoldEffect, FoldHost, FoldRange, FoldSet, FoldState, ToggleOutcome, fold_block_at_position,
    toggle_all_blocks, unfold_block_at_position,
};
pub use scan::{MetadataBlock, find_metadata_blocks, is_delimiter_line};
pub use theme::{
    Color, DesignTokens, ParseColorError, ThemeError, ThemeMode, ThemeStyles, VisualStyle,
    theme_styles,
};
