//! # Fold Controller
//!
//! Block-granularity fold requests. Fold state belongs to the host and is
//! reached through [`FoldState`] (read) and [`FoldHost`] (dispatch); the
//! controller only ever issues [`FoldEffect`]s.

pub mod controller;
pub mod state;

pub use controller::{
    BlockFold, ToggleOutcome, block_fold, fold_block_at_position, toggle_all_blocks,
    unfold_block_at_position,
};
pub use state::{FoldEffect, FoldHost, FoldRange, FoldSet, FoldState};
