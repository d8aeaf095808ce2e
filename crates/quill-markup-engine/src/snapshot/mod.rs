//! # Snapshot Testing Support
//!
//! Utilities for testing decoration passes via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a decoration list as stable text, one
//!   decoration per line, for `insta` snapshots
//! - **`invariants`**: runtime checks for scanner and builder correctness
//!   (spans in bounds, blocks ordered and disjoint, decorations sorted and
//!   unique, no inline marks inside blocks)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{render, render_blocks};
