//! # Syntax Kinds
//!
//! Types that own their syntax delimiters. The block and cursor scanners
//! refer to these constants; the line patterns in `metadata` spell their own
//! punctuation.
//!
//! - **`MetadataFence`**: `DELIMITER = "---"`, plus the key separator
//! - **`Emphasis`**: `*`/`_` single and doubled delimiters
//! - **`Link`**: bracket and paren bytes

pub mod emphasis;
pub mod fence;
pub mod link;

pub use emphasis::Emphasis;
pub use fence::MetadataFence;
pub use link::Link;
