//! # Pattern Matcher
//!
//! Pure, stateless scanners over buffer ranges. Nothing here is cached: each
//! decoration pass calls these again on the live buffer.
//!
//! ## Modules
//!
//! - **`blocks`**: delimiter classification and `---` block discovery
//! - **`metadata`**: keyword declarations, key-value pairs and comments inside blocks
//! - **`inline`**: bold, italic and links outside blocks
//! - **`cursor`**: byte `Cursor` used by the inline scanners
//! - **`kinds`**: delimiter constants
//! - **`types`**: scanner results
//!
//! ## Delimiters vs. horizontal rules
//!
//! A bare `---` on line 1 always delimits. Elsewhere it is a horizontal rule
//! only when blank lines sit both above and below it (or it is the last line
//! with a blank above).

pub mod blocks;
pub mod cursor;
pub mod inline;
pub mod kinds;
pub mod metadata;
pub mod types;

pub use blocks::{find_metadata_blocks, is_delimiter_line};
pub use inline::{
    find_markdown_bold, find_markdown_bold_outside, find_markdown_italic,
    find_markdown_italic_outside, find_markdown_links, find_markdown_links_outside,
};
pub use metadata::{find_scope_quill_keywords, find_yaml_comments, find_yaml_pairs};
pub use types::{
    Comment, DelimiterType, EmphasisSpan, Keyword, KeywordDecl, LinkSpan, LinkStyle,
    MetadataBlock, ValueType, YamlPair, block_at,
};
