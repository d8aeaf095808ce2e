//! # Buffer access
//!
//! The engine never owns the document. It reads the host's buffer through
//! [`TextBuffer`], implemented here for `xi_rope::Rope`, and addresses text
//! with byte [`Span`]s.

pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, TextBuffer, line_bounds, lines_in};
pub use slice::{preview, slice_to_string};
pub use span::Span;
