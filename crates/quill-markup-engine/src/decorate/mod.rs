//! # Decoration Builder
//!
//! Turns scanner output, the visible ranges and the host's fold state into
//! one ordered list of [`Decoration`]s. The list is rebuilt from scratch on
//! every pass; [`DecorationView`] decides when a pass is due.

pub mod builder;
pub mod style;
pub mod types;
pub mod view;

pub use builder::build_decorations;
pub use style::StyleClass;
pub use types::{Decoration, DecorationKind, Widget};
pub use view::{DecorationView, ViewUpdate};
