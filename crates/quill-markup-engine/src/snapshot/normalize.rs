use std::fmt::Write;

use crate::{
    buffer::{TextBuffer, preview},
    decorate::{Decoration, DecorationKind},
    scan::MetadataBlock,
};

const PREVIEW: usize = 40;

/// One line per decoration: `from..to kind name "text"`.
///
/// Line decorations have no text of their own and print only the class.
pub fn render<B: TextBuffer + ?Sized>(buffer: &B, decorations: &[Decoration]) -> String {
    let mut out = String::new();
    for d in decorations {
        let _ = match d.kind {
            DecorationKind::Line(class) => {
                writeln!(out, "{}..{} line {}", d.from, d.to, class.as_str())
            }
            DecorationKind::Replace(widget) => writeln!(
                out,
                "{}..{} widget {} {:?}",
                d.from,
                d.to,
                widget.name(),
                preview(buffer, d.span(), PREVIEW)
            ),
            DecorationKind::Mark(class) => writeln!(
                out,
                "{}..{} mark {} {:?}",
                d.from,
                d.to,
                class.as_str(),
                preview(buffer, d.span(), PREVIEW)
            ),
        };
    }
    out
}

/// One line per block: `from..to content content_from..content_to [open]`.
pub fn render_blocks(blocks: &[MetadataBlock]) -> String {
    let mut out = String::new();
    for b in blocks {
        let _ = writeln!(
            out,
            "{}..{} content {}..{}{}",
            b.from,
            b.to,
            b.content_from,
            b.content_to,
            if b.is_closed() { "" } else { " open" }
        );
    }
    out
}
