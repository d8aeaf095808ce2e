use crate::{
    buffer::TextBuffer,
    decorate::{Decoration, DecorationKind, StyleClass},
    scan::{MetadataBlock, block_at},
};

/// Marks that only the inline scanners produce.
const INLINE_CLASSES: [StyleClass; 9] = [
    StyleClass::BoldDelimiter,
    StyleClass::Bold,
    StyleClass::ItalicDelimiter,
    StyleClass::Italic,
    StyleClass::LinkBracket,
    StyleClass::LinkText,
    StyleClass::LinkParen,
    StyleClass::LinkUrl,
    StyleClass::LinkReference,
];

/// Panics if `blocks` or `decorations` break a structural invariant.
pub fn check<B: TextBuffer + ?Sized>(
    buffer: &B,
    blocks: &[MetadataBlock],
    decorations: &[Decoration],
) {
    check_blocks(buffer, blocks);
    check_decorations(buffer, blocks, decorations);
}

fn check_blocks<B: TextBuffer + ?Sized>(buffer: &B, blocks: &[MetadataBlock]) {
    let n = buffer.len();
    for b in blocks {
        assert!(
            b.from < b.content_from && b.content_from <= b.content_to && b.content_to <= b.to,
            "block fields out of order: {b:?}"
        );
        assert!(b.to <= n, "block out of bounds: {b:?} (buffer len: {n})");
        if !b.is_closed() {
            assert_eq!(b.to, n, "unclosed block must run to buffer end: {b:?}");
        }
    }
    for pair in blocks.windows(2) {
        assert!(
            pair[0].to < pair[1].from,
            "blocks overlap or are unordered: {:?}, {:?}",
            pair[0],
            pair[1]
        );
    }
}

fn check_decorations<B: TextBuffer + ?Sized>(
    buffer: &B,
    blocks: &[MetadataBlock],
    decorations: &[Decoration],
) {
    let n = buffer.len();
    for pair in decorations.windows(2) {
        assert!(
            pair[0] < pair[1],
            "decorations not strictly sorted: {:?}, {:?}",
            pair[0],
            pair[1]
        );
    }
    for d in decorations {
        assert!(
            d.from <= d.to && d.to <= n,
            "decoration out of bounds: {d:?} (buffer len: {n})"
        );
        match d.kind {
            DecorationKind::Line(_) => {
                assert_eq!(d.from, d.to, "line decoration must be zero width: {d:?}");
                assert_eq!(
                    buffer.line_at(d.from).span.start,
                    d.from,
                    "line decoration not at a line start: {d:?}"
                );
                assert!(
                    block_at(blocks, d.from).is_some(),
                    "line decoration outside any block: {d:?}"
                );
            }
            DecorationKind::Mark(class) if INLINE_CLASSES.contains(&class) => {
                assert!(
                    block_at(blocks, d.from).is_none(),
                    "inline mark starts inside a block: {d:?}"
                );
            }
            DecorationKind::Replace(_) | DecorationKind::Mark(_) => {}
        }
    }
}
