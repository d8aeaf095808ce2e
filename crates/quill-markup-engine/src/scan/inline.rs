//! Cursor-based scanners for inline Markdown outside metadata blocks.
//!
//! Inline spans never cross a line break. The requested range is widened to
//! whole lines first, so a delimiter's neighbours are always in view. Every
//! returned span starts outside all metadata blocks: when the cursor enters a
//! block it jumps past it.

use crate::buffer::{Span, TextBuffer, line_bounds};

use super::{
    blocks::find_metadata_blocks,
    cursor::Cursor,
    kinds::{Emphasis, Link},
    types::{EmphasisSpan, LinkSpan, LinkStyle, MetadataBlock, block_at},
};

/// Finds `**bold**` and `__bold__` runs in `span`.
pub fn find_markdown_bold<B: TextBuffer + ?Sized>(buffer: &B, span: Span) -> Vec<EmphasisSpan> {
    find_markdown_bold_outside(buffer, span, &find_metadata_blocks(buffer))
}

/// Like [`find_markdown_bold`] with a precomputed block list.
pub fn find_markdown_bold_outside<B: TextBuffer + ?Sized>(
    buffer: &B,
    span: Span,
    blocks: &[MetadataBlock],
) -> Vec<EmphasisSpan> {
    scan_outside(buffer, span, blocks, try_parse_bold)
}

/// Finds `*italic*` and `_italic_` runs in `span`.
pub fn find_markdown_italic<B: TextBuffer + ?Sized>(buffer: &B, span: Span) -> Vec<EmphasisSpan> {
    find_markdown_italic_outside(buffer, span, &find_metadata_blocks(buffer))
}

/// Like [`find_markdown_italic`] with a precomputed block list.
pub fn find_markdown_italic_outside<B: TextBuffer + ?Sized>(
    buffer: &B,
    span: Span,
    blocks: &[MetadataBlock],
) -> Vec<EmphasisSpan> {
    scan_outside(buffer, span, blocks, try_parse_italic)
}

/// Finds `[text](url)` and `[text][ref]` links in `span`.
pub fn find_markdown_links<B: TextBuffer + ?Sized>(buffer: &B, span: Span) -> Vec<LinkSpan> {
    find_markdown_links_outside(buffer, span, &find_metadata_blocks(buffer))
}

/// Like [`find_markdown_links`] with a precomputed block list.
pub fn find_markdown_links_outside<B: TextBuffer + ?Sized>(
    buffer: &B,
    span: Span,
    blocks: &[MetadataBlock],
) -> Vec<LinkSpan> {
    scan_outside(buffer, span, blocks, try_parse_link)
}

fn scan_outside<B, T>(
    buffer: &B,
    span: Span,
    blocks: &[MetadataBlock],
    mut try_parse: impl FnMut(&mut Cursor<'_>) -> Option<T>,
) -> Vec<T>
where
    B: TextBuffer + ?Sized,
{
    let span = line_bounds(buffer, span);
    let text = buffer.slice(span);
    let mut cur = Cursor::new(&text, span.start);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(block) = block_at(blocks, cur.pos()) {
            // `to` itself is inside the block.
            cur.seek(block.to + 1);
            continue;
        }
        if let Some(node) = try_parse(&mut cur) {
            out.push(node);
            continue;
        }
        cur.bump();
    }
    out
}

/// Attempts to parse a doubled-delimiter bold run at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<EmphasisSpan> {
    let b = cur.peek()?;
    let delimiter = Emphasis::delimiter(b)?;
    let pair = Emphasis::doubled(b)?;
    if !cur.starts_with(pair) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(pair.len());
    let content_start = cur.pos();

    loop {
        if cur.at_line_end() {
            *cur = saved;
            return None;
        }
        if cur.starts_with(pair) && cur.pos() > content_start {
            break;
        }
        cur.bump();
    }
    let content_end = cur.pos();
    cur.bump_n(pair.len());

    Some(EmphasisSpan {
        open: Span::new(start, content_start),
        content: Span::new(content_start, content_end),
        close: Span::new(content_end, cur.pos()),
        delimiter,
    })
}

/// Attempts to parse a single-delimiter italic run at the current position.
///
/// Neither delimiter may touch another copy of itself, so bold delimiters
/// are never mistaken for italic ones.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<EmphasisSpan> {
    let b = cur.peek()?;
    let delimiter = Emphasis::delimiter(b)?;
    if cur.prev() == Some(b) || cur.peek_at(1) == Some(b) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    let content_start = cur.pos();

    loop {
        if cur.at_line_end() {
            *cur = saved;
            return None;
        }
        if cur.peek() == Some(b) {
            if cur.pos() > content_start && cur.peek_at(1) != Some(b) {
                break;
            }
            *cur = saved;
            return None;
        }
        cur.bump();
    }
    let content_end = cur.pos();
    cur.bump();

    Some(EmphasisSpan {
        open: Span::new(start, content_start),
        content: Span::new(content_start, content_end),
        close: Span::new(content_end, cur.pos()),
        delimiter,
    })
}

/// Attempts to parse an inline or reference link at the current position.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<LinkSpan> {
    if cur.peek() != Some(Link::OPEN_BRACKET) {
        return None;
    }
    let saved = cur.clone();
    let parsed = parse_link_body(cur);
    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

fn parse_link_body(cur: &mut Cursor<'_>) -> Option<LinkSpan> {
    let open = cur.pos();
    cur.bump(); // [
    let text = enclosed(cur, Link::CLOSE_BRACKET, Some(Link::OPEN_BRACKET))?;
    cur.bump(); // ]

    let (style, closer) = match cur.peek() {
        Some(Link::OPEN_PAREN) => (LinkStyle::Inline, Link::CLOSE_PAREN),
        Some(Link::OPEN_BRACKET) => (LinkStyle::Reference, Link::CLOSE_BRACKET),
        _ => return None,
    };
    let target_open = cur.pos();
    cur.bump();
    let target = enclosed(cur, closer, None)?;
    cur.bump();

    Some(LinkSpan {
        open_bracket: Span::new(open, open + 1),
        text,
        close_bracket: Span::new(text.end, text.end + 1),
        target_open: Span::new(target_open, target_open + 1),
        target,
        target_close: Span::new(target.end, target.end + 1),
        style,
    })
}

/// Scans a non-empty run up to (not including) `close` on the current line.
fn enclosed(cur: &mut Cursor<'_>, close: u8, reject: Option<u8>) -> Option<Span> {
    let start = cur.pos();
    loop {
        let b = cur.peek()?;
        if b == close {
            break;
        }
        if b == b'\n' || b == b'\r' || Some(b) == reject {
            return None;
        }
        cur.bump();
    }
    (cur.pos() > start).then(|| Span::new(start, cur.pos()))
}
