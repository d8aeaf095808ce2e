use log::trace;

use crate::{
    buffer::{Span, TextBuffer, line_bounds, lines_in},
    fold::FoldState,
    scan::{
        EmphasisSpan, Keyword, LinkSpan, LinkStyle, MetadataBlock, ValueType,
        find_markdown_bold_outside, find_markdown_italic_outside, find_markdown_links_outside,
        find_metadata_blocks, find_scope_quill_keywords, find_yaml_comments, find_yaml_pairs,
    },
};

use super::{
    style::StyleClass,
    types::{Decoration, Widget},
};

/// Builds the ordered decoration list for the visible part of `buffer`.
///
/// `visible` holds half-open `[start, end)` ranges, each widened to whole lines
/// before scanning. Blocks are discovered over the whole buffer, but only the
/// visible lines are decorated. The result is
/// sorted by `(from, to, kind)` and contains no duplicates, even when visible
/// ranges overlap.
pub fn build_decorations<B, S>(buffer: &B, visible: &[Span], folds: &S) -> Vec<Decoration>
where
    B: TextBuffer + ?Sized,
    S: FoldState + ?Sized,
{
    let blocks = find_metadata_blocks(buffer);
    let mut out = vec![];

    for &range in visible {
        let range = line_bounds(buffer, range);
        if range.is_empty() {
            continue;
        }
        for block in blocks.iter().filter(|b| b.span().intersect(range).is_some()) {
            decorate_block(buffer, block, range, folds, &mut out);
        }
        decorate_inline(buffer, range, &blocks, &mut out);
    }

    out.sort();
    out.dedup();
    trace!(
        "decoration pass: {} blocks, {} visible ranges, {} decorations",
        blocks.len(),
        visible.len(),
        out.len()
    );
    out
}

fn decorate_block<B, S>(
    buffer: &B,
    block: &MetadataBlock,
    range: Span,
    folds: &S,
    out: &mut Vec<Decoration>,
) where
    B: TextBuffer + ?Sized,
    S: FoldState + ?Sized,
{
    if let Some(part) = block.span().intersect(range) {
        out.extend(lines_in(buffer, part).map(|l| Decoration::line(l.span.start, StyleClass::Block)));
    }

    let opener = buffer.line_at(block.from);
    if starts_in(opener.span, range) {
        let folded = folds
            .folded_in(opener.span)
            .iter()
            .any(|r| r.covers(opener.span));
        // A folded opener is left alone; the host draws its own fold placeholder.
        if !folded {
            out.push(Decoration::replace(
                opener.span,
                Widget::OpenDelimiter {
                    block: block.span(),
                },
            ));
        }
    }

    if block.is_closed() {
        let closer = buffer.line_at(block.content_to);
        if starts_in(closer.span, range) {
            out.push(Decoration::replace(closer.span, Widget::CloseDelimiter));
        }
    }

    let Some(content) = block.content_span().intersect(range) else {
        return;
    };

    for decl in find_scope_quill_keywords(buffer, content) {
        let class = match decl.keyword {
            Keyword::Scope => StyleClass::ScopeKeyword,
            Keyword::Quill => StyleClass::QuillKeyword,
        };
        out.push(Decoration::mark(decl.keyword_span, class));
        out.push(Decoration::mark(decl.name_span, StyleClass::KeywordName));
    }

    for pair in find_yaml_pairs(buffer, content) {
        out.push(Decoration::mark(pair.key, StyleClass::YamlKey));
        if pair.value.is_empty() {
            continue;
        }
        let class = match pair.value_type {
            ValueType::String => StyleClass::YamlString,
            ValueType::Number => StyleClass::YamlNumber,
            ValueType::Boolean => StyleClass::YamlBoolean,
            ValueType::Unknown => continue,
        };
        out.push(Decoration::mark(pair.value, class));
    }

    for comment in find_yaml_comments(buffer, content) {
        out.push(Decoration::mark(comment.span, StyleClass::YamlComment));
    }
}

fn decorate_inline<B>(buffer: &B, range: Span, blocks: &[MetadataBlock], out: &mut Vec<Decoration>)
where
    B: TextBuffer + ?Sized,
{
    for bold in find_markdown_bold_outside(buffer, range, blocks) {
        push_emphasis(out, &bold, StyleClass::BoldDelimiter, StyleClass::Bold);
    }
    for italic in find_markdown_italic_outside(buffer, range, blocks) {
        push_emphasis(out, &italic, StyleClass::ItalicDelimiter, StyleClass::Italic);
    }
    for link in find_markdown_links_outside(buffer, range, blocks) {
        push_link(out, &link);
    }
}

fn push_emphasis(
    out: &mut Vec<Decoration>,
    span: &EmphasisSpan,
    delimiter: StyleClass,
    content: StyleClass,
) {
    out.push(Decoration::mark(span.open, delimiter));
    out.push(Decoration::mark(span.content, content));
    out.push(Decoration::mark(span.close, delimiter));
}

fn push_link(out: &mut Vec<Decoration>, link: &LinkSpan) {
    let (target_delim, target) = match link.style {
        LinkStyle::Inline => (StyleClass::LinkParen, StyleClass::LinkUrl),
        LinkStyle::Reference => (StyleClass::LinkBracket, StyleClass::LinkReference),
    };
    out.push(Decoration::mark(link.open_bracket, StyleClass::LinkBracket));
    out.push(Decoration::mark(link.text, StyleClass::LinkText));
    out.push(Decoration::mark(link.close_bracket, StyleClass::LinkBracket));
    out.push(Decoration::mark(link.target_open, target_delim));
    out.push(Decoration::mark(link.target, target));
    out.push(Decoration::mark(link.target_close, target_delim));
}

/// True if `line` starts inside the half-open `range`.
fn starts_in(line: Span, range: Span) -> bool {
    range.start <= line.start && line.start < range.end
}
