//! Scanners for the contents of a metadata block.
//!
//! Scanning is line oriented: every line intersecting the requested range is
//! matched whole. Comments may start anywhere on a line.

use std::sync::LazyLock;

use regex::Regex;

use crate::buffer::{Span, TextBuffer, line_bounds, lines_in};

use super::{
    kinds::MetadataFence,
    types::{Comment, Keyword, KeywordDecl, ValueType, YamlPair},
};

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(SCOPE|QUILL):\s*([a-z_][a-z0-9_]*)").expect("keyword pattern is valid")
});

static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([A-Za-z_][A-Za-z0-9_-]*):\s*(.*)$").expect("pair pattern is valid")
});

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[^\n]*").expect("comment pattern is valid"));

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("number pattern is valid"));

/// Finds `SCOPE: name` / `QUILL: name` declarations at the start of lines.
pub fn find_scope_quill_keywords<B: TextBuffer + ?Sized>(
    buffer: &B,
    span: Span,
) -> Vec<KeywordDecl> {
    let mut out = vec![];
    for line in lines_in(buffer, span) {
        let Some(caps) = KEYWORD_RE.captures(&line.text) else {
            continue;
        };
        let (Some(kw), Some(name)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Some(keyword) = Keyword::parse(kw.as_str()) else {
            continue;
        };
        let base = line.span.start;
        out.push(KeywordDecl {
            keyword,
            name: name.as_str().to_string(),
            keyword_span: Span::new(base + kw.start(), base + kw.end()),
            name_span: Span::new(base + name.start(), base + name.end()),
        });
    }
    out
}

/// Finds `key: value` pairs, skipping keyword declaration lines.
///
/// A key without an inline value produces a zero-width [`ValueType::Unknown`]
/// value span at the key end.
pub fn find_yaml_pairs<B: TextBuffer + ?Sized>(buffer: &B, span: Span) -> Vec<YamlPair> {
    let mut out = vec![];
    for line in lines_in(buffer, span) {
        if KEYWORD_RE.is_match(&line.text) {
            continue;
        }
        let Some(caps) = PAIR_RE.captures(&line.text) else {
            continue;
        };
        let (Some(key), Some(raw_value)) = (caps.get(2), caps.get(3)) else {
            continue;
        };

        let base = line.span.start;
        let key_span = Span::new(base + key.start(), base + key.end());
        let value = raw_value.as_str().trim();

        if value.is_empty() {
            out.push(YamlPair {
                key: key_span,
                value: Span::new(key_span.end, key_span.end),
                value_type: ValueType::Unknown,
            });
            continue;
        }

        // Search strictly after the separator so `asdf: asdf` does not
        // resolve the value to the key's own text.
        let separator = key.end();
        debug_assert_eq!(line.text.as_bytes()[separator], MetadataFence::SEPARATOR);
        let after = separator + 1;
        let Some(rel) = line.text[after..].find(value) else {
            continue;
        };
        let value_start = base + after + rel;

        out.push(YamlPair {
            key: key_span,
            value: Span::new(value_start, value_start + value.len()),
            value_type: infer_value_type(value),
        });
    }
    out
}

/// Classifies a trimmed, non-empty inline value.
pub fn infer_value_type(value: &str) -> ValueType {
    match value {
        "" => ValueType::Unknown,
        "true" | "false" => ValueType::Boolean,
        v if NUMBER_RE.is_match(v) => ValueType::Number,
        _ => ValueType::String,
    }
}

/// Finds `#` comments running to end of line on the lines of `span`.
pub fn find_yaml_comments<B: TextBuffer + ?Sized>(buffer: &B, span: Span) -> Vec<Comment> {
    let span = line_bounds(buffer, span);
    let text = buffer.slice(span);
    COMMENT_RE
        .find_iter(&text)
        .map(|m| Comment {
            span: Span::new(span.start + m.start(), span.start + m.end()),
        })
        .collect()
}
