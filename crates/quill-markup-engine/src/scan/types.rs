use crate::buffer::Span;

/// A `---`-delimited metadata region.
///
/// `from < content_from <= content_to <= to`. For an unclosed block
/// `to == content_to == buffer.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataBlock {
    /// Start of the opening delimiter line.
    pub from: usize,
    /// End of the closing delimiter line text, or buffer end when unclosed.
    pub to: usize,
    /// Start of the line after the opening delimiter.
    pub content_from: usize,
    /// Start of the closing delimiter line, or buffer end when unclosed.
    pub content_to: usize,
}

impl MetadataBlock {
    pub fn span(&self) -> Span {
        Span::new(self.from, self.to)
    }

    pub fn content_span(&self) -> Span {
        Span::new(self.content_from, self.content_to)
    }

    /// True when a closing delimiter line exists.
    pub fn is_closed(&self) -> bool {
        self.content_to < self.to
    }

    /// True if `pos` lies within `[from, to]`.
    pub fn contains(&self, pos: usize) -> bool {
        self.span().contains(pos)
    }
}

/// Returns the block containing `pos`, if any.
pub fn block_at(blocks: &[MetadataBlock], pos: usize) -> Option<&MetadataBlock> {
    // Blocks are sorted and disjoint.
    let idx = blocks.partition_point(|b| b.to < pos);
    blocks.get(idx).filter(|b| b.contains(pos))
}

/// Declarative keyword recognised at the start of a block line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Scope,
    Quill,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Scope => "SCOPE",
            Keyword::Quill => "QUILL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SCOPE" => Some(Keyword::Scope),
            "QUILL" => Some(Keyword::Quill),
            _ => None,
        }
    }
}

/// A `SCOPE: name` or `QUILL: name` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDecl {
    pub keyword: Keyword,
    pub name: String,
    pub keyword_span: Span,
    pub name_span: Span,
}

/// Inferred scalar type of a key-value pair's inline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueType {
    String,
    Number,
    Boolean,
    /// No inline value; the value span is zero-width at the key end.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YamlPair {
    pub key: Span,
    pub value: Span,
    pub value_type: ValueType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterType {
    /// `*` or `**`
    Asterisk,
    /// `_` or `__`
    Underscore,
}

/// Bold or italic run: delimiters and content are separate spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisSpan {
    pub open: Span,
    pub content: Span,
    pub close: Span,
    pub delimiter: DelimiterType,
}

impl EmphasisSpan {
    pub fn full(&self) -> Span {
        Span::new(self.open.start, self.close.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkStyle {
    /// `[text](url)`
    Inline,
    /// `[text][ref]`
    Reference,
}

/// A Markdown link decomposed for independent styling of each part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpan {
    pub open_bracket: Span,
    pub text: Span,
    pub close_bracket: Span,
    /// `(` for inline links, `[` for reference links.
    pub target_open: Span,
    pub target: Span,
    /// `)` for inline links, `]` for reference links.
    pub target_close: Span,
    pub style: LinkStyle,
}

impl LinkSpan {
    pub fn full(&self) -> Span {
        Span::new(self.open_bracket.start, self.target_close.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(from: usize, to: usize) -> MetadataBlock {
        MetadataBlock {
            from,
            to,
            content_from: from + 4,
            content_to: to.saturating_sub(3).max(from + 4),
        }
    }

    #[test]
    fn block_at_finds_containing_block() {
        let blocks = [block(0, 20), block(30, 50)];
        assert_eq!(block_at(&blocks, 0), Some(&blocks[0]));
        assert_eq!(block_at(&blocks, 20), Some(&blocks[0]));
        assert_eq!(block_at(&blocks, 25), None);
        assert_eq!(block_at(&blocks, 31), Some(&blocks[1]));
        assert_eq!(block_at(&blocks, 51), None);
    }

    #[test]
    fn keyword_parse_round_trips() {
        for kw in [Keyword::Scope, Keyword::Quill] {
            assert_eq!(Keyword::parse(kw.as_str()), Some(kw));
        }
        assert_eq!(Keyword::parse("scope"), None);
    }
}
