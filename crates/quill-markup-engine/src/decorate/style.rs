/// Style class attached to a line or mark decoration, or used to paint a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleClass {
    /// Every line of a metadata block.
    Block,
    /// Replacement widgets for `---` lines.
    Delimiter,
    ScopeKeyword,
    QuillKeyword,
    /// The identifier after `SCOPE:` / `QUILL:`.
    KeywordName,
    YamlKey,
    YamlString,
    YamlNumber,
    YamlBoolean,
    YamlComment,
    BoldDelimiter,
    Bold,
    ItalicDelimiter,
    Italic,
    LinkBracket,
    LinkText,
    LinkParen,
    LinkUrl,
    LinkReference,
}

impl StyleClass {
    pub const ALL: [StyleClass; 19] = [
        StyleClass::Block,
        StyleClass::Delimiter,
        StyleClass::ScopeKeyword,
        StyleClass::QuillKeyword,
        StyleClass::KeywordName,
        StyleClass::YamlKey,
        StyleClass::YamlString,
        StyleClass::YamlNumber,
        StyleClass::YamlBoolean,
        StyleClass::YamlComment,
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

    /// Class name handed to renderers that style by name.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleClass::Block => "qm-block",
            StyleClass::Delimiter => "qm-delimiter",
            StyleClass::ScopeKeyword => "qm-keyword-scope",
            StyleClass::QuillKeyword => "qm-keyword-quill",
            StyleClass::KeywordName => "qm-keyword-name",
            StyleClass::YamlKey => "qm-yaml-key",
            StyleClass::YamlString => "qm-yaml-string",
            StyleClass::YamlNumber => "qm-yaml-number",
            StyleClass::YamlBoolean => "qm-yaml-boolean",
            StyleClass::YamlComment => "qm-yaml-comment",
            StyleClass::BoldDelimiter => "qm-bold-delimiter",
            StyleClass::Bold => "qm-bold",
            StyleClass::ItalicDelimiter => "qm-italic-delimiter",
            StyleClass::Italic => "qm-italic",
            StyleClass::LinkBracket => "qm-link-bracket",
            StyleClass::LinkText => "qm-link-text",
            StyleClass::LinkParen => "qm-link-paren",
            StyleClass::LinkUrl => "qm-link-url",
            StyleClass::LinkReference => "qm-link-reference",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn class_names_are_unique() {
        let names: HashSet<_> = StyleClass::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names.len(), StyleClass::ALL.len());
    }
}
