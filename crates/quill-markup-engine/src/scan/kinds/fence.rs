/// Metadata block delimiters and in-block punctuation.
pub struct MetadataFence;

impl MetadataFence {
    /// Trimmed text of a delimiter line.
    pub const DELIMITER: &'static str = "---";
    /// Separates a key from its value.
    pub const SEPARATOR: u8 = b':';

    /// True if the line text, ignoring surrounding whitespace, is a bare delimiter.
    pub fn is_candidate(line: &str) -> bool {
        line.trim() == Self::DELIMITER
    }
}
