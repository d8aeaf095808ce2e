use crate::scan::types::DelimiterType;

/// Emphasis delimiter bytes.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Delimiter type for a byte, if it can open emphasis.
    pub fn delimiter(b: u8) -> Option<DelimiterType> {
        match b {
            Self::STAR => Some(DelimiterType::Asterisk),
            Self::UNDERSCORE => Some(DelimiterType::Underscore),
            _ => None,
        }
    }

    /// The doubled (bold) form of a delimiter byte.
    pub fn doubled(b: u8) -> Option<&'static [u8; 2]> {
        match b {
            Self::STAR => Some(b"**"),
            Self::UNDERSCORE => Some(b"__"),
            _ => None,
        }
    }
}
