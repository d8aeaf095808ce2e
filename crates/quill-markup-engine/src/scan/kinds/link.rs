pub struct Link;

impl Link {
    pub const OPEN_BRACKET: u8 = b'[';
    pub const CLOSE_BRACKET: u8 = b']';
    pub const OPEN_PAREN: u8 = b'(';
    pub const CLOSE_PAREN: u8 = b')';
}
