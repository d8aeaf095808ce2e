/// Byte cursor over one slice of the buffer.
///
/// Local indices are into `text`; every position it reports is absolute,
/// i.e. offset by `base`, the buffer offset where `text` starts.
#[derive(Clone)]
pub struct Cursor<'a> {
    text: &'a [u8],
    base: usize,
    idx: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str, base: usize) -> Self {
        Self {
            text: text.as_bytes(),
            base,
            idx: 0,
        }
    }

    /// Absolute buffer offset of the cursor.
    pub fn pos(&self) -> usize {
        self.base + self.idx
    }

    pub fn eof(&self) -> bool {
        self.idx >= self.text.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.text.get(self.idx + ahead).copied()
    }

    /// The byte behind the cursor; `None` at the start of the slice.
    pub fn prev(&self) -> Option<u8> {
        let at = self.idx.checked_sub(1)?;
        self.text.get(at).copied()
    }

    /// False once the cursor has run past the end.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        match self.text.get(self.idx..) {
            Some(rest) => rest.starts_with(pat),
            None => false,
        }
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.idx += 1;
        Some(b)
    }

    pub fn bump_n(&mut self, n: usize) {
        self.idx += n;
    }

    /// Jumps to absolute offset `pos`, clamped to the slice.
    pub fn seek(&mut self, pos: usize) {
        self.idx = pos.saturating_sub(self.base).min(self.text.len());
    }

    /// Inline spans end here: end of input, `\n` or `\r`.
    pub fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some(b'\n' | b'\r'))
    }
}
