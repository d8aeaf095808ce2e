use super::{lines::TextBuffer, span::Span};

/// Extracts the text for a span from the buffer as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string<B: TextBuffer + ?Sized>(buffer: &B, sp: Span) -> String {
    buffer.slice(sp).into_owned()
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Used for human-readable snapshot output. Truncation backs off to the
/// nearest char boundary.
pub fn preview<B: TextBuffer + ?Sized>(buffer: &B, sp: Span, max: usize) -> String {
    let mut s = slice_to_string(buffer, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}

#[cfg(test)]
mod tests {
    use xi_rope::Rope;

    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        let rope = Rope::from("hello");
        assert_eq!(preview(&rope, Span::new(0, 5), 10), "hello");
    }

    #[test]
    fn preview_truncates_long_text() {
        let rope = Rope::from("hello world");
        assert_eq!(preview(&rope, Span::new(0, 11), 5), "hello...");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let rope = Rope::from("héllo");
        // 'é' occupies bytes 1..3
        assert_eq!(preview(&rope, Span::new(0, 6), 2), "h...");
    }

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("hello world");
        assert_eq!(slice_to_string(&rope, Span::new(6, 11)), "world");
    }

    #[test]
    fn slice_clamps_out_of_range() {
        let rope = Rope::from("abc");
        assert_eq!(slice_to_string(&rope, Span::new(1, 50)), "bc");
    }
}
