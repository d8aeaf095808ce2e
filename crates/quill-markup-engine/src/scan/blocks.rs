use crate::buffer::{LineRef, Span, TextBuffer};

use super::{kinds::MetadataFence, types::MetadataBlock};

/// Returns true if line `line_number` (1-based) delimits a metadata block.
///
/// The trimmed line must be exactly `---`. Line 1 always qualifies
/// (frontmatter). Any other candidate is a horizontal rule, and so not a
/// delimiter, only when the line above is blank **and** the line below is
/// blank or missing.
pub fn is_delimiter_line<B: TextBuffer + ?Sized>(line_number: usize, buffer: &B) -> bool {
    let count = buffer.line_count();
    if line_number == 0 || line_number > count {
        return false;
    }
    let line = buffer.line(line_number);
    if !MetadataFence::is_candidate(&line.text) {
        return false;
    }
    let above = (line_number > 1).then(|| buffer.line(line_number - 1));
    let below = (line_number < count).then(|| buffer.line(line_number + 1));
    fence_rule(line_number, above.as_ref(), below.as_ref())
}

/// Decides whether a candidate `---` line delimits, given its neighbours.
fn fence_rule(line_number: usize, above: Option<&LineRef>, below: Option<&LineRef>) -> bool {
    if line_number == 1 {
        return true;
    }
    let blank_above = above.is_none_or(LineRef::is_blank);
    let blank_below = below.is_none_or(LineRef::is_blank);
    !(blank_above && blank_below)
}

/// Classification of a single line for block discovery.
#[derive(Debug, Clone, Copy)]
pub struct LineClass {
    /// Byte span of the line text.
    pub line: Span,
    /// Start of the following line, or buffer end for the last line.
    pub next_start: usize,
    pub is_delimiter: bool,
}

/// Classifies a line from the line itself and its direct neighbours.
pub struct DelimiterClassifier {
    len: usize,
}

impl DelimiterClassifier {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// `above` and `below` are `None` past either end of the buffer.
    pub fn classify(
        &self,
        lr: &LineRef,
        above: Option<&LineRef>,
        below: Option<&LineRef>,
    ) -> LineClass {
        LineClass {
            line: lr.span,
            next_start: below.map_or(self.len, |l| l.span.start),
            is_delimiter: MetadataFence::is_candidate(&lr.text)
                && fence_rule(lr.number, above, below),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Outside,
    Open { opener: Span, content_from: usize },
}

/// Pairs delimiter lines into blocks, left to right.
///
/// The first unmatched delimiter opens, the nearest later delimiter closes.
/// An opener that never closes swallows the rest of the buffer.
pub struct BlockBuilder {
    state: ScanState,
    len: usize,
    out: Vec<MetadataBlock>,
}

impl BlockBuilder {
    pub fn new(len: usize) -> Self {
        Self {
            state: ScanState::Outside,
            len,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if !c.is_delimiter {
            return;
        }

        match self.state {
            ScanState::Outside => {
                self.state = ScanState::Open {
                    opener: c.line,
                    content_from: c.next_start.min(self.len),
                };
            }
            ScanState::Open {
                opener,
                content_from,
            } => {
                self.out.push(MetadataBlock {
                    from: opener.start,
                    to: c.line.end,
                    content_from,
                    content_to: c.line.start,
                });
                self.state = ScanState::Outside;
            }
        }
    }

    pub fn finish(mut self) -> Vec<MetadataBlock> {
        // EOF flush: an unclosed block runs to the end of the buffer.
        if let ScanState::Open {
            opener,
            content_from,
        } = self.state
        {
            self.out.push(MetadataBlock {
                from: opener.start,
                to: self.len,
                content_from,
                content_to: self.len,
            });
        }
        self.out
    }
}

/// Finds every metadata block in the buffer, ordered by `from`.
///
/// Lines are read once each, through a sliding above/current/below window.
pub fn find_metadata_blocks<B: TextBuffer + ?Sized>(buffer: &B) -> Vec<MetadataBlock> {
    let count = buffer.line_count();
    let classifier = DelimiterClassifier::new(buffer.len());
    let mut builder = BlockBuilder::new(buffer.len());

    let mut above: Option<LineRef> = None;
    let mut current = buffer.line(1);
    for n in 1..=count {
        let below = (n < count).then(|| buffer.line(n + 1));
        builder.push(&classifier.classify(&current, above.as_ref(), below.as_ref()));
        let Some(next) = below else {
            break;
        };
        above = Some(std::mem::replace(&mut current, next));
    }

    builder.finish()
}
