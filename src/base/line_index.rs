//! Offset to line/column conversion.

use text_size::{TextRange, TextSize};

use super::{Position, Span};

/// Maps byte offsets of one source text to 1-based line/column positions.
///
/// Columns count Unicode scalar values from the start of the line, so a
/// multi-byte character advances the column by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    text: String,
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(idx as u32 + 1));
            }
        }
        Self {
            text: text.to_owned(),
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Zero-based index of the line containing `offset`.
    fn line_of(&self, offset: TextSize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        }
    }

    /// Position of the character starting at `offset`.
    pub fn position(&self, offset: TextSize) -> Position {
        let offset = offset.min(TextSize::of(self.text.as_str()));
        let line = self.line_of(offset);
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset);
        let column = match self.text.get(start..end) {
            Some(prefix) => prefix.chars().count(),
            None => end - start,
        };
        Position::new(line + 1, column + 1)
    }

    /// Span of `range`, with the end reported at the last character of the
    /// range. Empty ranges collapse to their start position.
    pub fn span(&self, range: TextRange) -> Span {
        let start = self.position(range.start());
        if range.is_empty() {
            return Span::new(start, start);
        }
        let last_char = self
            .text
            .get(..usize::from(range.end()))
            .and_then(|prefix| prefix.char_indices().next_back())
            .map(|(idx, _)| TextSize::new(idx as u32))
            .unwrap_or(range.start());
        Span::new(start, self.position(last_char))
    }
}
