use crate::Span;

/// Line/column bookkeeping for consumed text.
///
/// Columns count characters consumed on the current line: after a lexeme
/// the last column is the column of its final character, and the next
/// lexeme starts one past it. A newline moves to the next line and resets
/// both markers to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionTracker {
    line: u32,
    last_column: u32,
}

impl Default for PositionTracker {
    fn default() -> Self {
        PositionTracker {
            line: 1,
            last_column: 0,
        }
    }
}

impl PositionTracker {
    pub fn new() -> Self {
        PositionTracker::default()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.last_column
    }

    /// Consumes `text` and returns the span it covered.
    ///
    /// Chunks with embedded newlines end up exactly where feeding them one
    /// character at a time would; the returned span starts on the line the
    /// chunk started on.
    pub fn advance(&mut self, text: &str) -> Span {
        let line = self.line;
        let mut first_column = None;

        for (index, segment) in text.split('\n').enumerate() {
            if index > 0 {
                self.newline();
            }

            if !segment.is_empty() {
                let start = self.last_column + 1;
                self.last_column += segment.chars().count() as u32;
                first_column.get_or_insert(start);
            }
        }

        match first_column {
            Some(first_column) if self.line == line => {
                Span::new(line, first_column, self.last_column)
            }
            Some(first_column) => Span::new(line, first_column, first_column),
            None => Span::new(line, 0, 0),
        }
    }

    /// Zero-width span one column past the last consumed character.
    pub fn here(&self) -> Span {
        Span::new(self.line, self.last_column + 1, self.last_column + 1)
    }

    fn newline(&mut self) {
        self.line += 1;
        self.last_column = 0;
    }
}
