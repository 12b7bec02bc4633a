use crate::cursor::{Cursor, CursorId, Snapshot};

/// Cursor over UTF-8 text yielding `char`s
///
/// The snapshot is the byte offset of the current character.
#[derive(Debug)]
pub struct StrCursor<'code> {
    text: &'code str,
    offset: usize,
    furthest: usize,
    id: CursorId,
}

impl<'code> StrCursor<'code> {
    pub fn new(text: &'code str) -> Self {
        StrCursor {
            text,
            offset: 0,
            furthest: 0,
            id: CursorId::fresh(),
        }
    }

    /// Get the source text without consuming the cursor
    pub fn source(&self) -> &'code str {
        self.text
    }

    /// The text not yet consumed
    pub fn remaining(&self) -> &'code str {
        &self.text[self.offset..]
    }

    /// Convert a snapshot into a 1-based line number and 1-based character column
    ///
    /// Columns count characters rather than bytes or display cells. An offset
    /// inside a multi-byte character reports that character's position.
    pub fn line_col(&self, snapshot: Snapshot) -> (usize, usize) {
        let end = self.boundary_at_or_before(snapshot.offset());
        let mut line = 1;
        let mut column = 1;
        for ch in self.text[..end].chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    /// Clamp `offset` to the text and move it back to the start of its character
    fn boundary_at_or_before(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

impl Clone for StrCursor<'_> {
    fn clone(&self) -> Self {
        StrCursor {
            text: self.text,
            offset: self.offset,
            furthest: self.furthest,
            id: CursorId::fresh(),
        }
    }
}

impl Cursor for StrCursor<'_> {
    type Element = char;

    fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current() {
            self.offset += ch.len_utf8();
            self.furthest = self.furthest.max(self.offset);
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::at(self.offset)
    }

    fn rewind(&mut self, snapshot: Snapshot) {
        self.offset = self.boundary_at_or_before(snapshot.offset());
    }

    fn identity(&self) -> CursorId {
        self.id
    }

    fn furthest(&self) -> Snapshot {
        Snapshot::at(self.furthest)
    }
}
