use crate::cursor::{Cursor, CursorId, Snapshot};

/// Cursor over a slice of copyable elements (bytes, tokens, ...)
///
/// The snapshot is the index of the current element; the index equal to the
/// slice length is end of input.
#[derive(Debug)]
pub struct SliceCursor<'code, T> {
    data: &'code [T],
    position: usize,
    furthest: usize,
    id: CursorId,
}

impl<'code, T: Copy> SliceCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        SliceCursor {
            data,
            position: 0,
            furthest: 0,
            id: CursorId::fresh(),
        }
    }

    /// Get the source data without consuming the cursor
    pub fn source(&self) -> &'code [T] {
        self.data
    }

    /// The elements not yet consumed
    pub fn remaining(&self) -> &'code [T] {
        &self.data[self.position..]
    }
}

// A clone is a separate cursor and must not share re-entrancy keys with the original.
impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        SliceCursor {
            data: self.data,
            position: self.position,
            furthest: self.furthest,
            id: CursorId::fresh(),
        }
    }
}

impl<T: Copy> Cursor for SliceCursor<'_, T> {
    type Element = T;

    fn current(&self) -> Option<T> {
        self.data.get(self.position).copied()
    }

    fn advance(&mut self) {
        if self.position < self.data.len() {
            self.position += 1;
            self.furthest = self.furthest.max(self.position);
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::at(self.position)
    }

    fn rewind(&mut self, snapshot: Snapshot) {
        self.position = snapshot.offset().min(self.data.len());
    }

    fn identity(&self) -> CursorId {
        self.id
    }

    fn furthest(&self) -> Snapshot {
        Snapshot::at(self.furthest)
    }
}

/// A specialized cursor for byte data (u8)
pub type ByteCursor<'code> = SliceCursor<'code, u8>;
