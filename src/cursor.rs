use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque position inside the input of one cursor
///
/// Snapshots are cheap to copy and compare. A snapshot is only meaningful to the
/// cursor instance that produced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snapshot(usize);

impl Snapshot {
    /// Build a snapshot from a cursor-specific offset
    pub fn at(offset: usize) -> Self {
        Snapshot(offset)
    }

    /// The offset this snapshot was built from
    pub fn offset(self) -> usize {
        self.0
    }
}

/// Process-unique identity of a cursor instance
///
/// Alternation nodes key their re-entrancy tracking on this so that two cursors
/// sitting at the same offset never interfere with each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CursorId(u64);

impl CursorId {
    /// Allocate a new identity, distinct from every identity handed out before
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        CursorId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Generic cursor trait for parser combinators
///
/// A cursor is a mutable position over a sequence of elements. Parsers advance it
/// as they consume input and rewind it to an earlier snapshot when they backtrack.
/// This abstraction lets one combinator set run over characters, bytes, or
/// tokens.
pub trait Cursor {
    /// The type of elements this cursor iterates over
    type Element;

    /// The element at the current position, or `None` at end of input
    fn current(&self) -> Option<Self::Element>;

    /// Move past the current element
    ///
    /// Advancing at end of input leaves the cursor at end of input.
    fn advance(&mut self);

    /// Capture the current position
    fn snapshot(&self) -> Snapshot;

    /// Restore a position previously captured by `snapshot` on this cursor
    ///
    /// A snapshot past the end of input rewinds to the end. Cursors whose
    /// elements span several offsets move back to the start of the element
    /// containing the snapshot.
    fn rewind(&mut self, snapshot: Snapshot);

    /// The identity of this cursor instance
    fn identity(&self) -> CursorId;

    /// The furthest position this cursor has ever been advanced to
    fn furthest(&self) -> Snapshot;

    /// Check if the cursor is at the end of the sequence
    fn at_end(&self) -> bool {
        self.current().is_none()
    }
}
