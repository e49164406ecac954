//! Cursors over folder snapshots
//!
//! A cursor pairs an immutable snapshot of folders with the index of the
//! next folder to hand out. Extraction is pure: `next_chunk` consumes a
//! cursor and returns the chunk plus the advanced cursor, leaving every
//! storage concern to the token store.

use crate::error::{Error, Result};
use crate::types::Folder;

// ============================================================================
// Cursor
// ============================================================================

/// Read position inside an immutable folder snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// The full result set captured when the sequence started
    snapshot: Vec<Folder>,
    /// Index of the first folder not yet delivered
    next_index: usize,
}

impl Cursor {
    /// Create a cursor at the start of a snapshot
    pub fn new(snapshot: Vec<Folder>) -> Self {
        Self {
            snapshot,
            next_index: 0,
        }
    }

    /// The folders captured by this cursor
    pub fn snapshot(&self) -> &[Folder] {
        &self.snapshot
    }

    /// Total number of folders in the snapshot
    pub fn snapshot_len(&self) -> usize {
        self.snapshot.len()
    }

    /// Index of the first folder not yet delivered
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Number of folders not yet delivered
    pub fn remaining(&self) -> usize {
        self.snapshot.len().saturating_sub(self.next_index)
    }

    /// Whether every folder in the snapshot has been delivered
    pub fn is_exhausted(&self) -> bool {
        self.next_index >= self.snapshot.len()
    }
}

// ============================================================================
// Chunk extraction
// ============================================================================

/// Extract the next chunk of at most `max` folders from `cursor`.
///
/// The chunk holds `min(remaining, max)` folders and is an independent
/// copy, never a view into the snapshot. On an exhausted cursor the chunk
/// is empty and the cursor comes back unchanged. `max` must be positive.
pub fn next_chunk(cursor: Cursor, max: usize) -> Result<(Vec<Folder>, Cursor)> {
    if max == 0 {
        return Err(Error::invalid_argument("chunk size must be positive"));
    }

    let start = cursor.next_index;
    let end = start + cursor.remaining().min(max);
    let chunk = cursor.snapshot[start..end].to_vec();

    let advanced = Cursor {
        next_index: end,
        ..cursor
    };
    Ok((chunk, advanced))
}
