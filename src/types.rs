//! Core types shared across the crate

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the organization a folder belongs to
pub type OrgId = Uuid;

// ============================================================================
// Folder
// ============================================================================

/// A single organization folder.
///
/// This is the unit of pagination: chunks are contiguous runs of folders
/// taken from an immutable snapshot. The struct is deliberately small and
/// cheap to clone; every chunk handed to a caller is an independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier
    pub id: Uuid,
    /// Human-readable folder name
    pub name: String,
    /// Organization that owns this folder
    pub org_id: OrgId,
    /// Soft-deletion marker, kept on the record rather than filtered out
    #[serde(default)]
    pub deleted: bool,
}

impl Folder {
    /// Create a new folder
    pub fn new(id: Uuid, name: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            id,
            name: name.into(),
            org_id,
            deleted: false,
        }
    }
}

// ============================================================================
// String helpers
// ============================================================================

/// Treat empty strings as absent.
///
/// The wire contract uses `""` for "no token" on both requests and
/// responses, so this shows up at every boundary where a token crosses
/// from transport shape into `Option`.
pub trait OptionStringExt {
    /// Returns `None` if the value is empty, `Some(value)` otherwise
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.and_then(OptionStringExt::none_if_empty)
    }
}
