//! Request and response types for the folder service

use serde::{Deserialize, Serialize};

use crate::types::{Folder, OrgId};

// ============================================================================
// Unpaginated fetch
// ============================================================================

/// Request for the complete folder list of an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderRequest {
    /// Organization to fetch folders for
    pub org_id: OrgId,
}

impl FetchFolderRequest {
    /// Create a fetch request
    pub fn new(org_id: OrgId) -> Self {
        Self { org_id }
    }
}

/// Complete folder list for an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderResponse {
    /// Every folder owned by the requested organization
    pub folders: Vec<Folder>,
}

// ============================================================================
// Pagination
// ============================================================================

/// Request for one chunk of an organization's folders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Organization being paginated
    pub org_id: OrgId,

    /// Upper bound on folders per chunk, must be positive
    pub max_folders: i64,

    /// Continuation token from the previous response, empty to start a
    /// fresh sequence
    #[serde(default)]
    pub token: String,
}

impl PaginationRequest {
    /// Create a request that starts a fresh sequence
    pub fn new(org_id: OrgId, max_folders: i64) -> Self {
        Self {
            org_id,
            max_folders,
            token: String::new(),
        }
    }

    /// Continue a sequence with the token from the previous response
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }
}

/// One chunk of folders plus the token for the next chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResponse {
    /// The folders in this chunk
    pub folders: Vec<Folder>,

    /// Number of folders in this chunk
    pub num_folders: usize,

    /// Token for the next chunk, empty when the sequence is complete
    pub token: String,
}

impl PaginationResponse {
    /// Whether this chunk completed its sequence
    pub fn is_complete(&self) -> bool {
        self.token.is_empty()
    }
}
