//! In-memory folder source
//!
//! Serves folders from a vector held in memory. Used by tests and demos,
//! and the simplest way to stand up a `FolderSource` without a backend.

use std::sync::LazyLock;

use async_trait::async_trait;
use uuid::uuid;

use crate::error::Result;
use crate::source::FolderSource;
use crate::types::{Folder, OrgId};

/// Organization that owns the embedded sample folders
pub const DEFAULT_ORG_ID: OrgId = uuid!("c1556e17-b7c0-45a3-a6ae-9546248fb17a");

/// Embedded sample folders, parsed once on first use
static SAMPLE_FOLDERS: LazyLock<Vec<Folder>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("sample_folders.json"))
        .expect("embedded sample_folders.json is valid")
});

/// An in-memory `FolderSource` backed by a plain vector
#[derive(Debug, Clone, Default)]
pub struct StaticFolderSource {
    folders: Vec<Folder>,
}

impl StaticFolderSource {
    /// Create a source from a list of folders.
    ///
    /// Folders are sorted by id up front so fetch order is deterministic
    /// regardless of insertion order.
    pub fn new(mut folders: Vec<Folder>) -> Self {
        folders.sort_by_key(|f| f.id);
        Self { folders }
    }

    /// Create a source from a JSON array of folders
    pub fn from_json(json: &str) -> Result<Self> {
        let folders: Vec<Folder> = serde_json::from_str(json)?;
        Ok(Self::new(folders))
    }

    /// Create a source pre-loaded with the embedded sample folders
    pub fn with_sample_data() -> Self {
        Self::new(SAMPLE_FOLDERS.clone())
    }

    /// Number of folders across all organizations
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether the source holds no folders at all
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

#[async_trait]
impl FolderSource for StaticFolderSource {
    async fn fetch_by_org_id(&self, org_id: OrgId) -> Result<Vec<Folder>> {
        Ok(self
            .folders
            .iter()
            .filter(|f| f.org_id == org_id)
            .cloned()
            .collect())
    }
}
