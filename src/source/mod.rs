//! Folder sources
//!
//! A folder source is the backend being paginated: anything that can
//! produce the complete folder list for an organization. The pagination
//! layer snapshots whatever a source returns, so sources stay free of
//! cursor and token concerns.
//!
//! # Overview
//!
//! The source module provides:
//! - `FolderSource` - the async trait folder backends implement
//! - `StaticFolderSource` - an in-memory source for tests and demos
//! - `DEFAULT_ORG_ID` - the organization that owns the embedded sample data

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Folder, OrgId};

mod memory;

pub use memory::{StaticFolderSource, DEFAULT_ORG_ID};

/// A backend that can produce all folders for an organization
#[async_trait]
pub trait FolderSource: Send + Sync {
    /// Fetch every folder belonging to `org_id`, fully materialized.
    ///
    /// Implementations must be deterministic: two calls with no intervening
    /// writes return folders in the same order. An unknown organization is
    /// not an error, it simply owns no folders.
    async fn fetch_by_org_id(&self, org_id: OrgId) -> Result<Vec<Folder>>;
}
