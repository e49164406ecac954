//! The pagination coordinator
//!
//! `FolderService` wires a folder source to the cursor machinery: it
//! snapshots the source when a sequence starts, hands out chunks, and
//! parks the advanced cursor in the token store between requests.
//!
//! # Overview
//!
//! The service module provides:
//! - `FolderService` - the coordinator itself
//! - `FetchFolderRequest` / `FetchFolderResponse` - unpaginated fetch
//! - `PaginationRequest` / `PaginationResponse` - one chunk per call
//! - `ChunkStream` - a whole sequence driven as a stream

use std::pin::Pin;
use std::sync::Arc;

use futures::Stream;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::pagination::{generate_token, next_chunk, Cursor, CursorStore};
use crate::source::FolderSource;
use crate::types::{Folder, OptionStringExt, OrgId};

mod types;

pub use types::{FetchFolderRequest, FetchFolderResponse, PaginationRequest, PaginationResponse};

/// Type alias for the stream returned by `chunk_stream()`
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<PaginationResponse>> + Send>>;

// ============================================================================
// Folder service
// ============================================================================

/// Coordinates folder fetching, chunk extraction, and token storage.
///
/// The service is cheap to clone and every clone shares the same token
/// store, so one instance can serve any number of concurrent sequences.
/// No lock is held across a source fetch.
#[derive(Clone)]
pub struct FolderService {
    source: Arc<dyn FolderSource>,
    store: CursorStore,
}

impl FolderService {
    /// Create a service over `source` with a default token store
    pub fn new(source: Arc<dyn FolderSource>) -> Self {
        Self {
            source,
            store: CursorStore::new(),
        }
    }

    /// Create a service with a custom-configured token store
    pub fn with_store(source: Arc<dyn FolderSource>, store: CursorStore) -> Self {
        Self { source, store }
    }

    /// The token store backing this service
    pub fn store(&self) -> &CursorStore {
        &self.store
    }

    /// Fetch the complete folder list for the requested organization.
    ///
    /// No pagination machinery is involved: nothing is snapshotted and no
    /// token is issued.
    pub async fn get_all_folders(
        &self,
        request: Option<&FetchFolderRequest>,
    ) -> Result<FetchFolderResponse> {
        let request = request.ok_or(Error::NilRequest)?;

        let folders = self.fetch_snapshot(request.org_id).await?;
        debug!(
            "Fetched {} folders for org {}",
            folders.len(),
            request.org_id
        );

        Ok(FetchFolderResponse { folders })
    }

    /// Serve one chunk of the organization's folders.
    ///
    /// An empty `token` starts a fresh sequence by snapshotting the source;
    /// a non-empty token resumes a parked one. The organization only
    /// matters when starting: a resumed request walks the snapshot captured
    /// at the start of its sequence.
    ///
    /// The response carries the token for the next chunk, or the empty
    /// token when this chunk completed the sequence.
    pub async fn paginate(
        &self,
        request: Option<&PaginationRequest>,
    ) -> Result<PaginationResponse> {
        let request = request.ok_or(Error::NilRequest)?;

        // Checked before any store access so a rejected request never
        // consumes a live token
        if request.max_folders <= 0 {
            return Err(Error::invalid_argument(format!(
                "max_folders must be positive, got {}",
                request.max_folders
            )));
        }
        let max = usize::try_from(request.max_folders).unwrap_or(usize::MAX);

        let cursor = match request.token.clone().none_if_empty() {
            None => {
                debug!("Starting folder pagination for org {}", request.org_id);
                let folders = self.fetch_snapshot(request.org_id).await?;
                Cursor::new(folders)
            }
            Some(token) => {
                let Some(cursor) = self.store.take(&token).await else {
                    warn!("Rejecting unknown or already used token {}", token);
                    return Err(Error::invalid_token(token));
                };
                cursor
            }
        };

        let (folders, cursor) = next_chunk(cursor, max)?;
        let token = self.save_cursor(cursor).await?;

        Ok(PaginationResponse {
            num_folders: folders.len(),
            folders,
            token,
        })
    }

    /// Drive a whole pagination sequence as a stream of chunks.
    ///
    /// Each item is one `PaginationResponse`; the stream ends after the
    /// chunk that completes the sequence and never yields an empty chunk.
    /// Dropping the stream mid-sequence abandons the parked cursor, same
    /// as a caller that stops sending its token back.
    pub fn chunk_stream(&self, org_id: OrgId, max_folders: i64) -> ChunkStream {
        enum Walk {
            Start,
            Active(String),
            Done,
        }

        let service = self.clone();
        let stream = futures::stream::try_unfold(Walk::Start, move |walk| {
            let service = service.clone();
            async move {
                let token = match walk {
                    Walk::Start => String::new(),
                    Walk::Active(token) => token,
                    Walk::Done => return Ok(None),
                };

                let request = PaginationRequest::new(org_id, max_folders).with_token(token);
                let response = service.paginate(Some(&request)).await?;
                if response.folders.is_empty() {
                    return Ok(None);
                }

                let next = if response.is_complete() {
                    Walk::Done
                } else {
                    Walk::Active(response.token.clone())
                };
                Ok(Some((response, next)))
            }
        });

        Box::pin(stream)
    }

    /// Fetch from the source, reporting any failure as a source fetch error
    async fn fetch_snapshot(&self, org_id: OrgId) -> Result<Vec<Folder>> {
        self.source
            .fetch_by_org_id(org_id)
            .await
            .map_err(|e| match e {
                Error::SourceFetch { .. } => e,
                other => Error::source_fetch(other.to_string()),
            })
    }

    /// Park `cursor` under a fresh token, or complete the sequence.
    ///
    /// Returns the empty token when the cursor is exhausted; nothing is
    /// stored in that case.
    async fn save_cursor(&self, cursor: Cursor) -> Result<String> {
        if cursor.is_exhausted() {
            return Ok(String::new());
        }

        let token = generate_token();
        self.store.put(token.clone(), cursor).await?;
        debug!("Parked cursor under token {}", token);
        Ok(token)
    }
}

#[cfg(test)]
mod tests;
