// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Folio
//!
//! A minimal, Rust-native engine for token-based pagination of
//! organization folders. Stable chunked reads over an in-flight
//! snapshot, with opaque single-use continuation tokens.
//!
//! ## Features
//!
//! - **Opaque Tokens**: Random, single-use continuation tokens with no
//!   embedded position data
//! - **Snapshot Isolation**: Each sequence walks an immutable snapshot,
//!   unaffected by concurrent source changes
//! - **Exactly-Once Chunks**: A token is consumed atomically on use, so
//!   no chunk is ever delivered twice
//! - **Pluggable Sources**: Bring any folder backend by implementing one
//!   async trait
//! - **Chunk Streams**: Drive a whole sequence as a `futures` stream
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio::{FolderService, PaginationRequest, StaticFolderSource, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Serve the embedded sample folders
//!     let source = Arc::new(StaticFolderSource::with_sample_data());
//!     let service = FolderService::new(source);
//!
//!     // First page: empty token starts a fresh sequence
//!     let mut request = PaginationRequest::new(folio::DEFAULT_ORG_ID, 3);
//!     loop {
//!         let response = service.paginate(Some(&request)).await?;
//!         for folder in &response.folders {
//!             println!("{}", folder.name);
//!         }
//!         if response.is_complete() {
//!             break;
//!         }
//!         request = request.with_token(response.token);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      FolderService                         │
//! │  get_all_folders(req) → folders                            │
//! │  paginate(req) → chunk + next token                        │
//! │  chunk_stream(org, max) → Stream<chunk>                    │
//! └────────────────────────────────────────────────────────────┘
//!            │                  │                  │
//! ┌──────────┴─────┐  ┌─────────┴────────┐  ┌──────┴──────────┐
//! │  FolderSource  │  │   CursorStore    │  │   next_chunk    │
//! ├────────────────┤  ├──────────────────┤  ├─────────────────┤
//! │ fetch by org   │  │ token → cursor   │  │ pure extractor  │
//! │ (async trait)  │  │ single-use take  │  │ slice + advance │
//! └────────────────┘  └──────────────────┘  └─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for folio
pub mod error;

/// Common types and type aliases
pub mod types;

/// Folder sources (the data backends being paginated)
pub mod source;

/// Cursors, chunk extraction, and the token store
pub mod pagination;

/// The pagination coordinator
pub mod service;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use pagination::{next_chunk, Cursor, CursorStore, StoreConfig};
pub use service::{
    ChunkStream, FetchFolderRequest, FetchFolderResponse, FolderService, PaginationRequest,
    PaginationResponse,
};
pub use source::{FolderSource, StaticFolderSource, DEFAULT_ORG_ID};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
