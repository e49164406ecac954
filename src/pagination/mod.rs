//! Pagination primitives
//!
//! Everything between a fetched folder list and a chunked response lives
//! here: immutable snapshot cursors, the pure chunk extractor, opaque
//! token generation, and the token store that makes tokens single-use.
//!
//! # Overview
//!
//! The pagination module provides:
//! - `Cursor` - a read position inside an immutable folder snapshot
//! - `next_chunk` - pure chunk extraction, no storage side effects
//! - `CursorStore` - token to cursor map with take-and-remove semantics
//! - `StoreConfig` - opt-in TTL expiry and capacity eviction
//! - `generate_token` - opaque continuation token generation

mod cursor;
mod store;
mod token;

pub use cursor::{next_chunk, Cursor};
pub use store::{CursorStore, StoreConfig};
pub use token::generate_token;
