//! Tests for the folder service

use super::*;
use crate::pagination::StoreConfig;
use crate::source::StaticFolderSource;
use async_trait::async_trait;
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use std::time::Duration;
use test_case::test_case;
use uuid::Uuid;

fn test_org() -> OrgId {
    Uuid::from_u128(0x0a11_ce)
}

fn folder(n: u128, org: OrgId) -> Folder {
    Folder::new(Uuid::from_u128(n + 1), format!("folder-{n}"), org)
}

fn service_of(count: u128) -> FolderService {
    let folders = (0..count).map(|n| folder(n, test_org())).collect();
    FolderService::new(Arc::new(StaticFolderSource::new(folders)))
}

/// A source whose backend is down
struct FailingSource;

#[async_trait]
impl FolderSource for FailingSource {
    async fn fetch_by_org_id(&self, _org_id: OrgId) -> Result<Vec<Folder>> {
        Err(Error::source_fetch("backend unavailable"))
    }
}

/// A source that fails through the anyhow escape hatch
struct AnyhowSource;

#[async_trait]
impl FolderSource for AnyhowSource {
    async fn fetch_by_org_id(&self, _org_id: OrgId) -> Result<Vec<Folder>> {
        Err(anyhow::anyhow!("index out of sync").into())
    }
}

/// A source whose contents can change between fetches
struct SwappableSource {
    folders: tokio::sync::RwLock<Vec<Folder>>,
}

impl SwappableSource {
    fn new(folders: Vec<Folder>) -> Self {
        Self {
            folders: tokio::sync::RwLock::new(folders),
        }
    }

    async fn replace(&self, folders: Vec<Folder>) {
        *self.folders.write().await = folders;
    }
}

#[async_trait]
impl FolderSource for SwappableSource {
    async fn fetch_by_org_id(&self, org_id: OrgId) -> Result<Vec<Folder>> {
        Ok(self
            .folders
            .read()
            .await
            .iter()
            .filter(|f| f.org_id == org_id)
            .cloned()
            .collect())
    }
}

// ============================================================================
// get_all_folders
// ============================================================================

#[tokio::test]
async fn test_get_all_folders() {
    let service = service_of(4);

    let response = service
        .get_all_folders(Some(&FetchFolderRequest::new(test_org())))
        .await
        .unwrap();

    assert_eq!(response.folders.len(), 4);
    assert!(response.folders.iter().all(|f| f.org_id == test_org()));
}

#[tokio::test]
async fn test_get_all_folders_unknown_org_is_empty() {
    let service = service_of(4);

    let response = service
        .get_all_folders(Some(&FetchFolderRequest::new(Uuid::nil())))
        .await
        .unwrap();

    assert!(response.folders.is_empty());
}

#[tokio::test]
async fn test_nil_requests_rejected() {
    let service = service_of(1);

    let err = service.get_all_folders(None).await.unwrap_err();
    assert!(matches!(err, Error::NilRequest));

    let err = service.paginate(None).await.unwrap_err();
    assert!(matches!(err, Error::NilRequest));
}

// ============================================================================
// paginate
// ============================================================================

#[tokio::test]
async fn test_paginate_seven_folders_in_threes() {
    let service = service_of(7);
    let org = test_org();

    let first = service
        .paginate(Some(&PaginationRequest::new(org, 3)))
        .await
        .unwrap();
    assert_eq!(first.num_folders, 3);
    assert_eq!(first.folders.len(), 3);
    assert!(!first.is_complete());

    let second = service
        .paginate(Some(
            &PaginationRequest::new(org, 3).with_token(first.token.clone()),
        ))
        .await
        .unwrap();
    assert_eq!(second.num_folders, 3);
    assert!(!second.is_complete());
    assert_ne!(first.token, second.token);

    let third = service
        .paginate(Some(
            &PaginationRequest::new(org, 3).with_token(second.token.clone()),
        ))
        .await
        .unwrap();
    assert_eq!(third.num_folders, 1);
    assert!(third.is_complete());

    let names: Vec<&str> = first
        .folders
        .iter()
        .chain(&second.folders)
        .chain(&third.folders)
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "folder-0", "folder-1", "folder-2", "folder-3", "folder-4", "folder-5", "folder-6"
        ]
    );

    assert!(service.store().is_empty().await);
}

#[tokio::test]
async fn test_paginate_empty_org() {
    let service = service_of(0);

    let response = service
        .paginate(Some(&PaginationRequest::new(test_org(), 5)))
        .await
        .unwrap();

    assert!(response.folders.is_empty());
    assert_eq!(response.num_folders, 0);
    assert!(response.is_complete());
    assert!(service.store().is_empty().await);
}

#[test_case(7 ; "max equals total")]
#[test_case(50 ; "max beyond total")]
#[tokio::test]
async fn test_single_chunk_completes_immediately(max: i64) {
    let service = service_of(7);

    let response = service
        .paginate(Some(&PaginationRequest::new(test_org(), max)))
        .await
        .unwrap();

    assert_eq!(response.num_folders, 7);
    assert!(response.is_complete());
    assert!(service.store().is_empty().await);
}

#[tokio::test]
async fn test_token_is_single_use() {
    let service = service_of(5);
    let org = test_org();

    let first = service
        .paginate(Some(&PaginationRequest::new(org, 2)))
        .await
        .unwrap();
    let replay = PaginationRequest::new(org, 2).with_token(first.token.clone());

    service.paginate(Some(&replay)).await.unwrap();

    let err = service.paginate(Some(&replay)).await.unwrap_err();
    assert!(matches!(err, Error::InvalidToken { .. }));
}

#[tokio::test]
async fn test_unknown_token_rejected() {
    let service = service_of(3);

    let err = service
        .paginate(Some(
            &PaginationRequest::new(test_org(), 2).with_token("not-a-real-token"),
        ))
        .await
        .unwrap_err();

    match err {
        Error::InvalidToken { token } => assert_eq!(token, "not-a-real-token"),
        other => panic!("expected InvalidToken, got {other:?}"),
    }
}

#[test_case(0 ; "zero")]
#[test_case(-3 ; "negative")]
#[tokio::test]
async fn test_non_positive_max_rejected(max: i64) {
    let service = service_of(5);

    let err = service
        .paginate(Some(&PaginationRequest::new(test_org(), max)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(service.store().is_empty().await);
}

#[tokio::test]
async fn test_rejected_request_does_not_consume_token() {
    let service = service_of(5);
    let org = test_org();

    let first = service
        .paginate(Some(&PaginationRequest::new(org, 2)))
        .await
        .unwrap();
    let token = first.token.clone();

    let err = service
        .paginate(Some(&PaginationRequest::new(org, 0).with_token(token.clone())))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    // The parked cursor survived and its token still works
    assert_eq!(service.store().len().await, 1);
    let second = service
        .paginate(Some(&PaginationRequest::new(org, 2).with_token(token)))
        .await
        .unwrap();
    assert_eq!(second.folders[0].name, "folder-2");
}

#[tokio::test]
async fn test_store_tracks_one_entry_per_live_sequence() {
    let service = service_of(7);
    let org = test_org();

    assert_eq!(service.store().len().await, 0);

    let first = service
        .paginate(Some(&PaginationRequest::new(org, 3)))
        .await
        .unwrap();
    assert_eq!(service.store().len().await, 1);

    let second = service
        .paginate(Some(&PaginationRequest::new(org, 3).with_token(first.token)))
        .await
        .unwrap();
    assert_eq!(service.store().len().await, 1);

    service
        .paginate(Some(&PaginationRequest::new(org, 3).with_token(second.token)))
        .await
        .unwrap();
    assert_eq!(service.store().len().await, 0);
}

#[tokio::test]
async fn test_sequence_is_isolated_from_source_changes() {
    let org = test_org();
    let source = Arc::new(SwappableSource::new(
        (0..6).map(|n| folder(n, org)).collect(),
    ));
    let service = FolderService::new(source.clone());

    let first = service
        .paginate(Some(&PaginationRequest::new(org, 2)))
        .await
        .unwrap();
    assert_eq!(first.num_folders, 2);

    // Upstream changes mid-sequence must not leak into parked cursors
    source.replace(vec![folder(99, org)]).await;

    let second = service
        .paginate(Some(
            &PaginationRequest::new(org, 2).with_token(first.token.clone()),
        ))
        .await
        .unwrap();
    let names: Vec<&str> = second.folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["folder-2", "folder-3"]);

    // A fresh sequence sees the new upstream state
    let fresh = service
        .paginate(Some(&PaginationRequest::new(org, 10)))
        .await
        .unwrap();
    assert_eq!(fresh.num_folders, 1);
    assert_eq!(fresh.folders[0].name, "folder-99");
}

#[tokio::test]
async fn test_source_failure_surfaces_and_stores_nothing() {
    let service = FolderService::new(Arc::new(FailingSource));

    let err = service
        .paginate(Some(&PaginationRequest::new(test_org(), 3)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SourceFetch { .. }));
    assert!(service.store().is_empty().await);

    let err = service
        .get_all_folders(Some(&FetchFolderRequest::new(test_org())))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SourceFetch { .. }));
}

#[tokio::test]
async fn test_anyhow_source_error_reported_as_source_fetch() {
    let service = FolderService::new(Arc::new(AnyhowSource));

    let err = service
        .get_all_folders(Some(&FetchFolderRequest::new(test_org())))
        .await
        .unwrap_err();

    match err {
        Error::SourceFetch { message } => assert!(message.contains("index out of sync")),
        other => panic!("expected SourceFetch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let folders = (0..5).map(|n| folder(n, test_org())).collect();
    let service = FolderService::with_store(
        Arc::new(StaticFolderSource::new(folders)),
        CursorStore::with_config(StoreConfig::new().with_ttl(Duration::ZERO)),
    );

    let first = service
        .paginate(Some(&PaginationRequest::new(test_org(), 2)))
        .await
        .unwrap();
    assert!(!first.is_complete());

    let err = service
        .paginate(Some(&PaginationRequest::new(test_org(), 2).with_token(first.token)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidToken { .. }));
}

// ============================================================================
// chunk_stream
// ============================================================================

#[tokio::test]
async fn test_chunk_stream_walks_whole_sequence() {
    let service = service_of(7);

    let chunks: Vec<PaginationResponse> = service
        .chunk_stream(test_org(), 3)
        .try_collect()
        .await
        .unwrap();

    let sizes: Vec<usize> = chunks.iter().map(|c| c.num_folders).collect();
    assert_eq!(sizes, vec![3, 3, 1]);
    assert!(chunks.last().unwrap().is_complete());

    let names: Vec<&str> = chunks
        .iter()
        .flat_map(|c| c.folders.iter().map(|f| f.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            "folder-0", "folder-1", "folder-2", "folder-3", "folder-4", "folder-5", "folder-6"
        ]
    );

    assert!(service.store().is_empty().await);
}

#[tokio::test]
async fn test_chunk_stream_empty_org_yields_nothing() {
    let service = service_of(0);

    let chunks: Vec<PaginationResponse> = service
        .chunk_stream(test_org(), 3)
        .try_collect()
        .await
        .unwrap();

    assert!(chunks.is_empty());
}

#[tokio::test]
async fn test_chunk_stream_surfaces_source_failure() {
    let service = FolderService::new(Arc::new(FailingSource));

    let result: Result<Vec<PaginationResponse>> =
        service.chunk_stream(test_org(), 3).try_collect().await;

    assert!(matches!(result, Err(Error::SourceFetch { .. })));
}
