#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use shortlink::api::routes::public_routes;
use shortlink::domain::entities::{Mapping, NewMapping};
use shortlink::domain::repositories::MappingRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::MemoryMappingRepository;
use shortlink::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080/";

pub fn create_test_state(repository: Arc<dyn MappingRepository>) -> AppState {
    AppState::from_repository(repository, BASE_URL, 6)
}

pub fn memory_repository() -> Arc<MemoryMappingRepository> {
    Arc::new(MemoryMappingRepository::new())
}

pub fn create_test_app(repository: Arc<dyn MappingRepository>) -> Router {
    public_routes().with_state(create_test_state(repository))
}

pub async fn create_test_mapping(repo: &MemoryMappingRepository, code: &str, url: &str) {
    assert!(repo.create(NewMapping::new(code, url)).await.unwrap());
}

fn storage_down() -> AppError {
    AppError::internal("Database error", json!({}))
}

/// Repository whose every operation fails as if storage were unreachable.
pub struct UnavailableRepository;

#[async_trait]
impl MappingRepository for UnavailableRepository {
    async fn create(&self, _new_mapping: NewMapping) -> Result<bool, AppError> {
        Err(storage_down())
    }

    async fn find_url(&self, _code: &str) -> Result<Option<String>, AppError> {
        Err(storage_down())
    }

    async fn increment_clicks(&self, _code: &str) -> Result<bool, AppError> {
        Err(storage_down())
    }

    async fn get_clicks(&self, _code: &str) -> Result<Option<i64>, AppError> {
        Err(storage_down())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Mapping>, AppError> {
        Err(storage_down())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(storage_down())
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        Err(storage_down())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(storage_down())
    }
}

/// Repository that serves lookups but fails to count clicks.
pub struct BrokenCounterRepository {
    pub inner: MemoryMappingRepository,
    pub increment_attempts: AtomicUsize,
}

impl BrokenCounterRepository {
    pub fn new() -> Self {
        Self {
            inner: MemoryMappingRepository::new(),
            increment_attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.increment_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MappingRepository for BrokenCounterRepository {
    async fn create(&self, new_mapping: NewMapping) -> Result<bool, AppError> {
        self.inner.create(new_mapping).await
    }

    async fn find_url(&self, code: &str) -> Result<Option<String>, AppError> {
        self.inner.find_url(code).await
    }

    async fn increment_clicks(&self, _code: &str) -> Result<bool, AppError> {
        self.increment_attempts.fetch_add(1, Ordering::SeqCst);
        Err(storage_down())
    }

    async fn get_clicks(&self, code: &str) -> Result<Option<i64>, AppError> {
        self.inner.get_clicks(code).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        self.inner.find_by_code(code).await
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.inner.count().await
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        self.inner.total_clicks().await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.inner.ping().await
    }
}
