#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use hashlink::config::Config;
use hashlink::domain::repositories::{KeyValueStore, StorageError, StorageResult};
use hashlink::infrastructure::persistence::NullStore;
use hashlink::routes::router;
use hashlink::server::build_state;
use hashlink::state::AppState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://s.example.com";

/// Backend keeping entries in a map, with a switch to simulate an outage.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    down: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn check(&self) -> StorageResult<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(StorageError::Connection("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check()?;
        self.insert(key, value);
        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.check()?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn health_check(&self) -> bool {
        !self.down.load(Ordering::SeqCst)
    }
}

pub fn test_config() -> Config {
    Config {
        base_url: Some(BASE_URL.to_string()),
        ..Config::default()
    }
}

pub fn create_test_state() -> AppState {
    build_state(&test_config(), Arc::new(NullStore::new()))
}

pub fn create_state_with_backend(backend: Arc<dyn KeyValueStore>) -> AppState {
    build_state(&test_config(), backend)
}

pub fn create_app(state: AppState) -> Router {
    router(state)
}

pub fn create_server(state: AppState) -> TestServer {
    TestServer::new(create_app(state)).unwrap()
}

/// Strips [`BASE_URL`] from a returned short URL.
pub fn code_of(short_url: &str) -> String {
    short_url
        .strip_prefix(BASE_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap()
        .to_string()
}
