#![allow(dead_code)]

use axum_test::TestServer;
use link_shortener::infrastructure::persistence::InMemoryLinkStore;
use link_shortener::routes;
use link_shortener::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://s.example.com";

pub fn create_test_state() -> AppState {
    create_test_state_with(Arc::new(InMemoryLinkStore::new()))
}

pub fn create_test_state_with(store: Arc<InMemoryLinkStore>) -> AppState {
    AppState::new(store, 6, 5, BASE_URL).unwrap()
}

pub fn create_test_server() -> TestServer {
    TestServer::new(routes::router(create_test_state())).unwrap()
}

/// Server plus a handle on the store behind it, for asserting on stored records.
pub fn create_test_server_with_store() -> (TestServer, Arc<InMemoryLinkStore>) {
    let store = Arc::new(InMemoryLinkStore::new());
    let server = TestServer::new(routes::router(create_test_state_with(store.clone()))).unwrap();
    (server, store)
}
