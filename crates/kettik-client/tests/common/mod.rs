/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for kettik-client tests

use std::sync::{Arc, Mutex};

use kettik_client::{ClientConfig, KettikApi, KettikClient, MemoryTokenStore, Navigator, Route};
use wiremock::MockServer;

#[allow(dead_code)]
pub const PHONE: &str = "+996700000000";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Domain API pointed at `server`, sharing `store`
pub fn api_for(server: &MockServer, store: &MemoryTokenStore) -> KettikApi {
    let client = KettikClient::with_config(ClientConfig::default().with_base_url(server.uri()))
        .expect("client init");
    KettikApi::new(client, Arc::new(store.clone()))
}

/// Navigator that remembers every route it was sent to
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<Route>>>,
}

#[allow(dead_code)]
impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        self.visited.lock().unwrap().push(route.clone());
    }
}
