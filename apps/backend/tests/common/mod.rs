//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up an in-memory server
//! - Helper functions for creating test data

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use lingolens_backend::config::ServerConfig;
use lingolens_backend::{router, AppState};

/// Test context holding the application state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context with default configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a context with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let state = AppState::new(&config);
        let app = router(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
