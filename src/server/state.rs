//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token verifier for identity provider bearer tokens
//! - Clock used for reservation cutoffs

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{service::auth::TokenVerifier, util::clock::Clock};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenVerifier` keeps its keys behind an `Arc`
/// - `Arc<dyn Clock>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifies bearer tokens and extracts the caller's roles.
    pub token_verifier: TokenVerifier,

    /// Current club-local time. Tests replace it with a fixed clock.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_verifier` - Verifier configured with the identity provider's keys
    /// - `clock` - Source of the current time
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        token_verifier: TokenVerifier,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            db,
            token_verifier,
            clock,
        }
    }
}
