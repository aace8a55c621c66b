//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the padel club, including
//! API endpoints, the booking engine, data access, and infrastructure services. The backend
//! uses Axum as the web framework and SeaORM for database operations. Identities come from
//! an external OpenID Connect provider as bearer tokens.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Availability, reservation and cancellation rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token verifier, clock)
//! - **Startup** (`startup`) - Initialization of tracing, database, and token verification keys
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Calendar helpers and the clock abstraction
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** authenticates via `AuthGuard`, converts DTOs to params, calls service
//! 3. **Service** executes business rules, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
