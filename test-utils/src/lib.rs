//! Padel Club Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the padel club
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **TestError**: Error types that can occur during test setup
//! - **TokenFactory**: Signed bearer tokens carrying identity provider style role claims
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_court_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_court_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod token;
