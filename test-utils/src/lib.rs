//! Camp Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the camp
//! API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting campers, activities and signups.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_camper_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_camp_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let camper = factory::create_camper(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
