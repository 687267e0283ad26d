//! Scouts Test Utils
//!
//! Shared testing utilities for the scouts backend. Tests build an in-memory SQLite
//! database whose schema is generated from the `entity` crate, then seed it through
//! the factories in [`factory`].
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_group() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_group_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let group = factory::create_group(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
