//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the scouts application: the REST
//! endpoints, business rules, data access, and operational endpoints. The backend uses
//! Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, validation and transactions
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request metrics
//! - **Extractors** (`extractor`) - JSON body and path extractors with `AppError` rejections
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, metrics)
//! - **Startup** (`startup`) - Tracing, database connection, migrations, shutdown signal
//! - **Router** (`router`) - Axum route configuration and OpenAPI document
//! - **Metrics** (`metrics`) - Prometheus registry and HTTP request series
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** records the request in the metrics registry
//! 3. **Controller** converts the DTO to params and calls the service
//! 4. **Service** validates input and orchestrates data operations
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extractor;
pub mod metrics;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
