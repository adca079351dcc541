//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the class booking
//! service, including API endpoints, business rules, data access, and infrastructure.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Scheduling and booking rules, authentication
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Access token cookie handling and role guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token keys, timezone)
//! - **Startup** (`startup`) - Database connection, migrations and admin bootstrap
//! - **Router** (`router`) - Axum route tables and their guards
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a route table
//! 2. **Middleware** resolves the access token to a user and checks its role
//! 3. **Controller** validates the body, converts DTOs to params, calls a service
//! 4. **Service** applies business rules and orchestrates repositories
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts domain models to DTOs inside the response envelope

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

#[cfg(test)]
mod test;
