//! # Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! PostgreSQL database that owns all room and guest state.
//!
//! ## Architectural Principles
//!
//! - **Adapter layer:** This crate encapsulates all database-specific
//!   logic. It provides a clean, abstract API to the rest of the
//!   application, hiding the underlying SQL and schema details.
//! - **Store-owned consistency:** Key uniqueness and referential
//!   integrity are enforced by the store's constraints, not in process.
//!   Constraint violations come back classified (`DuplicateKey`,
//!   `ForeignKeyViolation`) rather than as opaque driver errors.
//! - **Asynchronous & Pooled:** All operations are asynchronous and share
//!   a connection pool (`PgPool`); each request holds one connection for
//!   its duration.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `run_migrations`: A utility to apply database migrations, ensuring the
//!   schema (tables, reporting routines, views) is up-to-date.
//! - `DbRepository`: The main struct that holds the connection pool and
//!   provides all the high-level data access methods (e.g., `list_guests`).
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::DbRepository;
