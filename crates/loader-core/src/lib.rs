//! Core types for random-data-loader.
//!
//! This crate provides the foundational types shared by every other crate in
//! the workspace:
//!
//! - [`TableStructure`] - Parsed description of a table's columns, indexes and foreign keys
//! - [`GeneratedValue`] - A single synthetic value ready to be bound to a placeholder
//! - [`Dialect`] - Which database engine governs placeholder syntax
//! - [`InsertStatement`] - The parameterized INSERT built once per load
//! - [`Database`] / [`Session`] - The seam each database backend implements
//!
//! # Architecture
//!
//! ```text
//! loader-core (this crate)
//!    │
//!    ├─── loader-generator   (GeneratorConfig → GeneratedValue)
//!    │
//!    ├─── loader-mysql       (implements Database for MySQL)
//!    └─── loader-postgresql  (implements Database for PostgreSQL)
//! ```

pub mod dialect;
pub mod schema;
pub mod session;
pub mod values;

pub use dialect::{Dialect, InsertStatement, UnknownDialect};
pub use schema::{Column, ForeignKey, Index, TableStructure};
pub use session::{Database, Session, SessionError};
pub use values::{GeneratedValue, Row};
