//! PostgreSQL backend for random-data-loader.
//!
//! [`PostgresDatabase`] implements [`loader_core::Database`] with
//! `tokio-postgres`. Each session opens its own client from the connection
//! string. Tables are described from `pg_catalog`, and `format_type` output
//! is normalized so the generator selection sees names such as `varchar(n)`.
//!
//! Parameters are bound in text format ([`TextParam`]): the server parses
//! each value into the column's type, so a generated integer binds to an
//! `int2`, `int4` or `numeric` column alike.

pub mod error;
pub mod forward;
pub mod schema;
pub mod session;

pub use error::PostgresLoaderError;
pub use forward::TextParam;
pub use schema::{column_type, normalize_type};
pub use session::{PostgresDatabase, PostgresSession};
