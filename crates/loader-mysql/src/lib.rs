//! MySQL backend for random-data-loader.
//!
//! [`MySqlDatabase`] implements [`loader_core::Database`] on a `mysql_async`
//! connection pool. Tables are described from `information_schema` using the
//! full `COLUMN_TYPE` so sizes, `unsigned` and enum lists survive. Sessions
//! check a connection out of the pool and bind native `mysql_async::Value`s.

pub mod error;
pub mod forward;
pub mod schema;
pub mod session;

pub use error::MySqlLoaderError;
pub use forward::to_mysql_value;
pub use session::{MySqlDatabase, MySqlSession};
