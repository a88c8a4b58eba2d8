//! Value generators for random-data-loader.
//!
//! This crate turns a [`TableStructure`](loader_core::TableStructure) into a
//! [`GeneratorRegistry`]: one [`GeneratorConfig`] per eligible column, chosen
//! from the column's declared type by the selection policy in [`selection`].
//! Generating a value is a pure function of the configuration and an RNG.
//!
//! # Architecture
//!
//! ```text
//! TableStructure
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │  selection policy    │  skip auto-increment PKs, FK ranges,
//! │  (type_parse)        │  dispatch on the declared base type
//! └──────────┬───────────┘
//!            │
//!            ▼
//!   GeneratorRegistry { column -> GeneratorConfig }
//!            │
//!            ▼
//!   generate_value(config, rng) -> GeneratedValue
//! ```
//!
//! # Example
//!
//! ```rust
//! use loader_core::{Column, Dialect, Index, TableStructure};
//! use loader_generator::{default_generators, generate_value};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let table = TableStructure::new("users")
//!     .with_column(Column::new("id", "int"))
//!     .with_column(Column::new("email", "varchar(40)"))
//!     .with_index(Index::primary("PRIMARY", &["id"]));
//!
//! let registry = default_generators(&table, Dialect::MySql);
//! assert!(registry.get("id").is_none());
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let email = generate_value(registry.get("email").unwrap(), &mut rng);
//! assert_eq!(email.as_str().map(str::len), Some(40));
//! ```
//!
//! # Generators
//!
//! - `string` - Random alphanumeric string of fixed length
//! - `int_range` - Random integer in an inclusive range
//! - `float_range` - Random float truncated to a number of decimals
//! - `bool` - Uniform boolean
//! - `date_range` - Random calendar date
//! - `timestamp_range` - Random timestamp, zoned or formatted
//! - `one_of` - Random selection from a list
//! - `json` - Random nested JSON object
//! - `uuid_v4` - Random UUID v4
//! - `ip_address` - Random IPv4 or IPv6 address
//! - `bytes` - Random binary data
//! - `bit_string` - Random string of `0` and `1`
//! - `geometry` - Random WKT point, linestring or polygon
//! - `money` - Random amount with two decimals
//! - `interval` - Random `H hours M minutes S seconds` span
//! - `static` - Fixed value
//! - `null` - SQL NULL

pub mod config;
pub mod generators;
pub mod overrides;
pub mod registry;
pub mod selection;
pub mod type_parse;

// Re-exports for convenience
pub use config::{GeneratorConfig, GeometryShape};
pub use generators::generate_value;
pub use overrides::{GeneratorOverrides, OverrideError};
pub use registry::GeneratorRegistry;
pub use selection::{apply_default_generators, default_generators, select_generator};
