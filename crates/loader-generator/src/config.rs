//! Generator configuration.
//!
//! A `GeneratorConfig` is the whole state of a generator: calling
//! [`generate_value`](crate::generate_value) with the same configuration and
//! a fresh RNG draw is all there is to producing a value.

use chrono::{NaiveDate, NaiveDateTime};
use loader_core::Dialect;
use serde::{Deserialize, Serialize};

/// Shape emitted by the geometry generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryShape {
    /// `POINT(x y)`
    Point,
    /// `LINESTRING(x y, ...)` with 2 to 4 points
    LineString,
    /// `POLYGON((x y, ...))` closed ring with 4 to 6 points
    Polygon,
}

/// Configuration of a column's value generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Random alphanumeric string
    String {
        /// Exact number of characters
        length: usize,
    },

    /// Random integers in a range
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Random floats in a range, truncated to `decimals` places
    FloatRange {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (exclusive)
        max: f64,
        /// Decimal places kept
        #[serde(default = "default_decimals")]
        decimals: u32,
    },

    /// Uniform boolean
    Bool,

    /// Random calendar date
    DateRange {
        /// First date (inclusive)
        start: NaiveDate,
        /// Last date (inclusive)
        end: NaiveDate,
    },

    /// Random timestamp with a sub-second part
    TimestampRange {
        /// Range start (inclusive)
        start: NaiveDateTime,
        /// Range end (exclusive, to the second)
        end: NaiveDateTime,
        /// Produce a zoned instant instead of a formatted string
        #[serde(default)]
        with_time_zone: bool,
    },

    /// Random selection from a list
    OneOf {
        /// Candidate values, in declared order
        values: Vec<String>,
    },

    /// Random nested JSON object, as text
    Json {
        /// Maximum fields per object (at least one is emitted)
        max_fields: usize,
        /// Maximum nesting depth
        max_depth: usize,
        /// Maximum items per array (at least one is emitted)
        max_array_items: usize,
        /// Target dialect. Accepted for future use, does not change the output.
        #[serde(default = "default_dialect")]
        dialect: Dialect,
    },

    /// Random UUID v4
    UuidV4,

    /// Random IP address
    IpAddress {
        /// Emit IPv6 instead of IPv4
        #[serde(default)]
        ipv6: bool,
    },

    /// Random binary data
    Bytes {
        /// Number of bytes
        length: usize,
    },

    /// Random string of `0` and `1`
    BitString {
        /// Number of bits
        length: usize,
    },

    /// Random WKT geometry
    Geometry {
        /// Shape to emit
        shape: GeometryShape,
    },

    /// Random monetary amount formatted with two decimals
    Money {
        /// Minimum amount (inclusive)
        min: f64,
        /// Maximum amount (exclusive)
        max: f64,
    },

    /// Random `<H> hours <M> minutes <S> seconds` span
    Interval {
        /// Minimum hours (inclusive)
        min_hours: u32,
        /// Maximum hours (inclusive)
        max_hours: u32,
    },

    /// Fixed value
    Static {
        /// The value, as written in the override file
        value: serde_yaml::Value,
    },

    /// SQL NULL
    Null,
}

fn default_decimals() -> u32 {
    2
}

fn default_dialect() -> Dialect {
    Dialect::MySql
}

impl GeneratorConfig {
    /// Name of the generator kind, matching its serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            GeneratorConfig::String { .. } => "string",
            GeneratorConfig::IntRange { .. } => "int_range",
            GeneratorConfig::FloatRange { .. } => "float_range",
            GeneratorConfig::Bool => "bool",
            GeneratorConfig::DateRange { .. } => "date_range",
            GeneratorConfig::TimestampRange { .. } => "timestamp_range",
            GeneratorConfig::OneOf { .. } => "one_of",
            GeneratorConfig::Json { .. } => "json",
            GeneratorConfig::UuidV4 => "uuid_v4",
            GeneratorConfig::IpAddress { .. } => "ip_address",
            GeneratorConfig::Bytes { .. } => "bytes",
            GeneratorConfig::BitString { .. } => "bit_string",
            GeneratorConfig::Geometry { .. } => "geometry",
            GeneratorConfig::Money { .. } => "money",
            GeneratorConfig::Interval { .. } => "interval",
            GeneratorConfig::Static { .. } => "static",
            GeneratorConfig::Null => "null",
        }
    }
}
