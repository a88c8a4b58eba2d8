//! Generated values.
//!
//! `GeneratedValue` is what a generator produces and what a backend binds to
//! a statement placeholder. Each backend converts it into its driver's native
//! parameter type.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// One row of values, in the order of the insert statement's column list.
pub type Row = Vec<GeneratedValue>;

/// A single generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    /// SQL NULL
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// String value (also used for textual JSON, WKT, intervals and zone-less timestamps)
    String(String),

    /// Binary data
    Bytes(Vec<u8>),

    /// UUID value
    Uuid(Uuid),

    /// Calendar date
    Date(NaiveDate),

    /// Zoned instant
    DateTime(DateTime<Utc>),
}

impl GeneratedValue {
    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(GeneratedValue::Int64(7).as_i64(), Some(7));
        assert_eq!(GeneratedValue::Float64(1.5).as_f64(), Some(1.5));
        assert_eq!(GeneratedValue::String("x".to_string()).as_str(), Some("x"));
        assert_eq!(GeneratedValue::Bool(true).as_i64(), None);
        assert_eq!(GeneratedValue::Null.as_str(), None);
    }
}
