//! Forward conversion: GeneratedValue → mysql_async::Value

use chrono::{Datelike, Timelike};
use loader_core::GeneratedValue;
use mysql_async::Value;

/// Convert a generated value into a MySQL statement parameter.
pub fn to_mysql_value(value: &GeneratedValue) -> Value {
    match value {
        GeneratedValue::Null => Value::NULL,

        // MySQL uses TINYINT(1)
        GeneratedValue::Bool(b) => Value::Int(if *b { 1 } else { 0 }),

        GeneratedValue::Int64(i) => Value::Int(*i),
        GeneratedValue::Float64(f) => Value::Double(*f),
        GeneratedValue::String(s) => Value::Bytes(s.clone().into_bytes()),
        GeneratedValue::Bytes(b) => Value::Bytes(b.clone()),

        // CHAR(36)
        GeneratedValue::Uuid(u) => Value::Bytes(u.to_string().into_bytes()),

        GeneratedValue::Date(d) => {
            Value::Date(d.year() as u16, d.month() as u8, d.day() as u8, 0, 0, 0, 0)
        }

        GeneratedValue::DateTime(dt) => Value::Date(
            dt.year() as u16,
            dt.month() as u8,
            dt.day() as u8,
            dt.hour() as u8,
            dt.minute() as u8,
            dt.second() as u8,
            dt.nanosecond() / 1000, // MySQL uses microseconds
        ),
    }
}
