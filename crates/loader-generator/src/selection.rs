//! Default generator selection.
//!
//! Maps each column's declared type, together with its key role in the
//! table, to a [`GeneratorConfig`]. Rules are evaluated in order:
//!
//! 1. A single-column integer primary key is skipped (auto-increment).
//! 2. A foreign key column gets an integer in `1..=1000` or an 8 character
//!    string. A foreign key of any other type is skipped.
//! 3. Everything else dispatches on the base type of the declared type.

use crate::config::{GeneratorConfig, GeometryShape};
use crate::registry::GeneratorRegistry;
use crate::type_parse::{
    base_type, is_character_family, parse_enum_values, parse_scale, parse_size, IntegerFamily,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use loader_core::{Column, Dialect, TableStructure};

const MAX_STRING_LENGTH: usize = 100;
const DEFAULT_STRING_LENGTH: usize = 10;
const MAX_BIT_LENGTH: usize = 64;
const DEFAULT_BIT_LENGTH: usize = 8;
const FOREIGN_KEY_MAX: i64 = 1000;
const FOREIGN_KEY_STRING_LENGTH: usize = 8;

/// Choose a generator for one column, or `None` to skip it.
pub fn select_generator(
    column: &Column,
    table: &TableStructure,
    dialect: Dialect,
) -> Option<GeneratorConfig> {
    let data_type = column.data_type.to_lowercase();
    let base = base_type(&data_type);
    let integer_family = IntegerFamily::from_base_type(&base);

    if integer_family.is_some() && table.is_single_column_primary_key(&column.name) {
        return None;
    }

    if table.is_foreign_key_column(&column.name) {
        if integer_family.is_some() {
            return Some(GeneratorConfig::IntRange {
                min: 1,
                max: FOREIGN_KEY_MAX,
            });
        }
        if is_character_family(&data_type) {
            return Some(GeneratorConfig::String {
                length: FOREIGN_KEY_STRING_LENGTH,
            });
        }
        return None;
    }

    if let Some(family) = integer_family {
        let (min, max) = family.range(data_type.contains("unsigned"));
        return Some(GeneratorConfig::IntRange { min, max });
    }

    Some(select_by_base_type(&base, &data_type, &column.data_type, dialect))
}

/// `data_type` is the lower-cased declared type. `declared` keeps the
/// original case for enum values.
fn select_by_base_type(
    base: &str,
    data_type: &str,
    declared: &str,
    dialect: Dialect,
) -> GeneratorConfig {
    match base {
        "char" | "varchar" => GeneratorConfig::String {
            length: parse_size(data_type)
                .map(|size| size.min(MAX_STRING_LENGTH))
                .unwrap_or(DEFAULT_STRING_LENGTH),
        },

        "tinytext" => GeneratorConfig::String { length: 50 },
        "mediumtext" => GeneratorConfig::String { length: 200 },
        "longtext" => GeneratorConfig::String { length: 500 },
        "text" => GeneratorConfig::String { length: 100 },

        "float" | "real" => GeneratorConfig::FloatRange {
            min: -1000.0,
            max: 1000.0,
            decimals: 2,
        },

        "double" | "decimal" | "numeric" => GeneratorConfig::FloatRange {
            min: -10000.0,
            max: 10000.0,
            decimals: parse_scale(data_type).unwrap_or(2),
        },

        "bool" | "boolean" => GeneratorConfig::Bool,

        "date" => GeneratorConfig::DateRange {
            start: range_start_date(),
            end: range_end_date(),
        },

        "time" => GeneratorConfig::String { length: 8 },

        "timestamp" | "timestamptz" | "datetime" => GeneratorConfig::TimestampRange {
            start: range_start_date().and_time(NaiveTime::MIN),
            end: range_end_timestamp(),
            with_time_zone: data_type.contains("with time zone")
                || data_type.contains("timestamptz"),
        },

        "enum" | "set" => GeneratorConfig::OneOf {
            values: parse_enum_values(declared),
        },

        "json" | "jsonb" => GeneratorConfig::Json {
            max_fields: 3,
            max_depth: 2,
            max_array_items: 3,
            dialect,
        },

        "uuid" => GeneratorConfig::UuidV4,

        "inet" | "cidr" => GeneratorConfig::IpAddress { ipv6: false },

        "macaddr" => GeneratorConfig::String { length: 17 },

        "bit" | "varbit" => GeneratorConfig::BitString {
            length: parse_size(data_type)
                .map(|size| size.min(MAX_BIT_LENGTH))
                .unwrap_or(DEFAULT_BIT_LENGTH),
        },

        "tinyblob" | "blob" | "mediumblob" | "longblob" | "binary" | "varbinary" | "bytea" => {
            let length = if data_type.contains("tiny") {
                100
            } else if data_type.contains("medium") {
                1000
            } else if data_type.contains("long") {
                10000
            } else {
                500
            };
            GeneratorConfig::Bytes { length }
        }

        "point" | "geometry" => {
            let shape = if data_type.contains("linestring") {
                GeometryShape::LineString
            } else if data_type.contains("polygon") {
                GeometryShape::Polygon
            } else {
                GeometryShape::Point
            };
            GeneratorConfig::Geometry { shape }
        }

        "money" => GeneratorConfig::Money {
            min: 0.0,
            max: 10000.0,
        },

        "interval" => GeneratorConfig::Interval {
            min_hours: 0,
            max_hours: 100,
        },

        _ => GeneratorConfig::String {
            length: DEFAULT_STRING_LENGTH,
        },
    }
}

fn range_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

fn range_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or_default()
}

fn range_end_timestamp() -> NaiveDateTime {
    range_end_date()
        .and_hms_opt(23, 59, 59)
        .unwrap_or_default()
}

/// Run the selection policy over every column and insert the results.
///
/// Existing bindings for skipped columns are left alone, so a caller's
/// override for an auto-increment key survives a re-run.
pub fn apply_default_generators(
    registry: &mut GeneratorRegistry,
    table: &TableStructure,
    dialect: Dialect,
) {
    for column in &table.columns {
        if let Some(config) = select_generator(column, table, dialect) {
            registry.set(column.name.clone(), config);
        }
    }
}

/// A fresh registry holding the default binding of every eligible column.
pub fn default_generators(table: &TableStructure, dialect: Dialect) -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    apply_default_generators(&mut registry, table, dialect);
    registry
}
