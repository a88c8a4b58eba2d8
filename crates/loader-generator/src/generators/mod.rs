//! Individual value generators for different data types.
//!
//! This module provides the generation logic for each kind of value based on
//! the generator configuration.

pub mod binary;
pub mod geometry;
pub mod json;
pub mod network;
pub mod numeric;
pub mod static_value;
pub mod string;
pub mod timestamp;
pub mod uuid;

use crate::config::GeneratorConfig;
use loader_core::GeneratedValue;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Generate a value based on the generator configuration.
pub fn generate_value<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> GeneratedValue {
    match config {
        GeneratorConfig::String { length } => {
            GeneratedValue::String(string::random_alphanumeric(rng, *length))
        }

        GeneratorConfig::IntRange { min, max } => numeric::generate_int_range(rng, *min, *max),

        GeneratorConfig::FloatRange { min, max, decimals } => {
            numeric::generate_float_range(rng, *min, *max, *decimals)
        }

        GeneratorConfig::Bool => GeneratedValue::Bool(rng.random_bool(0.5)),

        GeneratorConfig::DateRange { start, end } => {
            timestamp::generate_date_range(rng, *start, *end)
        }

        GeneratorConfig::TimestampRange {
            start,
            end,
            with_time_zone,
        } => timestamp::generate_timestamp_range(rng, *start, *end, *with_time_zone),

        GeneratorConfig::OneOf { values } => match values.choose(rng) {
            Some(value) => GeneratedValue::String(value.clone()),
            None => GeneratedValue::Null,
        },

        GeneratorConfig::Json {
            max_fields,
            max_depth,
            max_array_items,
            dialect,
        } => json::generate_json(rng, *max_fields, *max_depth, *max_array_items, *dialect),

        GeneratorConfig::UuidV4 => uuid::generate_uuid_v4(rng),

        GeneratorConfig::IpAddress { ipv6 } => network::generate_ip_address(rng, *ipv6),

        GeneratorConfig::Bytes { length } => binary::generate_bytes(rng, *length),

        GeneratorConfig::BitString { length } => {
            GeneratedValue::String(string::random_bits(rng, *length))
        }

        GeneratorConfig::Geometry { shape } => geometry::generate_geometry(rng, *shape),

        GeneratorConfig::Money { min, max } => numeric::generate_money(rng, *min, *max),

        GeneratorConfig::Interval {
            min_hours,
            max_hours,
        } => timestamp::generate_interval(rng, *min_hours, *max_hours),

        GeneratorConfig::Static { value } => static_value::yaml_to_generated_value(value),

        GeneratorConfig::Null => GeneratedValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_one_of_stays_in_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let config = GeneratorConfig::OneOf {
            values: values.clone(),
        };

        for _ in 0..1000 {
            match generate_value(&config, &mut rng) {
                GeneratedValue::String(s) => assert!(values.contains(&s)),
                other => panic!("Expected String value, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_one_of_empty_is_null() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneratorConfig::OneOf { values: vec![] };
        assert_eq!(generate_value(&config, &mut rng), GeneratedValue::Null);
    }

    #[test]
    fn test_bool_produces_both_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let values: Vec<_> = (0..100)
            .map(|_| generate_value(&GeneratorConfig::Bool, &mut rng))
            .collect();

        assert!(values.contains(&GeneratedValue::Bool(true)));
        assert!(values.contains(&GeneratedValue::Bool(false)));
    }

    #[test]
    fn test_null() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_value(&GeneratorConfig::Null, &mut rng),
            GeneratedValue::Null
        );
    }

    #[test]
    fn test_deterministic_generation() {
        let config = GeneratorConfig::String { length: 16 };
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_value(&config, &mut rng1),
            generate_value(&config, &mut rng2)
        );
    }
}
