//! Random JSON document generator.
//!
//! Objects hold between one and `max_fields` fields. Each field is a string,
//! a number, a nested object or an array. Nesting stops at `max_depth`, after
//! which only leaf strings are produced, so generation always terminates.

use super::string::random_alphanumeric;
use loader_core::{Dialect, GeneratedValue};
use rand::Rng;
use serde_json::{Map, Value};

/// Generate a random JSON object and return it as JSON text.
///
/// The dialect is carried for future use; both dialects receive the same text.
pub fn generate_json<R: Rng>(
    rng: &mut R,
    max_fields: usize,
    max_depth: usize,
    max_array_items: usize,
    dialect: Dialect,
) -> GeneratedValue {
    let document = JsonShape {
        max_fields: max_fields.max(1),
        max_depth,
        max_array_items: max_array_items.max(1),
    }
    .object(rng, 0);

    let text = match dialect {
        Dialect::MySql | Dialect::Postgres => document.to_string(),
    };
    GeneratedValue::String(text)
}

struct JsonShape {
    max_fields: usize,
    max_depth: usize,
    max_array_items: usize,
}

impl JsonShape {
    fn object<R: Rng>(&self, rng: &mut R, depth: usize) -> Value {
        if depth >= self.max_depth {
            return leaf(rng);
        }
        let can_nest = depth + 1 < self.max_depth;

        let fields = rng.random_range(1..=self.max_fields);
        let mut map = Map::with_capacity(fields);

        for _ in 0..fields {
            let key = format!("key_{}", random_alphanumeric(rng, 3));
            let value = match rng.random_range(0..4) {
                0 => Value::String(format!("value_{}", random_alphanumeric(rng, 5))),
                1 => Value::from(rng.random_range(0..1000i64)),
                2 if can_nest => self.object(rng, depth + 1),
                2 => leaf(rng),
                _ => {
                    let items = rng.random_range(1..=self.max_array_items);
                    let elements = (0..items)
                        .map(|_| {
                            if can_nest && rng.random_bool(0.5) {
                                self.object(rng, depth + 1)
                            } else {
                                Value::String(format!("item_{}", random_alphanumeric(rng, 3)))
                            }
                        })
                        .collect();
                    Value::Array(elements)
                }
            };
            map.insert(key, value);
        }

        Value::Object(map)
    }
}

fn leaf<R: Rng>(rng: &mut R) -> Value {
    Value::String(format!("leaf_value_{}", random_alphanumeric(rng, 5)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn depth_of(value: &Value) -> usize {
        match value {
            Value::Object(map) => 1 + map.values().map(depth_of).max().unwrap_or(0),
            Value::Array(items) => items.iter().map(depth_of).max().unwrap_or(0),
            _ => 0,
        }
    }

    fn parse(value: GeneratedValue) -> Value {
        let text = value.as_str().expect("Expected String value").to_string();
        serde_json::from_str(&text).expect("generated text is valid JSON")
    }

    #[test]
    fn test_generates_object_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let doc = parse(generate_json(&mut rng, 3, 2, 3, Dialect::MySql));
            let map = doc.as_object().expect("top level is an object");
            assert!(!map.is_empty() && map.len() <= 3);
            assert!(depth_of(&doc) <= 2);

            for value in map.values() {
                if let Value::Array(items) = value {
                    assert!(!items.is_empty() && items.len() <= 3);
                }
            }
        }
    }

    #[test]
    fn test_zero_depth_is_a_leaf() {
        let mut rng = StdRng::seed_from_u64(42);
        let doc = parse(generate_json(&mut rng, 3, 0, 3, Dialect::Postgres));
        assert!(doc.as_str().unwrap().starts_with("leaf_value_"));
    }

    #[test]
    fn test_dialect_does_not_change_output() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(
            generate_json(&mut rng1, 3, 2, 3, Dialect::MySql),
            generate_json(&mut rng2, 3, 2, 3, Dialect::Postgres)
        );
    }
}
