//! Static value generator and YAML to GeneratedValue conversion.

use loader_core::GeneratedValue;
use serde_yaml::Value as YamlValue;

/// Convert a YAML value to a GeneratedValue.
///
/// Scalars map to their natural value. Sequences and mappings become JSON
/// text, which suits JSON columns.
pub fn yaml_to_generated_value(yaml: &YamlValue) -> GeneratedValue {
    match yaml {
        YamlValue::Null => GeneratedValue::Null,
        YamlValue::Bool(b) => GeneratedValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                GeneratedValue::Int64(i)
            } else if let Some(f) = n.as_f64() {
                GeneratedValue::Float64(f)
            } else {
                GeneratedValue::String(n.to_string())
            }
        }
        YamlValue::String(s) => GeneratedValue::String(s.clone()),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => match serde_json::to_string(yaml) {
            Ok(text) => GeneratedValue::String(text),
            Err(_) => GeneratedValue::Null,
        },
        YamlValue::Tagged(tagged) => yaml_to_generated_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_null() {
        assert_eq!(
            yaml_to_generated_value(&YamlValue::Null),
            GeneratedValue::Null
        );
    }

    #[test]
    fn test_yaml_bool() {
        assert_eq!(
            yaml_to_generated_value(&YamlValue::Bool(true)),
            GeneratedValue::Bool(true)
        );
    }

    #[test]
    fn test_yaml_int() {
        let yaml: YamlValue = serde_yaml::from_str("42").unwrap();
        assert_eq!(yaml_to_generated_value(&yaml), GeneratedValue::Int64(42));
    }

    #[test]
    fn test_yaml_float() {
        let yaml: YamlValue = serde_yaml::from_str("1.234").unwrap();
        if let GeneratedValue::Float64(f) = yaml_to_generated_value(&yaml) {
            assert!((f - 1.234).abs() < 0.001);
        } else {
            panic!("Expected Float64");
        }
    }

    #[test]
    fn test_yaml_string() {
        let yaml = YamlValue::String("hello".to_string());
        assert_eq!(
            yaml_to_generated_value(&yaml),
            GeneratedValue::String("hello".to_string())
        );
    }

    #[test]
    fn test_yaml_collections_become_json_text() {
        let yaml: YamlValue = serde_yaml::from_str("[1, 2, 3]").unwrap();
        assert_eq!(
            yaml_to_generated_value(&yaml),
            GeneratedValue::String("[1,2,3]".to_string())
        );

        let yaml: YamlValue = serde_yaml::from_str("{ version: 1 }").unwrap();
        assert_eq!(
            yaml_to_generated_value(&yaml),
            GeneratedValue::String(r#"{"version":1}"#.to_string())
        );
    }
}
