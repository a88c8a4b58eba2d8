//! Forward conversion: GeneratedValue → text-format statement parameter

use bytes::BytesMut;
use loader_core::GeneratedValue;
use postgres_types::{to_sql_checked, Format, IsNull, ToSql, Type};
use std::error::Error;
use std::fmt::Write;

/// A statement parameter sent in PostgreSQL's text format.
///
/// Accepts every parameter type. `None` binds SQL NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct TextParam(pub Option<String>);

impl TextParam {
    /// Render a generated value as PostgreSQL input text.
    pub fn from_value(value: &GeneratedValue) -> Self {
        let text = match value {
            GeneratedValue::Null => return Self(None),
            GeneratedValue::Bool(b) => b.to_string(),
            GeneratedValue::Int64(i) => i.to_string(),
            GeneratedValue::Float64(f) => f.to_string(),
            GeneratedValue::String(s) => s.clone(),
            GeneratedValue::Bytes(b) => bytea_hex(b),
            GeneratedValue::Uuid(u) => u.to_string(),
            GeneratedValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            GeneratedValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S%.6f+00").to_string(),
        };
        Self(Some(text))
    }
}

/// `bytea` hex input format: `\x` followed by two hex digits per byte.
fn bytea_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("\\x");
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

impl ToSql for TextParam {
    fn to_sql(&self, _ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match &self.0 {
            Some(text) => {
                out.extend_from_slice(text.as_bytes());
                Ok(IsNull::No)
            }
            None => Ok(IsNull::Yes),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    fn encode_format(&self, _ty: &Type) -> Format {
        Format::Text
    }

    to_sql_checked!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn text(value: GeneratedValue) -> Option<String> {
        TextParam::from_value(&value).0
    }

    #[test]
    fn test_scalars() {
        assert_eq!(text(GeneratedValue::Null), None);
        assert_eq!(text(GeneratedValue::Bool(true)).as_deref(), Some("true"));
        assert_eq!(text(GeneratedValue::Int64(-42)).as_deref(), Some("-42"));
        assert_eq!(text(GeneratedValue::Float64(12.5)).as_deref(), Some("12.5"));
        assert_eq!(
            text(GeneratedValue::String("POINT(1 2)".into())).as_deref(),
            Some("POINT(1 2)")
        );
    }

    #[test]
    fn test_bytes_use_hex_format() {
        assert_eq!(
            text(GeneratedValue::Bytes(vec![0x00, 0xab, 0x10])).as_deref(),
            Some("\\x00ab10")
        );
        assert_eq!(text(GeneratedValue::Bytes(vec![])).as_deref(), Some("\\x"));
    }

    #[test]
    fn test_temporal() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(text(GeneratedValue::Date(date)).as_deref(), Some("2020-02-29"));

        let dt = Utc.with_ymd_and_hms(2021, 6, 1, 8, 30, 0).unwrap();
        assert_eq!(
            text(GeneratedValue::DateTime(dt)).as_deref(),
            Some("2021-06-01 08:30:00.000000+00")
        );
    }

    #[test]
    fn test_uuid() {
        let u = uuid::Uuid::new_v4();
        assert_eq!(text(GeneratedValue::Uuid(u)), Some(u.to_string()));
    }

    #[test]
    fn test_to_sql_writes_raw_text() {
        let mut buf = BytesMut::new();
        let param = TextParam(Some("123".to_string()));

        let is_null = param.to_sql(&Type::INT4, &mut buf).unwrap();
        assert!(matches!(is_null, IsNull::No));
        assert_eq!(&buf[..], b"123");
        assert!(matches!(param.encode_format(&Type::INT4), Format::Text));
        assert!(<TextParam as ToSql>::accepts(&Type::NUMERIC));
    }

    #[test]
    fn test_null_param() {
        let mut buf = BytesMut::new();
        let is_null = TextParam(None).to_sql(&Type::TEXT, &mut buf).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(buf.is_empty());
    }
}
