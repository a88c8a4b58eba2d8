//! Parsing of declared column type strings.
//!
//! Declared types come straight from introspection and look like
//! `varchar(100)`, `decimal(10,2)`, `int(11) unsigned`,
//! `timestamp with time zone` or `enum('a','b')`. Everything here is a pure
//! string function with a defined fallback.

/// Values used when an enum declaration has no parsable value list.
pub const FALLBACK_ENUM_VALUES: [&str; 2] = ["enum_value1", "enum_value2"];

/// The dispatch key of a declared type: the first whitespace-delimited token
/// of the lower-cased type, cut at its first `(`.
pub fn base_type(data_type: &str) -> String {
    let lowered = data_type.trim().to_lowercase();
    let token = lowered.split_whitespace().next().unwrap_or("");
    match token.find('(') {
        Some(pos) => token[..pos].to_string(),
        None => token.to_string(),
    }
}

/// The text between the first `(` and the last `)`, if any.
pub fn parenthesized(data_type: &str) -> Option<&str> {
    let open = data_type.find('(')?;
    let close = data_type.rfind(')')?;
    (close > open).then(|| &data_type[open + 1..close])
}

/// Size from the first parenthesized number, e.g. `100` in `varchar(100)`.
pub fn parse_size(data_type: &str) -> Option<usize> {
    let inner = parenthesized(data_type)?;
    inner.split(',').next()?.trim().parse().ok()
}

/// Scale from the second parenthesized number, e.g. `2` in `decimal(10,2)`.
pub fn parse_scale(data_type: &str) -> Option<u32> {
    let inner = parenthesized(data_type)?;
    inner.split(',').nth(1)?.trim().parse().ok()
}

/// Values of an `enum(...)`/`set(...)` declaration in declared order.
///
/// Quotes and surrounding whitespace are stripped, case is preserved. Falls
/// back to [`FALLBACK_ENUM_VALUES`] when there is nothing to parse.
pub fn parse_enum_values(data_type: &str) -> Vec<String> {
    let values: Vec<String> = parenthesized(data_type)
        .map(|inner| {
            inner
                .split(',')
                .map(|v| v.trim().trim_matches(|c| c == '\'' || c == '"').to_string())
                .filter(|v| !v.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if values.is_empty() {
        FALLBACK_ENUM_VALUES.iter().map(|v| v.to_string()).collect()
    } else {
        values
    }
}

/// Integer type families and their value ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerFamily {
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
}

impl IntegerFamily {
    /// Classify a base type (see [`base_type`]).
    pub fn from_base_type(base: &str) -> Option<Self> {
        match base {
            "tinyint" => Some(Self::TinyInt),
            "smallint" | "int2" | "smallserial" | "serial2" => Some(Self::SmallInt),
            "mediumint" => Some(Self::MediumInt),
            "int" | "integer" | "int4" | "serial" | "serial4" => Some(Self::Int),
            "bigint" | "int8" | "bigserial" | "serial8" => Some(Self::BigInt),
            _ => None,
        }
    }

    /// Inclusive value range of the family.
    ///
    /// Unsigned `int` stays within the signed 32-bit maximum.
    pub fn range(self, unsigned: bool) -> (i64, i64) {
        match (self, unsigned) {
            (Self::TinyInt, false) => (-128, 127),
            (Self::TinyInt, true) => (0, 255),
            (Self::SmallInt, false) => (-32768, 32767),
            (Self::SmallInt, true) => (0, 65535),
            (Self::MediumInt, false) => (-8388608, 8388607),
            (Self::MediumInt, true) => (0, 16777215),
            (Self::Int, false) => (i32::MIN as i64, i32::MAX as i64),
            (Self::Int, true) => (0, i32::MAX as i64),
            (Self::BigInt, false) => (i64::MIN, i64::MAX),
            (Self::BigInt, true) => (0, i64::MAX),
        }
    }
}

/// Whether the declared type is character-like: `char`, `varchar` or a
/// `text` variant.
pub fn is_character_family(data_type: &str) -> bool {
    matches!(
        base_type(data_type).as_str(),
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext"
    )
}
