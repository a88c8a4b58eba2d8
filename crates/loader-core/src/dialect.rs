//! SQL dialects and the parameterized INSERT statement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The database engine family a load targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// MySQL-family engine, positional `?` placeholders
    #[serde(rename = "mysql")]
    MySql,
    /// PostgreSQL-family engine, numbered `$n` placeholders
    Postgres,
}

impl Dialect {
    /// Name used on the command line and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
        }
    }

    /// Placeholder list for `count` parameters.
    ///
    /// MySQL gets `?, ?, ?`. PostgreSQL gets the same list with each `?`
    /// rewritten left to right into `$1, $2, $3`.
    pub fn placeholders(&self, count: usize) -> String {
        let positional = vec!["?"; count].join(", ");
        match self {
            Dialect::MySql => positional,
            Dialect::Postgres => number_placeholders(&positional),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unsupported dialect name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported database type: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            other => Err(UnknownDialect(other.to_string())),
        }
    }
}

/// Replace each `?` with `$1`, `$2`, ... in order of appearance.
fn number_placeholders(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() + sql.len() / 2);
    let mut n = 0;
    for c in sql.chars() {
        if c == '?' {
            n += 1;
            out.push('$');
            out.push_str(&n.to_string());
        } else {
            out.push(c);
        }
    }
    out
}

/// A parameterized INSERT for a fixed column list.
///
/// Built once per load. Every row bound to it carries exactly one value per
/// column, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    /// Target table
    pub table: String,
    /// Columns receiving values
    pub columns: Vec<String>,
    /// Full statement text
    pub sql: String,
}

impl InsertStatement {
    /// Build `INSERT INTO <table> (<cols>) VALUES (<placeholders>)`.
    pub fn new(table: &str, columns: Vec<String>, dialect: Dialect) -> Self {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            dialect.placeholders(columns.len())
        );
        Self {
            table: table.to_string(),
            columns,
            sql,
        }
    }
}
