//! Table introspection from `information_schema`.

use crate::error::MySqlLoaderError;
use loader_core::{Column, SessionError, TableStructure};
use mysql_async::prelude::*;
use mysql_async::Conn;

const COLUMNS_QUERY: &str = "
    SELECT COLUMN_NAME, COLUMN_TYPE, IS_NULLABLE, COLUMN_DEFAULT
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
    ORDER BY ORDINAL_POSITION";

const INDEXES_QUERY: &str = "
    SELECT INDEX_NAME, COLUMN_NAME, NON_UNIQUE
    FROM INFORMATION_SCHEMA.STATISTICS
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
    ORDER BY INDEX_NAME, SEQ_IN_INDEX";

const FOREIGN_KEYS_QUERY: &str = "
    SELECT CONSTRAINT_NAME, COLUMN_NAME, REFERENCED_TABLE_NAME, REFERENCED_COLUMN_NAME
    FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
        AND REFERENCED_TABLE_NAME IS NOT NULL
    ORDER BY CONSTRAINT_NAME, ORDINAL_POSITION";

/// `(name, column_type, is_nullable, default)`
pub type ColumnRow = (String, String, String, Option<String>);

/// `(index_name, column_name, non_unique)`, one row per index member
pub type IndexRow = (String, String, i64);

/// `(constraint_name, column_name, referenced_table, referenced_column)`
pub type ForeignKeyRow = (String, String, String, String);

/// Describe `schema.table`.
pub async fn collect_table_structure(
    conn: &mut Conn,
    schema: &str,
    table: &str,
) -> Result<TableStructure, SessionError> {
    let columns: Vec<ColumnRow> = conn
        .exec(COLUMNS_QUERY, (schema, table))
        .await
        .map_err(MySqlLoaderError::from)?;

    if columns.is_empty() {
        return Err(SessionError::TableNotFound {
            schema: schema.to_string(),
            table: table.to_string(),
        });
    }

    let indexes: Vec<IndexRow> = conn
        .exec(INDEXES_QUERY, (schema, table))
        .await
        .map_err(MySqlLoaderError::from)?;

    let foreign_keys: Vec<ForeignKeyRow> = conn
        .exec(FOREIGN_KEYS_QUERY, (schema, table))
        .await
        .map_err(MySqlLoaderError::from)?;

    let mut structure = TableStructure {
        name: table.to_string(),
        columns: build_columns(columns),
        ..Default::default()
    };

    for (index_name, column, non_unique) in indexes {
        let is_primary = index_name == "PRIMARY";
        structure.add_index_member(&index_name, column, non_unique == 0, is_primary);
    }

    for (constraint, column, referenced_table, referenced_column) in foreign_keys {
        structure.add_foreign_key_member(&constraint, column, referenced_table, referenced_column);
    }

    Ok(structure)
}

/// Build columns from `information_schema.COLUMNS` rows.
pub fn build_columns(rows: Vec<ColumnRow>) -> Vec<Column> {
    rows.into_iter()
        .map(|(name, column_type, is_nullable, default)| Column {
            name,
            data_type: column_type,
            nullable: is_nullable.eq_ignore_ascii_case("YES"),
            default: default.unwrap_or_default(),
        })
        .collect()
}
