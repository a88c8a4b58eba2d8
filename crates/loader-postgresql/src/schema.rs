//! Table introspection from `pg_catalog`.

use crate::error::PostgresLoaderError;
use loader_core::{Column, SessionError, TableStructure};
use tokio_postgres::Client;

const COLUMNS_QUERY: &str = "
    SELECT a.attname::text,
           format_type(a.atttypid, a.atttypmod),
           NOT a.attnotnull,
           pg_get_expr(d.adbin, d.adrelid),
           ARRAY(
               SELECT e.enumlabel::text
               FROM pg_enum e
               WHERE e.enumtypid = a.atttypid
               ORDER BY e.enumsortorder
           )
    FROM pg_attribute a
    JOIN pg_class c ON c.oid = a.attrelid
    JOIN pg_namespace n ON n.oid = c.relnamespace
    LEFT JOIN pg_attrdef d ON d.adrelid = a.attrelid AND d.adnum = a.attnum
    WHERE n.nspname = $1 AND c.relname = $2
        AND a.attnum > 0 AND NOT a.attisdropped
    ORDER BY a.attnum";

const INDEXES_QUERY: &str = "
    SELECT i.relname::text, a.attname::text, ix.indisunique, ix.indisprimary
    FROM pg_index ix
    JOIN pg_class t ON t.oid = ix.indrelid
    JOIN pg_class i ON i.oid = ix.indexrelid
    JOIN pg_namespace n ON n.oid = t.relnamespace
    JOIN LATERAL unnest(ix.indkey::int2[]) WITH ORDINALITY AS k(attnum, ord) ON true
    JOIN pg_attribute a ON a.attrelid = t.oid AND a.attnum = k.attnum
    WHERE n.nspname = $1 AND t.relname = $2
    ORDER BY i.relname, k.ord";

const FOREIGN_KEYS_QUERY: &str = "
    SELECT con.conname::text, la.attname::text, rc.relname::text, ra.attname::text
    FROM pg_constraint con
    JOIN pg_class c ON c.oid = con.conrelid
    JOIN pg_namespace n ON n.oid = c.relnamespace
    JOIN pg_class rc ON rc.oid = con.confrelid
    JOIN LATERAL unnest(con.conkey, con.confkey) WITH ORDINALITY AS k(local_num, ref_num, ord) ON true
    JOIN pg_attribute la ON la.attrelid = con.conrelid AND la.attnum = k.local_num
    JOIN pg_attribute ra ON ra.attrelid = con.confrelid AND ra.attnum = k.ref_num
    WHERE con.contype = 'f' AND n.nspname = $1 AND c.relname = $2
    ORDER BY con.conname, k.ord";

/// Describe `schema.table`.
pub async fn collect_table_structure(
    client: &Client,
    schema: &str,
    table: &str,
) -> Result<TableStructure, SessionError> {
    let column_rows = client
        .query(COLUMNS_QUERY, &[&schema, &table])
        .await
        .map_err(PostgresLoaderError::from)?;

    if column_rows.is_empty() {
        return Err(SessionError::TableNotFound {
            schema: schema.to_string(),
            table: table.to_string(),
        });
    }

    let mut structure = TableStructure::new(table);

    for row in column_rows {
        let formatted: String = row.get(1);
        let enum_labels: Vec<String> = row.get(4);
        let default: Option<String> = row.get(3);

        structure.columns.push(Column {
            name: row.get(0),
            data_type: column_type(&formatted, &enum_labels),
            nullable: row.get(2),
            default: default.unwrap_or_default(),
        });
    }

    let index_rows = client
        .query(INDEXES_QUERY, &[&schema, &table])
        .await
        .map_err(PostgresLoaderError::from)?;

    for row in index_rows {
        let name: String = row.get(0);
        let column: String = row.get(1);
        structure.add_index_member(&name, column, row.get(2), row.get(3));
    }

    let fk_rows = client
        .query(FOREIGN_KEYS_QUERY, &[&schema, &table])
        .await
        .map_err(PostgresLoaderError::from)?;

    for row in fk_rows {
        let name: String = row.get(0);
        let column: String = row.get(1);
        let referenced_table: String = row.get(2);
        let referenced_column: String = row.get(3);
        structure.add_foreign_key_member(&name, column, referenced_table, referenced_column);
    }

    Ok(structure)
}

/// Declared type of a column from `format_type` output and its enum labels.
///
/// Enum types are rendered as `enum('v1','v2')` in label order; everything
/// else goes through [`normalize_type`].
pub fn column_type(formatted: &str, enum_labels: &[String]) -> String {
    if enum_labels.is_empty() {
        return normalize_type(formatted);
    }
    let quoted: Vec<String> = enum_labels
        .iter()
        .map(|label| format!("'{label}'"))
        .collect();
    format!("enum({})", quoted.join(","))
}

/// Rename SQL-standard type names to their short PostgreSQL aliases.
///
/// `character varying(n)` becomes `varchar(n)`, `character(n)` becomes
/// `char(n)` and `bit varying(n)` becomes `varbit(n)`. Other names pass
/// through unchanged.
pub fn normalize_type(formatted: &str) -> String {
    const RENAMES: [(&str, &str); 3] = [
        ("character varying", "varchar"),
        ("character", "char"),
        ("bit varying", "varbit"),
    ];

    for (long, short) in RENAMES {
        if let Some(rest) = formatted.strip_prefix(long) {
            return format!("{short}{rest}");
        }
    }
    formatted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_character_types() {
        assert_eq!(normalize_type("character varying(100)"), "varchar(100)");
        assert_eq!(normalize_type("character varying"), "varchar");
        assert_eq!(normalize_type("character(5)"), "char(5)");
        assert_eq!(normalize_type("bit varying(12)"), "varbit(12)");
    }

    #[test]
    fn test_normalize_passes_through() {
        assert_eq!(normalize_type("integer"), "integer");
        assert_eq!(normalize_type("numeric(10,2)"), "numeric(10,2)");
        assert_eq!(
            normalize_type("timestamp(6) with time zone"),
            "timestamp(6) with time zone"
        );
        assert_eq!(normalize_type("bit(8)"), "bit(8)");
    }

    #[test]
    fn test_enum_rendering() {
        let labels = vec!["happy".to_string(), "sad".to_string()];
        assert_eq!(column_type("mood", &labels), "enum('happy','sad')");
        assert_eq!(column_type("character varying(3)", &[]), "varchar(3)");
    }
}
