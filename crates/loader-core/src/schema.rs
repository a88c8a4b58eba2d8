//! Table structure as reported by schema introspection.
//!
//! These are plain data types. They are built once per invocation by a
//! [`Database`](crate::Database) backend and treated as read-only afterwards.

/// A column of a database table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Declared data type, dialect-specific and possibly parameterized
    /// (e.g. `varchar(100)`, `decimal(10,2)`, `enum('a','b')`)
    pub data_type: String,
    /// Whether the column accepts NULL
    pub nullable: bool,
    /// Default value expression, empty when the column has none
    pub default: String,
}

impl Column {
    /// Create a nullable column without a default.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: true,
            default: String::new(),
        }
    }

    /// Mark the column as NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Set the default value expression.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }
}

/// An index on a database table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Index name
    pub name: String,
    /// Member columns in index order
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness
    pub is_unique: bool,
    /// Whether the index backs the primary key
    pub is_primary: bool,
}

impl Index {
    /// Primary key index over the given columns.
    pub fn primary(name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            is_unique: true,
            is_primary: true,
        }
    }

    /// True when this is a primary key made of exactly `column`.
    pub fn is_single_column_primary_key(&self, column: &str) -> bool {
        self.is_primary && self.columns.len() == 1 && self.columns[0] == column
    }
}

/// A foreign key constraint.
///
/// `columns` and `referenced_columns` correspond positionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Constraint name
    pub name: String,
    /// Local columns in constraint order
    pub columns: Vec<String>,
    /// Referenced table
    pub referenced_table: String,
    /// Referenced columns in constraint order
    pub referenced_columns: Vec<String>,
}

/// The structure of a database table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStructure {
    /// Table name
    pub name: String,
    /// Columns in ordinal order
    pub columns: Vec<Column>,
    /// Indexes, in no particular order
    pub indexes: Vec<Index>,
    /// Foreign keys, in no particular order
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableStructure {
    /// Create an empty table structure.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a column.
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Add an index.
    pub fn with_index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    /// Add a foreign key.
    pub fn with_foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    /// Append `column` to the index `name`, creating the index on first use.
    ///
    /// Introspection rows arrive one member at a time in index order.
    pub fn add_index_member(
        &mut self,
        name: &str,
        column: impl Into<String>,
        is_unique: bool,
        is_primary: bool,
    ) {
        match self.indexes.iter_mut().find(|i| i.name == name) {
            Some(index) => index.columns.push(column.into()),
            None => self.indexes.push(Index {
                name: name.to_string(),
                columns: vec![column.into()],
                is_unique,
                is_primary,
            }),
        }
    }

    /// Append a column pair to the foreign key `name`, creating it on first use.
    pub fn add_foreign_key_member(
        &mut self,
        name: &str,
        column: impl Into<String>,
        referenced_table: impl Into<String>,
        referenced_column: impl Into<String>,
    ) {
        match self.foreign_keys.iter_mut().find(|fk| fk.name == name) {
            Some(fk) => {
                fk.columns.push(column.into());
                fk.referenced_columns.push(referenced_column.into());
            }
            None => self.foreign_keys.push(ForeignKey {
                name: name.to_string(),
                columns: vec![column.into()],
                referenced_table: referenced_table.into(),
                referenced_columns: vec![referenced_column.into()],
            }),
        }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in ordinal order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// True when `column` alone forms the primary key.
    pub fn is_single_column_primary_key(&self, column: &str) -> bool {
        self.indexes
            .iter()
            .any(|index| index.is_single_column_primary_key(column))
    }

    /// True when `column` is a local column of any foreign key.
    pub fn is_foreign_key_column(&self, column: &str) -> bool {
        self.foreign_keys
            .iter()
            .any(|fk| fk.columns.iter().any(|c| c == column))
    }

    /// Human-readable description, one line per column, index and foreign key.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![format!("Table {}", self.name), "Columns:".to_string()];

        for column in &self.columns {
            let nullable = if column.nullable { "NULL" } else { "NOT NULL" };
            let default = if column.default.is_empty() {
                String::new()
            } else {
                format!(" DEFAULT {}", column.default)
            };
            lines.push(format!(
                "  {} {} {nullable}{default}",
                column.name, column.data_type
            ));
        }

        lines.push("Indexes:".to_string());
        for index in &self.indexes {
            let kind = if index.is_primary {
                "PRIMARY KEY"
            } else if index.is_unique {
                "UNIQUE INDEX"
            } else {
                "INDEX"
            };
            lines.push(format!(
                "  {kind} {} ({})",
                index.name,
                index.columns.join(", ")
            ));
        }

        lines.push("Foreign Keys:".to_string());
        for fk in &self.foreign_keys {
            lines.push(format!(
                "  {} ({}) REFERENCES {} ({})",
                fk.name,
                fk.columns.join(", "),
                fk.referenced_table,
                fk.referenced_columns.join(", ")
            ));
        }

        lines
    }
}
