//! Column-name to generator mapping.

use crate::config::GeneratorConfig;
use loader_core::TableStructure;
use std::collections::HashMap;

/// Generators bound to columns for one load operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorRegistry {
    generators: HashMap<String, GeneratorConfig>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a generator to a column, replacing any previous binding.
    pub fn set(&mut self, column: impl Into<String>, config: GeneratorConfig) {
        self.generators.insert(column.into(), config);
    }

    pub fn get(&self, column: &str) -> Option<&GeneratorConfig> {
        self.generators.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.generators.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Bound columns of `table` in column order, with their generators.
    ///
    /// Bindings for names that are not columns of the table are ignored.
    pub fn eligible_columns(&self, table: &TableStructure) -> Vec<(String, GeneratorConfig)> {
        table
            .columns
            .iter()
            .filter_map(|column| {
                self.generators
                    .get(&column.name)
                    .map(|config| (column.name.clone(), config.clone()))
            })
            .collect()
    }
}
