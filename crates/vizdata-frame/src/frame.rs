//! An insertion-ordered frame of typed columns over a shared index.

use crate::column::{Column, Value};
use crate::error::FrameError;
use crate::index::Index;

/// A table: one index, many named columns.
///
/// Columns keep their insertion order, so projections that key by name
/// iterate in the order the columns were generated.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    index: Index,
    columns: Vec<(String, Column)>,
}

impl DataFrame {
    /// Build a frame, validating column lengths against the index and
    /// rejecting duplicate names.
    pub fn new(index: Index, columns: Vec<(String, Column)>) -> Result<Self, FrameError> {
        let mut frame = Self {
            index,
            columns: Vec::with_capacity(columns.len()),
        };
        for (name, column) in columns {
            frame.push_column(&name, column)?;
        }
        Ok(frame)
    }

    /// Append a column, validating its length and name.
    pub fn push_column(&mut self, name: &str, column: Column) -> Result<(), FrameError> {
        if column.len() != self.index.len() {
            return Err(FrameError::LengthMismatch {
                column: name.to_string(),
                expected: self.index.len(),
                actual: column.len(),
            });
        }
        if self.columns.iter().any(|(existing, _)| existing == name) {
            return Err(FrameError::DuplicateColumn(name.to_string()));
        }
        self.columns.push((name.to_string(), column));
        Ok(())
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn num_rows(&self) -> usize {
        self.index.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, FrameError> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, column)| column)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))
    }

    /// All `(name, column)` pairs in insertion order.
    pub fn columns(&self) -> &[(String, Column)] {
        &self.columns
    }

    /// Mutable access to every column, for in-place perturbation.
    pub fn columns_mut(&mut self) -> impl Iterator<Item = (&str, &mut Column)> {
        self.columns
            .iter_mut()
            .map(|(name, column)| (name.as_str(), column))
    }

    /// Cell value at positional `row` in column `name`.
    pub fn value(&self, row: usize, name: &str) -> Result<Option<Value>, FrameError> {
        Ok(self.column(name)?.value(row))
    }
}
