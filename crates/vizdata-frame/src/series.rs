//! A labeled one-dimensional column.

use crate::column::{Column, Value};
use crate::error::FrameError;
use crate::index::Index;

/// A single column with its own row labels and an optional name.
///
/// The name doubles as the key when a series joins a mapping-shaped fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: Option<String>,
    index: Index,
    column: Column,
}

impl Series {
    /// Build a series, validating that index and column lengths agree.
    pub fn new(name: Option<&str>, index: Index, column: Column) -> Result<Self, FrameError> {
        if index.len() != column.len() {
            return Err(FrameError::LengthMismatch {
                column: name.unwrap_or("series").to_string(),
                expected: index.len(),
                actual: column.len(),
            });
        }
        Ok(Self {
            name: name.map(|n| n.to_string()),
            index,
            column,
        })
    }

    /// A named series over fully-present float values.
    pub fn from_f64(name: &str, index: Index, values: Vec<f64>) -> Result<Self, FrameError> {
        Self::new(Some(name), index, Column::from_f64(values))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn len(&self) -> usize {
        self.column.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column.is_empty()
    }

    /// Cell value at positional `row`, or `None` when missing.
    pub fn value(&self, row: usize) -> Option<Value> {
        self.column.value(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_length_validation() {
        let result = Series::from_f64("s", Index::default_range(3), vec![1.0, 2.0]);
        assert!(matches!(
            result,
            Err(FrameError::LengthMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn test_series_accessors() {
        let series = Series::from_f64("s", Index::stepped(10, 30, 1).with_name("t"), vec![0.5; 20])
            .unwrap();
        assert_eq!(series.name(), Some("s"));
        assert_eq!(series.index().name(), Some("t"));
        assert_eq!(series.len(), 20);
        assert_eq!(series.value(0), Some(Value::Float(0.5)));
    }
}
