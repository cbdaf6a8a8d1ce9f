//! Typed nullable columns and scalar cell values.

use chrono::NaiveDateTime;
use std::fmt;

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    Float64,
    Int64,
    Utf8,
    Timestamp,
    Categorical,
}

impl DType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Float64 => "float64",
            DType::Int64 => "int64",
            DType::Utf8 => "utf8",
            DType::Timestamp => "timestamp",
            DType::Categorical => "categorical",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single non-null cell value, for uniform access across column types.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    Int(i64),
    Str(String),
    Timestamp(NaiveDateTime),
}

/// A dictionary-encoded column with integer levels.
///
/// Levels are the sorted distinct values; each row stores a code into the
/// level table, or no code at all when the entry is missing. Integer levels
/// are the only kind the fixtures derive (a categorical-typed copy of an
/// integer column), so the level table is concrete rather than generic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorical {
    codes: Vec<Option<u32>>,
    levels: Vec<i64>,
}

impl Categorical {
    /// Dictionary-encode an integer slice. Levels come out sorted.
    pub fn from_ints(values: &[i64]) -> Self {
        let mut levels: Vec<i64> = values.to_vec();
        levels.sort_unstable();
        levels.dedup();
        let codes = values
            .iter()
            .map(|v| {
                let code = levels.binary_search(v).expect("value is one of its own levels");
                Some(code as u32)
            })
            .collect();
        Self { codes, levels }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The sorted distinct levels.
    pub fn levels(&self) -> &[i64] {
        &self.levels
    }

    /// Per-row level codes; a missing entry has no code.
    pub fn codes(&self) -> &[Option<u32>] {
        &self.codes
    }

    /// Decoded value at `row`, or `None` when missing.
    pub fn value(&self, row: usize) -> Option<Value> {
        self.codes[row].map(|code| Value::Int(self.levels[code as usize]))
    }

    /// Mark `row` missing.
    pub fn set_null(&mut self, row: usize) {
        self.codes[row] = None;
    }

    pub fn null_count(&self) -> usize {
        self.codes.iter().filter(|c| c.is_none()).count()
    }
}

/// A typed column where every entry may be missing.
///
/// Missing entries are per-type nulls: an integer column stays an integer
/// column when rows are knocked out, unlike float-NaN encodings that coerce
/// the dtype.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Float64(Vec<Option<f64>>),
    Int64(Vec<Option<i64>>),
    Utf8(Vec<Option<String>>),
    Timestamp(Vec<Option<NaiveDateTime>>),
    Categorical(Categorical),
}

impl Column {
    /// A fully-present float column.
    pub fn from_f64(values: Vec<f64>) -> Self {
        Column::Float64(values.into_iter().map(Some).collect())
    }

    /// A fully-present integer column.
    pub fn from_i64(values: Vec<i64>) -> Self {
        Column::Int64(values.into_iter().map(Some).collect())
    }

    /// A fully-present string column.
    pub fn from_strs(values: &[&str]) -> Self {
        Column::Utf8(values.iter().map(|s| Some((*s).to_string())).collect())
    }

    /// A timestamp column holding `value` in every row.
    pub fn timestamp_constant(value: NaiveDateTime, len: usize) -> Self {
        Column::Timestamp(vec![Some(value); len])
    }

    /// A float column of `len` missing entries.
    pub fn all_null_f64(len: usize) -> Self {
        Column::Float64(vec![None; len])
    }

    pub fn dtype(&self) -> DType {
        match self {
            Column::Float64(_) => DType::Float64,
            Column::Int64(_) => DType::Int64,
            Column::Utf8(_) => DType::Utf8,
            Column::Timestamp(_) => DType::Timestamp,
            Column::Categorical(_) => DType::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Float64(v) => v.len(),
            Column::Int64(v) => v.len(),
            Column::Utf8(v) => v.len(),
            Column::Timestamp(v) => v.len(),
            Column::Categorical(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell value at `row`, or `None` when missing.
    pub fn value(&self, row: usize) -> Option<Value> {
        match self {
            Column::Float64(v) => v[row].map(Value::Float),
            Column::Int64(v) => v[row].map(Value::Int),
            Column::Utf8(v) => v[row].clone().map(Value::Str),
            Column::Timestamp(v) => v[row].map(Value::Timestamp),
            Column::Categorical(c) => c.value(row),
        }
    }

    /// Mark `row` missing, keeping the column's dtype.
    pub fn set_null(&mut self, row: usize) {
        match self {
            Column::Float64(v) => v[row] = None,
            Column::Int64(v) => v[row] = None,
            Column::Utf8(v) => v[row] = None,
            Column::Timestamp(v) => v[row] = None,
            Column::Categorical(c) => c.set_null(row),
        }
    }

    pub fn null_count(&self) -> usize {
        match self {
            Column::Float64(v) => v.iter().filter(|x| x.is_none()).count(),
            Column::Int64(v) => v.iter().filter(|x| x.is_none()).count(),
            Column::Utf8(v) => v.iter().filter(|x| x.is_none()).count(),
            Column::Timestamp(v) => v.iter().filter(|x| x.is_none()).count(),
            Column::Categorical(c) => c.null_count(),
        }
    }

    /// The raw float entries, if this is a float column.
    pub fn f64_values(&self) -> Option<&[Option<f64>]> {
        match self {
            Column::Float64(v) => Some(v),
            _ => None,
        }
    }

    /// The raw integer entries, if this is an integer column.
    pub fn i64_values(&self) -> Option<&[Option<i64>]> {
        match self {
            Column::Int64(v) => Some(v),
            _ => None,
        }
    }
}
