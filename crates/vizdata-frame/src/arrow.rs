//! Arrow interchange for frames.

use crate::column::{Categorical, Column};
use crate::error::FrameError;
use crate::frame::DataFrame;
use arrow::array::{
    ArrayRef, DictionaryArray, Float64Array, Int32Array, Int64Array, StringArray,
    TimestampMillisecondArray,
};
use arrow::datatypes::{DataType, Field, Int32Type, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

impl DataFrame {
    /// Convert the frame to an Arrow record batch.
    ///
    /// A named index carries information (a fixture contract, not just row
    /// positions) and is emitted as the leading column; the default unnamed
    /// index is dropped. Missing entries become Arrow validity bitmaps.
    pub fn to_record_batch(&self) -> Result<RecordBatch, FrameError> {
        let mut fields = Vec::with_capacity(self.num_columns() + 1);
        let mut arrays: Vec<ArrayRef> = Vec::with_capacity(self.num_columns() + 1);

        if let Some(name) = self.index().name() {
            fields.push(Field::new(name, DataType::Int64, false));
            arrays.push(Arc::new(Int64Array::from(self.index().values().to_vec())));
        }

        for (name, column) in self.columns() {
            let array = column_to_array(column)?;
            fields.push(Field::new(
                name,
                array.data_type().clone(),
                column.null_count() > 0,
            ));
            arrays.push(array);
        }

        let schema = Arc::new(Schema::new(fields));
        Ok(RecordBatch::try_new(schema, arrays)?)
    }
}

fn column_to_array(column: &Column) -> Result<ArrayRef, FrameError> {
    match column {
        Column::Float64(v) => Ok(Arc::new(Float64Array::from(v.clone()))),
        Column::Int64(v) => Ok(Arc::new(Int64Array::from(v.clone()))),
        Column::Utf8(v) => Ok(Arc::new(StringArray::from(v.clone()))),
        Column::Timestamp(v) => {
            let millis: Vec<Option<i64>> = v
                .iter()
                .copied()
                .map(|t| t.map(|dt| dt.and_utc().timestamp_millis()))
                .collect();
            Ok(Arc::new(TimestampMillisecondArray::from(millis)))
        }
        Column::Categorical(cat) => Ok(Arc::new(categorical_to_dictionary(cat)?)),
    }
}

fn categorical_to_dictionary(cat: &Categorical) -> Result<DictionaryArray<Int32Type>, FrameError> {
    let keys = Int32Array::from(
        cat.codes()
            .iter()
            .map(|code| code.map(|k| k as i32))
            .collect::<Vec<_>>(),
    );
    let levels: ArrayRef = Arc::new(Int64Array::from(cat.levels().to_vec()));
    Ok(DictionaryArray::try_new(keys, levels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use arrow::array::Array;

    #[test]
    fn test_named_index_becomes_leading_column() {
        let frame = DataFrame::new(
            Index::stepped(10, 16, 2).with_name("wide_index"),
            vec![("a".to_string(), Column::from_f64(vec![1.0, 2.0, 3.0]))],
        )
        .unwrap();

        let batch = frame.to_record_batch().unwrap();
        assert_eq!(batch.num_columns(), 2);
        assert_eq!(batch.schema().field(0).name(), "wide_index");
        assert_eq!(batch.num_rows(), 3);
    }

    #[test]
    fn test_default_index_dropped() {
        let frame = DataFrame::new(
            Index::default_range(2),
            vec![("x".to_string(), Column::from_i64(vec![7, 9]))],
        )
        .unwrap();

        let batch = frame.to_record_batch().unwrap();
        assert_eq!(batch.num_columns(), 1);
        assert_eq!(batch.schema().field(0).name(), "x");
    }

    #[test]
    fn test_nulls_become_validity_bitmap() {
        let mut column = Column::from_f64(vec![1.0, 2.0, 3.0]);
        column.set_null(1);
        let frame = DataFrame::new(Index::default_range(3), vec![("y".to_string(), column)])
            .unwrap();

        let batch = frame.to_record_batch().unwrap();
        assert!(batch.schema().field(0).is_nullable());
        assert_eq!(batch.column(0).null_count(), 1);
    }

    #[test]
    fn test_categorical_becomes_dictionary() {
        let cat = Categorical::from_ints(&[2, 8, 4, 2]);
        let frame = DataFrame::new(
            Index::default_range(4),
            vec![("s_cat".to_string(), Column::Categorical(cat))],
        )
        .unwrap();

        let batch = frame.to_record_batch().unwrap();
        match batch.schema().field(0).data_type() {
            DataType::Dictionary(key, value) => {
                assert_eq!(**key, DataType::Int32);
                assert_eq!(**value, DataType::Int64);
            }
            other => panic!("expected dictionary type, got {other:?}"),
        }
    }
}
