//! Parquet export for fixture frames.

use anyhow::{Context, Result};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use vizdata_frame::DataFrame;

/// Write `frame` to a single Parquet file at `path`.
pub fn write_frame(path: &Path, frame: &DataFrame) -> Result<()> {
    let batch = frame
        .to_record_batch()
        .context("Failed to convert frame to record batch")?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create parquet file: {:?}", path))?;

    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
        .context("Failed to create Parquet writer")?;
    writer.write(&batch).context("Failed to write record batch")?;
    writer.close().context("Failed to close Parquet writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{long_frame, wide_frame};
    use crate::rng::fixture_rng;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    #[test]
    fn test_write_and_read_long_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.parquet");

        let frame = long_frame(&mut fixture_rng()).unwrap();
        write_frame(&path, &frame).unwrap();

        let file = File::open(&path).unwrap();
        let mut reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let batch = reader.next().unwrap().unwrap();

        // Default index is dropped on export: nine data columns survive.
        assert_eq!(batch.num_rows(), 100);
        assert_eq!(batch.num_columns(), 9);
    }

    #[test]
    fn test_wide_frame_keeps_named_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.parquet");

        let frame = wide_frame(&mut fixture_rng()).unwrap();
        write_frame(&path, &frame).unwrap();

        let file = File::open(&path).unwrap();
        let mut reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let batch = reader.next().unwrap().unwrap();

        assert_eq!(batch.num_rows(), 20);
        assert_eq!(batch.num_columns(), 4);
        assert_eq!(batch.schema().field(0).name(), "wide_index");
    }
}
