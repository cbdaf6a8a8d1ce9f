//! Physical-shape variants of the canonical datasets.
//!
//! Every conversion re-labels or re-containerizes existing values; none draws
//! from a random source, so all variants built from one dataset stay
//! value-equivalent. Mappings are ordered pair-lists keyed by each series'
//! own label, iterating in generation order.

use vizdata_frame::{Column, DType, DataFrame, FrameError, Series};

/// Row-major value matrix of a homogeneous float frame, labels stripped.
///
/// Missing entries surface as NaN; a non-float column is a dtype error.
pub fn wide_matrix(frame: &DataFrame) -> Result<Vec<Vec<f64>>, FrameError> {
    let mut rows: Vec<Vec<f64>> = (0..frame.num_rows())
        .map(|_| Vec::with_capacity(frame.num_columns()))
        .collect();

    for (name, column) in frame.columns() {
        let values = float_entries(name, column)?;
        for (row, value) in values.iter().enumerate() {
            rows[row].push(value.unwrap_or(f64::NAN));
        }
    }
    Ok(rows)
}

/// Unlabeled values of a float series.
pub fn series_values(series: &Series) -> Result<Vec<f64>, FrameError> {
    let name = series.name().unwrap_or("series");
    let values = float_entries(name, series.column())?;
    Ok(values.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Plain value vectors for each series, lengths preserved.
pub fn list_of_value_vecs(series_list: &[Series]) -> Result<Vec<Vec<f64>>, FrameError> {
    series_list.iter().map(series_values).collect()
}

/// Mapping keyed by each series' own label.
pub fn series_map(series_list: &[Series]) -> Result<Vec<(String, Series)>, FrameError> {
    series_list
        .iter()
        .map(|series| {
            let name = series.name().ok_or(FrameError::UnnamedSeries)?;
            Ok((name.to_string(), series.clone()))
        })
        .collect()
}

/// Mapping from series label to plain values.
pub fn value_map(series_list: &[Series]) -> Result<Vec<(String, Vec<f64>)>, FrameError> {
    series_list
        .iter()
        .map(|series| {
            let name = series.name().ok_or(FrameError::UnnamedSeries)?;
            Ok((name.to_string(), series_values(series)?))
        })
        .collect()
}

/// Column-name to column-values projection of a frame, no value transform.
pub fn frame_columns(frame: &DataFrame) -> Vec<(String, Column)> {
    frame.columns().to_vec()
}

fn float_entries<'a>(
    name: &str,
    column: &'a Column,
) -> Result<&'a [Option<f64>], FrameError> {
    column.f64_values().ok_or_else(|| FrameError::DTypeMismatch {
        column: name.to_string(),
        expected: DType::Float64,
        actual: column.dtype(),
    })
}
