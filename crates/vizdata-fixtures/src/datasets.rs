//! Canonical logical datasets.
//!
//! Each builder draws from the caller's source in a fixed internal order, so
//! with the same seed every regenerated dataset is identical, draw for draw.
//! Shape variants in [`crate::shapes`] re-containerize these without drawing.

use crate::draw::{choice_vec, normal_vec, rounded_uniform_vec};
use chrono::{NaiveDate, NaiveDateTime};
use rand_chacha::ChaCha8Rng;
use vizdata_frame::{Categorical, Column, DataFrame, FrameError, Index, Series};

/// Row count of the long and repeated-measures tables.
pub const LONG_ROWS: usize = 100;

/// Row count of the wide table (the 10..50-by-2 index).
pub const WIDE_ROWS: usize = 20;

/// The constant timestamp repeated down the long table's `t` column.
pub fn constant_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2005, 2, 25)
        .expect("valid calendar date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time of day")
}

/// A 20x3 table of standard normals.
///
/// Columns "a", "b", "c"; row index 10, 12, .., 48 named "wide_index". The
/// matrix is drawn row-major: row i fills (a, b, c) before row i+1 starts.
pub fn wide_frame(rng: &mut ChaCha8Rng) -> Result<DataFrame, FrameError> {
    let index = Index::stepped(10, 50, 2).with_name("wide_index");
    let names = ["a", "b", "c"];
    let flat = normal_vec(rng, index.len() * names.len());

    let columns = names
        .iter()
        .enumerate()
        .map(|(offset, name)| {
            let values: Vec<f64> = flat.iter().skip(offset).step_by(names.len()).copied().collect();
            ((*name).to_string(), Column::from_f64(values))
        })
        .collect();

    DataFrame::new(index, columns)
}

/// The 100-row mixed-type table.
///
/// Drawn column at a time, in declaration order: `x` uniform 0-20 rounded to
/// int, `y` standard normal, `a` from {a,b,c}, `b` from {m,n,o,p}, `c` from
/// {0,1}, `t` a constant timestamp (no draw), `s` from {2,4,8}, `f` from
/// {0.2,0.3}. `s_cat` is a categorical-typed copy of `s`, also drawing
/// nothing.
pub fn long_frame(rng: &mut ChaCha8Rng) -> Result<DataFrame, FrameError> {
    let n = LONG_ROWS;
    let x = rounded_uniform_vec(rng, 0.0, 20.0, n);
    let y = normal_vec(rng, n);
    let a = choice_vec(rng, &["a", "b", "c"], n);
    let b = choice_vec(rng, &["m", "n", "o", "p"], n);
    let c = choice_vec(rng, &[0i64, 1], n);
    let s = choice_vec(rng, &[2i64, 4, 8], n);
    let f = choice_vec(rng, &[0.2, 0.3], n);

    let mut frame = DataFrame::new(
        Index::default_range(n),
        vec![
            ("x".to_string(), Column::from_i64(x)),
            ("y".to_string(), Column::from_f64(y)),
            ("a".to_string(), Column::from_strs(&a)),
            ("b".to_string(), Column::from_strs(&b)),
            ("c".to_string(), Column::from_i64(c)),
            ("t".to_string(), Column::timestamp_constant(constant_timestamp(), n)),
            ("s".to_string(), Column::from_i64(s.clone())),
            ("f".to_string(), Column::from_f64(f)),
        ],
    )?;
    frame.push_column("s_cat", Column::Categorical(Categorical::from_ints(&s)))?;
    Ok(frame)
}

/// The 100-row repeated-measures table.
///
/// `x` is two concatenated ascending half-ranges (the same 50 measurement
/// points twice); `u` marks which repetition a row belongs to.
pub fn repeated_frame(rng: &mut ChaCha8Rng) -> Result<DataFrame, FrameError> {
    let n = LONG_ROWS;
    let half = (n / 2) as i64;
    let x: Vec<i64> = (0..half).chain(0..half).collect();
    let y = normal_vec(rng, n);
    let a = choice_vec(rng, &["a", "b", "c"], n);
    let u: Vec<i64> = std::iter::repeat(0)
        .take(n / 2)
        .chain(std::iter::repeat(1).take(n - n / 2))
        .collect();

    DataFrame::new(
        Index::default_range(n),
        vec![
            ("x".to_string(), Column::from_i64(x)),
            ("y".to_string(), Column::from_f64(y)),
            ("a".to_string(), Column::from_strs(&a)),
            ("u".to_string(), Column::from_i64(u)),
        ],
    )
}

/// A single labeled series: 20 standard normals named "s" on index 10..30
/// named "t".
pub fn flat_series(rng: &mut ChaCha8Rng) -> Result<Series, FrameError> {
    let index = Index::stepped(10, 30, 1).with_name("t");
    let values = normal_vec(rng, index.len());
    Series::from_f64("s", index, values)
}

/// Two normal series of deliberately different lengths and index offsets.
///
/// "a" holds 20 values on index 0..20; "b" holds 10 values on index 5..15.
/// The partial overlap exercises index alignment/union in consumers.
pub fn wide_series_list(rng: &mut ChaCha8Rng) -> Result<Vec<Series>, FrameError> {
    let a = Series::from_f64("a", Index::stepped(0, 20, 1), normal_vec(rng, 20))?;
    let b = Series::from_f64("b", Index::stepped(5, 15, 1), normal_vec(rng, 10))?;
    Ok(vec![a, b])
}
