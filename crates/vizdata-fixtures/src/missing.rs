//! Controlled missing-data perturbation.

use crate::draw::permutation;
use rand_chacha::ChaCha8Rng;
use vizdata_frame::{Column, DataFrame, Index, Series};

/// Nulls introduced into every column of a perturbed frame.
pub const MISSING_PER_COLUMN: usize = 10;

/// Length of the standalone all-missing column.
pub const NULL_COLUMN_LEN: usize = 20;

/// Copy `frame` and null a fresh subset of positions in every column.
///
/// The subset is drawn independently per column (a new permutation each
/// time), so a row may lose none, one, or several of its fields.
pub fn with_missing(frame: &DataFrame, rng: &mut ChaCha8Rng) -> DataFrame {
    let mut perturbed = frame.clone();
    let rows = perturbed.num_rows();
    let knockouts = MISSING_PER_COLUMN.min(rows);

    for (_, column) in perturbed.columns_mut() {
        for &row in permutation(rng, rows).iter().take(knockouts) {
            column.set_null(row);
        }
    }
    perturbed
}

/// A standalone all-missing float column on the default 0..20 index.
///
/// Unrelated to the long table; exists to exercise consumers against a
/// column that has positions but no values at all.
pub fn null_column() -> Series {
    Series::new(
        None,
        Index::default_range(NULL_COLUMN_LEN),
        Column::all_null_f64(NULL_COLUMN_LEN),
    )
    .expect("index and column lengths match")
}
