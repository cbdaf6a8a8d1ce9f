//! Deterministic multi-shape fixture data for chart-library tests.
//!
//! Given fixed seed labels, this crate builds canonical tabular datasets (a
//! wide numeric table, a long mixed-type table, labeled series) and
//! re-expresses each into several value-equivalent physical shapes, so a
//! plotting library's data ingestion can be tested against "the same logical
//! data in many containers".
//!
//! # Key Properties
//!
//! - **Deterministic**: a seed label fully determines every generated value,
//!   across runs and machines
//! - **Explicit seeding**: builders take the seeded source as a parameter;
//!   nothing reaches for hidden state
//! - **Value-equivalent shapes**: conversions never draw, only re-label and
//!   re-containerize
//! - **Controlled gaps**: perturbation knocks out a fixed count of entries
//!   per column, independently per column
//!
//! # Quick Start
//!
//! ```rust
//! use vizdata_fixtures::{fixture_rng, wide_frame, wide_matrix};
//!
//! let mut rng = fixture_rng();
//! let wide = wide_frame(&mut rng).unwrap();
//! let matrix = wide_matrix(&wide).unwrap();
//!
//! assert_eq!(matrix.len(), 20);
//! assert_eq!(matrix[0].len(), 3);
//! ```

pub mod datasets;
pub mod draw;
pub mod missing;
pub mod params;
pub mod parquet;
pub mod rng;
pub mod shapes;

// Re-export main entry points for convenience
pub use datasets::{
    constant_timestamp, flat_series, long_frame, repeated_frame, wide_frame, wide_series_list,
    LONG_ROWS, WIDE_ROWS,
};
pub use missing::{null_column, with_missing, MISSING_PER_COLUMN, NULL_COLUMN_LEN};
pub use params::{long_semantics, SemanticMapping};
pub use rng::{
    fixture_rng, reset_global_rng, seed_from_label, with_global_rng, FIXTURE_RNG_LABEL,
    GLOBAL_RNG_LABEL,
};
pub use shapes::{
    frame_columns, list_of_value_vecs, series_map, series_values, value_map, wide_matrix,
};
