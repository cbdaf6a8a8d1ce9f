//! Labeled tabular substrate for deterministic fixture data.
//!
//! This crate provides the minimum a fixture generator needs to express
//! "the same logical data in many physical shapes": integer row labels,
//! typed nullable columns, labeled series, and an insertion-ordered frame,
//! plus conversion to Arrow record batches for export.
//!
//! It is deliberately not a dataframe library: no joins, no arithmetic, no
//! IO beyond Arrow interchange. Values go in once and come back out in a
//! different container.

pub mod arrow;
pub mod column;
pub mod error;
pub mod frame;
pub mod index;
pub mod series;

pub use column::{Categorical, Column, DType, Value};
pub use error::FrameError;
pub use frame::DataFrame;
pub use index::Index;
pub use series::Series;
