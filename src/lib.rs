//! Byte-level delta between two buffers using a polynomial rolling hash
//! over fixed-size sliding windows.

pub mod binary_diff;
pub mod config;
pub mod delta_format;
pub mod error;
pub mod file_diff;
pub mod hash_table;
pub mod rolling_hash;
pub mod util;

pub use binary_diff::{compare, compute_diff};
pub use config::{DiffOptions, DEFAULT_WINDOW};
pub use delta_format::{Delta, DeltaList, DeltaStats, Operation};
pub use error::DiffError;
pub use file_diff::{diff_files, FileDiff};
pub use hash_table::HashTable;
pub use rolling_hash::{HashParams, RollingHash};
