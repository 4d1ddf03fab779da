/// Collections and sequence helpers shared across layers
///
/// - merge_sort: stable, panic-free merge sort over an index permutation

pub mod merge_sort;

pub use merge_sort::{apply_permutation, merge_sort_by, sorted_permutation};
