pub mod median;
pub mod median_of_medians;
pub mod partition;
pub mod pivot;
pub mod quickselect;

// Re-export selection algorithms with descriptive names
pub use median::median;
pub use median_of_medians::{median_of_medians, MedianOfMedians};
pub use partition::{dnf_partition, hoare_partition, PartitionScheme};
pub use pivot::{PivotSelector, RandomPivot};
pub use quickselect::{select_deterministic, select_random, select_random_with_rng, select_with};
