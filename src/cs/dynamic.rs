//! Bottom-up dynamic programming over `(items + 1) x (target + 1)` grids.
//!
//! - Coin change with unlimited supply (minimum coins, number of ways)
//! - 0/1 subset sum (feasibility, counting, equal partition, minimum difference)

mod input;

pub mod coin_change;
pub mod subset_sum;

pub use coin_change::{coins_for_change, count_change_ways, min_coins_for_change};
pub use subset_sum::{
    can_partition_equally, count_subsets_with_sum, is_subset_sum, min_difference_partition,
    min_subset_sum_difference, subset_with_sum, Partition, SubsetSumTable,
};

#[cfg(feature = "bigint")]
pub use coin_change::count_change_ways_exact;
#[cfg(feature = "bigint")]
pub use subset_sum::count_subsets_with_sum_exact;
