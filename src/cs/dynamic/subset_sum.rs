//! Subset sum and the partition problems built on it.
//!
//! Unlike coin change, every item may be used at most once: both branches of
//! the recurrence read from the row *above*, so row `i` only ever combines
//! item `i` with subsets of the first `i - 1` items.

use super::input;
use crate::cs::error::{Error, Result};
use bitvec::prelude::*;
use log::{debug, trace};
use ndarray::Array2;
use num_integer::Integer;
use num_traits::{CheckedAdd, One, PrimInt, Zero};
use std::fmt::Display;

/// Feasibility table for the 0/1 subset sum problem.
///
/// Cell `(i, j)` is set when some subset of the first `i` items sums to `j`.
/// The table is stored row-major in a single bit vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSumTable {
    weights: Vec<usize>,
    width: usize,
    cells: BitVec,
}

impl SubsetSumTable {
    /// Tabulates which sums up to `target` each prefix of `items` can reach.
    ///
    /// # Errors
    ///
    /// Fails if an item or the target is negative, or if the table would not
    /// fit in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabulation::dynamic::SubsetSumTable;
    ///
    /// let table = SubsetSumTable::build(&[3, 34, 4, 12, 5, 2], 9).unwrap();
    /// assert!(table.is_feasible());
    /// assert_eq!(table.get(1, 3), Some(true));
    /// assert_eq!(table.get(1, 4), Some(false));
    /// ```
    pub fn build<T>(items: &[T], target: T) -> Result<Self>
    where
        T: PrimInt + Display,
    {
        let weights = input::weights(items)?;
        let target = input::target(target)?;
        Self::from_weights(weights, target)
    }

    fn from_weights(weights: Vec<usize>, target: usize) -> Result<Self> {
        let (rows, width) =
            input::grid_shape(weights.len(), target, BitSlice::<usize, Lsb0>::MAX_BITS)?;
        debug!("tabulating subset sums on a {rows}x{width} grid");

        let mut cells = bitvec![0; rows * width];
        // The empty subset reaches zero from every row.
        for i in 0..rows {
            cells.set(i * width, true);
        }

        for i in 1..rows {
            let item = weights[i - 1];
            let above = (i - 1) * width;
            for j in 1..width {
                let exclude = cells[above + j];
                let feasible = if j < item {
                    exclude
                } else {
                    exclude || cells[above + j - item]
                };
                cells.set(i * width + j, feasible);
            }
        }

        Ok(Self {
            weights,
            width,
            cells,
        })
    }

    /// Number of items the table was built from.
    pub fn items(&self) -> usize {
        self.weights.len()
    }

    /// Largest sum the table covers.
    pub fn target(&self) -> usize {
        self.width - 1
    }

    /// Whether the first `items` items can reach `sum`, or `None` if the
    /// cell lies outside the table.
    pub fn get(&self, items: usize, sum: usize) -> Option<bool> {
        if items > self.items() || sum > self.target() {
            return None;
        }
        Some(self.cells[items * self.width + sum])
    }

    /// Whether the full item list can reach the target.
    pub fn is_feasible(&self) -> bool {
        self.cells[self.cells.len() - 1]
    }

    /// Sums up to the target reachable with the full item list, ascending.
    pub fn reachable_sums(&self) -> impl Iterator<Item = usize> + '_ {
        self.row(self.items()).iter_ones()
    }

    /// Indices of one subset of the items summing to `sum`, ascending.
    ///
    /// Returns `None` if `sum` is unreachable or outside the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabulation::dynamic::SubsetSumTable;
    ///
    /// let table = SubsetSumTable::build(&[12, 5, 7, 4, 4], 16).unwrap();
    /// assert_eq!(table.witness(16), Some(vec![0, 3]));
    /// assert_eq!(table.witness(2), None);
    /// ```
    pub fn witness(&self, sum: usize) -> Option<Vec<usize>> {
        if !self.get(self.items(), sum)? {
            return None;
        }

        // Row 0 only reaches zero, so j > 0 keeps i > 0.
        let mut indices = Vec::new();
        let mut i = self.items();
        let mut j = sum;
        while j > 0 {
            if !self.row(i - 1)[j] {
                indices.push(i - 1);
                j -= self.weights[i - 1];
            }
            i -= 1;
        }

        indices.reverse();
        Some(indices)
    }

    fn row(&self, i: usize) -> &BitSlice {
        &self.cells[i * self.width..(i + 1) * self.width]
    }
}

/// The best split of a list into two parts, as indices into the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Absolute difference between the sums of the two parts.
    pub difference: usize,
    /// Indices of the part whose sum is at most half the total.
    pub smaller: Vec<usize>,
    /// Indices of the remaining items.
    pub larger: Vec<usize>,
}

/// Decides whether some subset of `items` sums exactly to `target`.
///
/// Each item may be used at most once.
///
/// # Examples
///
/// ```
/// use tabulation::dynamic::is_subset_sum;
///
/// assert!(is_subset_sum(&[3, 34, 4, 12, 5, 2], 9).unwrap());
/// assert!(!is_subset_sum(&[3, 34, 4, 12, 5, 2], 30).unwrap());
/// ```
pub fn is_subset_sum<T>(items: &[T], target: T) -> Result<bool>
where
    T: PrimInt + Display,
{
    let feasible = SubsetSumTable::build(items, target)?.is_feasible();
    trace!("subset sum feasible: {feasible}");
    Ok(feasible)
}

/// Indices of one subset of `items` summing to `target`, if any.
pub fn subset_with_sum<T>(items: &[T], target: T) -> Result<Option<Vec<usize>>>
where
    T: PrimInt + Display,
{
    let table = SubsetSumTable::build(items, target)?;
    Ok(table.witness(table.target()))
}

/// Decides whether `items` can be split into two parts with equal sums.
///
/// # Examples
///
/// ```
/// use tabulation::dynamic::can_partition_equally;
///
/// // 12 + 4 == 5 + 7 + 4
/// assert!(can_partition_equally(&[12, 5, 7, 4, 4]).unwrap());
/// assert!(!can_partition_equally(&[1, 2, 4]).unwrap());
/// ```
pub fn can_partition_equally<T>(items: &[T]) -> Result<bool>
where
    T: PrimInt + Display,
{
    let weights = input::weights(items)?;
    let total = input::total(&weights)?;
    if total.is_odd() {
        trace!("total {total} is odd, no equal partition");
        return Ok(false);
    }

    let feasible = SubsetSumTable::from_weights(weights, total / 2)?.is_feasible();
    trace!("equal partition of total {total}: {feasible}");
    Ok(feasible)
}

/// Counts the subsets of `items` summing exactly to `target`.
///
/// Subsets are told apart by position, so equal items at different
/// positions give different subsets. The empty subset is the only one
/// counted for a zero target.
///
/// # Errors
///
/// Fails with [`Error::CountOverflow`] if the count does not fit in a
/// `u128`, besides the input checks of [`SubsetSumTable::build`].
///
/// # Examples
///
/// ```
/// use tabulation::dynamic::count_subsets_with_sum;
///
/// // {12} and {5, 7}
/// assert_eq!(count_subsets_with_sum(&[12, 5, 7, 4, 4], 12).unwrap(), 2);
/// ```
pub fn count_subsets_with_sum<T>(items: &[T], target: T) -> Result<u128>
where
    T: PrimInt + Display,
{
    let weights = input::weights(items)?;
    let target = input::target(target)?;
    count_subsets_grid(&weights, target)
}

/// Arbitrary-precision version of [`count_subsets_with_sum`].
#[cfg(feature = "bigint")]
pub fn count_subsets_with_sum_exact<T>(items: &[T], target: T) -> Result<num_bigint::BigUint>
where
    T: PrimInt + Display,
{
    let weights = input::weights(items)?;
    let target = input::target(target)?;
    count_subsets_grid(&weights, target)
}

/// Smallest possible difference between the sums of two parts of `items`.
///
/// # Examples
///
/// ```
/// use tabulation::dynamic::min_subset_sum_difference;
///
/// // 12 + 4 = 16 against 5 + 7 + 4 + 1 = 17
/// assert_eq!(min_subset_sum_difference(&[12, 5, 7, 4, 4, 1]).unwrap(), 1);
/// ```
pub fn min_subset_sum_difference<T>(items: &[T]) -> Result<usize>
where
    T: PrimInt + Display,
{
    let weights = input::weights(items)?;
    let total = input::total(&weights)?;
    let table = SubsetSumTable::from_weights(weights, total)?;

    let (difference, _) = closest_to_half(&table, total);
    trace!("minimum subset sum difference: {difference}");
    Ok(difference)
}

/// Splits `items` into two parts whose sums differ as little as possible.
///
/// # Examples
///
/// ```
/// use tabulation::dynamic::min_difference_partition;
///
/// let partition = min_difference_partition(&[1, 6, 11, 5]).unwrap();
/// assert_eq!(partition.difference, 1);
/// assert_eq!(partition.smaller, vec![2]);
/// assert_eq!(partition.larger, vec![0, 1, 3]);
/// ```
pub fn min_difference_partition<T>(items: &[T]) -> Result<Partition>
where
    T: PrimInt + Display,
{
    let weights = input::weights(items)?;
    let total = input::total(&weights)?;
    let table = SubsetSumTable::from_weights(weights, total)?;

    let (difference, sum) = closest_to_half(&table, total);
    let smaller = table.witness(sum).unwrap_or_default();

    let mut taken = bitvec![0; table.items()];
    for &index in &smaller {
        taken.set(index, true);
    }
    let larger = taken.iter_zeros().collect();

    Ok(Partition {
        difference,
        smaller,
        larger,
    })
}

/// Scans the bottom row up to half the total for the reachable sum leaving
/// the smallest difference. Returns `(difference, sum)`.
fn closest_to_half(table: &SubsetSumTable, total: usize) -> (usize, usize) {
    let half = total / 2;
    // Column 0 is always reachable, so the fallback is never taken.
    table
        .reachable_sums()
        .take_while(|&sum| sum <= half)
        .map(|sum| (total.abs_diff(2 * sum), sum))
        .min()
        .unwrap_or((total, 0))
}

/// Fills the subset-count grid and returns its bottom-right cell.
fn count_subsets_grid<C>(weights: &[usize], target: usize) -> Result<C>
where
    C: Clone + Zero + One + CheckedAdd,
{
    let (rows, cols) = input::grid_shape(weights.len(), target, input::max_cells::<C>())?;
    debug!("counting subsets on a {rows}x{cols} grid");

    let mut grid: Array2<C> = Array2::zeros((rows, cols));
    for i in 0..rows {
        grid[[i, 0]] = C::one();
    }

    for i in 1..rows {
        let item = weights[i - 1];
        for j in 1..cols {
            let cell = if j < item {
                grid[[i - 1, j]].clone()
            } else {
                grid[[i - 1, j]]
                    .checked_add(&grid[[i - 1, j - item]])
                    .ok_or(Error::CountOverflow { rows, cols })?
            };
            grid[[i, j]] = cell;
        }
    }

    trace!("subset counts tabulated for target {target}");
    Ok(grid[[rows - 1, cols - 1]].clone())
}
