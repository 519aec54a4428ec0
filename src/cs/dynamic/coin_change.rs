//! Coin change with an unlimited supply of every denomination.
//!
//! Both routines tabulate a `(coins + 1) x (amount + 1)` grid where cell
//! `(i, j)` describes amount `j` made from the first `i` denominations.
//! The "include" branch reads from the *same* row, which is what lets a
//! denomination be used more than once.

use super::input;
use crate::cs::error::{Error, Result};
use log::{debug, trace};
use ndarray::Array2;
use num_traits::{CheckedAdd, One, PrimInt, Zero};
use std::fmt::Display;

/// Computes the minimum number of coins needed to form the target `amount`.
///
/// This is the "unbounded" variant: each denomination can be used any number
/// of times. Returns `Ok(None)` if no combination of `coins` sums exactly to
/// `amount`.
///
/// # Errors
///
/// Fails if a denomination is zero or negative, or if `amount` is negative.
///
/// # Examples
///
/// ```
/// use tabulation::dynamic::min_coins_for_change;
///
/// // 5 + 1
/// assert_eq!(min_coins_for_change(&[1, 2, 5], 6).unwrap(), Some(2));
///
/// // Impossible to form 6 from [5, 10]
/// assert_eq!(min_coins_for_change(&[5, 10], 6).unwrap(), None);
/// ```
pub fn min_coins_for_change<T>(coins: &[T], amount: T) -> Result<Option<usize>>
where
    T: PrimInt + Display,
{
    let denominations = input::denominations(coins)?;
    let amount = input::target(amount)?;

    let grid = min_coins_grid(&denominations, amount)?;
    let fewest = grid[[denominations.len(), amount]];

    trace!("minimum coins for amount {amount}: {fewest:?}");
    Ok(fewest)
}

/// Returns one selection of coins achieving the minimum count for `amount`.
///
/// The coins are listed from the last denomination to the first. Returns
/// `Ok(None)` when the amount is unreachable.
///
/// # Examples
///
/// ```
/// use tabulation::dynamic::coins_for_change;
///
/// assert_eq!(coins_for_change(&[2, 5, 10], 6).unwrap(), Some(vec![2, 2, 2]));
/// assert_eq!(coins_for_change(&[5, 10], 6).unwrap(), None);
/// ```
pub fn coins_for_change<T>(coins: &[T], amount: T) -> Result<Option<Vec<T>>>
where
    T: PrimInt + Display,
{
    let denominations = input::denominations(coins)?;
    let amount = input::target(amount)?;
    let grid = min_coins_grid(&denominations, amount)?;

    let mut i = denominations.len();
    let mut j = amount;
    if grid[[i, j]].is_none() {
        return Ok(None);
    }

    // Every visited cell is reachable, so row 0 is only hit once j == 0.
    let mut selection = Vec::new();
    while j > 0 {
        let coin = denominations[i - 1];
        let current = grid[[i, j]];
        if coin <= j && grid[[i, j - coin]].map(|count| count + 1) == current {
            selection.push(coins[i - 1]);
            j -= coin;
        } else {
            i -= 1;
        }
    }

    Ok(Some(selection))
}

/// Computes the number of distinct ways to form `amount` using `coins`.
///
/// Each denomination can be used any number of times and the order of the
/// coins does not matter, so `[1, 2]` and `[2, 1]` are the same way.
///
/// # Errors
///
/// Besides the input checks of [`min_coins_for_change`], fails with
/// [`Error::CountOverflow`] if the count does not fit in a `u128`.
///
/// # Examples
///
/// ```
/// use tabulation::dynamic::count_change_ways;
///
/// // There are 4 ways to make 5 using [1,2,5]:
/// //   1) 1+1+1+1+1
/// //   2) 1+1+1+2
/// //   3) 1+2+2
/// //   4) 5
/// assert_eq!(count_change_ways(&[1, 2, 5], 5).unwrap(), 4);
/// ```
pub fn count_change_ways<T>(coins: &[T], amount: T) -> Result<u128>
where
    T: PrimInt + Display,
{
    let denominations = input::denominations(coins)?;
    let amount = input::target(amount)?;
    count_ways_grid(&denominations, amount)
}

/// Arbitrary-precision version of [`count_change_ways`].
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use tabulation::dynamic::count_change_ways_exact;
///
/// assert_eq!(count_change_ways_exact(&[1, 2, 5], 5).unwrap(), BigUint::from(4_u32));
/// ```
#[cfg(feature = "bigint")]
pub fn count_change_ways_exact<T>(coins: &[T], amount: T) -> Result<num_bigint::BigUint>
where
    T: PrimInt + Display,
{
    let denominations = input::denominations(coins)?;
    let amount = input::target(amount)?;
    count_ways_grid(&denominations, amount)
}

/// Fills the minimum-coins grid. `None` marks amounts that the first `i`
/// denominations cannot reach.
fn min_coins_grid(coins: &[usize], amount: usize) -> Result<Array2<Option<usize>>> {
    let (rows, cols) =
        input::grid_shape(coins.len(), amount, input::max_cells::<Option<usize>>())?;
    debug!("tabulating minimum coins on a {rows}x{cols} grid");

    // Row 0: no coins, so every positive amount stays unreachable.
    let mut grid = Array2::from_elem((rows, cols), None);
    for i in 0..rows {
        grid[[i, 0]] = Some(0);
    }

    for i in 1..rows {
        let coin = coins[i - 1];
        for j in 1..cols {
            grid[[i, j]] = if coin > j {
                grid[[i - 1, j]]
            } else {
                let include = grid[[i, j - coin]].map(|count| count + 1);
                fewer(include, grid[[i - 1, j]])
            };
        }
    }

    Ok(grid)
}

fn fewer(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Fills the combination-count grid and returns its bottom-right cell.
fn count_ways_grid<C>(coins: &[usize], amount: usize) -> Result<C>
where
    C: Clone + Zero + One + CheckedAdd,
{
    let (rows, cols) = input::grid_shape(coins.len(), amount, input::max_cells::<C>())?;
    debug!("counting change combinations on a {rows}x{cols} grid");

    let mut grid: Array2<C> = Array2::zeros((rows, cols));
    // Exactly one way to make zero: take nothing.
    for i in 0..rows {
        grid[[i, 0]] = C::one();
    }

    for i in 1..rows {
        let coin = coins[i - 1];
        for j in 1..cols {
            let cell = if j >= coin {
                grid[[i, j - coin]]
                    .checked_add(&grid[[i - 1, j]])
                    .ok_or(Error::CountOverflow { rows, cols })?
            } else {
                grid[[i - 1, j]].clone()
            };
            grid[[i, j]] = cell;
        }
    }

    trace!("change combinations tabulated for amount {amount}");
    Ok(grid[[rows - 1, cols - 1]].clone())
}
