//! Precondition checks shared by the tabulation routines.
//!
//! Every public routine accepts any primitive integer type and converts its
//! inputs to `usize` table coordinates here, rejecting negative values and
//! values that cannot index a table.

use crate::cs::error::{Error, Result};
use num_traits::PrimInt;
use std::fmt::Display;

/// Converts a single non-negative value into a table coordinate.
pub(crate) fn to_index<T>(value: T, name: &'static str, index: Option<usize>) -> Result<usize>
where
    T: PrimInt + Display,
{
    if value < T::zero() {
        return Err(Error::NegativeValue {
            name,
            index,
            value: value.to_string(),
        });
    }
    value
        .to_usize()
        .ok_or_else(|| Error::too_large(value.to_u128().unwrap_or(u128::MAX)))
}

/// Validates a target amount or sum.
pub(crate) fn target<T>(value: T) -> Result<usize>
where
    T: PrimInt + Display,
{
    to_index(value, "target", None)
}

/// Validates coin denominations. Coins must be strictly positive.
pub(crate) fn denominations<T>(coins: &[T]) -> Result<Vec<usize>>
where
    T: PrimInt + Display,
{
    coins
        .iter()
        .enumerate()
        .map(|(i, &coin)| match to_index(coin, "coin denomination", Some(i))? {
            0 => Err(Error::InvalidInput(format!(
                "coin denomination at index {i} must be positive"
            ))),
            value => Ok(value),
        })
        .collect()
}

/// Validates item weights. Zero weights are allowed.
pub(crate) fn weights<T>(items: &[T]) -> Result<Vec<usize>>
where
    T: PrimInt + Display,
{
    items
        .iter()
        .enumerate()
        .map(|(i, &item)| to_index(item, "item", Some(i)))
        .collect()
}

/// Sum of validated weights, failing instead of wrapping.
pub(crate) fn total(weights: &[usize]) -> Result<usize> {
    weights.iter().try_fold(0_usize, |acc, &w| {
        acc.checked_add(w)
            .ok_or_else(|| Error::too_large(acc as u128 + w as u128))
    })
}

/// Largest number of `C` cells a single buffer can hold.
pub(crate) fn max_cells<C>() -> usize {
    isize::MAX as usize / std::mem::size_of::<C>().max(1)
}

/// Shape `(items + 1, target + 1)` of a tabulation grid.
///
/// Fails when the grid holds more than `max_cells` cells, so callers pass
/// the capacity of the buffer backing their grid.
pub(crate) fn grid_shape(items: usize, target: usize, max_cells: usize) -> Result<(usize, usize)> {
    let rows = items as u128 + 1;
    let cols = target as u128 + 1;
    let cells = rows.checked_mul(cols).unwrap_or(u128::MAX);
    if cells > max_cells as u128 {
        return Err(Error::InputTooLarge {
            length: cells,
            max_length: max_cells as u128,
        });
    }
    Ok((rows as usize, cols as usize))
}
