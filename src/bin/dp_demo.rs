use std::error::Error;

use tabulation::dynamic::{
    can_partition_equally, count_change_ways, count_subsets_with_sum, is_subset_sum,
    min_coins_for_change, min_subset_sum_difference,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("Minimum coins");
    for (coins, amount) in [(vec![1, 2, 5], 6), (vec![2, 5, 10], 6), (vec![5, 10], 6)] {
        match min_coins_for_change(&coins, amount)? {
            Some(count) => println!("  {coins:?} -> {amount}: {count}"),
            None => println!("  {coins:?} -> {amount}: unreachable"),
        }
    }

    println!("Ways to make change");
    let coins = [1, 2, 5];
    println!("  {coins:?} -> 5: {}", count_change_ways(&coins, 5)?);

    println!("Subset sums");
    let items = [3, 34, 4, 12, 5, 2];
    println!("  {items:?} reaches 9: {}", is_subset_sum(&items, 9)?);

    let items = [12, 5, 7, 4, 4];
    println!("  {items:?} splits equally: {}", can_partition_equally(&items)?);
    println!(
        "  {items:?} subsets summing to 12: {}",
        count_subsets_with_sum(&items, 12)?
    );

    let items = [12, 5, 7, 4, 4, 1];
    println!(
        "  {items:?} minimum difference: {}",
        min_subset_sum_difference(&items)?
    );

    Ok(())
}
