use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tabulation::dynamic::{
    count_change_ways, is_subset_sum, min_coins_for_change, min_subset_sum_difference,
};

fn random_lists(seed: u64, count: usize) -> Vec<Vec<u32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..10);
            (0..len).map(|_| rng.gen_range(1..40)).collect()
        })
        .collect()
}

#[test]
fn test_parallel_calls_match_sequential() {
    let lists = random_lists(7, 64);

    let sequential: Vec<_> = lists
        .iter()
        .map(|list| {
            (
                min_coins_for_change(list, 97).unwrap(),
                count_change_ways(list, 97).unwrap(),
                is_subset_sum(list, 50).unwrap(),
                min_subset_sum_difference(list).unwrap(),
            )
        })
        .collect();

    let parallel: Vec<_> = lists
        .par_iter()
        .map(|list| {
            (
                min_coins_for_change(list, 97).unwrap(),
                count_change_ways(list, 97).unwrap(),
                is_subset_sum(list, 50).unwrap(),
                min_subset_sum_difference(list).unwrap(),
            )
        })
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_shuffled_coins_count_the_same() {
    let mut rng = StdRng::seed_from_u64(42);
    for mut coins in random_lists(11, 32) {
        let ways = count_change_ways(&coins, 120).unwrap();
        coins.shuffle(&mut rng);
        assert_eq!(count_change_ways(&coins, 120).unwrap(), ways);
    }
}
