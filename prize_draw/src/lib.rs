mod config;
pub mod builder;
pub mod manual;
pub mod quick_start;
pub mod random;
pub mod reveal;

use log::{debug, info};

pub use crate::config::*;
use crate::random::RandomSource;

/// Shuffles the items in place (Fisher–Yates).
///
/// Every permutation is equally likely, provided that the random source is
/// unbiased.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i);
        items.swap(i, j);
    }
}

/// Runs a draw: assigns winners to each tier so that nobody wins twice.
///
/// Arguments:
/// * `participants` the entrants of the draw. Duplicated names are distinct entrants.
/// * `tiers` the prizes, in the order in which they are allocated.
/// * `rng` the source of randomness.
///
/// The participants are shuffled once and the tiers take consecutive slices
/// of the shuffled list. If the tiers require more winners than there are
/// participants, the draw fails before any randomness is consumed.
///
/// ```
/// use prize_draw::{allocate, Tier};
/// use prize_draw::random::RngSource;
///
/// let participants: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
/// let tiers = vec![Tier::new("1st", 1), Tier::new("2nd", 2)];
/// let res = allocate(&participants, &tiers, &mut RngSource::seeded(1))?;
/// assert_eq!(res.get("2nd").map(|w| w.len()), Some(2));
/// # Ok::<(), prize_draw::DrawErrors>(())
/// ```
pub fn allocate<R: RandomSource + ?Sized>(
    participants: &[String],
    tiers: &[Tier],
    rng: &mut R,
) -> Result<DrawResult, DrawErrors> {
    let requested = total_count(tiers);
    if requested > participants.len() {
        return Err(DrawErrors::CapacityExceeded {
            requested,
            available: participants.len(),
        });
    }
    info!(
        "allocate: {} participants, {} tiers, {} winners",
        participants.len(),
        tiers.len(),
        requested
    );

    let mut shuffled: Vec<String> = participants.to_vec();
    shuffle(&mut shuffled, rng);

    let mut allocations: Vec<(String, Vec<String>)> = Vec::with_capacity(tiers.len());
    let mut cursor = 0;
    for tier in tiers {
        let winners = shuffled[cursor..cursor + tier.count].to_vec();
        debug!("allocate: tier {:?} -> {:?}", tier.name, winners);
        allocations.push((tier.name.clone(), winners));
        cursor += tier.count;
    }
    Ok(DrawResult { allocations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;
    use std::collections::HashMap;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn names(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    // Always picks the lowest index.
    struct Lowest;

    impl RandomSource for Lowest {
        fn next_index(&mut self, _upper_inclusive: usize) -> usize {
            0
        }
    }

    // Always picks the current index, leaving the order untouched.
    struct Identity;

    impl RandomSource for Identity {
        fn next_index(&mut self, upper_inclusive: usize) -> usize {
            upper_inclusive
        }
    }

    fn check_partition(participants: &[String], tiers: &[Tier], res: &DrawResult) {
        assert_eq!(res.len(), tiers.len());
        let mut remaining: Vec<String> = participants.to_vec();
        for (tier, (name, winners)) in tiers.iter().zip(res.iter()) {
            assert_eq!(tier.name, name);
            assert_eq!(tier.count, winners.len());
            for w in winners {
                // Each winner consumes one entry, so duplicated names may win once per entry.
                let pos = remaining.iter().position(|p| p == w).unwrap();
                remaining.swap_remove(pos);
            }
        }
        assert_eq!(
            remaining.len(),
            participants.len() - tiers.iter().map(|t| t.count).sum::<usize>()
        );
    }

    #[test]
    fn five_participants_two_tiers() {
        init();
        let participants = names(&["A", "B", "C", "D", "E"]);
        let tiers = vec![Tier::new("1st", 1), Tier::new("2nd", 2)];
        for seed in 0..50 {
            let res = allocate(&participants, &tiers, &mut RngSource::seeded(seed)).unwrap();
            let first = res.get("1st").unwrap();
            let second = res.get("2nd").unwrap();
            assert_eq!(first.len(), 1);
            assert_eq!(second.len(), 2);
            assert!(participants.contains(&first[0]));
            assert_ne!(second[0], second[1]);
            assert!(!second.contains(&first[0]));
            check_partition(&participants, &tiers, &res);
        }
    }

    #[test]
    fn capacity_exceeded() {
        let participants = names(&["A", "B", "C"]);
        let tiers = vec![Tier::new("1st", 1), Tier::new("2nd", 3)];
        let res = allocate(&participants, &tiers, &mut RngSource::seeded(0));
        assert_eq!(
            res,
            Err(DrawErrors::CapacityExceeded {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn overflowing_counts() {
        let participants = names(&["A"]);
        let tiers = vec![Tier::new("x", usize::MAX), Tier::new("y", 2)];
        let res = allocate(&participants, &tiers, &mut RngSource::seeded(0));
        assert_eq!(
            res,
            Err(DrawErrors::CapacityExceeded {
                requested: usize::MAX,
                available: 1
            })
        );
    }

    #[test]
    fn capacity_checked_before_shuffling() {
        struct Forbidden;
        impl RandomSource for Forbidden {
            fn next_index(&mut self, _upper_inclusive: usize) -> usize {
                panic!("the random source must not be used");
            }
        }
        let res = allocate(&names(&["A"]), &[Tier::new("x", 2)], &mut Forbidden);
        assert!(matches!(res, Err(DrawErrors::CapacityExceeded { .. })));
    }

    #[test]
    fn no_tiers() {
        let res = allocate(&names(&["A", "B"]), &[], &mut RngSource::seeded(0)).unwrap();
        assert!(res.is_empty());
        assert_eq!(res.total_winners(), 0);
    }

    #[test]
    fn no_participants_no_tiers() {
        let res = allocate(&[], &[], &mut RngSource::seeded(0)).unwrap();
        assert!(res.is_empty());
    }

    #[test]
    fn every_participant_wins() {
        let participants = names(&["A", "B", "C", "D"]);
        let tiers = vec![Tier::new("x", 2), Tier::new("y", 2)];
        let res = allocate(&participants, &tiers, &mut RngSource::seeded(9)).unwrap();
        let mut all: Vec<String> = res.iter().flat_map(|(_, w)| w.to_vec()).collect();
        all.sort();
        assert_eq!(all, participants);
    }

    #[test]
    fn duplicated_names_are_distinct_entrants() {
        let participants = names(&["Ann", "Ann", "Bob"]);
        let tiers = vec![Tier::new("x", 1), Tier::new("y", 2)];
        let res = allocate(&participants, &tiers, &mut RngSource::seeded(5)).unwrap();
        check_partition(&participants, &tiers, &res);
        let ann_wins = res
            .iter()
            .flat_map(|(_, w)| w.to_vec())
            .filter(|n| n == "Ann")
            .count();
        assert_eq!(ann_wins, 2);
    }

    #[test]
    fn follows_tier_order() {
        let participants = names(&["A", "B", "C", "D"]);
        let tiers = vec![Tier::new("x", 1), Tier::new("y", 2)];
        let res = allocate(&participants, &tiers, &mut Identity).unwrap();
        assert_eq!(res.get("x").unwrap(), &names(&["A"])[..]);
        assert_eq!(res.get("y").unwrap(), &names(&["B", "C"])[..]);
        assert_eq!(res.tier_names(), vec!["x", "y"]);
    }

    #[test]
    fn shuffle_swaps_from_the_back() {
        let mut xs = names(&["A", "B", "C", "D"]);
        shuffle(&mut xs, &mut Lowest);
        assert_eq!(xs, names(&["B", "C", "D", "A"]));
    }

    #[test]
    fn shuffle_small_inputs() {
        let mut empty: Vec<String> = vec![];
        shuffle(&mut empty, &mut Lowest);
        assert!(empty.is_empty());
        let mut one = names(&["A"]);
        shuffle(&mut one, &mut Lowest);
        assert_eq!(one, names(&["A"]));
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let participants: Vec<String> = (0..100).map(|i| format!("p{}", i)).collect();
        let tiers = vec![
            Tier::new("gold", 1),
            Tier::new("silver", 5),
            Tier::new("bronze", 20),
        ];
        let a = allocate(&participants, &tiers, &mut RngSource::seeded(2024)).unwrap();
        let b = allocate(&participants, &tiers, &mut RngSource::seeded(2024)).unwrap();
        assert_eq!(a, b);
        check_partition(&participants, &tiers, &a);
    }

    #[test]
    fn random_configurations() {
        let mut src = RngSource::seeded(77);
        for n in 0..30 {
            let participants: Vec<String> = (0..n).map(|i| format!("p{}", i % 7)).collect();
            let mut tiers: Vec<Tier> = Vec::new();
            let mut left = n;
            while left > 0 && tiers.len() < 4 {
                let c = 1 + src.next_index(left - 1);
                tiers.push(Tier::new(&format!("t{}", tiers.len()), c));
                left -= c;
            }
            let res = allocate(&participants, &tiers, &mut src).unwrap();
            check_partition(&participants, &tiers, &res);
        }
    }

    // Statistical smoke test: each participant lands in a tier with frequency close to count/N.
    #[test]
    fn distribution_is_roughly_uniform() {
        let participants = names(&["A", "B", "C", "D", "E"]);
        let tiers = vec![Tier::new("1st", 1), Tier::new("2nd", 2)];
        let trials = 20_000;
        let mut src = RngSource::seeded(31337);
        let mut counts: HashMap<(String, String), usize> = HashMap::new();
        for _ in 0..trials {
            let res = allocate(&participants, &tiers, &mut src).unwrap();
            for (tier, winners) in res.iter() {
                for w in winners {
                    *counts.entry((tier.to_string(), w.clone())).or_insert(0) += 1;
                }
            }
        }
        for p in participants.iter() {
            let first = counts.get(&("1st".to_string(), p.clone())).cloned().unwrap_or(0);
            let second = counts.get(&("2nd".to_string(), p.clone())).cloned().unwrap_or(0);
            assert!((3600..=4400).contains(&first), "{}: {}", p, first);
            assert!((7400..=8600).contains(&second), "{}: {}", p, second);
        }
    }
}
