//! Property tests for the capture resolver (pure domain).
//!
//! Properties tested:
//! - An exact value match suppresses every multi-card option
//! - Without an exact match, every option sums exactly to the played value
//! - No two options reference the same set of table positions
//! - The search agrees with a brute-force subset enumeration

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::captures::possible_captures;
use crate::domain::test_gens;

proptest! {
    #[test]
    fn exact_matches_dominate(
        table in test_gens::table(10),
        value in test_gens::played_value(),
    ) {
        let options = possible_captures(value, &table);
        let exact_count = table.iter().filter(|c| c.value() == value).count();
        if exact_count > 0 {
            prop_assert_eq!(options.len(), exact_count);
            for opt in &options {
                prop_assert_eq!(opt.indices.len(), 1);
                prop_assert_eq!(table[opt.indices[0]].value(), value);
            }
        }
    }

    #[test]
    fn sums_hit_the_target_exactly(
        table in test_gens::table(10),
        value in test_gens::played_value(),
    ) {
        prop_assume!(table.iter().all(|c| c.value() != value));
        let options = possible_captures(value, &table);
        for opt in &options {
            let sum: u32 = opt.indices.iter().map(|&i| u32::from(table[i].value())).sum();
            prop_assert_eq!(sum, u32::from(value));
            prop_assert!(opt.indices.iter().all(|&i| i < table.len()));
            prop_assert!(opt.indices.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn no_two_options_share_a_position_set(
        table in test_gens::table(10),
        value in test_gens::played_value(),
    ) {
        let options = possible_captures(value, &table);
        let mut seen: HashSet<Vec<usize>> = HashSet::new();
        for opt in options {
            prop_assert!(seen.insert(opt.indices), "duplicate position set");
        }
    }

    #[test]
    fn sum_search_agrees_with_brute_force(
        table in test_gens::table(8),
        value in test_gens::played_value(),
    ) {
        prop_assume!(table.iter().all(|c| c.value() != value));
        let got: HashSet<Vec<usize>> = possible_captures(value, &table)
            .into_iter()
            .map(|o| o.indices)
            .collect();

        let mut expected: HashSet<Vec<usize>> = HashSet::new();
        for mask in 1u32..(1 << table.len()) {
            let indices: Vec<usize> =
                (0..table.len()).filter(|i| mask & (1 << i) != 0).collect();
            let sum: u32 = indices.iter().map(|&i| u32::from(table[i].value())).sum();
            if sum == u32::from(value) {
                expected.insert(indices);
            }
        }
        prop_assert_eq!(got, expected);
    }
}
