use std::collections::HashSet;

use exact_cover::coverings;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn as_sets(solutions: impl Iterator<Item = Vec<std::rc::Rc<Vec<i32>>>>) -> Vec<Vec<Vec<i32>>> {
    solutions
        .map(|tuple| {
            let mut rows: Vec<Vec<i32>> = tuple.iter().map(|rc| (**rc).clone()).collect();
            rows.sort();
            rows
        })
        .collect()
}

#[test]
fn empty_collection_yields_one_empty_cover() {
    let solutions: Vec<Vec<std::rc::Rc<Vec<i32>>>> = coverings::<Vec<i32>, i32>(vec![]).collect();
    assert_eq!(solutions, vec![Vec::new()]);
}

#[test]
fn single_subset_covers_itself() {
    let solutions = as_sets(coverings(vec![vec![1, 2, 3]]));
    assert_eq!(solutions, vec![vec![vec![1, 2, 3]]]);
}

#[test]
fn two_singletons_and_their_union_both_cover() {
    let solutions = as_sets(coverings(vec![vec![1], vec![2], vec![1, 2]]));
    assert_eq!(solutions, vec![vec![vec![1], vec![2]], vec![vec![1, 2]]]);
}

#[test]
fn knuths_canonical_instance_has_exactly_one_cover() {
    let a = vec![1, 4, 7];
    let b = vec![1, 4];
    let c = vec![4, 5, 7];
    let d = vec![3, 5, 6];
    let e = vec![2, 3, 6, 7];
    let f = vec![2, 7];
    let solutions = as_sets(coverings(vec![a, b.clone(), c, d.clone(), e, f.clone()]));

    assert_eq!(solutions.len(), 1);
    let mut expected = vec![b, d, f];
    expected.sort();
    assert_eq!(solutions[0], expected);
}

#[test]
fn duplicate_subsets_each_yield_their_own_solution() {
    let solutions: Vec<Vec<std::rc::Rc<Vec<i32>>>> =
        coverings(vec![vec![1], vec![1]]).collect();
    assert_eq!(solutions.len(), 2);
    // Each solution references a distinct input object, in input order.
    assert!(std::rc::Rc::ptr_eq(&solutions[0][0], &solutions[0][0]));
    assert_ne!(
        std::rc::Rc::as_ptr(&solutions[0][0]),
        std::rc::Rc::as_ptr(&solutions[1][0])
    );
}

#[test]
fn disjoint_pair_of_subsets_covers_their_union() {
    let solutions = as_sets(coverings(vec![vec![1, 2], vec![3, 4]]));
    assert_eq!(solutions, vec![vec![vec![1, 2], vec![3, 4]]]);
}

#[test]
fn dropping_a_partially_drained_iterator_does_not_panic() {
    let mut solutions = coverings(vec![vec![1], vec![2], vec![1, 2]]);
    assert!(solutions.next().is_some());
    drop(solutions);
}

#[test]
fn exhausted_iterator_keeps_returning_none() {
    let mut solutions = coverings(vec![vec![1]]);
    assert!(solutions.next().is_some());
    assert!(solutions.next().is_none());
    assert!(solutions.next().is_none());
}

#[test]
fn duplicate_elements_within_one_subset_are_deduplicated_not_rejected() {
    // [1, 1, 2] touches columns {1, 2}; this must build and solve exactly
    // as if the subset had been [1, 2].
    let solutions = as_sets(coverings(vec![vec![1, 1, 2]]));
    assert_eq!(solutions, vec![vec![vec![1, 1, 2]]]);
}

/// Every solution must be sound: the union of its rows is exactly the
/// universe implied by the input, and the rows are pairwise disjoint.
fn assert_sound(universe: &HashSet<i32>, subsets: &[Vec<i32>], solution: &[Vec<i32>]) {
    let mut seen = HashSet::new();
    for row in solution {
        for x in row {
            assert!(universe.contains(x), "row element {x} not in universe");
            assert!(seen.insert(*x), "element {x} covered twice in one solution");
        }
    }
    assert_eq!(&seen, universe, "solution does not cover the whole universe");
    let _ = subsets;
}

#[test]
fn randomized_instances_are_always_sound_and_complete_by_brute_force() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..200 {
        let universe_size = rng.gen_range(1..=6);
        let universe: Vec<i32> = (1..=universe_size).collect();
        let universe_set: HashSet<i32> = universe.iter().copied().collect();

        let subset_count = rng.gen_range(1..=8);
        let mut subsets = Vec::new();
        for _ in 0..subset_count {
            let mut row = Vec::new();
            for &x in &universe {
                if rng.gen_bool(0.4) {
                    row.push(x);
                }
            }
            subsets.push(row);
        }

        let found = as_sets(coverings(subsets.clone()));
        for solution in &found {
            assert_sound(&universe_set, &subsets, solution);
        }

        let expected = brute_force_exact_covers(&universe_set, &subsets);
        let mut found_sorted = found;
        found_sorted.sort();
        let mut expected_sorted = expected;
        expected_sorted.sort();
        assert_eq!(found_sorted, expected_sorted);
    }
}

/// Independent reference implementation: try every subset of `subsets` and
/// keep the ones that partition the universe exactly.
fn brute_force_exact_covers(universe: &HashSet<i32>, subsets: &[Vec<i32>]) -> Vec<Vec<Vec<i32>>> {
    let n = subsets.len();
    let mut covers = Vec::new();
    for mask in 0u32..(1 << n) {
        let mut seen = HashSet::new();
        let mut ok = true;
        let mut chosen = Vec::new();
        for (i, subset) in subsets.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            for x in subset {
                if !seen.insert(*x) {
                    ok = false;
                }
            }
            chosen.push(subset.clone());
        }
        if ok && &seen == universe {
            chosen.sort();
            covers.push(chosen);
        }
    }
    covers
}
