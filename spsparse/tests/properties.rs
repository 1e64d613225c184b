use proptest::prelude::*;
use spsparse::*;

const EXTENT: usize = 6;

/// Small-valued entries on a 6x6 grid so duplicates are common
fn entries() -> impl Strategy<Value = Vec<([i32; 2], i64)>> {
    prop::collection::vec(
        ((0..EXTENT as i32, 0..EXTENT as i32), -3i64..=3)
            .prop_map(|((r, c), v)| ([r, c], v)),
        0..64,
    )
}

fn order() -> impl Strategy<Value = SortOrder<2>> {
    prop_oneof![Just(ROW_MAJOR), Just(COL_MAJOR)]
}

fn policy() -> impl Strategy<Value = DuplicatePolicy> {
    prop_oneof![
        Just(DuplicatePolicy::Add),
        Just(DuplicatePolicy::LeaveAlone),
        Just(DuplicatePolicy::Replace),
    ]
}

fn build(entries: &[([i32; 2], i64)]) -> CooArray<i32, i64, 2> {
    CooArray::from_entries([EXTENT, EXTENT], entries.iter().copied()).unwrap()
}

const CUBE: usize = 3;

fn entries3() -> impl Strategy<Value = Vec<([u32; 3], i64)>> {
    prop::collection::vec(
        (prop::array::uniform3(0..CUBE as u32), -3i64..=3),
        0..64,
    )
}

/// Every permutation of three dimensions
fn order3() -> impl Strategy<Value = SortOrder<3>> {
    prop::sample::select(vec![
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ])
    .prop_map(|dims| SortOrder::new(dims).unwrap())
}

fn build3(entries: &[([u32; 3], i64)]) -> CooArray<u32, i64, 3> {
    CooArray::from_entries([CUBE; 3], entries.iter().copied()).unwrap()
}

proptest! {
    #[test]
    fn sort_is_a_stable_permutation(entries in entries(), order in order()) {
        // Tag every record with its insertion position
        let tagged: Vec<([i32; 2], usize)> =
            entries.iter().enumerate().map(|(k, (idx, _))| (*idx, k)).collect();
        let indices: Vec<[i32; 2]> = tagged.iter().map(|t| t.0).collect();
        let perm = sort_permutation(&indices, &order);

        let mut seen = perm.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..entries.len()).collect::<Vec<_>>());

        let sorted = apply_permutation(&tagged, &perm);
        for w in sorted.windows(2) {
            let cmp = order.compare(&w[0].0, &w[1].0);
            prop_assert!(cmp != std::cmp::Ordering::Greater);
            if cmp == std::cmp::Ordering::Equal {
                prop_assert!(w[0].1 < w[1].1);
            }
        }

        let a = build(&entries).sorted(order);
        prop_assert!(order.is_sorted(a.indices()));
        prop_assert_eq!(a.len(), entries.len());
    }

    #[test]
    fn consolidate_output_is_unique(entries in entries(), policy in policy()) {
        let c = consolidate(&build(&entries), &ConsolidateConfig::new(policy)).unwrap();
        prop_assert!(c.has_unique_indices());
        let order = c.sort_order().unwrap();
        prop_assert!(order.is_sorted(c.indices()));
    }

    #[test]
    fn rank3_sort_is_stable_for_every_permutation(entries in entries3(), order in order3()) {
        let a = build3(&entries);
        let sorted = a.sorted(order);
        prop_assert_eq!(sorted.sort_order(), Some(order));
        prop_assert!(order.is_sorted(sorted.indices()));

        // Values carry insertion position so stability is observable
        let tagged = CooArray::<u32, i64, 3>::from_entries(
            [CUBE; 3],
            entries.iter().enumerate().map(|(k, (idx, _))| (*idx, k as i64)),
        )
        .unwrap()
        .sorted(order);
        for (w, v) in tagged.indices().windows(2).zip(tagged.values().windows(2)) {
            if w[0] == w[1] {
                prop_assert!(v[0] < v[1]);
            }
        }
    }

    #[test]
    fn rank3_consolidate_is_idempotent_for_every_permutation(
        entries in entries3(),
        order in order3(),
        policy in policy(),
    ) {
        let config = ConsolidateConfig::new(policy).with_eliminate_none(true);
        let once = consolidate(&build3(&entries).sorted(order), &config).unwrap();
        prop_assert_eq!(once.sort_order(), Some(order));
        prop_assert!(once.has_unique_indices());
        let twice = consolidate(&once, &config).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn consolidate_is_idempotent(
        entries in entries(),
        policy in policy(),
        order in order(),
        eliminate in any::<bool>(),
    ) {
        let config = ConsolidateConfig::new(policy).with_eliminate_none(eliminate);
        let once = consolidate(&build(&entries).sorted(order), &config).unwrap();
        let twice = consolidate(&once, &config).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn add_preserves_totals(entries in entries()) {
        let c = consolidate(&build(&entries), &ConsolidateConfig::default()).unwrap();
        let before: i64 = entries.iter().map(|e| e.1).sum();
        let after: i64 = c.values().iter().sum();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn consolidate_matches_map_merge(
        entries in entries(),
        policy in prop_oneof![Just(DuplicatePolicy::Add), Just(DuplicatePolicy::Replace)],
    ) {
        let a = build(&entries);
        let c = consolidate(&a, &ConsolidateConfig::new(policy)).unwrap();

        let mut map = SparseMap::<i32, i64, 2>::new([EXTENT, EXTENT]).unwrap();
        merge_into(&a, &mut map, policy, false).unwrap();
        prop_assert_eq!(map.len(), c.len());
        for entry in c.iter() {
            prop_assert_eq!(map.get(&entry.index), Some(entry.value));
        }
    }
}
