pub mod common;
pub use common::*;

use proptest::prelude::*;
use std::collections::BTreeSet;
use ziptree::*;

/// Something to perform in one round of tests.
/// Indices are taken modulo the arena size.
#[derive(Clone, Debug)]
enum RoundAction {
    Insert { index: usize },
    Remove { index: usize },
    /// unzip at the key, check both halves, zip back
    Split { key: i32 },
    Find { key: i32 },
}

fn round_action_strategy() -> impl Strategy<Value = RoundAction> {
    prop_oneof![
        3 => (0..256usize).prop_map(|index| RoundAction::Insert { index }),
        2 => (0..256usize).prop_map(|index| RoundAction::Remove { index }),
        1 => (-60..60i32).prop_map(|key| RoundAction::Split { key }),
        1 => (-60..60i32).prop_map(|key| RoundAction::Find { key }),
    ]
}

fn initial_keys() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-50..50i32, 1..128)
}

/// Runs the actions against a tree and a sorted-set model of `(key, handle)`.
fn check_against_model<R: RankOracle>(
    keys: &[i32],
    actions: &[RoundAction],
    oracle: R,
) -> Result<(), TestCaseError> {
    let mut arena = arena(keys);
    let mut tree: ZipTree<ByKey, R> = ZipTree::with_oracle(oracle);
    let mut model: BTreeSet<(i32, usize)> = BTreeSet::new();

    for action in actions {
        match *action {
            RoundAction::Insert { index } => {
                let handle = index % arena.len();
                let fresh = model.insert((arena[handle].key, handle));
                prop_assert_eq!(tree.insert(&mut arena, handle), fresh);
                prop_assert!(arena[handle].by_key.is_linked());
            }
            RoundAction::Remove { index } => {
                let handle = index % arena.len();
                let present = model.remove(&(arena[handle].key, handle));
                prop_assert_eq!(tree.remove(&mut arena, handle), present);
                prop_assert_eq!(&arena[handle].by_key, &ZipLink::new());
            }
            RoundAction::Split { key } => {
                let size = tree.len(&arena);
                let right = tree.unzip(&mut arena, &key);
                prop_assert!(tree.validate(&arena).is_ok());
                prop_assert!(right.validate(&arena).is_ok());
                let left_handles = handles(&tree, &arena);
                let right_handles = handles(&right, &arena);
                prop_assert_eq!(left_handles.len() + right_handles.len(), size);
                prop_assert!(left_handles.iter().all(|&h| arena[h].key <= key));
                prop_assert!(right_handles.iter().all(|&h| arena[h].key > key));
                tree.zip(&mut arena, right);
            }
            RoundAction::Find { key } => {
                let expected = model.iter().any(|&(k, _)| k == key);
                match tree.find(&arena, &key) {
                    Some(handle) => prop_assert_eq!(arena[handle].key, key),
                    None => prop_assert!(!expected),
                }
            }
        }

        if let Err(err) = tree.validate(&arena) {
            return Err(TestCaseError::fail(format!("invalid tree: {}", err)));
        }
        let expected: Vec<usize> = model.iter().map(|&(_, handle)| handle).collect();
        prop_assert_eq!(handles(&tree, &arena), expected);
    }

    prop_assert_eq!(tree.min(&arena), model.iter().next().map(|&(_, h)| h));
    prop_assert_eq!(tree.max(&arena), model.iter().next_back().map(|&(_, h)| h));
    tree.clear(&mut arena);
    Ok(())
}

proptest::proptest! {
    #[test]
    fn random_rank_matches_model(
        keys in initial_keys(),
        actions in proptest::collection::vec(round_action_strategy(), 1..400),
    ) {
        check_against_model(&keys, &actions, RandomRank)?;
    }

    #[test]
    fn seeded_rank_matches_model(
        seed in any::<u64>(),
        keys in initial_keys(),
        actions in proptest::collection::vec(round_action_strategy(), 1..400),
    ) {
        check_against_model(&keys, &actions, SeededRank::new(seed))?;
    }

    #[test]
    fn identity_rank_matches_model(
        keys in initial_keys(),
        actions in proptest::collection::vec(round_action_strategy(), 1..400),
    ) {
        check_against_model(&keys, &actions, IdentityRank)?;
    }

    #[test]
    fn zip_of_disjoint_trees(
        keys in proptest::collection::vec(-1000..1000i32, 0..200),
        boundary in -1000..1000i32,
    ) {
        let mut arena = arena(&keys);
        let mut low: ZipTree<ByKey> = ZipTree::new();
        let mut high: ZipTree<ByKey> = ZipTree::new();
        for handle in 0..arena.len() {
            if arena[handle].key <= boundary {
                low.insert(&mut arena, handle);
            } else {
                high.insert(&mut arena, handle);
            }
        }
        let (n_low, n_high) = (low.len(&arena), high.len(&arena));
        low.zip(&mut arena, high);
        prop_assert_eq!(low.len(&arena), n_low + n_high);
        prop_assert!(low.validate(&arena).is_ok());

        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(common::keys(&low, &arena), sorted);
    }
}
