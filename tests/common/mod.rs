#![allow(dead_code)]

use itertools::Itertools;
use ziptree::*;

/// A host element indexed by two trees at once: by key and by tag.
#[derive(Debug)]
pub struct Elem {
    pub key: i32,
    pub tag: String,
    pub by_key: ZipLink<usize>,
    pub by_tag: ZipLink<usize>,
}

impl Elem {
    pub fn new(key: i32) -> Self {
        Elem {
            key,
            tag: format!("t{}", key.rem_euclid(7)),
            by_key: ZipLink::new(),
            by_tag: ZipLink::new(),
        }
    }
}

zip_adapter!(pub ByKey = Elem[usize] { link: by_key, key: key: i32 });
zip_adapter!(pub ByTag = Elem[usize] { link: by_tag, key: tag: str });
zip_adapter!(
    pub ByKeyDescending = Elem[usize] {
        link: by_key,
        key: key: i32,
        compare: |a, b| b.cmp(a),
    }
);

pub fn arena(keys: &[i32]) -> Vec<Elem> {
    keys.iter().map(|&key| Elem::new(key)).collect()
}

/// Builds a tree holding every element of the arena, inserted in arena order.
pub fn tree_of<R: RankOracle>(arena: &mut Vec<Elem>, oracle: R) -> ZipTree<ByKey, R> {
    let mut tree = ZipTree::with_oracle(oracle);
    for handle in 0..arena.len() {
        assert!(tree.insert(arena, handle));
    }
    tree
}

pub fn keys<A, R>(tree: &ZipTree<A, R>, arena: &[Elem]) -> Vec<i32>
where
    A: Adapter<Elem = Elem, Handle = usize>,
    R: RankOracle,
{
    tree.iter(arena).map(|(_, elem)| elem.key).collect()
}

pub fn handles<A, R>(tree: &ZipTree<A, R>, arena: &[Elem]) -> Vec<usize>
where
    A: Adapter<Elem = Elem, Handle = usize>,
    R: RankOracle,
{
    tree.iter(arena).map(|(handle, _)| handle).collect()
}

/// Validates the tree and checks that the traversal is sorted by key.
pub fn assert_correctness<R: RankOracle>(tree: &ZipTree<ByKey, R>, arena: &[Elem]) {
    if let Err(err) = tree.validate(arena) {
        panic!("invalid tree: {}", err);
    }
    let keys = keys(tree, arena);
    assert!(
        keys.iter().tuple_windows().all(|(a, b)| a <= b),
        "traversal out of order: {:?}",
        keys
    );
}

/// The depth of the deepest element.
pub fn depth<A, R>(tree: &ZipTree<A, R>, arena: &[Elem]) -> usize
where
    A: Adapter<Elem = Elem, Handle = usize>,
    R: RankOracle,
{
    let mut stack: Vec<(usize, usize)> = tree.root().into_iter().map(|root| (root, 1)).collect();
    let mut res = 0;
    while let Some((node, depth)) = stack.pop() {
        res = res.max(depth);
        for son in [tree.left(arena, node), tree.right(arena, node)]
            .iter()
            .flatten()
        {
            stack.push((*son, depth + 1));
        }
    }
    res
}
