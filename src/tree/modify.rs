//! Insertion and removal.

use super::zip::*;
use crate::adapter::*;
use crate::link::{Side, ZipLink};
use crate::rank::{Rank, RankOracle};
use std::cmp::Ordering;

/// Links `x` into the tree rooted at `root`.
///
/// Returns `false`, leaving the tree untouched, if `x` is already in the tree.
///
/// The search path for `x` is followed down until a node with a lower rank
/// than `x` is found. `x` takes that node's place, and the displaced subtree
/// is unzipped around the key of `x` in the same downward pass: nodes before
/// `x` are threaded onto the right spine of its left subtree, nodes after it
/// onto the left spine of its right subtree.
pub fn insert<A, S, R>(
    arena: &mut S,
    root: &mut Option<A::Handle>,
    oracle: &mut R,
    x: A::Handle,
) -> bool
where
    A: Adapter,
    S: Arena<A> + ?Sized,
    R: RankOracle,
{
    // A linked element keeps its rank, so that it is found again below.
    let rank_value = match A::link(&arena[x]).rank {
        Some(rank) => rank,
        None => oracle.rank(x),
    };
    let x_rank = Rank {
        value: rank_value,
        handle: x,
    };

    let mut prev: Option<(A::Handle, Ordering)> = None;
    let mut cur = *root;
    let mut cur_order = Ordering::Equal;
    while let Some(node) = cur {
        if node == x {
            return false;
        }
        cur_order = key_order::<A, S>(arena, x, node);
        let node_rank = rank_of::<A, S>(arena, node);
        if x_rank > node_rank {
            break;
        }
        #[cfg(feature = "tracing")]
        if x_rank.value == node_rank.value {
            tracing::warn!(handle = ?x, other = ?node, "equal rank values drawn");
        }
        prev = Some((node, cur_order));
        cur = child::<A, S>(arena, node, descend(cur_order));
    }

    *A::link_mut(&mut arena[x]) = ZipLink {
        left: None,
        right: None,
        rank: Some(rank_value),
    };
    match prev {
        None => *root = Some(x),
        Some((parent, order)) => set_child::<A, S>(arena, parent, descend(order), Some(x)),
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(handle = ?x, rank = rank_value, displaced = ?cur, "insert");

    let mut cur = match cur {
        Some(node) => node,
        None => return true,
    };

    // The displaced subtree hangs on the side of `x` it belongs to.
    set_child::<A, S>(arena, x, descend(cur_order).flip(), Some(cur));

    let mut prev = x;
    loop {
        let fix = prev;
        let dir = cur_order;
        // Walk along the spine while the nodes stay on the same side of `x`.
        let next = loop {
            prev = cur;
            match child::<A, S>(arena, cur, descend(dir)) {
                None => break None,
                Some(node) => {
                    cur = node;
                    cur_order = key_order::<A, S>(arena, x, cur);
                    if cur_order != dir {
                        break Some(node);
                    }
                }
            }
        };

        let to_left = key_order::<A, S>(arena, x, fix) == Ordering::Less
            || (fix == x && key_order::<A, S>(arena, x, prev) == Ordering::Less);
        let side = if to_left { Side::Left } else { Side::Right };
        set_child::<A, S>(arena, fix, side, next);

        if next.is_none() {
            return true;
        }
    }
}

/// The child to descend into when `x` compares `order` against a node.
fn descend(order: Ordering) -> Side {
    if order == Ordering::Greater {
        Side::Right
    } else {
        Side::Left
    }
}

/// Unlinks `x` from the tree rooted at `root`, zipping its two subtrees in
/// its place. Resets the link of `x`.
///
/// Returns `false` if `x` is not in the tree.
pub fn remove<A, S>(arena: &mut S, root: &mut Option<A::Handle>, x: A::Handle) -> bool
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    let mut cur = match *root {
        Some(node) => node,
        None => return false,
    };

    let mut edge = Edge::Root;
    loop {
        let side = match key_order::<A, S>(arena, x, cur) {
            Ordering::Equal => break,
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        edge = Edge::Child(cur, side);
        cur = match child::<A, S>(arena, cur, side) {
            Some(node) => node,
            None => return false,
        };
    }

    let link = A::link(&arena[cur]);
    let (left, right) = (link.left, link.right);
    let merged = zip_roots::<A, S>(arena, left, right);
    set_edge::<A, S>(arena, root, edge, merged);
    A::link_mut(&mut arena[cur]).reset();

    #[cfg(feature = "tracing")]
    tracing::trace!(handle = ?x, "remove");
    true
}
