//! Zip and unzip: merging two key-disjoint trees and splitting a tree at a key.
//!
//! These work on bare root handles, so that they can be used both by
//! [`ZipTree`](super::ZipTree) and by insert/remove on inner subtrees.

use crate::adapter::*;
use crate::link::Side;
use std::cmp::Ordering;

/// A place holding a reference to a subtree: either the root slot of the
/// tree being built, or a child slot of a node.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Edge<H> {
    Root,
    Child(H, Side),
}

pub(crate) fn set_edge<A, S>(
    arena: &mut S,
    root: &mut Option<A::Handle>,
    edge: Edge<A::Handle>,
    value: Option<A::Handle>,
) where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    match edge {
        Edge::Root => *root = value,
        Edge::Child(node, side) => set_child::<A, S>(arena, node, side, value),
    }
}

/// Merges two trees into one.
///
/// Every key in `left` must precede every key in `right`; this is not checked.
/// The higher-ranked of the two current roots is attached to the output, and
/// the cursor of its tree descends toward the boundary between the two trees:
/// to the right in `left`, to the left in `right`. When one side runs out,
/// the rest of the other side is attached as is.
pub fn zip_roots<A, S>(
    arena: &mut S,
    left: Option<A::Handle>,
    right: Option<A::Handle>,
) -> Option<A::Handle>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    let (mut l, mut r) = match (left, right) {
        (None, right) => return right,
        (left, None) => return left,
        (Some(l), Some(r)) => (l, r),
    };

    let mut root = None;
    let mut edge = Edge::Root;
    loop {
        if rank_of::<A, S>(arena, l) < rank_of::<A, S>(arena, r) {
            set_edge::<A, S>(arena, &mut root, edge, Some(r));
            edge = Edge::Child(r, Side::Left);
            match child::<A, S>(arena, r, Side::Left) {
                Some(next) => r = next,
                None => {
                    set_edge::<A, S>(arena, &mut root, edge, Some(l));
                    break;
                }
            }
        } else {
            set_edge::<A, S>(arena, &mut root, edge, Some(l));
            edge = Edge::Child(l, Side::Right);
            match child::<A, S>(arena, l, Side::Right) {
                Some(next) => l = next,
                None => {
                    set_edge::<A, S>(arena, &mut root, edge, Some(r));
                    break;
                }
            }
        }
    }
    root
}

/// Which output of an unzip a node belongs to.
fn side_of<A, S>(arena: &S, key: &A::Key, node: A::Handle) -> Side
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    if A::compare(key, A::key(&arena[node])) == Ordering::Less {
        Side::Right
    } else {
        Side::Left
    }
}

/// Splits a tree into the elements ordering at-or-before `key` and the
/// elements strictly after it. Returns `(left, right)`.
///
/// The root goes to the output it belongs to. Then the spine facing the
/// other output is walked until the first node that belongs there: that node
/// becomes the root of the other output. From there the walk continues
/// along the spine facing back, and every node found on the wrong side is
/// moved over to the growing spine of the first output, its out-of-place
/// subtree left behind to be examined in turn.
pub fn unzip_roots<A, S>(
    arena: &mut S,
    root: Option<A::Handle>,
    key: &A::Key,
) -> (Option<A::Handle>, Option<A::Handle>)
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    let mut cur = match root {
        Some(root) => root,
        None => return (None, None),
    };

    // `near` is the output receiving the root, `far` is the other one.
    // `inward` is the direction pointing from `near` toward `far`.
    let near = side_of::<A, S>(arena, key, cur);
    let inward = near.flip();
    let near_root = cur;

    let mut prev;
    loop {
        prev = cur;
        match child::<A, S>(arena, cur, inward) {
            None => return arrange(near, Some(near_root), None),
            Some(next) => {
                cur = next;
                if side_of::<A, S>(arena, key, cur) != near {
                    break;
                }
            }
        }
    }

    let far_root = cur;
    set_child::<A, S>(arena, prev, inward, None);
    let mut near_edge = prev;
    let outward = near;
    while let Some(next) = child::<A, S>(arena, cur, outward) {
        let parent = cur;
        cur = next;
        if side_of::<A, S>(arena, key, cur) == near {
            let stranded = child::<A, S>(arena, cur, inward);
            set_child::<A, S>(arena, parent, outward, stranded);
            set_child::<A, S>(arena, cur, inward, None);
            set_child::<A, S>(arena, near_edge, inward, Some(cur));
            near_edge = cur;
            cur = parent;
        }
    }

    arrange(near, Some(near_root), Some(far_root))
}

fn arrange<H>(near: Side, near_root: Option<H>, far_root: Option<H>) -> (Option<H>, Option<H>) {
    match near {
        Side::Left => (near_root, far_root),
        Side::Right => (far_root, near_root),
    }
}
