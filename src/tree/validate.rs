//! Checking the tree invariants.

use crate::adapter::*;
use crate::error::InvariantError;
use crate::link::Side;
use crate::rank::Rank;
use std::cmp::Ordering;
use std::collections::BTreeSet;

struct Frame<H> {
    node: H,
    // the nearest ancestors the node must follow and precede
    lower: Option<H>,
    upper: Option<H>,
}

/// Checks the subtree rooted at `root`: every node is ranked, lies strictly
/// between the bounds set by its ancestors, is outranked by its parent, and
/// is reached only once.
///
/// Uses an explicit stack, so that a degenerate tree can be checked too.
pub fn validate<A, S>(arena: &S, root: Option<A::Handle>) -> Result<(), InvariantError<A::Handle>>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    let mut seen = BTreeSet::new();
    let mut stack: Vec<Frame<A::Handle>> = vec![];
    if let Some(node) = root {
        stack.push(Frame {
            node,
            lower: None,
            upper: None,
        });
    }

    while let Some(Frame { node, lower, upper }) = stack.pop() {
        if !seen.insert(node) {
            return Err(InvariantError::Revisited { node });
        }
        let rank = match A::link(&arena[node]).rank {
            Some(rank) => rank,
            None => return Err(InvariantError::Unranked { node }),
        };
        if let Some(ancestor) = lower {
            if key_order::<A, S>(arena, node, ancestor) != Ordering::Greater {
                return Err(InvariantError::KeyOrder { node, ancestor });
            }
        }
        if let Some(ancestor) = upper {
            if key_order::<A, S>(arena, node, ancestor) != Ordering::Less {
                return Err(InvariantError::KeyOrder { node, ancestor });
            }
        }

        for side in [Side::Left, Side::Right] {
            let son = match child::<A, S>(arena, node, side) {
                Some(son) => son,
                None => continue,
            };
            if let Some(son_rank) = A::link(&arena[son]).rank {
                let parent_rank = Rank {
                    value: rank,
                    handle: node,
                };
                let son_rank = Rank {
                    value: son_rank,
                    handle: son,
                };
                if son_rank > parent_rank {
                    return Err(InvariantError::RankOrder {
                        parent: node,
                        child: son,
                    });
                }
            }
            let (lower, upper) = match side {
                Side::Left => (lower, Some(node)),
                Side::Right => (Some(node), upper),
            };
            stack.push(Frame {
                node: son,
                lower,
                upper,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{zip_adapter, ZipLink};

    struct Node {
        key: u32,
        link: ZipLink<usize>,
    }

    zip_adapter!(ByKey = Node[usize] { link: link, key: key: u32 });

    // (key, rank, left, right)
    fn build(nodes: &[(u32, u64, Option<usize>, Option<usize>)]) -> Vec<Node> {
        nodes
            .iter()
            .map(|&(key, rank, left, right)| Node {
                key,
                link: ZipLink {
                    left,
                    right,
                    rank: Some(rank),
                },
            })
            .collect()
    }

    #[test]
    fn accepts_a_well_formed_tree() {
        let arena = build(&[(1, 2, None, None), (2, 9, Some(0), Some(2)), (3, 4, None, None)]);
        assert_eq!(validate::<ByKey, _>(&arena, Some(1)), Ok(()));
        assert_eq!(validate::<ByKey, _>(&arena, None), Ok(()));
    }

    #[test]
    fn child_outranking_its_parent() {
        let arena = build(&[(1, 5, None, Some(1)), (2, 9, None, None)]);
        assert_eq!(
            validate::<ByKey, _>(&arena, Some(0)),
            Err(InvariantError::RankOrder {
                parent: 0,
                child: 1
            })
        );
    }

    #[test]
    fn node_with_two_parents() {
        //      1
        //    0   2
        //     \_/
        let arena = build(&[(1, 5, None, Some(2)), (2, 9, Some(0), Some(2)), (3, 1, None, None)]);
        assert_eq!(
            validate::<ByKey, _>(&arena, Some(1)),
            Err(InvariantError::Revisited { node: 2 })
        );
    }
}
