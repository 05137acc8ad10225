//! Error type reported by [`ZipTree::validate`](crate::ZipTree::validate).

use std::fmt;

/// A violated tree invariant, naming the offending elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError<H> {
    /// An element reachable from the root carries no rank, i.e. it was never
    /// linked, or its link was reset while still in the tree.
    Unranked { node: H },
    /// An element is out of key order with respect to an ancestor.
    KeyOrder { node: H, ancestor: H },
    /// A child outranks its parent.
    RankOrder { parent: H, child: H },
    /// An element was reached twice from the root.
    Revisited { node: H },
}

impl<H: fmt::Debug> fmt::Display for InvariantError<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Unranked { node } => {
                write!(f, "element {:?} is in the tree but has no rank", node)
            }
            InvariantError::KeyOrder { node, ancestor } => {
                write!(
                    f,
                    "element {:?} is on the wrong side of ancestor {:?}",
                    node, ancestor
                )
            }
            InvariantError::RankOrder { parent, child } => {
                write!(f, "child {:?} outranks its parent {:?}", child, parent)
            }
            InvariantError::Revisited { node } => {
                write!(f, "element {:?} is reachable twice from the root", node)
            }
        }
    }
}

impl<H: fmt::Debug> std::error::Error for InvariantError<H> {}

#[test]
fn display_names_the_elements() {
    let err = InvariantError::RankOrder {
        parent: 3usize,
        child: 8usize,
    };
    assert_eq!(err.to_string(), "child 8 outranks its parent 3");
}
