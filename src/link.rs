//! The link record embedded inside every element, and the handles that
//! address elements inside the host's arena.

use std::fmt;

/// An identity token for an element stored in the host's arena.
///
/// The tree never dereferences a handle itself: every access goes through
/// the arena passed to the operation. The `Ord` instance is the raw identity
/// order, used to break ties between equal keys and between equal ranks.
pub trait Handle: Copy + Eq + Ord + fmt::Debug {
    /// The identity of this handle as an integer.
    /// Used by [`crate::rank::IdentityRank`] to derive a rank.
    fn identity(self) -> u64;
}

macro_rules! impl_handle {
    ($($t:ty),*) => {
        $(
            impl Handle for $t {
                #[inline]
                fn identity(self) -> u64 {
                    self as u64
                }
            }
        )*
    }
}

impl_handle!(usize, u64, u32, u16);

/// Which child of a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side.
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The structural part of an element: two non-owning child references and
/// the cached balancing rank.
///
/// A link is owned by whichever tree currently holds the element. While
/// unlinked, both children and the rank are `None`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ZipLink<H> {
    pub(crate) left: Option<H>,
    pub(crate) right: Option<H>,
    pub(crate) rank: Option<u64>,
}

impl<H> Default for ZipLink<H> {
    fn default() -> Self {
        ZipLink::new()
    }
}

impl<H> ZipLink<H> {
    /// An unlinked record.
    pub const fn new() -> Self {
        ZipLink {
            left: None,
            right: None,
            rank: None,
        }
    }

    /// Whether the element is currently held by a tree.
    pub fn is_linked(&self) -> bool {
        self.rank.is_some()
    }

    /// The rank that was assigned when the element was linked.
    pub fn rank(&self) -> Option<u64> {
        self.rank
    }

    pub(crate) fn reset(&mut self) {
        *self = ZipLink::new();
    }
}

impl<H: Copy> ZipLink<H> {
    /// The left child, ordering before this element.
    pub fn left(&self) -> Option<H> {
        self.left
    }

    /// The right child, ordering after this element.
    pub fn right(&self) -> Option<H> {
        self.right
    }

    /// The child on `side`.
    pub fn child(&self, side: Side) -> Option<H> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<H>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

#[test]
fn fresh_link_is_unlinked() {
    let link: ZipLink<usize> = Default::default();
    assert!(!link.is_linked());
    assert_eq!(link.left(), None);
    assert_eq!(link.right(), None);
    assert_eq!(link.rank(), None);
}

#[test]
fn set_child_by_side() {
    let mut link: ZipLink<u32> = ZipLink::new();
    link.set_child(Side::Left, Some(3));
    link.set_child(Side::Left.flip(), Some(7));
    assert_eq!(link.child(Side::Left), Some(3));
    assert_eq!(link.child(Side::Right), Some(7));
    link.reset();
    assert_eq!(link, ZipLink::new());
}
