//! The tree handle.
//!
//! A [`ZipTree`] owns nothing but the handle of its root and its rank oracle.
//! The elements live in the caller's arena, which is passed to every
//! operation: mutably for the operations that relink elements, immutably for
//! navigation.
//!
//! The algorithms themselves work on bare root handles and are exposed by the
//! submodules, for callers that keep the root inside their own structures.

pub mod modify;
pub mod navigate;
pub mod validate;
pub mod zip;

pub use navigate::Iter;

use crate::adapter::*;
use crate::error::InvariantError;
use crate::rank::{RandomRank, RankOracle};
use std::fmt;
use std::marker::PhantomData;
use void::{ResultVoidExt, Void};

/// An intrusive zip tree.
///
/// `A` locates the link and the key inside the elements, `R` draws the
/// balancing ranks.
///
///```
/// use ziptree::{zip_adapter, ZipLink, ZipTree};
///
/// struct Item {
///     key: i32,
///     link: ZipLink<usize>,
/// }
///
/// zip_adapter!(ByKey = Item[usize] { link: link, key: key: i32 });
///
/// let mut arena: Vec<Item> = [5, 3, 8, 1, 4]
///     .iter()
///     .map(|&key| Item { key, link: ZipLink::new() })
///     .collect();
///
/// let mut tree: ZipTree<ByKey> = ZipTree::new();
/// for handle in 0..arena.len() {
///     tree.insert(&mut arena, handle);
/// }
///
/// let keys: Vec<i32> = tree.iter(&arena).map(|(_, item)| item.key).collect();
/// assert_eq!(keys, vec![1, 3, 4, 5, 8]);
/// assert_eq!(tree.find(&arena, &4), Some(4));
/// # tree.validate(&arena).unwrap();
///```
///
/// Dropping a tree leaves its elements linked; use [`ZipTree::clear`] or
/// [`ZipTree::remove`] to release them.
#[derive(destructure)]
pub struct ZipTree<A: Adapter, R: RankOracle = RandomRank> {
    root: Option<A::Handle>,
    oracle: R,
    phantom: PhantomData<fn() -> A>,
}

impl<A: Adapter, R: RankOracle + Default> Default for ZipTree<A, R> {
    fn default() -> Self {
        ZipTree::new()
    }
}

impl<A: Adapter, R: RankOracle + Default> ZipTree<A, R> {
    pub fn new() -> Self {
        ZipTree::with_oracle(R::default())
    }
}

impl<A: Adapter, R: RankOracle> ZipTree<A, R> {
    pub fn with_oracle(oracle: R) -> Self {
        ZipTree::from_raw_parts(None, oracle)
    }

    /// Rebuilds a tree handle from a root obtained by
    /// [`ZipTree::into_raw_parts`] or built by the functions of the
    /// submodules.
    pub fn from_raw_parts(root: Option<A::Handle>, oracle: R) -> Self {
        ZipTree {
            root,
            oracle,
            phantom: PhantomData,
        }
    }

    /// Dismantles the handle without touching the elements.
    pub fn into_raw_parts(self) -> (Option<A::Handle>, R) {
        let (root, oracle, _) = self.destructure();
        (root, oracle)
    }

    /// The handle of the root element, if any.
    pub fn root(&self) -> Option<A::Handle> {
        self.root
    }

    /// Whether the tree holds no element.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn oracle(&self) -> &R {
        &self.oracle
    }

    /// Links the element at `handle` into the tree.
    /// Returns `false`, and does nothing, if it is already in the tree.
    ///
    /// The element must not be linked into another tree through the same link.
    pub fn insert<S>(&mut self, arena: &mut S, handle: A::Handle) -> bool
    where
        S: Arena<A> + ?Sized,
    {
        modify::insert::<A, S, R>(arena, &mut self.root, &mut self.oracle, handle)
    }

    /// Unlinks the element at `handle` from the tree and resets its link.
    /// Returns `false`, and does nothing, if it is not in the tree.
    pub fn remove<S>(&mut self, arena: &mut S, handle: A::Handle) -> bool
    where
        S: Arena<A> + ?Sized,
    {
        modify::remove::<A, S>(arena, &mut self.root, handle)
    }

    /// Unlinks every element and empties the tree.
    pub fn clear<S>(&mut self, arena: &mut S)
    where
        S: Arena<A> + ?Sized,
    {
        let mut stack: Vec<A::Handle> = self.root.take().into_iter().collect();
        while let Some(node) = stack.pop() {
            let link = A::link_mut(&mut arena[node]);
            stack.extend(link.left.into_iter().chain(link.right));
            link.reset();
        }
    }

    /// Finds an element with the given key.
    /// With duplicate keys, returns one of the matching elements.
    pub fn find<S>(&self, arena: &S, key: &A::Key) -> Option<A::Handle>
    where
        S: Arena<A> + ?Sized,
    {
        navigate::find::<A, S>(arena, self.root, key)
    }

    pub fn min<S>(&self, arena: &S) -> Option<A::Handle>
    where
        S: Arena<A> + ?Sized,
    {
        navigate::min_of::<A, S>(arena, self.root)
    }

    pub fn max<S>(&self, arena: &S) -> Option<A::Handle>
    where
        S: Arena<A> + ?Sized,
    {
        navigate::max_of::<A, S>(arena, self.root)
    }

    pub fn left<S>(&self, arena: &S, handle: A::Handle) -> Option<A::Handle>
    where
        S: Arena<A> + ?Sized,
    {
        A::link(&arena[handle]).left
    }

    pub fn right<S>(&self, arena: &S, handle: A::Handle) -> Option<A::Handle>
    where
        S: Arena<A> + ?Sized,
    {
        A::link(&arena[handle]).right
    }

    /// Visits the elements in key order until `visit` returns `Some`,
    /// and returns that value.
    pub fn traverse<'a, S, F, T>(&self, arena: &'a S, visit: F) -> Option<T>
    where
        S: Arena<A> + ?Sized,
        A::Elem: 'a,
        F: FnMut(A::Handle, &'a A::Elem) -> Option<T>,
    {
        navigate::traverse::<A, S, F, T>(arena, self.root, visit)
    }

    /// Visits the elements in key order, stopping at the first error.
    pub fn try_for_each<'a, S, F, E>(&self, arena: &'a S, mut f: F) -> Result<(), E>
    where
        S: Arena<A> + ?Sized,
        A::Elem: 'a,
        F: FnMut(A::Handle, &'a A::Elem) -> Result<(), E>,
    {
        match self.traverse(arena, |handle, elem| f(handle, elem).err()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn for_each<'a, S, F>(&self, arena: &'a S, mut f: F)
    where
        S: Arena<A> + ?Sized,
        A::Elem: 'a,
        F: FnMut(A::Handle, &'a A::Elem),
    {
        let res: Result<(), Void> = self.try_for_each(arena, |handle, elem| {
            f(handle, elem);
            Ok(())
        });
        res.void_unwrap()
    }

    /// Iterates over the elements in key order.
    pub fn iter<'a, S>(&self, arena: &'a S) -> Iter<'a, A, S>
    where
        S: Arena<A> + ?Sized,
    {
        Iter::new(arena, self.root)
    }

    /// The number of elements, counted by a traversal.
    pub fn len<S>(&self, arena: &S) -> usize
    where
        S: Arena<A> + ?Sized,
    {
        self.iter(arena).count()
    }

    /// Appends all elements of `right` to this tree.
    ///
    /// Every element of `self` must order before every element of `right`.
    /// This is only checked in debug builds.
    pub fn zip<S>(&mut self, arena: &mut S, right: ZipTree<A, R>)
    where
        S: Arena<A> + ?Sized,
    {
        let (right_root, _) = right.into_raw_parts();
        #[cfg(debug_assertions)]
        if let (Some(last), Some(first)) = (
            navigate::max_of::<A, S>(arena, self.root),
            navigate::min_of::<A, S>(arena, right_root),
        ) {
            debug_assert!(
                key_order::<A, S>(arena, last, first) == std::cmp::Ordering::Less,
                "zipped trees overlap: {:?} does not precede {:?}",
                last,
                first
            );
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(left = ?self.root, right = ?right_root, "zip");
        self.root = zip::zip_roots::<A, S>(arena, self.root, right_root);
    }

    /// Splits the tree at `key`. The elements ordering at or before `key`
    /// stay in this tree, the elements strictly after it are returned.
    pub fn unzip<S>(&mut self, arena: &mut S, key: &A::Key) -> ZipTree<A, R>
    where
        S: Arena<A> + ?Sized,
    {
        let (left, right) = zip::unzip_roots::<A, S>(arena, self.root, key);
        #[cfg(feature = "tracing")]
        tracing::trace!(left = ?left, right = ?right, "unzip");
        self.root = left;
        ZipTree::from_raw_parts(right, self.oracle.fork())
    }

    /// Checks the ordering and ranking invariants of the whole tree.
    pub fn validate<S>(&self, arena: &S) -> Result<(), InvariantError<A::Handle>>
    where
        S: Arena<A> + ?Sized,
    {
        validate::validate::<A, S>(arena, self.root)
    }
}

impl<A: Adapter, R: RankOracle> fmt::Debug for ZipTree<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipTree").field("root", &self.root).finish()
    }
}

impl<A: Adapter, R: RankOracle> Drop for ZipTree<A, R> {
    fn drop(&mut self) {
        #[cfg(feature = "tracing")]
        if let Some(root) = self.root {
            tracing::debug!(root = ?root, "dropping a non-empty zip tree, its elements stay linked");
        }
    }
}
