//! Locating the link and the key inside a host element.
//!
//! A tree is written once and specialized per element type through an
//! [`Adapter`]. The adapter says where the [`ZipLink`] lives inside the
//! element, where the key lives, and how keys compare. An element type may
//! embed several links and be indexed by several adapters at the same time.

use crate::link::{Handle, Side, ZipLink};
use crate::rank::Rank;
use std::cmp::Ordering;
use std::ops::IndexMut;

/// Describes how a tree reaches into its elements.
pub trait Adapter {
    /// The host element type.
    type Elem;
    /// The key the elements are ordered by.
    type Key: ?Sized;
    /// The handle addressing an element inside the arena.
    type Handle: Handle;

    fn link(elem: &Self::Elem) -> &ZipLink<Self::Handle>;
    fn link_mut(elem: &mut Self::Elem) -> &mut ZipLink<Self::Handle>;
    fn key(elem: &Self::Elem) -> &Self::Key;

    /// The caller's key comparison. Distinct elements may compare `Equal`;
    /// the tree breaks such ties by handle order.
    fn compare(a: &Self::Key, b: &Self::Key) -> Ordering;
}

/// Storage owning the elements of a tree, addressed by handle.
///
/// Implemented for anything indexable by the adapter's handle type, such as
/// `Vec<Elem>` with `usize` handles.
pub trait Arena<A: Adapter>: IndexMut<A::Handle, Output = A::Elem> {}

impl<A: Adapter, S: IndexMut<A::Handle, Output = A::Elem> + ?Sized> Arena<A> for S {}

/// Compares two elements by key, breaking ties by identity.
///
/// Returns `Equal` only when `a` and `b` are the same handle.
pub fn key_order<A, S>(arena: &S, a: A::Handle, b: A::Handle) -> Ordering
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    if a == b {
        return Ordering::Equal;
    }
    match A::compare(A::key(&arena[a]), A::key(&arena[b])) {
        Ordering::Equal => a.cmp(&b),
        order => order,
    }
}

/// The rank of a linked element.
pub(crate) fn rank_of<A, S>(arena: &S, handle: A::Handle) -> Rank<A::Handle>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    let value = A::link(&arena[handle]).rank;
    debug_assert!(value.is_some(), "element {:?} is not linked", handle);
    Rank {
        value: value.unwrap_or_default(),
        handle,
    }
}

pub(crate) fn child<A, S>(arena: &S, handle: A::Handle, side: Side) -> Option<A::Handle>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    A::link(&arena[handle]).child(side)
}

pub(crate) fn set_child<A, S>(
    arena: &mut S,
    handle: A::Handle,
    side: Side,
    value: Option<A::Handle>,
) where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    A::link_mut(&mut arena[handle]).set_child(side, value)
}

/// Declares a unit type implementing [`Adapter`].
///
///```
/// use ziptree::{zip_adapter, ZipLink};
///
/// pub struct Session {
///     id: u32,
///     deadline: u64,
///     by_id: ZipLink<usize>,
///     by_deadline: ZipLink<usize>,
/// }
///
/// zip_adapter!(pub SessionsById = Session[usize] { link: by_id, key: id: u32 });
/// zip_adapter!(
///     pub SessionsByDeadline = Session[usize] {
///         link: by_deadline,
///         key: deadline: u64,
///         compare: |a, b| b.cmp(a),
///     }
/// );
///```
/// Without a `compare` clause the keys are compared with [`Ord::cmp`].
#[macro_export]
macro_rules! zip_adapter {
    (
        $vis:vis $name:ident = $elem:ty [$handle:ty] {
            link: $link:ident,
            key: $key:ident : $key_ty:ty $(,)?
        }
    ) => {
        $crate::zip_adapter!(
            $vis $name = $elem [$handle] {
                link: $link,
                key: $key: $key_ty,
                compare: |a, b| ::std::cmp::Ord::cmp(a, b),
            }
        );
    };
    (
        $vis:vis $name:ident = $elem:ty [$handle:ty] {
            link: $link:ident,
            key: $key:ident : $key_ty:ty,
            compare: |$a:ident, $b:ident| $cmp:expr $(,)?
        }
    ) => {
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $name;

        impl $crate::Adapter for $name {
            type Elem = $elem;
            type Key = $key_ty;
            type Handle = $handle;

            #[inline]
            fn link(elem: &$elem) -> &$crate::ZipLink<$handle> {
                &elem.$link
            }

            #[inline]
            fn link_mut(elem: &mut $elem) -> &mut $crate::ZipLink<$handle> {
                &mut elem.$link
            }

            #[inline]
            fn key(elem: &$elem) -> &$key_ty {
                &elem.$key
            }

            #[inline]
            fn compare($a: &$key_ty, $b: &$key_ty) -> ::std::cmp::Ordering {
                $cmp
            }
        }
    };
}
