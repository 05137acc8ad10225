//! Read-only navigation: lookup by key, extremes, and in-order traversal.

use crate::adapter::*;
use crate::link::Side;
use std::cmp::Ordering;

/// Finds an element whose key compares `Equal` to `key`.
/// With duplicate keys, any of the matching elements on the search path.
pub fn find<A, S>(arena: &S, root: Option<A::Handle>, key: &A::Key) -> Option<A::Handle>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    let mut cur = root;
    while let Some(node) = cur {
        cur = match A::compare(key, A::key(&arena[node])) {
            Ordering::Equal => return Some(node),
            Ordering::Less => child::<A, S>(arena, node, Side::Left),
            Ordering::Greater => child::<A, S>(arena, node, Side::Right),
        };
    }
    None
}

fn extreme<A, S>(arena: &S, mut node: Option<A::Handle>, side: Side) -> Option<A::Handle>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    while let Some(next) = child::<A, S>(arena, node?, side) {
        node = Some(next);
    }
    node
}

/// The first element of the subtree rooted at `node`.
pub fn min_of<A, S>(arena: &S, node: Option<A::Handle>) -> Option<A::Handle>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    extreme::<A, S>(arena, node, Side::Left)
}

/// The last element of the subtree rooted at `node`.
pub fn max_of<A, S>(arena: &S, node: Option<A::Handle>) -> Option<A::Handle>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    extreme::<A, S>(arena, node, Side::Right)
}

/// In-order iterator over a subtree.
///
/// Holds a stack of the nodes whose left subtree is being visited,
/// so its memory use is bounded by the depth of the tree.
pub struct Iter<'a, A: Adapter, S: ?Sized> {
    arena: &'a S,
    stack: Vec<A::Handle>,
}

impl<'a, A, S> Iter<'a, A, S>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
{
    pub fn new(arena: &'a S, root: Option<A::Handle>) -> Self {
        let mut res = Iter {
            arena,
            stack: vec![],
        };
        res.push_left_spine(root);
        res
    }

    fn push_left_spine(&mut self, mut node: Option<A::Handle>) {
        while let Some(handle) = node {
            self.stack.push(handle);
            node = child::<A, S>(self.arena, handle, Side::Left);
        }
    }
}

impl<'a, A, S> Iterator for Iter<'a, A, S>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
    A::Elem: 'a,
{
    type Item = (A::Handle, &'a A::Elem);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let arena = self.arena;
        self.push_left_spine(child::<A, S>(arena, handle, Side::Right));
        Some((handle, &arena[handle]))
    }
}

/// Visits the subtree in order, stopping at the first visit that returns
/// `Some`, and returns that value.
///
/// The traversal state lives in a stack local to this call.
pub fn traverse<'a, A, S, F, T>(arena: &'a S, root: Option<A::Handle>, mut visit: F) -> Option<T>
where
    A: Adapter,
    S: Arena<A> + ?Sized,
    A::Elem: 'a,
    F: FnMut(A::Handle, &'a A::Elem) -> Option<T>,
{
    Iter::<A, S>::new(arena, root).find_map(|(handle, elem)| visit(handle, elem))
}
