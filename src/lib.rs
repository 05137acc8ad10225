//! An intrusive zip tree.
//!
//! A zip tree is a binary search tree balanced by random ranks: the keys are
//! in search-tree order and the ranks form a max-heap, like in a treap. It is
//! restructured by merging and splitting paths ("zip" and "unzip") instead of
//! rotations, and keeps expected logarithmic depth.
//!
//! The tree is intrusive: every element embeds a [`ZipLink`], and the tree
//! only rewires links. It never allocates, moves or drops elements. Elements
//! live in an arena owned by the caller and are addressed by copyable
//! handles; an [`Adapter`] tells the tree where the link and the key are.
//!
//! Keys may repeat. Distinct elements with equal keys are ordered by handle.
//!
//! The structure is not synchronized; all operations take the arena by
//! reference, so exclusive access is enforced by the borrow checker.

#[macro_use]
extern crate derive_destructure;

pub mod adapter;
pub mod error;
pub mod link;
pub mod rank;
pub mod tree;

pub use adapter::{key_order, Adapter, Arena};
pub use error::InvariantError;
pub use link::{Handle, Side, ZipLink};
pub use rank::{IdentityRank, RandomRank, Rank, RankOracle, SeededRank};
pub use tree::{Iter, ZipTree};
