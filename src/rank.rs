//! Balancing ranks.
//!
//! A zip tree keeps a max-heap on ranks layered under the key order. Ranks
//! are independent of the keys and of the insertion order, so the tree has the
//! shape of a random treap and expected logarithmic depth.
//!
//! A rank is drawn once, when an element is first linked into a tree, and is
//! cached in its [`ZipLink`](crate::ZipLink) until the element is removed.

use crate::link::Handle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

/// A source of balancing ranks.
pub trait RankOracle {
    /// Produces the rank of an element that is about to be linked.
    fn rank<H: Handle>(&mut self, handle: H) -> u64;

    /// Produces an oracle for a tree split off from the tree owning `self`.
    fn fork(&mut self) -> Self;
}

/// Draws every rank from the thread-local random generator.
/// This is the default oracle.
#[derive(Clone, Copy, Default, Debug)]
pub struct RandomRank;

impl RankOracle for RandomRank {
    fn rank<H: Handle>(&mut self, _handle: H) -> u64 {
        rand::random()
    }

    fn fork(&mut self) -> Self {
        RandomRank
    }
}

/// Draws ranks from a seeded generator, so that tree shapes are reproducible.
#[derive(Clone, Debug)]
pub struct SeededRank {
    rng: StdRng,
}

impl SeededRank {
    pub fn new(seed: u64) -> Self {
        SeededRank {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RankOracle for SeededRank {
    fn rank<H: Handle>(&mut self, _handle: H) -> u64 {
        self.rng.gen()
    }

    fn fork(&mut self) -> Self {
        SeededRank::new(self.rng.gen())
    }
}

/// Derives the rank by hashing the element's identity.
///
/// Stateless and deterministic: the same handle always gets the same rank.
/// Balance quality depends on how well the handles spread under the hash.
#[derive(Clone, Copy, Default, Debug)]
pub struct IdentityRank;

impl RankOracle for IdentityRank {
    fn rank<H: Handle>(&mut self, handle: H) -> u64 {
        sdbm(&handle.identity().to_le_bytes()) as u64
    }

    fn fork(&mut self) -> Self {
        IdentityRank
    }
}

/// The sdbm string hash: `h = byte + (h << 6) + (h << 16) - h`.
pub fn sdbm(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |h, &byte| {
        (byte as u32)
            .wrapping_add(h << 6)
            .wrapping_add(h << 16)
            .wrapping_sub(h)
    })
}

/// The rank of a linked element, as it is compared inside the tree.
///
/// Ordered by value first, then by handle, so that two distinct elements
/// never compare equal even when their rank values collide.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rank<H> {
    pub value: u64,
    pub handle: H,
}

impl<H: Handle> PartialOrd for Rank<H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H: Handle> Ord for Rank<H> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.handle.cmp(&other.handle))
    }
}
