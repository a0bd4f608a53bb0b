//! Union-find over caller-supplied items.
//!
//! Items are registered once and receive a dense id that never changes; the
//! id of a set's root doubles as the set's representative. `find_set`
//! compresses the walked path so later lookups touch fewer links, and `union`
//! attaches the shallower tree beneath the deeper one. Rank ties are broken
//! by a fair coin drawn from an injectable random source so that tests can
//! pin the outcome.

use std::{collections::HashMap, hash::Hash};

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::{Result, SpanrouteError};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Link {
    Root { rank: u32 },
    Child { parent: usize },
}

/// Disjoint-set forest with path compression and union by rank.
///
/// # Examples
/// ```
/// use spanroute_core::DisjointSet;
///
/// let mut sets = DisjointSet::new();
/// for city in ["oslo", "bergen", "tromso"] {
///     sets.make_set(city)?;
/// }
/// let joined = sets.union(&"oslo", &"bergen")?;
/// assert_eq!(sets.find_set(&"bergen")?, joined);
/// assert_ne!(sets.find_set(&"tromso")?, joined);
/// assert_eq!(sets.set_count(), 2);
/// # Ok::<(), spanroute_core::SpanrouteError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T, R = SmallRng> {
    ids: HashMap<T, usize>,
    links: Vec<Link>,
    roots: usize,
    rng: R,
}

impl<T: Eq + Hash> DisjointSet<T, SmallRng> {
    /// Creates an empty structure whose rank ties are broken by an
    /// entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }
}

impl<T: Eq + Hash> Default for DisjointSet<T, SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash, R: Rng> DisjointSet<T, R> {
    /// Creates an empty structure drawing rank tie-breaks from `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self::with_capacity_and_rng(0, rng)
    }

    /// Creates an empty structure with room for `capacity` items.
    #[must_use]
    pub fn with_capacity_and_rng(capacity: usize, rng: R) -> Self {
        Self {
            ids: HashMap::with_capacity(capacity),
            links: Vec::with_capacity(capacity),
            roots: 0,
            rng,
        }
    }

    /// Number of registered items.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.links.len() }

    /// Returns `true` when no items are registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.links.is_empty() }

    /// Number of disjoint sets currently held.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.roots }

    /// Returns `true` when `item` has been registered.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.ids.contains_key(item)
    }

    /// Registers `item` as a singleton set and returns its id, which is also
    /// its representative until it is joined with another set.
    ///
    /// # Errors
    /// Returns [`SpanrouteError::AlreadyRegistered`] when `item` already has a
    /// set.
    pub fn make_set(&mut self, item: T) -> Result<usize> {
        if self.ids.contains_key(&item) {
            return Err(SpanrouteError::AlreadyRegistered);
        }
        let id = self.links.len();
        self.ids.insert(item, id);
        self.links.push(Link::Root { rank: 0 });
        self.roots += 1;
        Ok(id)
    }

    /// Returns the representative of the set containing `item`.
    ///
    /// Every link walked on the way to the root is repointed directly at it.
    ///
    /// # Errors
    /// Returns [`SpanrouteError::UnregisteredItem`] when `item` was never
    /// registered.
    pub fn find_set(&mut self, item: &T) -> Result<usize> {
        let id = self.id_of(item)?;
        Ok(self.find_root(id))
    }

    /// Merges the sets containing `left` and `right` and returns the
    /// representative of the merged set.
    ///
    /// # Errors
    /// Returns [`SpanrouteError::UnregisteredItem`] when either item was never
    /// registered and [`SpanrouteError::AlreadyJoined`] when both already
    /// belong to the same set.
    pub fn union(&mut self, left: &T, right: &T) -> Result<usize> {
        let left = self.find_set(left)?;
        let right = self.find_set(right)?;
        self.union_roots(left, right)
    }

    /// Number of links between `item` and its representative, without
    /// compressing the path.
    ///
    /// # Errors
    /// Returns [`SpanrouteError::UnregisteredItem`] when `item` was never
    /// registered.
    pub fn depth(&self, item: &T) -> Result<usize> {
        let mut node = self.id_of(item)?;
        let mut depth = 0;
        while let Link::Child { parent } = self.links[node] {
            node = parent;
            depth += 1;
        }
        Ok(depth)
    }

    fn id_of(&self, item: &T) -> Result<usize> {
        self.ids
            .get(item)
            .copied()
            .ok_or(SpanrouteError::UnregisteredItem)
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while let Link::Child { parent } = self.links[root] {
            root = parent;
        }

        while let Link::Child { parent } = self.links[node] {
            self.links[node] = Link::Child { parent: root };
            node = parent;
        }

        root
    }

    /// Rank of `root`, which must be a representative.
    fn rank(&self, root: usize) -> u32 {
        debug_assert!(
            matches!(self.links[root], Link::Root { .. }),
            "node {root} is not a representative"
        );
        match self.links[root] {
            Link::Root { rank } => rank,
            Link::Child { .. } => 0,
        }
    }

    fn union_roots(&mut self, left: usize, right: usize) -> Result<usize> {
        if left == right {
            return Err(SpanrouteError::AlreadyJoined {
                representative: left,
            });
        }
        let left_rank = self.rank(left);
        let right_rank = self.rank(right);
        let left_wins = match left_rank.cmp(&right_rank) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => self.rng.gen_bool(0.5),
        };
        let (parent, child) = if left_wins {
            (left, right)
        } else {
            (right, left)
        };

        self.links[child] = Link::Child { parent };
        if left_rank == right_rank {
            self.links[parent] = Link::Root {
                rank: left_rank.saturating_add(1),
            };
        }
        self.roots -= 1;
        Ok(parent)
    }
}
