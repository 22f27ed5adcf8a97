//! The owning container of a generalized map.
//!
//! [`GeneralizedMap`] is an arena of darts addressed by [`DartId`]. Darts are
//! appended in insertion order and never removed, so the dart with id `n`
//! always lives at position `n - 1`.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::gmap_error::GMapError;
use crate::topology::dart::{Dart, DartId};

/// A `D`-dimensional generalized map whose cells carry embeddings of type `T`.
///
/// # Example
/// ```rust
/// use mesh_gmap::topology::gmap::GeneralizedMap;
/// let mut g: GeneralizedMap<()> = GeneralizedMap::new(1);
/// let a = g.add_dart();
/// let b = g.add_dart();
/// g.link_alpha(a, b, 0);
/// assert_eq!(g.alpha(a, 0), Some(b));
/// assert_eq!(g.alpha(b, 0), Some(a));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneralizedMap<T> {
    dimension: usize,
    darts: Vec<Dart<T>>,
}

impl<T> GeneralizedMap<T> {
    /// Creates an empty map of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            darts: Vec::new(),
        }
    }

    /// Creates an empty map with room for `capacity` darts.
    pub fn with_capacity(dimension: usize, capacity: usize) -> Self {
        Self {
            dimension,
            darts: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of darts.
    #[inline]
    pub fn len(&self) -> usize {
        self.darts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.darts.is_empty()
    }

    /// Inserts `dart`, assigning it the next sequential id (`len + 1`).
    ///
    /// # Errors
    /// [`GMapError::DimensionMismatch`] if the dart was created for another
    /// dimension. The map is left unchanged.
    pub fn insert(&mut self, dart: Dart<T>) -> Result<DartId, GMapError> {
        if dart.dimension() != self.dimension {
            return Err(GMapError::DimensionMismatch {
                expected: self.dimension,
                found: dart.dimension(),
            });
        }
        Ok(self.push(dart))
    }

    /// Appends a dart already known to match the map dimension.
    fn push(&mut self, mut dart: Dart<T>) -> DartId {
        let id = DartId::from_index(self.darts.len());
        dart.assign_id(id);
        self.darts.push(dart);
        log::trace!("inserted dart {id}");
        id
    }

    /// `true` if `d` belongs to this map.
    #[inline]
    pub fn contains(&self, d: DartId) -> bool {
        d.index() < self.darts.len()
    }

    #[inline]
    pub fn dart(&self, d: DartId) -> Option<&Dart<T>> {
        self.darts.get(d.index())
    }

    #[inline]
    pub fn dart_mut(&mut self, d: DartId) -> Option<&mut Dart<T>> {
        self.darts.get_mut(d.index())
    }

    /// Neighbor of `d` through `alpha_i`, `None` when unset.
    ///
    /// # Panics
    /// Panics if `d` is not owned by this map.
    #[inline]
    pub fn alpha(&self, d: DartId, i: usize) -> Option<DartId> {
        self[d].alpha(i)
    }

    /// `true` when `alpha_i(d)` is unset.
    #[inline]
    pub fn is_free(&self, d: DartId, i: usize) -> bool {
        self[d].is_free(i)
    }

    /// One-sided write of `alpha_i(d)`.
    ///
    /// Nothing keeps the involution property here; see [`link_alpha`](Self::link_alpha).
    #[inline]
    pub fn set_alpha(&mut self, d: DartId, i: usize, target: Option<DartId>) {
        self[d].set_alpha(i, target);
    }

    /// Links `d1` and `d2` through `alpha_i` in both directions.
    ///
    /// Linking a dart to itself makes it a fixed point of `alpha_i`.
    pub fn link_alpha(&mut self, d1: DartId, d2: DartId, i: usize) {
        self[d1].set_alpha(i, Some(d2));
        self[d2].set_alpha(i, Some(d1));
    }

    /// Embedding of the `k`-cell of `d`, as stored on `d`.
    #[inline]
    pub fn embedding(&self, d: DartId, k: usize) -> &T {
        self[d].embedding(k)
    }

    #[inline]
    pub fn is_key(&self, d: DartId, k: usize) -> bool {
        self[d].is_key(k)
    }

    /// Ids of all darts in insertion order.
    pub fn dart_ids(&self) -> impl ExactSizeIterator<Item = DartId> + '_ {
        (0..self.darts.len()).map(DartId::from_index)
    }

    /// `(id, dart)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DartId, &Dart<T>)> + '_ {
        self.darts
            .iter()
            .enumerate()
            .map(|(pos, dart)| (DartId::from_index(pos), dart))
    }
}

impl<T: Default> GeneralizedMap<T> {
    /// Creates a free dart of the map's dimension and inserts it.
    pub fn add_dart(&mut self) -> DartId {
        let dart = Dart::new(self.dimension);
        self.push(dart)
    }

    /// Inserts `n` free darts and returns their ids.
    pub fn add_darts(&mut self, n: usize) -> Vec<DartId> {
        (0..n).map(|_| self.add_dart()).collect()
    }
}

impl<T> Index<DartId> for GeneralizedMap<T> {
    type Output = Dart<T>;

    fn index(&self, d: DartId) -> &Dart<T> {
        &self.darts[d.index()]
    }
}

impl<T> IndexMut<DartId> for GeneralizedMap<T> {
    fn index_mut(&mut self, d: DartId) -> &mut Dart<T> {
        &mut self.darts[d.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut g: GeneralizedMap<u8> = GeneralizedMap::new(2);
        let ids: Vec<u64> = (0..5)
            .map(|_| g.insert(Dart::new(2)).unwrap().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(g.len(), 5);
        for (id, dart) in g.iter() {
            assert_eq!(dart.id(), Some(id));
        }
    }

    #[test]
    fn add_dart_and_insert_interleave_ids() {
        let mut g: GeneralizedMap<u8> = GeneralizedMap::new(1);
        let a = g.add_dart();
        let b = g.insert(Dart::new(1)).unwrap();
        let c = g.add_dart();
        assert_eq!([a.get(), b.get(), c.get()], [1, 2, 3]);
        for (id, dart) in g.iter() {
            assert_eq!(dart.id(), Some(id));
            assert_eq!(dart.dimension(), 1);
        }
    }

    #[test]
    fn insert_wrong_dimension_is_rejected() {
        let mut g: GeneralizedMap<u8> = GeneralizedMap::new(2);
        g.add_dart();
        let err = g.insert(Dart::new(3)).unwrap_err();
        assert_eq!(
            err,
            GMapError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn contains_and_lookup() {
        let mut g: GeneralizedMap<()> = GeneralizedMap::with_capacity(1, 4);
        assert!(g.is_empty());
        let a = g.add_dart();
        let foreign = DartId::new(2).unwrap();
        assert!(g.contains(a));
        assert!(!g.contains(foreign));
        assert!(g.dart(foreign).is_none());
        assert!(g.dart_mut(a).is_some());
    }

    #[test]
    fn link_and_free() {
        let mut g: GeneralizedMap<()> = GeneralizedMap::new(2);
        let ds = g.add_darts(3);
        g.link_alpha(ds[0], ds[1], 2);
        g.set_alpha(ds[2], 1, Some(ds[0]));
        assert_eq!(g.alpha(ds[0], 2), Some(ds[1]));
        assert_eq!(g.alpha(ds[1], 2), Some(ds[0]));
        assert!(g.is_free(ds[0], 1));
        assert_eq!(g.alpha(ds[2], 1), Some(ds[0]));
        assert_eq!(g.alpha(ds[0], 0), None);
    }

    #[test]
    fn dart_ids_follow_insertion_order() {
        let mut g: GeneralizedMap<()> = GeneralizedMap::new(0);
        let ds = g.add_darts(4);
        assert_eq!(g.dart_ids().collect::<Vec<_>>(), ds);
    }

    #[test]
    #[should_panic]
    fn indexing_foreign_dart_panics() {
        let g: GeneralizedMap<()> = GeneralizedMap::new(1);
        let _ = &g[DartId::new(1).unwrap()];
    }

    #[test]
    fn json_roundtrip_keeps_links() {
        let mut g: GeneralizedMap<String> = GeneralizedMap::new(1);
        let a = g.add_dart();
        let b = g.add_dart();
        g.link_alpha(a, b, 1);
        g[a].set_embedding(0, "v".to_string());
        let s = serde_json::to_string(&g).unwrap();
        let back: GeneralizedMap<String> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.dimension(), 1);
        assert_eq!(back.alpha(b, 1), Some(a));
        assert_eq!(back.embedding(a, 0), "v");
        assert_eq!(back[b].id(), Some(b));
    }
}
