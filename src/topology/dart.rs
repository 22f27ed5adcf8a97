//! `DartId` and `Dart`: the atomic elements of a generalized map
//!
//! Every dart of a map is addressed by a `DartId`, a strong handle wrapping a
//! nonzero `u64`. The value `0` is reserved, so "no neighbor" is spelled
//! `Option<DartId>::None` and costs nothing extra in memory.
//!
//! This module provides:
//! - A transparent `DartId` newtype around `NonZeroU64`.
//! - `Dart<T>`, which carries the involution links, per-dimension embeddings
//!   and per-dimension key flags of one dart.

use std::{fmt, num::NonZeroU64};

use serde::{Deserialize, Serialize};

use crate::gmap_error::GMapError;

/// Strong handle for a dart inside a [`GeneralizedMap`](crate::topology::gmap::GeneralizedMap).
///
/// Ids are assigned by the map on insertion: the `n`-th inserted dart gets
/// id `n`, starting at 1.
///
/// # Memory layout
/// This type is `repr(transparent)` over `NonZeroU64`, so both `DartId` and
/// `Option<DartId>` have the size of a `u64`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DartId(NonZeroU64);

impl DartId {
    /// Creates a new `DartId` from a raw `u64` value.
    ///
    /// # Errors
    ///
    /// Returns [`GMapError::InvalidDartId`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mesh_gmap::topology::dart::DartId;
    /// let d = DartId::new(1).unwrap();
    /// assert_eq!(d.get(), 1);
    /// assert!(DartId::new(0).is_err());
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, GMapError> {
        NonZeroU64::new(raw)
            .map(DartId)
            .ok_or(GMapError::InvalidDartId)
    }

    /// Returns the inner `u64` value of this `DartId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// Zero-based position of the dart in its owning map.
    #[inline]
    pub(crate) fn index(self) -> usize {
        (self.get() - 1) as usize
    }

    /// Id of the dart stored at zero-based position `pos`.
    #[inline]
    pub(crate) fn from_index(pos: usize) -> Self {
        DartId(NonZeroU64::MIN.saturating_add(pos as u64))
    }
}

impl fmt::Debug for DartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DartId").field(&self.get()).finish()
    }
}

impl fmt::Display for DartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// One dart of a `D`-dimensional generalized map.
///
/// A dart stores, for every dimension `i` in `0..=D`:
/// - `alpha(i)`: the dart reached through the involution `alpha_i`, if any;
/// - `embedding(i)`: the value of the `i`-cell this dart belongs to;
/// - `is_key(i)`: whether this dart is the canonical holder of that value.
///
/// Darts have no value equality. Two darts are the same dart exactly when
/// their [`id`](Dart::id)s are equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dart<T> {
    id: Option<DartId>,
    alphas: Box<[Option<DartId>]>,
    embeddings: Box<[T]>,
    keys: Box<[bool]>,
}

impl<T: Default> Dart<T> {
    /// Creates a free dart for a map of the given dimension.
    ///
    /// All alphas are unset, all embeddings are `T::default()` and no key
    /// flag is raised. The dart has no id until it is inserted.
    pub fn new(dimension: usize) -> Self {
        let slots = dimension + 1;
        Self {
            id: None,
            alphas: vec![None; slots].into_boxed_slice(),
            embeddings: (0..slots).map(|_| T::default()).collect(),
            keys: vec![false; slots].into_boxed_slice(),
        }
    }
}

impl<T> Dart<T> {
    /// Id assigned by the owning map, `None` before insertion.
    #[inline]
    pub fn id(&self) -> Option<DartId> {
        self.id
    }

    #[inline]
    pub(crate) fn assign_id(&mut self, id: DartId) {
        self.id = Some(id);
    }

    /// Dimension of the map this dart was created for.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.alphas.len().saturating_sub(1)
    }

    /// Neighbor through `alpha_i`, or `None` if unset or `i > dimension`.
    #[inline]
    pub fn alpha(&self, i: usize) -> Option<DartId> {
        self.alphas.get(i).copied().flatten()
    }

    /// `true` when `alpha_i` is unset (the dart is `i`-free).
    #[inline]
    pub fn is_free(&self, i: usize) -> bool {
        self.alpha(i).is_none()
    }

    /// One-sided write of `alpha_i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > dimension`.
    #[inline]
    pub fn set_alpha(&mut self, i: usize, target: Option<DartId>) {
        self.alphas[i] = target;
    }

    /// Embedding of the `i`-cell containing this dart.
    ///
    /// # Panics
    ///
    /// Panics if `i > dimension`.
    #[inline]
    pub fn embedding(&self, i: usize) -> &T {
        &self.embeddings[i]
    }

    /// Overwrites the `i`-embedding of this dart only.
    ///
    /// Use [`dispatch_embedding`](crate::algs::embedding::dispatch_embedding)
    /// to update a whole cell.
    #[inline]
    pub fn set_embedding(&mut self, i: usize, value: T) {
        self.embeddings[i] = value;
    }

    /// Whether this dart is the canonical key of its `i`-cell.
    #[inline]
    pub fn is_key(&self, i: usize) -> bool {
        self.keys.get(i).copied().unwrap_or(false)
    }

    /// Raises or clears the `i`-key flag.
    ///
    /// # Panics
    ///
    /// Panics if `i > dimension`.
    #[inline]
    pub fn set_key(&mut self, i: usize, key: bool) {
        self.keys[i] = key;
    }
}

// -----------------------------------------------------------------------------
// Testing and assertions
// -----------------------------------------------------------------------------
