//! Orbits: which involutions a traversal follows.
//!
//! An [`Orbit`] is an ordered list of dimension indices. Traversing a map
//! "under the orbit `<alpha_0, alpha_2>`" means repeatedly following only
//! `alpha_0` and `alpha_2` from the start dart. The `k`-cell containing a dart
//! is its orbit under every involution except `alpha_k`.

use serde::{Deserialize, Serialize};

/// Ordered set of involution indices used to parameterize a traversal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orbit {
    dims: Vec<usize>,
}

impl Orbit {
    /// The empty orbit: a traversal under it visits only its start dart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an orbit from an explicit sequence of dimensions.
    ///
    /// Order is kept and duplicates are dropped.
    pub fn from_dims<I: IntoIterator<Item = usize>>(dims: I) -> Self {
        let mut out: Vec<usize> = Vec::new();
        for d in dims {
            if !out.contains(&d) {
                out.push(d);
            }
        }
        Self { dims: out }
    }

    /// All dimensions `0..=dim` except those listed in `exclude`, ascending.
    ///
    /// ```rust
    /// # use mesh_gmap::topology::orbit::Orbit;
    /// let o = Orbit::all_but(3, &[1]);
    /// assert_eq!(o.dims(), &[0, 2, 3]);
    /// ```
    pub fn all_but(dim: usize, exclude: &[usize]) -> Self {
        Self {
            dims: (0..=dim).filter(|j| !exclude.contains(j)).collect(),
        }
    }

    /// Orbit spanning the `k`-cells of a `dim`-dimensional map.
    #[inline]
    pub fn cell(dim: usize, k: usize) -> Self {
        Self::all_but(dim, &[k])
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.dims.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    #[inline]
    pub fn contains(&self, dim: usize) -> bool {
        self.dims.contains(&dim)
    }
}

impl FromIterator<usize> for Orbit {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_dims(iter)
    }
}

impl<'a> IntoIterator for &'a Orbit {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.iter().copied()
    }
}
