//! Cell collection, enumeration and key lookup.
//!
//! The `k`-cell of a dart is its orbit under every involution except
//! `alpha_k`. Everything that works on whole cells (embedding dispatch,
//! key lookup, sewing) goes through [`collect_cell_darts`].

use crate::algs::traversal::orbit_darts;
use crate::topology::dart::DartId;
use crate::topology::gmap::GeneralizedMap;
use crate::topology::orbit::Orbit;

/// Darts of the `k`-cell containing `d`, in traversal order.
///
/// The first element is always `d`. Two cells with the same combinatorial
/// structure, collected from corresponding start darts, come out in
/// corresponding order.
///
/// # Panics
/// Panics if `d` is not owned by `gmap`.
pub fn collect_cell_darts<T>(gmap: &GeneralizedMap<T>, d: DartId, k: usize) -> Vec<DartId> {
    orbit_darts(gmap, &Orbit::cell(gmap.dimension(), k), d)
}

/// Every `k`-cell of the map, each listed once.
///
/// Cells are ordered by their smallest dart id, and each one is collected
/// starting from that dart.
pub fn cells<T>(gmap: &GeneralizedMap<T>, k: usize) -> Vec<Vec<DartId>> {
    let mut covered = vec![false; gmap.len()];
    let mut out = Vec::new();
    for d in gmap.dart_ids() {
        if covered[d.index()] {
            continue;
        }
        let cell = collect_cell_darts(gmap, d, k);
        for c in &cell {
            covered[c.index()] = true;
        }
        out.push(cell);
    }
    out
}

/// Number of `k`-cells in the map.
pub fn cell_count<T>(gmap: &GeneralizedMap<T>, k: usize) -> usize {
    cells(gmap, k).len()
}

/// The dart holding the canonical `k`-embedding of `d`'s `k`-cell, if any.
///
/// If a cell erroneously has several keys, the first one in traversal order
/// is returned.
pub fn find_cell_key<T>(gmap: &GeneralizedMap<T>, d: DartId, k: usize) -> Option<DartId> {
    collect_cell_darts(gmap, d, k)
        .into_iter()
        .find(|&c| gmap[c].is_key(k))
}
