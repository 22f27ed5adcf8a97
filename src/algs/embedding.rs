//! Cell embeddings: propagation and merging.
//!
//! An embedding of a `k`-cell is stored on every dart of the cell, with one
//! dart flagged as the cell's key. These routines keep the copies in sync.

use crate::algs::cell::{collect_cell_darts, find_cell_key};
use crate::topology::dart::DartId;
use crate::topology::gmap::GeneralizedMap;

/// Writes `value` into the `k`-embedding of every dart of `d`'s `k`-cell.
///
/// Key flags are left untouched.
pub fn dispatch_embedding<T: Clone>(gmap: &mut GeneralizedMap<T>, d: DartId, k: usize, value: T) {
    let cell = collect_cell_darts(gmap, d, k);
    log::trace!("dispatching {k}-embedding over {} darts from {d}", cell.len());
    for c in cell {
        gmap[c].set_embedding(k, value.clone());
    }
}

/// Makes `d` the key of its `k`-cell and gives the whole cell `value`.
///
/// Any previous key of the cell is retired.
pub fn embed_cell<T: Clone>(gmap: &mut GeneralizedMap<T>, d: DartId, k: usize, value: T) {
    if let Some(old) = find_cell_key(gmap, d, k) {
        gmap[old].set_key(k, false);
    }
    gmap[d].set_key(k, true);
    dispatch_embedding(gmap, d, k, value);
}

/// Merges the `k`-embeddings of the cells of `d1` and `d2` into one value.
///
/// If `d1`'s cell already has a key, that cell takes `d2`'s value and `d1`
/// becomes its key. Otherwise `d2`'s cell takes `d1`'s value and `d2` becomes
/// its key. In both cases the replaced key, if any, is retired.
pub fn share_copy_embedding<T: Clone>(
    gmap: &mut GeneralizedMap<T>,
    d1: DartId,
    d2: DartId,
    k: usize,
) {
    let (target, value, old_key) = match find_cell_key(gmap, d1, k) {
        Some(k1) => (d1, gmap[d2].embedding(k).clone(), Some(k1)),
        None => (d2, gmap[d1].embedding(k).clone(), find_cell_key(gmap, d2, k)),
    };
    log::debug!("share {k}-embedding of {d1}/{d2}: {target} becomes key");
    if let Some(old) = old_key {
        gmap[old].set_key(k, false);
    }
    gmap[target].set_key(k, true);
    dispatch_embedding(gmap, target, k, value);
}
