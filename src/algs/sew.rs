//! Sewing: gluing two cells along their boundaries.
//!
//! `sew(gmap, d1, d2, dim)` links the `(dim-1)`-cell of `d1` to the
//! `(dim-1)`-cell of `d2` through `alpha_dim`, dart by dart, and reconciles
//! the embeddings of every cell the new links merge. When two merging cells
//! disagree, the cell on the `d1` side wins.
//!
//! [`sew`] trusts its input like the rest of the core; [`try_sew`] checks the
//! boundary first and reports a [`GMapError`] without touching the map.

use hashbrown::HashMap;

use crate::algs::cell::{collect_cell_darts, find_cell_key};
use crate::algs::embedding::dispatch_embedding;
use crate::gmap_error::GMapError;
use crate::topology::dart::DartId;
use crate::topology::gmap::GeneralizedMap;

/// Sews the `dim`-cells of `d1` and `d2` together along `alpha_dim`.
///
/// Boundary darts are paired positionally, in the order
/// [`collect_cell_darts`] returns them for `dim - 1` (for `dim == 0` the
/// boundaries are `d1` and `d2` themselves). If the boundaries differ in
/// size the extra darts are left unsewn.
///
/// For each pair `(p1, p2)` and each dimension `i != dim`, if the `i`-cells
/// of `p1` and `p2` are not already one keyed cell, `p2`'s cell loses its key
/// and takes the value of `p1`'s key (or of `p1` when that cell is unkeyed).
/// Then `alpha_dim` links `p1` and `p2` both ways.
///
/// # Panics
/// Panics if either dart is not owned by `gmap` or `dim` exceeds the map's
/// dimension.
pub fn sew<T: Clone>(gmap: &mut GeneralizedMap<T>, d1: DartId, d2: DartId, dim: usize) {
    let (left, right) = boundaries(gmap, d1, d2, dim);
    if left.len() != right.len() {
        log::warn!(
            "sewing {d1} to {d2} along alpha_{dim}: boundaries have {} and {} darts, truncating",
            left.len(),
            right.len()
        );
    }
    sew_pairs(gmap, &left, &right, dim);
}

/// Checked [`sew`].
///
/// # Errors
/// - [`GMapError::DimensionOutOfRange`] if `dim` exceeds the map dimension;
/// - [`GMapError::UnknownDart`] if `d1` or `d2` is not in the map;
/// - [`GMapError::AlreadySewn`] if a boundary dart is not `dim`-free;
/// - [`GMapError::BoundaryMismatch`] if the two boundaries differ in size;
/// - [`GMapError::NonInvolutiveSewing`] if `d1` and `d2` share a boundary
///   and the positional pairing would link one dart to two partners.
///
/// On error the map is unchanged. Only the boundary darts are inspected;
/// links elsewhere in the map are not validated.
pub fn try_sew<T: Clone>(
    gmap: &mut GeneralizedMap<T>,
    d1: DartId,
    d2: DartId,
    dim: usize,
) -> Result<(), GMapError> {
    if dim > gmap.dimension() {
        return Err(GMapError::DimensionOutOfRange {
            dim,
            max: gmap.dimension(),
        });
    }
    for d in [d1, d2] {
        if !gmap.contains(d) {
            return Err(GMapError::UnknownDart(d));
        }
    }
    let (left, right) = boundaries(gmap, d1, d2, dim);
    if let Some(&dart) = left.iter().chain(&right).find(|&&d| !gmap.is_free(d, dim)) {
        return Err(GMapError::AlreadySewn { dart, dim });
    }
    if left.len() != right.len() {
        return Err(GMapError::BoundaryMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    check_pairing(&left, &right, dim)?;
    sew_pairs(gmap, &left, &right, dim);
    Ok(())
}

/// Rejects pairings where a dart would get two different `alpha_dim` partners.
///
/// Only possible when both boundaries are the same cell walked from two
/// different darts.
fn check_pairing(left: &[DartId], right: &[DartId], dim: usize) -> Result<(), GMapError> {
    let mut partner: HashMap<DartId, DartId> = HashMap::with_capacity(2 * left.len());
    for (&p1, &p2) in left.iter().zip(right) {
        for (a, b) in [(p1, p2), (p2, p1)] {
            if let Some(prev) = partner.insert(a, b) {
                if prev != b {
                    log::warn!("alpha_{dim} pairing sends {a} to both {prev} and {b}");
                    return Err(GMapError::NonInvolutiveSewing { dart: a, dim });
                }
            }
        }
    }
    Ok(())
}

fn boundaries<T>(
    gmap: &GeneralizedMap<T>,
    d1: DartId,
    d2: DartId,
    dim: usize,
) -> (Vec<DartId>, Vec<DartId>) {
    match dim.checked_sub(1) {
        Some(b) => (
            collect_cell_darts(gmap, d1, b),
            collect_cell_darts(gmap, d2, b),
        ),
        None => (vec![d1], vec![d2]),
    }
}

fn sew_pairs<T: Clone>(gmap: &mut GeneralizedMap<T>, left: &[DartId], right: &[DartId], dim: usize) {
    log::debug!(
        "sewing {} dart pairs along alpha_{dim}",
        left.len().min(right.len())
    );
    for (&p1, &p2) in left.iter().zip(right) {
        for i in (0..=gmap.dimension()).filter(|&i| i != dim) {
            merge_cells(gmap, p1, p2, i);
        }
        gmap.link_alpha(p1, p2, dim);
    }
}

/// Folds `p2`'s `i`-cell embedding into `p1`'s.
fn merge_cells<T: Clone>(gmap: &mut GeneralizedMap<T>, p1: DartId, p2: DartId, i: usize) {
    let k1 = find_cell_key(gmap, p1, i);
    let k2 = find_cell_key(gmap, p2, i);
    if k1.is_some() && k1 == k2 {
        return;
    }
    if let Some(k2) = k2 {
        gmap[k2].set_key(i, false);
    }
    let source = k1.unwrap_or(p1);
    let value = gmap[source].embedding(i).clone();
    log::trace!("merging {i}-cell of {p2} into {i}-cell of {p1} (source {source})");
    dispatch_embedding(gmap, p2, i, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::embedding::embed_cell;

    /// Two edges `a0-a1` and `b0-b1` of a 1-map.
    fn two_edges() -> (GeneralizedMap<char>, [DartId; 4]) {
        let mut g = GeneralizedMap::new(1);
        let ds = g.add_darts(4);
        g.link_alpha(ds[0], ds[1], 0);
        g.link_alpha(ds[2], ds[3], 0);
        (g, [ds[0], ds[1], ds[2], ds[3]])
    }

    #[test]
    fn sew_links_both_ways() {
        let (mut g, [_, a1, b0, _]) = two_edges();
        sew(&mut g, a1, b0, 1);
        assert_eq!(g.alpha(a1, 1), Some(b0));
        assert_eq!(g.alpha(b0, 1), Some(a1));
    }

    #[test]
    fn sew_merges_vertex_embeddings_left_wins() {
        let (mut g, [_, a1, b0, _]) = two_edges();
        embed_cell(&mut g, a1, 0, 'A');
        embed_cell(&mut g, b0, 0, 'B');
        sew(&mut g, a1, b0, 1);
        assert_eq!(*g.embedding(b0, 0), 'A');
        assert!(g.is_key(a1, 0));
        assert!(!g.is_key(b0, 0));
        assert_eq!(find_cell_key(&g, b0, 0), Some(a1));
    }

    #[test]
    fn unkeyed_left_still_propagates_its_value() {
        let (mut g, [_, a1, b0, _]) = two_edges();
        dispatch_embedding(&mut g, a1, 0, 'A');
        embed_cell(&mut g, b0, 0, 'B');
        sew(&mut g, a1, b0, 1);
        assert_eq!(*g.embedding(b0, 0), 'A');
        assert_eq!(find_cell_key(&g, a1, 0), None);
    }

    #[test]
    fn sew_at_dimension_zero_links_single_darts() {
        let mut g: GeneralizedMap<()> = GeneralizedMap::new(1);
        let a = g.add_dart();
        let b = g.add_dart();
        sew(&mut g, a, b, 0);
        assert_eq!(g.alpha(a, 0), Some(b));
        assert_eq!(g.alpha(b, 0), Some(a));
    }

    #[test]
    fn try_sew_rejects_bad_input_untouched() {
        let (mut g, [a0, a1, b0, _]) = two_edges();
        assert_eq!(
            try_sew(&mut g, a1, b0, 2),
            Err(GMapError::DimensionOutOfRange { dim: 2, max: 1 })
        );
        let foreign = DartId::new(99).unwrap();
        assert_eq!(
            try_sew(&mut g, a1, foreign, 1),
            Err(GMapError::UnknownDart(foreign))
        );
        try_sew(&mut g, a1, b0, 1).unwrap();
        assert_eq!(
            try_sew(&mut g, a1, a0, 1),
            Err(GMapError::AlreadySewn { dart: a1, dim: 1 })
        );
    }

    #[test]
    fn try_sew_reports_boundary_mismatch() {
        let mut g: GeneralizedMap<char> = GeneralizedMap::new(2);
        let ds = g.add_darts(3);
        g.link_alpha(ds[0], ds[1], 0);
        // 1-cells: orbit <alpha_0, alpha_2>.
        assert_eq!(
            try_sew(&mut g, ds[0], ds[2], 2),
            Err(GMapError::BoundaryMismatch { left: 2, right: 1 })
        );
        assert!(g.is_free(ds[0], 2));
        assert!(g.is_free(ds[2], 2));
    }

    #[test]
    fn pairing_with_two_partners_is_rejected() {
        let a = DartId::new(1).unwrap();
        let b = DartId::new(2).unwrap();
        let c = DartId::new(3).unwrap();
        assert_eq!(
            check_pairing(&[a, b], &[b, c], 1),
            Err(GMapError::NonInvolutiveSewing { dart: b, dim: 1 })
        );
        assert_eq!(check_pairing(&[a, b], &[b, a], 1), Ok(()));
        assert_eq!(check_pairing(&[a], &[a], 1), Ok(()));
    }

    #[test]
    fn try_sew_dart_onto_itself_makes_a_fixed_point() {
        let (mut g, [a0, a1, _, _]) = two_edges();
        try_sew(&mut g, a1, a1, 1).unwrap();
        assert_eq!(g.alpha(a1, 1), Some(a1));
        assert!(g.is_free(a0, 1));
    }
}
