#![allow(dead_code)]
use mesh_gmap::topology::{DartId, GeneralizedMap};

pub fn did(u: u64) -> DartId {
    DartId::new(u).unwrap()
}

/// Appends a closed polygon with `edges` edges (2 * `edges` darts) to `g`.
///
/// Dart `2e` and `2e + 1` form edge `e` (alpha_0); dart `2e + 1` and
/// `2e + 2` share a vertex (alpha_1). Returns the new darts in order.
pub fn polygon<T: Default>(g: &mut GeneralizedMap<T>, edges: usize) -> Vec<DartId> {
    let n = 2 * edges;
    let ds = g.add_darts(n);
    for e in 0..edges {
        g.link_alpha(ds[2 * e], ds[2 * e + 1], 0);
        g.link_alpha(ds[2 * e + 1], ds[(2 * e + 2) % n], 1);
    }
    ds
}

/// Appends an open edge (two darts linked by alpha_0) to `g`.
pub fn edge<T: Default>(g: &mut GeneralizedMap<T>) -> (DartId, DartId) {
    let a = g.add_dart();
    let b = g.add_dart();
    g.link_alpha(a, b, 0);
    (a, b)
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
