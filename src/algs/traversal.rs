//! Depth-first orbit traversal over a generalized map.
//!
//! Traversals follow, from each dart, every involution listed in an
//! [`Orbit`]. The visited set lives in the traversal itself, so a map can be
//! traversed through a shared borrow and nothing has to be unmarked after.

use hashbrown::HashSet;

use crate::topology::dart::DartId;
use crate::topology::gmap::GeneralizedMap;
use crate::topology::orbit::Orbit;

/// Visits every dart reachable from `start` under `orbit`, exactly once.
///
/// Uses an explicit stack seeded with `start`; `visit` is called when a dart
/// is popped, so darts come out in LIFO discovery order. Neighbors are
/// discovered in the order the orbit lists its dimensions. Dimensions beyond
/// the map's dimension are treated as unset involutions.
///
/// # Panics
/// Panics if `start` is not owned by `gmap`.
pub fn traverse<T, F>(gmap: &GeneralizedMap<T>, orbit: &Orbit, start: DartId, mut visit: F)
where
    F: FnMut(DartId),
{
    if orbit.iter().any(|j| j > gmap.dimension()) {
        log::trace!(
            "orbit {:?} reaches past map dimension {}",
            orbit.dims(),
            gmap.dimension()
        );
    }
    let mut seen: HashSet<DartId> = HashSet::new();
    let mut stack: Vec<DartId> = vec![start];
    seen.insert(start);

    while let Some(d) = stack.pop() {
        visit(d);
        let dart = &gmap[d];
        for j in orbit {
            if let Some(n) = dart.alpha(j) {
                if seen.insert(n) {
                    stack.push(n);
                }
            }
        }
    }
}

/// Darts of the orbit of `start`, in visit order.
pub fn orbit_darts<T>(gmap: &GeneralizedMap<T>, orbit: &Orbit, start: DartId) -> Vec<DartId> {
    let mut out = Vec::new();
    traverse(gmap, orbit, start, |d| out.push(d));
    out
}
