//! Structural validation of generalized maps.

use crate::algs::cell::cells;
use crate::debug_invariants::DebugInvariants;
use crate::gmap_error::GMapError;
use crate::topology::gmap::GeneralizedMap;

impl<T> DebugInvariants for GeneralizedMap<T> {
    /// Checks, in order:
    /// 1. every dart carries the id of its position and the map's dimension;
    /// 2. every set alpha points to a dart of the map;
    /// 3. every set alpha is an involution (`alpha_i(alpha_i(d)) == d`);
    /// 4. no cell of any dimension has more than one key dart.
    fn validate_invariants(&self) -> Result<(), GMapError> {
        for (id, dart) in self.iter() {
            if dart.id() != Some(id) {
                return Err(GMapError::MisplacedDart {
                    expected: id,
                    found: dart.id(),
                });
            }
            if dart.dimension() != self.dimension() {
                return Err(GMapError::DimensionMismatch {
                    expected: self.dimension(),
                    found: dart.dimension(),
                });
            }
        }

        for (id, dart) in self.iter() {
            for i in 0..=self.dimension() {
                if let Some(target) = dart.alpha(i) {
                    if !self.contains(target) {
                        return Err(GMapError::DanglingAlpha {
                            dart: id,
                            dim: i,
                            target,
                        });
                    }
                }
            }
        }

        for (id, dart) in self.iter() {
            for i in 0..=self.dimension() {
                if let Some(target) = dart.alpha(i) {
                    if self.alpha(target, i) != Some(id) {
                        return Err(GMapError::BrokenInvolution { dart: id, dim: i });
                    }
                }
            }
        }

        for k in 0..=self.dimension() {
            for cell in cells(self, k) {
                let mut keys = cell.into_iter().filter(|&d| self.is_key(d, k));
                if let (Some(first), Some(second)) = (keys.next(), keys.next()) {
                    log::warn!("{k}-cell has several keys: {first}, {second}");
                    return Err(GMapError::DuplicateKey {
                        dim: k,
                        first,
                        second,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::embedding::embed_cell;
    use crate::topology::dart::DartId;

    fn edge() -> (GeneralizedMap<u8>, DartId, DartId) {
        let mut g = GeneralizedMap::new(1);
        let a = g.add_dart();
        let b = g.add_dart();
        g.link_alpha(a, b, 0);
        (g, a, b)
    }

    #[test]
    fn well_formed_map_passes() {
        let (mut g, a, _) = edge();
        embed_cell(&mut g, a, 1, 3);
        assert_eq!(g.validate_invariants(), Ok(()));
        g.debug_assert_invariants();
    }

    #[test]
    fn one_way_link_is_broken_involution() {
        let (mut g, a, _) = edge();
        let c = g.add_dart();
        g.set_alpha(c, 1, Some(a));
        assert_eq!(
            g.validate_invariants(),
            Err(GMapError::BrokenInvolution { dart: c, dim: 1 })
        );
    }

    #[test]
    fn link_to_foreign_dart_is_dangling() {
        let (mut g, a, _) = edge();
        let ghost = DartId::new(10).unwrap();
        g.set_alpha(a, 1, Some(ghost));
        assert_eq!(
            g.validate_invariants(),
            Err(GMapError::DanglingAlpha {
                dart: a,
                dim: 1,
                target: ghost
            })
        );
    }

    #[test]
    fn two_keys_in_one_cell() {
        let (mut g, a, b) = edge();
        g[a].set_key(1, true);
        g[b].set_key(1, true);
        assert_eq!(
            g.validate_invariants(),
            Err(GMapError::DuplicateKey {
                dim: 1,
                first: a,
                second: b
            })
        );
    }

    #[test]
    fn deserialized_map_with_wrong_slot_count() {
        let (g, _, _) = edge();
        let mut json: serde_json::Value = serde_json::to_value(&g).unwrap();
        json["dimension"] = serde_json::json!(2);
        let bad: GeneralizedMap<u8> = serde_json::from_value(json).unwrap();
        assert_eq!(
            bad.validate_invariants(),
            Err(GMapError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }
}
