//! # mesh-gmap
//!
//! mesh-gmap implements generalized maps (G-maps): a dimension-independent
//! combinatorial representation of cellular complexes (vertices, edges,
//! faces, volumes, …) as a single graph of *darts* linked by involutions
//! `alpha_0 ..= alpha_D`.
//!
//! ## Features
//! - Arena of darts addressed by strong `DartId` handles; "no neighbor" is `None`
//! - Orbit-based depth-first traversal with a traversal-local visited set
//! - Cell collection and enumeration for any dimension `k`
//! - Cell embeddings: application data stored on every dart of a cell, with
//!   one key dart as canonical holder
//! - Sewing of two cells along their boundaries, reconciling every embedding
//!   the sewing merges
//! - Structural validation (involutions, dangling links, key uniqueness)
//!
//! ## Usage
//! ```rust
//! use mesh_gmap::prelude::*;
//!
//! // Two edges a0-a1 and b0-b1 of a 1-map.
//! let mut g: GeneralizedMap<&str> = GeneralizedMap::new(1);
//! let [a0, a1, b0, b1] = [g.add_dart(), g.add_dart(), g.add_dart(), g.add_dart()];
//! g.link_alpha(a0, a1, 0);
//! g.link_alpha(b0, b1, 0);
//! embed_cell(&mut g, a1, 0, "p");
//! embed_cell(&mut g, b0, 0, "q");
//!
//! // Glue the end of the first edge to the start of the second.
//! try_sew(&mut g, a1, b0, 1).unwrap();
//! assert_eq!(g.alpha(a1, 1), Some(b0));
//! assert_eq!(*g.embedding(b0, 0), "p");
//! assert_eq!(find_cell_key(&g, b0, 0), Some(a1));
//! ```
//!
//! ## Threading
//! Every mutation goes through `&mut GeneralizedMap`; traversals only need a
//! shared borrow and keep their visited set to themselves.

pub mod algs;
pub mod debug_invariants;
pub mod gmap_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{
        cell_count, cells, collect_cell_darts, dispatch_embedding, embed_cell, find_cell_key,
        orbit_darts, sew, share_copy_embedding, traverse, try_sew,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::gmap_error::GMapError;
    pub use crate::topology::{Dart, DartId, GeneralizedMap, Orbit};
}
