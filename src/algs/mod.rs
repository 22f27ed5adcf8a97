//! Re-export public algorithms.

pub mod cell;
pub mod embedding;
pub mod sew;
pub mod traversal;

pub use cell::{cell_count, cells, collect_cell_darts, find_cell_key};
pub use embedding::{dispatch_embedding, embed_cell, share_copy_embedding};
pub use sew::{sew, try_sew};
pub use traversal::{orbit_darts, traverse};
