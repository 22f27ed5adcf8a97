//! Structural self-checks.
//!
//! The core never validates its input while working: sewing malformed cells
//! or linking darts one way only yields an inconsistent map, not an error.
//! Types implementing [`DebugInvariants`] can be audited on demand instead.

use crate::gmap_error::GMapError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), GMapError>;

    /// Panic on the first violation, in debug builds or with the
    /// `strict-invariants` feature. No-op otherwise.
    fn debug_assert_invariants(&self) {
        if cfg!(any(debug_assertions, feature = "strict-invariants")) {
            if let Err(e) = self.validate_invariants() {
                panic!("[invariants] debug_assert_invariants: {e}");
            }
        }
    }
}
