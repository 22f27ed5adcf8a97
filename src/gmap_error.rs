//! GMapError: Unified error type for mesh-gmap public APIs
//!
//! Core topology operations are infallible and report absence with `Option`.
//! This error type is returned by the checked entry points (`DartId::new`,
//! `GeneralizedMap::insert`, `try_sew`) and by structural validation.

use thiserror::Error;

use crate::topology::dart::DartId;

/// Unified error type for mesh-gmap operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GMapError {
    /// Attempted to construct a DartId with a zero value (invalid).
    #[error("DartId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidDartId,
    /// A dart's slot count does not match the map it is inserted into.
    #[error("dimension mismatch: map has dimension {expected}, dart has dimension {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// An involution index beyond the map's dimension was requested.
    #[error("dimension {dim} out of range (map dimension is {max})")]
    DimensionOutOfRange { dim: usize, max: usize },
    /// The dart id does not belong to this map.
    #[error("dart {0} is not owned by this map")]
    UnknownDart(DartId),
    /// A boundary dart already has the sewing involution set.
    #[error("dart {dart} is already sewn along alpha_{dim}")]
    AlreadySewn { dart: DartId, dim: usize },
    /// The two boundaries to sew do not have the same number of darts.
    #[error("boundary mismatch: left boundary has {left} darts, right has {right}")]
    BoundaryMismatch { left: usize, right: usize },
    /// Sewing a cell onto itself would pair `dart` with two different darts.
    #[error("sewing along alpha_{dim} pairs dart {dart} with two different darts")]
    NonInvolutiveSewing { dart: DartId, dim: usize },
    /// `alpha_dim(alpha_dim(dart)) != dart`.
    #[error("involution broken at dart {dart} along alpha_{dim}")]
    BrokenInvolution { dart: DartId, dim: usize },
    /// An alpha link points to a dart the map does not own.
    #[error("dart {dart} links along alpha_{dim} to unknown dart {target}")]
    DanglingAlpha {
        dart: DartId,
        dim: usize,
        target: DartId,
    },
    /// Two darts of the same cell both claim to be its embedding key.
    #[error("duplicate key darts {first} and {second} in one {dim}-cell")]
    DuplicateKey {
        dim: usize,
        first: DartId,
        second: DartId,
    },
    /// A dart's stored id does not match its position in the map.
    #[error("dart stored at position {expected} carries id {found:?}")]
    MisplacedDart {
        expected: DartId,
        found: Option<DartId>,
    },
}
