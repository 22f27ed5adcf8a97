//! Top-level module for generalized map topology.
//!
//! This module provides the core types for representing a cellular complex
//! as a generalized map:
//! - `DartId` handles and `Dart` records
//! - `Orbit` descriptions of which involutions to follow
//! - The `GeneralizedMap` arena owning every dart
//! - Structural validation through [`DebugInvariants`](crate::DebugInvariants)

pub mod dart;
pub mod gmap;
pub mod orbit;
pub mod validation;

pub use dart::{Dart, DartId};
pub use gmap::GeneralizedMap;
pub use orbit::Orbit;
