//! # Models Module
//!
//! Plain data types for the records of a PDB file and the [`structure::Structure`]
//! container that owns them.
//!
//! - [`atom`] - `ATOM`/`HETATM` records
//! - [`bond`] - `SSBOND` disulfide bonds and residue references
//! - [`transform`] - symmetry operators (`REMARK 290`) and `MTRIX` transformations
//! - [`crystal`] - `CRYST1` unit-cell parameters
//! - [`structure`] - the owning container

pub mod atom;
pub mod bond;
pub mod crystal;
pub mod structure;
pub mod transform;
