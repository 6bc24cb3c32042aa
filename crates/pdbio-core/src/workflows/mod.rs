//! # Workflows Module
//!
//! High-level procedures that combine reading and writing.
//!
//! - [`convert`] - read a PDB file and write it back out with the selected record kinds

pub mod convert;
