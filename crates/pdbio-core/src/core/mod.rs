//! # Core Module
//!
//! Data models for PDB records and the file I/O that produces and consumes them.
//!
//! - **Records** ([`models`]) - atoms, disulfide bonds, symmetry operators,
//!   transformation matrices, unit cells and the owning `Structure`
//! - **File I/O** ([`io`]) - the `StructureFile` trait, read/write options and
//!   the PDB reader and writer

pub mod io;
pub mod models;
