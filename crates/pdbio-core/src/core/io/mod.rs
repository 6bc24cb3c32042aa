//! Provides input/output functionality for structure files.
//!
//! The [`traits::StructureFile`] trait is the common reading/writing interface;
//! [`pdb::PdbFile`] implements it for the Protein Data Bank fixed-column format.
//! Parsing and output behaviour is configured through [`options`].

pub mod options;
pub mod pdb;
pub mod traits;
