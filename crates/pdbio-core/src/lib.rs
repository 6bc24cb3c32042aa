//! # pdbio
//!
//! Reading and writing of Protein Data Bank (PDB) fixed-column structure files.
//!
//! - **[`core`]** holds the record models (`Structure`, `Atom`, ...) and the
//!   format I/O: a single-pass reader that reports recoverable issues as
//!   warnings (or errors, in strict mode) and a writer that emits column-exact
//!   records.
//! - **[`workflows`]** combines the two, e.g. for converting a file while
//!   selecting which record kinds survive.
//!
//! ```no_run
//! use pdbio::core::io::options::{ReadOptions, WriteOptions};
//! use pdbio::core::io::pdb::PdbFile;
//! use pdbio::core::io::traits::StructureFile;
//!
//! let (structure, report) = PdbFile::read_from_path("1abc.pdb", &ReadOptions::default())?;
//! println!("{} atoms, {} warnings", structure.atom_count(), report.warnings.len());
//! PdbFile::write_to_path(&structure, &WriteOptions::complete(), "copy.pdb")?;
//! # Ok::<(), pdbio::core::io::pdb::PdbError>(())
//! ```

pub mod core;
pub mod workflows;
