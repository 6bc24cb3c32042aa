//! Protein Data Bank (PDB) fixed-column format.
//!
//! Recognized records are `ATOM`/`HETATM`, `SSBOND`, `REMARK 290   SMTRY`,
//! `MTRIX` and `CRYST1`; every other line is skipped. Reading is a single pass
//! over the input. Writing emits `ATOM` lines followed by `END`, optionally
//! preceded by the other record kinds (see [`WriteOptions`]).

mod columns;
mod error;
mod reader;
mod records;
mod report;
mod writer;

pub use columns::{Columns, FieldParse, parse_field};
pub use error::{PdbError, PdbIssue};
pub use reader::read_structure;
pub use records::RecordKind;
pub use report::{ParseWarning, ReadReport, RecordCounts};
pub use writer::{format_atom_line, write_structure};

use crate::core::io::options::{ReadOptions, WriteOptions};
use crate::core::io::traits::StructureFile;
use crate::core::models::structure::Structure;
use std::io::{BufRead, Write};

pub struct PdbFile;

impl StructureFile for PdbFile {
    type ReadOptions = ReadOptions;
    type WriteOptions = WriteOptions;
    type Report = ReadReport;
    type Error = PdbError;

    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::ReadOptions,
    ) -> Result<(Structure, Self::Report), Self::Error> {
        read_structure(reader, options)
    }

    fn write_to(
        structure: &Structure,
        options: &Self::WriteOptions,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        write_structure(structure, options, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::traits::{AccessMode, FileAccessError};
    use crate::core::models::atom::Atom;
    use nalgebra::Point3;

    #[test]
    fn path_round_trip_preserves_atoms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdb");

        let mut structure = Structure::new();
        let mut atom = Atom::new(1, "CA", "ALA", 'A', 10, Point3::new(1.234, 2.345, 3.456));
        atom.temperature_factor = 20.0;
        structure.add_atom(atom);

        PdbFile::write_to_path(&structure, &WriteOptions::default(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("\nEND"));

        let (reread, report) = PdbFile::read_from_path(&path, &ReadOptions::strict()).unwrap();
        assert_eq!(reread.atoms(), structure.atoms());
        assert_eq!(report.counts.atom_lines, 1);
    }

    #[test]
    fn missing_input_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.pdb");

        let err = PdbFile::read_from_path(&path, &ReadOptions::default()).unwrap_err();

        match err {
            PdbError::FileAccess(FileAccessError {
                path: reported,
                mode,
                ..
            }) => {
                assert_eq!(reported, path);
                assert_eq!(mode, AccessMode::Read);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = PdbFile::read_from_path(&path, &ReadOptions::default())
            .unwrap_err()
            .to_string();
        assert!(message.contains("does-not-exist.pdb"));
        assert!(message.contains("reading"));
    }

    #[test]
    fn unwritable_output_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.pdb");

        let err = PdbFile::write_to_path(&Structure::new(), &WriteOptions::default(), &path)
            .unwrap_err();

        assert!(matches!(
            err,
            PdbError::FileAccess(FileAccessError {
                mode: AccessMode::Write,
                ..
            })
        ));
    }

    #[test]
    fn overflow_leaves_existing_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.pdb");
        std::fs::write(&path, "previous contents").unwrap();

        let mut structure = Structure::new();
        structure.add_atom(Atom::new(1, "N", "ALA", 'A', 1, Point3::origin()));
        structure.add_atom(Atom::new(123_456, "CA", "ALA", 'A', 1, Point3::origin()));

        let err = PdbFile::write_to_path(&structure, &WriteOptions::default(), &path).unwrap_err();

        assert!(matches!(err, PdbError::FieldOverflow { field: "serial", .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous contents");
    }
}
