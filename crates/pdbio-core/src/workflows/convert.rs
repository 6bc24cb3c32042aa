use crate::core::io::options::{ReadOptions, WriteOptions};
use crate::core::io::pdb::{PdbError, PdbFile, ReadReport};
use crate::core::io::traits::StructureFile;
use std::path::Path;
use tracing::{info, warn};

/// Options for a conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    pub read: ReadOptions,
    pub write: WriteOptions,
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSummary {
    pub report: ReadReport,
    pub atoms_written: usize,
    pub bonds_written: usize,
    pub symmetries_written: usize,
    pub matrices_written: usize,
    pub crystal_written: bool,
}

/// Reads `input` and writes the selected records to `output`.
///
/// # Arguments
///
/// * `input` - Path of the PDB file to read.
/// * `output` - Path of the PDB file to create or overwrite.
/// * `config` - Read strictness and the record kinds to write.
///
/// # Errors
///
/// Returns any [`PdbError`] from reading or writing. The output file is not
/// touched when reading fails.
pub fn run(input: &Path, output: &Path, config: &ConvertConfig) -> Result<ConvertSummary, PdbError> {
    let (structure, report) = PdbFile::read_from_path(input, &config.read)?;
    if report.has_warnings() {
        warn!(
            "{} issue(s) were recovered from while reading {}.",
            report.warnings.len(),
            input.display()
        );
    }

    if config.write.is_atoms_only() && !structure.is_empty() && structure.atom_count() == 0 {
        warn!("Input has no atoms; only non-atom records were found and none will be written.");
    }

    PdbFile::write_to_path(&structure, &config.write, output)?;

    let summary = ConvertSummary {
        report,
        atoms_written: structure.atom_count(),
        bonds_written: if config.write.bonds { structure.bond_count() } else { 0 },
        symmetries_written: if config.write.symmetries {
            structure.symmetry_count()
        } else {
            0
        },
        matrices_written: if config.write.matrices {
            structure.matrix_count()
        } else {
            0
        },
        crystal_written: config.write.crystal && structure.crystal().is_some(),
    };
    info!(
        "Converted {} -> {} ({} atoms).",
        input.display(),
        output.display(),
        summary.atoms_written
    );
    Ok(summary)
}
