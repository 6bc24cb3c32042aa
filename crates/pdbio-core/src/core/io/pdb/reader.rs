use super::error::{PdbError, PdbIssue};
use super::records::{self, OperatorRow, RecordKind, RecordLine};
use super::report::{Diagnostics, ReadReport, RecordCounts};
use crate::core::io::options::ReadOptions;
use crate::core::models::structure::Structure;
use crate::core::models::transform::{SymmetryOperator, TransformMatrix};
use nalgebra::{Matrix3, Vector3};
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::{debug, info};

/// Collects the three rows of one operator, which may be spread across the file.
#[derive(Debug, Default)]
struct OperatorAccumulator {
    rows: [Option<([f64; 3], f64)>; 3],
    given: bool,
    last_line: usize,
}

impl OperatorAccumulator {
    /// Stores a row, returning `true` if it replaced an earlier copy of the same row.
    fn insert(&mut self, row: &OperatorRow, line: usize) -> bool {
        self.given |= row.given;
        self.last_line = line;
        self.rows[row.row]
            .replace((row.values, row.translation))
            .is_some()
    }

    fn missing_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }

    fn finish(&self) -> Option<(Matrix3<f64>, Vector3<f64>)> {
        let [Some((r1, t1)), Some((r2, t2)), Some((r3, t3))] = self.rows else {
            return None;
        };
        let matrix = Matrix3::new(
            r1[0], r1[1], r1[2], //
            r2[0], r2[1], r2[2], //
            r3[0], r3[1], r3[2],
        );
        Some((matrix, Vector3::new(t1, t2, t3)))
    }
}

/// An operator whose three rows have all been seen.
struct FinishedOperator {
    matrix: Matrix3<f64>,
    translation: Vector3<f64>,
    given: bool,
}

#[derive(Default)]
struct OperatorTable {
    accumulators: BTreeMap<i32, OperatorAccumulator>,
}

impl OperatorTable {
    fn add_row(
        &mut self,
        kind: RecordKind,
        row: OperatorRow,
        line: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), PdbError> {
        let accumulator = self.accumulators.entry(row.index).or_default();
        if accumulator.insert(&row, line) {
            diagnostics.report(
                line,
                PdbIssue::DuplicateRow {
                    record: kind,
                    index: row.index,
                    row: row.row + 1,
                },
            )?;
        }
        Ok(())
    }

    /// Finalizes every accumulator in index order, dropping incomplete ones and
    /// checking that the remaining indices run 1, 2, 3, ...
    fn finish(
        self,
        kind: RecordKind,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<(i32, FinishedOperator)>, PdbError> {
        let mut finished = Vec::with_capacity(self.accumulators.len());
        let mut expected = Some(1);
        for (index, accumulator) in self.accumulators {
            let Some((matrix, translation)) = accumulator.finish() else {
                diagnostics.report(
                    accumulator.last_line,
                    PdbIssue::IncompleteOperator {
                        record: kind,
                        index,
                        missing: accumulator.missing_rows(),
                    },
                )?;
                continue;
            };
            if let Some(next) = expected {
                if index == next {
                    expected = Some(next + 1);
                } else {
                    diagnostics.report(
                        accumulator.last_line,
                        PdbIssue::NonContiguousIndex {
                            record: kind,
                            expected: next,
                            found: index,
                        },
                    )?;
                    expected = None;
                }
            }
            finished.push((
                index,
                FinishedOperator {
                    matrix,
                    translation,
                    given: accumulator.given,
                },
            ));
        }
        Ok(finished)
    }
}

/// Strips the trailing `\n` / `\r\n` (or stray `\r`) from a raw line.
fn trim_line_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    &line[..end]
}

/// Reads a PDB stream into a [`Structure`] in a single pass.
///
/// Lines are classified by prefix and dispatched to the record parsers.
/// Columns are taken from the raw bytes; invalid UTF-8 only affects the text
/// of the field that contains it.
/// Atoms and disulfide bonds are appended in file order; symmetry and `MTRIX`
/// rows are merged per index and turned into operators once the input is
/// exhausted. The last `CRYST1` line wins. Unrecognized lines are skipped.
///
/// # Arguments
///
/// * `reader` - Any buffered reader that yields PDB lines.
/// * `options` - Controls whether per-line issues are warnings or errors.
///
/// # Errors
///
/// Returns [`PdbError::Io`] if reading fails, or [`PdbError::Parse`] for the
/// first issue when `options` is strict.
pub fn read_structure<R: BufRead + ?Sized>(
    reader: &mut R,
    options: &ReadOptions,
) -> Result<(Structure, ReadReport), PdbError> {
    let mut structure = Structure::new();
    let mut diagnostics = Diagnostics::new(options.strictness);
    let mut counts = RecordCounts::default();
    let mut symmetries = OperatorTable::default();
    let mut matrices = OperatorTable::default();

    let mut buffer = Vec::new();
    let mut line_num = 0;
    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_num += 1;

        let bytes = trim_line_end(&buffer);
        let Some(kind) = RecordKind::classify(bytes) else {
            continue;
        };
        counts.record(kind);
        let line = RecordLine::new(bytes, line_num, kind);

        match kind {
            RecordKind::SsBond => {
                if let Some(bond) = records::parse_ssbond(&line, &mut diagnostics)? {
                    structure.add_bond(bond);
                }
            }
            RecordKind::Atom => {
                if let Some(atom) = records::parse_atom(&line, &mut diagnostics)? {
                    structure.add_atom(atom);
                }
            }
            RecordKind::Symmetry => {
                if let Some(row) = records::parse_symmetry_row(&line, &mut diagnostics)? {
                    symmetries.add_row(kind, row, line.number(), &mut diagnostics)?;
                }
            }
            RecordKind::Matrix => {
                if let Some(row) = records::parse_matrix_row(&line, &mut diagnostics)? {
                    matrices.add_row(kind, row, line.number(), &mut diagnostics)?;
                }
            }
            RecordKind::Crystal => {
                if let Some(cell) = records::parse_crystal(&line, &mut diagnostics)? {
                    debug!(
                        "Crystal: {:.3} {:.3} {:.3} {:.2} {:.2} {:.2}",
                        cell.a, cell.b, cell.c, cell.alpha, cell.beta, cell.gamma
                    );
                    if structure.set_crystal(cell).is_some() {
                        debug!("Line {}: replacing earlier CRYST1 record", line_num);
                    }
                }
            }
        }
    }

    for (index, op) in symmetries.finish(RecordKind::Symmetry, &mut diagnostics)? {
        structure.add_symmetry(SymmetryOperator::new(index, op.matrix, op.translation));
    }
    for (index, op) in matrices.finish(RecordKind::Matrix, &mut diagnostics)? {
        structure.add_matrix(TransformMatrix::new(
            index,
            op.matrix,
            op.translation,
            op.given,
        ));
    }

    info!(
        "Found: {} atoms, {} S-S bonds, {} symmetry entries, {} transformation matrices",
        structure.atom_count(),
        structure.bond_count(),
        structure.symmetry_count(),
        structure.matrix_count()
    );

    let report = ReadReport {
        counts,
        warnings: diagnostics.into_warnings(),
    };
    Ok((structure, report))
}
