use super::error::PdbError;
use super::records::RecordKind;
use crate::core::io::options::WriteOptions;
use crate::core::models::atom::Atom;
use crate::core::models::bond::DisulfideBond;
use crate::core::models::crystal::UnitCell;
use crate::core::models::structure::Structure;
use nalgebra::{Matrix3, Vector3};
use std::io::Write;
use tracing::debug;

/// Checks that a rendered field fits its column width.
fn fit(
    record: RecordKind,
    field: &'static str,
    rendered: String,
    width: usize,
) -> Result<String, PdbError> {
    if rendered.len() > width || !rendered.is_ascii() {
        return Err(PdbError::FieldOverflow {
            record,
            field,
            value: rendered,
            width,
        });
    }
    Ok(rendered)
}

fn fit_char(record: RecordKind, field: &'static str, c: char) -> Result<char, PdbError> {
    fit(record, field, c.to_string(), 1)?;
    Ok(c)
}

/// Formats one atom as an 80-column `ATOM` line, without a line terminator.
///
/// The layout matches the columns consumed by the reader, so the line parses
/// back to the same atom (coordinates to 3 decimals, occupancy and
/// temperature factor to 2).
///
/// # Errors
///
/// Returns [`PdbError::FieldOverflow`] if any value is wider than its column.
pub fn format_atom_line(atom: &Atom) -> Result<String, PdbError> {
    const R: RecordKind = RecordKind::Atom;
    Ok(format!(
        "ATOM  {} {}{}{} {}{}    {}{}{}{}{}      {}    ",
        fit(R, "serial", format!("{:>5}", atom.serial), 5)?,
        fit(R, "name", format!("{:<4}", atom.name), 4)?,
        fit_char(R, "alternate location", atom.alt_loc)?,
        fit(R, "residue name", format!("{:>3}", atom.residue_name), 3)?,
        fit_char(R, "chain id", atom.chain_id)?,
        fit(R, "residue number", format!("{:>4}", atom.residue_number), 4)?,
        fit(R, "x coordinate", format!("{:>8.3}", atom.position.x), 8)?,
        fit(R, "y coordinate", format!("{:>8.3}", atom.position.y), 8)?,
        fit(R, "z coordinate", format!("{:>8.3}", atom.position.z), 8)?,
        fit(R, "occupancy", format!("{:>6.2}", atom.occupancy), 6)?,
        fit(R, "temperature factor", format!("{:>6.2}", atom.temperature_factor), 6)?,
        fit(R, "segment", format!("{:<4}", atom.segment), 4)?,
    ))
}

fn format_operator_lines(
    record: RecordKind,
    index: i32,
    matrix: &Matrix3<f64>,
    translation: &Vector3<f64>,
    given: bool,
) -> Result<[String; 3], PdbError> {
    let index = fit(record, "index", format!("{:>3}", index), 3)?;
    let mut lines: [String; 3] = Default::default();
    for (row, line) in lines.iter_mut().enumerate() {
        let mut values = Vec::with_capacity(3);
        for col in 0..3 {
            values.push(fit(
                record,
                "matrix element",
                format!("{:>10.6}", matrix[(row, col)]),
                10,
            )?);
        }
        *line = match record {
            RecordKind::Symmetry => format!(
                "REMARK 290   SMTRY{} {}{}{}{}{}",
                row + 1,
                index,
                values[0],
                values[1],
                values[2],
                fit(record, "translation", format!("{:>15.5}", translation[row]), 15)?,
            ),
            _ => format!(
                "MTRIX{} {}{}{}{}     {}    {}",
                row + 1,
                index,
                values[0],
                values[1],
                values[2],
                fit(record, "vector", format!("{:>10.5}", translation[row]), 10)?,
                if given { '1' } else { ' ' },
            ),
        };
    }
    Ok(lines)
}

fn format_ssbond_line(bond: &DisulfideBond) -> Result<String, PdbError> {
    const R: RecordKind = RecordKind::SsBond;
    Ok(format!(
        "SSBOND {} CYS {} {}    CYS {} {}",
        fit(R, "serial", format!("{:>3}", bond.serial), 3)?,
        fit_char(R, "first chain id", bond.first.chain_id)?,
        fit(R, "first residue number", format!("{:>4}", bond.first.residue_number), 4)?,
        fit_char(R, "second chain id", bond.second.chain_id)?,
        fit(R, "second residue number", format!("{:>4}", bond.second.residue_number), 4)?,
    ))
}

fn format_crystal_line(cell: &UnitCell) -> Result<String, PdbError> {
    const R: RecordKind = RecordKind::Crystal;
    let z = match cell.z {
        Some(z) => fit(R, "Z value", format!("{:>4}", z), 4)?,
        None => String::new(),
    };
    Ok(format!(
        "CRYST1{}{}{}{}{}{} {}{}",
        fit(R, "a", format!("{:>9.3}", cell.a), 9)?,
        fit(R, "b", format!("{:>9.3}", cell.b), 9)?,
        fit(R, "c", format!("{:>9.3}", cell.c), 9)?,
        fit(R, "alpha", format!("{:>7.2}", cell.alpha), 7)?,
        fit(R, "beta", format!("{:>7.2}", cell.beta), 7)?,
        fit(R, "gamma", format!("{:>7.2}", cell.gamma), 7)?,
        fit(R, "space group", format!("{:<11}", cell.space_group), 11)?,
        z,
    ))
}

/// Writes a structure as PDB text.
///
/// Emits, in order, the record kinds enabled in `options` (`REMARK 290`
/// symmetry triples, `SSBOND`, `CRYST1`, `MTRIX` triples), then one `ATOM`
/// line per atom, then a bare `END` with no trailing newline.
///
/// # Errors
///
/// Returns [`PdbError::FieldOverflow`] if a value does not fit its column, or
/// [`PdbError::Io`] if writing fails. Lines before the failing record may
/// already have been written.
pub fn write_structure<W: Write + ?Sized>(
    structure: &Structure,
    options: &WriteOptions,
    writer: &mut W,
) -> Result<(), PdbError> {
    if options.symmetries {
        for op in structure.symmetries() {
            let lines = format_operator_lines(
                RecordKind::Symmetry,
                op.index,
                &op.rotation,
                &op.translation,
                false,
            )?;
            for line in lines {
                writeln!(writer, "{}", line)?;
            }
        }
    }
    if options.bonds {
        for bond in structure.bonds() {
            writeln!(writer, "{}", format_ssbond_line(bond)?)?;
        }
    }
    if options.crystal {
        if let Some(cell) = structure.crystal() {
            writeln!(writer, "{}", format_crystal_line(cell)?)?;
        }
    }
    if options.matrices {
        for m in structure.matrices() {
            let lines = format_operator_lines(
                RecordKind::Matrix,
                m.index,
                &m.matrix,
                &m.vector,
                m.given,
            )?;
            for line in lines {
                writeln!(writer, "{}", line)?;
            }
        }
    }

    for atom in structure.atoms() {
        writeln!(writer, "{}", format_atom_line(atom)?)?;
    }
    write!(writer, "END")?;
    writer.flush()?;

    debug!("Wrote {} atom records.", structure.atom_count());
    Ok(())
}
