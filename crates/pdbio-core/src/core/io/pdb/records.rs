//! Fixed-column parsers for the individual PDB record kinds.

use super::columns::{Columns, FieldParse, char_at, parse_field};
use super::error::{PdbError, PdbIssue};
use super::report::Diagnostics;
use crate::core::models::atom::Atom;
use crate::core::models::bond::{DisulfideBond, ResidueRef};
use crate::core::models::crystal::UnitCell;
use nalgebra::Point3;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// The record kinds understood by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `ATOM` or `HETATM`.
    Atom,
    /// `SSBOND`.
    SsBond,
    /// `REMARK 290   SMTRY1`..`3`.
    Symmetry,
    /// `MTRIX1`..`3`.
    Matrix,
    /// `CRYST1`.
    Crystal,
}

impl RecordKind {
    /// Classifies a raw line by its leading bytes.
    ///
    /// Prefixes are tested in the order SSBOND, ATOM/HETATM, symmetry remark,
    /// MTRIX, CRYST; lines matching none of them yield `None`.
    pub fn classify(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"SSBOND") {
            Some(RecordKind::SsBond)
        } else if bytes.starts_with(b"ATOM") || bytes.starts_with(b"HETATM") {
            Some(RecordKind::Atom)
        } else if bytes.starts_with(b"REMARK 290   SMTRY") {
            Some(RecordKind::Symmetry)
        } else if bytes.starts_with(b"MTRIX") {
            Some(RecordKind::Matrix)
        } else if bytes.starts_with(b"CRYST") {
            Some(RecordKind::Crystal)
        } else {
            None
        }
    }

    /// Byte length a line of this kind must reach to hold all required columns.
    pub fn min_len(self) -> usize {
        match self {
            RecordKind::Atom => atom_cols::TEMP_FACTOR.end,
            RecordKind::SsBond => ssbond_cols::RES_SEQ_2.end,
            RecordKind::Symmetry => SYMMETRY_LAYOUT.translation.end,
            RecordKind::Matrix => MATRIX_LAYOUT.translation.end,
            RecordKind::Crystal => crystal_cols::GAMMA.end,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Atom => "ATOM/HETATM",
            RecordKind::SsBond => "SSBOND",
            RecordKind::Symmetry => "SMTRY",
            RecordKind::Matrix => "MTRIX",
            RecordKind::Crystal => "CRYST1",
        };
        f.write_str(name)
    }
}

mod atom_cols {
    use super::Columns;

    pub const SERIAL: Columns = Columns::new(6, 11);
    pub const NAME: Columns = Columns::new(12, 16);
    pub const ALT_LOC: usize = 16;
    pub const RES_NAME: Columns = Columns::new(17, 20);
    pub const CHAIN_ID: usize = 21;
    pub const RES_SEQ: Columns = Columns::new(22, 26);
    pub const X: Columns = Columns::new(30, 38);
    pub const Y: Columns = Columns::new(38, 46);
    pub const Z: Columns = Columns::new(46, 54);
    pub const OCCUPANCY: Columns = Columns::new(54, 60);
    pub const TEMP_FACTOR: Columns = Columns::new(60, 66);
    pub const SEGMENT: Columns = Columns::new(72, 76);
}

mod ssbond_cols {
    use super::Columns;

    pub const SERIAL: Columns = Columns::new(7, 10);
    pub const CHAIN_ID_1: usize = 15;
    pub const RES_SEQ_1: Columns = Columns::new(17, 21);
    pub const CHAIN_ID_2: usize = 29;
    pub const RES_SEQ_2: Columns = Columns::new(31, 35);
}

mod crystal_cols {
    use super::Columns;

    pub const A: Columns = Columns::new(6, 15);
    pub const B: Columns = Columns::new(15, 24);
    pub const C: Columns = Columns::new(24, 33);
    pub const ALPHA: Columns = Columns::new(33, 40);
    pub const BETA: Columns = Columns::new(40, 47);
    pub const GAMMA: Columns = Columns::new(47, 54);
    pub const SPACE_GROUP: Columns = Columns::new(55, 66);
    pub const Z: Columns = Columns::new(66, 70);
    pub const RAW_LINE_LEN: usize = 80;
}

/// Column layout shared by the three-row operator records.
struct OperatorLayout {
    row: usize,
    index: Columns,
    values: [Columns; 3],
    value_fields: [&'static str; 3],
    translation: Columns,
    translation_field: &'static str,
    given: Option<usize>,
}

const SYMMETRY_LAYOUT: OperatorLayout = OperatorLayout {
    row: 18,
    index: Columns::new(20, 23),
    values: [
        Columns::new(23, 33),
        Columns::new(33, 43),
        Columns::new(43, 53),
    ],
    value_fields: ["rotation column 1", "rotation column 2", "rotation column 3"],
    translation: Columns::new(53, 68),
    translation_field: "translation",
    given: None,
};

const MATRIX_LAYOUT: OperatorLayout = OperatorLayout {
    row: 5,
    index: Columns::new(7, 10),
    values: [
        Columns::new(10, 20),
        Columns::new(20, 30),
        Columns::new(30, 40),
    ],
    value_fields: ["matrix column 1", "matrix column 2", "matrix column 3"],
    translation: Columns::new(45, 55),
    translation_field: "vector",
    given: Some(59),
};

/// One row of a symmetry operator or transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OperatorRow {
    /// 0-based row within the operator.
    pub row: usize,
    /// 1-based operator index.
    pub index: i32,
    pub values: [f64; 3],
    pub translation: f64,
    pub given: bool,
}

/// A classified input line with its 1-based line number.
///
/// The line is kept as raw bytes; each field is decoded on its own.
pub(crate) struct RecordLine<'a> {
    bytes: &'a [u8],
    number: usize,
    kind: RecordKind,
}

impl<'a> RecordLine<'a> {
    pub(crate) fn new(bytes: &'a [u8], number: usize, kind: RecordKind) -> Self {
        Self {
            bytes,
            number,
            kind,
        }
    }

    pub(crate) fn number(&self) -> usize {
        self.number
    }

    fn text_field(&self, columns: Columns) -> Cow<'a, str> {
        columns.text(self.bytes)
    }

    fn char_field(&self, column: usize) -> char {
        char_at(self.bytes, column)
    }

    fn has_required_len(&self, diagnostics: &mut Diagnostics) -> Result<bool, PdbError> {
        let required = self.kind.min_len();
        if self.bytes.len() >= required {
            return Ok(true);
        }
        diagnostics.report(
            self.number,
            PdbIssue::LineTooShort {
                record: self.kind,
                required,
                actual: self.bytes.len(),
            },
        )?;
        Ok(false)
    }

    fn numeric<T: FromStr + Default>(
        &self,
        field: &'static str,
        columns: Columns,
        diagnostics: &mut Diagnostics,
    ) -> Result<T, PdbError> {
        let raw = columns.text(self.bytes);
        let parsed = parse_field(&raw);
        if !parsed.is_clean() {
            diagnostics.report(
                self.number,
                PdbIssue::InvalidNumber {
                    record: self.kind,
                    field,
                    columns,
                    value: raw.into_owned(),
                },
            )?;
        }
        Ok(parsed.value())
    }
}

/// Parses an `ATOM`/`HETATM` line.
///
/// The atom name keeps only its first whitespace-delimited token; line-break
/// bytes in the segment field are treated as spaces.
///
/// # Return
///
/// Returns `Ok(None)` if the line was too short and has been reported as a warning.
pub(crate) fn parse_atom(
    line: &RecordLine<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<Option<Atom>, PdbError> {
    use atom_cols::*;

    if !line.has_required_len(diagnostics)? {
        return Ok(None);
    }

    let serial = line.numeric("serial", SERIAL, diagnostics)?;
    let name_field = line.text_field(NAME);
    let name = name_field.split_whitespace().next().unwrap_or("");
    let residue_number = line.numeric("residue number", RES_SEQ, diagnostics)?;
    let x = line.numeric("x coordinate", X, diagnostics)?;
    let y = line.numeric("y coordinate", Y, diagnostics)?;
    let z = line.numeric("z coordinate", Z, diagnostics)?;
    let occupancy = line.numeric("occupancy", OCCUPANCY, diagnostics)?;
    let temperature_factor = line.numeric("temperature factor", TEMP_FACTOR, diagnostics)?;
    let segment = SEGMENT.text(line.bytes).replace(['\n', '\r'], " ");

    Ok(Some(Atom {
        serial,
        name: name.to_string(),
        alt_loc: line.char_field(ALT_LOC),
        residue_name: line.text_field(RES_NAME).into_owned(),
        chain_id: line.char_field(CHAIN_ID),
        residue_number,
        position: Point3::new(x, y, z),
        occupancy,
        temperature_factor,
        segment: segment.trim().to_string(),
    }))
}

/// Parses an `SSBOND` line into its two residue endpoints.
pub(crate) fn parse_ssbond(
    line: &RecordLine<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<Option<DisulfideBond>, PdbError> {
    use ssbond_cols::*;

    if !line.has_required_len(diagnostics)? {
        return Ok(None);
    }

    let serial = line.numeric("serial", SERIAL, diagnostics)?;
    let first = ResidueRef::new(
        line.char_field(CHAIN_ID_1),
        line.numeric("first residue number", RES_SEQ_1, diagnostics)?,
    );
    let second = ResidueRef::new(
        line.char_field(CHAIN_ID_2),
        line.numeric("second residue number", RES_SEQ_2, diagnostics)?,
    );
    Ok(Some(DisulfideBond::new(serial, first, second)))
}

/// Parses one `REMARK 290   SMTRYn` line.
pub(crate) fn parse_symmetry_row(
    line: &RecordLine<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<Option<OperatorRow>, PdbError> {
    parse_operator_row(line, &SYMMETRY_LAYOUT, diagnostics)
}

/// Parses one `MTRIXn` line.
pub(crate) fn parse_matrix_row(
    line: &RecordLine<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<Option<OperatorRow>, PdbError> {
    parse_operator_row(line, &MATRIX_LAYOUT, diagnostics)
}

fn parse_operator_row(
    line: &RecordLine<'_>,
    layout: &OperatorLayout,
    diagnostics: &mut Diagnostics,
) -> Result<Option<OperatorRow>, PdbError> {
    let row_char = line.char_field(layout.row);
    let row = match row_char.to_digit(10) {
        Some(n @ 1..=3) => n as usize - 1,
        _ => {
            trace!(
                "Line {}: ignoring {} line with row '{}'",
                line.number,
                line.kind,
                row_char
            );
            return Ok(None);
        }
    };

    if !line.has_required_len(diagnostics)? {
        return Ok(None);
    }

    let raw_index = layout.index.text(line.bytes);
    let index = match parse_field::<i32>(&raw_index) {
        FieldParse::Clean(index) if index >= 1 => index,
        FieldParse::Clean(index) => {
            diagnostics.report(
                line.number,
                PdbIssue::IndexOutOfRange {
                    record: line.kind,
                    index,
                },
            )?;
            return Ok(None);
        }
        FieldParse::Fallback(_) => {
            diagnostics.report(
                line.number,
                PdbIssue::InvalidNumber {
                    record: line.kind,
                    field: "index",
                    columns: layout.index,
                    value: raw_index.into_owned(),
                },
            )?;
            return Ok(None);
        }
    };

    let mut values = [0.0; 3];
    for (slot, (columns, field)) in values
        .iter_mut()
        .zip(layout.values.iter().zip(layout.value_fields))
    {
        *slot = line.numeric(field, *columns, diagnostics)?;
    }
    let translation = line.numeric(layout.translation_field, layout.translation, diagnostics)?;
    let given = layout
        .given
        .is_some_and(|column| line.char_field(column) == '1');

    Ok(Some(OperatorRow {
        row,
        index,
        values,
        translation,
        given,
    }))
}

/// Parses a `CRYST1` line, keeping the source line for reference.
pub(crate) fn parse_crystal(
    line: &RecordLine<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<Option<UnitCell>, PdbError> {
    use crystal_cols::*;

    if !line.has_required_len(diagnostics)? {
        return Ok(None);
    }

    let a = line.numeric("a", A, diagnostics)?;
    let b = line.numeric("b", B, diagnostics)?;
    let c = line.numeric("c", C, diagnostics)?;
    let alpha = line.numeric("alpha", ALPHA, diagnostics)?;
    let beta = line.numeric("beta", BETA, diagnostics)?;
    let gamma = line.numeric("gamma", GAMMA, diagnostics)?;

    let raw_z = line.text_field(Z);
    let z = if raw_z.is_empty() {
        None
    } else {
        match parse_field::<i32>(&raw_z) {
            FieldParse::Clean(z) => Some(z),
            FieldParse::Fallback(_) => {
                diagnostics.report(
                    line.number,
                    PdbIssue::InvalidNumber {
                        record: line.kind,
                        field: "Z value",
                        columns: Z,
                        value: raw_z.into_owned(),
                    },
                )?;
                None
            }
        }
    };

    let raw_line = &line.bytes[..line.bytes.len().min(RAW_LINE_LEN)];

    Ok(Some(UnitCell {
        a,
        b,
        c,
        alpha,
        beta,
        gamma,
        space_group: line.text_field(SPACE_GROUP).into_owned(),
        z,
        line: String::from_utf8_lossy(raw_line).into_owned(),
    }))
}
