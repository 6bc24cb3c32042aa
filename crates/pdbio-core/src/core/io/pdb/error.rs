use super::columns::Columns;
use super::records::RecordKind;
use crate::core::io::traits::FileAccessError;
use std::io;
use thiserror::Error;

/// Errors raised while reading or writing PDB files.
#[derive(Debug, Error)]
pub enum PdbError {
    #[error(transparent)]
    FileAccess(#[from] FileAccessError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {issue}")]
    Parse { line: usize, issue: PdbIssue },
    #[error("Cannot write {record} field '{field}': '{value}' does not fit in {width} columns")]
    FieldOverflow {
        record: RecordKind,
        field: &'static str,
        value: String,
        width: usize,
    },
}

/// A problem with one input line or with a multi-line record group.
///
/// In lenient mode each issue becomes a warning and the noted recovery is
/// applied; in strict mode it aborts the read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PdbIssue {
    /// The line ends before the last required column. The line is skipped.
    #[error("{record} record is too short ({actual} bytes, at least {required} required)")]
    LineTooShort {
        record: RecordKind,
        required: usize,
        actual: usize,
    },
    /// A numeric field is blank or malformed. Zero is used instead.
    #[error("Invalid {field} in columns {columns} of {record} record (value: '{value}')")]
    InvalidNumber {
        record: RecordKind,
        field: &'static str,
        columns: Columns,
        value: String,
    },
    /// An operator index below 1. The row is skipped.
    #[error("{record} index {index} is out of range (indices start at 1)")]
    IndexOutOfRange { record: RecordKind, index: i32 },
    /// The same row of the same operator was given twice. The later row wins.
    #[error("{record} {index} has row {row} more than once")]
    DuplicateRow {
        record: RecordKind,
        index: i32,
        row: usize,
    },
    /// An operator never received all three rows. It is dropped.
    #[error("{record} {index} is missing row(s) {missing:?}")]
    IncompleteOperator {
        record: RecordKind,
        index: i32,
        missing: Vec<usize>,
    },
    /// Operator indices do not run 1, 2, 3, ... The operators are kept.
    #[error("{record} indices are not contiguous: expected {expected}, found {found}")]
    NonContiguousIndex {
        record: RecordKind,
        expected: i32,
        found: i32,
    },
}
