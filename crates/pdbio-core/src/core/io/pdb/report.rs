use super::error::{PdbError, PdbIssue};
use super::records::RecordKind;
use crate::core::io::options::Strictness;
use tracing::warn;

/// Number of lines of each recognized record kind seen in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordCounts {
    pub atom_lines: usize,
    pub ssbond_lines: usize,
    pub symmetry_lines: usize,
    pub matrix_lines: usize,
    pub crystal_lines: usize,
}

impl RecordCounts {
    pub(crate) fn record(&mut self, kind: RecordKind) {
        match kind {
            RecordKind::Atom => self.atom_lines += 1,
            RecordKind::SsBond => self.ssbond_lines += 1,
            RecordKind::Symmetry => self.symmetry_lines += 1,
            RecordKind::Matrix => self.matrix_lines += 1,
            RecordKind::Crystal => self.crystal_lines += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.atom_lines
            + self.ssbond_lines
            + self.symmetry_lines
            + self.matrix_lines
            + self.crystal_lines
    }
}

/// An issue that was recovered from while reading leniently.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    /// 1-based line number the issue refers to.
    pub line: usize,
    pub issue: PdbIssue,
}

/// Diagnostics returned alongside a parsed structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadReport {
    pub counts: RecordCounts,
    pub warnings: Vec<ParseWarning>,
}

impl ReadReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Routes issues according to the configured strictness.
pub(crate) struct Diagnostics {
    strictness: Strictness,
    warnings: Vec<ParseWarning>,
}

impl Diagnostics {
    pub(crate) fn new(strictness: Strictness) -> Self {
        Self {
            strictness,
            warnings: Vec::new(),
        }
    }

    /// Records `issue` as a warning, or returns it as an error in strict mode.
    pub(crate) fn report(&mut self, line: usize, issue: PdbIssue) -> Result<(), PdbError> {
        match self.strictness {
            Strictness::Strict => Err(PdbError::Parse { line, issue }),
            Strictness::Lenient => {
                warn!("Line {}: {}", line, issue);
                self.warnings.push(ParseWarning { line, issue });
                Ok(())
            }
        }
    }

    pub(crate) fn into_warnings(self) -> Vec<ParseWarning> {
        self.warnings
    }
}
