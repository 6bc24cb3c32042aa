/// Identifies a residue by its chain and sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueRef {
    pub chain_id: char,
    pub residue_number: i32,
}

impl ResidueRef {
    pub fn new(chain_id: char, residue_number: i32) -> Self {
        Self {
            chain_id,
            residue_number,
        }
    }
}

/// A disulfide bond between two cysteine residues, as declared by an `SSBOND` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisulfideBond {
    /// Serial number of the record (columns 8-10).
    pub serial: i32,
    pub first: ResidueRef,
    pub second: ResidueRef,
}

impl DisulfideBond {
    pub fn new(serial: i32, first: ResidueRef, second: ResidueRef) -> Self {
        Self {
            serial,
            first,
            second,
        }
    }
}
