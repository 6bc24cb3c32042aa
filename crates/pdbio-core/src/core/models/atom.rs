use nalgebra::Point3;

/// A single `ATOM` or `HETATM` record.
///
/// String fields are stored trimmed; the writer re-pads them to their column
/// widths. A blank alternate-location indicator is stored as `' '`.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atom serial number (columns 7-11).
    pub serial: i32,
    /// Atom name, e.g. `"CA"` (columns 13-16).
    pub name: String,
    /// Alternate location indicator (column 17).
    pub alt_loc: char,
    /// Residue name, e.g. `"ALA"` (columns 18-20).
    pub residue_name: String,
    /// Chain identifier (column 22).
    pub chain_id: char,
    /// Residue sequence number (columns 23-26).
    pub residue_number: i32,
    /// Orthogonal coordinates in Angstroms (columns 31-54).
    pub position: Point3<f64>,
    /// Occupancy (columns 55-60).
    pub occupancy: f64,
    /// Temperature factor (columns 61-66).
    pub temperature_factor: f64,
    /// Segment identifier (columns 73-76).
    pub segment: String,
}

impl Atom {
    /// Creates an atom with full occupancy, a zero temperature factor and
    /// blank alternate location and segment.
    ///
    /// # Arguments
    ///
    /// * `serial` - The atom serial number.
    /// * `name` - The atom name.
    /// * `residue_name` - The name of the residue the atom belongs to.
    /// * `chain_id` - The chain identifier.
    /// * `residue_number` - The residue sequence number.
    /// * `position` - The Cartesian coordinates of the atom.
    pub fn new(
        serial: i32,
        name: &str,
        residue_name: &str,
        chain_id: char,
        residue_number: i32,
        position: Point3<f64>,
    ) -> Self {
        Self {
            serial,
            name: name.to_string(),
            alt_loc: ' ',
            residue_name: residue_name.to_string(),
            chain_id,
            residue_number,
            position,
            occupancy: 1.0,
            temperature_factor: 0.0,
            segment: String::new(),
        }
    }

    /// Returns `true` if the atom carries a non-blank alternate location indicator.
    pub fn is_alternate(&self) -> bool {
        !self.alt_loc.is_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_uses_blank_defaults() {
        let atom = Atom::new(7, "CA", "ALA", 'A', 10, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.serial, 7);
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.alt_loc, ' ');
        assert_eq!(atom.occupancy, 1.0);
        assert_eq!(atom.temperature_factor, 0.0);
        assert!(atom.segment.is_empty());
        assert!(!atom.is_alternate());
    }

    #[test]
    fn is_alternate_detects_non_blank_indicator() {
        let mut atom = Atom::new(1, "N", "GLY", 'B', 1, Point3::origin());
        atom.alt_loc = 'A';
        assert!(atom.is_alternate());
    }
}
