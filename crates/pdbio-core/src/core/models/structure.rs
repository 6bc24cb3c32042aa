use super::atom::Atom;
use super::bond::DisulfideBond;
use super::crystal::UnitCell;
use super::transform::{SymmetryOperator, TransformMatrix};

/// Container for every record parsed from a PDB file.
///
/// Records of each kind are kept in file order, except symmetry operators and
/// transformation matrices, which are ordered by their 1-based index because
/// their rows may be spread across the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    atoms: Vec<Atom>,
    bonds: Vec<DisulfideBond>,
    symmetries: Vec<SymmetryOperator>,
    matrices: Vec<TransformMatrix>,
    crystal: Option<UnitCell>,
}

impl Structure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[DisulfideBond] {
        &self.bonds
    }

    pub fn symmetries(&self) -> &[SymmetryOperator] {
        &self.symmetries
    }

    pub fn matrices(&self) -> &[TransformMatrix] {
        &self.matrices
    }

    pub fn crystal(&self) -> Option<&UnitCell> {
        self.crystal.as_ref()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn symmetry_count(&self) -> usize {
        self.symmetries.len()
    }

    pub fn matrix_count(&self) -> usize {
        self.matrices.len()
    }

    /// Returns `true` if the structure holds no records of any kind.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
            && self.bonds.is_empty()
            && self.symmetries.is_empty()
            && self.matrices.is_empty()
            && self.crystal.is_none()
    }

    /// Looks up a symmetry operator by its 1-based index.
    ///
    /// # Return
    ///
    /// Returns `Some(&SymmetryOperator)` if an operator with that index exists.
    pub fn symmetry(&self, index: i32) -> Option<&SymmetryOperator> {
        self.symmetries.iter().find(|op| op.index == index)
    }

    /// Looks up a transformation matrix by its 1-based index.
    pub fn matrix(&self, index: i32) -> Option<&TransformMatrix> {
        self.matrices.iter().find(|m| m.index == index)
    }

    pub fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn add_bond(&mut self, bond: DisulfideBond) {
        self.bonds.push(bond);
    }

    /// Inserts a symmetry operator, keeping the list ordered by index.
    ///
    /// An operator with the same index replaces the existing one.
    pub fn add_symmetry(&mut self, operator: SymmetryOperator) {
        match self
            .symmetries
            .binary_search_by_key(&operator.index, |op| op.index)
        {
            Ok(pos) => self.symmetries[pos] = operator,
            Err(pos) => self.symmetries.insert(pos, operator),
        }
    }

    /// Inserts a transformation matrix, keeping the list ordered by index.
    ///
    /// A matrix with the same index replaces the existing one.
    pub fn add_matrix(&mut self, matrix: TransformMatrix) {
        match self.matrices.binary_search_by_key(&matrix.index, |m| m.index) {
            Ok(pos) => self.matrices[pos] = matrix,
            Err(pos) => self.matrices.insert(pos, matrix),
        }
    }

    /// Sets the unit cell, returning the one it replaces.
    pub fn set_crystal(&mut self, crystal: UnitCell) -> Option<UnitCell> {
        self.crystal.replace(crystal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::ResidueRef;
    use nalgebra::Point3;

    #[test]
    fn new_structure_is_empty() {
        let structure = Structure::new();

        assert!(structure.is_empty());
        assert_eq!(structure.atom_count(), 0);
        assert_eq!(structure.bond_count(), 0);
        assert_eq!(structure.symmetry_count(), 0);
        assert_eq!(structure.matrix_count(), 0);
        assert!(structure.crystal().is_none());
    }

    #[test]
    fn atoms_and_bonds_keep_insertion_order() {
        let mut structure = Structure::new();
        structure.add_atom(Atom::new(2, "CA", "ALA", 'A', 1, Point3::origin()));
        structure.add_atom(Atom::new(1, "N", "ALA", 'A', 1, Point3::origin()));
        structure.add_bond(DisulfideBond::new(
            1,
            ResidueRef::new('A', 6),
            ResidueRef::new('A', 127),
        ));

        let serials: Vec<i32> = structure.atoms().iter().map(|a| a.serial).collect();
        assert_eq!(serials, vec![2, 1]);
        assert_eq!(structure.bond_count(), 1);
        assert!(!structure.is_empty());
    }

    #[test]
    fn symmetries_are_ordered_by_index_and_replaced_on_collision() {
        let mut structure = Structure::new();
        structure.add_symmetry(SymmetryOperator::identity(3));
        structure.add_symmetry(SymmetryOperator::identity(1));
        structure.add_symmetry(SymmetryOperator::identity(2));

        let mut replacement = SymmetryOperator::identity(2);
        replacement.translation.y = 47.8;
        structure.add_symmetry(replacement);

        let indices: Vec<i32> = structure.symmetries().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(structure.symmetry(2).unwrap().translation.y, 47.8);
        assert!(structure.symmetry(4).is_none());
    }

    #[test]
    fn set_crystal_returns_previous_cell() {
        let mut structure = Structure::new();
        assert!(structure.set_crystal(UnitCell::new(1.0, 2.0, 3.0, 90.0, 90.0, 90.0)).is_none());

        let previous = structure.set_crystal(UnitCell::new(4.0, 5.0, 6.0, 90.0, 90.0, 120.0));

        assert_eq!(previous.unwrap().a, 1.0);
        assert_eq!(structure.crystal().unwrap().gamma, 120.0);
    }
}
