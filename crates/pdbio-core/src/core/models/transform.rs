use nalgebra::{Matrix3, Vector3};

/// A crystallographic symmetry operator from a `REMARK 290   SMTRY` triple.
///
/// The operator is stored verbatim; it is never applied to coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryOperator {
    /// 1-based operator number shared by the three source lines.
    pub index: i32,
    pub rotation: Matrix3<f64>,
    pub translation: Vector3<f64>,
}

impl SymmetryOperator {
    pub fn new(index: i32, rotation: Matrix3<f64>, translation: Vector3<f64>) -> Self {
        Self {
            index,
            rotation,
            translation,
        }
    }

    pub fn identity(index: i32) -> Self {
        Self::new(index, Matrix3::identity(), Vector3::zeros())
    }
}

/// A non-crystallographic transformation from an `MTRIX1`/`MTRIX2`/`MTRIX3` triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformMatrix {
    /// 1-based serial number shared by the three source lines.
    pub index: i32,
    pub matrix: Matrix3<f64>,
    pub vector: Vector3<f64>,
    /// `true` when the coordinates for this transformation are already
    /// present in the entry (the `iGiven` flag in column 60).
    pub given: bool,
}

impl TransformMatrix {
    pub fn new(index: i32, matrix: Matrix3<f64>, vector: Vector3<f64>, given: bool) -> Self {
        Self {
            index,
            matrix,
            vector,
            given,
        }
    }
}
