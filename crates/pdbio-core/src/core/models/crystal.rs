/// Unit-cell parameters from a `CRYST1` record.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCell {
    /// Cell edge lengths in Angstroms.
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Cell angles in degrees.
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    /// Space group symbol (columns 56-66), trimmed.
    pub space_group: String,
    /// Number of polymeric chains in the unit cell (columns 67-70), if present.
    pub z: Option<i32>,
    /// The source line, truncated to 80 bytes.
    pub line: String,
}

impl UnitCell {
    /// Creates a unit cell in space group `P 1` with no source line.
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
            space_group: "P 1".to_string(),
            z: Some(1),
            line: String::new(),
        }
    }

    pub fn lengths(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn angles(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }
}
