use std::str::FromStr;

/// How per-line problems in the input are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strictness {
    /// Record the problem as a warning, apply its recovery and keep reading.
    #[default]
    Lenient,
    /// Abort the read at the first problem.
    Strict,
}

impl FromStr for Strictness {
    type Err = ();

    /// Parses `"lenient"` or `"strict"`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Strictness::Lenient),
            "strict" => Ok(Strictness::Strict),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    pub strictness: Strictness,
}

impl ReadOptions {
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }

    pub fn builder() -> ReadOptionsBuilder {
        ReadOptionsBuilder::new()
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}

#[derive(Default)]
pub struct ReadOptionsBuilder {
    strictness: Option<Strictness>,
}

impl ReadOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = Some(strictness);
        self
    }

    pub fn build(self) -> ReadOptions {
        ReadOptions {
            strictness: self.strictness.unwrap_or_default(),
        }
    }
}

/// Selects the record kinds emitted in addition to the atoms.
///
/// Atoms are always written. The default writes atoms only; [`WriteOptions::complete`]
/// writes every kind the reader understands, so the output re-reads into an
/// equal structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    pub symmetries: bool,
    pub bonds: bool,
    pub crystal: bool,
    pub matrices: bool,
}

impl WriteOptions {
    pub fn atoms_only() -> Self {
        Self::default()
    }

    pub fn complete() -> Self {
        Self {
            symmetries: true,
            bonds: true,
            crystal: true,
            matrices: true,
        }
    }

    pub fn builder() -> WriteOptionsBuilder {
        WriteOptionsBuilder::new()
    }

    pub fn is_atoms_only(&self) -> bool {
        *self == Self::atoms_only()
    }
}

#[derive(Default)]
pub struct WriteOptionsBuilder {
    symmetries: Option<bool>,
    bonds: Option<bool>,
    crystal: Option<bool>,
    matrices: Option<bool>,
}

impl WriteOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symmetries(mut self, enabled: bool) -> Self {
        self.symmetries = Some(enabled);
        self
    }
    pub fn bonds(mut self, enabled: bool) -> Self {
        self.bonds = Some(enabled);
        self
    }
    pub fn crystal(mut self, enabled: bool) -> Self {
        self.crystal = Some(enabled);
        self
    }
    pub fn matrices(mut self, enabled: bool) -> Self {
        self.matrices = Some(enabled);
        self
    }

    pub fn build(self) -> WriteOptions {
        WriteOptions {
            symmetries: self.symmetries.unwrap_or(false),
            bonds: self.bonds.unwrap_or(false),
            crystal: self.crystal.unwrap_or(false),
            matrices: self.matrices.unwrap_or(false),
        }
    }
}
