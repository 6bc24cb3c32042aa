use pdbio::core::io::options::Strictness;

pub struct DefaultsConfig {
    pub strictness: Strictness,
    pub write_symmetries: bool,
    pub write_bonds: bool,
    pub write_crystal: bool,
    pub write_matrices: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::Lenient,
            write_symmetries: false,
            write_bonds: false,
            write_crystal: false,
            write_matrices: false,
        }
    }
}
