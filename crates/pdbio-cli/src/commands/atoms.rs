use crate::cli::AtomsArgs;
use crate::error::Result;
use pdbio::core::io::options::ReadOptions;
use pdbio::core::io::pdb::{PdbFile, format_atom_line};
use pdbio::core::io::traits::StructureFile;
use pdbio::core::models::atom::Atom;
use std::io::{self, Write};
use tracing::{debug, info};

pub fn run(args: AtomsArgs, read_options: &ReadOptions) -> Result<()> {
    let (structure, _) = PdbFile::read_from_path(&args.input, read_options)?;
    info!(
        "Printing {} of {} atoms.",
        args.limit.map_or(structure.atom_count(), |n| n.min(structure.atom_count())),
        structure.atom_count()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_atoms(structure.atoms(), args.limit, &mut out)?;
    out.flush()?;
    Ok(())
}

fn print_atoms<W: Write>(atoms: &[Atom], limit: Option<usize>, out: &mut W) -> Result<()> {
    let shown = limit.unwrap_or(atoms.len());
    for atom in atoms.iter().take(shown) {
        writeln!(out, "{}", format_atom_line(atom)?)?;
    }
    if shown < atoms.len() {
        debug!("{} atoms not shown.", atoms.len() - shown);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use nalgebra::Point3;

    fn atoms() -> Vec<Atom> {
        vec![
            Atom::new(1, "N", "ALA", 'A', 1, Point3::new(11.104, 6.134, -6.504)),
            Atom::new(2, "CA", "ALA", 'A', 1, Point3::new(11.639, 6.071, -5.147)),
            Atom::new(3, "C", "ALA", 'A', 1, Point3::new(13.0, 5.5, -5.0)),
        ]
    }

    fn printed(atoms: &[Atom], limit: Option<usize>) -> Vec<String> {
        let mut out = Vec::new();
        print_atoms(atoms, limit, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn prints_every_atom_without_limit() {
        let lines = printed(&atoms(), None);

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 80 && l.starts_with("ATOM  ")));
        assert_eq!(&lines[1][12..16], "CA  ");
    }

    #[test]
    fn limit_truncates_output() {
        assert_eq!(printed(&atoms(), Some(2)).len(), 2);
        assert_eq!(printed(&atoms(), Some(10)).len(), 3);
        assert!(printed(&atoms(), Some(0)).is_empty());
    }

    #[test]
    fn overflowing_atom_is_an_error() {
        let atom = Atom::new(123_456, "N", "ALA", 'A', 1, Point3::origin());
        let err = print_atoms(&[atom], None, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Pdb(_)));
    }
}
