use crate::cli::InfoArgs;
use crate::error::Result;
use pdbio::core::io::options::ReadOptions;
use pdbio::core::io::pdb::{PdbFile, ReadReport};
use pdbio::core::io::traits::StructureFile;
use pdbio::core::models::structure::Structure;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: InfoArgs, read_options: &ReadOptions) -> Result<()> {
    info!("Summarizing '{}'.", args.input.display());
    let (structure, report) = PdbFile::read_from_path(&args.input, read_options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&structure, &report, &mut out)?;
    out.flush()?;
    Ok(())
}

fn render<W: Write>(structure: &Structure, report: &ReadReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Record lines:      {}", report.counts.total())?;
    writeln!(out, "Atoms:             {}", structure.atom_count())?;
    writeln!(out, "Disulfide bonds:   {}", structure.bond_count())?;
    writeln!(out, "Symmetry entries:  {}", structure.symmetry_count())?;
    writeln!(out, "Transform matrices: {}", structure.matrix_count())?;

    match structure.crystal() {
        Some(cell) => {
            let [a, b, c] = cell.lengths();
            let [alpha, beta, gamma] = cell.angles();
            writeln!(
                out,
                "Unit cell:         a={a:.3} b={b:.3} c={c:.3} alpha={alpha:.2} beta={beta:.2} gamma={gamma:.2} ({})",
                cell.space_group
            )?;
        }
        None => writeln!(out, "Unit cell:         none")?,
    }

    if report.has_warnings() {
        writeln!(out, "Warnings ({}):", report.warnings.len())?;
        for warning in &report.warnings {
            writeln!(out, "  line {}: {}", warning.line, warning.issue)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdbio::core::io::pdb::read_structure;
    use std::io::Cursor;

    const INPUT: &str = "\
CRYST1   52.000   58.600   63.500  90.00  90.00  90.00 P 21 21 21    4
ATOM      1  N   ALA A   1      11.104   6.134  -6.504  1.00  0.00           N
ATOM      2  CA  ALA A   1      11.639   6.071  -5.147  1.00  0.00
ATOM      3  C   ALA A
END
";

    fn summarize(input: &str) -> String {
        let (structure, report) =
            read_structure(&mut Cursor::new(input), &ReadOptions::default()).unwrap();
        let mut out = Vec::new();
        render(&structure, &report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn summary_lists_counts_cell_and_warnings() {
        let text = summarize(INPUT);

        assert!(text.contains("Record lines:      4"));
        assert!(text.contains("Atoms:             2"));
        assert!(text.contains("Disulfide bonds:   0"));
        assert!(text.contains("a=52.000 b=58.600 c=63.500"));
        assert!(text.contains("(P 21 21 21)"));
        assert!(text.contains("Warnings (1):"));
        assert!(text.contains("line 4:"));
    }

    #[test]
    fn summary_without_cell_or_warnings() {
        let text = summarize("END\n");

        assert!(text.contains("Record lines:      0"));
        assert!(text.contains("Atoms:             0"));
        assert!(text.contains("Unit cell:         none"));
        assert!(!text.contains("Warnings"));
    }
}
